pub mod providers;
pub mod verification;
