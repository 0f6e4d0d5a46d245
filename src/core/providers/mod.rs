pub mod compatible;
pub mod factory;
pub mod http_client;
pub mod traits;

pub use compatible::OpenAiCompatibleExecutor;
pub use factory::{create_executor, resolve_api_key};
pub use http_client::build_http_client;
pub use traits::{PromptExecutor, ResponseFormat};
