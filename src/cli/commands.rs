use clap::{Parser, Subcommand};

/// `verified-card` - AI-moderated profile card verification.
#[derive(Parser, Debug)]
#[command(name = "verified-card")]
#[command(version)]
#[command(about = "Verify profile cards with an AI oracle.", long_about = None)]
pub struct Cli {
    /// Log at DEBUG instead of INFO
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify a card against the configured generation backend
    Verify {
        /// Display name on the card
        #[arg(long)]
        name: String,

        /// Role (neuron, synapse intern, synapse, brain intern, brain, singularity)
        #[arg(long)]
        role: String,

        /// Provider to use (openrouter, openai, groq, ollama, custom:<url>, ...)
        #[arg(short, long)]
        provider: Option<String>,

        /// Model to use
        #[arg(long)]
        model: Option<String>,

        /// Skip the backend and use the local verifier
        #[arg(long)]
        offline: bool,
    },

    /// Print the oracle health-check string
    Health,

    /// Start the mock JSON-RPC gateway
    Gateway {
        /// Port to listen on (use 0 for random available port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
    },

    /// Send a verify_card call to a JSON-RPC endpoint
    Call {
        #[arg(long)]
        name: String,

        #[arg(long)]
        role: String,

        /// Endpoint URL (defaults to [rpc] url in config.toml)
        #[arg(long)]
        url: Option<String>,
    },

    /// Print the verification prompt for a card without sending it
    Prompt {
        #[arg(long)]
        name: String,

        #[arg(long)]
        role: String,
    },
}
