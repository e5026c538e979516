//! Named API connections persisted across `cloudctl` invocations.
use clap::Args;

mod store;
mod structs;

pub use store::ContextStore;
pub use structs::Context;

const DEFAULT_CONTEXT: &str = "default";

/// Context-related CLI options.
#[derive(Args, Debug)]
pub struct ContextOpt {
    /// Override the API key used to authenticate requests.
    #[arg(long, global = true, env = "CLOUDCTL_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Override the URL of the API servers.
    #[arg(long, global = true, env = "CLOUDCTL_API_URL")]
    pub api_url: Option<String>,

    /// Path to the contexts store file.
    #[arg(long, global = true, env = "CLOUDCTL_CONTEXTS_FILE")]
    pub contexts_file: Option<String>,

    /// Use the specified context for all operations.
    #[arg(long, global = true, env = "CLOUDCTL_CONTEXT")]
    pub context: Option<String>,
}
