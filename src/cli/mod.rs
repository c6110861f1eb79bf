//! Command line entry points
//!
//! - `serve`: run the HTTP gateway (default)
//! - `keys`: report which provider API keys are configured
//! - `models`: list the model registry

pub mod inspect;
pub mod serve;

use clap::{Parser, Subcommand};

/// Orion LLM gateway - routes dashboard requests to hosted LLM providers
#[derive(Parser, Debug)]
#[command(name = "orion-llm-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the HTTP server
    Serve,

    /// Report API key presence for every registered model
    Keys(inspect::KeysArgs),

    /// List registered models
    Models(inspect::ModelsArgs),
}
