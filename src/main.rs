use clap::Parser;
use orion_llm_gateway::cli::{self, Cli, Command};
use orion_llm_gateway::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => cli::serve::run(AppConfig::load()?).await,
        Command::Keys(args) => cli::inspect::run_keys(args),
        Command::Models(args) => cli::inspect::run_models(args),
    }
}
