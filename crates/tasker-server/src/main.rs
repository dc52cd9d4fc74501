//! Tasker - task management REST API

use clap::Parser;
use tasker_server::run;

/// Command line interface for the Tasker server
#[derive(Parser, Debug)]
#[command(name = "tasker")]
#[command(about = "Task management REST API with JWT authentication")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli.config.as_deref()).await
}
