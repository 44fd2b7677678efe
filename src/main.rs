use clap::Parser;
use fan_pipeline::cli::{execute_run, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(error) = execute_run(&cli).await {
        eprintln!("❌ エラー: {error:#}");
        std::process::exit(1);
    }
}
