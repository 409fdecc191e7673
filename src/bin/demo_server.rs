use cicd_demo::server;
use cicd_demo::utils::logger;
use clap::Parser;

#[derive(Parser)]
#[command(name = "demo-server")]
#[command(about = "Minimal web application deployed by the demo pipeline")]
struct Args {
    #[arg(long, env = "DEMO_HOST", default_value = "127.0.0.1")]
    host: String,

    #[arg(long, env = "DEMO_PORT", default_value = "5000")]
    port: u16,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting demo web application");

    if let Err(e) = server::serve(&args.host, args.port).await {
        tracing::error!("❌ Server error: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    Ok(())
}
