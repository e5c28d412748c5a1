use clap::Parser;

mod cli;
mod commands;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("rsf error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = risk_config::RiskConfig::load_with_dotenv()?;
    let client = risk_client::AnalysisClient::new(&config);
    let flags = cli.global_flags();

    match cli.command {
        cli::Commands::Projects => commands::projects::handle(&client, &flags).await,
        cli::Commands::Select(args) => commands::select::handle(client, &args, &flags).await,
        cli::Commands::Analyze(args) => commands::analyze::handle(&client, &args, &flags).await,
        cli::Commands::Report(args) => commands::report::handle(&client, &args, &flags).await,
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("RISKSURFACE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
