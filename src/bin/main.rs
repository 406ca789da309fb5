use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "likeamovie-server")]
#[command(about = "Movie discovery and AI recommendation backend", long_about = None)]
struct Args {
    /// YAML config file; API keys may also come from TMDB_API_KEY / GEMINI_API_KEY.
    #[arg(short, long)]
    config: Option<String>,
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let default_filter = if args.debug {
        "likeamovie_rs=debug,tower_http=debug"
    } else {
        "likeamovie_rs=info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = likeamovie_rs::run(args.config.as_deref(), args.debug).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
