//! Kino money calculator
//!
//! Evaluates money amount expressions such as `kino-calc 12,50 + 3,05 x 2`.

mod calc;

use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use kino_shared::AppConfig;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_tracing(&config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    info!(tokens = args.len(), "Evaluating expression");

    let evaluation = calc::evaluate(&args)?;
    for ordering in &evaluation.comparisons {
        println!("{}", calc::describe(*ordering));
    }
    println!("{}", evaluation.result);

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));

    let json = config
        .logging
        .json
        .then(|| fmt::layer().json().with_writer(std::io::stderr));
    let plain = (!config.logging.json).then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(plain)
        .init();
}
