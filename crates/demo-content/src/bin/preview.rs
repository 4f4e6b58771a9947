//! Preview script - runs one aggregation against the live providers
//!
//! Run with:
//! ```
//! cargo run -p demo-content --bin preview -- posts 5
//! cargo run -p demo-content --bin preview -- users
//! ```
//!
//! The count defaults to `DEFAULT_POST_LIMIT` or `DEFAULT_USER_COUNT`.

use anyhow::bail;
use demo_content::prelude::*;
use rand::{SeedableRng, rngs::StdRng};
use tracing_subscriber::EnvFilter;

fn default_count(kind: &str) -> usize {
    match kind {
        "users" => DEFAULT_USER_COUNT,
        _ => DEFAULT_POST_LIMIT,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let kind = args.next().unwrap_or_else(|| "posts".to_string());
    let n = match args.next() {
        Some(raw) => raw.parse::<usize>()?,
        None => default_count(&kind),
    };

    let aggregator = Aggregator::from_config(&ProviderConfig::default())?;
    let mut rng = StdRng::from_entropy();

    let json = match kind.as_str() {
        "posts" => serde_json::to_string_pretty(&aggregator.get_demo_posts(n, &mut rng).await)?,
        "users" => serde_json::to_string_pretty(&aggregator.get_demo_users(n, &mut rng).await)?,
        other => bail!("unknown content kind {other:?}, expected `posts` or `users`"),
    };

    tracing::info!(kind = %kind, count = n, "Preview completed");
    println!("{json}");

    Ok(())
}
