use clap::Parser;
use memocache_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod di;

const DEFAULT_KEYS: [&str; 7] = ["1", "2", "1", "3", "2", "4", "1"];

#[derive(Parser)]
#[command(name = "memocache")]
#[command(version)]
#[command(about = "Memocache - bounded LRU cache in front of a slow value source")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Maximum number of cached keys
    #[arg(short = 'n', long)]
    capacity: Option<usize>,

    /// Simulated source latency in milliseconds
    #[arg(short = 'l', long)]
    latency_ms: Option<u64>,

    /// Treat keys differing only in ASCII case as the same key
    #[arg(short = 'i', long)]
    case_insensitive: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log format (text, json)
    #[arg(long)]
    log_format: Option<String>,

    /// Print the run as JSON instead of one line per key
    #[arg(long)]
    json: bool,

    /// Keys to fetch, in order
    #[arg(value_name = "KEY")]
    keys: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        capacity: cli.capacity,
        case_insensitive_keys: cli.case_insensitive,
        latency_ms: cli.latency_ms,
        log_level: cli.log_level.clone(),
        log_format: cli.log_format.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting memocache v{}", env!("CARGO_PKG_VERSION"));

    let services = di::CacheServices::new(&config)?;

    let keys: Vec<String> = if cli.keys.is_empty() {
        DEFAULT_KEYS.iter().map(|k| k.to_string()).collect()
    } else {
        cli.keys
    };

    let report = services.fetch_sequence.execute(&keys).await?;
    let stats = services.cache_stats.execute();

    if cli.json {
        let output = serde_json::json!({
            "outcomes": report,
            "cache": stats,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for outcome in &report.outcomes {
        let label = if outcome.cache_hit { "cache hit" } else { "fetched" };
        println!(
            "{}: {} -> {} ({} ms)",
            label, outcome.key, outcome.value, outcome.elapsed_ms
        );
    }

    println!(
        "cache utilization: {}/{} ({:.0}%), hit rate {:.1}%",
        stats.count,
        stats.capacity,
        stats.utilization(),
        stats.hit_rate
    );

    Ok(())
}
