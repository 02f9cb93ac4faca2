use clap::Parser;
use std::net::SocketAddr;
use stubdns_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "stubdns")]
#[command(version)]
#[command(about = "stubdns - minimal caching DNS stub resolver (A records over UDP)")]
struct Cli {
    /// Domains to resolve, in order. Repeat a name to see it served from cache.
    #[arg(
        value_name = "DOMAIN",
        required_unless_present_any = ["list_cache", "stats", "clear_cache"]
    )]
    domains: Vec<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Upstream server, e.g. 1.1.1.1:53
    #[arg(short = 's', long, value_name = "ADDR")]
    server: Option<SocketAddr>,

    /// Per-attempt timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Extra attempts after a timeout or transient failure
    #[arg(long)]
    max_retries: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the cache contents after resolving
    #[arg(long)]
    list_cache: bool,

    /// Print cache hit/miss counters after resolving
    #[arg(long)]
    stats: bool,

    /// Empty the cache before exiting and report how many entries were dropped
    #[arg(long)]
    clear_cache: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        server_address: cli.server,
        timeout_ms: cli.timeout_ms,
        max_retries: cli.max_retries,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting stubdns v{}", env!("CARGO_PKG_VERSION"));
    info!(
        source = %bootstrap::config_source(cli.config.as_deref()),
        server = %config.upstream.server_address,
        timeout_ms = config.upstream.timeout_ms,
        max_retries = config.upstream.max_retries,
        "Configuration loaded"
    );

    let dns_services = di::DnsServices::new(&config);
    let use_cases = di::UseCases::new(&dns_services);

    let mut failures = 0usize;

    for domain in &cli.domains {
        match use_cases.resolve_domain.execute(domain).await {
            Ok(resolution) => {
                println!(
                    "{} -> {} (TTL: {}s, {})",
                    resolution.name,
                    resolution.answer.address,
                    resolution.answer.ttl_secs,
                    if resolution.cache_hit { "cached" } else { "upstream" }
                );
            }
            Err(e) => {
                failures += 1;
                eprintln!("{} -> error: {}", domain, e);
            }
        }
    }

    if cli.list_cache {
        let rows = use_cases.list_cache.execute();
        println!("cache: {} entries", rows.len());
        for row in rows {
            println!(
                "  {} -> {} (TTL: {}s, remaining: {}s)",
                row.name, row.answer.address, row.answer.ttl_secs, row.remaining_ttl_secs
            );
        }
    }

    if cli.stats {
        let stats = use_cases.get_stats.execute();
        println!(
            "stats: entries={} hits={} misses={} insertions={} expired={} hit_rate={:.1}%",
            stats.total_entries,
            stats.hits,
            stats.misses,
            stats.insertions,
            stats.lazy_deletions,
            stats.hit_rate
        );
    }

    if cli.clear_cache {
        let removed = use_cases.clear_cache.execute();
        println!("cache cleared: {} entries removed", removed);
    }

    if failures > 0 {
        anyhow::bail!("{} of {} lookups failed", failures, cli.domains.len());
    }

    Ok(())
}
