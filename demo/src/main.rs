use std::time::Duration;

use boundcache::{Boundcache, CacheConfig, StrategyType};
use tokio::time::sleep;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Runs the classic walkthrough for every strategy: fill a cache of four,
/// touch a key, push a fifth one and print what is left.
fn walkthrough(strategy: StrategyType) {
    info!("--- {strategy} ---");
    let mut cache: Boundcache<&str, &str> = Boundcache::new(strategy);
    cache.put("A", "Hello");
    cache.put("B", "World");
    cache.put("C", "Holberton");
    cache.put("D", "School");
    cache.put(None::<&str>, Some("Nothing"));
    cache.print_cache();

    info!("get(B) = {:?}", cache.get(&"B"));
    cache.put("E", "Battery");
    cache.print_cache();

    cache.put("C", "Street");
    cache.print_cache();

    info!("{:?}", cache.stats());
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boundcache=info,boundcache_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    for strategy in StrategyType::ALL {
        walkthrough(strategy);
    }

    info!("--- LRU with a 2s TTL ---");
    let config = CacheConfig::new(StrategyType::LRU)
        .with_capacity(3)
        .with_ttl(Duration::from_secs(2))
        .with_clean_interval(Duration::from_millis(500));
    let mut cache: Boundcache<&str, &str> = match Boundcache::with_config(config) {
        Ok(cache) => cache,
        Err(err) => {
            tracing::error!("cannot build cache: {err}");
            return;
        }
    };
    cache.put("x", "hello");
    info!("get(x) = {:?}", cache.get(&"x"));
    sleep(Duration::from_secs(3)).await;
    info!("get(x) = {:?}", cache.get(&"x")); // None, expired
    info!("{:?}", cache.stats());

    cache.stop_cleaner();
}
