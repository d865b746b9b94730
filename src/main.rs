use eyre::Result;
use swap_router::logic::Router;
use swap_router::market::MarketConfigSection;
use tracing::info;

fn main() -> Result<()> {
    // Keep stdout clean for the result line
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = MarketConfigSection::default();
    let market = config.build_store()?;
    let universe = config.universe();

    info!(
        "seeded {} pools, base token {}, universe size {}",
        market.pools_count(),
        config.base_token(),
        universe.len()
    );

    let router = Router::new(config.router_config());
    let best = router.find_best_route(&market, &universe);

    println!("{best}");
    Ok(())
}
