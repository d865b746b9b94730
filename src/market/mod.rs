/// Market Layer - Liquidity Pools and Configuration
///
/// This layer is responsible for:
/// - Canonical reserve storage per unordered token pair
/// - Static market configuration (pools, base token, input amount)
/// - Config loading from TOML
pub mod config;
pub mod config_loader;
pub mod liquidity;

// Re-export key components from the market layer
pub use config::{MarketConfigRoot, MarketConfigSection, PoolConfig};
pub use config_loader::{ConfigLoaderSync, LoadConfigError, load_from_file_sync, load_from_str};
pub use liquidity::{FastHashMap, FastHasher, LiquidityStore, PoolKey, Reserve};
