// Two-Layer Architecture
pub mod market; // Market Layer: liquidity pools, static configuration
pub mod logic; // Logic Layer: path enumeration, swap math, best-route search

// Common utilities and types
pub mod constants;
pub mod token;

// Re-export key components from each layer
pub use logic::{
    BestRoute, PathEnumerator, RouteEvaluator, Router, RouterBuilder, RouterConfig, SwapEngine,
    SwapPath,
};
pub use market::{
    ConfigLoaderSync, LiquidityStore, LoadConfigError, MarketConfigRoot, MarketConfigSection,
    PoolConfig, PoolKey, Reserve,
};
pub use token::Token;
