use crate::constants::DEFAULT_FEE_MULTIPLIER;
use crate::logic::RouterConfig;
use crate::market::config_loader::{ConfigLoaderSync, LoadConfigError, load_from_file_sync};
use crate::market::liquidity::LiquidityStore;
use crate::token::Token;
use eyre::Result;
use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct MarketConfigRoot {
    pub market: MarketConfigSection,
}

/// Static market configuration: pools, base token and the search input
/// amount. `Default` is the built-in configuration used by the driver
/// binary.
#[derive(Clone, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct MarketConfigSection {
    pub base_token: String,
    pub input_amount: f64,
    #[serde(default = "default_fee_multiplier")]
    pub fee_multiplier: f64,
    pub pools: Vec<PoolConfig>,
}

fn default_fee_multiplier() -> f64 {
    DEFAULT_FEE_MULTIPLIER
}

#[derive(Clone, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct PoolConfig {
    pub token0: String,
    pub token1: String,
    pub reserve0: f64,
    pub reserve1: f64,
}

impl PoolConfig {
    fn new(token0: &str, token1: &str, reserve0: f64, reserve1: f64) -> Self {
        Self { token0: token0.to_string(), token1: token1.to_string(), reserve0, reserve1 }
    }
}

impl MarketConfigSection {
    pub fn base_token(&self) -> Token {
        Token::new(self.base_token.as_str())
    }

    /// Non-base tokens in first-seen source order. This order drives
    /// candidate enumeration and therefore tie-breaking.
    pub fn universe(&self) -> Vec<Token> {
        let base = self.base_token();
        let mut universe: Vec<Token> = Vec::new();
        for pool in &self.pools {
            for symbol in [&pool.token0, &pool.token1] {
                let token = Token::new(symbol.as_str());
                if token != base && !universe.contains(&token) {
                    universe.push(token);
                }
            }
        }
        universe
    }

    /// Seed a liquidity store with the configured pools, each stored in its
    /// source direction.
    pub fn build_store(&self) -> Result<LiquidityStore> {
        let mut store = LiquidityStore::new();
        for pool in &self.pools {
            store.add_pool(
                Token::new(pool.token0.as_str()),
                Token::new(pool.token1.as_str()),
                pool.reserve0,
                pool.reserve1,
            )?;
        }
        Ok(store)
    }

    pub fn router_config(&self) -> RouterConfig {
        RouterConfig {
            base_token: self.base_token(),
            input_amount: self.input_amount,
            fee_multiplier: self.fee_multiplier,
        }
    }
}

impl Default for MarketConfigSection {
    fn default() -> Self {
        Self {
            base_token: "tokenB".to_string(),
            input_amount: 5.0,
            fee_multiplier: DEFAULT_FEE_MULTIPLIER,
            pools: vec![
                PoolConfig::new("tokenA", "tokenB", 17.0, 10.0),
                PoolConfig::new("tokenA", "tokenC", 11.0, 7.0),
                PoolConfig::new("tokenA", "tokenD", 15.0, 9.0),
                PoolConfig::new("tokenA", "tokenE", 21.0, 5.0),
                PoolConfig::new("tokenB", "tokenC", 36.0, 4.0),
                PoolConfig::new("tokenB", "tokenD", 13.0, 6.0),
                PoolConfig::new("tokenB", "tokenE", 25.0, 3.0),
                PoolConfig::new("tokenC", "tokenD", 30.0, 12.0),
                PoolConfig::new("tokenC", "tokenE", 10.0, 8.0),
                PoolConfig::new("tokenD", "tokenE", 60.0, 25.0),
            ],
        }
    }
}

impl ConfigLoaderSync for MarketConfigSection {
    type SectionType = MarketConfigSection;

    fn load_section_from_file_sync(file_name: String) -> Result<Self::SectionType, LoadConfigError> {
        let root: MarketConfigRoot = load_from_file_sync(file_name)?;
        Ok(root.market)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::config_loader::load_from_str;

    #[test]
    fn test_default_configuration() {
        let config = MarketConfigSection::default();

        assert_eq!(config.base_token().symbol(), "tokenB");
        assert_eq!(config.input_amount, 5.0);
        assert_eq!(config.fee_multiplier, DEFAULT_FEE_MULTIPLIER);
        assert_eq!(config.pools.len(), 10);
    }

    #[test]
    fn test_universe_in_source_order() {
        let config = MarketConfigSection::default();

        let universe = config.universe();
        let symbols: Vec<&str> = universe.iter().map(|t| t.symbol()).collect();
        assert_eq!(symbols, vec!["tokenA", "tokenC", "tokenD", "tokenE"]);
    }

    #[test]
    fn test_build_store() -> Result<()> {
        let config = MarketConfigSection::default();

        let store = config.build_store()?;
        assert_eq!(store.pools_count(), 10);
        assert_eq!(store.reserves(&Token::new("tokenB"), &Token::new("tokenE")), Some((25.0, 3.0)));
        assert_eq!(store.reserves(&Token::new("tokenE"), &Token::new("tokenA")), Some((5.0, 21.0)));

        Ok(())
    }

    #[test]
    fn test_load_from_toml() {
        let raw = r#"
            [market]
            base_token = "tokenB"
            input_amount = 5.0

            [[market.pools]]
            token0 = "tokenB"
            token1 = "tokenE"
            reserve0 = 25.0
            reserve1 = 3.0
        "#;

        let root: MarketConfigRoot = load_from_str(raw).unwrap();
        let config = root.market;

        assert_eq!(config.pools.len(), 1);
        // fee_multiplier falls back to the default when omitted
        assert_eq!(config.fee_multiplier, DEFAULT_FEE_MULTIPLIER);
        assert_eq!(config.universe().len(), 1);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let raw = r#"
            [market]
            base_token = "tokenB"
            input_amount = 5.0
            pools = []
            unknown_field = true
        "#;

        let result: Result<MarketConfigRoot, _> = load_from_str(raw);
        assert!(result.is_err());
    }
}
