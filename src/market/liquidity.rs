use crate::token::Token;
use ahash::RandomState;
use eyre::{Result, eyre};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{self, Display};

pub type FastHasher = RandomState;
/// FastHashMap using ahash
pub type FastHashMap<K, V> = HashMap<K, V, FastHasher>;

/// Token pair in its stored direction. A pool has exactly one canonical
/// storage direction, fixed when it was first inserted; lookups must try
/// both orientations.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolKey {
    pub token0: Token,
    pub token1: Token,
}

impl PoolKey {
    pub fn new(token0: Token, token1: Token) -> Self {
        PoolKey { token0, token1 }
    }

    pub fn reversed(&self) -> Self {
        PoolKey { token0: self.token1.clone(), token1: self.token0.clone() }
    }
}

impl Display for PoolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.token0, self.token1)
    }
}

/// Reserve quantities in the key's stored direction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reserve {
    pub reserve0: f64,
    pub reserve1: f64,
}

/// Canonical reserve storage for every configured pool.
///
/// `Clone` produces a value-independent deep copy, so a route simulation
/// mutating its own copy never leaks reserve changes into the original or
/// into other simulations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LiquidityStore {
    pools: FastHashMap<PoolKey, Reserve>,
}

impl LiquidityStore {
    pub fn new() -> Self {
        LiquidityStore { pools: FastHashMap::default() }
    }

    /// Seed a pool in the given direction. The insertion direction becomes
    /// the canonical storage direction for the pair.
    pub fn add_pool(&mut self, token0: Token, token1: Token, reserve0: f64, reserve1: f64) -> Result<()> {
        let key = PoolKey::new(token0, token1);
        if self.pools.contains_key(&key) || self.pools.contains_key(&key.reversed()) {
            return Err(eyre!("pool already exists for pair {}", key));
        }
        self.pools.insert(key, Reserve { reserve0, reserve1 });
        Ok(())
    }

    /// Reserves oriented to `(token_a, token_b)` if a pool exists in either
    /// stored direction.
    pub fn reserves(&self, token_a: &Token, token_b: &Token) -> Option<(f64, f64)> {
        let forward = PoolKey::new(token_a.clone(), token_b.clone());
        if let Some(reserve) = self.pools.get(&forward) {
            return Some((reserve.reserve0, reserve.reserve1));
        }
        self.pools.get(&forward.reversed()).map(|reserve| (reserve.reserve1, reserve.reserve0))
    }

    /// Write new reserves back into whichever direction the pool was
    /// originally stored in. Never creates a pool; returns false when no
    /// pool exists for the pair.
    pub fn apply(&mut self, token_a: &Token, token_b: &Token, new_reserve_a: f64, new_reserve_b: f64) -> bool {
        let forward = PoolKey::new(token_a.clone(), token_b.clone());
        if let Some(reserve) = self.pools.get_mut(&forward) {
            *reserve = Reserve { reserve0: new_reserve_a, reserve1: new_reserve_b };
            return true;
        }
        if let Some(reserve) = self.pools.get_mut(&forward.reversed()) {
            *reserve = Reserve { reserve0: new_reserve_b, reserve1: new_reserve_a };
            return true;
        }
        false
    }

    pub fn contains_pair(&self, token_a: &Token, token_b: &Token) -> bool {
        let forward = PoolKey::new(token_a.clone(), token_b.clone());
        self.pools.contains_key(&forward) || self.pools.contains_key(&forward.reversed())
    }

    pub fn pools_count(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PoolKey, &Reserve)> {
        self.pools.iter()
    }
}
