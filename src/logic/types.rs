use crate::constants::DEFAULT_FEE_MULTIPLIER;
use crate::token::Token;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// An ordered token sequence. A candidate route is a cycle: it starts and
/// ends at the base token with distinct intermediate tokens in between.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapPath {
    pub tokens: Vec<Token>,
}

impl SwapPath {
    pub fn new(tokens: Vec<Token>) -> Self {
        SwapPath { tokens }
    }

    /// Build the full cycle `base -> interior... -> base` for a candidate
    /// interior sequence.
    pub fn new_cycle(base: Token, interior: &[Token]) -> Self {
        let mut tokens = Vec::with_capacity(interior.len() + 2);
        tokens.push(base.clone());
        tokens.extend_from_slice(interior);
        tokens.push(base);
        SwapPath { tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens_count(&self) -> usize {
        self.tokens.len()
    }

    /// The hop count of the path
    pub fn hops(&self) -> usize {
        self.tokens.len().saturating_sub(1)
    }
}

impl Display for SwapPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for token in &self.tokens {
            if !first {
                write!(f, "->")?;
            }
            write!(f, "{token}")?;
            first = false;
        }
        Ok(())
    }
}

/// Outcome of a best-route search: the winning path and its final output
/// amount in the base token. Defaults to no route and a zero output, which
/// also covers an empty candidate set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BestRoute {
    pub output: f64,
    pub path: SwapPath,
}

impl Display for BestRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, token balance={}", self.path, self.output)
    }
}

/// Configuration for the best-route search.
#[derive(Clone, Debug)]
pub struct RouterConfig {
    /// Token the search starts from and ends at
    pub base_token: Token,
    /// Input amount denominated in the base token
    pub input_amount: f64,
    /// Share of the input remaining after the proportional fee
    pub fee_multiplier: f64,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base_token: Token::new("tokenB"),
            input_amount: 5.0,
            fee_multiplier: DEFAULT_FEE_MULTIPLIER,
        }
    }
}
