use super::swap::SwapEngine;
use super::types::SwapPath;
use crate::market::liquidity::LiquidityStore;
use crate::token::Token;

/// Simulates a full candidate route against an isolated copy of the
/// liquidity store, threading each hop's output into the next hop.
pub struct RouteEvaluator {
    base_token: Token,
    engine: SwapEngine,
}

impl RouteEvaluator {
    pub fn new(base_token: Token, engine: SwapEngine) -> Self {
        RouteEvaluator { base_token, engine }
    }

    /// Final output of the cycle `base -> interior... -> base` for the given
    /// input amount. The original store is never mutated; hops within the
    /// route see each other's reserve updates through the private copy.
    pub fn evaluate(&self, market: &LiquidityStore, interior: &[Token], input_amount: f64) -> f64 {
        let path = SwapPath::new_cycle(self.base_token.clone(), interior);
        self.evaluate_path(market, &path, input_amount)
    }

    /// Simulate an explicit token sequence hop by hop. A missing pool on any
    /// hop zeroes the running amount, and zero input to every later hop
    /// yields zero output, so a non-viable route reports `0.0`.
    pub fn evaluate_path(&self, market: &LiquidityStore, path: &SwapPath, input_amount: f64) -> f64 {
        let mut snapshot = market.clone();
        let mut amount = input_amount;
        for hop in path.tokens.windows(2) {
            amount = self.engine.swap(&hop[0], &hop[1], amount, &mut snapshot);
        }
        amount
    }
}
