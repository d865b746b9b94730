use crate::constants::DEFAULT_FEE_MULTIPLIER;
use crate::market::liquidity::LiquidityStore;
use crate::token::Token;

/// Executes single swaps against a reserve snapshot using the constant
/// product formula with a proportional fee.
#[derive(Clone, Copy, Debug)]
pub struct SwapEngine {
    fee_multiplier: f64,
}

impl SwapEngine {
    pub fn new(fee_multiplier: f64) -> Self {
        SwapEngine { fee_multiplier }
    }

    /// Swap `amount_in` of `token_in` for `token_out` against `market`,
    /// returning the output amount and writing the post-swap reserves back.
    ///
    /// A pair with no pool yields `0.0` and leaves the snapshot untouched.
    /// This is a sentinel, not an error: downstream a missing pool is
    /// indistinguishable from a swap that computes to zero output, and it
    /// marks the rest of the route non-viable instead of aborting the search.
    pub fn swap(&self, token_in: &Token, token_out: &Token, amount_in: f64, market: &mut LiquidityStore) -> f64 {
        let Some((reserve_in, reserve_out)) = market.reserves(token_in, token_out) else {
            return 0.0;
        };

        let amount_in_effective = amount_in * self.fee_multiplier;

        // Constant product market maker formula
        let k = reserve_in * reserve_out;
        let reserve_in_updated = reserve_in + amount_in_effective;
        let reserve_out_updated = k / reserve_in_updated;
        let amount_out = reserve_out - reserve_out_updated;

        // The input side is credited with the full amount while the output
        // side was priced off the fee-reduced amount; the stored product
        // grows by the retained fee.
        market.apply(token_in, token_out, reserve_in + amount_in, reserve_out_updated);

        amount_out
    }
}

impl Default for SwapEngine {
    fn default() -> Self {
        SwapEngine::new(DEFAULT_FEE_MULTIPLIER)
    }
}
