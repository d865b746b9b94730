use super::enumerator::PathEnumerator;
use super::evaluator::RouteEvaluator;
use super::swap::SwapEngine;
use super::types::{BestRoute, RouterConfig, SwapPath};
use crate::market::liquidity::LiquidityStore;
use crate::token::Token;
use tracing::{debug, info};

/// Router is the driver of the best-route search.
///
/// It enumerates every candidate interior over the token universe, simulates
/// each against its own copy of the liquidity store, and keeps the candidate
/// with the strictly highest final output. Ties keep the first-enumerated
/// candidate, including the degenerate case where nothing beats zero.
pub struct Router {
    config: RouterConfig,
}

impl Router {
    pub fn new(config: RouterConfig) -> Self {
        Router { config }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn find_best_route(&self, market: &LiquidityStore, universe: &[Token]) -> BestRoute {
        let enumerator = PathEnumerator::new(universe.to_vec());
        let evaluator = RouteEvaluator::new(
            self.config.base_token.clone(),
            SwapEngine::new(self.config.fee_multiplier),
        );

        let interiors = enumerator.interiors();
        debug!("evaluating {} candidate routes from {}", interiors.len(), self.config.base_token);

        let mut best = BestRoute::default();
        for interior in &interiors {
            let output = evaluator.evaluate(market, interior, self.config.input_amount);
            if output > best.output {
                best = BestRoute {
                    output,
                    path: SwapPath::new_cycle(self.config.base_token.clone(), interior),
                };
                debug!("new best route: {best}");
            }
        }

        info!(
            "search finished: {} candidates, best output {} via {}",
            interiors.len(),
            best.output,
            best.path
        );
        best
    }
}

/// Builder pattern for creating and configuring a Router
#[derive(Default)]
pub struct RouterBuilder {
    config: RouterConfig,
}

impl RouterBuilder {
    pub fn new() -> Self {
        Self { config: RouterConfig::default() }
    }

    pub fn with_base_token(mut self, base_token: Token) -> Self {
        self.config.base_token = base_token;
        self
    }

    pub fn with_input_amount(mut self, input_amount: f64) -> Self {
        self.config.input_amount = input_amount;
        self
    }

    pub fn with_fee_multiplier(mut self, fee_multiplier: f64) -> Self {
        self.config.fee_multiplier = fee_multiplier;
        self
    }

    pub fn build(self) -> Router {
        Router::new(self.config)
    }
}
