/// Logic Layer - Route Search
///
/// This layer is responsible for:
/// - Candidate path enumeration over the token universe
/// - Constant-product swap math with fee handling
/// - Route evaluation against isolated reserve snapshots
/// - Best-route selection across all candidates
pub mod enumerator;
pub mod evaluator;
pub mod router;
pub mod swap;
pub mod types;

// Re-export key components from the logic layer
pub use enumerator::PathEnumerator;
pub use evaluator::RouteEvaluator;
pub use router::{Router, RouterBuilder};
pub use swap::SwapEngine;
pub use types::{BestRoute, RouterConfig, SwapPath};
