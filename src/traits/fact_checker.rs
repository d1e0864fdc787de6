use async_trait::async_trait;

use crate::errors::FactCheckResult;
use crate::models::claim::Claim;
use crate::models::verdict::CheckOutcome;

/// The full check cycle: one remote attempt, then the local simulation.
///
/// One check runs at a time per checker; there is no cancellation and no
/// retry. The outcome says explicitly whether it came from the backend or
/// from the simulation.
#[async_trait]
pub trait FactChecker {
    async fn check(&mut self, claim: &Claim) -> FactCheckResult<CheckOutcome>;
}
