use crate::errors::RuleStoreError;

use super::RuleRef;

/// Source of rules keyed by subject-area tag.
///
/// Implementations must be safe for concurrent reads; no writes happen while
/// requests are being processed.
#[allow(async_fn_in_trait)]
pub trait IRuleStore: Send + Sync {
    /// All rules registered under `subject_area`, in registration order.
    async fn find_by_subject_area(&self, subject_area: &str)
        -> Result<Vec<RuleRef>, RuleStoreError>;
}
