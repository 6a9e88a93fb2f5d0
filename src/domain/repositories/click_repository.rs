//! Repository trait for the append-only click ledger.

use crate::domain::entities::NewClick;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for click events and their running totals.
///
/// The ledger is the ground truth for click counts: `record` appends the
/// event and bumps the cached total in one atomic step, so a reader never
/// observes a total that disagrees with the number of recorded events.
/// `record` must be linearizable per link id under concurrent redirects; N
/// concurrent calls raise the total by exactly N.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryClickRepository`] - in-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends a click event and returns the new running total for the link.
    ///
    /// Callers are responsible for ensuring the link exists; the ledger does
    /// not validate foreign keys itself.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn record(&self, new_click: NewClick) -> Result<u64, AppError>;

    /// Returns the running total for a link, 0 if no clicks were recorded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn total(&self, link_id: i64) -> Result<u64, AppError>;
}
