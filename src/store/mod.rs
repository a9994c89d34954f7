//! Deadline data access layer
//!
//! One trait seam between the HTTP handlers and PostgreSQL, so the
//! handlers never care where records come from.

use async_trait::async_trait;

use crate::model::DeadlineRecord;
use crate::Result;

pub mod postgres;

pub use postgres::PgDeadlineStore;

/// Source of registration-deadline records
#[async_trait]
pub trait DeadlineStore: Send + Sync {
    /// Fetch every record, ordered by state
    async fn fetch_all(&self) -> Result<Vec<DeadlineRecord>>;

    /// Cheap connectivity probe for health reporting
    async fn ping(&self) -> Result<()>;
}
