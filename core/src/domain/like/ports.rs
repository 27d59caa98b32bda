use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, like::entities::LikeRecord};

/// Outcome of a conditional insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// No record existed for the primary identity; this write created it.
    Created,
    /// A record already existed; nothing was written.
    Duplicate,
}

/// Port for the like store.
///
/// The backend must expose an atomic insert-if-absent keyed on the record's
/// `(PK, SK)` identity: of N concurrent inserts for one identity, exactly one
/// observes `Created` and the rest observe `Duplicate`. This is the only
/// cross-request invariant the design relies on — no read-before-write, no
/// application-side locking.
#[cfg_attr(test, mockall::automock)]
pub trait LikeRepository: Send + Sync {
    fn put_if_absent(
        &self,
        record: LikeRecord,
    ) -> impl Future<Output = Result<WriteOutcome, CoreError>> + Send;
}
