use std::error::Error;

use thiserror::Error;

use crate::geometry::Line;

/// An underlying failure from the canvas store.
pub type Cause = Box<dyn Error + Send + Sync>;

pub type Result<T> = std::result::Result<T, ReceiverError>;

/// A drawing request that cannot be carried out.
///
/// Store failures are reported with a generic message; the store's own error is kept as the
/// source.
#[derive(Debug, Error)]
pub enum ReceiverError {
    #[error("line is not properly set")]
    InvalidLine(Line),

    #[error("cannot determine if point is on canvas")]
    PointStatus {
        #[source]
        source: Cause,
    },

    #[error("cannot determine if line is on canvas")]
    LineStatus {
        #[source]
        source: Cause,
    },

    #[error("canvas store failed")]
    Store {
        #[source]
        source: Cause,
    },
}
