//! Crag location port
//!
//! Resolves an opaque crag identifier to coordinates.

use async_trait::async_trait;
use domain::{CragId, GeoLocation};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for looking up where a crag is
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CragLocationPort: Send + Sync {
    /// Resolve a crag to its coordinates
    ///
    /// Returns `ApplicationError::NotFound` for unknown crags.
    async fn resolve(&self, crag_id: CragId) -> Result<GeoLocation, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn CragLocationPort>();
    }
}
