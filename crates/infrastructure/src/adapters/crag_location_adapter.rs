//! Crag location adapter - Implements CragLocationPort from configuration

use std::collections::HashMap;

use application::error::ApplicationError;
use application::ports::CragLocationPort;
use async_trait::async_trait;
use domain::{CragId, GeoLocation};
use tracing::debug;

use crate::config::CragConfig;

/// Crag catalogue held in memory
#[derive(Debug, Clone, Default)]
pub struct ConfiguredCragLocations {
    crags: HashMap<CragId, GeoLocation>,
}

impl ConfiguredCragLocations {
    /// Build the catalogue from configured crags
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any crag has invalid coordinates or
    /// an id is listed twice.
    pub fn from_config(crags: &[CragConfig]) -> Result<Self, ApplicationError> {
        let mut catalogue = HashMap::with_capacity(crags.len());
        for crag in crags {
            let location = crag
                .to_geo_location()
                .map_err(|e| ApplicationError::Configuration(format!("crag {}: {e}", crag.id)))?;
            if catalogue.insert(crag.crag_id(), location).is_some() {
                return Err(ApplicationError::Configuration(format!(
                    "crag id {} is configured more than once",
                    crag.id
                )));
            }
        }

        debug!(count = catalogue.len(), "Loaded crag catalogue");
        Ok(Self { crags: catalogue })
    }
}

#[async_trait]
impl CragLocationPort for ConfiguredCragLocations {
    async fn resolve(&self, crag_id: CragId) -> Result<GeoLocation, ApplicationError> {
        self.crags
            .get(&crag_id)
            .copied()
            .ok_or_else(|| ApplicationError::NotFound(format!("Crag {crag_id}")))
    }
}
