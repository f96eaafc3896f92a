//! Raw gridpoint series as delivered by the weather provider

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::LayerKind;

/// A single sample of a quantitative layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSample {
    /// Interval-encoded validity window, e.g. `2023-04-27T07:00:00+00:00/PT5H`
    pub valid_time: String,
    /// Sample value in the layer's unit, if reported
    pub value: Option<f64>,
}

impl LayerSample {
    /// Create a sample
    pub fn new(valid_time: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            valid_time: valid_time.into(),
            value,
        }
    }
}

/// A named time series of samples
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuantitativeLayer {
    /// Unit of measure as reported upstream (e.g. `wmoUnit:degC`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uom: Option<String>,
    /// Samples in upstream order
    #[serde(default)]
    pub values: Vec<LayerSample>,
}

impl QuantitativeLayer {
    /// Create a layer from its samples
    #[must_use]
    pub fn new(values: Vec<LayerSample>) -> Self {
        Self { uom: None, values }
    }

    /// Attach the upstream unit of measure
    #[must_use]
    pub fn with_uom(mut self, uom: impl Into<String>) -> Self {
        self.uom = Some(uom.into());
        self
    }
}

/// The layered gridpoint data for one location
///
/// Layers the provider did not report are absent and read as empty series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridpointSeries {
    layers: HashMap<LayerKind, QuantitativeLayer>,
}

impl GridpointSeries {
    /// Create an empty series
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with_layer(mut self, kind: LayerKind, layer: QuantitativeLayer) -> Self {
        self.insert(kind, layer);
        self
    }

    /// Insert or replace a layer
    pub fn insert(&mut self, kind: LayerKind, layer: QuantitativeLayer) {
        self.layers.insert(kind, layer);
    }

    /// Get a layer if the provider reported it
    #[must_use]
    pub fn layer(&self, kind: LayerKind) -> Option<&QuantitativeLayer> {
        self.layers.get(&kind)
    }

    /// Samples of a layer; a missing layer yields no samples
    #[must_use]
    pub fn samples(&self, kind: LayerKind) -> &[LayerSample] {
        self.layers
            .get(&kind)
            .map_or(&[], |layer| layer.values.as_slice())
    }

    /// Look a layer up by its upstream name
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownLayer` if `name` is not one of the known
    /// layer names.
    pub fn layer_by_name(&self, name: &str) -> Result<Option<&QuantitativeLayer>, DomainError> {
        let kind: LayerKind = name.parse()?;
        Ok(self.layer(kind))
    }

    /// Number of layers present
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether no layer is present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Total number of samples across all layers
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.layers.values().map(|layer| layer.values.len()).sum()
    }
}
