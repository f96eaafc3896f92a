//! Layer merging

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use domain::{
    DomainError, GridpointSeries, HourlyForecast, LayerKind, QuantitativeLayer,
    celsius_to_fahrenheit, interval_start,
};
use tracing::debug;

/// Hours keyed by their start instant
///
/// Keys compare as instants, so the same moment written with two different
/// offsets maps to one hour.
pub type HourlyMap = BTreeMap<DateTime<FixedOffset>, HourlyForecast>;

/// Merge all known layers of `series` into `hours`
///
/// Layers are processed in [`LayerKind::ALL`] order. A layer missing from the
/// series contributes nothing.
///
/// # Errors
///
/// Returns `DomainError::InvalidInterval` on the first sample whose validity
/// window cannot be parsed; `hours` must then be discarded.
pub fn merge_layers(series: &GridpointSeries, hours: &mut HourlyMap) -> Result<(), DomainError> {
    merge_layers_in_order(series, &LayerKind::ALL, hours)
}

/// Merge the given layers of `series` into `hours`, in the given order
///
/// Each layer writes a field no other layer touches, so the order does not
/// change the result.
///
/// # Errors
///
/// See [`merge_layers`].
pub fn merge_layers_in_order(
    series: &GridpointSeries,
    order: &[LayerKind],
    hours: &mut HourlyMap,
) -> Result<(), DomainError> {
    for &kind in order {
        if let Some(layer) = series.layer(kind) {
            merge_layer(kind, layer, hours)?;
        }
    }
    Ok(())
}

fn merge_layer(
    kind: LayerKind,
    layer: &QuantitativeLayer,
    hours: &mut HourlyMap,
) -> Result<(), DomainError> {
    let samples = &layer.values;
    for sample in samples {
        let start = interval_start(&sample.valid_time)?;
        let value = if kind.is_celsius() {
            celsius_to_fahrenheit(sample.value)
        } else {
            sample.value
        };

        hours
            .entry(start)
            .or_insert_with(|| HourlyForecast::new(start))
            .set(kind, value);
    }

    debug!(
        layer = %kind,
        uom = layer.uom.as_deref().unwrap_or("unknown"),
        samples = samples.len(),
        hours = hours.len(),
        "Merged layer"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::LayerSample;
    use proptest::prelude::*;

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn layer(samples: &[(&str, Option<f64>)]) -> QuantitativeLayer {
        QuantitativeLayer::new(
            samples
                .iter()
                .map(|(t, v)| LayerSample::new(*t, *v))
                .collect(),
        )
    }

    fn full_series() -> GridpointSeries {
        let times = [
            "2023-04-27T06:00:00+00:00/PT1H",
            "2023-04-27T07:00:00+00:00/PT2H",
            "2023-04-27T09:00:00+00:00/PT1H",
        ];
        let mut series = GridpointSeries::new();
        for (i, kind) in LayerKind::ALL.into_iter().enumerate() {
            // each layer skips a different hour so records end up partially filled
            let samples: Vec<_> = times
                .iter()
                .enumerate()
                .filter(|(j, _)| (i + j) % 3 != 0)
                .map(|(j, t)| LayerSample::new(*t, Some((i * 10 + j) as f64)))
                .collect();
            series.insert(kind, QuantitativeLayer::new(samples));
        }
        series
    }

    #[test]
    fn creates_one_hour_per_distinct_start() {
        let series = GridpointSeries::new()
            .with_layer(
                LayerKind::Humidity,
                layer(&[
                    ("2023-04-27T06:00:00+00:00/PT1H", Some(80.0)),
                    ("2023-04-27T07:00:00+00:00/PT1H", Some(75.0)),
                ]),
            )
            .with_layer(
                LayerKind::SkyCover,
                layer(&[
                    ("2023-04-27T07:00:00+00:00/PT3H", Some(40.0)),
                    ("2023-04-27T10:00:00+00:00/PT1H", Some(10.0)),
                ]),
            );

        let mut hours = HourlyMap::new();
        merge_layers(&series, &mut hours).unwrap();

        assert_eq!(hours.len(), 3);
        let seven = &hours[&at("2023-04-27T07:00:00+00:00")];
        assert_eq!(seven.humidity, Some(75.0));
        assert_eq!(seven.sky_cover_percent, Some(40.0));
        let ten = &hours[&at("2023-04-27T10:00:00+00:00")];
        assert_eq!(ten.humidity, None);
        assert_eq!(ten.sky_cover_percent, Some(10.0));
    }

    #[test]
    fn multi_hour_interval_is_attributed_to_its_start() {
        let series = GridpointSeries::new().with_layer(
            LayerKind::WindSpeed,
            layer(&[("2023-04-27T07:00:00+00:00/PT5H", Some(18.5))]),
        );
        let mut hours = HourlyMap::new();
        merge_layers(&series, &mut hours).unwrap();

        assert_eq!(hours.len(), 1);
        assert_eq!(
            hours[&at("2023-04-27T07:00:00+00:00")].wind_speed_kmh,
            Some(18.5)
        );
    }

    #[test]
    fn only_temperature_is_converted() {
        let series = GridpointSeries::new()
            .with_layer(
                LayerKind::Temperature,
                layer(&[("2023-04-27T07:00:00+00:00/PT1H", Some(20.0))]),
            )
            .with_layer(
                LayerKind::PrecipitationAmount,
                layer(&[("2023-04-27T07:00:00+00:00/PT1H", Some(20.0))]),
            );
        let mut hours = HourlyMap::new();
        merge_layers(&series, &mut hours).unwrap();

        let hour = &hours[&at("2023-04-27T07:00:00+00:00")];
        assert!((hour.temperature_fahrenheit.unwrap() - 68.0).abs() < 1e-9);
        assert_eq!(hour.precipitation_mm, Some(20.0));
    }

    #[test]
    fn absent_sample_value_stays_absent() {
        let series = GridpointSeries::new().with_layer(
            LayerKind::Temperature,
            layer(&[("2023-04-27T07:00:00+00:00/PT1H", None)]),
        );
        let mut hours = HourlyMap::new();
        merge_layers(&series, &mut hours).unwrap();

        assert_eq!(hours.len(), 1);
        assert_eq!(
            hours[&at("2023-04-27T07:00:00+00:00")].temperature_fahrenheit,
            None
        );
    }

    #[test]
    fn missing_layer_is_an_empty_series() {
        let with_empty = GridpointSeries::new()
            .with_layer(
                LayerKind::Humidity,
                layer(&[("2023-04-27T07:00:00+00:00/PT1H", Some(50.0))]),
            )
            .with_layer(LayerKind::SnowfallAmount, QuantitativeLayer::default());
        let without = GridpointSeries::new().with_layer(
            LayerKind::Humidity,
            layer(&[("2023-04-27T07:00:00+00:00/PT1H", Some(50.0))]),
        );

        let mut a = HourlyMap::new();
        let mut b = HourlyMap::new();
        merge_layers(&with_empty, &mut a).unwrap();
        merge_layers(&without, &mut b).unwrap();

        assert_eq!(a, b);
        assert!(a.values().all(|h| h.snowfall_mm.is_none()));
    }

    #[test]
    fn unit_of_measure_is_carried_but_not_applied() {
        let tagged = GridpointSeries::new().with_layer(
            LayerKind::Temperature,
            layer(&[("2023-04-27T07:00:00+00:00/PT1H", Some(20.0))]).with_uom("wmoUnit:degC"),
        );
        let untagged = GridpointSeries::new().with_layer(
            LayerKind::Temperature,
            layer(&[("2023-04-27T07:00:00+00:00/PT1H", Some(20.0))]),
        );

        let mut a = HourlyMap::new();
        let mut b = HourlyMap::new();
        merge_layers(&tagged, &mut a).unwrap();
        merge_layers(&untagged, &mut b).unwrap();

        assert_eq!(a, b);
        let hour = &a[&at("2023-04-27T07:00:00+00:00")];
        assert!((hour.temperature_fahrenheit.unwrap() - 68.0).abs() < 1e-9);
    }

    #[test]
    fn same_instant_with_different_offsets_collapses() {
        let series = GridpointSeries::new()
            .with_layer(
                LayerKind::Humidity,
                layer(&[("2023-04-27T07:00:00+00:00/PT1H", Some(50.0))]),
            )
            .with_layer(
                LayerKind::SkyCover,
                layer(&[("2023-04-27T01:00:00-06:00/PT1H", Some(30.0))]),
            );
        let mut hours = HourlyMap::new();
        merge_layers(&series, &mut hours).unwrap();

        assert_eq!(hours.len(), 1);
        let hour = hours.values().next().unwrap();
        assert_eq!(hour.humidity, Some(50.0));
        assert_eq!(hour.sky_cover_percent, Some(30.0));
    }

    #[test]
    fn parse_failure_aborts_the_merge() {
        let series = GridpointSeries::new().with_layer(
            LayerKind::Humidity,
            layer(&[
                ("2023-04-27T06:00:00+00:00/PT1H", Some(50.0)),
                ("2023-04-27T07:00:00+00:00", Some(55.0)),
            ]),
        );
        let mut hours = HourlyMap::new();
        let err = merge_layers(&series, &mut hours).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInterval(_)));
    }

    #[test]
    fn fills_fields_across_layers() {
        let mut hours = HourlyMap::new();
        merge_layers(&full_series(), &mut hours).unwrap();

        assert_eq!(hours.len(), 3);
        let six = &hours[&at("2023-04-27T06:00:00+00:00")];
        // temperature (i = 0) skips j = 0
        assert_eq!(six.temperature_fahrenheit, None);
        assert_eq!(six.humidity, Some(10.0));
    }

    proptest! {
        #[test]
        fn layer_order_does_not_matter(
            order in Just(LayerKind::ALL.to_vec()).prop_shuffle()
        ) {
            let series = full_series();

            let mut expected = HourlyMap::new();
            merge_layers(&series, &mut expected).unwrap();

            let mut shuffled = HourlyMap::new();
            merge_layers_in_order(&series, &order, &mut shuffled).unwrap();

            prop_assert_eq!(expected, shuffled);
        }
    }
}
