//! Route geometry payloads and their normalization to points.
//!
//! The routing service does not tag its geometry: a GeoJSON object carries a
//! `coordinates` array (longitude first), a string is an encoded polyline.
//! The shape is resolved once, at deserialization, into [`GeometryPayload`];
//! nothing downstream re-inspects it.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::polyline::{DecodeError, GeoPoint, Polyline};

/// Route geometry as received from the routing service.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GeometryPayload {
    /// GeoJSON-style `[lng, lat, ...]` positions. Positions that were not
    /// numeric arrive here truncated at their first non-number.
    Coordinates { coordinates: Vec<Vec<f64>> },
    /// Encoded polyline at 1e5 precision.
    Encoded(String),
}

impl GeometryPayload {
    /// Classifies a raw JSON value. `None` when it is neither a string nor an
    /// object with a `coordinates` array.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::String(encoded) => Some(Self::Encoded(encoded)),
            Value::Object(mut object) => match object.remove("coordinates") {
                Some(Value::Array(positions)) => Some(Self::Coordinates {
                    coordinates: positions
                        .iter()
                        .map(|position| {
                            position
                                .as_array()
                                .map(|components| {
                                    components.iter().map_while(Value::as_f64).collect()
                                })
                                .unwrap_or_default()
                        })
                        .collect(),
                }),
                _ => None,
            },
            _ => None,
        }
    }

    /// Normalizes the payload into a latitude-first path, preserving order.
    pub fn normalize(&self) -> Result<Polyline, DecodeError> {
        match self {
            Self::Coordinates { coordinates } => Ok(Polyline::new(
                coordinates
                    .iter()
                    .enumerate()
                    .filter_map(|(i, position)| match position.as_slice() {
                        [lng, lat, ..] => Some(GeoPoint::new(*lat, *lng)),
                        _ => {
                            warn!(index = i, "skipping position without two numeric components");
                            None
                        }
                    })
                    .collect(),
            )),
            Self::Encoded(encoded) => Polyline::decode(encoded),
        }
    }
}

impl<'de> Deserialize<'de> for GeometryPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).ok_or_else(|| {
            D::Error::custom("geometry is neither an encoded string nor a coordinates object")
        })
    }
}

/// Field deserializer for segment geometry. Null, absent and unrecognized
/// shapes all become `None`, so one odd segment cannot sink a whole trip.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<GeometryPayload>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let payload = GeometryPayload::from_value(value);
    if payload.is_none() {
        warn!("ignoring geometry of unrecognized shape");
    }
    Ok(payload)
}

/// Normalizes optional geometry. Absent geometry is an empty route.
pub fn normalize(payload: Option<&GeometryPayload>) -> Result<Polyline, DecodeError> {
    payload.map_or_else(|| Ok(Polyline::default()), GeometryPayload::normalize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Segment {
        #[serde(default, deserialize_with = "deserialize_lenient")]
        geometry: Option<GeometryPayload>,
    }

    #[test]
    fn test_coordinates_swap_axes() {
        let payload: GeometryPayload =
            serde_json::from_str(r#"{"coordinates": [[-122.4, 37.8], [-122.5, 37.9]]}"#).unwrap();
        let path = payload.normalize().unwrap();
        assert_eq!(
            path.points(),
            [GeoPoint::new(37.8, -122.4), GeoPoint::new(37.9, -122.5)]
        );
    }

    #[test]
    fn test_geojson_linestring_detected() {
        let payload: GeometryPayload = serde_json::from_str(
            r#"{"type": "LineString", "coordinates": [[-115.1, 36.1, 610.0]]}"#,
        )
        .unwrap();
        assert!(matches!(payload, GeometryPayload::Coordinates { .. }));
        assert_eq!(payload.normalize().unwrap().points(), [GeoPoint::new(36.1, -115.1)]);
    }

    #[test]
    fn test_string_detected_as_encoded() {
        let payload: GeometryPayload = serde_json::from_str(r#""_p~iF~ps|U""#).unwrap();
        assert_eq!(payload, GeometryPayload::Encoded("_p~iF~ps|U".to_string()));
        assert_eq!(payload.normalize().unwrap().points(), [GeoPoint::new(38.5, -120.2)]);
    }

    #[test]
    fn test_short_positions_skipped() {
        let payload = GeometryPayload::Coordinates {
            coordinates: vec![vec![1.0], vec![2.0, 3.0]],
        };
        assert_eq!(payload.normalize().unwrap().points(), [GeoPoint::new(3.0, 2.0)]);
    }

    #[test]
    fn test_non_numeric_positions_skipped() {
        let payload = GeometryPayload::from_value(json!({
            "coordinates": [[null, 1.0], [-90.2, 38.6], "oops", [-95.0, "x"], [-96.8, 32.8]]
        }))
        .unwrap();
        assert_eq!(
            payload.normalize().unwrap().points(),
            [GeoPoint::new(38.6, -90.2), GeoPoint::new(32.8, -96.8)]
        );
    }

    #[test]
    fn test_unrecognized_shapes() {
        assert_eq!(GeometryPayload::from_value(json!({"type": "LineString"})), None);
        assert_eq!(GeometryPayload::from_value(json!({"coordinates": "abc"})), None);
        assert_eq!(GeometryPayload::from_value(json!(42)), None);
        assert!(serde_json::from_value::<GeometryPayload>(json!([1, 2])).is_err());
    }

    #[test]
    fn test_lenient_field_swallows_unrecognized_shape() {
        let segment: Segment =
            serde_json::from_value(json!({"geometry": {"type": "LineString"}})).unwrap();
        assert_eq!(segment.geometry, None);

        let segment: Segment = serde_json::from_value(json!({"geometry": null})).unwrap();
        assert_eq!(segment.geometry, None);

        let segment: Segment = serde_json::from_value(json!({})).unwrap();
        assert_eq!(segment.geometry, None);

        let segment: Segment = serde_json::from_value(json!({"geometry": "_p~iF~ps|U"})).unwrap();
        assert_eq!(segment.geometry, Some(GeometryPayload::Encoded("_p~iF~ps|U".to_string())));
    }

    #[test]
    fn test_absent_and_empty_geometry() {
        assert!(normalize(None).unwrap().is_empty());
        assert!(normalize(Some(&GeometryPayload::Encoded(String::new()))).unwrap().is_empty());
        let empty = GeometryPayload::Coordinates { coordinates: Vec::new() };
        assert!(normalize(Some(&empty)).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_encoded_fails() {
        let payload = GeometryPayload::Encoded("_p~iF".to_string());
        assert!(matches!(normalize(Some(&payload)), Err(DecodeError::Truncated { .. })));
    }
}
