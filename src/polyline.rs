//! Polyline representation for route geometries.
//!
//! Routes arrive from the routing service either as GeoJSON coordinates or
//! as an encoded polyline string (signed varint, 1e5 fixed-point). This
//! module owns the decoded form and the codec for the encoded one.

use serde::{Deserialize, Serialize};

/// Fixed-point precision of the encoded format.
const PRECISION: f64 = 1e5;

/// Offset added to every 5-bit chunk to land in printable ASCII.
const CHUNK_OFFSET: u8 = 63;

/// Continuation flag on a chunk.
const MORE_CHUNKS: i64 = 0x20;

/// A component never needs more than 7 chunks (35 bits).
const MAX_SHIFT: u32 = 35;

/// A geographic point, latitude first.
///
/// Serialized as a `[lat, lng]` pair, matching the routing service's
/// location payloads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Latitude within [-90, 90] and longitude within [-180, 180].
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(point: GeoPoint) -> Self {
        [point.lat, point.lng]
    }
}

/// Failure to decode an encoded polyline.
///
/// Decoding is all-or-nothing: no points are returned when any of these
/// occur.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("encoded polyline ends mid-value at byte {position}")]
    Truncated { position: usize },

    #[error("byte {byte:#04x} at position {position} is outside the polyline alphabet")]
    InvalidCharacter { position: usize, byte: u8 },

    #[error("value starting at byte {position} exceeds the maximum chunk count")]
    Overflow { position: usize },

    #[error("decoded point {point} lies outside latitude/longitude range")]
    OutOfRange { point: usize },
}

/// A normalized route path, whatever wire format it arrived in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<GeoPoint>,
}

impl Polyline {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// An empty string yields an empty path.
    pub fn decode(encoded: &str) -> Result<Self, DecodeError> {
        decode(encoded).map(Self::new)
    }

    pub fn encode(&self) -> String {
        encode(&self.points)
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Decodes an encoded polyline into points, in emission order.
///
/// A well-formed string whose points leave the valid latitude/longitude
/// range is rejected with [`DecodeError::OutOfRange`].
pub fn decode(encoded: &str) -> Result<Vec<GeoPoint>, DecodeError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while index < bytes.len() {
        lat += read_delta(bytes, &mut index)?;
        // A latitude without its longitude is a truncated point.
        if index >= bytes.len() {
            return Err(DecodeError::Truncated { position: index });
        }
        lng += read_delta(bytes, &mut index)?;

        let point = GeoPoint::new(lat as f64 / PRECISION, lng as f64 / PRECISION);
        if !point.is_valid() {
            return Err(DecodeError::OutOfRange { point: points.len() });
        }
        points.push(point);
    }

    Ok(points)
}

/// Encodes points as a polyline string at 1e5 precision.
pub fn encode(points: &[GeoPoint]) -> String {
    let mut out = String::new();
    let mut prev_lat: i64 = 0;
    let mut prev_lng: i64 = 0;

    for point in points {
        let lat = (point.lat * PRECISION).round() as i64;
        let lng = (point.lng * PRECISION).round() as i64;
        write_delta(&mut out, lat - prev_lat);
        write_delta(&mut out, lng - prev_lng);
        prev_lat = lat;
        prev_lng = lng;
    }

    out
}

fn read_delta(bytes: &[u8], index: &mut usize) -> Result<i64, DecodeError> {
    let start = *index;
    let mut result: i64 = 0;
    let mut shift: u32 = 0;

    loop {
        if shift >= MAX_SHIFT {
            return Err(DecodeError::Overflow { position: start });
        }
        let byte = *bytes
            .get(*index)
            .ok_or(DecodeError::Truncated { position: *index })?;
        if !(CHUNK_OFFSET..=b'~').contains(&byte) {
            return Err(DecodeError::InvalidCharacter {
                position: *index,
                byte,
            });
        }
        *index += 1;

        let chunk = i64::from(byte - CHUNK_OFFSET);
        result |= (chunk & 0x1f) << shift;
        shift += 5;

        if chunk & MORE_CHUNKS == 0 {
            break;
        }
    }

    // zig-zag
    Ok(if result & 1 == 1 {
        !(result >> 1)
    } else {
        result >> 1
    })
}

fn write_delta(out: &mut String, delta: i64) {
    let mut value = delta << 1;
    if delta < 0 {
        value = !value;
    }
    while value >= MORE_CHUNKS {
        out.push(char::from(((MORE_CHUNKS | (value & 0x1f)) as u8) + CHUNK_OFFSET));
        value >>= 5;
    }
    out.push(char::from(value as u8 + CHUNK_OFFSET));
}
