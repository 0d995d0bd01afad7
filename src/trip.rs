//! Trip-calculation response model.
//!
//! Mirrors the JSON returned by the trip planning service. Only the fields
//! this crate renders are typed; everything else is ignored on input.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::GeometryPayload;
use crate::polyline::GeoPoint;

/// Full response of a trip calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripResponse {
    pub route: RouteData,
    pub trip_plan: TripPlan,
    #[serde(default)]
    pub log_sheets: Vec<LogSheet>,
    #[serde(default)]
    pub summary: Option<TripSummary>,
}

impl TripResponse {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Which of the three trip stops a location is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationRole {
    Current,
    Pickup,
    Dropoff,
}

impl LocationRole {
    pub fn title(self) -> &'static str {
        match self {
            Self::Current => "Current Location",
            Self::Pickup => "Pickup Location",
            Self::Dropoff => "Dropoff Location",
        }
    }
}

/// Which leg of the trip a route segment covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentRole {
    ToPickup,
    ToDropoff,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedLocation {
    pub address: String,
    /// `[lat, lng]` on the wire.
    pub coordinates: GeoPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub instruction: String,
    #[serde(default)]
    pub distance_miles: f64,
    #[serde(default)]
    pub duration_hours: f64,
}

/// One leg of the trip. Distance, duration and instructions pass through
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    #[serde(default, deserialize_with = "crate::geometry::deserialize_lenient")]
    pub geometry: Option<GeometryPayload>,
    #[serde(default)]
    pub distance_miles: f64,
    #[serde(default)]
    pub duration_hours: f64,
    #[serde(default)]
    pub instructions: Vec<Instruction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteData {
    pub current_location: NamedLocation,
    pub pickup_location: NamedLocation,
    pub dropoff_location: NamedLocation,
    pub route_to_pickup: RouteSegment,
    pub route_to_dropoff: RouteSegment,
    #[serde(default)]
    pub total_distance_miles: f64,
    #[serde(default)]
    pub total_duration_hours: f64,
}

impl RouteData {
    /// The three stops in trip order.
    pub fn locations(&self) -> [(LocationRole, &NamedLocation); 3] {
        [
            (LocationRole::Current, &self.current_location),
            (LocationRole::Pickup, &self.pickup_location),
            (LocationRole::Dropoff, &self.dropoff_location),
        ]
    }

    /// The two legs in trip order.
    pub fn segments(&self) -> [(SegmentRole, &RouteSegment); 2] {
        [
            (SegmentRole::ToPickup, &self.route_to_pickup),
            (SegmentRole::ToDropoff, &self.route_to_dropoff),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub activity: String,
    pub start_time: String,
    #[serde(rename = "duration")]
    pub duration_hours: f64,
    #[serde(rename = "distance", default)]
    pub distance_miles: f64,
    #[serde(default)]
    pub status: Option<String>,
}

impl TimelineEntry {
    pub fn duration_label(&self) -> String {
        format!("{}h", format_tenths(self.duration_hours))
    }

    /// Only legs that moved the truck carry a distance.
    pub fn distance_label(&self) -> Option<String> {
        (self.distance_miles > 0.0).then(|| format!("{} mi", format_tenths(self.distance_miles)))
    }
}

/// Duty totals for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLogEntry {
    pub date: String,
    pub driving_hours: f64,
    pub on_duty_hours: f64,
    pub off_duty_hours: f64,
    #[serde(default)]
    pub sleeper_hours: f64,
    pub total_miles: f64,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    #[serde(default)]
    pub daily_logs: Vec<DailyLogEntry>,
}

/// A rendered log sheet: a base64-encoded PNG.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogSheet(String);

impl LogSheet {
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    pub fn as_base64(&self) -> &str {
        &self.0
    }

    /// `data:` URI suitable for an image source.
    pub fn data_uri(&self) -> String {
        format!("data:image/png;base64,{}", self.0)
    }

    pub fn decode_png(&self) -> Result<Vec<u8>> {
        Ok(STANDARD.decode(&self.0)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    pub total_distance_miles: f64,
    pub estimated_duration_hours: f64,
    pub num_rest_breaks: u32,
    pub num_fuel_stops: u32,
    pub num_days: u32,
    pub cycle_hours_remaining: f64,
}

impl TripSummary {
    /// Estimated duration as `"<h>h <m>m"`.
    pub fn duration_label(&self) -> String {
        let hours = self.estimated_duration_hours.floor();
        let minutes = ((self.estimated_duration_hours - hours) * 60.0).round();
        format!("{}h {}m", hours as i64, minutes as i64)
    }
}

/// One decimal place, exact ties rounded away from zero (`2.25` is `"2.3"`).
///
/// `{:.1}` alone rounds ties to even, which turns quarter hours down.
pub fn format_tenths(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}
