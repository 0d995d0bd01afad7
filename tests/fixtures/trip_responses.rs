//! Trip-calculation responses for a Chicago → St. Louis → Dallas haul.

/// Canonical encoded polyline and its decoded points.
pub const CANONICAL_POLYLINE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";
pub const CANONICAL_POINTS: &[(f64, f64)] = &[(38.5, -120.2), (40.7, -120.95), (43.252, -126.453)];

/// One-pixel PNG, base64.
pub const TINY_PNG: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

fn daily_logs_json() -> String {
    r#"[
        {
            "date": "2024-03-01",
            "total_miles": 605.0,
            "driving_hours": 11.0,
            "on_duty_hours": 12.0,
            "off_duty_hours": 12.0,
            "sleeper_hours": 0,
            "timeline": [
                {"start_time": "2024-03-01T06:00:00", "duration": 1.0, "status": "on_duty", "activity": "Pickup", "distance": 0},
                {"start_time": "2024-03-01T07:00:00", "duration": 11.0, "status": "driving", "activity": "Driving", "distance": 605.0}
            ]
        },
        {
            "date": "2024-03-02",
            "total_miles": 320.0,
            "driving_hours": 5.8,
            "on_duty_hours": 6.8,
            "off_duty_hours": 17.2,
            "timeline": [
                {"start_time": "2024-03-02T05:00:00", "duration": 5.8, "status": "driving", "activity": "Driving", "distance": 320.0},
                {"start_time": "2024-03-02T10:48:00", "duration": 1.0, "status": "on_duty", "activity": "Dropoff"}
            ]
        }
    ]"#
    .to_string()
}

fn response_json(to_pickup: &str, to_dropoff: &str, sheets: &[&str]) -> String {
    let sheets = sheets
        .iter()
        .map(|sheet| format!("\"{sheet}\""))
        .collect::<Vec<_>>()
        .join(",");
    format!(
        r#"{{
        "route": {{
            "current_location": {{"address": "Chicago, IL", "coordinates": [41.8781, -87.6298]}},
            "pickup_location": {{"address": "St. Louis, MO", "coordinates": [38.627, -90.1994]}},
            "dropoff_location": {{"address": "Dallas, TX", "coordinates": [32.7767, -96.797]}},
            "route_to_pickup": {{
                "distance_miles": 297.1,
                "duration_hours": 4.6,
                "geometry": {to_pickup},
                "instructions": [{{"instruction": "Depart onto I-55 S", "distance_miles": 297.1, "duration_hours": 4.6}}]
            }},
            "route_to_dropoff": {{
                "distance_miles": 630.4,
                "duration_hours": 9.5,
                "geometry": {to_dropoff},
                "instructions": []
            }},
            "total_distance_miles": 927.5,
            "total_duration_hours": 14.1
        }},
        "trip_plan": {{
            "daily_logs": {logs},
            "segments": [],
            "num_rest_breaks": 1
        }},
        "log_sheets": [{sheets}],
        "summary": {{
            "total_distance_miles": 927.5,
            "estimated_duration_hours": 16.8,
            "num_rest_breaks": 1,
            "num_fuel_stops": 0,
            "num_days": 2,
            "cycle_hours_remaining": 51.2
        }}
    }}"#,
        logs = daily_logs_json(),
    )
}

/// Pickup leg as an encoded polyline, dropoff leg as GeoJSON.
pub fn mixed_geometry_response() -> String {
    response_json(
        &format!("\"{CANONICAL_POLYLINE}\""),
        r#"{"type": "LineString", "coordinates": [[-90.1994, 38.627], [-94.5786, 39.0997], [-96.797, 32.7767]]}"#,
        &[TINY_PNG, TINY_PNG],
    )
}

/// Both legs without geometry.
pub fn no_geometry_response() -> String {
    response_json("null", "null", &[TINY_PNG, TINY_PNG])
}

/// Pickup leg truncated mid-point, dropoff leg fine.
pub fn malformed_pickup_response() -> String {
    response_json(
        "\"_p~iF\"",
        r#"{"type": "LineString", "coordinates": [[-90.1994, 38.627], [-96.797, 32.7767]]}"#,
        &[TINY_PNG, TINY_PNG],
    )
}

/// Pickup leg is a GeoJSON object with no coordinates, dropoff leg fine.
pub fn unrecognized_geometry_response() -> String {
    response_json(
        r#"{"type": "LineString"}"#,
        r#"{"type": "LineString", "coordinates": [[-90.1994, 38.627], [-96.797, 32.7767]]}"#,
        &[TINY_PNG, TINY_PNG],
    )
}

/// Dropoff leg with a null and a non-numeric position among good ones.
pub fn bad_position_response() -> String {
    response_json(
        &format!("\"{CANONICAL_POLYLINE}\""),
        r#"{"type": "LineString", "coordinates": [[null, 1.0], [-90.1994, 38.627], ["x", "y"], [-96.797, 32.7767]]}"#,
        &[TINY_PNG, TINY_PNG],
    )
}

/// Two daily logs but a single log sheet.
pub fn mismatched_sheets_response() -> String {
    response_json("null", "null", &[TINY_PNG])
}
