//! trip-viewer core
//!
//! Turns a trip-calculation response into map layers, a viewport fit and
//! pageable daily duty logs.

pub mod error;
pub mod traits;
pub mod polyline;
pub mod geometry;
pub mod bounds;
pub mod trip;
pub mod compose;
pub mod cursor;
pub mod log_viewer;
pub mod session;
pub mod client;
