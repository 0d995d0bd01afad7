//! Test fixtures for trip-viewer.
//!
//! Provides trip-calculation responses shaped like the planning service's
//! output, with each kind of route geometry it can send.

#![allow(dead_code)]

pub mod trip_responses;

pub use trip_responses::*;
