//! The current trip result and everything derived from it.

use std::sync::Arc;

use tracing::info;

use crate::compose::{MapComposer, MapStyle, MapView};
use crate::error::Result;
use crate::log_viewer::LogViewer;
use crate::traits::MapSurface;
use crate::trip::{RouteData, TripResponse, TripSummary};

struct LoadedTrip {
    route: Arc<RouteData>,
    logs: LogViewer,
    summary: Option<TripSummary>,
}

/// Holds one trip result at a time.
///
/// Loading a response replaces the previous one wholesale: the map refits
/// and the log cursor goes back to the first day.
pub struct TripSession<S> {
    composer: MapComposer<S>,
    trip: Option<LoadedTrip>,
}

impl<S: MapSurface> TripSession<S> {
    pub fn new(style: MapStyle, surface: S) -> Self {
        Self {
            composer: MapComposer::new(style, surface),
            trip: None,
        }
    }

    /// Replaces the current trip with `response`.
    ///
    /// On error the previous trip is left as it was.
    pub fn load(&mut self, response: TripResponse) -> Result<MapView> {
        let logs = LogViewer::new(response.trip_plan.daily_logs, response.log_sheets)?;
        info!(days = logs.len(), "loaded trip result");

        let route = Arc::new(response.route);
        let view = self.composer.update(Some(&route));
        self.trip = Some(LoadedTrip {
            route,
            logs,
            summary: response.summary,
        });
        Ok(view)
    }

    pub fn clear(&mut self) -> MapView {
        self.trip = None;
        self.composer.update(None)
    }

    /// Current map layers, or the placeholder. Never refits an unchanged
    /// trip.
    pub fn map_view(&mut self) -> MapView {
        let route = self.trip.as_ref().map(|trip| Arc::clone(&trip.route));
        self.composer.update(route.as_ref())
    }

    pub fn route(&self) -> Option<&RouteData> {
        self.trip.as_ref().map(|trip| trip.route.as_ref())
    }

    pub fn logs(&self) -> Option<&LogViewer> {
        self.trip.as_ref().map(|trip| &trip.logs)
    }

    pub fn logs_mut(&mut self) -> Option<&mut LogViewer> {
        self.trip.as_mut().map(|trip| &mut trip.logs)
    }

    pub fn summary(&self) -> Option<&TripSummary> {
        self.trip.as_ref().and_then(|trip| trip.summary.as_ref())
    }

    pub fn surface(&self) -> &S {
        self.composer.surface()
    }
}
