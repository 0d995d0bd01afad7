//! Map composition: markers, route polylines and the viewport fit.
//!
//! [`MapComposer::plan`] is a pure function of the route data.
//! [`MapComposer::update`] wraps it with the one side effect this crate
//! has, telling the [`MapSurface`] to fit a new region, and only does so when
//! the route data it is handed is a different allocation from last time.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::bounds::{BoundingRegion, compute_bounds};
use crate::error::ViewError;
use crate::geometry::normalize;
use crate::polyline::{GeoPoint, Polyline};
use crate::traits::MapSurface;
use crate::trip::{LocationRole, RouteData, SegmentRole};

/// Shown in place of the map when there is no route yet.
pub const PLACEHOLDER_MESSAGE: &str = "Enter trip details to see route";

/// Circular marker icon geometry, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerIcon {
    pub diameter_px: u32,
    pub anchor_px: (u32, u32),
    pub border_px: u32,
    pub border_color: String,
}

impl Default for MarkerIcon {
    fn default() -> Self {
        Self {
            diameter_px: 25,
            anchor_px: (12, 12),
            border_px: 3,
            border_color: "white".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: String,
    pub weight: u32,
    pub opacity: f64,
}

impl LineStyle {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            weight: 4,
            opacity: 0.7,
        }
    }
}

/// Styling and viewport settings handed to a [`MapComposer`].
#[derive(Debug, Clone, PartialEq)]
pub struct MapStyle {
    pub current_color: String,
    pub pickup_color: String,
    pub dropoff_color: String,
    pub marker_icon: MarkerIcon,
    pub to_pickup: LineStyle,
    pub to_dropoff: LineStyle,
    /// Padding applied around the fitted region, in pixels.
    pub fit_padding_px: (u32, u32),
    pub initial_zoom: u8,
    pub tile_url: String,
    pub tile_attribution: String,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            current_color: "#3b82f6".to_string(),
            pickup_color: "#10b981".to_string(),
            dropoff_color: "#ef4444".to_string(),
            marker_icon: MarkerIcon::default(),
            to_pickup: LineStyle::new("#3b82f6"),
            to_dropoff: LineStyle::new("#10b981"),
            fit_padding_px: (50, 50),
            initial_zoom: 6,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            tile_attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors".to_string(),
        }
    }
}

impl MapStyle {
    pub fn marker_color(&self, role: LocationRole) -> &str {
        match role {
            LocationRole::Current => &self.current_color,
            LocationRole::Pickup => &self.pickup_color,
            LocationRole::Dropoff => &self.dropoff_color,
        }
    }

    pub fn line_style(&self, role: SegmentRole) -> &LineStyle {
        match role {
            SegmentRole::ToPickup => &self.to_pickup,
            SegmentRole::ToDropoff => &self.to_dropoff,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerLayer {
    pub role: LocationRole,
    pub position: GeoPoint,
    pub color: String,
    pub title: &'static str,
    /// Popup body: the location's address.
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PolylineLayer {
    pub role: SegmentRole,
    pub path: Polyline,
    pub style: LineStyle,
}

/// Instruction to fit the viewport to `region` with pixel padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitCommand {
    pub region: BoundingRegion,
    pub padding_px: (u32, u32),
}

/// Declarative layer set for one route.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSet {
    pub markers: Vec<MarkerLayer>,
    pub polylines: Vec<PolylineLayer>,
    pub center: GeoPoint,
    pub zoom: u8,
}

/// Everything derived from one [`RouteData`].
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub layers: LayerSet,
    /// `None` only if bounds could not be computed.
    pub fit: Option<FitCommand>,
    /// Segments left out because their geometry failed to decode.
    pub omitted: Vec<SegmentRole>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapView {
    Placeholder { message: &'static str },
    Route(LayerSet),
}

pub struct MapComposer<S> {
    style: MapStyle,
    surface: S,
    current: Option<(Arc<RouteData>, Composition)>,
}

impl<S: MapSurface> MapComposer<S> {
    pub fn new(style: MapStyle, surface: S) -> Self {
        Self {
            style,
            surface,
            current: None,
        }
    }

    pub fn style(&self) -> &MapStyle {
        &self.style
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Composes layers and the fit command for `route`.
    ///
    /// A segment whose geometry fails to decode is left out; the fit still
    /// covers the markers and the remaining segment.
    pub fn plan(&self, route: &RouteData) -> Composition {
        let markers: Vec<MarkerLayer> = route
            .locations()
            .into_iter()
            .map(|(role, location)| MarkerLayer {
                role,
                position: location.coordinates,
                color: self.style.marker_color(role).to_string(),
                title: role.title(),
                label: location.address.clone(),
            })
            .collect();

        let mut polylines = Vec::new();
        let mut omitted = Vec::new();
        for (role, segment) in route.segments() {
            let path = match normalize(segment.geometry.as_ref()) {
                Ok(path) => path,
                Err(err) => {
                    let err = ViewError::from(err);
                    warn!(?role, error = %err, "omitting route segment");
                    omitted.push(role);
                    continue;
                }
            };
            debug!(?role, points = path.len(), "normalized route segment");
            if !path.is_empty() {
                polylines.push(PolylineLayer {
                    role,
                    path,
                    style: self.style.line_style(role).clone(),
                });
            }
        }

        let marker_points: Vec<GeoPoint> = markers.iter().map(|marker| marker.position).collect();
        let point_sets: Vec<&[GeoPoint]> = polylines.iter().map(|line| line.path.points()).collect();
        let fit = match compute_bounds(&point_sets, &marker_points) {
            Ok(region) => Some(FitCommand {
                region,
                padding_px: self.style.fit_padding_px,
            }),
            Err(err) => {
                warn!(error = %err, "no bounds for route");
                None
            }
        };

        Composition {
            layers: LayerSet {
                markers,
                polylines,
                center: route.pickup_location.coordinates,
                zoom: self.style.initial_zoom,
            },
            fit,
            omitted,
        }
    }

    /// Brings the composer in line with `route`.
    ///
    /// The surface is told to fit only when `route` is a different `Arc`
    /// than the one last seen. `None` drops the current route and issues
    /// nothing.
    pub fn update(&mut self, route: Option<&Arc<RouteData>>) -> MapView {
        let Some(route) = route else {
            self.current = None;
            return MapView::Placeholder {
                message: PLACEHOLDER_MESSAGE,
            };
        };

        if let Some((seen, composition)) = &self.current {
            if Arc::ptr_eq(seen, route) {
                return MapView::Route(composition.layers.clone());
            }
        }

        let composition = self.plan(route);
        if let Some(fit) = &composition.fit {
            debug!(region = ?fit.region, padding = ?fit.padding_px, "fitting map to route");
            self.surface.fit_bounds(fit);
        }
        let view = MapView::Route(composition.layers.clone());
        self.current = Some((Arc::clone(route), composition));
        view
    }

    /// The current composition, if a route is loaded.
    pub fn composition(&self) -> Option<&Composition> {
        self.current.as_ref().map(|(_, composition)| composition)
    }
}
