//! Geometry types for KML placemarks

use crate::error::{KmlError, Result};
use crate::render::{Render, RenderOptions};
use std::fmt::Write;

/// A point on the Earth's surface.
///
/// Latitude and longitude are validated on construction; a `Point` that
/// exists always has finite coordinates inside their ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    latitude: f64,
    longitude: f64,
    /// Meters. Ignored for placement since points are clamped to ground.
    altitude: f64,
}

impl Point {
    /// Create a new point.
    ///
    /// # Errors
    ///
    /// Returns [`KmlError::InvalidLatitude`] if `latitude` is NaN, infinite
    /// or outside [-90, 90], and [`KmlError::InvalidLongitude`] if
    /// `longitude` is NaN, infinite or outside [-180, 180]. Latitude is
    /// checked first.
    ///
    /// A non-finite `altitude` is replaced by `0.0`.
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(KmlError::InvalidLatitude(latitude));
        }

        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(KmlError::InvalidLongitude(longitude));
        }

        let altitude = if altitude.is_finite() { altitude } else { 0.0 };

        Ok(Self {
            latitude,
            longitude,
            altitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }
}

impl Render for Point {
    fn render_into(&self, out: &mut String, _options: &RenderOptions) {
        out.push_str("<Point>\n");
        out.push_str("<extrude>0</extrude>\n");
        out.push_str("<altitudeMode>clampToGround</altitudeMode>\n");
        // KML orders coordinates lon,lat,alt
        let _ = writeln!(
            out,
            "<coordinates>{:.6},{:.6},{:.6}</coordinates>",
            self.longitude, self.latitude, self.altitude
        );
        out.push_str("</Point>\n");
    }
}

/// The geometry carried by a [`Placemark`](crate::Placemark).
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
}

impl From<Point> for Geometry {
    fn from(point: Point) -> Self {
        Geometry::Point(point)
    }
}

impl Render for Geometry {
    fn render_into(&self, out: &mut String, options: &RenderOptions) {
        match self {
            Geometry::Point(point) => point.render_into(out, options),
        }
    }
}
