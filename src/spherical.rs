//! Cartesian to spherical coordinate conversion.
//!
//! Angles follow the physics convention: the azimuth is measured in the x-y
//! plane from the positive x axis and normalised into `[0, 2π)`, the
//! colatitude is measured from the positive z axis.

use crate::{GeometryError, Result};
use std::f64::consts::PI;
use std::fmt;

pub const RAD2DEG: f64 = 180.0 / PI;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cartesian {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Spherical coordinates, angles in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    pub radius: f64,
    pub azimuth: f64,
    pub colatitude: f64,
}

impl Cartesian {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean norm, without intermediate overflow or underflow.
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Convert to spherical coordinates.
    ///
    /// At the origin the colatitude is `acos(0/0)`, i.e. NaN. Use
    /// [`Cartesian::try_to_spherical`] to get an error instead.
    pub fn to_spherical(&self) -> Spherical {
        let radius = self.norm();

        let mut azimuth = self.y.atan2(self.x);
        if azimuth < 0.0 {
            azimuth += 2.0 * PI;
        }
        // -1e-20 + 2π rounds to 2π
        if azimuth >= 2.0 * PI {
            azimuth = 0.0;
        }

        // NaN at the origin survives the clamp
        let colatitude = (self.z / radius).clamp(-1.0, 1.0).acos();

        log::debug!(
            "({}, {}, {}) -> r={radius}, phi={azimuth}, theta={colatitude}",
            self.x,
            self.y,
            self.z
        );

        Spherical {
            radius,
            azimuth,
            colatitude,
        }
    }

    pub fn try_to_spherical(&self) -> Result<Spherical> {
        let spherical = self.to_spherical();
        if spherical.is_defined() {
            Ok(spherical)
        } else {
            Err(GeometryError::UndefinedColatitude)
        }
    }
}

impl Spherical {
    pub fn new(radius: f64, azimuth: f64, colatitude: f64) -> Self {
        Self {
            radius,
            azimuth,
            colatitude,
        }
    }

    pub fn to_cartesian(&self) -> Cartesian {
        let (sin_theta, cos_theta) = self.colatitude.sin_cos();
        let (sin_phi, cos_phi) = self.azimuth.sin_cos();
        Cartesian {
            x: self.radius * sin_theta * cos_phi,
            y: self.radius * sin_theta * sin_phi,
            z: self.radius * cos_theta,
        }
    }

    pub fn azimuth_degrees(&self) -> f64 {
        self.azimuth * RAD2DEG
    }

    pub fn colatitude_degrees(&self) -> f64 {
        self.colatitude * RAD2DEG
    }

    /// False when any component is NaN or infinite.
    pub fn is_defined(&self) -> bool {
        self.radius.is_finite() && self.azimuth.is_finite() && self.colatitude.is_finite()
    }
}

/// Honors the formatter precision (`{:.2}`), six decimals otherwise.
impl fmt::Display for Spherical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(crate::config::DEFAULT_PRECISION);
        write!(
            f,
            "Longitude = {:.p$} deg, Colatitude = {:.p$} deg, Radius = {:.p$}",
            self.azimuth_degrees(),
            self.colatitude_degrees(),
            self.radius,
            p = precision
        )
    }
}
