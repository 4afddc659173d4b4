// Copyright (c) 2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! sodano-geodesic
//!
//! A library for solving the direct geodesic problem on the surface of a
//! reference ellipsoid with Sodano's closed-form auxiliary-sphere series
//! method.
//!
//! The [direct geodesic problem](https://en.wikipedia.org/wiki/Geodesics_on_an_ellipsoid)
//! is: given a start position, the azimuth of a geodesic at that position
//! and a distance along the geodesic, find the destination position and the
//! azimuth from the destination back to the start. Sodano's method maps the
//! geodesic to a great circle on the auxiliary sphere at the parametric
//! latitude and corrects the angular distance with a closed-form series,
//! truncated at second order in the squared eccentricity, so the solution
//! requires no iteration.
//!
//! ## Design
//!
//! The [`Ellipsoid`] struct represents an ellipsoid of revolution defined by
//! its Semimajor axis and flattening ratio. The statics [`WGS84_ELLIPSOID`],
//! [`INTERNATIONAL_ELLIPSOID`] and [`CLARKE_1880_ELLIPSOID`] are built from
//! the named reference parameters in [`ellipsoid::catalog`].
//!
//! [`solve_direct`] is a pure function: each call validates its inputs,
//! rejecting unphysical ellipsoids, distances and latitudes and degenerate
//! geometry with a typed [`GeodesicError`] before any trigonometric step,
//! and produces a fresh [`DirectSolution`] holding the destination, the
//! back-azimuth and the ordered [`Trace`] of every named intermediate value
//! for audit display.
//!
//! The [`dms`] module converts sexagesimal degree/minute/second and
//! hemisphere input into the signed decimal degrees the solver consumes.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Angle`,
//!   `Degrees` and `Radians` and perform trigonometric calculations;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define
//!   `LatLong`;
//! - [icao-units](https://crates.io/crates/icao-units) - to define `Metres`;
//! - [thiserror](https://crates.io/crates/thiserror) - to derive the error
//!   type.

pub mod dms;
pub mod ellipsoid;
pub mod error;
pub mod geodesic;
pub mod trace;

pub use angle_sc::{Angle, Degrees, Radians};
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;

pub use error::GeodesicError;
pub use geodesic::{solve_direct, DirectSolution};
pub use trace::{Trace, TraceStep};

use once_cell::sync::Lazy;

/// The parameters of an `Ellipsoid`.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The flattening of the ellipsoid, a ratio.
    f: f64,

    /// The Semiminor axis of the ellipsoid.
    b: Metres,
    /// One minus the flattening ratio.
    one_minus_f: f64,
    /// The square of the Eccentricity of the ellipsoid.
    e_2: f64,
}

impl Ellipsoid {
    /// Constructor.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `f` - the flattening of the `Ellipsoid`, a ratio.
    #[must_use]
    pub fn new(a: Metres, f: f64) -> Self {
        Self {
            a,
            f,
            b: ellipsoid::calculate_minor_axis(a, f),
            one_minus_f: 1.0 - f,
            e_2: ellipsoid::calculate_sq_eccentricity(f),
        }
    }

    /// Construct an `Ellipsoid` from its inverse flattening, `1/f`.
    ///
    /// Reference sources publish the flattening in either form; this is the
    /// `f = 1/f_inv` conversion at the construction boundary.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `inv_f` - the inverse flattening of the `Ellipsoid`.
    #[must_use]
    pub fn from_inverse_flattening(a: Metres, inv_f: f64) -> Self {
        Self::new(a, 1.0 / inv_f)
    }

    /// Construct an `Ellipsoid` with the WGS 84 parameters.
    #[must_use]
    pub fn wgs84() -> Self {
        Self::new(ellipsoid::catalog::wgs84::A, ellipsoid::catalog::wgs84::F)
    }

    /// Construct an `Ellipsoid` with the International 1924 parameters.
    #[must_use]
    pub fn international() -> Self {
        Self::from_inverse_flattening(
            ellipsoid::catalog::international::A,
            ellipsoid::catalog::international::INV_F,
        )
    }

    /// Construct an `Ellipsoid` with the Clarke 1880 parameters.
    #[must_use]
    pub fn clarke_1880() -> Self {
        Self::from_inverse_flattening(
            ellipsoid::catalog::clarke_1880::A,
            ellipsoid::catalog::clarke_1880::INV_F,
        )
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// One minus the flattening ratio.
    #[must_use]
    pub const fn one_minus_f(&self) -> f64 {
        self.one_minus_f
    }

    /// The square of the Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn e_2(&self) -> f64 {
        self.e_2
    }

    /// Convert a geodetic Latitude to a parametric Latitude on the
    /// auxiliary sphere.
    /// * `lat` - the geodetic Latitude
    #[must_use]
    pub fn calculate_parametric_latitude(&self, lat: Angle) -> Angle {
        ellipsoid::calculate_parametric_latitude(lat, self.one_minus_f)
    }

    /// Convert a parametric Latitude on the auxiliary sphere to a
    /// geodetic Latitude.
    /// * `beta` - the parametric Latitude
    #[must_use]
    pub fn calculate_geodetic_latitude(&self, beta: Angle) -> Angle {
        ellipsoid::calculate_geodetic_latitude(beta, self.one_minus_f)
    }
}

/// A static instance of the WGS 84 `Ellipsoid`.
pub static WGS84_ELLIPSOID: Lazy<Ellipsoid> = Lazy::new(Ellipsoid::wgs84);

/// A static instance of the International 1924 `Ellipsoid`.
pub static INTERNATIONAL_ELLIPSOID: Lazy<Ellipsoid> = Lazy::new(Ellipsoid::international);

/// A static instance of the Clarke 1880 `Ellipsoid`.
pub static CLARKE_1880_ELLIPSOID: Lazy<Ellipsoid> = Lazy::new(Ellipsoid::clarke_1880);
