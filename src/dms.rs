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

//! The dms module converts sexagesimal degree, minute, second and hemisphere
//! input into signed decimal degrees.
//!
//! The latitude sign convention is the standard one: North positive,
//! South negative.
//!
//! The longitude sign convention is a caller policy, see [`LongitudeSign`].
//! The default, [`LongitudeSign::EastNegative`], negates Eastern longitudes
//! and keeps Western longitudes positive. It is the *inverse* of the standard
//! geodetic convention, retained because a body of survey computation sheets
//! records longitudes West-positive; callers wanting the standard convention
//! select [`LongitudeSign::EastPositive`] explicitly.
//!
//! Minutes and seconds are conventionally below 60 but the conversion does
//! not enforce this; validating raw field input is the caller's
//! responsibility.

use angle_sc::Degrees;

/// The hemisphere of a latitude.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LatitudeHemisphere {
    /// Northern hemisphere, positive latitudes.
    North,
    /// Southern hemisphere, negative latitudes.
    South,
}

/// The hemisphere of a longitude.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LongitudeHemisphere {
    /// East of the prime meridian.
    East,
    /// West of the prime meridian.
    West,
}

/// The sign convention applied to longitudes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LongitudeSign {
    /// East negative, West positive: the survey-sheet convention of the
    /// source computations. The default.
    #[default]
    EastNegative,
    /// East positive, West negative: the standard geodetic convention.
    EastPositive,
}

/// Combine degrees, minutes and seconds into an unsigned decimal magnitude.
/// * `degrees`, `minutes`, `seconds` - non-negative sexagesimal components.
#[must_use]
pub fn magnitude(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    libm::fabs(degrees) + minutes / 60.0 + seconds / 3600.0
}

/// Convert a sexagesimal latitude to signed decimal degrees,
/// North positive.
/// * `degrees`, `minutes`, `seconds` - non-negative sexagesimal components.
/// * `hemisphere` - the latitude hemisphere.
///
/// # Examples
/// ```
/// use angle_sc::Degrees;
/// use sodano_geodesic::dms::{latitude, LatitudeHemisphere};
///
/// assert_eq!(Degrees(10.5), latitude(10.0, 30.0, 0.0, LatitudeHemisphere::North));
/// assert_eq!(Degrees(-10.5), latitude(10.0, 30.0, 0.0, LatitudeHemisphere::South));
/// ```
#[must_use]
pub fn latitude(
    degrees: f64,
    minutes: f64,
    seconds: f64,
    hemisphere: LatitudeHemisphere,
) -> Degrees {
    let value = magnitude(degrees, minutes, seconds);
    match hemisphere {
        LatitudeHemisphere::North => Degrees(value),
        LatitudeHemisphere::South => Degrees(-value),
    }
}

/// Convert a sexagesimal longitude to signed decimal degrees under the
/// given sign convention.
/// * `degrees`, `minutes`, `seconds` - non-negative sexagesimal components.
/// * `hemisphere` - the longitude hemisphere.
/// * `sign` - the sign convention to apply, see [`LongitudeSign`].
#[must_use]
pub fn longitude(
    degrees: f64,
    minutes: f64,
    seconds: f64,
    hemisphere: LongitudeHemisphere,
    sign: LongitudeSign,
) -> Degrees {
    let value = magnitude(degrees, minutes, seconds);
    let east_positive = match sign {
        LongitudeSign::EastNegative => false,
        LongitudeSign::EastPositive => true,
    };
    match hemisphere {
        LongitudeHemisphere::East if east_positive => Degrees(value),
        LongitudeHemisphere::East => Degrees(-value),
        LongitudeHemisphere::West if east_positive => Degrees(-value),
        LongitudeHemisphere::West => Degrees(value),
    }
}
