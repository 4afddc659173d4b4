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

//! The error module defines the error type returned by the direct geodesic
//! solver when its inputs are physically invalid.

use thiserror::Error;

/// The reasons a direct geodesic calculation can be rejected.
///
/// Input variants are detected by validation at the solver boundary and
/// degenerate geometry is detected before it can drive a series divisor to
/// zero, so the solver never returns `NaN` or infinity in place of a result.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum GeodesicError {
    /// The Semimajor axis is not positive or the flattening ratio lies
    /// outside `[0, 1)`, i.e. the ellipsoid is degenerate or inverted.
    #[error("invalid ellipsoid: a = {a} m, f = {f}")]
    InvalidEllipsoid {
        /// The Semimajor axis in metres.
        a: f64,
        /// The flattening ratio.
        f: f64,
    },

    /// The geodesic distance is negative or not finite.
    #[error("invalid distance: {metres} m")]
    InvalidDistance {
        /// The rejected distance in metres.
        metres: f64,
    },

    /// The start latitude lies outside `[-90, 90]` degrees or is not finite.
    #[error("invalid latitude: {degrees} degrees")]
    InvalidLatitude {
        /// The rejected latitude in degrees.
        degrees: f64,
    },

    /// The geometry drives a divisor of the series to (near-)zero:
    /// a polar start point, an azimuth along a meridian or a near-antipodal
    /// arc length.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),
}
