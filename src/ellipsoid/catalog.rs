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

//! The catalog module contains the defining parameters of the named
//! reference ellipsoids supported by the library.
//!
//! Reference sources publish either the flattening ratio directly (WGS 84)
//! or its inverse (International 1924, Clarke 1880); each entry carries the
//! parameter in the form its source defines, and
//! [`Ellipsoid::from_inverse_flattening`](crate::Ellipsoid::from_inverse_flattening)
//! performs the `f = 1/f_inv` conversion at the construction boundary.

use crate::Metres;

/// The WGS 84 geoid primary parameters from the ICAO
/// [WGS 84 Implementation Manual Version 2.4](https://www.icao.int/safety/pbn/Documentation/EUROCONTROL/Eurocontrol%20WGS%2084%20Implementation%20Manual.pdf)
/// Chapter 3, page 14.
pub mod wgs84 {
    use super::Metres;

    /// The WGS 84 Semimajor axis measured in metres.
    /// This is the radius at the equator.
    pub const A: Metres = Metres(6_378_137.0);

    /// The WGS 84 flattening, a ratio.
    /// This is the flattening of the ellipsoid at the poles.
    pub const F: f64 = 1.0 / 298.257_223_563;
}

/// The International 1924 (Hayford) ellipsoid parameters.
pub mod international {
    use super::Metres;

    /// The International 1924 Semimajor axis measured in metres.
    pub const A: Metres = Metres(6_378_388.0);

    /// The International 1924 inverse flattening, `1/f`.
    pub const INV_F: f64 = 297.0;
}

/// The Clarke 1880 ellipsoid parameters.
pub mod clarke_1880 {
    use super::Metres;

    /// The Clarke 1880 Semimajor axis measured in metres.
    pub const A: Metres = Metres(6_378_249.145);

    /// The Clarke 1880 inverse flattening, `1/f`.
    pub const INV_F: f64 = 293.465;
}
