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

//! The geodesic module solves the direct geodesic problem on the surface of
//! an ellipsoid with Sodano's closed-form auxiliary-sphere series: given a
//! start position, a forward azimuth and a distance, it calculates the
//! destination position and the back-azimuth.
//!
//! The geodesic is projected onto the auxiliary sphere at the parametric
//! latitude of the start point, where it follows a great circle whose
//! inclination is fixed by the Clairaut-like invariant `cosβ0`. The angular
//! distance along that great circle is corrected for the ellipsoid by a
//! series truncated at second order in the squared eccentricity, and the
//! longitude difference is reduced from the auxiliary sphere to the
//! ellipsoid before the destination parametric latitude is converted back
//! to a geodetic latitude.
//!
//! Back-azimuth and longitude difference are resolved with two-argument
//! `atan2`, so all four azimuth quadrants and both signs of longitude
//! difference are handled; the cotangent forms of both quantities are still
//! recorded in the [`Trace`] wherever they are finite.

#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use crate::ellipsoid::{calculate_geodetic_latitude, calculate_parametric_latitude};
use crate::error::GeodesicError;
use crate::trace::Trace;
use crate::{Ellipsoid, Metres};
use angle_sc::{Angle, Degrees, Radians};
use core::fmt;
use unit_sphere::LatLong;

/// The tolerance below which a series divisor is treated as zero.
pub const DEGENERACY_TOLERANCE: f64 = 1e-12;

/// The result of a direct geodesic calculation: the destination position,
/// the back-azimuth and the ordered trace of intermediate values.
#[derive(Clone, Debug)]
pub struct DirectSolution {
    /// The destination position in geodetic coordinates.
    point2: LatLong,
    /// The azimuth from the destination back to the start position,
    /// clockwise from North in `[0, 360)` degrees.
    azimuth21: Degrees,
    /// The named intermediate values, in computation order.
    trace: Trace,
}

impl DirectSolution {
    /// Accessor for the destination position.
    #[must_use]
    pub const fn point2(&self) -> &LatLong {
        &self.point2
    }

    /// Accessor for the back-azimuth in `[0, 360)` degrees.
    #[must_use]
    pub const fn azimuth21(&self) -> Degrees {
        self.azimuth21
    }

    /// Accessor for the computation trace.
    #[must_use]
    pub const fn trace(&self) -> &Trace {
        &self.trace
    }
}

impl fmt::Display for DirectSolution {
    /// Render a single-line summary of the solution to sub-metre precision.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lat2: {:.9}, lon2: {:.9}, azimuth21: {:.9}",
            self.point2.lat().0,
            self.point2.lon().0,
            self.azimuth21.0
        )
    }
}

/// Validate the solver inputs before any trigonometric step.
fn validate_inputs(
    a: &LatLong,
    distance: Metres,
    ellipsoid: &Ellipsoid,
) -> Result<(), GeodesicError> {
    let semimajor = ellipsoid.a().0;
    let f = ellipsoid.f();
    if !semimajor.is_finite() || semimajor <= 0.0 || !(0.0..1.0).contains(&f) {
        return Err(GeodesicError::InvalidEllipsoid { a: semimajor, f });
    }

    if !distance.0.is_finite() || distance.0 < 0.0 {
        return Err(GeodesicError::InvalidDistance { metres: distance.0 });
    }

    let lat = a.lat().0;
    if !lat.is_finite() || 90.0 < libm::fabs(lat) {
        return Err(GeodesicError::InvalidLatitude { degrees: lat });
    }
    if libm::fabs(lat) == 90.0 {
        return Err(GeodesicError::DegenerateGeometry(
            "polar start point, reduced latitude is undefined",
        ));
    }

    Ok(())
}

/// Solve the direct geodesic problem with Sodano's series method.
/// * `a` - the start position in geodetic coordinates.
/// * `azimuth` - the azimuth at the start position, clockwise from North.
/// * `distance` - the geodesic distance in metres.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the destination position, the back-azimuth in `[0, 360)` degrees
/// and the trace of named intermediate values, in computation order.
///
/// # Errors
///
/// Returns a [`GeodesicError`] when the ellipsoid parameters, the distance
/// or the start latitude are physically invalid, or when the geometry
/// degenerates: a polar start point, an azimuth along a meridian or a
/// near-antipodal arc, all of which drive a series divisor to zero.
///
/// # Examples
/// ```
/// use sodano_geodesic::{solve_direct, Degrees, LatLong, Metres, WGS84_ELLIPSOID};
///
/// // One degree of longitude East along the equator.
/// let start = LatLong::new(Degrees(0.0), Degrees(0.0));
/// let solution = solve_direct(&start, Degrees(90.0), Metres(111_319.49), &WGS84_ELLIPSOID).unwrap();
///
/// assert!(solution.point2().lat().0.abs() < 1e-12);
/// assert!((solution.point2().lon().0 - 1.0).abs() < 1e-4);
/// assert_eq!(270.0, solution.azimuth21().0);
/// ```
pub fn solve_direct(
    a: &LatLong,
    azimuth: Degrees,
    distance: Metres,
    ellipsoid: &Ellipsoid,
) -> Result<DirectSolution, GeodesicError> {
    validate_inputs(a, distance, ellipsoid)?;

    let b = ellipsoid.b().0;
    let e2 = ellipsoid.e_2();
    let f = ellipsoid.f();

    let mut trace = Trace::new();
    trace.push("semiminor_axis", b);
    trace.push("sq_eccentricity", e2);
    trace.push("phi1", a.lat().0);

    // Project the start latitude onto the auxiliary sphere.
    let beta1 = calculate_parametric_latitude(Angle::from(a.lat()), ellipsoid.one_minus_f());
    let sin_b1 = beta1.sin().0;
    let cos_b1 = beta1.cos().0;
    trace.push("beta1", Degrees::from(beta1).0);
    trace.push("azimuth12", azimuth.0);

    let azi = Angle::from(azimuth);
    let sin_az = azi.sin().0;
    let cos_az = azi.cos().0;

    // Clairaut-like invariant: the sine of the great circle inclination on
    // the auxiliary sphere, constant along the geodesic.
    let cos_beta0 = cos_b1 * sin_az;
    let g = cos_b1 * cos_az;
    trace.push("cos_beta0", cos_beta0);
    trace.push("g", g);
    if libm::fabs(cos_beta0) < DEGENERACY_TOLERANCE {
        return Err(GeodesicError::DegenerateGeometry(
            "azimuth along a meridian, geodesic inclination vanishes",
        ));
    }

    let m1 = (1.0 + 0.5 * e2 * sin_b1 * sin_b1) * (1.0 - cos_beta0 * cos_beta0);
    trace.push("m1", m1);

    // First-order estimate of the angular distance on the auxiliary sphere.
    let phi_s = distance.0 / b;
    let sin_ps = libm::sin(phi_s);
    let cos_ps = libm::cos(phi_s);
    trace.push("phi_s", phi_s);

    let a1 = (1.0 + 0.5 * e2 * sin_b1 * sin_b1)
        * (sin_b1 * sin_b1 * cos_ps + g * sin_b1 * sin_ps);
    trace.push("a1", a1);

    // Series correction of the angular distance, truncated at second order
    // in the squared eccentricity.
    let e4 = e2 * e2;
    let term1 = phi_s
        + a1 * (-(0.5 * e2) * sin_ps)
        + m1 * (-(0.25 * e2) * phi_s + 0.25 * e2 * sin_ps * cos_ps);
    let term2 = a1 * a1 * ((5.0 / 8.0) * e4 * sin_ps * cos_ps)
        + m1 * m1
            * ((11.0 / 64.0) * e4 * phi_s - (13.0 / 64.0) * e4 * sin_ps * cos_ps
                - (1.0 / 8.0) * e4 * phi_s * cos_ps * cos_ps
                + (5.0 / 32.0) * e4 * sin_ps * cos_ps * cos_ps * cos_ps);
    let term3 = a1
        * m1
        * ((3.0 / 8.0) * e4 * sin_ps + (1.0 / 4.0) * e4 * phi_s * cos_ps
            - (5.0 / 8.0) * e4 * sin_ps * cos_ps * cos_ps);
    let phi0 = term1 + term2 + term3;
    trace.push("term1", term1);
    trace.push("term2", term2);
    trace.push("term3", term3);
    trace.push("phi0", phi0);

    let sin_p0 = libm::sin(phi0);
    let cos_p0 = libm::cos(phi0);
    if DEGENERACY_TOLERANCE < phi_s && libm::fabs(sin_p0) < DEGENERACY_TOLERANCE {
        return Err(GeodesicError::DegenerateGeometry(
            "near-antipodal arc, longitude divisor vanishes",
        ));
    }

    // Forward azimuth at the destination, then its opposite as back-azimuth.
    let northing2 = g * cos_p0 - sin_b1 * sin_p0;
    trace.push("cot_azimuth21", northing2 / cos_beta0);
    let alpha2 = Angle::from_y_x(cos_beta0, northing2);
    let azimuth21 = Degrees(Degrees::from(alpha2.opposite()).0.rem_euclid(360.0));
    trace.push("azimuth21", azimuth21.0);

    // Longitude difference on the auxiliary sphere. The cotangent is
    // infinite at zero angular distance, so it is only traced where finite.
    let lambda_y = sin_p0 * sin_az;
    let lambda_x = cos_b1 * cos_p0 - sin_b1 * sin_p0 * cos_az;
    let cot_lambda = lambda_x / lambda_y;
    if cot_lambda.is_finite() {
        trace.push("cot_lambda", cot_lambda);
    }
    let lambda_aux = Angle::from_y_x(lambda_y, lambda_x);

    // Reduce the longitude difference from the auxiliary sphere to the
    // ellipsoid; cos_beta0 is the sine of the geodesic inclination.
    let sq_cos_alpha0 = 1.0 - cos_beta0 * cos_beta0;
    let c = (f / 16.0) * sq_cos_alpha0 * (4.0 + f * (4.0 - 3.0 * sq_cos_alpha0));
    let sigma1 = libm::atan2(sin_b1, g);
    let cos_2sigma_m = libm::cos(2.0 * sigma1 + phi0);
    let cos_4sigma_m = 2.0 * cos_2sigma_m * cos_2sigma_m - 1.0;
    let delta_lon = Radians::from(lambda_aux).0
        - (1.0 - c)
            * f
            * cos_beta0
            * (phi0 + c * sin_p0 * (cos_2sigma_m + c * cos_p0 * cos_4sigma_m));
    trace.push("delta_longitude", delta_lon.to_degrees());

    let lon2 = Degrees(a.lon().0 + delta_lon.to_degrees());
    trace.push("lambda2", lon2.0);

    // Destination parametric latitude, then back to a geodetic latitude.
    let sin_b2 = sin_b1 * cos_p0 + g * sin_p0;
    let cos_b2 = libm::sqrt(cos_beta0 * cos_beta0 + northing2 * northing2);
    trace.push("sin_beta2", sin_b2);
    trace.push("cos_beta2", cos_b2);
    let beta2 = Angle::from_y_x(sin_b2, cos_b2);
    trace.push("beta2", Degrees::from(beta2).0);

    let lat2 = Degrees::from(calculate_geodetic_latitude(beta2, ellipsoid.one_minus_f()));
    trace.push("phi2", lat2.0);

    Ok(DirectSolution {
        point2: LatLong::new(lat2, lon2),
        azimuth21,
        trace,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ellipsoid;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_zero_distance_identity() {
        let geoid = Ellipsoid::wgs84();
        let start = LatLong::new(Degrees(40.0), Degrees(-3.0));

        let solution = solve_direct(&start, Degrees(57.0), Metres(0.0), &geoid)
            .expect("zero distance is valid");
        assert!(is_within_tolerance(40.0, solution.point2().lat().0, 1e-12));
        assert_eq!(-3.0, solution.point2().lon().0);
        assert!(is_within_tolerance(237.0, solution.azimuth21().0, 1e-12));

        // the rendered trace contains no infinities, the cotangent of the
        // zero longitude difference is not recorded
        for step in solution.trace() {
            assert!(
                step.value().is_finite(),
                "non-finite trace step {}",
                step.name()
            );
        }
        assert_eq!(None, solution.trace().value_of("cot_lambda"));
    }

    #[test]
    fn test_one_degree_east_along_equator() {
        let geoid = Ellipsoid::wgs84();
        let start = LatLong::new(Degrees(0.0), Degrees(0.0));

        // 111319.49 m is one degree of longitude at the equator
        let solution = solve_direct(&start, Degrees(90.0), Metres(111_319.49), &geoid)
            .expect("equatorial geodesic is valid");
        assert!(libm::fabs(solution.point2().lat().0) < 1e-12);
        assert!(is_within_tolerance(1.0, solution.point2().lon().0, 1e-4));
        assert_eq!(270.0, solution.azimuth21().0);
    }

    #[test]
    fn test_westbound_along_equator() {
        let geoid = Ellipsoid::wgs84();
        let start = LatLong::new(Degrees(0.0), Degrees(10.0));

        let solution = solve_direct(&start, Degrees(270.0), Metres(111_319.49), &geoid)
            .expect("equatorial geodesic is valid");
        assert!(libm::fabs(solution.point2().lat().0) < 1e-12);
        assert!(is_within_tolerance(9.0, solution.point2().lon().0, 1e-4));
        assert_eq!(90.0, solution.azimuth21().0);
    }

    #[test]
    fn test_known_midlatitude_solutions() {
        let geoid = Ellipsoid::wgs84();

        let start = LatLong::new(Degrees(40.0), Degrees(-3.0));
        let solution = solve_direct(&start, Degrees(57.0), Metres(500_000.0), &geoid)
            .expect("valid geodesic");
        assert!(is_within_tolerance(
            42.342_451_121_113,
            solution.point2().lat().0,
            1e-9
        ));
        assert!(is_within_tolerance(
            2.090_250_225_156_91,
            solution.point2().lon().0,
            1e-9
        ));
        assert!(is_within_tolerance(
            240.352_926_170_730_3,
            solution.azimuth21().0,
            1e-9
        ));

        let start = LatLong::new(Degrees(-20.0), Degrees(150.0));
        let solution = solve_direct(&start, Degrees(123.4), Metres(3_000_000.0), &geoid)
            .expect("valid geodesic");
        assert!(is_within_tolerance(
            -32.695_421_863_263_31,
            solution.point2().lat().0,
            1e-9
        ));
        assert!(is_within_tolerance(
            176.689_696_662_325_16,
            solution.point2().lon().0,
            1e-9
        ));
        assert!(is_within_tolerance(
            291.305_167_458_764_74,
            solution.azimuth21().0,
            1e-9
        ));

        let start = LatLong::new(Degrees(10.0), Degrees(-60.0));
        let solution = solve_direct(&start, Degrees(200.0), Metres(1_500_000.0), &geoid)
            .expect("valid geodesic");
        assert!(is_within_tolerance(
            -2.764_993_150_362_091,
            solution.point2().lat().0,
            1e-9
        ));
        assert!(is_within_tolerance(
            -64.576_165_300_299_95,
            solution.point2().lon().0,
            1e-9
        ));
        assert!(is_within_tolerance(
            19.709_301_315_210_467,
            solution.azimuth21().0,
            1e-9
        ));
    }

    #[test]
    fn test_known_solution_international_ellipsoid() {
        let geoid = Ellipsoid::international();
        let start = LatLong::new(Degrees(45.0), Degrees(7.0));

        let solution = solve_direct(&start, Degrees(30.0), Metres(1_000_000.0), &geoid)
            .expect("valid geodesic");
        assert!(is_within_tolerance(
            52.573_804_146_568_32,
            solution.point2().lat().0,
            1e-9
        ));
        assert!(is_within_tolerance(
            14.364_896_699_080_61,
            solution.point2().lon().0,
            1e-9
        ));
        assert!(is_within_tolerance(
            215.555_805_989_737_8,
            solution.azimuth21().0,
            1e-9
        ));
    }

    #[test]
    fn test_invalid_ellipsoid_rejected() {
        let start = LatLong::new(Degrees(10.0), Degrees(10.0));
        let azimuth = Degrees(45.0);
        let distance = Metres(1000.0);

        let flat = Ellipsoid::new(Metres(6_378_137.0), 1.0);
        assert_eq!(
            GeodesicError::InvalidEllipsoid {
                a: 6_378_137.0,
                f: 1.0
            },
            solve_direct(&start, azimuth, distance, &flat).unwrap_err()
        );

        let inverted = Ellipsoid::new(Metres(6_378_137.0), -0.1);
        assert_eq!(
            GeodesicError::InvalidEllipsoid {
                a: 6_378_137.0,
                f: -0.1
            },
            solve_direct(&start, azimuth, distance, &inverted).unwrap_err()
        );

        let collapsed = Ellipsoid::new(Metres(0.0), 1.0 / 298.257_223_563);
        assert!(matches!(
            solve_direct(&start, azimuth, distance, &collapsed).unwrap_err(),
            GeodesicError::InvalidEllipsoid { .. }
        ));
    }

    #[test]
    fn test_negative_distance_rejected() {
        let geoid = Ellipsoid::wgs84();
        let start = LatLong::new(Degrees(10.0), Degrees(10.0));

        assert_eq!(
            GeodesicError::InvalidDistance { metres: -1.0 },
            solve_direct(&start, Degrees(45.0), Metres(-1.0), &geoid).unwrap_err()
        );
    }

    #[test]
    fn test_polar_start_rejected() {
        let geoid = Ellipsoid::wgs84();

        for lat in [90.0, -90.0] {
            let start = LatLong::new(Degrees(lat), Degrees(0.0));
            assert!(matches!(
                solve_direct(&start, Degrees(45.0), Metres(1000.0), &geoid),
                Err(GeodesicError::DegenerateGeometry(_))
            ));
        }

        let start = LatLong::new(Degrees(90.000_001), Degrees(0.0));
        assert!(matches!(
            solve_direct(&start, Degrees(45.0), Metres(1000.0), &geoid),
            Err(GeodesicError::InvalidLatitude { .. })
        ));
    }

    #[test]
    fn test_meridional_azimuth_rejected() {
        let geoid = Ellipsoid::wgs84();
        let start = LatLong::new(Degrees(40.0), Degrees(-3.0));

        for azimuth in [0.0, 180.0, 360.0] {
            assert!(matches!(
                solve_direct(&start, Degrees(azimuth), Metres(100_000.0), &geoid),
                Err(GeodesicError::DegenerateGeometry(_))
            ));
        }
    }

    #[test]
    fn test_near_antipodal_arc_rejected() {
        // On a sphere the series corrections vanish, so half the
        // circumference puts the angular distance at pi exactly and the
        // longitude divisor sin(phi0) below the tolerance.
        let sphere = Ellipsoid::new(Metres(6_378_137.0), 0.0);
        let start = LatLong::new(Degrees(40.0), Degrees(-3.0));
        let distance = Metres(core::f64::consts::PI * 6_378_137.0);

        assert!(matches!(
            solve_direct(&start, Degrees(57.0), distance, &sphere),
            Err(GeodesicError::DegenerateGeometry(_))
        ));
    }

    #[test]
    fn test_trace_names_in_computation_order() {
        let geoid = Ellipsoid::wgs84();
        let start = LatLong::new(Degrees(40.0), Degrees(-3.0));

        let solution = solve_direct(&start, Degrees(57.0), Metres(500_000.0), &geoid)
            .expect("valid geodesic");
        let names: Vec<&str> = solution.trace().iter().map(|step| step.name()).collect();
        assert_eq!(
            vec![
                "semiminor_axis",
                "sq_eccentricity",
                "phi1",
                "beta1",
                "azimuth12",
                "cos_beta0",
                "g",
                "m1",
                "phi_s",
                "a1",
                "term1",
                "term2",
                "term3",
                "phi0",
                "cot_azimuth21",
                "azimuth21",
                "cot_lambda",
                "delta_longitude",
                "lambda2",
                "sin_beta2",
                "cos_beta2",
                "beta2",
                "phi2",
            ],
            names
        );

        // trace steps agree with the solution itself
        assert_eq!(
            Some(solution.point2().lat().0),
            solution.trace().value_of("phi2")
        );
        assert_eq!(
            Some(solution.point2().lon().0),
            solution.trace().value_of("lambda2")
        );
        assert_eq!(
            Some(solution.azimuth21().0),
            solution.trace().value_of("azimuth21")
        );
    }

    #[test]
    fn test_solution_display() {
        let geoid = Ellipsoid::wgs84();
        let start = LatLong::new(Degrees(0.0), Degrees(0.0));

        let solution = solve_direct(&start, Degrees(90.0), Metres(111_319.49), &geoid)
            .expect("valid geodesic");
        let summary = solution.to_string();
        assert!(summary.starts_with("lat2: "));
        assert!(summary.contains("azimuth21: 270.0"));
    }
}
