/// 2D circular arc utilities.
///
/// Arcs are described by a center, a radius and a start angle plus a signed
/// sweep:
/// - `sweep > 0`: counter-clockwise (increasing angle)
/// - `sweep < 0`: clockwise (decreasing angle)
/// - `|sweep| = 2π`: full circle
use std::f64::consts::{PI, TAU};

use super::Point2;

/// Computes the signed sweep from `start_angle` to `end_angle`.
///
/// A counter-clockwise sweep lands in `(0, 2π]`, a clockwise one in
/// `[-2π, 0)`. Equal angles yield a zero sweep, while angles a whole
/// number of turns apart yield a full turn.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn arc_sweep(start_angle: f64, end_angle: f64, clockwise: bool) -> f64 {
    if start_angle == end_angle {
        return 0.0;
    }

    if clockwise {
        let sweep = (start_angle - end_angle).rem_euclid(TAU);
        if sweep == 0.0 {
            -TAU
        } else {
            -sweep
        }
    } else {
        let sweep = (end_angle - start_angle).rem_euclid(TAU);
        if sweep == 0.0 {
            TAU
        } else {
            sweep
        }
    }
}

/// Evaluates a point on an arc at parameter `t` in `[0, 1]`.
#[must_use]
pub fn arc_point_at(center: &Point2, radius: f64, start_angle: f64, sweep: f64, t: f64) -> Point2 {
    let angle = start_angle + sweep * t;
    Point2::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Computes the number of line segments needed to approximate an arc
/// within the given tolerance.
#[must_use]
pub fn arc_subdivision_count(radius: f64, abs_sweep: f64, tolerance: f64) -> u32 {
    let radius = radius.abs();
    if radius < 1e-12 || abs_sweep < 1e-12 || tolerance <= 0.0 {
        return 1;
    }
    // From the sagitta formula: sagitta = r * (1 - cos(θ/2))
    // For a given tolerance: θ = 2 * acos(1 - tolerance/r)
    let max_angle = if tolerance >= radius {
        PI
    } else {
        2.0 * (1.0 - tolerance / radius).acos()
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (abs_sweep / max_angle).ceil() as u32;
    n.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    const TOL: f64 = 1e-10;

    #[test]
    fn full_turn_counter_clockwise() {
        assert_abs_diff_eq!(arc_sweep(0.0, TAU, false), TAU, epsilon = TOL);
    }

    #[test]
    fn full_turn_clockwise() {
        assert_abs_diff_eq!(arc_sweep(0.0, TAU, true), -TAU, epsilon = TOL);
    }

    #[test]
    fn equal_angles_give_zero_sweep() {
        assert_abs_diff_eq!(arc_sweep(1.0, 1.0, false), 0.0);
        assert_abs_diff_eq!(arc_sweep(1.0, 1.0, true), 0.0);
    }

    #[test]
    fn quarter_turn_both_directions() {
        // Going counter-clockwise from 0 to π/2 is a quarter turn,
        // clockwise it is the remaining three quarters.
        assert_abs_diff_eq!(arc_sweep(0.0, FRAC_PI_2, false), FRAC_PI_2, epsilon = TOL);
        assert_abs_diff_eq!(
            arc_sweep(0.0, FRAC_PI_2, true),
            -3.0 * FRAC_PI_2,
            epsilon = TOL
        );
    }

    #[test]
    fn negative_end_angle_wraps() {
        assert_abs_diff_eq!(arc_sweep(0.0, -FRAC_PI_2, false), 3.0 * FRAC_PI_2, epsilon = TOL);
        assert_abs_diff_eq!(arc_sweep(0.0, -FRAC_PI_2, true), -FRAC_PI_2, epsilon = TOL);
    }

    #[test]
    fn point_at_endpoints_and_midpoint() {
        let c = Point2::new(1.0, 0.0);
        let p0 = arc_point_at(&c, 1.0, PI, PI, 0.0);
        assert_abs_diff_eq!(p0, Point2::new(0.0, 0.0), epsilon = TOL);

        let p1 = arc_point_at(&c, 1.0, PI, PI, 1.0);
        assert_abs_diff_eq!(p1, Point2::new(2.0, 0.0), epsilon = TOL);

        // Counter-clockwise from π passes through 3π/2.
        let pm = arc_point_at(&c, 1.0, PI, PI, 0.5);
        assert_abs_diff_eq!(pm, Point2::new(1.0, -1.0), epsilon = TOL);
    }

    #[test]
    fn subdivision_grows_with_radius() {
        let small = arc_subdivision_count(1.0, TAU, 0.01);
        let large = arc_subdivision_count(100.0, TAU, 0.01);
        assert!(large > small, "small={small} large={large}");
    }

    #[test]
    fn subdivision_degenerate_inputs() {
        assert_eq!(arc_subdivision_count(0.0, TAU, 0.01), 1);
        assert_eq!(arc_subdivision_count(1.0, 0.0, 0.01), 1);
        assert_eq!(arc_subdivision_count(1.0, TAU, 0.0), 1);
    }

    #[test]
    fn subdivision_coarse_tolerance() {
        // Tolerance larger than the radius allows half-turn chords.
        assert_eq!(arc_subdivision_count(1.0, TAU, 5.0), 2);
    }

    #[test]
    fn subdivision_ignores_radius_sign() {
        assert_eq!(
            arc_subdivision_count(-10.0, PI, 0.01),
            arc_subdivision_count(10.0, PI, 0.01)
        );
    }
}
