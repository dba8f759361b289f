/*!
 * Tangency solver.
 *
 * One function per mix of boundary kinds, each returning the circle
 * tangent to all three inputs. The circle cases use the complex
 * Descartes theorem; the all-line cases use the triangle incircle.
 *
 * Every function is pure: same inputs, same bits out.
 */

use crate::geo_2d::*;

/// Circle tangent to three mutually tangent circles (the inner Soddy circle).
pub fn soddy_circle(circle1: &Circle, circle2: &Circle, circle3: &Circle) -> Circle {
    descartes(
        [(circle1, false), (circle2, false), (circle3, false)],
        &[circle1, circle2, circle3],
        false,
    )
}

/// Circle tangent to three circles where `outer` encloses the other two.
/// The outer bend is negated, and only the two inner circles are used to judge the fit.
/// `want_other` returns the root the fit rule would reject.
pub fn enclosed_circle(outer: &Circle, circle1: &Circle, circle2: &Circle, want_other: bool) -> Circle {
    descartes(
        [(outer, true), (circle1, false), (circle2, false)],
        &[circle1, circle2],
        want_other,
    )
}

/// Circle tangent to two circles and a line.
/// The line has zero bend; its center-bend term is its unit normal.
/// The circles must lie to the right of the line, walking `end1 -> end2`.
pub fn edge_circle(circle1: &Circle, circle2: &Circle, line: &Line) -> Circle {
    let b1 = circle1.bend(false);
    let b2 = circle2.bend(false);
    let bend = b1 + b2 + 2.0 * (b1 * b2).max(0.0).sqrt();

    let z1 = b1 * circle1.center.to_complex();
    let z2 = b2 * circle2.center.to_complex();
    let z3 = line.direction().perp().to_complex();

    pick_root(z1 + z2 + z3, (z1 * z2 + z2 * z3 + z3 * z1).sqrt(), bend, &[circle1, circle2], false)
}

/// Incircle of the triangle whose corners are the `end1` points of the three lines.
pub fn incircle(line1: &Line, line2: &Line, line3: &Line) -> Circle {
    let a = line1.end1;
    let b = line2.end1;
    let c = line3.end1;

    // Side lengths opposite each corner
    let la = b.distance(&c);
    let lb = c.distance(&a);
    let lc = a.distance(&b);

    let s = 0.5 * (la + lb + lc);
    let radius = ((s - la) * (s - lb) * (s - lc) / s).sqrt();

    let center = Point::new(
        (la * a.x + lb * b.x + lc * c.x) / (2.0 * s),
        (la * a.y + lb * b.y + lc * c.y) / (2.0 * s),
    );

    Circle::new(center, radius)
}

/// Circle in the corner between two converging lines, tangent to both and to `circle`.
/// The lines must share an end point (the vertex); either order is accepted.
pub fn corner_circle(line1: &Line, line2: &Line, circle: &Circle) -> Circle {
    // Orient so that line1 runs into the vertex and line2 runs out of it
    let (line1, line2) = if line2.end1 != line1.end2 {
        (line2, line1)
    } else {
        (line1, line2)
    };
    let vertex = line1.end2;
    let radius = circle.radius;

    let to_vertex = vertex - circle.center;
    let vertex_distance = to_vertex.norm();
    let to_vertex = to_vertex / vertex_distance;

    // Helper line tangent to the circle, facing the vertex
    let touch = circle.center + to_vertex * radius;
    let half_length = radius / (1.0 + 2.0 * radius / (vertex_distance - radius)).sqrt();
    let along = to_vertex.perp();
    let end1 = touch - along * half_length;
    let end2 = touch + along * half_length;

    incircle(
        &Line::new(end2, vertex),
        &Line::new(line2.end1, end1),
        &Line::new(end1, end2),
    )
}

/// Complex Descartes theorem over three circles.
/// `bends` pairs each circle with whether it encloses the others,
/// `fit` lists the circles the candidate centers are judged against.
fn descartes(bends: [(&Circle, bool); 3], fit: &[&Circle], want_other: bool) -> Circle {
    let [b1, b2, b3] = bends.map(|(circle, enclosing)| circle.bend(enclosing));
    // Exactly zero for a gasket seed; rounding must not push it negative
    let radicand = (b1 * b2 + b2 * b3 + b3 * b1).max(0.0);
    let bend = b1 + b2 + b3 + 2.0 * radicand.sqrt();

    let [z1, z2, z3] = [(bends[0].0, b1), (bends[1].0, b2), (bends[2].0, b3)]
        .map(|(circle, b)| b * circle.center.to_complex());

    pick_root(z1 + z2 + z3, (z1 * z2 + z2 * z3 + z3 * z1).sqrt(), bend, fit, want_other)
}

/// Choose between the centers `(sum ± 2·root) / bend`.
/// The `+` root wins only when its fit error is strictly smaller.
fn pick_root(sum: Complex, root: Complex, bend: f64, fit: &[&Circle], want_other: bool) -> Circle {
    let radius = 1.0 / bend;
    let center_pos = Point::from((sum + 2.0 * root) / bend);
    let center_neg = Point::from((sum - 2.0 * root) / bend);

    let fit_error = |center: Point| -> f64 {
        let candidate = Circle::new(center, radius);
        fit.iter().map(|circle| candidate.tangency_error(circle)).sum()
    };

    let pos_fits_better = fit_error(center_neg) > fit_error(center_pos);
    let center = if pos_fits_better != want_other {
        center_pos
    } else {
        center_neg
    };

    Circle::new(center, radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn sqrt3() -> f64 {
        3.0_f64.sqrt()
    }

    /// Equilateral triangle sides, wound the way seeding produces them.
    fn equilateral() -> [Line; 3] {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, 0.0);
        let c = Point::new(2.0, 2.0 * sqrt3());
        [Line::new(a, c), Line::new(c, b), Line::new(b, a)]
    }

    fn assert_tangent(circle: &Circle, other: &Circle) {
        let scale = circle.radius + other.radius;
        assert!(circle.tangency_error(other) < TOL * scale, "{circle:.12} not tangent to {other:.12}");
    }

    fn assert_touches_line(circle: &Circle, line: &Line) {
        let gap = (line.distance_to_point(&circle.center) - circle.radius).abs();
        assert!(gap < TOL, "{circle:.12} misses {line:.12} by {gap:e}");
    }

    #[test]
    fn incircle_of_equilateral_triangle() {
        let [l1, l2, l3] = equilateral();
        let circle = incircle(&l1, &l2, &l3);
        assert!((circle.radius - 2.0 * sqrt3() / 3.0).abs() < 1e-12);
        assert!((circle.center.x - 2.0).abs() < 1e-12);
        assert!((circle.center.y - 2.0 * sqrt3() / 3.0).abs() < 1e-12);
    }

    #[test]
    fn incircle_of_right_triangle() {
        // 3-4-5 triangle has inradius 1
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, 0.0);
        let c = Point::new(0.0, 3.0);
        let circle = incircle(&Line::new(a, b), &Line::new(b, c), &Line::new(c, a));
        assert!((circle.radius - 1.0).abs() < 1e-12);
        assert!((circle.center.x - 1.0).abs() < 1e-12);
        assert!((circle.center.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn soddy_circle_of_three_equal_circles() {
        let r = 1.0;
        let circles = [
            Circle::new(Point::new(-1.0, 0.0), r),
            Circle::new(Point::new(1.0, 0.0), r),
            Circle::new(Point::new(0.0, sqrt3()), r),
        ];
        let inner = soddy_circle(&circles[0], &circles[1], &circles[2]);

        // Inner Soddy radius for three unit circles: 1 / (3 + 2√3)
        assert!((inner.radius - 1.0 / (3.0 + 2.0 * sqrt3())).abs() < 1e-12);
        assert!((inner.center.x).abs() < 1e-12);
        assert!((inner.center.y - sqrt3() / 3.0).abs() < 1e-12);
        for circle in circles.iter() {
            assert_tangent(&inner, circle);
        }
    }

    #[test]
    fn soddy_circle_ignores_argument_order() {
        let a = Circle::new(Point::new(-1.0, 0.0), 1.0);
        let b = Circle::new(Point::new(1.5, 0.0), 1.5);
        // Third circle tangent to both, placed by the side lengths 1+r, 1.5+r
        let r = 0.8;
        let (da, db, dab) = (1.0 + r, 1.5 + r, 2.5);
        let x = (da * da - db * db + dab * dab) / (2.0 * dab);
        let c = Circle::new(Point::new(-1.0 + x, (da * da - x * x).sqrt()), r);

        let first = soddy_circle(&a, &b, &c);
        let second = soddy_circle(&c, &a, &b);
        assert!((first.radius - second.radius).abs() < 1e-12);
        assert!(first.center.distance(&second.center) < 1e-9);
        for circle in [a, b, c].iter() {
            assert_tangent(&first, circle);
        }
    }

    #[test]
    fn edge_circle_touches_line_and_circles() {
        // Two unit circles resting on the x axis, touching each other
        let a = Circle::new(Point::new(-1.0, 1.0), 1.0);
        let b = Circle::new(Point::new(1.0, 1.0), 1.0);
        let floor = Line::new(Point::new(5.0, 0.0), Point::new(-5.0, 0.0));

        let circle = edge_circle(&a, &b, &floor);
        assert!((circle.radius - 0.25).abs() < 1e-12);
        assert!((circle.center.x).abs() < 1e-12);
        assert!((circle.center.y - 0.25).abs() < 1e-12);
        assert_tangent(&circle, &a);
        assert_tangent(&circle, &b);
        assert_touches_line(&circle, &floor);
    }

    #[test]
    fn corner_circle_sits_between_lines_and_circle() {
        let [l1, l2, l3] = equilateral();
        let inner = incircle(&l1, &l2, &l3);

        // Any order of the two lines finds the same vertex
        let circle = corner_circle(&l1, &l2, &inner);
        let swapped = corner_circle(&l2, &l1, &inner);
        assert_eq!(circle, swapped);

        // Equilateral corners shrink by a factor of three
        assert!((circle.radius - inner.radius / 3.0).abs() < 1e-12);
        assert_tangent(&circle, &inner);
        assert_touches_line(&circle, &l1);
        assert_touches_line(&circle, &l2);
        assert!(circle.center.distance(&l1.end2) < inner.center.distance(&l1.end2));
    }

    #[test]
    fn enclosed_roots_are_mirror_images() {
        let outer = Circle::new(Point::zero(), 2.0 * 2.0_f64.sqrt());
        let left = Circle::new(Point::new(-1.0, -1.0), 2.0_f64.sqrt());
        let right = Circle::new(Point::new(1.0, 1.0), 2.0_f64.sqrt());

        let first = enclosed_circle(&outer, &left, &right, false);
        let other = enclosed_circle(&outer, &left, &right, true);

        let expected_radius = 2.0 * 2.0_f64.sqrt() / 3.0;
        assert!((first.radius - expected_radius).abs() < 1e-12);
        assert!((other.radius - expected_radius).abs() < 1e-12);
        assert!((first.center.x + other.center.x).abs() < 1e-12);
        assert!((first.center.y + other.center.y).abs() < 1e-12);
        assert!(first.center.distance(&other.center) > 1.0);

        for circle in [first, other].iter() {
            assert_tangent(circle, &left);
            assert_tangent(circle, &right);
            // Internal tangency with the enclosing circle
            let gap = (circle.center.distance(&outer.center) - (outer.radius - circle.radius)).abs();
            assert!(gap < TOL);
        }
    }

    #[test]
    fn solver_is_deterministic() {
        let a = Circle::new(Point::new(0.1, 0.3), 0.7);
        let b = Circle::new(Point::new(1.2, -0.4), 0.61);
        let line = Line::new(Point::new(-3.0, -2.0), Point::new(4.0, -1.0));
        let first = edge_circle(&a, &b, &line);
        let second = edge_circle(&a, &b, &line);
        assert_eq!(first.radius.to_bits(), second.radius.to_bits());
        assert_eq!(first.center.x.to_bits(), second.center.x.to_bits());
        assert_eq!(first.center.y.to_bits(), second.center.y.to_bits());
    }
}
