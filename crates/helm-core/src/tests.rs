//! Unit tests for helm-core primitives.

#[cfg(test)]
mod geo {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use crate::geo::{angle_diff, bearing, direction};
    use crate::{Point, Vec2};

    #[test]
    fn distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(b.distance_to(a), 5.0);
    }

    #[test]
    fn point_vector_arithmetic() {
        let p = Point::new(1.0, 2.0);
        let q = p + Vec2::new(0.5, -1.0);
        assert_eq!(q, Point::new(1.5, 1.0));
        assert_eq!(q - p, Vec2::new(0.5, -1.0));
    }

    #[test]
    fn lerp_endpoints() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 4.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Point::new(5.0, 2.0));
    }

    #[test]
    fn vec2_dot_and_norm() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.norm(), 5.0);
        assert_eq!(v.dot(Vec2::new(1.0, 0.0)), 3.0);
        assert_eq!(v.scale(2.0), Vec2::new(6.0, 8.0));
    }

    #[test]
    fn from_heading_axes() {
        let east = Vec2::from_heading(0.0, 2.0);
        assert!((east.x - 2.0).abs() < 1e-12);
        assert!(east.y.abs() < 1e-12);

        let north = Vec2::from_heading(FRAC_PI_2, 1.0);
        assert!(north.x.abs() < 1e-12);
        assert!((north.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn direction_diagonal() {
        let d = direction(Point::new(0.0, 0.0), Point::new(1.0, 1.0), None);
        assert!((d - FRAC_PI_4).abs() < 1e-12);
    }

    #[test]
    fn direction_vertical_special_case() {
        let up = direction(Point::new(0.0, 0.0), Point::new(0.0, 5.0), None);
        let down = direction(Point::new(0.0, 5.0), Point::new(0.0, 0.0), None);
        assert_eq!(up, FRAC_PI_2);
        assert_eq!(down, -FRAC_PI_2);
    }

    #[test]
    fn direction_branch_follows_previous_heading() {
        // Raw arctan for a segment pointing in -x folds onto the +x branch;
        // a previous heading near π must pull it back to the π branch.
        let a = Point::new(10.0, 0.0);
        let b = Point::new(0.0, 0.1);
        let raw = direction(a, b, None);
        assert!(raw.abs() < FRAC_PI_4, "raw angle folds to +x branch");

        let fixed = direction(a, b, Some(PI - 0.1));
        assert!((fixed - PI).abs() < 0.1, "got {fixed}");
    }

    #[test]
    fn bearing_cardinal_directions() {
        let origin = Point::new(0.0, 0.0);
        let east = bearing(origin, Point::new(10.0, 0.0));
        assert!(east.abs() < 1e-12);

        let north = bearing(origin, Point::new(0.0, 10.0));
        assert!(angle_diff(north, FRAC_PI_2).abs() < 1e-12);

        let west = bearing(origin, Point::new(-10.0, 0.0));
        assert!(angle_diff(west, PI).abs() < 1e-12);
    }

    #[test]
    fn angle_diff_wraps() {
        assert!((angle_diff(PI - 0.1, -PI + 0.1) - (-0.2)).abs() < 1e-12);
        assert!((angle_diff(0.3, 0.1) - 0.2).abs() < 1e-12);
        assert_eq!(angle_diff(0.0, 0.0), 0.0);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut r1 = SimRng::new(1);
        let mut r2 = SimRng::new(2);
        let a: u64 = r1.random();
        let b: u64 = r2.random();
        assert_ne!(a, b);
    }

    #[test]
    fn child_streams_are_independent() {
        let mut root = SimRng::new(7);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        let a: u64 = c0.random();
        let b: u64 = c1.random();
        assert_ne!(a, b);
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0.7f64..1.3);
            assert!((0.7..1.3).contains(&v));
        }
    }
}
