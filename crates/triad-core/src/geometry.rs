//! Planar positions, world bounds, and Euclidean distance.

/// A point in world space. The origin is the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Position {
    /// Create a position from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rectangular world extent `[0, width) × [0, height)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Extent along x.
    pub width: f64,
    /// Extent along y.
    pub height: f64,
}

impl Bounds {
    /// Create bounds from width and height.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Largest x an agent of `size` may occupy.
    pub fn max_x(&self, size: f64) -> f64 {
        self.width - size
    }

    /// Largest y an agent of `size` may occupy.
    pub fn max_y(&self, size: f64) -> f64 {
        self.height - size
    }

    /// Whether `position` keeps an agent of `size` fully inside the world,
    /// i.e. `0 <= x <= width - size` and `0 <= y <= height - size`.
    pub fn contains(&self, position: Position, size: f64) -> bool {
        (0.0..=self.max_x(size)).contains(&position.x)
            && (0.0..=self.max_y(size)).contains(&position.y)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Euclidean distance between two positions.
pub fn distance(a: Position, b: Position) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn distance_3_4_5() {
        let d = distance(Position::new(0.0, 0.0), Position::new(3.0, 4.0));
        assert!((d - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn contains_is_inclusive_at_both_ends() {
        let b = Bounds::new(100.0, 50.0);
        assert!(b.contains(Position::new(0.0, 0.0), 10.0));
        assert!(b.contains(Position::new(90.0, 40.0), 10.0));
        assert!(!b.contains(Position::new(90.5, 40.0), 10.0));
        assert!(!b.contains(Position::new(-0.1, 0.0), 10.0));
    }

    #[test]
    fn default_bounds_are_800_by_600() {
        let b = Bounds::default();
        assert_eq!(b.width, 800.0);
        assert_eq!(b.height, 600.0);
    }

    proptest! {
        #[test]
        fn distance_is_metric(
            ax in -1e3f64..1e3, ay in -1e3f64..1e3,
            bx in -1e3f64..1e3, by in -1e3f64..1e3,
            cx in -1e3f64..1e3, cy in -1e3f64..1e3,
        ) {
            let a = Position::new(ax, ay);
            let b = Position::new(bx, by);
            let c = Position::new(cx, cy);
            prop_assert!(distance(a, a).abs() < f64::EPSILON);
            prop_assert!((distance(a, b) - distance(b, a)).abs() < 1e-9);
            prop_assert!(distance(a, c) <= distance(a, b) + distance(b, c) + 1e-9);
        }
    }
}
