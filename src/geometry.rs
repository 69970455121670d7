//! Axis-interval and rectangle containment tests used by surface hit
//! testing. Coordinates are global screen pixels (signed, since a surface
//! may sit left of or above the primary origin).

/// A real interval with independently closed or open endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub low: i32,
    pub high: i32,
    pub closed_left: bool,
    pub closed_right: bool,
}

impl Interval {
    /// A closed-closed interval `[low, high]`.
    pub fn closed(low: i32, high: i32) -> Self {
        Self {
            low,
            high,
            closed_left: true,
            closed_right: true,
        }
    }

    pub fn new(low: i32, high: i32, closed_left: bool, closed_right: bool) -> Self {
        Self {
            low,
            high,
            closed_left,
            closed_right,
        }
    }

    /// Containment per the endpoint flags, e.g. for `(a, b]` this is
    /// `a < x && x <= b`.
    pub fn contains(&self, x: i32) -> bool {
        let left_ok = if self.closed_left {
            self.low <= x
        } else {
            self.low < x
        };
        let right_ok = if self.closed_right {
            x <= self.high
        } else {
            x < self.high
        };
        left_ok && right_ok
    }
}

/// A closed rectangle in global coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rectangle {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// True iff `(x, y)` lies inside the rectangle, edges included.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let horizontal = Interval::closed(self.left, self.right);
        let vertical = Interval::closed(self.top, self.bottom);
        horizontal.contains(x) && vertical.contains(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_interval_includes_endpoints() {
        let i = Interval::closed(0, 10);
        assert!(i.contains(0));
        assert!(i.contains(10));
        assert!(i.contains(5));
        assert!(!i.contains(-1));
        assert!(!i.contains(11));
    }

    #[test]
    fn half_open_interval_excludes_one_side() {
        let i = Interval::new(0, 10, false, true);
        assert!(!i.contains(0));
        assert!(i.contains(10));
        let i = Interval::new(0, 10, true, false);
        assert!(i.contains(0));
        assert!(!i.contains(10));
    }

    #[test]
    fn rectangle_contains_edges_and_interior() {
        let r = Rectangle::new(0, 0, 800, 600);
        assert!(r.contains(0, 0));
        assert!(r.contains(800, 600));
        assert!(r.contains(400, 300));
        assert!(!r.contains(801, 300));
        assert!(!r.contains(400, -1));
    }

    #[test]
    fn rectangle_with_negative_origin() {
        // A surface left of the primary origin.
        let r = Rectangle::new(-800, 0, 0, 600);
        assert!(r.contains(-400, 100));
        assert!(!r.contains(1, 100));
    }
}
