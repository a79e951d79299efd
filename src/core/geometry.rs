use std::f64::consts::{FRAC_PI_2, TAU};

use crate::core::Point;

/// Maps (category index, value) pairs onto offsets from the chart center.
///
/// Categories are spread at equal angles starting at 12 o'clock and running
/// clockwise in screen space (y grows downwards). A value equal to
/// `max_value` lands on `radius`, zero lands on the center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialMapper {
    count: usize,
    max_value: f64,
}

impl RadialMapper {
    #[must_use]
    pub fn new(count: usize, max_value: f64) -> Self {
        Self { count, max_value }
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    #[must_use]
    pub fn max_value(self) -> f64 {
        self.max_value
    }

    /// Angle between two neighbouring categories, `0` when there are none.
    #[must_use]
    pub fn angle_step(self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        TAU / self.count as f64
    }

    /// Screen-space angle of category `index`.
    #[must_use]
    pub fn category_angle(self, index: usize) -> f64 {
        -FRAC_PI_2 + index as f64 * self.angle_step()
    }

    /// Offset of `value` on category `index`'s spoke, relative to the center.
    #[must_use]
    pub fn map_to_point(self, index: usize, value: f64, radius: f64) -> Point {
        if self.count == 0 || self.max_value.is_nan() || self.max_value <= 0.0 {
            return Point::ORIGIN;
        }

        let angle = self.category_angle(index);
        let scaled = radius * (value / self.max_value);
        Point::new(scaled * angle.cos(), scaled * angle.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::RadialMapper;
    use crate::core::Point;
    use approx::assert_relative_eq;

    #[test]
    fn zero_categories_map_to_origin() {
        let mapper = RadialMapper::new(0, 1.0);
        assert_eq!(mapper.map_to_point(3, 0.7, 100.0), Point::ORIGIN);
        assert_eq!(mapper.angle_step(), 0.0);
    }

    #[test]
    fn first_category_points_straight_up() {
        let mapper = RadialMapper::new(5, 2.0);
        let point = mapper.map_to_point(0, 1.5, 80.0);
        assert_relative_eq!(point.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(point.y, -60.0, epsilon = 1e-9);
    }

    #[test]
    fn second_of_four_categories_points_right() {
        let mapper = RadialMapper::new(4, 1.0);
        let point = mapper.map_to_point(1, 1.0, 50.0);
        assert_relative_eq!(point.x, 50.0, epsilon = 1e-9);
        assert_relative_eq!(point.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn huge_value_range_stays_finite() {
        let mapper = RadialMapper::new(8, f64::MAX);
        let full = mapper.map_to_point(2, f64::MAX, 120.0);
        assert!(full.is_finite());
        assert_relative_eq!(full.x, 120.0, epsilon = 1e-9);

        let mapper = RadialMapper::new(8, 1e307);
        assert!(mapper.map_to_point(5, 1e307, 120.0).is_finite());
    }
}
