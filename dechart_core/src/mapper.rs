// Copyright 2026 the Dechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping pixel points through a pair of axes.

extern crate alloc;

use kurbo::Point;

use crate::Axis;

/// Maps pixel points to calibrated `(x, y)` values through two axes.
///
/// The mapper borrows its axes; the host keeps ownership and mutates them
/// between queries as the user calibrates. The two axes are treated
/// completely independently: each point is projected onto each axis's own
/// direction, so the axes need not be orthogonal or share an origin, and
/// skewed or rotated chart images digitize correctly.
#[derive(Clone, Copy, Debug)]
pub struct PointMapper<'a> {
    horizontal: &'a Axis,
    vertical: &'a Axis,
}

impl<'a> PointMapper<'a> {
    /// Creates a mapper over a horizontal and a vertical axis.
    pub fn new(horizontal: &'a Axis, vertical: &'a Axis) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Maps a pixel point to calibrated `(x, y)` values.
    ///
    /// `h_range` and `v_range` are the `(min, max)` values the caller
    /// declares for each axis's endpoints. If either axis has no segment
    /// defined yet, the result is `(h_range.0, v_range.0)`; hosts that need
    /// to distinguish that state check [`Axis::is_defined`] first.
    pub fn map_point(
        &self,
        point: impl Into<Point>,
        h_range: (f64, f64),
        v_range: (f64, f64),
    ) -> (f64, f64) {
        if !self.horizontal.is_defined() || !self.vertical.is_defined() {
            return (h_range.0, v_range.0);
        }
        let point = point.into();
        let h_fraction = self.horizontal.project_fraction(point);
        let v_fraction = self.vertical.project_fraction(point);
        (
            self.horizontal.map_value(h_fraction, h_range.0, h_range.1),
            self.vertical.map_value(v_fraction, v_range.0, v_range.1),
        )
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() <= 1e-9, "{a} != {b}");
    }

    // A typical chart: x left-to-right, y drawn bottom-to-top in image
    // coordinates (pixel y grows downward).
    fn chart_axes() -> (Axis, Axis) {
        let mut h = Axis::new();
        h.define_segment((0.0, 100.0), (100.0, 100.0));
        let mut v = Axis::new();
        v.define_segment((0.0, 100.0), (0.0, 0.0));
        (h, v)
    }

    #[test]
    fn maps_both_axes_of_an_image_space_chart() {
        let (h, v) = chart_axes();
        let mapper = PointMapper::new(&h, &v);
        let (x, y) = mapper.map_point((25.0, 75.0), (0.0, 10.0), (0.0, 10.0));
        assert_close(x, 2.5);
        assert_close(y, 2.5);
    }

    #[test]
    fn either_axis_undefined_yields_the_minima() {
        let mut h = Axis::new();
        h.define_segment((0.0, 0.0), (10.0, 0.0));
        h.add_calibration((5.0, 0.0), 40.0);
        let v = Axis::new();
        let mapper = PointMapper::new(&h, &v);
        // The horizontal fraction would be computable, but an undefined
        // vertical axis forces the full fallback.
        assert_eq!(
            mapper.map_point((5.0, 5.0), (1.0, 100.0), (2.0, 200.0)),
            (1.0, 2.0)
        );
    }

    #[test]
    fn axes_are_independent() {
        let (h, mut v) = chart_axes();
        v.add_calibration((0.0, 50.0), 9.0);
        let (x0, y0) =
            PointMapper::new(&h, &v).map_point((40.0, 50.0), (0.0, 10.0), (0.0, 10.0));

        // Replacing the vertical calibration set moves y but never x.
        let mut v2 = Axis::new();
        v2.define_segment((0.0, 100.0), (0.0, 0.0));
        v2.add_calibration((0.0, 50.0), 3.0);
        let (x1, y1) =
            PointMapper::new(&h, &v2).map_point((40.0, 50.0), (0.0, 10.0), (0.0, 10.0));

        assert_close(x0, x1);
        assert_close(x0, 4.0);
        assert_close(y0, 9.0);
        assert_close(y1, 3.0);
    }

    #[test]
    fn skewed_axes_project_onto_their_own_directions() {
        let mut h = Axis::new();
        h.define_segment((0.0, 0.0), (10.0, 0.0));
        // A 45-degree vertical axis, as drawn over a sheared chart scan.
        let mut v = Axis::new();
        v.define_segment((0.0, 0.0), (10.0, 10.0));
        let mapper = PointMapper::new(&h, &v);

        let (x, y) = mapper.map_point((5.0, 5.0), (0.0, 100.0), (0.0, 100.0));
        assert_close(x, 50.0);
        assert_close(y, 50.0);

        let (x, y) = mapper.map_point((5.0, 0.0), (0.0, 100.0), (0.0, 100.0));
        assert_close(x, 50.0);
        assert_close(y, 25.0);
    }
}
