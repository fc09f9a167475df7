// Copyright 2026 the Dechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One chart axis: a pixel-space segment plus calibration points.

extern crate alloc;

use kurbo::{Line, Point};
use smallvec::SmallVec;

/// A known correspondence between a pixel location and a real-world value.
///
/// Calibration points are asserted by the user ("this tick mark is 3.5") and
/// need not lie exactly on the axis segment; they are projected onto it at
/// query time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalibrationPoint {
    /// Pixel location of the calibration mark.
    pub point: Point,
    /// Real-world value at that location.
    pub value: f64,
}

/// One chart axis: an optional pixel-space segment plus calibration points.
///
/// The segment is the line the user drew over the axis in the chart image,
/// directed from its first endpoint (fraction 0) to its second (fraction 1).
/// Positions along the axis are expressed as unbounded fractions of that
/// segment, so points past either endpoint extrapolate naturally.
///
/// An axis starts undefined. Every query is total: an undefined or
/// zero-length segment resolves to documented fallback values instead of
/// failing, because in an interactive digitizer queries legitimately arrive
/// before calibration is complete.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Axis {
    segment: Option<Line>,
    calibration: SmallVec<[CalibrationPoint; 4]>,
}

/// A `(position, value)` interpolation node.
type Node = (f64, f64);

impl Axis {
    /// Creates an axis with no segment and no calibration points.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines (or redefines) the axis segment from `a` to `b`.
    ///
    /// Coincident endpoints are accepted; degeneracy is resolved at query
    /// time by [`Axis::project_fraction`]. Redefining the segment keeps any
    /// calibration points already added: they are re-projected against the
    /// new segment on the next query. Hosts that want a fresh axis after a
    /// redraw should construct a new `Axis` instead.
    pub fn define_segment(&mut self, a: impl Into<Point>, b: impl Into<Point>) {
        self.segment = Some(Line::new(a, b));
    }

    /// Removes the axis segment, returning the axis to the undefined state.
    ///
    /// Calibration points are kept, mirroring [`Axis::define_segment`].
    pub fn clear_segment(&mut self) {
        self.segment = None;
    }

    /// Records that pixel location `point` corresponds to `value`.
    ///
    /// Points are kept in insertion order; duplicates and positions outside
    /// the segment are allowed and sorted out at query time.
    pub fn add_calibration(&mut self, point: impl Into<Point>, value: f64) {
        self.calibration.push(CalibrationPoint {
            point: point.into(),
            value,
        });
    }

    /// Returns the current segment, if one has been defined.
    pub fn segment(&self) -> Option<Line> {
        self.segment
    }

    /// Returns `true` once a segment has been defined.
    pub fn is_defined(&self) -> bool {
        self.segment.is_some()
    }

    /// Returns the calibration points in insertion order.
    pub fn calibration(&self) -> &[CalibrationPoint] {
        &self.calibration
    }

    /// Returns the fractional position of `point` along the segment.
    ///
    /// This is the scalar projection `t` such that the foot of the
    /// perpendicular from `point` lies at `a + t * (b - a)`. The result is
    /// not clamped: points beyond the endpoints project to `t < 0` or
    /// `t > 1`. Returns `0.0` when the segment is undefined or zero-length.
    pub fn project_fraction(&self, point: impl Into<Point>) -> f64 {
        let Some(line) = self.segment else {
            return 0.0;
        };
        let ab = line.p1 - line.p0;
        let norm_sq = ab.dot(ab);
        if norm_sq <= 0.0 {
            return 0.0;
        }
        (point.into() - line.p0).dot(ab) / norm_sq
    }

    /// Maps a fractional position along the axis to a real-world value.
    ///
    /// `endpoint_min` and `endpoint_max` are the values the caller declares
    /// for fractions 0 and 1. They always contribute two interpolation
    /// nodes; each calibration point contributes one more, at its projection
    /// onto the *current* segment. Nodes are sorted by position (stable, so
    /// ties keep insertion order) and `fraction` is resolved by linear
    /// interpolation between its bracketing nodes. Beyond the outermost
    /// nodes the value is held flat rather than extrapolated along a slope.
    ///
    /// Returns `endpoint_min` when the segment is undefined or zero-length.
    /// Two nodes at the same position form a step; querying exactly at it
    /// yields the earlier node's value.
    pub fn map_value(&self, fraction: f64, endpoint_min: f64, endpoint_max: f64) -> f64 {
        let Some(line) = self.segment else {
            return endpoint_min;
        };
        let ab = line.p1 - line.p0;
        if ab.dot(ab) <= 0.0 {
            return endpoint_min;
        }

        let mut nodes: SmallVec<[Node; 8]> = SmallVec::new();
        nodes.push((0.0, endpoint_min));
        nodes.push((1.0, endpoint_max));
        for calib in &self.calibration {
            nodes.push((self.project_fraction(calib.point), calib.value));
        }
        // Stable, and deterministic even for NaN positions.
        nodes.sort_by(|a, b| a.0.total_cmp(&b.0));

        let (first_pos, first_value) = nodes[0];
        if fraction <= first_pos {
            return first_value;
        }
        let (last_pos, last_value) = nodes[nodes.len() - 1];
        if fraction >= last_pos {
            return last_value;
        }
        for pair in nodes.windows(2) {
            let (t0, v0) = pair[0];
            let (t1, v1) = pair[1];
            if fraction >= t0 && fraction <= t1 {
                if t0 == t1 {
                    return v0;
                }
                let rel = (fraction - t0) / (t1 - t0);
                return v0 + rel * (v1 - v0);
            }
        }
        endpoint_min
    }
}
