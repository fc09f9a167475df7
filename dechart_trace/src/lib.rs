// Copyright 2026 the Dechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named point traces digitized through the `dechart_core` mapping engine.
//!
//! A [`Trace`] is the data half of a digitizer's "line editor": the name,
//! display color, and insertion-ordered pixel points of one curve the user is
//! tracing off a chart image. Widgets, markers, and undo belong to the host;
//! this crate only stores the points and converts them to calibrated values
//! via [`Trace::digitize`].
//!
//! [`TraceSet`] keys traces by a stable [`TraceId`], so hosts can address
//! them across edits the same way they address other scene objects.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use dechart_core::PointMapper;
use hashbrown::HashMap;
use kurbo::Point;
use peniko::Color;
use peniko::color::palette::css;

/// Stable identifier for a [`Trace`] within a [`TraceSet`].
///
/// Ids are assigned by the host and never reused while the host still refers
/// to them (for example from exported files or drawn markers).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TraceId(pub u64);

/// One traced curve: a name, a display color, and its pixel points.
///
/// Points are kept in insertion order. They can only be appended or cleared
/// wholesale; removing a single point is not supported, matching the
/// append-then-reset workflow of interactive tracing.
#[derive(Clone, Debug, PartialEq)]
pub struct Trace {
    /// Display name of the curve.
    pub name: String,
    /// Display color, carried as model data for the host's renderer.
    pub color: Color,
    points: Vec<Point>,
}

impl Trace {
    /// Creates an empty black trace named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: css::BLACK,
            points: Vec::new(),
        }
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Appends a pixel point to the trace.
    pub fn push_point(&mut self, point: impl Into<Point>) {
        self.points.push(point.into());
    }

    /// Removes all points, keeping the trace's name and color.
    pub fn clear_points(&mut self) {
        self.points.clear();
    }

    /// Returns the pixel points in insertion order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the trace has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Maps every point of the trace to calibrated `(x, y)` values.
    ///
    /// Each point goes through [`PointMapper::map_point`] with the given
    /// endpoint ranges, so all of the mapper's fallback behavior applies
    /// per point (an undefined axis yields the range minima).
    pub fn digitize(
        &self,
        mapper: &PointMapper<'_>,
        h_range: (f64, f64),
        v_range: (f64, f64),
    ) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|&p| mapper.map_point(p, h_range, v_range))
            .collect()
    }
}

/// A set of traces keyed by [`TraceId`].
#[derive(Clone, Debug, Default)]
pub struct TraceSet {
    traces: HashMap<TraceId, Trace>,
}

impl TraceSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a trace, returning the previous trace under `id`, if any.
    pub fn insert(&mut self, id: TraceId, trace: Trace) -> Option<Trace> {
        self.traces.insert(id, trace)
    }

    /// Removes and returns the trace under `id`, if present.
    pub fn remove(&mut self, id: TraceId) -> Option<Trace> {
        self.traces.remove(&id)
    }

    /// Returns the trace under `id`, if present.
    pub fn get(&self, id: TraceId) -> Option<&Trace> {
        self.traces.get(&id)
    }

    /// Returns the trace under `id` mutably, if present.
    pub fn get_mut(&mut self, id: TraceId) -> Option<&mut Trace> {
        self.traces.get_mut(&id)
    }

    /// Iterates over all traces in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (TraceId, &Trace)> {
        self.traces.iter().map(|(&id, trace)| (id, trace))
    }

    /// Returns the number of traces.
    pub fn len(&self) -> usize {
        self.traces.len()
    }

    /// Returns `true` if the set holds no traces.
    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }
}
