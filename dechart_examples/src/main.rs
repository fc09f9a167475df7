// Copyright 2026 the Dechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Example binary for `dechart_core` and `dechart_trace`.
//!
//! Walks through a digitizing session the way a GUI host would drive it:
//! define the axes from user-picked pixel points, add calibration marks,
//! trace a curve, and read back calibrated values.

use dechart_core::{Axis, PointMapper};
use dechart_trace::{Trace, TraceId, TraceSet};
use peniko::color::palette::css;

fn main() {
    // The scanned chart is 400x300 pixels and slightly sheared: the y axis
    // leans 10 pixels to the right over its height. Pixel y grows downward,
    // so the vertical axis is drawn bottom-to-top.
    let mut x_axis = Axis::new();
    x_axis.define_segment((40.0, 260.0), (380.0, 260.0));
    let mut y_axis = Axis::new();
    y_axis.define_segment((40.0, 260.0), (50.0, 20.0));

    // A query before any vertical axis exists falls back to the minima.
    {
        let undefined = Axis::new();
        let mapper = PointMapper::new(&x_axis, &undefined);
        let (x, y) = mapper.map_point((200.0, 140.0), (0.0, 100.0), (0.0, 50.0));
        println!("before calibration: ({x}, {y})");
    }

    // The x axis has a non-uniform printed scale; pin the 25 gridline where
    // the user actually clicked it.
    x_axis.add_calibration((150.0, 262.0), 25.0);

    let mapper = PointMapper::new(&x_axis, &y_axis);

    let mut traces = TraceSet::new();
    let id = TraceId(1);
    traces.insert(id, Trace::new("upper bound").with_color(css::CRIMSON));

    let trace = traces.get_mut(id).unwrap();
    for p in [(74.0, 230.0), (150.0, 180.0), (260.0, 120.0), (365.0, 60.0)] {
        trace.push_point(p);
    }

    let trace = traces.get(id).unwrap();
    println!("{} ({} points):", trace.name, trace.len());
    for (pixel, (x, y)) in trace
        .points()
        .iter()
        .zip(trace.digitize(&mapper, (0.0, 100.0), (0.0, 50.0)))
    {
        println!("  ({:6.1}, {:6.1}) px -> ({x:8.3}, {y:8.3})", pixel.x, pixel.y);
    }
}
