// Copyright 2026 the Dechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis calibration and coordinate mapping for chart digitizing.
//!
//! This crate is the numeric core of a chart digitizer: given a raster image
//! of a chart, a host application lets the user draw each axis as a line
//! segment in pixel space, mark calibration points along it ("this pixel is
//! worth 3.5"), and then click arbitrary points of interest. This crate turns
//! those clicks into calibrated data values:
//! - [`Axis`] holds one axis segment plus its calibration points and maps
//!   positions along the segment to real values by piecewise-linear
//!   interpolation.
//! - [`PointMapper`] projects a pixel point onto a horizontal and a vertical
//!   [`Axis`] independently, so skewed or rotated chart axes work unchanged.
//!
//! Everything interactive (windows, click sequencing, drawn shapes, undo) is
//! the host's concern; this crate is pure computation over in-memory state.
//! Every operation is total: undefined axes, zero-length segments, and
//! coincident calibration points all resolve to documented fallback values
//! rather than errors.

#![no_std]

extern crate alloc;

mod axis;
mod mapper;

pub use axis::{Axis, CalibrationPoint};
pub use mapper::PointMapper;
