#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot zoom-movie renderer
//!
//! Renders a sequence of frames that zoom continuously into a fixed
//! point of the complex plane.  Each frame shrinks the visible window
//! by one percent, so the movie dives ever deeper into the boundary
//! of the Mandelbrot set around (0.745796, 0.105089).
//!
//! The frame sequence is split evenly across a fixed group of workers.
//! Workers share no memory: each one computes which contiguous block
//! of frames it owns from its own rank and the group size, renders
//! that block into a private buffer, and contributes the buffer to a
//! single rank-ordered gather.  Because the blocks are assigned in
//! ascending rank order, the gathered buffer lands on the coordinator
//! already in global frame order, and because the zoom radius is a
//! pure function of the global frame index, the movie is bit-identical
//! no matter how many workers took part.

#[macro_use]
extern crate failure;

extern crate crossbeam;
extern crate image;
extern crate itertools;
extern crate num;
extern crate num_cpus;

pub mod collect;
pub mod collective;
pub mod config;
pub mod escape;
pub mod frames;
pub mod render;
pub mod zoom;

pub use collect::{collect_frames, Harvest};
pub use collective::{Collective, ThreadGroup};
pub use config::{ConfigError, Settings};
pub use escape::escape_depth;
pub use frames::FrameRange;
pub use render::{render_frame, render_range};
pub use zoom::{zoom_delta, ZoomDecay, ZoomWindow};
