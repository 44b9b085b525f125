// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The per-pixel escape-time kernel.
//!
//! This is the one-step-shifted variant of the classic iteration: the
//! orbit starts at `z0 = c` rather than the origin, which is one free
//! iteration baked in.  That shift, the bailout at squared radius 5.0,
//! and the bailout test reading the squares from *before* the update
//! are all part of the pixel contract.  Every depth byte in the movie
//! changes if any of them is "corrected", so they are pinned by tests
//! rather than tidied up.

use num::Complex;

/// Iteration budget per pixel.
pub const MAX_DEPTH: i32 = 256;

/// Squared orbit radius beyond which a point has escaped.
pub const BAILOUT: f64 = 5.0;

/// The remaining iteration budget when the orbit of `c` escapes, as a
/// byte.  A point that escapes on the very first check yields 255; a
/// point that never escapes exhausts the budget and yields 0 (the full
/// 256 wrapped into a byte, as the original movie format stores it).
pub fn escape_depth(c: Complex<f64>) -> u8 {
    let mut x = c.re;
    let mut y = c.im;
    let mut depth = MAX_DEPTH;
    loop {
        let x2 = x * x;
        let y2 = y * y;
        y = 2.0 * x * y + c.im;
        x = x2 - y2 + c.re;
        depth -= 1;
        if depth == 0 || x2 + y2 >= BAILOUT {
            return depth as u8;
        }
    }
}
