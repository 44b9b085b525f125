// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Fills frame buffers by walking every pixel of a frame's zoom
//! window through the escape kernel.  Buffers are row-major within a
//! frame and frame-major within a worker's block.

use escape::escape_depth;
use frames::FrameRange;
use itertools::iproduct;
use zoom::ZoomWindow;

/// Render one global frame into a `width * width` byte buffer,
/// row-major.  The same global index always produces the same bytes,
/// whichever worker asks.
pub fn render_frame(frame: usize, width: usize, out: &mut [u8]) {
    assert_eq!(out.len(), width * width);
    let window = ZoomWindow::for_frame(frame, width);
    for (row, col) in iproduct!(0..width, 0..width) {
        out[row * width + col] = escape_depth(window.sample(row, col));
    }
}

/// Render a worker's whole block into one frame-major buffer: frame
/// `range.start() + i` occupies bytes `[i * width * width, (i + 1) *
/// width * width)`.  This is exactly the layout the gather expects.
pub fn render_range(range: &FrameRange, width: usize) -> Vec<u8> {
    let frame_len = width * width;
    let mut film = vec![0 as u8; range.count() * frame_len];
    {
        let slots: Vec<&mut [u8]> = film.chunks_mut(frame_len).collect();
        for (slot, frame) in slots.into_iter().zip(range.frames()) {
            render_frame(frame, width, slot);
        }
    }
    film
}
