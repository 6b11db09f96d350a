//! Flat `f32` struct buffers for handing geometry to a rendering layer.
//!
//! Purpose
//! - Pack many `Vec2`/`Mat2d` values into one contiguous `Vec<f32>` that can be
//!   uploaded as-is, while still reading and writing them by named field.
//!
//! Assumptions and conventions
//! - A buffer holds `len() * COMPONENTS` floats; trailing floats that do not
//!   form a whole struct are dropped at construction.
//! - Cursors (`*View`, `*ViewMut`) are positioned with `at(index)` and moved
//!   with `reposition(index)`; those are the only bounds checks. Field
//!   accessors read `data[base + offset]`.
//! - Storage is single precision; values widen to `f64` on read.

mod mat2d_buffer;
mod vec2_buffer;

pub use mat2d_buffer::{Mat2dBuffer, Mat2dView, Mat2dViewMut};
pub use vec2_buffer::{Vec2Buffer, Vec2View, Vec2ViewMut};

use crate::error::{Error, Result};
use crate::math::Point;

/// Base offset of struct `index` in a buffer of `len` structs of `components` floats.
#[inline]
fn base_of(index: usize, len: usize, components: usize) -> Result<usize> {
    if index >= len {
        return Err(Error::IndexOutOfBounds { index, len });
    }
    Ok(index * components)
}

/// Drops trailing floats that do not form a whole struct.
#[inline]
fn whole_structs(mut data: Vec<f32>, components: usize) -> Vec<f32> {
    let keep = data.len() - data.len() % components;
    data.truncate(keep);
    data
}

/// Even-odd crossing test of `p` against the closed ring `vertex(0..count)`.
///
/// Casts a ray in +x and toggles on each edge that straddles `p.y`.
pub(crate) fn even_odd_contains<F>(p: Point, count: usize, vertex: F) -> bool
where
    F: Fn(usize) -> (f64, f64),
{
    if count == 0 {
        return false;
    }
    let mut inside = false;
    let (mut x1, mut y1) = vertex(count - 1);
    for i in 0..count {
        let (x2, y2) = vertex(i);
        if (y1 > p.y) != (y2 > p.y) && p.x < (x2 - x1) * (p.y - y1) / (y2 - y1) + x1 {
            inside = !inside;
        }
        x1 = x2;
        y1 = y2;
    }
    inside
}
