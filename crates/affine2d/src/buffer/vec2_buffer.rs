use crate::error::{Error, Result};
use crate::math::{Point, Rect, Vec2};

use super::{base_of, even_odd_contains, whole_structs};

/// Contiguous `[x0, y0, x1, y1, ...]` storage.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vec2Buffer {
    data: Vec<f32>,
}

/// Read cursor at one element of a [`Vec2Buffer`].
#[derive(Clone, Copy, Debug)]
pub struct Vec2View<'a> {
    data: &'a [f32],
    base: usize,
}

/// Write cursor at one element of a [`Vec2Buffer`].
#[derive(Debug)]
pub struct Vec2ViewMut<'a> {
    data: &'a mut [f32],
    base: usize,
}

impl Vec2Buffer {
    pub const COMPONENTS: usize = 2;

    /// Zero-filled buffer large enough for `n` vectors.
    pub fn with_len(n: usize) -> Self {
        Self {
            data: vec![0.0; n * Self::COMPONENTS],
        }
    }

    pub fn from_data(data: Vec<f32>) -> Self {
        Self {
            data: whole_structs(data, Self::COMPONENTS),
        }
    }

    pub fn from_vecs<I: IntoIterator<Item = Vec2>>(vecs: I) -> Self {
        let data = vecs
            .into_iter()
            .flat_map(|v| [v.x as f32, v.y as f32])
            .collect();
        Self { data }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() / Self::COMPONENTS
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The flat float array backing this buffer.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    pub fn at(&self, index: usize) -> Result<Vec2View<'_>> {
        let base = base_of(index, self.len(), Self::COMPONENTS)?;
        Ok(Vec2View {
            data: &self.data,
            base,
        })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<Vec2ViewMut<'_>> {
        let base = base_of(index, self.len(), Self::COMPONENTS)?;
        Ok(Vec2ViewMut {
            data: &mut self.data,
            base,
        })
    }

    /// Copy of the vector at `index`.
    pub fn get(&self, index: usize) -> Result<Vec2> {
        self.at(index).map(|v| v.to_vec2())
    }

    pub fn set(&mut self, index: usize, v: Vec2) -> Result<()> {
        self.at_mut(index)?.set(v);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.data
            .chunks_exact(Self::COMPONENTS)
            .map(|c| Vec2::new(c[0] as f64, c[1] as f64))
    }

    /// Bounds of every stored vector read as a point; empty for an empty buffer.
    pub fn bounds(&self) -> Rect {
        Rect::bounding(self.iter().map(Vec2::to_point))
    }

    /// Checks if the polygon made of `count` vertices starting at `offset`
    /// contains `p`, using the even-odd crossing rule.
    ///
    /// Points exactly on the boundary are not reliably inside. An empty range
    /// contains nothing.
    pub fn contains_point(&self, p: Point, offset: usize, count: usize) -> Result<bool> {
        if count == 0 {
            return Ok(false);
        }
        let len = self.len();
        offset
            .checked_add(count)
            .filter(|&end| end <= len)
            .ok_or(Error::IndexOutOfBounds {
                index: offset.saturating_add(count - 1),
                len,
            })?;

        let data = &self.data;
        Ok(even_odd_contains(p, count, |i| {
            let base = (offset + i) * Self::COMPONENTS;
            (data[base] as f64, data[base + 1] as f64)
        }))
    }
}

impl FromIterator<Vec2> for Vec2Buffer {
    fn from_iter<I: IntoIterator<Item = Vec2>>(iter: I) -> Self {
        Self::from_vecs(iter)
    }
}

impl Vec2View<'_> {
    #[inline]
    pub fn index(&self) -> usize {
        self.base / Vec2Buffer::COMPONENTS
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.data[self.base] as f64
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.data[self.base + 1] as f64
    }

    #[inline]
    pub fn to_vec2(&self) -> Vec2 {
        Vec2::new(self.x(), self.y())
    }

    /// Moves the cursor to `index`, re-checking bounds.
    pub fn reposition(&mut self, index: usize) -> Result<()> {
        let len = self.data.len() / Vec2Buffer::COMPONENTS;
        self.base = base_of(index, len, Vec2Buffer::COMPONENTS)?;
        Ok(())
    }
}

impl Vec2ViewMut<'_> {
    #[inline]
    pub fn x(&self) -> f64 {
        self.data[self.base] as f64
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.data[self.base + 1] as f64
    }

    #[inline]
    pub fn set_x(&mut self, x: f64) {
        self.data[self.base] = x as f32;
    }

    #[inline]
    pub fn set_y(&mut self, y: f64) {
        self.data[self.base + 1] = y as f32;
    }

    pub fn set(&mut self, v: Vec2) {
        self.set_x(v.x);
        self.set_y(v.y);
    }

    /// Moves the cursor to `index`, re-checking bounds.
    pub fn reposition(&mut self, index: usize) -> Result<()> {
        let len = self.data.len() / Vec2Buffer::COMPONENTS;
        self.base = base_of(index, len, Vec2Buffer::COMPONENTS)?;
        Ok(())
    }
}
