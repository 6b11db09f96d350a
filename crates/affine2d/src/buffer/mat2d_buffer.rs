use crate::error::Result;
use crate::math::Mat2d;

use super::{base_of, whole_structs};

/// Contiguous column-major matrices, six floats each.
///
/// Layout per element: `[c1r1, c1r2, c2r1, c2r2, c3r1, c3r2]`, the same order
/// `Mat2d` serializes to, so one element is one instance attribute upload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mat2dBuffer {
    data: Vec<f32>,
}

#[derive(Clone, Copy, Debug)]
pub struct Mat2dView<'a> {
    data: &'a [f32],
    base: usize,
}

#[derive(Debug)]
pub struct Mat2dViewMut<'a> {
    data: &'a mut [f32],
    base: usize,
}

const C1R1: usize = 0;
const C1R2: usize = 1;
const C2R1: usize = 2;
const C2R2: usize = 3;
const C3R1: usize = 4;
const C3R2: usize = 5;

impl Mat2dBuffer {
    pub const COMPONENTS: usize = 6;

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

    pub fn from_matrices<'m, I: IntoIterator<Item = &'m Mat2d>>(matrices: I) -> Self {
        let data = matrices
            .into_iter()
            .flat_map(|m| m.to_array().map(|v| v as f32))
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

    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    pub fn at(&self, index: usize) -> Result<Mat2dView<'_>> {
        let base = base_of(index, self.len(), Self::COMPONENTS)?;
        Ok(Mat2dView {
            data: &self.data,
            base,
        })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<Mat2dViewMut<'_>> {
        let base = base_of(index, self.len(), Self::COMPONENTS)?;
        Ok(Mat2dViewMut {
            data: &mut self.data,
            base,
        })
    }

    pub fn get(&self, index: usize) -> Result<Mat2d> {
        self.at(index).map(|m| m.to_mat2d())
    }

    pub fn set(&mut self, index: usize, m: &Mat2d) -> Result<()> {
        self.at_mut(index)?.set(m);
        Ok(())
    }
}

macro_rules! cursor_fields {
    ($($name:ident => $offset:expr),* $(,)?) => {
        $(
            #[inline]
            pub fn $name(&self) -> f64 {
                self.data[self.base + $offset] as f64
            }
        )*

        /// Moves the cursor to `index`, re-checking bounds.
        pub fn reposition(&mut self, index: usize) -> Result<()> {
            let len = self.data.len() / Mat2dBuffer::COMPONENTS;
            self.base = base_of(index, len, Mat2dBuffer::COMPONENTS)?;
            Ok(())
        }

        pub fn to_mat2d(&self) -> Mat2d {
            Mat2d {
                c1r1: self.c1r1(),
                c1r2: self.c1r2(),
                c2r1: self.c2r1(),
                c2r2: self.c2r2(),
                c3r1: self.c3r1(),
                c3r2: self.c3r2(),
            }
        }
    };
}

impl Mat2dView<'_> {
    cursor_fields!(c1r1 => C1R1, c1r2 => C1R2, c2r1 => C2R1, c2r2 => C2R2, c3r1 => C3R1, c3r2 => C3R2);
}

impl Mat2dViewMut<'_> {
    cursor_fields!(c1r1 => C1R1, c1r2 => C1R2, c2r1 => C2R1, c2r2 => C2R2, c3r1 => C3R1, c3r2 => C3R2);

    /// Writes all six components of `m` at the cursor.
    pub fn set(&mut self, m: &Mat2d) {
        let dst = &mut self.data[self.base..self.base + Mat2dBuffer::COMPONENTS];
        for (d, v) in dst.iter_mut().zip(m.to_array()) {
            *d = v as f32;
        }
    }

    /// Writes the translation column only.
    pub fn set_translation(&mut self, x: f64, y: f64) {
        self.data[self.base + C3R1] = x as f32;
        self.data[self.base + C3R2] = y as f32;
    }
}
