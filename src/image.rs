/*
 * // Copyright (c) Radzivon Bartoshyk. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */

use crate::util::check_slice_size;
use crate::{ImageSize, SpectralError};
use std::fmt::Debug;

#[derive(Debug)]
pub enum BufferStore<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> BufferStore<'_, T> {
    #[allow(clippy::should_implement_trait)]
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn borrow_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    pub(crate) fn resize(&mut self, new_size: usize, value: T) {
        match self {
            Self::Borrowed(_) => {}
            Self::Owned(vec) => vec.resize(new_size, value),
        }
    }
}

/// Immutable single plane raster
pub struct SpectralImage<'a, T: Clone + Copy + Default + Debug> {
    pub data: std::borrow::Cow<'a, [T]>,
    pub width: u32,
    pub height: u32,
    /// Image stride, items per row, might be 0
    pub stride: u32,
}

/// Mutable single plane raster
/// If it owns vector it does auto resizing on methods that working out-of-place.
pub struct SpectralImageMut<'a, T: Clone + Copy + Default + Debug> {
    pub data: BufferStore<'a, T>,
    pub width: u32,
    pub height: u32,
    /// Image stride, items per row, might be 0
    pub stride: u32,
}

impl<T: Clone + Copy + Default + Debug> Default for SpectralImageMut<'_, T> {
    fn default() -> Self {
        SpectralImageMut {
            data: BufferStore::Owned(Vec::new()),
            width: 0,
            height: 0,
            stride: 0,
        }
    }
}

impl<'a, T: Clone + Copy + Default + Debug> SpectralImage<'a, T> {
    /// Borrows existing data
    /// Stride will be default `width`
    pub fn borrow(arr: &'a [T], width: u32, height: u32) -> Self {
        Self {
            data: std::borrow::Cow::Borrowed(arr),
            width,
            height,
            stride: width,
        }
    }

    #[inline]
    pub fn size(&self) -> ImageSize {
        ImageSize::new(self.width as usize, self.height as usize)
    }

    /// Returns row stride
    #[inline]
    pub fn row_stride(&self) -> u32 {
        if self.stride == 0 {
            self.width
        } else {
            self.stride
        }
    }

    #[inline]
    pub fn check_layout(&self) -> Result<(), SpectralError> {
        check_slice_size(
            self.data.as_ref(),
            self.row_stride() as usize,
            self.width as usize,
            self.height as usize,
        )
    }

    /// Iterates over image rows without stride padding
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        let width = self.width as usize;
        self.data
            .as_ref()
            .chunks(self.row_stride() as usize)
            .take(self.height as usize)
            .map(move |row| &row[..width])
    }
}

impl<'a, T: Clone + Copy + Default + Debug> SpectralImageMut<'a, T> {
    /// Allocates default image layout
    pub fn alloc(width: u32, height: u32) -> Self {
        Self {
            data: BufferStore::Owned(vec![T::default(); width as usize * height as usize]),
            width,
            height,
            stride: width,
        }
    }

    /// Mutable borrows existing data
    /// Stride will be default `width`
    pub fn borrow(arr: &'a mut [T], width: u32, height: u32) -> Self {
        Self {
            data: BufferStore::Borrowed(arr),
            width,
            height,
            stride: width,
        }
    }

    #[inline]
    pub fn size(&self) -> ImageSize {
        ImageSize::new(self.width as usize, self.height as usize)
    }

    /// Returns row stride
    #[inline]
    pub fn row_stride(&self) -> u32 {
        if self.stride == 0 {
            self.width
        } else {
            self.stride
        }
    }

    /// Checks if layout matches necessary requirements.
    ///
    /// Owned storage is resized to `size` instead of being validated.
    #[inline]
    pub fn check_layout(&mut self, size: Option<ImageSize>) -> Result<(), SpectralError> {
        if let Some(size) = size {
            if matches!(self.data, BufferStore::Owned(_)) {
                self.resize(size.width as u32, size.height as u32);
                return Ok(());
            }
            if self.width as usize != size.width || self.height as usize != size.height {
                return Err(SpectralError::ImagesMustMatch);
            }
        }
        check_slice_size(
            self.data.borrow(),
            self.row_stride() as usize,
            self.width as usize,
            self.height as usize,
        )
    }

    /// Iterates over mutable image rows without stride padding
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [T]> + '_ {
        let width = self.width as usize;
        let stride = self.row_stride() as usize;
        let height = self.height as usize;
        self.data
            .borrow_mut()
            .chunks_mut(stride)
            .take(height)
            .map(move |row| &mut row[..width])
    }

    #[inline]
    pub fn to_immutable_ref(&self) -> SpectralImage<'_, T> {
        SpectralImage {
            data: std::borrow::Cow::Borrowed(self.data.borrow()),
            stride: self.row_stride(),
            width: self.width,
            height: self.height,
        }
    }

    #[inline]
    pub fn resize(&mut self, width: u32, height: u32) {
        self.height = height;
        self.width = width;
        self.stride = width;
        self.data.resize(
            self.row_stride() as usize * self.height as usize,
            T::default(),
        );
    }
}
