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

use crate::{ImageSize, SpectralError};
use std::{num::NonZeroUsize, thread::available_parallelism};

#[repr(C)]
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Default, Hash)]
/// Set threading policy.
pub enum ThreadingPolicy {
    /// Use only one thread, current is preferred.
    #[default]
    Single,
    /// Compute adaptive thread count between 1..available CPUs.
    Adaptive,
    /// Use specified number of threads.
    Fixed(NonZeroUsize),
}

impl ThreadingPolicy {
    /// Returns the number of threads to use for the given padded extent under the
    /// selected policy variant.
    ///
    /// Must return at least 1.
    pub fn thread_count(&self, size: ImageSize) -> usize {
        match self {
            ThreadingPolicy::Single => 1,
            ThreadingPolicy::Adaptive => {
                // Direct transforms are quadratic per line, so even small rasters benefit
                (size.area() / (64 * 64)).clamp(1, Self::available_parallelism(2))
            }
            ThreadingPolicy::Fixed(fixed) => fixed.get(),
        }
    }

    /// Builds a pool for the given extent, `None` means run on the current thread.
    pub(crate) fn make_pool(
        &self,
        size: ImageSize,
    ) -> Result<Option<rayon::ThreadPool>, SpectralError> {
        let thread_count = self.thread_count(size);
        if thread_count == 1 {
            return Ok(None);
        }
        rayon::ThreadPoolBuilder::new()
            .num_threads(thread_count)
            .build()
            .map(Some)
            .map_err(|e| SpectralError::ThreadPool(e.to_string()))
    }

    // Make always return at least some minimal amount of threads, if multi-threading were requested
    // At least on single core CPU have 2 threads is beneficial
    fn available_parallelism(min: usize) -> usize {
        available_parallelism()
            .map(|x| x.get())
            .unwrap_or(1)
            .max(min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_count_bounds() {
        let size = ImageSize::new(5, 5);
        assert_eq!(ThreadingPolicy::Single.thread_count(size), 1);
        assert_eq!(ThreadingPolicy::Adaptive.thread_count(size), 1);
        let fixed = ThreadingPolicy::Fixed(NonZeroUsize::new(3).unwrap());
        assert_eq!(fixed.thread_count(size), 3);
        let big = ImageSize::new(1023, 1023);
        assert!(ThreadingPolicy::Adaptive.thread_count(big) >= 2);
    }

    #[test]
    fn test_single_has_no_pool() {
        let pool = ThreadingPolicy::Single
            .make_pool(ImageSize::new(9, 9))
            .unwrap();
        assert!(pool.is_none());
    }
}
