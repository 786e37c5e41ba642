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

use crate::{ThreadingPolicy, TransformKind};
use std::path::{Path, PathBuf};

/// Settings of one filtering run over a raster file
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// P5 raster to filter
    pub input_path: PathBuf,
    /// Cutoff radii, processed and written in this order
    pub cutoffs: Vec<f64>,
    /// Directory receiving `output_D0_<cutoff>.pgm` files
    pub output_dir: PathBuf,
    pub transform: TransformKind,
    pub threading_policy: ThreadingPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            input_path: PathBuf::from("Knee.pgm"),
            cutoffs: vec![10., 160.],
            output_dir: PathBuf::from("."),
            transform: TransformKind::default(),
            threading_policy: ThreadingPolicy::default(),
        }
    }
}

impl PipelineConfig {
    pub fn new(input_path: impl Into<PathBuf>, cutoffs: Vec<f64>) -> Self {
        PipelineConfig {
            input_path: input_path.into(),
            cutoffs,
            ..Default::default()
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_transform(mut self, transform: TransformKind) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_threading_policy(mut self, threading_policy: ThreadingPolicy) -> Self {
        self.threading_policy = threading_policy;
        self
    }

    /// Deterministic output location for a cutoff
    pub fn output_path(&self, cutoff: f64) -> PathBuf {
        output_path(&self.output_dir, cutoff)
    }
}

/// `<dir>/output_D0_<cutoff>.pgm`, integral cutoffs are printed without fraction
pub fn output_path(output_dir: &Path, cutoff: f64) -> PathBuf {
    output_dir.join(format!("output_D0_{cutoff}.pgm"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.input_path, PathBuf::from("Knee.pgm"));
        assert_eq!(config.cutoffs, vec![10., 160.]);
        assert_eq!(config.transform, TransformKind::Direct);
        assert_eq!(config.threading_policy, ThreadingPolicy::Single);
    }

    #[test]
    fn test_output_names() {
        let config = PipelineConfig::new("in.pgm", vec![10.]).with_output_dir("out");
        assert_eq!(
            config.output_path(10.),
            PathBuf::from("out").join("output_D0_10.pgm")
        );
        assert_eq!(
            config.output_path(160.),
            PathBuf::from("out").join("output_D0_160.pgm")
        );
        assert_eq!(
            config.output_path(12.5),
            PathBuf::from("out").join("output_D0_12.5.pgm")
        );
    }
}
