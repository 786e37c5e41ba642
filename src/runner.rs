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

use crate::pgm::{read_pgm, write_pgm};
use crate::{LowPassPipeline, PipelineConfig, SpectralError};
use std::path::PathBuf;

/// Outcome of [run_pipeline]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PipelineReport {
    /// Rasters written, in cutoff order
    pub written: Vec<PathBuf>,
    /// Rasters that could not be written
    pub failed: Vec<(PathBuf, SpectralError)>,
}

impl PipelineReport {
    /// Every configured cutoff produced a file
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Filters the configured raster with every configured cutoff and writes results.
///
/// Loading and filtering errors abort before anything is written. All cutoffs are
/// reconstructed before the first write. Write failures do not stop remaining
/// writes, they are logged and collected in [PipelineReport::failed].
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineReport, SpectralError> {
    let source = read_pgm(&config.input_path)?;
    tracing::info!(
        input = %config.input_path.display(),
        width = source.width,
        height = source.height,
        cutoffs = ?config.cutoffs,
        "input raster loaded"
    );

    let pipeline = LowPassPipeline::<f64>::with_kind(
        &source.to_immutable_ref(),
        config.transform,
        config.threading_policy,
    )?;
    let outputs = pipeline.filter_all::<u8>(&config.cutoffs)?;

    let mut report = PipelineReport::default();
    for output in outputs {
        let path = config.output_path(output.cutoff);
        match write_pgm(&path, &output.image.to_immutable_ref()) {
            Ok(()) => {
                tracing::info!(
                    path = %path.display(),
                    cutoff = output.cutoff,
                    "output raster written"
                );
                report.written.push(path);
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    cutoff = output.cutoff,
                    error = %err,
                    "output raster was not written"
                );
                report.failed.push((path, err));
            }
        }
    }
    Ok(report)
}
