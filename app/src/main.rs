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

//! Ideal low pass filtering of a binary graymap with several cutoffs.

use clap::{Parser, ValueEnum};
use libspectral::{run_pipeline, PipelineConfig, ThreadingPolicy, TransformKind};
use std::num::NonZeroUsize;
use std::path::PathBuf;

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CliEngine {
    /// Direct O(L²) transform
    Direct,
    /// Fast Fourier transform
    Fast,
}

impl CliEngine {
    fn to_core(self) -> TransformKind {
        match self {
            CliEngine::Direct => TransformKind::Direct,
            CliEngine::Fast => TransformKind::Fast,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "low-pass")]
#[command(about = "Filter a P5 graymap with an ideal low pass filter for every cutoff")]
#[command(version)]
struct Cli {
    /// Path to the input P5 raster.
    #[arg(long, default_value = "Knee.pgm")]
    input: PathBuf,

    /// Cutoff radius in frequency index units, repeat for several outputs.
    #[arg(long = "cutoff", default_values_t = [10.0, 160.0])]
    cutoffs: Vec<f64>,

    /// Directory receiving output_D0_<cutoff>.pgm files.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Transform engine.
    #[arg(long, value_enum, default_value_t = CliEngine::Direct)]
    engine: CliEngine,

    /// Worker threads for row and column passes, 0 picks adaptively.
    #[arg(long, default_value = "1")]
    threads: usize,
}

impl Cli {
    fn to_config(&self) -> PipelineConfig {
        let threading_policy = match self.threads {
            0 => ThreadingPolicy::Adaptive,
            1 => ThreadingPolicy::Single,
            n => NonZeroUsize::new(n)
                .map(ThreadingPolicy::Fixed)
                .unwrap_or(ThreadingPolicy::Single),
        };
        PipelineConfig::new(self.input.clone(), self.cutoffs.clone())
            .with_output_dir(self.output_dir.clone())
            .with_transform(self.engine.to_core())
            .with_threading_policy(threading_policy)
    }
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.to_config();
    tracing::debug!(?config, "configuration parsed");

    let report = run_pipeline(&config)?;
    for path in report.written.iter() {
        println!("Saved: {}", path.display());
    }
    for (path, err) in report.failed.iter() {
        eprintln!("Failed: {}: {err}", path.display());
    }
    if !report.is_complete() {
        return Err(format!(
            "{} of {} outputs were not written",
            report.failed.len(),
            config.cutoffs.len()
        )
        .into());
    }
    Ok(())
}
