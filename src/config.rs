use clap::Parser;
use std::path::PathBuf;

use crate::combiner::DEFAULT_SEPARATOR;
use crate::error::Result;
use crate::types::{OverflowPolicy, SampleBounds, SampleScope, SamplingPolicy};

/// Configuration for the combine tool
#[derive(Debug, Clone, Parser)]
#[command(name = "combine", version)]
#[command(about = "Print combinations of randomly sampled lines from one or more files")]
pub struct Config {
    /// Input files, one source per file, combined in the order given
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Smallest number of lines sampled from a source per visit (default: 10)
    #[arg(long, default_value_t = SampleBounds::DEFAULT_MIN)]
    pub min_sample: usize,

    /// Largest number of lines sampled from a source per visit (default: 1000)
    #[arg(long, default_value_t = SampleBounds::DEFAULT_MAX)]
    pub max_sample: usize,

    /// Disable sampling and print the full Cartesian product
    #[arg(long)]
    pub no_sample: bool,

    /// Which sources are sampled: every source, or only the first
    #[arg(long, value_enum, default_value_t = SampleScope::All)]
    pub sample_scope: SampleScope,

    /// What to do when a drawn sample size exceeds a source's line count
    #[arg(long, value_enum, default_value_t = OverflowPolicy::Fail)]
    pub on_overflow: OverflowPolicy,

    /// String placed between the lines of a combination
    #[arg(long, default_value = DEFAULT_SEPARATOR)]
    pub separator: String,

    /// Seed for random number generator (omit for a fresh random run)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error); overrides RUST_LOG, default: warn
    #[arg(long)]
    pub log_level: Option<String>,

    /// Also write log records to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Build the sampling policy from the sampling flags, validating bounds
    /// unless sampling is disabled.
    pub fn sampling_policy(&self) -> Result<SamplingPolicy> {
        if self.no_sample {
            return Ok(SamplingPolicy::unsampled());
        }
        let bounds = SampleBounds::new(self.min_sample, self.max_sample)?;
        Ok(SamplingPolicy::sampled(bounds)
            .with_scope(self.sample_scope)
            .with_overflow(self.on_overflow))
    }
}
