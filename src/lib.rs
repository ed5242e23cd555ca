pub mod combiner;
pub mod config;
pub mod error;
pub mod sampling;
pub mod source;
pub mod test_utils;
pub mod types;

// Re-export commonly used types
pub use combiner::{Combinations, Combiner};
pub use config::Config;
pub use error::{CombineError, Result};
pub use sampling::sample_lines;
pub use source::{load_source, load_sources};
pub use types::{OverflowPolicy, SampleBounds, SampleScope, SamplingPolicy, Source};
