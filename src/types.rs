use clap::ValueEnum;

use crate::error::{CombineError, Result};

/// One input's lines, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    name: String,
    lines: Vec<String>,
}

impl Source {
    /// Build a source from raw lines. Each line is trimmed of surrounding ASCII
    /// whitespace; blank lines are kept as empty strings.
    pub fn new<I, S>(name: impl Into<String>, lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        let lines: Vec<String> = lines
            .into_iter()
            .map(|l| l.as_ref().trim_matches(|c: char| c.is_ascii_whitespace()).to_string())
            .collect();

        if lines.is_empty() {
            return Err(CombineError::EmptyInput { name });
        }

        Ok(Self { name, lines })
    }

    /// Split `text` into lines (`\n` or `\r\n`) and build a source from them.
    pub fn from_text(name: impl Into<String>, text: &str) -> Result<Self> {
        Self::new(name, text.lines())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Inclusive range of sample sizes, `1 <= min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleBounds {
    min: usize,
    max: usize,
}

impl SampleBounds {
    pub const DEFAULT_MIN: usize = 10;
    pub const DEFAULT_MAX: usize = 1000;

    pub fn new(min: usize, max: usize) -> Result<Self> {
        if min == 0 || min > max {
            return Err(CombineError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

impl Default for SampleBounds {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

/// Which recursion levels draw a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SampleScope {
    /// Every source is sampled with the same bounds.
    #[default]
    All,
    /// Only the first source is sampled; the rest are taken in full.
    First,
}

/// What to do when a drawn sample size exceeds the source length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OverflowPolicy {
    #[default]
    Fail,
    /// Shrink the sample to the whole source.
    Clamp,
}

/// Sampling configuration threaded through every level of a combination run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SamplingPolicy {
    pub bounds: Option<SampleBounds>,
    pub scope: SampleScope,
    pub overflow: OverflowPolicy,
}

impl SamplingPolicy {
    /// No sampling anywhere: the full Cartesian product.
    pub fn unsampled() -> Self {
        Self::default()
    }

    pub fn sampled(bounds: SampleBounds) -> Self {
        Self {
            bounds: Some(bounds),
            ..Self::default()
        }
    }

    pub fn with_scope(mut self, scope: SampleScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Bounds that apply at recursion depth `level` (0 is the first source).
    pub fn bounds_for_level(&self, level: usize) -> Option<SampleBounds> {
        match self.scope {
            SampleScope::All => self.bounds,
            SampleScope::First if level == 0 => self.bounds,
            SampleScope::First => None,
        }
    }
}
