//! Cartesian combination of per-source samples.
//!
//! A run walks the sources depth-first. Every time a level is entered, a fresh
//! sample of that level's source is drawn, so two different prefixes usually
//! see different lines below them. The walk keeps one [`Frame`] per level
//! instead of recursing, which keeps deep source lists off the call stack.

use std::io::Write;

use log::info;
use rand::Rng;

use crate::error::{CombineError, Result};
use crate::sampling::sample_lines;
use crate::types::{SamplingPolicy, Source};

pub const DEFAULT_SEPARATOR: &str = " ";

/// Combines sampled lines from an ordered list of sources.
#[derive(Debug, Clone)]
pub struct Combiner {
    sources: Vec<Source>,
    policy: SamplingPolicy,
    separator: String,
}

impl Combiner {
    pub fn new(sources: Vec<Source>, policy: SamplingPolicy) -> Result<Self> {
        if sources.is_empty() {
            return Err(CombineError::NoSources);
        }
        Ok(Self {
            sources,
            policy,
            separator: DEFAULT_SEPARATOR.to_string(),
        })
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn policy(&self) -> &SamplingPolicy {
        &self.policy
    }

    /// Number of combinations an unsampled run produces, if it fits in a `u128`.
    pub fn full_product_len(&self) -> Option<u128> {
        self.sources
            .iter()
            .try_fold(1u128, |acc, s| acc.checked_mul(s.len() as u128))
    }

    /// Lazily walk the combinations, drawing samples from `rng` as levels are
    /// entered. The iterator ends after the first error.
    pub fn combinations<'a, R: Rng + ?Sized>(&'a self, rng: &'a mut R) -> Combinations<'a, R> {
        Combinations {
            combiner: self,
            rng,
            stack: Vec::with_capacity(self.sources.len()),
            path: Vec::with_capacity(self.sources.len()),
            started: false,
            done: false,
        }
    }

    /// Write every combination to `out`, one per line, and flush.
    /// Returns how many lines were written.
    pub fn write_to<R: Rng + ?Sized, W: Write>(&self, rng: &mut R, out: &mut W) -> Result<u64> {
        let mut written = 0u64;
        for combination in self.combinations(rng) {
            writeln!(out, "{}", combination?)?;
            written += 1;
        }
        out.flush()?;
        info!("Wrote {} combinations", written);
        Ok(written)
    }
}

/// One level of the walk: the lines picked for this visit and the next one to use.
#[derive(Debug)]
struct Frame<'a> {
    picks: Vec<&'a str>,
    next: usize,
}

/// Iterator over rendered combinations, see [`Combiner::combinations`].
pub struct Combinations<'a, R: ?Sized> {
    combiner: &'a Combiner,
    rng: &'a mut R,
    stack: Vec<Frame<'a>>,
    path: Vec<&'a str>,
    started: bool,
    done: bool,
}

impl<'a, R: Rng + ?Sized> Combinations<'a, R> {
    fn enter_level(&mut self, level: usize) -> Result<()> {
        let combiner = self.combiner;
        let picks = sample_lines(
            &combiner.sources[level],
            combiner.policy.bounds_for_level(level),
            combiner.policy.overflow,
            &mut *self.rng,
        )?;
        self.stack.push(Frame { picks, next: 0 });
        Ok(())
    }

    fn fail(&mut self, err: CombineError) -> Option<Result<String>> {
        self.done = true;
        self.stack.clear();
        Some(Err(err))
    }
}

impl<'a, R: Rng + ?Sized> Iterator for Combinations<'a, R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            if let Err(e) = self.enter_level(0) {
                return self.fail(e);
            }
        }

        let last_level = self.combiner.sources.len() - 1;
        loop {
            let Some(depth) = self.stack.len().checked_sub(1) else {
                self.done = true;
                return None;
            };
            let frame = &mut self.stack[depth];

            let Some(&pick) = frame.picks.get(frame.next) else {
                self.stack.pop();
                continue;
            };
            frame.next += 1;

            self.path.truncate(depth);
            self.path.push(pick);

            if depth == last_level {
                return Some(Ok(self.path.join(self.combiner.separator.as_str())));
            }
            if let Err(e) = self.enter_level(depth + 1) {
                return self.fail(e);
            }
        }
    }
}
