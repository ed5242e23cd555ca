use log::{debug, warn};
use rand::seq::index;
use rand::Rng;

use crate::error::{CombineError, Result};
use crate::types::{OverflowPolicy, SampleBounds, Source};

/// Pick the lines of `source` visited at one level of a combination run.
///
/// Without bounds every line is returned in file order. With bounds a size
/// `k` is drawn uniformly from `[min, max]` and `k` distinct lines are chosen
/// without replacement, in the shuffled order the draw produces. A `k` larger
/// than the source is an error under [`OverflowPolicy::Fail`] and shrinks to
/// the whole source under [`OverflowPolicy::Clamp`].
pub fn sample_lines<'s, R: Rng + ?Sized>(
    source: &'s Source,
    bounds: Option<SampleBounds>,
    overflow: OverflowPolicy,
    rng: &mut R,
) -> Result<Vec<&'s str>> {
    let lines = source.lines();

    let Some(bounds) = bounds else {
        return Ok(lines.iter().map(String::as_str).collect());
    };

    let mut k = rng.gen_range(bounds.min()..=bounds.max());
    if k > lines.len() {
        match overflow {
            OverflowPolicy::Fail => {
                return Err(CombineError::Sampling {
                    name: source.name().to_string(),
                    requested: k,
                    available: lines.len(),
                });
            }
            OverflowPolicy::Clamp => {
                warn!(
                    "Clamping sample of {} to {} lines for source '{}'",
                    k,
                    lines.len(),
                    source.name()
                );
                k = lines.len();
            }
        }
    }

    debug!("Sampling {} of {} lines from '{}'", k, lines.len(), source.name());

    Ok(index::sample(rng, lines.len(), k)
        .into_iter()
        .map(|i| lines[i].as_str())
        .collect())
}
