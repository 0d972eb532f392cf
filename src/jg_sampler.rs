//! Weighted and uniform index selection used by the update rules.
//!
//! [`select`] is roulette-wheel selection by stochastic acceptance: draw a
//! uniform candidate, keep it with probability `weight / max_weight`. The
//! weights need no normalisation, only their current maximum, which
//! [`GraphState`](crate::jg_graph::GraphState) keeps up to date.

use crate::jg_error::{JinError, JinResult};
use crate::jg_interface::RandomSource;

/// Index `i` chosen with probability proportional to `weights[i]`.
///
/// `max_weight` must be the maximum of `weights`. A zero maximum would never
/// accept a candidate, so it is reported as [`JinError::DegenerateSelection`].
pub fn select<R>(rng: &mut R, weights: &[usize], max_weight: usize) -> JinResult<usize>
where
    R: RandomSource + ?Sized,
{
    if max_weight == 0 || weights.is_empty() {
        return Err(JinError::DegenerateSelection { max_weight });
    }

    let max = max_weight as f64;
    loop {
        let i = rng.next_index(weights.len());
        if rng.next_unit() < weights[i] as f64 / max {
            return Ok(i);
        }
    }
}

/// Two distinct uniform indices in `[0, population)`, smaller first.
///
/// The second index is redrawn until it differs from the first.
pub fn pair_indices<R>(rng: &mut R, population: usize) -> JinResult<(usize, usize)>
where
    R: RandomSource + ?Sized,
{
    if population < 2 {
        return Err(JinError::PopulationTooSmall { size: population });
    }

    let a = rng.next_index(population);
    let mut b = a;
    while b == a {
        b = rng.next_index(population);
    }

    Ok(if a < b { (a, b) } else { (b, a) })
}
