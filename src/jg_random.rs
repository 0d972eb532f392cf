// Seeded random source backed by rand's StdRng

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::jg_interface::RandomSource;

/// `RandomSource` over `StdRng`, remembering the seed it was built from so a
/// run can be reported and replayed.
pub struct SeededSource {
    rng: StdRng,
    seed: [u8; 32],
}

impl SeededSource {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            rng: StdRng::from_seed(seed),
            seed,
        }
    }

    /// Fresh seed from the thread-local generator
    pub fn from_entropy() -> Self {
        let mut seed = [0u8; 32];
        rand::thread_rng().fill(&mut seed);
        Self::from_seed(seed)
    }

    /// Use `seed` when given, otherwise draw one
    pub fn from_optional_seed(seed: Option<[u8; 32]>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn seed(&self) -> [u8; 32] {
        self.seed
    }
}

impl RandomSource for SeededSource {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }

    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Parse a hex seed (optionally `0x`-prefixed). Short input is zero padded,
/// bytes past the 32nd are ignored.
pub fn parse_seed_hex(hex: &str) -> Result<[u8; 32], String> {
    let hex = hex.strip_prefix("0x").unwrap_or(hex);
    let mut seed = [0u8; 32];

    for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
        if i >= 32 {
            break;
        }
        let byte_str = std::str::from_utf8(chunk).map_err(|e| e.to_string())?;
        seed[i] = u8::from_str_radix(byte_str, 16)
            .map_err(|e| format!("invalid hex seed '{}': {}", byte_str, e))?;
    }

    Ok(seed)
}

/// Replays scripted draws; used to force specific pairs in tests.
#[cfg(test)]
pub(crate) struct ScriptedSource {
    indices: std::collections::VecDeque<usize>,
    units: std::collections::VecDeque<f64>,
}

#[cfg(test)]
impl ScriptedSource {
    pub(crate) fn new(indices: &[usize], units: &[f64]) -> Self {
        Self {
            indices: indices.iter().copied().collect(),
            units: units.iter().copied().collect(),
        }
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.indices.is_empty() && self.units.is_empty()
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn next_index(&mut self, bound: usize) -> usize {
        let i = self.indices.pop_front().expect("scripted indices exhausted");
        assert!(i < bound, "scripted index {} out of bound {}", i, bound);
        i
    }

    fn next_unit(&mut self) -> f64 {
        self.units.pop_front().expect("scripted units exhausted")
    }
}
