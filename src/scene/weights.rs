use rand::{distr::weighted::WeightedIndex, distr::Distribution, Rng};
use tracing::warn;

pub const SCENE_COUNT: usize = 4;

const BASE_WEIGHT: f32 = 1.0 / SCENE_COUNT as f32;
/// Amplitude of the temperature oscillation term.
const OSC_AMPLITUDE: f32 = 0.1;
/// Degrees Celsius per radian of oscillation phase.
const OSC_TEMP_SCALE: f32 = 10.0;
/// Per-slot phase offset, a quarter turn apiece.
const OSC_SLOT_PHASE: f32 = std::f32::consts::FRAC_PI_2;

/// A normalized categorical distribution over the catalog slots.
/// Entries are non-negative and sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightVector([f32; SCENE_COUNT]);

impl WeightVector {
    /// Abs-normalize a raw vector. A degenerate all-zero or non-finite
    /// vector falls back to the equal distribution instead of dividing
    /// by zero.
    pub fn normalized(raw: [f32; SCENE_COUNT]) -> Self {
        let mut w = raw.map(f32::abs);
        let sum: f32 = w.iter().sum();
        if !sum.is_finite() || sum <= f32::EPSILON {
            warn!(?raw, "degenerate weight vector, falling back to equal weights");
            return Self::equal();
        }
        for v in &mut w {
            *v /= sum;
        }
        Self(w)
    }

    pub fn equal() -> Self {
        Self([BASE_WEIGHT; SCENE_COUNT])
    }

    pub fn as_array(&self) -> &[f32; SCENE_COUNT] {
        &self.0
    }

    /// The single randomized step: one categorical draw over the slots.
    pub fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        match WeightedIndex::new(self.0) {
            Ok(dist) => dist.sample(rng),
            Err(_) => rng.random_range(0..SCENE_COUNT),
        }
    }
}

/// Derive the slot weights: equal base, shifted by the period bias row and
/// perturbed by a temperature-phased sinusoid per slot, then abs-normalized.
pub fn compute_weights(temperature_c: f32, bias: &[f32; SCENE_COUNT]) -> WeightVector {
    let mut raw = [0.0f32; SCENE_COUNT];
    for (i, slot) in raw.iter_mut().enumerate() {
        let phase = temperature_c / OSC_TEMP_SCALE + i as f32 * OSC_SLOT_PHASE;
        let oscillation = OSC_AMPLITUDE * phase.sin();
        *slot = BASE_WEIGHT + (bias[i] - BASE_WEIGHT) + oscillation;
    }
    WeightVector::normalized(raw)
}
