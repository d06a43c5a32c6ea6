//! Optional tie-breaking noise.

use rand::Rng;

/// Adds uniform noise in `[0, amplitude)` to a score.
///
/// Splits with exactly equal scores are otherwise ranked by enumeration
/// order; jitter makes the winner among them random.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Jitter {
    amplitude: f64,
}

impl Jitter {
    /// Noise amplitude used when jitter is switched on.
    pub const DEFAULT_AMPLITUDE: f64 = 0.01;

    pub fn new(amplitude: f64) -> Self {
        Self { amplitude }
    }

    /// No noise; scores pass through unchanged.
    pub fn disabled() -> Self {
        Self { amplitude: 0.0 }
    }

    /// `DEFAULT_AMPLITUDE` when `enabled`, otherwise disabled.
    pub fn from_flag(enabled: bool) -> Self {
        if enabled {
            Self::new(Self::DEFAULT_AMPLITUDE)
        } else {
            Self::disabled()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.amplitude > 0.0
    }

    /// Returns `score` plus fresh noise. Draws nothing when disabled.
    pub fn apply<R: Rng + ?Sized>(&self, score: f64, rng: &mut R) -> f64 {
        if self.is_enabled() {
            score + rng.random::<f64>() * self.amplitude
        } else {
            score
        }
    }
}
