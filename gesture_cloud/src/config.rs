use serde_derive::{Deserialize, Serialize};

use super::normalizer::SAMPLE_POINTS;
use super::{Error, Result};

// Divisor turning a cloud distance into a score; lower is stricter
pub const SCORE_DIVISOR: f64 = 3.0;
// Results scoring below this are discarded
pub const MIN_SCORE: f64 = 0.3;
// Inputs with fewer points are not classified at all
pub const MIN_INPUT_POINTS: usize = 5;

// Recognizer tuning knobs. Defaults are the values the built-in templates were tuned against.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct RecognizerConfig {
    pub sample_points: usize,
    pub score_divisor: f64,
    pub min_score: f64,
    pub min_input_points: usize,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        RecognizerConfig {
            sample_points: SAMPLE_POINTS,
            score_divisor: SCORE_DIVISOR,
            min_score: MIN_SCORE,
            min_input_points: MIN_INPUT_POINTS,
        }
    }
}

impl RecognizerConfig {
    pub fn from_json_str(json: &str) -> Result<RecognizerConfig> {
        let config: RecognizerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_points < 2 {
            return Err(Error::Config(format!(
                "sample_points must be at least 2, got {}",
                self.sample_points
            )));
        }
        if !self.score_divisor.is_finite() || self.score_divisor <= 0.0 {
            return Err(Error::Config(format!(
                "score_divisor must be positive, got {}",
                self.score_divisor
            )));
        }
        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(Error::Config(format!(
                "min_score must be within [0, 1], got {}",
                self.min_score
            )));
        }
        Ok(())
    }

    // Maps a cloud distance onto [0, 1]
    pub fn score(&self, distance: f64) -> f64 {
        f64::max(0.0, 1.0 - distance / self.score_divisor)
    }
}
