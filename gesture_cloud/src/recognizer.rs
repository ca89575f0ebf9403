use tracing::{debug, trace};

use super::config::RecognizerConfig;
use super::entities::*;
use super::match_collector::MatchCollector;
use super::matcher::bidirectional_distance;
use super::normalizer::normalize_with;
use super::templates::TemplateLibrary;
use super::{Error, Result};

// Classifies strokes against a template library. Holds no per-call state.
#[derive(Debug, Clone)]
pub struct Recognizer {
    library: TemplateLibrary,
    config: RecognizerConfig,
}

impl Default for Recognizer {
    fn default() -> Self {
        Recognizer::new()
    }
}

impl Recognizer {
    // Built-in templates, default tuning
    pub fn new() -> Recognizer {
        Recognizer {
            library: TemplateLibrary::builtin(),
            config: RecognizerConfig::default(),
        }
    }

    // Built-in templates, resampled to the configured point count
    pub fn with_config(config: RecognizerConfig) -> Result<Recognizer> {
        config.validate()?;
        Ok(Recognizer {
            library: TemplateLibrary::builtin_with_sample_points(config.sample_points),
            config: config,
        })
    }

    pub fn with_library(library: TemplateLibrary, config: RecognizerConfig) -> Result<Recognizer> {
        config.validate()?;
        if library.sample_points() != config.sample_points {
            return Err(Error::Config(format!(
                "library resampled to {} points, config expects {}",
                library.sample_points(),
                config.sample_points
            )));
        }
        Ok(Recognizer {
            library: library,
            config: config,
        })
    }

    pub fn add_template(&mut self, template: GestureTemplate) -> Result<()> {
        self.library.add_template(template)
    }

    pub fn get_templates(&self) -> &[GestureTemplate] {
        self.library.get_templates()
    }

    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    // Best match above the score threshold, or None
    pub fn recognize(&self, points: &[Point]) -> Option<RecognitionResult> {
        let candidate = self.candidate_cloud(points)?;

        let mut best: Option<(&GestureTemplate, f64)> = None;
        for template in self.library.get_templates() {
            let distance = bidirectional_distance(&candidate, &template.points);
            trace!(name = %template.name, distance, "template distance");
            // Strict comparison: the first-registered template keeps exact ties
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((template, distance)),
            }
        }

        let (template, distance) = best?;
        let score = self.config.score(distance);
        debug!(name = %template.name, distance, score, "best gesture match");
        if score < self.config.min_score {
            return None;
        }
        Some(RecognitionResult::from_template(template, score))
    }

    // Up to limit results above the threshold, best first, one per action
    pub fn recognize_ranked(&self, points: &[Point], limit: usize) -> Vec<RecognitionResult> {
        let mut res: Vec<RecognitionResult> = Vec::with_capacity(limit);
        if limit == 0 {
            return res;
        }
        let Some(candidate) = self.candidate_cloud(points) else {
            return res;
        };
        let mut collector = MatchCollector::new(&mut res, limit);
        for template in self.library.get_templates() {
            let score = self
                .config
                .score(bidirectional_distance(&candidate, &template.points));
            if score >= self.config.min_score {
                collector.file_match(RecognitionResult::from_template(template, score));
            }
        }
        res
    }

    // Normalized candidate, or None when the input cannot be classified
    fn candidate_cloud(&self, points: &[Point]) -> Option<Vec<Point>> {
        if points.len() < self.config.min_input_points {
            trace!(count = points.len(), "too few points to classify");
            return None;
        }
        if !points.iter().all(|p| p.is_finite()) {
            debug!("ignoring gesture with non-finite coordinates");
            return None;
        }
        Some(normalize_with(points, self.config.sample_points))
    }
}
