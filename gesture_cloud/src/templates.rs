use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::builtin::builtin_templates;
use super::entities::*;
use super::normalizer::{normalize_with, SAMPLE_POINTS};
use super::{Error, Result};

// A template can be registered only if it has points and all of them are finite
pub fn validate_template(template: &GestureTemplate) -> Result<()> {
    if template.points.is_empty() {
        return Err(Error::EmptyTemplate(template.name.clone()));
    }
    if !template.points.iter().all(|p| p.is_finite()) {
        return Err(Error::NonFiniteTemplate(template.name.clone()));
    }
    Ok(())
}

impl TemplateSet {
    // Drops entries a library would reject; returns how many were dropped
    pub fn retain_valid(&mut self) -> usize {
        let before = self.templates.len();
        self.templates.retain(|template| match validate_template(template) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "dropping template");
                false
            }
        });
        before - self.templates.len()
    }
}

// Ordered collection of normalized templates. Registration order is the tie-break order.
#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    templates: Vec<GestureTemplate>,
    sample_points: usize,
}

impl Default for TemplateLibrary {
    fn default() -> Self {
        TemplateLibrary::new()
    }
}

impl TemplateLibrary {
    // Empty library resampling to the standard point count
    pub fn new() -> TemplateLibrary {
        TemplateLibrary::with_sample_points(SAMPLE_POINTS)
    }

    pub fn with_sample_points(sample_points: usize) -> TemplateLibrary {
        TemplateLibrary {
            templates: Vec::new(),
            sample_points: sample_points,
        }
    }

    // Library seeded with the built-in editing gestures
    pub fn builtin() -> TemplateLibrary {
        TemplateLibrary::builtin_with_sample_points(SAMPLE_POINTS)
    }

    pub fn builtin_with_sample_points(sample_points: usize) -> TemplateLibrary {
        let mut library = TemplateLibrary::with_sample_points(sample_points);
        for template in builtin_templates() {
            library.register(template);
        }
        library
    }

    // Normalizes the template's points once and appends it
    pub fn add_template(&mut self, template: GestureTemplate) -> Result<()> {
        validate_template(&template)?;
        self.register(template);
        Ok(())
    }

    fn register(&mut self, mut template: GestureTemplate) {
        template.points = normalize_with(&template.points, self.sample_points);
        debug!(name = %template.name, action = %template.action, "registered gesture template");
        self.templates.push(template);
    }

    pub fn get_templates(&self) -> &[GestureTemplate] {
        &self.templates
    }

    pub fn sample_points(&self) -> usize {
        self.sample_points
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    // Builds a library from raw templates. Invalid entries are skipped with a warning.
    pub fn from_template_set(set: TemplateSet, sample_points: usize) -> TemplateLibrary {
        let mut library = TemplateLibrary::with_sample_points(sample_points);
        let mut rejected = 0;
        for template in set.templates {
            if let Err(err) = library.add_template(template) {
                warn!(error = %err, "skipping template");
                rejected += 1;
            }
        }
        if rejected > 0 {
            warn!(rejected, kept = library.len(), "template set contained invalid entries");
        }
        library
    }

    pub fn from_json_str(json: &str) -> Result<TemplateLibrary> {
        let set: TemplateSet = serde_json::from_str(json)?;
        Ok(TemplateLibrary::from_template_set(set, SAMPLE_POINTS))
    }

    pub fn from_bincode_bytes(bytes: &[u8]) -> Result<TemplateLibrary> {
        let set: TemplateSet = bincode::deserialize(bytes)?;
        Ok(TemplateLibrary::from_template_set(set, SAMPLE_POINTS))
    }

    // Loads a template set file: `.bin` is bincode, anything else is JSON
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<TemplateLibrary> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let is_bincode = path.extension().map_or(false, |ext| ext == "bin");
        if is_bincode {
            TemplateLibrary::from_bincode_bytes(&bytes)
        } else {
            let set: TemplateSet = serde_json::from_slice(&bytes)?;
            Ok(TemplateLibrary::from_template_set(set, SAMPLE_POINTS))
        }
    }
}
