use serde_derive::{Deserialize, Serialize};

// One captured point of a gesture
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    // Groups points drawn in one pen-down motion; None is one implicit stroke
    #[serde(default)]
    pub stroke_id: Option<i32>,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point {
            x: x,
            y: y,
            stroke_id: None,
        }
    }

    pub fn with_stroke(x: f64, y: f64, stroke_id: i32) -> Point {
        Point {
            x: x,
            y: y,
            stroke_id: Some(stroke_id),
        }
    }

    // Two points are path-adjacent only if they share a stroke id (both absent counts as shared)
    pub fn same_stroke(&self, other: &Point) -> bool {
        self.stroke_id == other.stroke_id
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// Axis-aligned bounding box of a point sequence; derived, never stored
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

// A named reference shape mapped to a semantic action.
// Once registered in a library, points are the normalized cloud.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GestureTemplate {
    pub name: String,
    pub points: Vec<Point>,
    pub action: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl GestureTemplate {
    pub fn new(name: &str, action: &str, points: Vec<Point>) -> GestureTemplate {
        GestureTemplate {
            name: name.to_string(),
            points: points,
            action: action.to_string(),
            description: String::new(),
            icon: None,
        }
    }

    pub fn describe(mut self, description: &str) -> GestureTemplate {
        self.description = description.to_string();
        self
    }

    pub fn with_icon(mut self, icon: &str) -> GestureTemplate {
        self.icon = Some(icon.to_string());
        self
    }
}

// A set of raw (not yet normalized) templates, as stored in JSON or bincode files
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TemplateSet {
    pub templates: Vec<GestureTemplate>,
}

// Outcome of one recognition; score is in [min_score, 1]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RecognitionResult {
    pub name: String,
    pub score: f64,
    pub action: String,
    pub description: String,
    pub icon: Option<String>,
}

impl RecognitionResult {
    pub fn from_template(template: &GestureTemplate, score: f64) -> RecognitionResult {
        RecognitionResult {
            name: template.name.clone(),
            score: score,
            action: template.action.clone(),
            description: template.description.clone(),
            icon: template.icon.clone(),
        }
    }
}
