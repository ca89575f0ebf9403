extern crate bincode;
extern crate serde_derive;
extern crate wasm_bindgen;

mod builtin;
mod config;
mod entities;
mod match_collector;
mod matcher;
mod normalizer;
mod recognizer;
mod templates;

use wasm_bindgen::prelude::*;

pub use builtin::{builtin_templates, points_from_strokes};
pub use config::RecognizerConfig;
pub use entities::{Bounds, GestureTemplate, Point, RecognitionResult, TemplateSet};
pub use matcher::{bidirectional_distance, cloud_distance, reverse};
pub use normalizer::{
    centroid, get_bounds, normalize, normalize_with, path_length, resample, scale, translate_to,
    SAMPLE_POINTS,
};
pub use recognizer::Recognizer;
pub use templates::{validate_template, TemplateLibrary};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("template {0:?} has no points")]
    EmptyTemplate(String),

    #[error("template {0:?} has non-finite coordinates")]
    NonFiniteTemplate(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Built once per thread on first use; read-only afterwards
thread_local!(static RECOGNIZER: Recognizer = Recognizer::new());

// Classifies strokes given as lists of (x, y) pairs against the built-in templates
pub fn recognize_strokes<S: AsRef<[(f64, f64)]>>(strokes: &[S]) -> Option<RecognitionResult> {
    let points = points_from_strokes(strokes);
    RECOGNIZER.with(|recognizer| recognizer.recognize(&points))
}

// Same as recognize_strokes, but returns up to limit candidates, best first
pub fn recognize_strokes_ranked<S: AsRef<[(f64, f64)]>>(
    strokes: &[S],
    limit: usize,
) -> Vec<RecognitionResult> {
    let points = points_from_strokes(strokes);
    RECOGNIZER.with(|recognizer| recognizer.recognize_ranked(&points, limit))
}

// Drops malformed [x, y] entries instead of failing the whole gesture
fn strokes_from_js(input: Vec<Vec<Vec<f64>>>) -> Vec<Vec<(f64, f64)>> {
    input
        .iter()
        .map(|stroke| {
            stroke
                .iter()
                .filter(|pt| pt.len() >= 2)
                .map(|pt| (pt[0], pt[1]))
                .collect::<Vec<(f64, f64)>>()
        })
        .filter(|stroke| !stroke.is_empty())
        .collect()
}

#[wasm_bindgen]
#[allow(deprecated)]
pub fn recognize(input: &JsValue) -> String {
    // Input is vector of strokes, each a vector of [x, y] pairs - how JS hands them over
    let input: Vec<Vec<Vec<f64>>> = match input.into_serde() {
        Ok(input) => input,
        Err(_) => return "null".to_string(),
    };
    let strokes = strokes_from_js(input);
    let res = recognize_strokes(&strokes);
    serde_json::to_string(&res).unwrap_or_else(|_| "null".to_string())
}

#[wasm_bindgen]
#[allow(deprecated)]
pub fn recognize_ranked(input: &JsValue, limit: usize) -> String {
    let input: Vec<Vec<Vec<f64>>> = match input.into_serde() {
        Ok(input) => input,
        Err(_) => return "[]".to_string(),
    };
    let strokes = strokes_from_js(input);
    let res = recognize_strokes_ranked(&strokes, limit);
    serde_json::to_string(&res).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognize_strokes() {
        let res = recognize_strokes(&[vec![
            (50.0, 100.0),
            (75.0, 60.0),
            (100.0, 140.0),
            (125.0, 60.0),
            (150.0, 100.0),
        ]])
        .unwrap();
        assert_eq!(res.name, "zigzag");
        assert_eq!(res.action, "rewrite");
        assert!(recognize_strokes::<Vec<(f64, f64)>>(&[]).is_none());
    }

    #[test]
    fn test_recognize_strokes_multi() {
        let res = recognize_strokes(&[
            vec![(50.0, 50.0), (100.0, 100.0), (150.0, 150.0)],
            vec![(150.0, 50.0), (100.0, 100.0), (50.0, 150.0)],
        ])
        .unwrap();
        assert_eq!(res.action, "delete");
        let ranked = recognize_strokes_ranked(
            &[
                vec![(50.0, 50.0), (100.0, 100.0), (150.0, 150.0)],
                vec![(150.0, 50.0), (100.0, 100.0), (50.0, 150.0)],
            ],
            3,
        );
        assert_eq!(ranked[0], res);
    }

    #[test]
    fn test_strokes_from_js() {
        let input = vec![
            vec![vec![1.0, 2.0], vec![3.0], vec![4.0, 5.0, 6.0]],
            vec![vec![]],
        ];
        assert_eq!(strokes_from_js(input), vec![vec![(1.0, 2.0), (4.0, 5.0)]]);
    }

    #[test]
    fn test_result_json() {
        let res = recognize_strokes(&[vec![
            (50.0, 100.0),
            (75.0, 60.0),
            (100.0, 140.0),
            (125.0, 60.0),
            (150.0, 100.0),
        ]]);
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["action"], "rewrite");
        assert_eq!(json["icon"], "✎");
        let none: Option<RecognitionResult> = None;
        assert_eq!(serde_json::to_string(&none).unwrap(), "null");
    }
}
