use tracing::warn;

use super::entities::*;

// Raw description of one built-in template: one coordinate list per stroke
struct Seed {
    name: &'static str,
    action: &'static str,
    description: &'static str,
    icon: &'static str,
    strokes: &'static [&'static [(f64, f64)]],
}

// Order matters: on an exact distance tie the earlier template wins.
// Coordinates are in a nominal 200x200 canvas, y pointing down.
const SEEDS: &[Seed] = &[
    // Four arc orientations all mean "swap"
    Seed {
        name: "arc-up",
        action: "swap",
        description: "Swap with the neighbouring item",
        icon: "⇄",
        strokes: &[&[(50.0, 120.0), (70.0, 80.0), (100.0, 65.0), (130.0, 80.0), (150.0, 120.0)]],
    },
    Seed {
        name: "arc-down",
        action: "swap",
        description: "Swap with the neighbouring item",
        icon: "⇄",
        strokes: &[&[(50.0, 80.0), (70.0, 120.0), (100.0, 135.0), (130.0, 120.0), (150.0, 80.0)]],
    },
    Seed {
        name: "arc-left",
        action: "swap",
        description: "Swap with the neighbouring item",
        icon: "⇅",
        strokes: &[&[(120.0, 50.0), (80.0, 70.0), (65.0, 100.0), (80.0, 130.0), (120.0, 150.0)]],
    },
    Seed {
        name: "arc-right",
        action: "swap",
        description: "Swap with the neighbouring item",
        icon: "⇅",
        strokes: &[&[(80.0, 50.0), (120.0, 70.0), (135.0, 100.0), (120.0, 130.0), (80.0, 150.0)]],
    },
    Seed {
        name: "slash-delete",
        action: "delete",
        description: "Delete the item under the stroke",
        icon: "🗑",
        strokes: &[&[(50.0, 150.0), (150.0, 50.0)]],
    },
    Seed {
        name: "x-delete",
        action: "delete",
        description: "Delete the item under the cross",
        icon: "🗑",
        strokes: &[&[(50.0, 50.0), (150.0, 150.0)], &[(150.0, 50.0), (50.0, 150.0)]],
    },
    Seed {
        name: "plus",
        action: "add",
        description: "Insert a new item here",
        icon: "➕",
        strokes: &[&[(100.0, 50.0), (100.0, 150.0)], &[(50.0, 100.0), (150.0, 100.0)]],
    },
    Seed {
        name: "double-line",
        action: "duplicate",
        description: "Duplicate the item",
        icon: "⧉",
        strokes: &[&[(50.0, 80.0), (150.0, 80.0)], &[(50.0, 120.0), (150.0, 120.0)]],
    },
    Seed {
        name: "chevron-right",
        action: "indent",
        description: "Indent one level",
        icon: "⇥",
        strokes: &[&[(60.0, 50.0), (140.0, 100.0), (60.0, 150.0)]],
    },
    Seed {
        name: "chevron-left",
        action: "outdent",
        description: "Outdent one level",
        icon: "⇤",
        strokes: &[&[(140.0, 50.0), (60.0, 100.0), (140.0, 150.0)]],
    },
    Seed {
        name: "hook-left",
        action: "undo",
        description: "Undo the last edit",
        icon: "↶",
        strokes: &[&[(150.0, 120.0), (90.0, 120.0), (55.0, 100.0), (55.0, 70.0), (85.0, 55.0)]],
    },
    Seed {
        name: "hook-right",
        action: "redo",
        description: "Redo the last undone edit",
        icon: "↷",
        strokes: &[&[(50.0, 120.0), (110.0, 120.0), (145.0, 100.0), (145.0, 70.0), (115.0, 55.0)]],
    },
    Seed {
        name: "caret-up",
        action: "move-up",
        description: "Move the item up",
        icon: "▲",
        strokes: &[&[(50.0, 150.0), (100.0, 50.0), (150.0, 150.0)]],
    },
    Seed {
        name: "caret-down",
        action: "move-down",
        description: "Move the item down",
        icon: "▼",
        strokes: &[&[(50.0, 50.0), (100.0, 150.0), (150.0, 50.0)]],
    },
    Seed {
        name: "circle",
        action: "select",
        description: "Select the enclosed items",
        icon: "◯",
        strokes: &[&[
            (100.0, 50.0),
            (125.0, 56.7),
            (143.3, 75.0),
            (150.0, 100.0),
            (143.3, 125.0),
            (125.0, 143.3),
            (100.0, 150.0),
            (75.0, 143.3),
            (56.7, 125.0),
            (50.0, 100.0),
            (56.7, 75.0),
            (75.0, 56.7),
            (100.0, 50.0),
        ]],
    },
    Seed {
        name: "rectangle",
        action: "create-block",
        description: "Create a block from the enclosed area",
        icon: "▭",
        strokes: &[&[(50.0, 60.0), (150.0, 60.0), (150.0, 140.0), (50.0, 140.0), (50.0, 60.0)]],
    },
    Seed {
        name: "checkmark",
        action: "complete",
        description: "Mark the item as done",
        icon: "✓",
        strokes: &[&[(50.0, 100.0), (80.0, 140.0), (150.0, 50.0)]],
    },
    Seed {
        name: "zigzag",
        action: "rewrite",
        description: "Rewrite the item",
        icon: "✎",
        strokes: &[&[(50.0, 100.0), (75.0, 60.0), (100.0, 140.0), (125.0, 60.0), (150.0, 100.0)]],
    },
    Seed {
        name: "triangle",
        action: "summarize",
        description: "Summarize the item",
        icon: "△",
        strokes: &[&[(50.0, 140.0), (100.0, 50.0), (150.0, 140.0), (50.0, 140.0)]],
    },
    Seed {
        name: "diamond",
        action: "expand",
        description: "Expand the item with more detail",
        icon: "◇",
        strokes: &[&[(100.0, 50.0), (150.0, 100.0), (100.0, 150.0), (50.0, 100.0), (100.0, 50.0)]],
    },
    Seed {
        name: "infinity",
        action: "link",
        description: "Link the item to another",
        icon: "∞",
        strokes: &[&[
            (150.0, 100.0),
            (140.3, 115.4),
            (123.6, 116.7),
            (110.3, 109.5),
            (100.0, 100.0),
            (89.7, 90.5),
            (76.4, 83.3),
            (59.7, 84.6),
            (50.0, 100.0),
            (59.7, 115.4),
            (76.4, 116.7),
            (89.7, 109.5),
            (100.0, 100.0),
            (110.3, 90.5),
            (123.6, 83.3),
            (140.3, 84.6),
            (150.0, 100.0),
        ]],
    },
    Seed {
        name: "question-mark",
        action: "ask-ai",
        description: "Ask the assistant about the item",
        icon: "?",
        strokes: &[
            &[
                (70.0, 70.0),
                (80.0, 50.0),
                (110.0, 45.0),
                (130.0, 60.0),
                (125.0, 85.0),
                (100.0, 100.0),
                (100.0, 125.0),
            ],
            &[(100.0, 146.0), (100.0, 150.0)],
        ],
    },
    Seed {
        name: "star",
        action: "favorite",
        description: "Mark the item as a favourite",
        icon: "★",
        strokes: &[&[
            (100.0, 50.0),
            (129.4, 140.5),
            (52.4, 84.5),
            (147.6, 84.5),
            (70.6, 140.5),
            (100.0, 50.0),
        ]],
    },
    Seed {
        name: "horizontal-line",
        action: "strikethrough",
        description: "Strike the text through",
        icon: "S̶",
        strokes: &[&[(50.0, 100.0), (150.0, 100.0)]],
    },
    Seed {
        name: "corner",
        action: "toggle-bullet",
        description: "Toggle the bullet marker",
        icon: "•",
        strokes: &[&[(60.0, 50.0), (60.0, 150.0), (140.0, 150.0)]],
    },
    Seed {
        name: "fork-down",
        action: "merge",
        description: "Merge with the item below",
        icon: "⤓",
        strokes: &[
            &[(50.0, 50.0), (100.0, 100.0), (100.0, 150.0)],
            &[(150.0, 50.0), (100.0, 100.0)],
        ],
    },
    Seed {
        name: "fork-up",
        action: "split",
        description: "Split the item in two",
        icon: "⤒",
        strokes: &[
            &[(100.0, 50.0), (100.0, 100.0), (50.0, 150.0)],
            &[(100.0, 100.0), (150.0, 150.0)],
        ],
    },
    Seed {
        name: "wave",
        action: "highlight",
        description: "Highlight the text",
        icon: "🖍",
        strokes: &[&[
            (50.0, 100.0),
            (62.5, 90.0),
            (75.0, 100.0),
            (87.5, 110.0),
            (100.0, 100.0),
            (112.5, 90.0),
            (125.0, 100.0),
            (137.5, 110.0),
            (150.0, 100.0),
        ]],
    },
    Seed {
        name: "brace",
        action: "code-block",
        description: "Turn the item into a code block",
        icon: "{}",
        strokes: &[&[
            (120.0, 50.0),
            (100.0, 55.0),
            (100.0, 90.0),
            (85.0, 100.0),
            (100.0, 110.0),
            (100.0, 145.0),
            (120.0, 150.0),
        ]],
    },
    Seed {
        name: "arrow-right",
        action: "continue",
        description: "Continue writing from here",
        icon: "→",
        strokes: &[
            &[(50.0, 100.0), (150.0, 100.0)],
            &[(125.0, 75.0), (150.0, 100.0), (125.0, 125.0)],
        ],
    },
    Seed {
        name: "exclamation",
        action: "warning",
        description: "Flag the item with a warning",
        icon: "!",
        strokes: &[&[(100.0, 50.0), (100.0, 125.0)], &[(100.0, 145.0), (100.0, 150.0)]],
    },
];

// Stroke ids are i32; an index past i32::MAX has no id
fn stroke_index(ix: usize) -> Option<i32> {
    i32::try_from(ix).ok()
}

// Flattens strokes into one sequence. A lone stroke carries no stroke id.
// Strokes beyond the last representable id are dropped.
pub fn points_from_strokes<S: AsRef<[(f64, f64)]>>(strokes: &[S]) -> Vec<Point> {
    let multi = strokes.len() > 1;
    let mut res: Vec<Point> = Vec::new();
    for (ix, stroke) in strokes.iter().enumerate() {
        let stroke_id = if multi {
            let Some(id) = stroke_index(ix) else {
                warn!(kept = ix, total = strokes.len(), "too many strokes, dropping the rest");
                break;
            };
            Some(id)
        } else {
            None
        };
        for &(x, y) in stroke.as_ref() {
            res.push(Point {
                x: x,
                y: y,
                stroke_id: stroke_id,
            });
        }
    }
    res
}

// Built-in templates with raw (un-normalized) points, in registration order
pub fn builtin_templates() -> Vec<GestureTemplate> {
    SEEDS
        .iter()
        .map(|seed| {
            GestureTemplate::new(seed.name, seed.action, points_from_strokes(seed.strokes))
                .describe(seed.description)
                .with_icon(seed.icon)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_table() {
        let templates = builtin_templates();
        assert!(templates.len() >= 25);
        let names: HashSet<&str> = templates.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names.len(), templates.len(), "template names must be unique");
        for t in &templates {
            assert!(t.points.len() >= 2, "{} has too few points", t.name);
        }
    }

    #[test]
    fn test_every_action_covered() {
        let actions: HashSet<String> = builtin_templates().into_iter().map(|t| t.action).collect();
        for action in [
            "swap", "delete", "add", "duplicate", "indent", "outdent", "undo", "redo",
            "move-up", "move-down", "select", "create-block", "complete", "rewrite",
            "summarize", "expand", "link", "ask-ai", "favorite", "strikethrough",
            "toggle-bullet", "merge", "split", "highlight", "code-block", "continue",
            "warning",
        ] {
            assert!(actions.contains(action), "missing action {}", action);
        }
    }

    #[test]
    fn test_swap_aliases() {
        let swaps = builtin_templates()
            .into_iter()
            .filter(|t| t.action == "swap")
            .count();
        assert_eq!(swaps, 4);
    }

    #[test]
    fn test_points_from_strokes() {
        let single = points_from_strokes(&[vec![(0.0, 0.0), (1.0, 1.0)]]);
        assert!(single.iter().all(|p| p.stroke_id.is_none()));

        let x = builtin_templates()
            .into_iter()
            .find(|t| t.name == "x-delete")
            .unwrap();
        assert_eq!(
            x.points,
            vec![
                Point::with_stroke(50.0, 50.0, 0),
                Point::with_stroke(150.0, 150.0, 0),
                Point::with_stroke(150.0, 50.0, 1),
                Point::with_stroke(50.0, 150.0, 1),
            ]
        );
        assert!(points_from_strokes::<Vec<(f64, f64)>>(&[]).is_empty());
    }

    #[test]
    fn test_stroke_index_bounds() {
        assert_eq!(stroke_index(0), Some(0));
        assert_eq!(stroke_index(i32::MAX as usize), Some(i32::MAX));
        assert_eq!(stroke_index(i32::MAX as usize + 1), None);
        assert_eq!(stroke_index(usize::MAX), None);
    }

    #[test]
    fn test_points_from_strokes_ids_follow_order() {
        let strokes = vec![vec![(0.0, 0.0)], vec![(1.0, 1.0), (2.0, 2.0)], vec![(3.0, 3.0)]];
        let ids: Vec<Option<i32>> = points_from_strokes(&strokes).iter().map(|p| p.stroke_id).collect();
        assert_eq!(ids, [Some(0), Some(1), Some(1), Some(2)]);
    }
}
