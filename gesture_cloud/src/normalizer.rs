use super::entities::*;

// Number of points every template and candidate is resampled to
pub const SAMPLE_POINTS: usize = 32;

// Gets distance between two points
pub fn dist(a: &Point, b: &Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

// Total length of the path, counting only segments within one stroke
pub fn path_length(points: &[Point]) -> f64 {
    points
        .windows(2)
        .filter(|pair| pair[0].same_stroke(&pair[1]))
        .map(|pair| dist(&pair[0], &pair[1]))
        .sum()
}

// Bounding box of the points; all zeros for an empty sequence
pub fn get_bounds(points: &[Point]) -> Bounds {
    if points.is_empty() {
        return Bounds::default();
    }
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for p in points {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    Bounds {
        min_x: min_x,
        max_x: max_x,
        min_y: min_y,
        max_y: max_y,
        center_x: (min_x + max_x) / 2.0,
        center_y: (min_y + max_y) / 2.0,
        width: max_x - min_x,
        height: max_y - min_y,
    }
}

// Unweighted arithmetic mean of the points
pub fn centroid(points: &[Point]) -> (f64, f64) {
    if points.is_empty() {
        return (0.0, 0.0);
    }
    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    let count = points.len() as f64;
    (sum_x / count, sum_y / count)
}

// Redistributes the path into exactly n points, evenly spaced by arc length.
// Jumps between strokes contribute no length and are never interpolated across.
pub fn resample(points: &[Point], n: usize) -> Vec<Point> {
    if points.is_empty() || n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![points[0]];
    }
    let interval = path_length(points) / (n - 1) as f64;
    // Zero-length path (a tap): every output point sits on the first input point
    if !(interval > 0.0) || !interval.is_finite() {
        return vec![points[0]; n];
    }

    // Interpolated points are spliced into this scratch copy so the scan continues from them
    let mut scratch: Vec<Point> = points.to_vec();
    let mut res: Vec<Point> = Vec::with_capacity(n);
    res.push(scratch[0]);
    let mut acc = 0.0;
    let mut i = 1;
    while i < scratch.len() && res.len() < n {
        let prev = scratch[i - 1];
        let cur = scratch[i];
        if prev.same_stroke(&cur) {
            let d = dist(&prev, &cur);
            if acc + d >= interval {
                // acc < interval always holds here, so d > 0 and t is in (0, 1]
                let t = (interval - acc) / d;
                let q = Point {
                    x: prev.x + t * (cur.x - prev.x),
                    y: prev.y + t * (cur.y - prev.y),
                    stroke_id: cur.stroke_id,
                };
                res.push(q);
                scratch.insert(i, q);
                acc = 0.0;
            } else {
                acc += d;
            }
        }
        i += 1;
    }

    // Float accumulation can leave the final point short; pad with the path's end
    let last = points[points.len() - 1];
    while res.len() < n {
        res.push(last);
    }
    res
}

// Scales uniformly so the larger bounding-box side becomes 1, anchored at the min corner.
// Degenerate (single-location) input is returned unchanged.
pub fn scale(points: &[Point]) -> Vec<Point> {
    let bounds = get_bounds(points);
    let size = bounds.width.max(bounds.height);
    if !(size > 0.0) {
        return points.to_vec();
    }
    points
        .iter()
        .map(|p| Point {
            x: (p.x - bounds.min_x) / size,
            y: (p.y - bounds.min_y) / size,
            stroke_id: p.stroke_id,
        })
        .collect()
}

// Shifts the points so their centroid lands on target
pub fn translate_to(points: &[Point], target: (f64, f64)) -> Vec<Point> {
    let (cx, cy) = centroid(points);
    let dx = target.0 - cx;
    let dy = target.1 - cy;
    points
        .iter()
        .map(|p| Point {
            x: p.x + dx,
            y: p.y + dy,
            stroke_id: p.stroke_id,
        })
        .collect()
}

// Canonical form shared by templates and candidates
pub fn normalize(points: &[Point]) -> Vec<Point> {
    normalize_with(points, SAMPLE_POINTS)
}

pub fn normalize_with(points: &[Point], n: usize) -> Vec<Point> {
    translate_to(&scale(&resample(points, n)), (0.0, 0.0))
}
