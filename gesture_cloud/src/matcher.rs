use super::entities::*;
use super::normalizer::dist;

// Greedy matching cost between two clouds: each point of a, in order, takes the
// nearest point of b that no earlier point has claimed. Not symmetric.
pub fn cloud_distance(a: &[Point], b: &[Point]) -> f64 {
    greedy_match(a, b, false)
}

// Cost against the template as drawn and against the template traversed backwards
pub fn bidirectional_distance(candidate: &[Point], template: &[Point]) -> f64 {
    let forward = greedy_match(candidate, template, false);
    let backward = greedy_match(candidate, template, true);
    f64::min(forward, backward)
}

pub fn reverse(points: &[Point]) -> Vec<Point> {
    points.iter().rev().copied().collect()
}

// Walks b back to front when reversed is set, which only changes who wins distance ties
fn greedy_match(a: &[Point], b: &[Point], reversed: bool) -> f64 {
    let n = b.len();
    let mut matched = vec![false; n];
    let mut sum = 0.0;
    for pa in a {
        let mut best: Option<(usize, f64)> = None;
        for k in 0..n {
            let j = if reversed { n - 1 - k } else { k };
            if matched[j] {
                continue;
            }
            let d = dist(pa, &b[j]);
            match best {
                Some((_, min_dist)) if d >= min_dist => {}
                _ => best = Some((j, d)),
            }
        }
        // b exhausted: clouds were of unequal size
        let Some((j, d)) = best else {
            break;
        };
        matched[j] = true;
        sum += d;
    }
    sum
}
