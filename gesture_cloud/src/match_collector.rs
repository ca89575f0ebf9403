use super::entities::RecognitionResult;

// Keeps the best results, sorted by score (largest first), at most one per action
pub struct MatchCollector<'a> {
    max: usize,
    matches: &'a mut Vec<RecognitionResult>,
}

impl<'a> MatchCollector<'a> {
    pub fn new(matches: &'a mut Vec<RecognitionResult>, max: usize) -> MatchCollector<'a> {
        assert!(max > 0, "collector needs room for at least one result");
        assert!(matches.is_empty(), "collector expects an empty result vector");
        MatchCollector {
            max: max,
            matches: matches,
        }
    }

    fn displace_same_action(&mut self, mc: &RecognitionResult) -> bool {
        let Some(ix) = self.matches.iter().position(|x| x.action == mc.action) else {
            // First result for this action
            return false;
        };
        // Earlier alias keeps its slot unless strictly beaten
        if mc.score <= self.matches[ix].score {
            return true;
        }
        self.matches.remove(ix);
        false
    }

    pub fn file_match(&mut self, mc: RecognitionResult) {
        // Full list: the candidate must beat the current tail
        if self.matches.len() == self.max {
            if let Some(last) = self.matches.last() {
                if mc.score <= last.score {
                    return;
                }
            }
        }
        if self.displace_same_action(&mc) {
            return;
        }
        // Insert after every equal-or-better score so earlier filings win ties
        let ix = self.matches.iter().position(|x| x.score < mc.score);
        match ix {
            Some(ix) => self.matches.insert(ix, mc),
            None => self.matches.push(mc),
        }
        if self.matches.len() > self.max {
            self.matches.pop();
        }
    }
}
