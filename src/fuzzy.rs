use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Lower-case and drop all whitespace.
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Matches a query against full names, ignoring case and whitespace.
///
/// Every char of the query must appear in the candidate in order. Build one
/// and reuse it across candidates.
pub struct StarMatcher {
    matcher: SkimMatcherV2,
}

impl Default for StarMatcher {
    fn default() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }
}

impl StarMatcher {
    /// `query` must already be normalized. An empty query matches everything.
    pub fn matches(&self, query: &str, candidate: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.matcher
            .fuzzy_match(&normalize(candidate), query)
            .is_some()
    }
}

/// One-off match of a raw query against a candidate.
#[cfg(test)]
pub fn matches(query: &str, candidate: &str) -> bool {
    StarMatcher::default().matches(&normalize(query), candidate)
}
