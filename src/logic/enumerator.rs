use crate::token::Token;

/// Enumerates every candidate route interior: each ordered sequence of
/// distinct tokens drawn from a non-empty subset of the universe.
///
/// Enumeration order is fixed: subsets by ascending size, lexicographic in
/// source order, then every permutation of a subset in natural generation
/// order. The order only matters for tie-breaking in the best-route search.
pub struct PathEnumerator {
    universe: Vec<Token>,
}

impl PathEnumerator {
    pub fn new(universe: Vec<Token>) -> Self {
        PathEnumerator { universe }
    }

    /// Number of candidates without generating them: sum over k of
    /// `N! / (N - k)!`, the ordered selections of each size.
    pub fn candidate_count(&self) -> usize {
        let n = self.universe.len();
        let mut total = 0usize;
        let mut ordered_selections = 1usize;
        for k in 1..=n {
            ordered_selections *= n - k + 1;
            total += ordered_selections;
        }
        total
    }

    /// All candidate interiors in enumeration order.
    pub fn interiors(&self) -> Vec<Vec<Token>> {
        let mut results = Vec::with_capacity(self.candidate_count());
        let mut subset = Vec::new();
        for size in 1..=self.universe.len() {
            self.collect_subsets(0, size, &mut subset, &mut results);
        }
        results
    }

    fn collect_subsets(&self, start: usize, size: usize, subset: &mut Vec<Token>, out: &mut Vec<Vec<Token>>) {
        if subset.len() == size {
            let mut used = vec![false; subset.len()];
            let mut permutation = Vec::with_capacity(subset.len());
            Self::collect_permutations(subset, &mut used, &mut permutation, out);
            return;
        }
        for index in start..self.universe.len() {
            subset.push(self.universe[index].clone());
            self.collect_subsets(index + 1, size, subset, out);
            subset.pop();
        }
    }

    fn collect_permutations(subset: &[Token], used: &mut [bool], permutation: &mut Vec<Token>, out: &mut Vec<Vec<Token>>) {
        if permutation.len() == subset.len() {
            out.push(permutation.clone());
            return;
        }
        for index in 0..subset.len() {
            if used[index] {
                continue;
            }
            used[index] = true;
            permutation.push(subset[index].clone());
            Self::collect_permutations(subset, used, permutation, out);
            permutation.pop();
            used[index] = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn universe(symbols: &[&str]) -> Vec<Token> {
        symbols.iter().map(|s| Token::new(*s)).collect()
    }

    fn symbols(interior: &[Token]) -> Vec<&str> {
        interior.iter().map(|t| t.symbol()).collect()
    }

    #[test]
    fn test_cardinality() {
        // sum over k of N!/(N-k)!
        assert_eq!(PathEnumerator::new(universe(&["a"])).interiors().len(), 1);
        assert_eq!(PathEnumerator::new(universe(&["a", "b", "c"])).interiors().len(), 15);
        assert_eq!(PathEnumerator::new(universe(&["a", "b", "c", "d"])).interiors().len(), 64);
    }

    #[test]
    fn test_candidate_count_matches_generation() {
        for n in 0..=5 {
            let symbols: Vec<String> = (0..n).map(|i| format!("token{i}")).collect();
            let tokens: Vec<Token> = symbols.iter().map(|s| Token::new(s.as_str())).collect();
            let enumerator = PathEnumerator::new(tokens);

            assert_eq!(enumerator.interiors().len(), enumerator.candidate_count());
        }
    }

    #[test]
    fn test_empty_universe_yields_no_candidates() {
        let enumerator = PathEnumerator::new(vec![]);

        assert_eq!(enumerator.candidate_count(), 0);
        assert!(enumerator.interiors().is_empty());
    }

    #[test]
    fn test_enumeration_order() {
        let enumerator = PathEnumerator::new(universe(&["a", "b", "c"]));
        let interiors = enumerator.interiors();

        // Singletons first, in source order
        assert_eq!(symbols(&interiors[0]), vec!["a"]);
        assert_eq!(symbols(&interiors[1]), vec!["b"]);
        assert_eq!(symbols(&interiors[2]), vec!["c"]);
        // Pairs: subset {a,b} with both orderings before subset {a,c}
        assert_eq!(symbols(&interiors[3]), vec!["a", "b"]);
        assert_eq!(symbols(&interiors[4]), vec!["b", "a"]);
        assert_eq!(symbols(&interiors[5]), vec!["a", "c"]);
        assert_eq!(symbols(&interiors[6]), vec!["c", "a"]);
        assert_eq!(symbols(&interiors[7]), vec!["b", "c"]);
        assert_eq!(symbols(&interiors[8]), vec!["c", "b"]);
        // Full-size subset last, permutations in generation order
        assert_eq!(symbols(&interiors[9]), vec!["a", "b", "c"]);
        assert_eq!(symbols(&interiors[10]), vec!["a", "c", "b"]);
        assert_eq!(symbols(&interiors[14]), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_interiors_have_distinct_tokens() {
        let enumerator = PathEnumerator::new(universe(&["a", "b", "c", "d"]));

        for interior in enumerator.interiors() {
            let mut seen = std::collections::HashSet::new();
            for token in &interior {
                assert!(seen.insert(token.clone()), "duplicate token in {interior:?}");
            }
        }
    }
}
