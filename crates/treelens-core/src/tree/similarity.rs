/// Minimum score a fuzzy text key needs to select a child.
pub const SIMILARITY_THRESHOLD: f64 = 0.6;

/// Scores how alike two strings are, in `[0, 1]`.
/// Symmetry is not required.
pub trait Similarity {
    fn score(&self, a: &str, b: &str) -> f64;
}

impl<F> Similarity for F
where
    F: Fn(&str, &str) -> f64,
{
    fn score(&self, a: &str, b: &str) -> f64 {
        self(a, b)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Ratcliff/Obershelp "gestalt" ratio: `2 * M / T` where `M` is the number of
/// characters in matching blocks and `T` the total length of both strings.
pub struct SequenceRatio;

impl Similarity for SequenceRatio {
    fn score(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let total = a.len() + b.len();
        if total == 0 {
            return 1.0;
        }
        let matched = matching_chars(&a, &b);
        2.0 * matched as f64 / total as f64
    }
}

/// Sum of matching block sizes, found by recursively splitting around the
/// longest common run.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        matched += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }

    matched
}

/// Longest common run inside `a[alo..ahi]` and `b[blo..bhi]`.
/// Ties prefer the earliest start in `a`, then in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
    // run lengths ending at (i - 1, j) for the previous row
    let mut prev = vec![0usize; bhi - blo + 1];

    for i in alo..ahi {
        let mut row = vec![0usize; bhi - blo + 1];
        for j in blo..bhi {
            if a[i] == b[j] {
                let size = prev[j - blo] + 1;
                row[j - blo + 1] = size;
                if size > best_size {
                    best_i = i + 1 - size;
                    best_j = j + 1 - size;
                    best_size = size;
                }
            }
        }
        prev = row;
    }

    (best_i, best_j, best_size)
}

/// A similarity function bundled with the threshold that gates fuzzy lookup.
pub struct Matcher {
    similarity: Box<dyn Similarity>,
    threshold: f64,
}

impl Matcher {
    pub fn new(similarity: impl Similarity + 'static, threshold: f64) -> Self {
        Matcher {
            similarity: Box::new(similarity),
            threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn score(&self, a: &str, b: &str) -> f64 {
        self.similarity.score(a, b)
    }

    /// Whether `score` is similar enough to select an edge.
    pub fn accepts(&self, score: f64) -> bool {
        score >= self.threshold
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Matcher::new(SequenceRatio, SIMILARITY_THRESHOLD)
    }
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}
