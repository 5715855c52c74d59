use crate::tree::similarity::{Matcher, SIMILARITY_THRESHOLD, SequenceRatio, Similarity};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn identical_strings_score_one() {
    assert!(close(SequenceRatio.score("move-north", "move-north"), 1.0));
    assert!(close(SequenceRatio.score("", ""), 1.0));
}

#[test]
fn disjoint_strings_score_zero() {
    assert!(close(SequenceRatio.score("abc", "xyz"), 0.0));
    assert!(close(SequenceRatio.score("abc", ""), 0.0));
}

#[test]
fn ratio_counts_matching_blocks() {
    // "bcd" is shared: 2 * 3 / 8
    assert!(close(SequenceRatio.score("abcd", "bcde"), 0.75));
    // "up" is shared: 2 * 2 / 5
    assert!(close(SequenceRatio.score("up", "upp"), 0.8));
    // blocks on both sides of the longest run: "ab" and "ef" around "x"/"y"
    assert!(close(SequenceRatio.score("abxef", "abyef"), 0.8));
}

#[test]
fn default_matcher_uses_the_standard_threshold() {
    let matcher = Matcher::default();
    assert!(close(matcher.threshold(), SIMILARITY_THRESHOLD));
    assert!(matcher.accepts(0.6));
    assert!(!matcher.accepts(0.59));
}

#[test]
fn closures_are_similarity_functions() {
    let prefix = |a: &str, b: &str| if a.starts_with(b) { 1.0 } else { 0.0 };
    assert!(close(prefix.score("observation", "obs"), 1.0));

    let matcher = Matcher::new(prefix, 0.5);
    assert!(close(matcher.score("look", "lo"), 1.0));
}
