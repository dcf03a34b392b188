//! Topic resolution and random sampling
//!
//! Free-text input resolves to a topic in priority order: exact key
//! match, then substring match (either direction, first key in
//! insertion order wins), then the `motivation` default. The candidate
//! quotes are then sampled with a uniform Fisher-Yates shuffle.

use crate::core::data::QuoteDatabase;
use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

/// Maximum number of quotes returned per request
pub const SAMPLE_SIZE: usize = 3;

/// Topic used when the input matches nothing else
pub const DEFAULT_TOPIC: &str = "motivation";

/// User-correctable resolution failures. None of these are fatal;
/// each maps to a prompt asking the user to adjust and retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Please enter a topic")]
    EmptyInput,

    #[error("Quotes are still loading. Please wait a moment.")]
    NotReady,

    #[error("No quotes found for '{0}'. Try another topic!")]
    NoMatch(String),
}

/// Normalize user input for matching: trim and lowercase.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Find the topic whose key exactly matches `normalized`, or whose key
/// is a substring of the input (or vice versa). Exact matches win over
/// partial ones regardless of position; partial ties break on the
/// first key in insertion order.
pub fn find_topic<'a>(
    normalized: &str,
    db: &'a QuoteDatabase,
) -> Option<(&'a str, &'a [String])> {
    if let Some((key, quotes)) = db.iter().find(|(key, _)| *key == normalized) {
        return Some((key, quotes));
    }

    db.iter()
        .find(|(key, _)| key.contains(normalized) || normalized.contains(key))
}

/// `find_topic` plus the default-topic fallback.
pub fn lookup<'a>(normalized: &str, db: &'a QuoteDatabase) -> Option<(&'a str, &'a [String])> {
    find_topic(normalized, db)
        .or_else(|| db.iter().find(|(key, _)| *key == DEFAULT_TOPIC))
}

/// Resolve free-text input to a candidate quote list.
///
/// Validates the input and the database before matching; an empty
/// candidate set (a topic with no quotes, or no default topic) is
/// reported as `NoMatch` so the caller leaves its display untouched.
pub fn resolve(input: &str, db: &QuoteDatabase) -> Result<Vec<String>, ResolveError> {
    let normalized = normalize(input);
    if normalized.is_empty() {
        return Err(ResolveError::EmptyInput);
    }
    if db.is_empty() {
        return Err(ResolveError::NotReady);
    }

    let candidates = lookup(&normalized, db)
        .map(|(_, quotes)| quotes.to_vec())
        .unwrap_or_default();

    if candidates.is_empty() {
        return Err(ResolveError::NoMatch(normalized));
    }

    Ok(candidates)
}

/// Uniformly sample up to [`SAMPLE_SIZE`] quotes from the candidates.
pub fn sample<R: Rng>(candidates: &[String], rng: &mut R) -> Vec<String> {
    let mut pool = candidates.to_vec();
    pool.shuffle(rng);
    pool.truncate(SAMPLE_SIZE);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn test_db() -> QuoteDatabase {
        let mut db = QuoteDatabase::new();
        db.insert(
            "success",
            vec!["s1 - A".to_string(), "s2 - B".to_string(), "s3 - C".to_string()],
        );
        db.insert(
            "motivation",
            vec!["m1 - D".to_string(), "m2 - E".to_string()],
        );
        db.insert("leadership", vec!["l1 - F".to_string()]);
        db
    }

    #[test]
    fn exact_match_returns_only_that_topic() {
        let db = test_db();
        let candidates = resolve("success", &db).unwrap();
        assert_eq!(candidates.len(), 3);
        assert!(candidates.iter().all(|q| q.starts_with('s')));
    }

    #[test]
    fn input_is_trimmed_and_lowercased() {
        let db = test_db();
        let candidates = resolve("  Success ", &db).unwrap();
        assert_eq!(candidates, db.get("success").unwrap().to_vec());
    }

    #[test]
    fn partial_match_key_within_input() {
        let db = test_db();
        let candidates = resolve("the secret of success in life", &db).unwrap();
        assert_eq!(candidates, db.get("success").unwrap().to_vec());
    }

    #[test]
    fn partial_match_input_within_key() {
        let db = test_db();
        let candidates = resolve("lead", &db).unwrap();
        assert_eq!(candidates, db.get("leadership").unwrap().to_vec());
    }

    #[test]
    fn partial_tie_breaks_on_first_key_in_insertion_order() {
        let mut db = QuoteDatabase::new();
        db.insert("seaside", vec!["first".to_string()]);
        db.insert("seasons", vec!["second".to_string()]);
        let (key, _) = find_topic("seas", &db).unwrap();
        assert_eq!(key, "seaside");
    }

    #[test]
    fn exact_match_beats_earlier_partial_match() {
        let mut db = QuoteDatabase::new();
        db.insert("artistry", vec!["partial".to_string()]);
        db.insert("art", vec!["exact".to_string()]);
        let (key, _) = find_topic("art", &db).unwrap();
        assert_eq!(key, "art");
    }

    #[test]
    fn unmatched_input_falls_back_to_motivation() {
        let db = test_db();
        let candidates = resolve("xyz-nonexistent", &db).unwrap();
        assert_eq!(candidates, db.get("motivation").unwrap().to_vec());
    }

    #[test]
    fn unmatched_input_without_default_topic_is_no_match() {
        let mut db = QuoteDatabase::new();
        db.insert("success", vec!["s1".to_string()]);
        assert_eq!(
            resolve("xyz-nonexistent", &db),
            Err(ResolveError::NoMatch("xyz-nonexistent".to_string()))
        );
    }

    #[test]
    fn topic_with_no_quotes_is_no_match() {
        let mut db = QuoteDatabase::new();
        db.insert("void", Vec::new());
        assert_eq!(
            resolve("void", &db),
            Err(ResolveError::NoMatch("void".to_string()))
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        let db = test_db();
        assert_eq!(resolve("", &db), Err(ResolveError::EmptyInput));
        assert_eq!(resolve("   ", &db), Err(ResolveError::EmptyInput));
    }

    #[test]
    fn empty_database_is_not_ready() {
        let db = QuoteDatabase::new();
        assert_eq!(resolve("success", &db), Err(ResolveError::NotReady));
    }

    #[test]
    fn sample_returns_at_most_three_distinct_candidates() {
        let candidates: Vec<String> = (0..10).map(|i| format!("q{i}")).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let picked = sample(&candidates, &mut rng);
        assert_eq!(picked.len(), SAMPLE_SIZE);
        for quote in &picked {
            assert!(candidates.contains(quote));
        }
        let mut deduped = picked.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), picked.len());
    }

    #[test]
    fn sample_of_small_topic_returns_everything() {
        let candidates = vec!["only one - X".to_string()];
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(sample(&candidates, &mut rng), candidates);
    }

    #[test]
    fn sample_is_a_permutation_prefix() {
        let candidates: Vec<String> = (0..3).map(|i| format!("q{i}")).collect();
        let mut rng = StdRng::seed_from_u64(42);
        let mut picked = sample(&candidates, &mut rng);
        picked.sort();
        let mut expected = candidates.clone();
        expected.sort();
        assert_eq!(picked, expected);
    }
}
