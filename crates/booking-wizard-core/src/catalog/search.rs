//! Fuzzy service lookup.
//!
//! Scoring weights:
//! - Name match quality: 80%
//! - Description match quality: 20%

use serde::{Deserialize, Serialize};
use strsim::{jaro_winkler, normalized_levenshtein};

use crate::models::Service;

/// Minimum score for a service to be returned.
const MIN_SCORE: f64 = 0.55;

const NAME_WEIGHT: f64 = 0.8;
const DESCRIPTION_WEIGHT: f64 = 0.2;

/// A service with its match score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceMatch {
    pub service: Service,
    /// Overall score (0.0 - 1.0)
    pub score: f64,
}

/// Rank services against a free-text query, best first.
pub fn rank_services(services: &[Service], query: &str, limit: usize) -> Vec<ServiceMatch> {
    let query = fold(query.trim());
    if query.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<ServiceMatch> = services
        .iter()
        .map(|service| ServiceMatch {
            service: service.clone(),
            score: score_service(service, &query),
        })
        .filter(|m| m.score >= MIN_SCORE)
        .collect();

    matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    matches.truncate(limit);
    matches
}

fn score_service(service: &Service, query: &str) -> f64 {
    let name_score = score_text(&fold(&service.name), query);
    if name_score >= 1.0 {
        return 1.0;
    }
    let description_score = score_text(&fold(&service.description), query);
    // Never below the name score alone
    (name_score * NAME_WEIGHT + description_score * DESCRIPTION_WEIGHT).max(name_score)
}

/// Match quality of `query` against `text` (0.0 - 1.0).
fn score_text(text: &str, query: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    if text.contains(query) {
        return 1.0;
    }

    // Best single word, so "echo" finds "echographie"
    let word_score = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| fuzzy_match(query, w))
        .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .unwrap_or(0.0);

    word_score.max(fuzzy_match(query, text))
}

/// Combined fuzzy match score.
fn fuzzy_match(a: &str, b: &str) -> f64 {
    let jw = jaro_winkler(a, b);
    let lev = normalized_levenshtein(a, b);
    // Weight Jaro-Winkler higher as it handles prefixes better
    jw * 0.7 + lev * 0.3
}

/// Lowercase and strip French diacritics.
fn fold(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| match c {
            'à' | 'â' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'î' | 'ï' => 'i',
            'ô' | 'ö' => 'o',
            'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}
