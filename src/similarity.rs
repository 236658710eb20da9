use crate::weights::WeightVector;
use log::debug;
use rayon::prelude::*;
use serde::Serialize;

/// Similarity of a query to one reference document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageScore {
    pub label: String,
    pub score: f64,
}

/// Cosine of the angle between `a` and `b`.
///
/// Returns 0.0 when either vector has zero length, since the angle is
/// undefined there.
pub fn cosine_similarity(a: &WeightVector, b: &WeightVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let dot: f64 = a
        .components()
        .iter()
        .zip(b.components())
        .map(|(x, y)| x * y)
        .sum();

    let similarity = dot / (norm_a * norm_b);
    if similarity.is_finite() {
        similarity
    } else {
        0.0
    }
}

/// Score `query` against every document and sort by descending similarity.
///
/// `labels[i]` names `documents[i]`. Equal scores keep document order.
pub fn rank(
    query: &WeightVector,
    documents: &[WeightVector],
    labels: &[String],
) -> Vec<LanguageScore> {
    let mut scored: Vec<LanguageScore> = documents
        .par_iter()
        .zip(labels.par_iter())
        .map(|(doc, label)| LanguageScore {
            label: label.clone(),
            score: cosine_similarity(query, doc),
        })
        .collect();

    // Stable sort, so ties fall back to corpus order.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    if let Some(best) = scored.first() {
        debug!("Best match {} ({:.4})", best.label, best.score);
    }

    scored
}
