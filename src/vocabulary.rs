use crate::corpus::Corpus;
use crate::ngrams::{extract_ngrams, NgramCounts};
use log::debug;
use rayon::prelude::*;
use std::collections::{BTreeMap, HashMap};

/// Canonical ordered list of every n-gram seen in the corpus.
///
/// The position of a term in `terms` is its dimension in every weight vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
    totals: Vec<u64>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    fn from_totals(totals: BTreeMap<String, u64>) -> Self {
        let mut terms = Vec::with_capacity(totals.len());
        let mut counts = Vec::with_capacity(totals.len());
        for (term, total) in totals {
            terms.push(term);
            counts.push(total);
        }
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();

        Vocabulary {
            terms,
            totals: counts,
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in dimension order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Dimension assigned to `term`, if it occurs in the corpus.
    pub fn position(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Occurrences of `term` across the whole corpus.
    pub fn total_count(&self, term: &str) -> u64 {
        self.position(term).map_or(0, |i| self.totals[i])
    }
}

/// Per-document n-gram counts plus the corpus vocabulary built from them.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    vocabulary: Vocabulary,
    documents: Vec<NgramCounts>,
}

impl FrequencyTable {
    /// Extract n-grams of order `1..=max_order` from every document once.
    ///
    /// `documents()` follows corpus order.
    pub fn build(corpus: &Corpus, max_order: usize) -> Self {
        let documents: Vec<NgramCounts> = corpus
            .documents()
            .par_iter()
            .map(|doc| extract_ngrams(&doc.text, max_order))
            .collect();

        let mut totals: BTreeMap<String, u64> = BTreeMap::new();
        for (doc, counts) in corpus.documents().iter().zip(&documents) {
            debug!("{}: {} distinct n-grams", doc.label, counts.len());
            for (term, count) in counts.iter() {
                *totals.entry(term.to_string()).or_insert(0) += u64::from(count);
            }
        }

        FrequencyTable {
            vocabulary: Vocabulary::from_totals(totals),
            documents,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn documents(&self) -> &[NgramCounts] {
        &self.documents
    }

    pub fn into_vocabulary(self) -> Vocabulary {
        self.vocabulary
    }
}
