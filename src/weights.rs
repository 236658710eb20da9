use crate::idf::IdfTable;
use crate::ngrams::NgramCounts;
use crate::vocabulary::Vocabulary;

/// Dense TF-IDF vector over the vocabulary's dimension order.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightVector {
    components: Vec<f64>,
}

impl WeightVector {
    /// Weigh `counts` against the vocabulary: component `i` is the count of
    /// term `i` times its IDF. Terms missing from the vocabulary are dropped.
    ///
    /// Used for corpus documents and queries alike.
    pub fn build(counts: &NgramCounts, vocabulary: &Vocabulary, idf: &IdfTable) -> Self {
        let mut components = vec![0.0f64; vocabulary.len()];
        for (term, count) in counts.iter() {
            if let Some(dim) = vocabulary.position(term) {
                components[dim] = f64::from(count) * idf.values()[dim];
            }
        }
        WeightVector { components }
    }

    pub fn components(&self) -> &[f64] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.components.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.components.iter().all(|v| *v == 0.0)
    }
}
