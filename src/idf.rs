use crate::vocabulary::FrequencyTable;
use log::debug;

/// Inverse document frequency of every vocabulary term, in dimension order.
#[derive(Debug, Clone, PartialEq)]
pub struct IdfTable {
    values: Vec<f64>,
    document_counts: Vec<usize>,
    num_documents: usize,
}

impl IdfTable {
    /// `idf(term) = ln(N / df(term))`, with `df` the number of documents that
    /// contain the term at least once.
    pub fn compute(table: &FrequencyTable) -> Self {
        let documents = table.documents();
        let num_documents = documents.len();

        let document_counts: Vec<usize> = table
            .vocabulary()
            .terms()
            .iter()
            .map(|term| documents.iter().filter(|doc| doc.count(term) > 0).count())
            .collect();

        // Every vocabulary term came from some document, so df >= 1.
        let values: Vec<f64> = document_counts
            .iter()
            .map(|&df| (num_documents as f64 / df.max(1) as f64).ln())
            .collect();

        debug!(
            "Computed IDF for {} terms over {} documents",
            values.len(),
            num_documents
        );

        IdfTable {
            values,
            document_counts,
            num_documents,
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// IDF of the term at `dimension`.
    pub fn get(&self, dimension: usize) -> Option<f64> {
        self.values.get(dimension).copied()
    }

    /// Number of documents containing the term at `dimension`.
    pub fn document_count(&self, dimension: usize) -> Option<usize> {
        self.document_counts.get(dimension).copied()
    }

    pub fn num_documents(&self) -> usize {
        self.num_documents
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
