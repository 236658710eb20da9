use crate::config::DetectorConfig;
use crate::corpus::Corpus;
use crate::error::DetectorError;
use crate::idf::IdfTable;
use crate::ngrams::extract_ngrams;
use crate::similarity::{rank, LanguageScore};
use crate::vocabulary::{FrequencyTable, Vocabulary};
use crate::weights::WeightVector;
use log::{info, warn};
use std::time::Instant;

/// Immutable n-gram model of a reference corpus.
///
/// Built once; `detect` only reads it, so a model can be shared between
/// threads answering queries.
#[derive(Debug, Clone)]
pub struct LanguageModel {
    config: DetectorConfig,
    labels: Vec<String>,
    vocabulary: Vocabulary,
    idf: IdfTable,
    document_vectors: Vec<WeightVector>,
}

impl LanguageModel {
    pub fn build(corpus: &Corpus, config: DetectorConfig) -> Result<Self, DetectorError> {
        config.validate()?;
        if corpus.is_empty() {
            return Err(DetectorError::EmptyCorpus);
        }
        if corpus.len() < 2 {
            warn!("Corpus has a single document; every IDF is zero and all scores will be 0");
        }

        let started = Instant::now();
        info!(
            "Building model: {} documents, n-gram orders 1..={}",
            corpus.len(),
            config.max_order
        );

        let table = FrequencyTable::build(corpus, config.max_order);
        let idf = IdfTable::compute(&table);
        let document_vectors: Vec<WeightVector> = table
            .documents()
            .iter()
            .map(|counts| WeightVector::build(counts, table.vocabulary(), &idf))
            .collect();

        let vocabulary = table.into_vocabulary();

        info!(
            "Model ready: {} vocabulary terms in {:.2?}",
            vocabulary.len(),
            started.elapsed()
        );

        Ok(LanguageModel {
            config,
            labels: corpus.labels(),
            vocabulary,
            idf,
            document_vectors,
        })
    }

    /// Weight vector of `text` over this model's vocabulary.
    pub fn vectorize(&self, text: &str) -> WeightVector {
        let counts = extract_ngrams(text, self.config.max_query_order());
        WeightVector::build(&counts, &self.vocabulary, &self.idf)
    }

    /// Every document label with its similarity to `text`, most similar first.
    pub fn detect(&self, text: &str) -> Vec<LanguageScore> {
        let query = self.vectorize(text);
        rank(&query, &self.document_vectors, &self.labels)
    }

    /// The `k` best matches for `text`.
    pub fn top(&self, text: &str, k: usize) -> Vec<LanguageScore> {
        let mut ranked = self.detect(text);
        ranked.truncate(k);
        ranked
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn idf(&self) -> &IdfTable {
        &self.idf
    }

    pub fn document_vector(&self, index: usize) -> Option<&WeightVector> {
        self.document_vectors.get(index)
    }

    pub fn num_documents(&self) -> usize {
        self.document_vectors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QueryOrders;
    use crate::corpus::{CorpusLoader, Document};
    use std::path::PathBuf;

    fn fixture_corpus() -> Corpus {
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("test_data")
            .join("corpus");
        CorpusLoader::new()
            .load_directory(&dir)
            .expect("fixture corpus should load")
    }

    fn two_languages() -> Corpus {
        Corpus::from_documents(vec![
            Document::new("en.txt", "the quick fox"),
            Document::new("fr.txt", "le renard rapide"),
        ])
    }

    #[test]
    fn english_query_prefers_english_sample() {
        let model = LanguageModel::build(&two_languages(), DetectorConfig::new(2)).unwrap();
        let ranked = model.detect("the fox runs");
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].label, "en.txt");
        assert_eq!(ranked[1].label, "fr.txt");
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn every_document_vector_spans_the_vocabulary() {
        let corpus = fixture_corpus();
        let model = LanguageModel::build(&corpus, DetectorConfig::default()).unwrap();
        let table = FrequencyTable::build(&corpus, 3);

        for (i, counts) in table.documents().iter().enumerate() {
            let vector = model.document_vector(i).unwrap();
            assert_eq!(vector.len(), model.vocabulary().len());
            for (dim, term) in model.vocabulary().terms().iter().enumerate() {
                let expected = f64::from(counts.count(term)) * model.idf().values()[dim];
                assert_eq!(vector.components()[dim], expected);
            }
        }
    }

    #[test]
    fn rebuilding_is_idempotent() {
        let corpus = fixture_corpus();
        let first = LanguageModel::build(&corpus, DetectorConfig::new(3)).unwrap();
        let second = LanguageModel::build(&corpus, DetectorConfig::new(3)).unwrap();
        assert_eq!(first.vocabulary(), second.vocabulary());
        assert_eq!(first.idf(), second.idf());
        for i in 0..first.num_documents() {
            assert_eq!(first.document_vector(i), second.document_vector(i));
        }
    }

    #[test]
    fn documents_match_themselves_best() {
        let corpus = fixture_corpus();
        let model = LanguageModel::build(&corpus, DetectorConfig::new(3)).unwrap();
        for doc in corpus.documents() {
            let ranked = model.detect(&doc.text);
            assert_eq!(ranked[0].label, doc.label);
            assert!((ranked[0].score - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn fixture_sentences_are_identified() {
        let model = LanguageModel::build(&fixture_corpus(), DetectorConfig::new(3)).unwrap();
        let cases = [
            ("the children were reading on the train", "en.txt"),
            ("les enfants lisent dans le train", "fr.txt"),
            ("die Kinder lesen im Zug", "de.txt"),
        ];
        for (query, expected) in cases {
            assert_eq!(model.detect(query)[0].label, expected, "query {query:?}");
        }
    }

    #[test]
    fn unseen_query_scores_zero_in_corpus_order() {
        let model = LanguageModel::build(&fixture_corpus(), DetectorConfig::new(3)).unwrap();
        let ranked = model.detect("ж");
        assert!(model.vectorize("ж").is_zero());
        let labels: Vec<&str> = ranked.iter().map(|r| r.label.as_str()).collect();
        let expected: Vec<&str> = model.labels().iter().map(String::as_str).collect();
        assert_eq!(labels, expected);
        assert!(ranked.iter().all(|r| r.score == 0.0));
    }

    #[test]
    fn empty_query_is_not_an_error() {
        let model = LanguageModel::build(&two_languages(), DetectorConfig::new(2)).unwrap();
        let ranked = model.detect("");
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|r| r.score == 0.0));
    }

    #[test]
    fn top_truncates_to_available_documents() {
        let model = LanguageModel::build(&two_languages(), DetectorConfig::new(2)).unwrap();
        assert_eq!(model.top("the fox", 5).len(), 2);
        assert_eq!(model.top("the fox", 1).len(), 1);
        assert!(model.top("the fox", 0).is_empty());
    }

    #[test]
    fn single_document_corpus_scores_zero() {
        let corpus = Corpus::from_documents(vec![Document::new("only", "hello world")]);
        let model = LanguageModel::build(&corpus, DetectorConfig::new(3)).unwrap();
        let ranked = model.detect("hello world");
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, 0.0);
    }

    #[test]
    fn invalid_order_and_empty_corpus_are_rejected() {
        let err = LanguageModel::build(&two_languages(), DetectorConfig::new(0)).unwrap_err();
        assert!(matches!(err, DetectorError::InvalidOrder(0)));

        let err = LanguageModel::build(&Corpus::default(), DetectorConfig::new(3)).unwrap_err();
        assert!(matches!(err, DetectorError::EmptyCorpus));
    }

    #[test]
    fn excluding_longest_order_drops_skip_grams_from_queries() {
        let corpus = two_languages();
        let full = LanguageModel::build(&corpus, DetectorConfig::new(3)).unwrap();
        let shorter = LanguageModel::build(
            &corpus,
            DetectorConfig::new(3).with_query_orders(QueryOrders::ExcludeLongest),
        )
        .unwrap();

        let dim = full.vocabulary().position("t_e").expect("skip-gram in vocabulary");
        assert!(full.vectorize("the").components()[dim] > 0.0);
        assert_eq!(shorter.vectorize("the").components()[dim], 0.0);
        assert_eq!(shorter.detect("the fox")[0].label, "en.txt");
    }

    #[test]
    fn model_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LanguageModel>();
    }
}
