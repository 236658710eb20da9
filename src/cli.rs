use crate::config::{DetectorConfig, QueryOrders};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ngram_langid",
    about = "Guess the language of a text by character n-gram similarity",
    version
)]
pub struct Cli {
    /// Highest n-gram order to extract (1 = single characters)
    pub order: usize,

    /// Directory holding one reference text per language
    #[arg(short, long, env = "LANGID_CORPUS", default_value = "data")]
    pub corpus: PathBuf,

    /// Number of ranked languages to print per query
    #[arg(short = 'k', long, env = "LANGID_TOP_K", default_value_t = 5)]
    pub top_k: usize,

    /// N-gram orders scanned in queries
    #[arg(long, value_enum, default_value_t = QueryOrderArg::Full)]
    pub query_orders: QueryOrderArg,

    /// Rank every line of this file instead of reading from stdin
    #[arg(short, long)]
    pub batch: Option<PathBuf>,

    /// Write batch results as CSV
    #[arg(short, long, requires = "batch")]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QueryOrderArg {
    /// Same orders as the corpus documents
    Full,
    /// Skip the highest order
    ExcludeLongest,
}

impl From<QueryOrderArg> for QueryOrders {
    fn from(arg: QueryOrderArg) -> Self {
        match arg {
            QueryOrderArg::Full => QueryOrders::Full,
            QueryOrderArg::ExcludeLongest => QueryOrders::ExcludeLongest,
        }
    }
}

impl Cli {
    pub fn detector_config(&self) -> DetectorConfig {
        DetectorConfig::new(self.order).with_query_orders(self.query_orders.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_the_only_required_argument() {
        let cli = Cli::try_parse_from(["ngram_langid", "3"]).unwrap();
        assert_eq!(cli.order, 3);
        assert_eq!(cli.query_orders, QueryOrderArg::Full);
        assert!(cli.batch.is_none());
        assert_eq!(cli.detector_config(), DetectorConfig::new(3));

        assert!(Cli::try_parse_from(["ngram_langid"]).is_err());
    }

    #[test]
    fn query_orders_and_batch_flags() {
        let cli = Cli::try_parse_from([
            "ngram_langid",
            "4",
            "--query-orders",
            "exclude-longest",
            "--batch",
            "queries.txt",
            "--export",
            "out.csv",
        ])
        .unwrap();
        assert_eq!(cli.detector_config().max_query_order(), 3);
        assert_eq!(cli.batch, Some(PathBuf::from("queries.txt")));
        assert_eq!(cli.export, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn export_requires_batch() {
        assert!(Cli::try_parse_from(["ngram_langid", "3", "--export", "out.csv"]).is_err());
    }

    #[test]
    fn zero_order_parses_but_fails_validation() {
        let cli = Cli::try_parse_from(["ngram_langid", "0"]).unwrap();
        assert!(cli.detector_config().validate().is_err());
    }
}
