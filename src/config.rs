use crate::error::DetectorError;

pub const DEFAULT_MAX_ORDER: usize = 3;

/// Which n-gram orders a query is scanned for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryOrders {
    /// Orders `1..=N`, the same range as corpus documents.
    #[default]
    Full,
    /// Orders `1..=N-1`; the longest order never contributes to a query.
    ExcludeLongest,
}

impl QueryOrders {
    /// Highest order scanned in a query for a model built with `max_order`.
    pub fn max_query_order(self, max_order: usize) -> usize {
        match self {
            QueryOrders::Full => max_order,
            QueryOrders::ExcludeLongest => max_order.saturating_sub(1),
        }
    }
}

/// Construction parameters of a language model. Fixed once the model is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectorConfig {
    pub max_order: usize,
    pub query_orders: QueryOrders,
}

impl DetectorConfig {
    pub fn new(max_order: usize) -> Self {
        DetectorConfig {
            max_order,
            query_orders: QueryOrders::default(),
        }
    }

    pub fn with_query_orders(mut self, query_orders: QueryOrders) -> Self {
        self.query_orders = query_orders;
        self
    }

    pub fn validate(&self) -> Result<(), DetectorError> {
        if self.max_order < 1 {
            return Err(DetectorError::InvalidOrder(self.max_order));
        }
        Ok(())
    }

    pub fn max_query_order(&self) -> usize {
        self.query_orders.max_query_order(self.max_order)
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ORDER)
    }
}
