use std::collections::HashMap;
use std::collections::VecDeque;

/// Placeholder for the interior characters of a skip-gram.
pub const WILDCARD: char = '_';

/// Orders up to this value produce literal substrings; longer windows collapse
/// to skip-grams.
const LITERAL_MAX_ORDER: usize = 2;

/// Occurrence counts of n-gram keys. Absent keys count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NgramCounts {
    counts: HashMap<String, u32>,
}

impl NgramCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: String) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Count for `term`, zero when it was never seen.
    pub fn count(&self, term: &str) -> u32 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

fn is_boundary(c: char) -> bool {
    c == ' ' || c == '\n'
}

/// Extract every n-gram of order `1..=max_order` from `text`.
///
/// The text is lower-cased, spaces and newlines reset all windows, and
/// windows of three or more characters keep only their first and last
/// character (`"abcd"` becomes `"a__d"`). A `max_order` of zero yields an
/// empty mapping.
pub fn extract_ngrams(text: &str, max_order: usize) -> NgramCounts {
    let mut counts = NgramCounts::new();
    if max_order == 0 {
        return counts;
    }

    let mut window: VecDeque<char> = VecDeque::with_capacity(max_order);

    for c in text.chars().flat_map(char::to_lowercase) {
        if is_boundary(c) {
            window.clear();
            continue;
        }

        if window.len() == max_order {
            window.pop_front();
        }
        window.push_back(c);

        for order in 1..=window.len() {
            counts.add(window_key(&window, order));
        }
    }

    counts
}

/// Key for the trailing `order` characters of `window`.
fn window_key(window: &VecDeque<char>, order: usize) -> String {
    let start = window.len() - order;
    if order <= LITERAL_MAX_ORDER {
        return window.range(start..).collect();
    }

    let mut key = String::with_capacity(order + 6);
    key.push(window[start]);
    key.extend(std::iter::repeat(WILDCARD).take(order - 2));
    key.push(window[window.len() - 1]);
    key
}
