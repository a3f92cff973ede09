use rand::Rng;

/// Fixed list of quotes with a current pick that never repeats twice in a row.
#[derive(Clone, Debug)]
pub struct QuoteDeck {
    quotes: Vec<String>,
    index: usize,
}

impl QuoteDeck {
    /// Start at a uniformly random quote.
    pub fn new<R: Rng>(quotes: Vec<String>, rng: &mut R) -> Self {
        let index = if quotes.is_empty() {
            0
        } else {
            rng.random_range(0..quotes.len())
        };
        Self { quotes, index }
    }

    /// Start at a known quote. Out-of-range indices clamp to the last quote.
    pub fn with_index(quotes: Vec<String>, index: usize) -> Self {
        let index = index.min(quotes.len().saturating_sub(1));
        Self { quotes, index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn current(&self) -> Option<&str> {
        self.quotes.get(self.index).map(String::as_str)
    }

    /// Move to a different quote chosen uniformly among the others.
    /// With fewer than two quotes the index stays put.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) -> usize {
        self.index = next_index(self.index, self.quotes.len(), rng);
        self.index
    }
}

fn next_index<R: Rng>(current: usize, len: usize, rng: &mut R) -> usize {
    if len <= 1 {
        return current;
    }
    // Draw from the other len - 1 slots and step over the current one.
    let pick = rng.random_range(0..len - 1);
    if pick >= current { pick + 1 } else { pick }
}
