/// Affiliation labels in first-seen order; a label's index is its position plus one
#[derive(Debug, Default, Clone)]
pub struct AffiliationIndex {
    labels: Vec<String>,
}

impl AffiliationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the label's index and whether this call assigned it
    pub fn insert(&mut self, label: &str) -> (usize, bool) {
        match self.index_of(label) {
            Some(index) => (index, false),
            None => {
                self.labels.push(label.to_string());
                (self.labels.len(), true)
            }
        }
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label).map(|pos| pos + 1)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
