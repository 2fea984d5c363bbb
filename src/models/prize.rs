/// Label reported when nothing has been won yet.
pub const DEFAULT_ZERO_PRIZE: &str = "₹0";

/// Ordered payouts, one per question position.
///
/// The ladder never indexes at `-1`: leaving the game on the first question
/// reports `zero_label`, a sentinel that is not part of the ladder itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrizeLadder {
    labels: Vec<String>,
    zero_label: String,
}

impl PrizeLadder {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            zero_label: DEFAULT_ZERO_PRIZE.to_string(),
        }
    }

    pub fn with_zero_label(mut self, zero_label: impl Into<String>) -> Self {
        self.zero_label = zero_label.into();
        self
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Prize for answering the question at `position` correctly.
    pub fn label(&self, position: usize) -> Option<&str> {
        self.labels.get(position).map(String::as_str)
    }

    /// Prize kept when the game ends at `position` without answering it.
    pub fn banked(&self, position: usize) -> &str {
        match position.checked_sub(1) {
            Some(previous) => self.label(previous).unwrap_or(&self.zero_label),
            None => &self.zero_label,
        }
    }

    pub fn zero_label(&self) -> &str {
        &self.zero_label
    }

    pub fn top(&self) -> Option<&str> {
        self.labels.last().map(String::as_str)
    }
}
