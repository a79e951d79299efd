use indexmap::IndexMap;

/// Category labels a fresh chart starts with.
pub const DEFAULT_EMOTION_LABELS: [&str; 8] = [
    "Happy",
    "Sad",
    "Angry",
    "Fearful",
    "Disgust",
    "Surprised",
    "Neutral",
    "Contempt",
];

pub const DEFAULT_MAX_VALUE: f64 = 1.0;

const MAX_VALUE_RELATIVE_TOLERANCE: f64 = 1e-12;

#[must_use]
pub fn default_emotion_labels() -> Vec<String> {
    DEFAULT_EMOTION_LABELS
        .iter()
        .map(|label| (*label).to_owned())
        .collect()
}

/// Clamps one raw score into `[0, max_value]`.
///
/// NaN collapses to zero and infinities saturate to the nearest bound.
#[must_use]
pub fn clamp_score(value: f64, max_value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, max_value)
}

pub(crate) fn max_values_equal(left: f64, right: f64) -> bool {
    (left - right).abs() <= MAX_VALUE_RELATIVE_TOLERANCE * left.abs().min(right.abs())
}

/// Ordered category labels with a parallel, clamped score sequence.
///
/// After every mutation `values().len() == labels().len()` and each value lies
/// in `[0, max_value()]`. Invalid input is repaired or ignored, never rejected
/// with an error.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreModel {
    labels: Vec<String>,
    values: Vec<f64>,
    max_value: f64,
}

impl Default for ScoreModel {
    fn default() -> Self {
        Self::with_labels(default_emotion_labels(), DEFAULT_MAX_VALUE)
    }
}

impl ScoreModel {
    /// Builds a model with zeroed scores.
    ///
    /// A non-positive or non-finite `max_value` falls back to `DEFAULT_MAX_VALUE`.
    #[must_use]
    pub fn with_labels(labels: Vec<String>, max_value: f64) -> Self {
        let max_value = if max_value.is_finite() && max_value > 0.0 {
            max_value
        } else {
            DEFAULT_MAX_VALUE
        };
        let values = vec![0.0; labels.len()];
        Self {
            labels,
            values,
            max_value,
        }
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|entry| entry == label)
    }

    /// Stored score of the first category named `label`.
    #[must_use]
    pub fn value_of(&self, label: &str) -> Option<f64> {
        self.index_of(label)
            .and_then(|index| self.values.get(index).copied())
    }

    /// Label to score pairs in angular order.
    ///
    /// Duplicate labels keep the score of their first occurrence.
    #[must_use]
    pub fn scores(&self) -> IndexMap<String, f64> {
        let mut scores = IndexMap::with_capacity(self.labels.len());
        for (label, value) in self.labels.iter().zip(&self.values) {
            scores.entry(label.clone()).or_insert(*value);
        }
        scores
    }

    /// Replaces the label set and zeroes every score.
    ///
    /// Returns `false` (and changes nothing) for an empty or identical set.
    pub fn set_labels<I, S>(&mut self, labels: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() || labels == self.labels {
            return false;
        }

        self.values = vec![0.0; labels.len()];
        self.labels = labels;
        self.normalize();
        true
    }

    /// Stores a raw score sequence, repairing length and range.
    pub fn set_values(&mut self, values: Vec<f64>) {
        self.values = values;
        self.normalize();
    }

    /// Writes the score of category `label`.
    ///
    /// Returns `false` when no category carries that exact name.
    pub fn set_value(&mut self, label: &str, value: f64) -> bool {
        let Some(index) = self.index_of(label) else {
            return false;
        };

        if self.values.len() <= index {
            self.values.resize(self.labels.len(), 0.0);
        }
        self.values[index] = value;
        self.normalize();
        true
    }

    /// Updates the display range and re-clamps every score.
    ///
    /// Rejects non-positive, non-finite and numerically unchanged values.
    pub fn set_max_value(&mut self, max_value: f64) -> bool {
        if !max_value.is_finite()
            || max_value <= 0.0
            || max_values_equal(self.max_value, max_value)
        {
            return false;
        }

        self.max_value = max_value;
        self.normalize();
        true
    }

    /// Rebuilds `values` to the label count (prefix kept, tail zero-filled),
    /// then clamps every entry into `[0, max_value]`.
    pub fn normalize(&mut self) {
        let count = self.labels.len();
        if self.values.len() != count {
            self.values.resize(count, 0.0);
        }

        let max_value = self.max_value;
        for value in &mut self.values {
            *value = clamp_score(*value, max_value);
        }
    }

    #[must_use]
    pub fn is_normalized(&self) -> bool {
        self.values.len() == self.labels.len()
            && self
                .values
                .iter()
                .all(|value| (0.0..=self.max_value).contains(value))
    }
}
