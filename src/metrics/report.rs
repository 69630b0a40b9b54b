use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::DataError;

/// Class labels every report must contain, in display order.
pub const CLASS_LABELS: [&str; 2] = ["0", "1"];

/// Evaluation summary of the model trained on the raw dataset.
pub const RAW_REPORT_JSON: &str = r#"
{
    "0": {"precision": 1.0, "recall": 1.0, "f1-score": 1.0, "support": 419},
    "1": {"precision": 1.0, "recall": 1.0, "f1-score": 1.0, "support": 381},
    "accuracy": 0.9975,
    "macro avg": {"precision": 1.0, "recall": 1.0, "f1-score": 1.0, "support": 800},
    "weighted avg": {"precision": 1.0, "recall": 1.0, "f1-score": 1.0, "support": 800}
}
"#;

/// Evaluation summary of the model trained on the preprocessed dataset.
pub const PREPROCESSED_REPORT_JSON: &str = r#"
{
    "0": {"precision": 0.8555, "recall": 0.8902, "f1-score": 0.8725, "support": 419},
    "1": {"precision": 0.8736, "recall": 0.8346, "f1-score": 0.8537, "support": 381},
    "accuracy": 0.86375,
    "macro avg": {"precision": 0.8646, "recall": 0.8624, "f1-score": 0.8631, "support": 800},
    "weighted avg": {"precision": 0.8641, "recall": 0.8638, "f1-score": 0.8636, "support": 800}
}
"#;

// ---------------------------------------------------------------------------
// ClassificationReport
// ---------------------------------------------------------------------------

/// Precision / recall / F1 / support for one class or aggregate row.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    #[serde(rename = "f1-score")]
    pub f1_score: f64,
    pub support: u64,
}

impl ClassMetrics {
    /// `(name, value)` pairs in chart order.
    pub fn scores(&self) -> [(&'static str, f64); 3] {
        [
            ("precision", self.precision),
            ("recall", self.recall),
            ("f1-score", self.f1_score),
        ]
    }
}

/// A scikit-learn style classification report.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassificationReport {
    pub accuracy: f64,
    #[serde(rename = "macro avg")]
    pub macro_avg: ClassMetrics,
    #[serde(rename = "weighted avg")]
    pub weighted_avg: ClassMetrics,
    /// Per-class rows keyed by class label.
    #[serde(flatten)]
    pub classes: BTreeMap<String, ClassMetrics>,
}

impl ClassificationReport {
    /// Parse `json` and make sure every label in [`CLASS_LABELS`] is present.
    pub fn parse(name: &str, json: &str) -> Result<Self, DataError> {
        let report: Self = serde_json::from_str(json).map_err(|source| DataError::Report {
            name: name.to_string(),
            source,
        })?;

        for class in CLASS_LABELS {
            if !report.classes.contains_key(class) {
                return Err(DataError::MissingClass {
                    name: name.to_string(),
                    class: class.to_string(),
                });
            }
        }
        Ok(report)
    }

    /// Metrics of one class label.
    pub fn class(&self, label: &str) -> Option<&ClassMetrics> {
        self.classes.get(label)
    }

    /// Problems that do not stop rendering but suggest the literals drifted:
    /// scores outside `[0, 1]` and class supports that do not add up.
    pub fn consistency_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if !(0.0..=1.0).contains(&self.accuracy) {
            warnings.push(format!("accuracy {} is outside [0, 1]", self.accuracy));
        }

        let rows = self
            .classes
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .chain([("macro avg", &self.macro_avg), ("weighted avg", &self.weighted_avg)]);
        for (row, metrics) in rows {
            for (metric, value) in metrics.scores() {
                if !(0.0..=1.0).contains(&value) {
                    warnings.push(format!("{row} {metric} {value} is outside [0, 1]"));
                }
            }
        }

        let class_support: u64 = self.classes.values().map(|m| m.support).sum();
        if class_support != self.weighted_avg.support {
            warnings.push(format!(
                "class supports sum to {class_support} but the weighted avg support is {}",
                self.weighted_avg.support
            ));
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_reports_have_both_classes_in_range() {
        for (name, json) in [("raw", RAW_REPORT_JSON), ("preprocessed", PREPROCESSED_REPORT_JSON)] {
            let report = ClassificationReport::parse(name, json).unwrap();
            assert_eq!(report.classes.len(), 2);
            for label in CLASS_LABELS {
                let metrics = report.class(label).unwrap();
                for (_, value) in metrics.scores() {
                    assert!((0.0..=1.0).contains(&value), "{name}/{label}: {value}");
                }
            }
            assert!(report.consistency_warnings().is_empty());
        }
    }

    #[test]
    fn embedded_accuracies_are_exact() {
        let raw = ClassificationReport::parse("raw", RAW_REPORT_JSON).unwrap();
        let pre = ClassificationReport::parse("preprocessed", PREPROCESSED_REPORT_JSON).unwrap();
        assert_eq!(raw.accuracy, 0.9975);
        assert_eq!(pre.accuracy, 0.86375);
        assert_eq!(pre.class("1").unwrap().recall, 0.8346);
        assert_eq!(pre.class("0").unwrap().support, 419);
    }

    #[test]
    fn malformed_json_is_a_report_error() {
        let err = ClassificationReport::parse("broken", "{ \"0\": ").unwrap_err();
        assert!(matches!(err, DataError::Report { .. }));
    }

    #[test]
    fn missing_class_is_rejected() {
        let json = r#"{
            "0": {"precision": 1.0, "recall": 1.0, "f1-score": 1.0, "support": 1},
            "accuracy": 1.0,
            "macro avg": {"precision": 1.0, "recall": 1.0, "f1-score": 1.0, "support": 1},
            "weighted avg": {"precision": 1.0, "recall": 1.0, "f1-score": 1.0, "support": 1}
        }"#;
        match ClassificationReport::parse("partial", json).unwrap_err() {
            DataError::MissingClass { class, .. } => assert_eq!(class, "1"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn inconsistent_literals_produce_warnings() {
        let json = r#"{
            "0": {"precision": 1.2, "recall": 1.0, "f1-score": 1.0, "support": 5},
            "1": {"precision": 1.0, "recall": 1.0, "f1-score": 1.0, "support": 5},
            "accuracy": 0.5,
            "macro avg": {"precision": 1.0, "recall": 1.0, "f1-score": 1.0, "support": 11},
            "weighted avg": {"precision": 1.0, "recall": 1.0, "f1-score": 1.0, "support": 11}
        }"#;
        let report = ClassificationReport::parse("drifted", json).unwrap();
        let warnings = report.consistency_warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("0 precision"));
        assert!(warnings[1].contains("sum to 10"));
    }
}
