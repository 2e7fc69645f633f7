//! Transcription analysis wire types
//!
//! Mirrors the backend response DTOs field for field. Produced by the
//! backend, consumed read-only by presenters.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Intent classification scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentScores {
    pub top_intent: String,
    /// Confidence in [0, 1] per intent name
    pub intents: HashMap<String, f64>,
}

impl IntentScores {
    /// Intents ordered by descending score, name as tiebreaker
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self
            .intents
            .iter()
            .map(|(name, score)| (name.as_str(), *score))
            .collect();
        entries.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(b.0))
        });
        entries
    }
}

/// Efficiency scoring metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyMetrics {
    pub overall_score: f64,
    pub intent_score: f64,
    pub clarity_score: f64,
    pub urgency_score: f64,
    /// "efficient" or "needs_improvement"
    pub status: String,
    pub word_count: u64,
    pub char_count: u64,
}

impl EfficiencyMetrics {
    pub fn is_efficient(&self) -> bool {
        self.status == "efficient"
    }
}

/// Full structured analysis returned by the transcribe endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionResult {
    pub transcript: String,
    pub intents: IntentScores,
    pub efficiency: EfficiencyMetrics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "transcript": "clear for landing",
            "intents": {
                "top_intent": "landing_request",
                "intents": {"landing_request": 0.92, "taxi": 0.05}
            },
            "efficiency": {
                "overall_score": 0.8,
                "intent_score": 0.92,
                "clarity_score": 0.75,
                "urgency_score": 0.6,
                "status": "efficient",
                "word_count": 3,
                "char_count": 20
            }
        }"#
    }

    #[test]
    fn deserialize_backend_response() {
        let result: TranscriptionResult = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(result.transcript, "clear for landing");
        assert_eq!(result.intents.top_intent, "landing_request");
        assert_eq!(result.intents.intents["landing_request"], 0.92);
        assert_eq!(result.efficiency.word_count, 3);
        assert_eq!(result.efficiency.char_count, 20);
        assert!(result.efficiency.is_efficient());
        assert_eq!(result.processing_time, None);
    }

    #[test]
    fn processing_time_is_optional() {
        let mut value: serde_json::Value = serde_json::from_str(sample_json()).unwrap();
        value["processing_time"] = serde_json::json!(1.25);
        let result: TranscriptionResult = serde_json::from_value(value).unwrap();
        assert_eq!(result.processing_time, Some(1.25));
    }

    #[test]
    fn ranked_intents_descend_by_score() {
        let result: TranscriptionResult = serde_json::from_str(sample_json()).unwrap();
        let ranked = result.intents.ranked();
        assert_eq!(ranked[0], ("landing_request", 0.92));
        assert_eq!(ranked[1], ("taxi", 0.05));
    }

    #[test]
    fn needs_improvement_status() {
        let metrics = EfficiencyMetrics {
            overall_score: 0.3,
            intent_score: 0.4,
            clarity_score: 0.2,
            urgency_score: 0.1,
            status: "needs_improvement".to_string(),
            word_count: 12,
            char_count: 80,
        };
        assert!(!metrics.is_efficient());
    }

    #[test]
    fn round_trips_through_json() {
        let result: TranscriptionResult = serde_json::from_str(sample_json()).unwrap();
        let encoded = serde_json::to_string(&result).unwrap();
        let decoded: TranscriptionResult = serde_json::from_str(&encoded).unwrap();
        assert_eq!(result, decoded);
    }
}
