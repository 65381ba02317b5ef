//! Questionnaire assignments and scores

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::shared::timestamp::midnight;

/// A questionnaire a patient must fill in at a follow-up period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireAssignment {
    pub name: String,
    pub period: String,
    /// 0 = pending, 1 = completed
    #[serde(default)]
    pub completed: u8,
}

/// A recorded questionnaire result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireScore {
    pub name: String,
    pub score: f64,
    pub period: String,
    #[serde(with = "midnight")]
    pub timestamp: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_timestamp_accepts_plain_date() {
        let score: QuestionnaireScore = serde_json::from_value(serde_json::json!({
            "name": "Oxford Knee Score",
            "score": 42,
            "period": "pre op",
            "timestamp": "2024-03-10"
        }))
        .unwrap();

        assert_eq!(score.score, 42.0);
        let json = serde_json::to_value(&score).unwrap();
        assert_eq!(json["timestamp"], "2024-03-10T00:00:00");
    }

    #[test]
    fn test_assignment_defaults_to_pending() {
        let assignment: QuestionnaireAssignment = serde_json::from_value(serde_json::json!({
            "name": "Forgotten Joint Score",
            "period": "6W"
        }))
        .unwrap();
        assert_eq!(assignment.completed, 0);
    }
}
