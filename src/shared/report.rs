//! Questionnaire Scores Report
//!
//! Cross-tabulates every patient's questionnaire scores by questionnaire
//! family and follow-up period. The report has one row per patient, in the
//! order the patients were supplied, and every (family, period) cell holds
//! one comma-joined string per row (empty when the patient has no score
//! there).
//!
//! Classification of raw questionnaire names is a substring match over an
//! ordered keyword table; the first keyword found wins and names matching no
//! keyword are ignored. Periods are matched after upper-casing against a
//! fixed list; anything else is ignored.
//!
//! # Example
//!
//! ```rust
//! use promcare::shared::report::{FollowUpPeriod, QuestionnaireFamily, ScoresReport};
//!
//! let report = ScoresReport::from_sheets(std::iter::empty());
//! assert_eq!(report.patient_count(), 0);
//! assert!(report.cell(QuestionnaireFamily::Oks, FollowUpPeriod::PreOp).is_empty());
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::shared::records::QuestionnaireScore;

const FAMILY_COUNT: usize = 5;
const PERIOD_COUNT: usize = 7;

/// Questionnaire instrument family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionnaireFamily {
    /// Oxford Knee Score
    Oks,
    /// Forgotten Joint Score
    Fjs,
    /// Knee injury and Osteoarthritis Outcome Score
    Koos,
    /// Knee Society Score
    Kss,
    /// Short Form 12
    Sf12,
}

impl QuestionnaireFamily {
    /// Keyword table order; also the classification priority
    pub const ALL: [QuestionnaireFamily; FAMILY_COUNT] = [
        QuestionnaireFamily::Oks,
        QuestionnaireFamily::Fjs,
        QuestionnaireFamily::Koos,
        QuestionnaireFamily::Kss,
        QuestionnaireFamily::Sf12,
    ];

    /// Substring that identifies the family in a raw questionnaire name.
    ///
    /// "Ostheoarthritis" is spelled the way the recorded names spell it.
    pub fn keyword(self) -> &'static str {
        match self {
            QuestionnaireFamily::Oks => "Oxford",
            QuestionnaireFamily::Fjs => "Forgotten",
            QuestionnaireFamily::Koos => "Ostheoarthritis",
            QuestionnaireFamily::Kss => "Society",
            QuestionnaireFamily::Sf12 => "SF-12",
        }
    }

    /// Report label
    pub fn label(self) -> &'static str {
        match self {
            QuestionnaireFamily::Oks => "oks",
            QuestionnaireFamily::Fjs => "fjs",
            QuestionnaireFamily::Koos => "koos",
            QuestionnaireFamily::Kss => "kss",
            QuestionnaireFamily::Sf12 => "sf12",
        }
    }

    /// Classify a raw questionnaire name. Case sensitive, first match wins.
    pub fn classify(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|family| name.contains(family.keyword()))
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Follow-up checkpoint relative to surgery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FollowUpPeriod {
    PreOp,
    ThreeWeeks,
    SixWeeks,
    ThreeMonths,
    SixMonths,
    OneYear,
    TwoYears,
}

impl FollowUpPeriod {
    pub const ALL: [FollowUpPeriod; PERIOD_COUNT] = [
        FollowUpPeriod::PreOp,
        FollowUpPeriod::ThreeWeeks,
        FollowUpPeriod::SixWeeks,
        FollowUpPeriod::ThreeMonths,
        FollowUpPeriod::SixMonths,
        FollowUpPeriod::OneYear,
        FollowUpPeriod::TwoYears,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FollowUpPeriod::PreOp => "PRE OP",
            FollowUpPeriod::ThreeWeeks => "3W",
            FollowUpPeriod::SixWeeks => "6W",
            FollowUpPeriod::ThreeMonths => "3M",
            FollowUpPeriod::SixMonths => "6M",
            FollowUpPeriod::OneYear => "1Y",
            FollowUpPeriod::TwoYears => "2Y",
        }
    }

    /// Match a recorded period label, ignoring case only.
    pub fn parse(raw: &str) -> Option<Self> {
        let upper = raw.to_uppercase();
        Self::ALL.into_iter().find(|period| period.label() == upper)
    }

    fn index(self) -> usize {
        self as usize
    }
}

type Row = [Vec<String>; PERIOD_COUNT];

/// Scores cross-tabulated by family and period, one entry per patient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoresReport {
    patients: usize,
    cells: [Row; FAMILY_COUNT],
}

impl ScoresReport {
    fn empty() -> Self {
        Self {
            patients: 0,
            cells: std::array::from_fn(|_| std::array::from_fn(|_| Vec::new())),
        }
    }

    /// Build the report from each patient's score sheet, in patient order.
    pub fn from_sheets<'a, I>(sheets: I) -> Self
    where
        I: IntoIterator<Item = &'a [QuestionnaireScore]>,
    {
        let mut report = Self::empty();
        for sheet in sheets {
            report.push_patient(sheet);
        }
        report
    }

    /// Append one patient row.
    pub fn push_patient(&mut self, scores: &[QuestionnaireScore]) {
        let mut buckets: [Row; FAMILY_COUNT] =
            std::array::from_fn(|_| std::array::from_fn(|_| Vec::new()));

        for score in scores {
            let family = QuestionnaireFamily::classify(&score.name);
            let period = FollowUpPeriod::parse(&score.period);
            if let (Some(family), Some(period)) = (family, period) {
                buckets[family.index()][period.index()].push(format_score(score.score));
            }
        }

        for (cells, bucket) in self.cells.iter_mut().zip(buckets.iter()) {
            for (cell, values) in cells.iter_mut().zip(bucket.iter()) {
                cell.push(values.join(","));
            }
        }
        self.patients += 1;
    }

    /// Number of patient rows
    pub fn patient_count(&self) -> usize {
        self.patients
    }

    /// Per-patient strings for one cell
    pub fn cell(&self, family: QuestionnaireFamily, period: FollowUpPeriod) -> &[String] {
        &self.cells[family.index()][period.index()]
    }
}

/// Integral scores print without a fractional part (`42`, not `42.0`).
fn format_score(score: f64) -> String {
    format!("{}", score)
}

struct PeriodColumns<'a>(&'a Row);

impl Serialize for PeriodColumns<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(PERIOD_COUNT))?;
        for period in FollowUpPeriod::ALL {
            map.serialize_entry(period.label(), &self.0[period.index()])?;
        }
        map.end()
    }
}

impl Serialize for ScoresReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FAMILY_COUNT))?;
        for family in QuestionnaireFamily::ALL {
            map.serialize_entry(family.label(), &PeriodColumns(&self.cells[family.index()]))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn score(name: &str, period: &str, value: f64) -> QuestionnaireScore {
        QuestionnaireScore {
            name: name.to_string(),
            score: value,
            period: period.to_string(),
            timestamp: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_classify_first_keyword_wins() {
        assert_eq!(
            QuestionnaireFamily::classify("Oxford Knee Score"),
            Some(QuestionnaireFamily::Oks)
        );
        assert_eq!(
            QuestionnaireFamily::classify("Knee Society Score (Oxford variant)"),
            Some(QuestionnaireFamily::Oks)
        );
        assert_eq!(
            QuestionnaireFamily::classify("SF-12 Health Survey"),
            Some(QuestionnaireFamily::Sf12)
        );
        assert_eq!(QuestionnaireFamily::classify("oxford knee score"), None);
        assert_eq!(QuestionnaireFamily::classify("Unknown Test"), None);
    }

    #[test]
    fn test_period_match_ignores_case_only() {
        assert_eq!(FollowUpPeriod::parse("pre op"), Some(FollowUpPeriod::PreOp));
        assert_eq!(FollowUpPeriod::parse("6w"), Some(FollowUpPeriod::SixWeeks));
        assert_eq!(FollowUpPeriod::parse("pre-op"), None);
        assert_eq!(FollowUpPeriod::parse(" 3M"), None);
    }

    #[test]
    fn test_unmatched_names_contribute_nothing() {
        let sheet = vec![
            score("Oxford Knee Score", "pre op", 42.0),
            score("Unknown Test", "pre op", 99.0),
        ];
        let report = ScoresReport::from_sheets([sheet.as_slice()]);

        assert_eq!(report.patient_count(), 1);
        assert_eq!(
            report.cell(QuestionnaireFamily::Oks, FollowUpPeriod::PreOp),
            ["42".to_string()]
        );
        for family in QuestionnaireFamily::ALL {
            for period in FollowUpPeriod::ALL {
                if (family, period) == (QuestionnaireFamily::Oks, FollowUpPeriod::PreOp) {
                    continue;
                }
                assert_eq!(report.cell(family, period), ["".to_string()]);
            }
        }
    }

    #[test]
    fn test_rows_follow_patient_order() {
        let first = vec![
            score("Oxford Knee Score", "6W", 30.0),
            score("Oxford Knee Score", "6w", 31.5),
        ];
        let second: Vec<QuestionnaireScore> = Vec::new();
        let third = vec![score("Forgotten Joint Score", "1Y", 77.0)];

        let report =
            ScoresReport::from_sheets([first.as_slice(), second.as_slice(), third.as_slice()]);

        assert_eq!(
            report.cell(QuestionnaireFamily::Oks, FollowUpPeriod::SixWeeks),
            ["30,31.5".to_string(), "".to_string(), "".to_string()]
        );
        assert_eq!(
            report.cell(QuestionnaireFamily::Fjs, FollowUpPeriod::OneYear),
            ["".to_string(), "".to_string(), "77".to_string()]
        );
    }

    #[test]
    fn test_serialized_shape() {
        let sheet = vec![score("Knee Society Score", "2Y", 88.0)];
        let report = ScoresReport::from_sheets([sheet.as_slice()]);
        let json = serde_json::to_value(&report).unwrap();

        let families: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(families.len(), 5);
        assert_eq!(json["kss"]["2Y"], serde_json::json!(["88"]));
        assert_eq!(json["sf12"]["PRE OP"], serde_json::json!([""]));
        assert_eq!(json["oks"].as_object().unwrap().len(), 7);
    }
}
