use serde::{Deserialize, Serialize};

/// The possible answers to a survey question, in display order.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub enum ResponseCategory {
    Never,
    AlmostNever,
    Sometimes,
    AlmostAlways,
    Always,
}

impl ResponseCategory {
    pub const ALL: [ResponseCategory; 5] = [
        ResponseCategory::Never,
        ResponseCategory::AlmostNever,
        ResponseCategory::Sometimes,
        ResponseCategory::AlmostAlways,
        ResponseCategory::Always,
    ];

    /// Column label used in the results table and in the JSON summary.
    pub fn label(&self) -> &'static str {
        match self {
            ResponseCategory::Never => "nunca",
            ResponseCategory::AlmostNever => "casi_nunca",
            ResponseCategory::Sometimes => "a_veces",
            ResponseCategory::AlmostAlways => "casi_siempre",
            ResponseCategory::Always => "siempre",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// One question of the survey with the number of answers per category.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct SurveyRow {
    pub question: String,
    /// Counts in the order of [ResponseCategory::ALL].
    pub counts: [u64; 5],
}

impl SurveyRow {
    pub fn new(question: &str, counts: [u64; 5]) -> SurveyRow {
        SurveyRow {
            question: question.to_string(),
            counts,
        }
    }

    pub fn count(&self, category: ResponseCategory) -> u64 {
        self.counts[category.index()]
    }

    /// Sum of the counts, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.counts.iter().fold(0u64, |acc, c| acc.saturating_add(*c))
    }

    pub fn max_count(&self) -> u64 {
        self.counts.iter().cloned().max().unwrap_or(0)
    }
}

/// The results table of the ACAD102 2025/10 evaluation.
///
/// These numbers are not read from the input document.
pub fn default_rows() -> Vec<SurveyRow> {
    vec![
        SurveyRow::new("Los contenidos entregados fueron claros", [0, 0, 0, 3, 14]),
        SurveyRow::new(
            "Las actividades realizadas contribuyeron a mi aprendizaje",
            [0, 0, 1, 5, 11],
        ),
        SurveyRow::new(
            "Los recursos de apoyo fueron pertinentes a los objetivos de las clases",
            [0, 0, 0, 2, 15],
        ),
        SurveyRow::new("Mi participación en clases fue activa", [0, 0, 2, 6, 9]),
        SurveyRow::new("El facilitador generó un clima de confianza", [0, 0, 0, 3, 14]),
        SurveyRow::new(
            "El facilitador abrió instancias para aclarar dudas",
            [0, 0, 1, 0, 16],
        ),
        SurveyRow::new(
            "El facilitador promovió el diálogo colectivo en clases",
            [0, 0, 0, 1, 16],
        ),
    ]
}

/// Number of people who answered the survey.
///
/// Only the first question is counted: questions skipped by some respondents
/// are not reconciled.
pub fn respondent_total(rows: &[SurveyRow]) -> u64 {
    rows.first().map(|r| r.total()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_of_first_row() {
        let rows = vec![
            SurveyRow::new("q1", [0, 0, 1, 3, 14]),
            SurveyRow::new("q2", [5, 5, 5, 5, 5]),
        ];
        assert_eq!(respondent_total(&rows), 18);
    }

    #[test]
    fn total_of_empty_table() {
        assert_eq!(respondent_total(&[]), 0);
    }

    #[test]
    fn default_table() {
        let rows = default_rows();
        assert_eq!(rows.len(), 7);
        assert_eq!(respondent_total(&rows), 17);
        assert_eq!(rows[3].count(ResponseCategory::Sometimes), 2);
        assert_eq!(rows[5].count(ResponseCategory::Always), 16);
        assert_eq!(rows[5].max_count(), 16);
    }

    #[test]
    fn category_order() {
        let labels: Vec<&str> = ResponseCategory::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec!["nunca", "casi_nunca", "a_veces", "casi_siempre", "siempre"]
        );
    }

    #[test]
    fn total_saturates() {
        let row = SurveyRow::new("q", [u64::MAX, 1, 0, 0, u64::MAX]);
        assert_eq!(row.total(), u64::MAX);
        assert_eq!(respondent_total(&[row]), u64::MAX);
    }

    #[test]
    fn row_from_json() {
        let row: SurveyRow =
            serde_json::from_str(r#"{"question": "q", "counts": [1, 2, 3, 4, 5]}"#).unwrap();
        assert_eq!(row.count(ResponseCategory::AlmostNever), 2);
        assert_eq!(row.total(), 15);
    }
}
