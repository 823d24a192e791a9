mod extract;
mod naming;
mod survey;

pub mod manual;

use log::info;

pub use crate::extract::*;
pub use crate::naming::*;
pub use crate::survey::*;

/// Everything needed to draw the report of one evaluation.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ReportInput {
    pub identifier: SectionIdentifier,
    /// Number of people who answered, see [respondent_total].
    pub respondents: u64,
    pub rows: Vec<SurveyRow>,
    pub comments: CommentBlock,
    pub comments_music: CommentBlock,
}

/// Extracts the identifier and the comments of a document and pairs them
/// with the results table.
///
/// Arguments:
/// * `doc` the uploaded document
/// * `rows` the results table, usually [default_rows]
/// * `policy` how to treat a music section that has no general section before it
///
/// ```
/// use survey_report::*;
///
/// let doc = RawDocument::from_text("ACAD102 - NRC 14397 - 2025/10\nComentarios:\nMuy buena clase\n");
/// let report = prepare_report(&doc, default_rows(), OrphanMusicPolicy::default());
/// assert_eq!(report.identifier.as_str(), "NRC 14397");
/// assert_eq!(report.respondents, 17);
/// assert_eq!(report.comments.entries().collect::<Vec<_>>(), vec!["Muy buena clase"]);
/// ```
pub fn prepare_report(
    doc: &RawDocument,
    rows: Vec<SurveyRow>,
    policy: OrphanMusicPolicy,
) -> ReportInput {
    let ex = extract_with(doc, policy);
    let respondents = respondent_total(&rows);
    info!(
        "prepare_report: {} lines, identifier: {:?}, respondents: {}, comments: {}, music comments: {}",
        doc.len(),
        ex.identifier.as_str(),
        respondents,
        ex.comments.entries().count(),
        ex.comments_music.entries().count()
    );
    ReportInput {
        identifier: ex.identifier,
        respondents,
        rows,
        comments: ex.comments,
        comments_music: ex.comments_music,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn full_document() {
        init();
        let doc = RawDocument::from_text(
            "ACAD102 - NRC 14397 - 2025/10
Pregunta;nunca;casi_nunca;a_veces;casi_siempre;siempre
Comentarios:
  Excelente facilitador

Me gustaron las actividades
Comentarios Música/Vitalizador:
Buena música
",
        );
        let report = prepare_report(&doc, default_rows(), OrphanMusicPolicy::default());
        assert_eq!(report.identifier, SectionIdentifier::new("NRC 14397"));
        assert_eq!(report.respondents, 17);
        assert_eq!(report.rows.len(), 7);
        assert_eq!(
            report.comments.entries().collect::<Vec<_>>(),
            vec!["Excelente facilitador", "Me gustaron las actividades"]
        );
        assert_eq!(
            report.comments_music.entries().collect::<Vec<_>>(),
            vec!["Buena música"]
        );
    }

    #[test]
    fn custom_rows() {
        init();
        let rows = vec![SurveyRow::new("q", [0, 0, 1, 3, 14])];
        let report = prepare_report(&RawDocument::default(), rows, OrphanMusicPolicy::Discard);
        assert_eq!(report.respondents, 18);
        assert!(!report.identifier.is_known());
        assert!(report.comments.is_empty());
    }
}
