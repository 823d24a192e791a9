// ********* Text extraction ***********

use log::{debug, warn};

/// Prefix of the line that opens the general comments section.
pub const GENERAL_MARKER: &str = "Comentarios:";
/// Prefix of the line that opens the music/energizer comments section.
pub const MUSIC_MARKER: &str = "Comentarios Música/Vitalizador:";

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// The uploaded document, as an ordered sequence of lines.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct RawDocument {
    lines: Vec<String>,
}

impl RawDocument {
    /// Splits a text on line boundaries.
    ///
    /// `\r\n` counts as one boundary. A bare `\r`, `\n`, the vertical tab, the
    /// form feed, the file, group and record separators, NEL and the Unicode
    /// line and paragraph separators are boundaries too. A boundary at the very
    /// end of the text does not open an extra empty line.
    pub fn from_text(text: &str) -> RawDocument {
        let mut lines: Vec<String> = Vec::new();
        let mut rest = text;
        while !rest.is_empty() {
            match rest.char_indices().find(|(_, c)| is_line_boundary(*c)) {
                Some((idx, c)) => {
                    lines.push(rest[..idx].to_string());
                    let sep_len = if rest[idx..].starts_with("\r\n") {
                        2
                    } else {
                        c.len_utf8()
                    };
                    rest = &rest[idx + sep_len..];
                }
                None => {
                    lines.push(rest.to_string());
                    break;
                }
            }
        }
        RawDocument { lines }
    }

    pub fn from_lines(lines: &[&str]) -> RawDocument {
        RawDocument {
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// The course-section code found in the header of the document (the NRC).
///
/// The content is opaque text: no check is made on its shape.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct SectionIdentifier(String);

impl SectionIdentifier {
    /// Placeholder used when the header does not carry an identifier.
    pub const UNKNOWN: &'static str = "NRC desconocido";

    pub fn new(s: &str) -> SectionIdentifier {
        SectionIdentifier(s.to_string())
    }

    pub fn unknown() -> SectionIdentifier {
        SectionIdentifier::new(SectionIdentifier::UNKNOWN)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_known(&self) -> bool {
        self.0 != SectionIdentifier::UNKNOWN
    }
}

impl std::fmt::Display for SectionIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A run of comment lines, exactly as they appear in the document.
///
/// Blank lines and surrounding whitespace are kept in the block. They are
/// only dropped when the entries are read for display with [CommentBlock::entries].
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct CommentBlock {
    lines: Vec<String>,
}

impl CommentBlock {
    pub fn new(lines: &[String]) -> CommentBlock {
        CommentBlock {
            lines: lines.to_vec(),
        }
    }

    pub fn empty() -> CommentBlock {
        CommentBlock::default()
    }

    /// The lines of the block before trimming.
    pub fn raw(&self) -> &[String] {
        &self.lines
    }

    /// The trimmed, non-empty lines of the block.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty())
    }

    /// True when the block has nothing to display.
    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }
}

/// What to do with a music section when the general section is missing.
///
/// Older reports dropped both sections in that case.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub enum OrphanMusicPolicy {
    /// The lines after the music marker form the music block on their own.
    #[default]
    Independent,
    /// Both blocks are left empty.
    Discard,
}

/// Positions of the two section markers, if found.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct Markers {
    pub general: Option<usize>,
    pub music: Option<usize>,
}

/// Everything the extractor derives from one document.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Extraction {
    pub identifier: SectionIdentifier,
    pub comments: CommentBlock,
    pub comments_music: CommentBlock,
}

/// Reads the identifier from the header line.
///
/// The header is expected to look like `ACAD102 - NRC 14397 - 2025/10`, in which
/// case the second dash-separated piece is returned.
///
/// ```
/// use survey_report::{extract_identifier, RawDocument};
///
/// let doc = RawDocument::from_lines(&["ACAD102 - NRC 14397 - 2025/10"]);
/// assert_eq!(extract_identifier(&doc).as_str(), "NRC 14397");
/// ```
pub fn extract_identifier(doc: &RawDocument) -> SectionIdentifier {
    let first_line = doc.lines().first().map(|l| l.trim()).unwrap_or("");
    let parts: Vec<&str> = first_line.split('-').map(|p| p.trim()).collect();
    match parts.get(1) {
        Some(p) => SectionIdentifier::new(p),
        None => {
            debug!("extract_identifier: no identifier in {:?}", first_line);
            SectionIdentifier::unknown()
        }
    }
}

/// Finds the last line starting with each marker.
pub fn locate_markers(doc: &RawDocument) -> Markers {
    let mut markers = Markers::default();
    for (idx, line) in doc.lines().iter().enumerate() {
        let l = line.trim();
        // Repeated markers overwrite: the last one wins.
        if l.starts_with(GENERAL_MARKER) {
            markers.general = Some(idx);
        }
        if l.starts_with(MUSIC_MARKER) {
            markers.music = Some(idx);
        }
    }
    debug!("locate_markers: {:?}", markers);
    markers
}

/// Splits the body of the document into the general and the music comment blocks.
pub fn extract_comments(
    doc: &RawDocument,
    policy: OrphanMusicPolicy,
) -> (CommentBlock, CommentBlock) {
    let lines = doc.lines();
    match locate_markers(doc) {
        Markers {
            general: Some(g),
            music: Some(m),
        } => {
            // A general marker placed after the music marker leaves nothing in between.
            let general = if g < m {
                CommentBlock::new(&lines[g + 1..m])
            } else {
                CommentBlock::empty()
            };
            (general, CommentBlock::new(&lines[m + 1..]))
        }
        Markers {
            general: Some(g),
            music: None,
        } => (CommentBlock::new(&lines[g + 1..]), CommentBlock::empty()),
        Markers {
            general: None,
            music: Some(m),
        } => {
            warn!(
                "extract_comments: music section at line {} without a general section, policy: {:?}",
                m + 1,
                policy
            );
            match policy {
                OrphanMusicPolicy::Independent => {
                    (CommentBlock::empty(), CommentBlock::new(&lines[m + 1..]))
                }
                OrphanMusicPolicy::Discard => (CommentBlock::empty(), CommentBlock::empty()),
            }
        }
        Markers {
            general: None,
            music: None,
        } => (CommentBlock::empty(), CommentBlock::empty()),
    }
}

/// Runs the extractor with the default policy for orphan music sections.
pub fn extract(doc: &RawDocument) -> Extraction {
    extract_with(doc, OrphanMusicPolicy::default())
}

pub fn extract_with(doc: &RawDocument, policy: OrphanMusicPolicy) -> Extraction {
    let (comments, comments_music) = extract_comments(doc, policy);
    Extraction {
        identifier: extract_identifier(doc),
        comments,
        comments_music,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(b: &CommentBlock) -> Vec<&str> {
        b.entries().collect()
    }

    #[test]
    fn identifier_from_header() {
        let doc = RawDocument::from_lines(&["ACAD102 - NRC 14397 - 2025/10", "body"]);
        assert_eq!(extract_identifier(&doc), SectionIdentifier::new("NRC 14397"));
    }

    #[test]
    fn identifier_header_without_dashes() {
        let doc = RawDocument::from_lines(&["no dashes here"]);
        let id = extract_identifier(&doc);
        assert_eq!(id.as_str(), "NRC desconocido");
        assert!(!id.is_known());
    }

    #[test]
    fn identifier_header_with_surrounding_space() {
        let doc = RawDocument::from_lines(&["   ACAD102-NRC 1 -x  "]);
        assert_eq!(extract_identifier(&doc).as_str(), "NRC 1");
    }

    #[test]
    fn identifier_empty_piece_is_kept() {
        let doc = RawDocument::from_lines(&["A -  - B"]);
        let id = extract_identifier(&doc);
        assert_eq!(id.as_str(), "");
        assert!(id.is_known());
    }

    #[test]
    fn empty_document() {
        let doc = RawDocument::from_text("");
        let ex = extract(&doc);
        assert_eq!(ex.identifier.as_str(), SectionIdentifier::UNKNOWN);
        assert!(ex.comments.raw().is_empty());
        assert!(ex.comments_music.raw().is_empty());
    }

    #[test]
    fn both_sections() {
        let doc = RawDocument::from_lines(&[
            "Comentarios:",
            "a",
            "b",
            "Comentarios Música/Vitalizador:",
            "c",
        ]);
        let (general, music) = extract_comments(&doc, OrphanMusicPolicy::default());
        assert_eq!(general.raw(), &["a".to_string(), "b".to_string()]);
        assert_eq!(music.raw(), &["c".to_string()]);
    }

    #[test]
    fn general_section_only() {
        let doc = RawDocument::from_lines(&["Comentarios:", "a", ""]);
        let ex = extract(&doc);
        assert_eq!(ex.comments.raw(), &["a".to_string(), "".to_string()]);
        assert_eq!(entries(&ex.comments), vec!["a"]);
        assert!(ex.comments_music.raw().is_empty());
    }

    #[test]
    fn no_sections() {
        let doc = RawDocument::from_lines(&["ACAD102 - NRC 1 - 2025/10", "nothing", "here"]);
        let ex = extract(&doc);
        assert!(ex.comments.raw().is_empty());
        assert!(ex.comments_music.raw().is_empty());
    }

    #[test]
    fn last_general_marker_wins() {
        let doc = RawDocument::from_lines(&[
            "Comentarios: primera",
            "lost",
            "  Comentarios:",
            "kept",
        ]);
        assert_eq!(locate_markers(&doc).general, Some(2));
        let ex = extract(&doc);
        assert_eq!(entries(&ex.comments), vec!["kept"]);
    }

    #[test]
    fn music_marker_before_general_marker() {
        let doc = RawDocument::from_lines(&[
            "Comentarios Música/Vitalizador:",
            "m",
            "Comentarios:",
            "g",
        ]);
        let ex = extract(&doc);
        assert!(ex.comments.raw().is_empty());
        assert_eq!(entries(&ex.comments_music), vec!["m", "Comentarios:", "g"]);
    }

    #[test]
    fn orphan_music_section() {
        let doc = RawDocument::from_lines(&["header", "Comentarios Música/Vitalizador:", " x ", ""]);
        let independent = extract_with(&doc, OrphanMusicPolicy::Independent);
        assert!(independent.comments.is_empty());
        assert_eq!(entries(&independent.comments_music), vec!["x"]);

        let discard = extract_with(&doc, OrphanMusicPolicy::Discard);
        assert!(discard.comments.raw().is_empty());
        assert!(discard.comments_music.raw().is_empty());
    }

    #[test]
    fn markers_at_end_of_document() {
        let doc = RawDocument::from_lines(&["Comentarios:", "Comentarios Música/Vitalizador:"]);
        let ex = extract(&doc);
        assert!(ex.comments.raw().is_empty());
        assert!(ex.comments_music.raw().is_empty());
    }

    #[test]
    fn crlf_text() {
        let doc = RawDocument::from_text("X - NRC 9 - Y\r\nComentarios:\r\n  hola \r\n");
        let ex = extract(&doc);
        assert_eq!(ex.identifier.as_str(), "NRC 9");
        assert_eq!(entries(&ex.comments), vec!["hola"]);
    }

    #[test]
    fn carriage_return_text() {
        let doc = RawDocument::from_text("ACAD102 - NRC 14397 - 2025/10\rComentarios:\rbien\r");
        assert_eq!(doc.len(), 3);
        let ex = extract(&doc);
        assert_eq!(ex.identifier.as_str(), "NRC 14397");
        assert_eq!(entries(&ex.comments), vec!["bien"]);
    }

    #[test]
    fn line_boundaries() {
        let doc = RawDocument::from_text("a\u{0b}b\u{0c}c\u{1c}d\u{1d}e\u{1e}f\u{85}g\u{2028}h\u{2029}i\r\n\r\nj");
        assert_eq!(
            doc.lines(),
            &["a", "b", "c", "d", "e", "f", "g", "h", "i", "", "j"]
        );
        assert_eq!(RawDocument::from_text("a\n").lines(), &["a"]);
        assert_eq!(RawDocument::from_text("a\n\n").lines(), &["a", ""]);
        assert_eq!(RawDocument::from_text("\r\n").lines(), &[""]);
        assert!(RawDocument::from_text("").is_empty());
    }

    #[test]
    fn blank_block_is_empty() {
        let block = CommentBlock::new(&["  ".to_string(), "".to_string()]);
        assert_eq!(block.raw().len(), 2);
        assert!(block.is_empty());
    }

    #[test]
    fn extraction_is_repeatable() {
        let doc = RawDocument::from_text(
            "ACAD102 - NRC 14397 - 2025/10\nComentarios:\nbien\nComentarios Música/Vitalizador:\nsí\n",
        );
        assert_eq!(extract(&doc), extract(&doc));
    }
}
