// Primitives for reading the evaluation text files.

use crate::report::*;

const BOM: char = '\u{feff}';

pub fn read_document(path: &str) -> ReportResult<RawDocument> {
    info!("Attempting to read evaluation file {:?}", path);
    let bytes = fs::read(path).context(OpeningInputSnafu { path })?;
    let text = String::from_utf8(bytes).context(DecodingInputSnafu { path })?;
    let doc = RawDocument::from_text(text.strip_prefix(BOM).unwrap_or(&text));
    debug!("read_document: {} lines", doc.len());
    Ok(doc)
}
