/// Longest stem kept from the question text.
const MAX_STEM_CHARS: usize = 30;

/// Download name of the chart for one question.
///
/// ```
/// use survey_report::chart_file_name;
///
/// assert_eq!(
///     chart_file_name(3, "Mi participación en clases fue activa"),
///     "grafica_3_Mi_participacion_en_clases_fue.png"
/// );
/// ```
pub fn chart_file_name(row_index: usize, question: &str) -> String {
    let safe: String = question.chars().filter_map(fold_char).collect();
    let stem: String = safe.chars().take(MAX_STEM_CHARS).collect();
    format!("grafica_{}_{}.png", row_index, stem)
}

// Maps a character of the question to its file name form, or drops it.
fn fold_char(c: char) -> Option<char> {
    match c {
        ' ' => Some('_'),
        'á' => Some('a'),
        'é' => Some('e'),
        'í' => Some('i'),
        'ó' => Some('o'),
        'ú' | 'ü' => Some('u'),
        'ñ' => Some('n'),
        'Á' => Some('A'),
        'É' => Some('E'),
        'Í' => Some('I'),
        'Ó' => Some('O'),
        'Ú' | 'Ü' => Some('U'),
        'Ñ' => Some('N'),
        c if c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.' => Some(c),
        _ => None,
    }
}
