use clap::Parser;

/// Generates the report of a course evaluation: results table, one bar chart per question, and the comments.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path) The text file exported from the evaluation system. The NRC is read from its first line and
    /// the comments from the sections starting with "Comentarios:" and "Comentarios Música/Vitalizador:".
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (directory path, 'stdout' or empty) If a non-empty directory path other than 'stdout' is given, the charts, the HTML page and the JSON summary
    /// are written into it. Otherwise the JSON summary is printed on the standard output.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path, optional) A JSON configuration file. See the manual for the available options.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path) A reference file containing a JSON summary. If provided, evalreport will
    /// check that the generated summary matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// The title of the report. Overrides the title of the configuration file.
    #[clap(long, value_parser)]
    pub title: Option<String>,

    /// ('independent' or 'discard') What to do with music comments when the file has no general comments.
    /// Overrides the configuration file. The default is 'independent'.
    #[clap(long, value_parser)]
    pub music_only: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
