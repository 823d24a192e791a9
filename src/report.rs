use log::{debug, info, warn};

use snafu::{prelude::*, Snafu};
use survey_report::*;

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;

pub mod chart;
pub mod config_reader;
pub mod io_text;
pub mod render_html;

use crate::report::chart::*;
use crate::report::config_reader::*;
use crate::report::render_html::*;

/// Location that prints the summary instead of writing a report directory.
pub const STDOUT: &str = "stdout";
pub const HTML_FILE_NAME: &str = "index.html";
pub const SUMMARY_FILE_NAME: &str = "summary.json";

#[derive(Debug, Snafu)]
pub enum ReportError {
    #[snafu(display("Por favor, sube primero un archivo .txt para continuar. (missing --input)"))]
    MissingInput {},
    #[snafu(display("Error opening evaluation file {path}"))]
    OpeningInput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Evaluation file {path} is not valid UTF-8"))]
    DecodingInput {
        source: std::string::FromUtf8Error,
        path: String,
    },
    #[snafu(display("Error opening configuration file {path}"))]
    OpeningConfig {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing configuration file {path}"))]
    ParsingConfig {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Error opening reference file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error reading or writing JSON"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Error creating output directory {path}"))]
    CreatingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error writing file {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error drawing the chart of {question:?}: {message}"))]
    DrawingChart { question: String, message: String },
    #[snafu(display("Error encoding the chart of {question:?}"))]
    EncodingPng {
        source: image::ImageError,
        question: String,
    },
    #[snafu(display("Difference detected between calculated summary and reference summary"))]
    ReferenceMismatch {},

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type ReportResult<T> = Result<T, ReportError>;

fn comments_to_json(block: &CommentBlock) -> Vec<JSValue> {
    block.entries().map(|c| json!(c)).collect()
}

fn rows_to_json(rows: &[SurveyRow]) -> Vec<JSValue> {
    let mut l: Vec<JSValue> = Vec::new();
    for (idx, row) in rows.iter().enumerate() {
        let mut js = json!({ "question": row.question });
        for category in ResponseCategory::ALL.iter() {
            js[category.label()] = json!(row.count(*category));
        }
        js["chart"] = json!(chart_file_name(idx, &row.question));
        l.push(js);
    }
    l
}

pub fn build_summary_js(settings: &ReportSettings, input: &ReportInput) -> JSValue {
    let c = OutputConfig {
        title: settings.title.clone(),
    };
    json!({
        "config": c,
        "results": {
            "nrc": input.identifier.as_str(),
            "respondents": input.respondents,
            "rows": rows_to_json(&input.rows),
            "comments": comments_to_json(&input.comments),
            "commentsMusic": comments_to_json(&input.comments_music),
        }
    })
}

fn write_file(path: &Path, contents: &[u8]) -> ReportResult<()> {
    debug!("write_file: {:?}: {} bytes", path, contents.len());
    fs::write(path, contents).context(WritingOutputSnafu {
        path: path.display().to_string(),
    })
}

/// Writes the charts, the HTML page and the JSON summary into `out_dir`.
pub fn write_report(
    out_dir: &str,
    settings: &ReportSettings,
    input: &ReportInput,
    summary: &str,
) -> ReportResult<()> {
    let root = PathBuf::from(out_dir);
    fs::create_dir_all(&root).context(CreatingOutputSnafu { path: out_dir })?;

    for (idx, row) in input.rows.iter().enumerate() {
        let png = render_bar_chart(row, &settings.chart)?;
        write_file(&root.join(chart_file_name(idx, &row.question)), &png)?;
    }

    let html = render_html(
        input,
        &HtmlOptions {
            title: settings.title.clone(),
        },
    );
    write_file(&root.join(HTML_FILE_NAME), html.as_bytes())?;
    write_file(&root.join(SUMMARY_FILE_NAME), summary.as_bytes())?;
    info!(
        "Report written to {:?} ({} charts)",
        out_dir,
        input.rows.len()
    );
    Ok(())
}

fn check_reference(reference_path: &str, pretty_js_stats: &str) -> ReportResult<()> {
    let summary_ref = read_summary(reference_path)?;
    debug!("summary: {:?}", summary_ref);
    let pretty_js_summary_ref =
        serde_json::to_string_pretty(&summary_ref).context(ParsingJsonSnafu {})?;
    if pretty_js_summary_ref != pretty_js_stats {
        warn!("Found differences with the reference string");
        print_diff(pretty_js_summary_ref.as_str(), pretty_js_stats, "\n");
        return ReferenceMismatchSnafu {}.fail();
    }
    Ok(())
}

/// The directory to write the report into, if any. An empty location or
/// [STDOUT] prints the summary instead.
pub fn report_dir(out: Option<&str>) -> Option<&str> {
    match out {
        Some(out) if !out.is_empty() && out != STDOUT => Some(out),
        _ => None,
    }
}

pub fn run_report(args: &Args) -> ReportResult<()> {
    let input_path = args.input.clone().context(MissingInputSnafu {})?;

    let config = match args.config.as_deref() {
        Some(p) => read_config(p)?,
        None => ReportConfig::default(),
    };
    info!("config: {:?}", config);
    let settings = validate_config(&config, args)?;

    let doc = io_text::read_document(&input_path)?;
    let input = prepare_report(&doc, settings.rows.clone(), settings.policy);

    let result_js = build_summary_js(&settings, &input);
    let pretty_js_stats = serde_json::to_string_pretty(&result_js).context(ParsingJsonSnafu {})?;

    match report_dir(args.out.as_deref()) {
        Some(out) => {
            write_report(out, &settings, &input, &pretty_js_stats)?;
        }
        None => {
            println!("{}", pretty_js_stats);
        }
    }

    // The reference summary, if provided for comparison
    if let Some(reference_path) = args.reference.as_deref() {
        check_reference(reference_path, &pretty_js_stats)?;
    }

    Ok(())
}
