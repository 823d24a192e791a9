use crate::report::*;

use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "ACAD102 2025/10";
/// Largest number of answers accepted for one category of a configured row.
pub const MAX_RESPONSE_COUNT: u64 = u32::MAX as u64;

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputSettings {
    #[serde(rename = "reportTitle")]
    pub report_title: Option<String>,
    #[serde(rename = "chartWidth")]
    pub chart_width: Option<u32>,
    #[serde(rename = "chartHeight")]
    pub chart_height: Option<u32>,
}

/// The configuration file, as written by the user.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportConfig {
    #[serde(rename = "outputSettings")]
    pub output_settings: Option<OutputSettings>,
    #[serde(rename = "musicWithoutGeneral")]
    pub music_without_general: Option<String>,
    pub rows: Option<Vec<SurveyRow>>,
}

/// The configuration once validated and merged with the command line.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ReportSettings {
    pub title: String,
    pub chart: ChartStyle,
    pub policy: OrphanMusicPolicy,
    pub rows: Vec<SurveyRow>,
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub title: String,
}

pub fn read_config(path: &str) -> ReportResult<ReportConfig> {
    let contents = fs::read_to_string(path).context(OpeningConfigSnafu { path })?;
    debug!("read_config: content: {:?}", contents);
    let config: ReportConfig =
        serde_json::from_str(contents.as_str()).context(ParsingConfigSnafu { path })?;
    Ok(config)
}

pub fn read_summary(path: &str) -> ReportResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    Ok(js)
}

fn parse_policy(s: &str) -> ReportResult<OrphanMusicPolicy> {
    match s {
        "independent" => Ok(OrphanMusicPolicy::Independent),
        "discard" => Ok(OrphanMusicPolicy::Discard),
        x => {
            whatever!(
                "Cannot use policy {:?} for music comments without general comments (expected 'independent' or 'discard')",
                x
            )
        }
    }
}

/// Resolves the configuration, the command line taking precedence over the file.
pub fn validate_config(config: &ReportConfig, args: &Args) -> ReportResult<ReportSettings> {
    let output = config.output_settings.clone().unwrap_or_default();
    let default_chart = ChartStyle::default();
    let chart = ChartStyle {
        width: output.chart_width.unwrap_or(default_chart.width),
        height: output.chart_height.unwrap_or(default_chart.height),
        ..default_chart
    };
    check_chart_size(chart.width, chart.height)?;

    let policy = match args
        .music_only
        .as_deref()
        .or(config.music_without_general.as_deref())
    {
        Some(s) => parse_policy(s)?,
        None => OrphanMusicPolicy::default(),
    };

    let rows = match config.rows.clone() {
        Some(rows) if rows.is_empty() => {
            whatever!("The configuration lists no rows")
        }
        Some(rows) => {
            if let Some(row) = rows
                .iter()
                .find(|r| r.counts.iter().any(|c| *c > MAX_RESPONSE_COUNT))
            {
                whatever!(
                    "Counts of {:?} exceed the maximum of {} answers: {:?}",
                    row.question,
                    MAX_RESPONSE_COUNT,
                    row.counts
                )
            }
            rows
        }
        None => default_rows(),
    };

    Ok(ReportSettings {
        title: args
            .title
            .clone()
            .or(output.report_title)
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        chart,
        policy,
        rows,
    })
}
