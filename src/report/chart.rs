// Bar charts of the answers to one question, encoded as PNG.

use std::io::Cursor;

use image::{ImageOutputFormat, RgbImage};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, DrawingAreaErrorKind};
use plotters::prelude::*;
use plotters::style::{register_font, FontStyle};

use crate::report::*;

pub const MIN_CHART_SIZE: u32 = 100;
pub const MAX_CHART_SIZE: u32 = 4096;

// Embedded so that charts render the same with or without system fonts.
static FONT: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");
const FONT_FAMILY: &str = "sans-serif";

const TITLE_SIZE: i32 = 18;
const LABEL_SIZE: i32 = 14;
const CHART_MARGIN: u32 = 12;
const X_LABEL_AREA: u32 = 32;
const Y_LABEL_AREA: u32 = 56;
const BAR_MARGIN: u32 = 12;

pub const Y_DESC: &str = "Alumnos";

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub background: [u8; 3],
    pub bar: [u8; 3],
    pub axis: [u8; 3],
}

impl Default for ChartStyle {
    fn default() -> ChartStyle {
        ChartStyle {
            width: 640,
            height: 480,
            background: [0xff, 0xff, 0xff],
            // #091b2c
            bar: [0x09, 0x1b, 0x2c],
            // #ab172b
            axis: [0xab, 0x17, 0x2b],
        }
    }
}

fn rgb(c: [u8; 3]) -> RGBColor {
    RGBColor(c[0], c[1], c[2])
}

/// Rejects sizes that cannot hold the axes, or that would need a huge buffer.
pub fn check_chart_size(width: u32, height: u32) -> ReportResult<()> {
    if width < MIN_CHART_SIZE || height < MIN_CHART_SIZE {
        whatever!(
            "Chart size {}x{} is too small (minimum {}x{})",
            width,
            height,
            MIN_CHART_SIZE,
            MIN_CHART_SIZE
        )
    }
    if width > MAX_CHART_SIZE || height > MAX_CHART_SIZE {
        whatever!(
            "Chart size {}x{} is too large (maximum {}x{})",
            width,
            height,
            MAX_CHART_SIZE,
            MAX_CHART_SIZE
        )
    }
    Ok(())
}

fn category_label(v: &SegmentValue<u32>) -> String {
    match v {
        SegmentValue::CenterOf(idx) | SegmentValue::Exact(idx) => ResponseCategory::ALL
            .get(*idx as usize)
            .map(|c| c.label().to_string())
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    }
}

fn draw_on<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    row: &SurveyRow,
    style: &ChartStyle,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let axis = rgb(style.axis);
    root.fill(&rgb(style.background))?;

    let last_category = (ResponseCategory::ALL.len() - 1) as u32;
    let mut chart = ChartBuilder::on(root)
        .margin(CHART_MARGIN)
        .caption(&row.question, (FONT_FAMILY, TITLE_SIZE).into_font().color(&BLACK))
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(
            (0u32..last_category).into_segmented(),
            0u64..row.max_count().saturating_add(1),
        )?;

    // Only the left and bottom axes are drawn, without a grid.
    chart
        .configure_mesh()
        .disable_mesh()
        .axis_style(axis)
        .x_labels(ResponseCategory::ALL.len())
        .x_label_formatter(&category_label)
        .x_label_style((FONT_FAMILY, LABEL_SIZE).into_font().color(&axis))
        .y_label_style((FONT_FAMILY, LABEL_SIZE).into_font().color(&axis))
        .y_desc(Y_DESC)
        .axis_desc_style((FONT_FAMILY, LABEL_SIZE).into_font().color(&axis))
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(rgb(style.bar).filled())
            .margin(BAR_MARGIN)
            .data(
                ResponseCategory::ALL
                    .iter()
                    .enumerate()
                    .map(|(idx, c)| (idx as u32, row.count(*c)))
                    .filter(|(_, count)| *count > 0),
            ),
    )?;
    Ok(())
}

/// Draws the five bars of a row, in the order of [ResponseCategory::ALL],
/// with the question as the title.
pub fn draw_bar_chart(row: &SurveyRow, style: &ChartStyle) -> ReportResult<RgbImage> {
    check_chart_size(style.width, style.height)?;
    register_font(FONT_FAMILY, FontStyle::Normal, FONT).map_err(|_| {
        DrawingChartSnafu {
            question: row.question.clone(),
            message: "invalid embedded font".to_string(),
        }
        .build()
    })?;

    let (width, height) = (style.width, style.height);
    let mut buf = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        let drawing_error = |e: DrawingAreaErrorKind<_>| {
            DrawingChartSnafu {
                question: row.question.clone(),
                message: e.to_string(),
            }
            .build()
        };
        draw_on(&root, row, style).map_err(drawing_error)?;
        root.present().map_err(drawing_error)?;
    }
    let img = RgbImage::from_raw(width, height, buf).context(DrawingChartSnafu {
        question: row.question.clone(),
        message: "buffer does not match the chart size",
    })?;
    Ok(img)
}

pub fn render_bar_chart(row: &SurveyRow, style: &ChartStyle) -> ReportResult<Vec<u8>> {
    let img = draw_bar_chart(row, style)?;
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageOutputFormat::Png)
        .context(EncodingPngSnafu {
            question: row.question.clone(),
        })?;
    debug!(
        "render_bar_chart: {:?}: {} bytes",
        row.question,
        buf.get_ref().len()
    );
    Ok(buf.into_inner())
}
