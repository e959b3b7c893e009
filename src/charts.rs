//! The seven dashboard charts and the builders that turn tables into figures.
//!
//! Each builder reads one embedded table (or a set of split tables) and
//! produces a [`Figure`] in the table's display order. Cross-split charts take
//! their axis from the train table and align the val/test series to it.

use std::fmt;

use crate::config::DashboardConfig;
use crate::consts::{
    HEATMAP_TICK_ANGLE_DEG, MARGIN_BOTTOM_PX, MARGIN_BOTTOM_WIDE_LABELS_PX, MARGIN_LEFT_HEATMAP_PX, MARGIN_LEFT_PX,
    MARGIN_RIGHT_PX, MARGIN_TOP_PX,
};
use crate::figure::{
    Annotation, Axis, BarMode, BarTrace, ColorBar, ColorStop, Figure, Font, HeatmapTrace, Layout, Margin, Marker,
    Trace,
};
use crate::format::{FontTone, format_count};
use crate::palette::{HEATMAP_SCALE, series_color};
use crate::stats::{
    CATEGORY_BY_SPLIT, CORRECT_OPTIONS, CrossTable, HEATMAP_CATEGORIES, HEATMAP_MODALITIES, MODALITY_BY_SPLIT,
    MODALITY_CATEGORY, MetricTable, NON_STOPWORDS, QUESTION_LENGTH, QUESTIONS_PER_VIDEO, Split, SplitTables,
};

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

/// Identity of a dashboard chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartId {
    CategoryBreakdown,
    ModalityBreakdown,
    ModalityCategoryHeatmap,
    QuestionsPerVideo,
    QuestionLength,
    CorrectOptions,
    NonStopwords,
}

impl ChartId {
    /// Every chart, in render order.
    pub const ALL: [ChartId; 7] = [
        ChartId::CategoryBreakdown,
        ChartId::ModalityBreakdown,
        ChartId::ModalityCategoryHeatmap,
        ChartId::QuestionsPerVideo,
        ChartId::QuestionLength,
        ChartId::CorrectOptions,
        ChartId::NonStopwords,
    ];

    /// Stable snake-case name, matching the configuration keys.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CategoryBreakdown => "category_breakdown",
            Self::ModalityBreakdown => "modality_breakdown",
            Self::ModalityCategoryHeatmap => "modality_category_heatmap",
            Self::QuestionsPerVideo => "questions_per_video",
            Self::QuestionLength => "question_length",
            Self::CorrectOptions => "correct_options",
            Self::NonStopwords => "non_stopwords",
        }
    }

    /// Which charting primitive draws this chart.
    #[must_use]
    pub fn kind(self) -> ChartKind {
        match self {
            Self::CategoryBreakdown | Self::ModalityBreakdown => ChartKind::GroupedBar,
            Self::ModalityCategoryHeatmap => ChartKind::Heatmap,
            Self::QuestionsPerVideo | Self::QuestionLength | Self::CorrectOptions | Self::NonStopwords => {
                ChartKind::Bar
            }
        }
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Charting primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// One bar series per split, grouped side by side.
    GroupedBar,
    /// A single bar series.
    Bar,
    /// Row × column matrix with annotated cells.
    Heatmap,
}

impl ChartKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GroupedBar => "grouped-bar",
            Self::Bar => "simple-bar",
            Self::Heatmap => "heatmap",
        }
    }
}

/// A chart bound to its render target.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub id: ChartId,
    pub kind: ChartKind,
    pub target: String,
    pub figure: Figure,
}

/// Build every chart for `config`, in render order.
#[must_use]
pub fn build_all(config: &DashboardConfig) -> Vec<Chart> {
    ChartId::ALL.iter().map(|id| build(*id, config)).collect()
}

/// Build one chart.
#[must_use]
pub fn build(id: ChartId, config: &DashboardConfig) -> Chart {
    let height = config.chart_height;
    let figure = match id {
        ChartId::CategoryBreakdown => {
            grouped_bar_figure(&CATEGORY_BY_SPLIT, "Category Breakdown by Split", "Category", height)
        }
        ChartId::ModalityBreakdown => {
            grouped_bar_figure(&MODALITY_BY_SPLIT, "Modality Breakdown by Split", "Modality", height)
        }
        ChartId::ModalityCategoryHeatmap => heatmap_figure(
            &MODALITY_CATEGORY,
            &HEATMAP_MODALITIES,
            &HEATMAP_CATEGORIES,
            &HeatmapStyle {
                threshold: config.contrast_threshold,
                font_size: config.annotation_font_size,
                height,
            },
        ),
        ChartId::QuestionsPerVideo => bar_figure(
            &QUESTIONS_PER_VIDEO,
            &BarStyle {
                title: "Questions per Video Distribution",
                x_title: "Number of Questions per Video",
                y_title: "Number of Videos",
                color_index: 0,
                x_range: Some([0.0, 16.0]),
                margin_bottom: MARGIN_BOTTOM_PX,
                height,
            },
        ),
        ChartId::QuestionLength => bar_figure(
            &QUESTION_LENGTH,
            &BarStyle {
                title: "Question Length Distribution",
                x_title: "Question Length (words)",
                y_title: "Number of Questions",
                color_index: 1,
                x_range: Some([2.0, 31.0]),
                margin_bottom: MARGIN_BOTTOM_PX,
                height,
            },
        ),
        ChartId::CorrectOptions => bar_figure(
            &CORRECT_OPTIONS,
            &BarStyle {
                title: "Top 20 Most Frequent Correct Answer Options",
                x_title: "Answer Option",
                y_title: "Frequency",
                color_index: 2,
                x_range: None,
                margin_bottom: MARGIN_BOTTOM_WIDE_LABELS_PX,
                height,
            },
        ),
        ChartId::NonStopwords => bar_figure(
            &NON_STOPWORDS,
            &BarStyle {
                title: "Top 20 Most Frequent Non-stopwords in Questions",
                x_title: "Word",
                y_title: "Frequency",
                color_index: 3,
                x_range: None,
                margin_bottom: MARGIN_BOTTOM_WIDE_LABELS_PX,
                height,
            },
        ),
    };
    Chart { id, kind: id.kind(), target: config.targets.get(id).to_string(), figure }
}

// =============================================================
// Builders
// =============================================================

/// Layout knobs for a single-series bar chart.
#[derive(Debug, Clone, Copy)]
pub struct BarStyle<'a> {
    pub title: &'a str,
    pub x_title: &'a str,
    pub y_title: &'a str,
    pub color_index: usize,
    pub x_range: Option<[f64; 2]>,
    pub margin_bottom: u32,
    pub height: u32,
}

/// Layout knobs for the annotated heatmap.
#[derive(Debug, Clone, Copy)]
pub struct HeatmapStyle {
    pub threshold: u64,
    pub font_size: u32,
    pub height: u32,
}

/// One bar per table entry, in table order.
#[must_use]
pub fn bar_figure(table: &MetricTable, style: &BarStyle<'_>) -> Figure {
    let trace = BarTrace {
        name: None,
        x: owned(&table.labels()),
        y: table.counts(),
        marker: Marker { color: series_color(style.color_index).to_string() },
    };
    let mut xaxis = Axis::titled(style.x_title);
    xaxis.range = style.x_range;
    Figure {
        data: vec![Trace::Bar(trace)],
        layout: base_layout(
            style.title,
            xaxis,
            Axis::titled(style.y_title),
            margin(MARGIN_LEFT_PX, style.margin_bottom),
            style.height,
        ),
    }
}

/// One series per split over the train table's labels.
///
/// A label the train table has but another split lacks is drawn as 0.
#[must_use]
pub fn grouped_bar_figure(tables: &SplitTables, title: &str, x_title: &str, height: u32) -> Figure {
    let axis = tables.axis();
    let data = Split::ALL
        .iter()
        .enumerate()
        .map(|(i, split)| {
            Trace::Bar(BarTrace {
                name: Some(split.as_str().to_string()),
                x: owned(&axis),
                y: aligned_counts(tables.get(*split), &axis, *split),
                marker: Marker { color: series_color(i).to_string() },
            })
        })
        .collect();
    let mut layout = base_layout(
        title,
        Axis::titled(x_title),
        Axis::titled("Count"),
        margin(MARGIN_LEFT_PX, MARGIN_BOTTOM_PX),
        height,
    );
    layout.barmode = Some(BarMode::Group);
    Figure { data, layout }
}

/// Annotated count matrix over explicit row and column orders.
#[must_use]
pub fn heatmap_figure(table: &CrossTable, rows: &[&str], cols: &[&str], style: &HeatmapStyle) -> Figure {
    let z = table.matrix(rows, cols);
    let trace = HeatmapTrace {
        z: z.clone(),
        x: owned(cols),
        y: owned(rows),
        colorscale: HEATMAP_SCALE
            .iter()
            .map(|(stop, color)| ColorStop(*stop, (*color).to_string()))
            .collect(),
        showscale: true,
        colorbar: ColorBar { title: "Count".into() },
        text: z.clone(),
        texttemplate: "%{text:,}".into(),
        textfont: Font { color: None, size: style.font_size },
        hoverongaps: false,
        hoverinfo: "text".into(),
        textposition: "middle center".into(),
    };
    let mut xaxis = Axis::titled("Category");
    xaxis.tickangle = Some(HEATMAP_TICK_ANGLE_DEG);
    let mut layout = base_layout(
        "Modality-Category Distribution",
        xaxis,
        Axis::titled("Modality"),
        margin(MARGIN_LEFT_HEATMAP_PX, MARGIN_BOTTOM_PX),
        style.height,
    );
    layout.annotations = cell_annotations(rows, cols, &z, style);
    Figure { data: vec![Trace::Heatmap(trace)], layout }
}

/// One annotation per cell with the comma-grouped value and a contrast-picked font color.
#[must_use]
pub fn cell_annotations(rows: &[&str], cols: &[&str], z: &[Vec<u64>], style: &HeatmapStyle) -> Vec<Annotation> {
    rows.iter()
        .zip(z)
        .flat_map(|(row, values)| {
            cols.iter().zip(values).map(move |(col, value)| Annotation {
                x: (*col).to_string(),
                y: (*row).to_string(),
                text: format_count(*value),
                showarrow: false,
                font: Font {
                    color: Some(FontTone::for_value(*value, style.threshold).css().to_string()),
                    size: style.font_size,
                },
            })
        })
        .collect()
}

fn aligned_counts(table: &MetricTable, axis: &[&str], split: Split) -> Vec<u64> {
    axis.iter()
        .map(|label| {
            table.get(label).unwrap_or_else(|| {
                log::warn!("{} split has no count for '{label}'; drawing 0", split.as_str());
                0
            })
        })
        .collect()
}

fn base_layout(title: &str, xaxis: Axis, yaxis: Axis, margin: Margin, height: u32) -> Layout {
    Layout {
        title: title.to_string(),
        barmode: None,
        xaxis,
        yaxis,
        height,
        responsive: true,
        autosize: true,
        margin,
        annotations: Vec::new(),
        width: None,
    }
}

fn margin(left: u32, bottom: u32) -> Margin {
    Margin { t: MARGIN_TOP_PX, b: bottom, l: left, r: MARGIN_RIGHT_PX }
}

fn owned(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| (*label).to_string()).collect()
}
