//! Chart-library input model.
//!
//! These types mirror the Plotly.js figure schema closely enough that
//! `serde_json` output can be handed to `Plotly.newPlot` as-is: `data` is a
//! list of traces tagged by `type`, `layout` is a flat object. Optional
//! fields are omitted from the JSON when unset so the library applies its own
//! defaults.

use serde::Serialize;

#[cfg(test)]
#[path = "figure_test.rs"]
mod figure_test;

/// A complete chart: traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    /// Apply a partial layout update in place.
    pub fn relayout(&mut self, update: &LayoutUpdate) {
        self.layout.width = Some(update.width);
    }

    /// Serialize the whole figure as `{"data": [...], "layout": {...}}`.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// One series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar(BarTrace),
    Heatmap(HeatmapTrace),
}

/// Bars over categorical x labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    /// Legend entry; single-series charts leave it unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: Vec<String>,
    pub y: Vec<u64>,
    pub marker: Marker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub color: String,
}

/// Row-major count matrix with per-cell text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapTrace {
    /// One inner vector per `y` label, one value per `x` label.
    pub z: Vec<Vec<u64>>,
    pub x: Vec<String>,
    pub y: Vec<String>,
    pub colorscale: Vec<ColorStop>,
    pub showscale: bool,
    pub colorbar: ColorBar,
    pub text: Vec<Vec<u64>>,
    pub texttemplate: String,
    pub textfont: Font,
    pub hoverongaps: bool,
    pub hoverinfo: String,
    pub textposition: String,
}

/// `[position, color]` pair on a colorscale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorStop(pub f64, pub String);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBar {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    Group,
}

/// Figure layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<BarMode>,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub height: u32,
    pub responsive: bool,
    pub autosize: bool,
    pub margin: Margin,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    /// Set by relayout once the container width is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickangle: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}

impl Axis {
    #[must_use]
    pub fn titled(title: &str) -> Self {
        Self { title: title.to_string(), tickangle: None, range: None }
    }
}

/// Plot margins in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Margin {
    pub t: u32,
    pub b: u32,
    pub l: u32,
    pub r: u32,
}

/// Text pinned to a categorical (x, y) position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub x: String,
    pub y: String,
    pub text: String,
    pub showarrow: bool,
    pub font: Font,
}

/// Partial layout sent on resize. Only the width changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutUpdate {
    pub width: f64,
}
