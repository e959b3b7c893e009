//! Shared numeric constants for chart layout.

// ── Layout ──────────────────────────────────────────────────────

/// Fixed chart height in CSS pixels.
pub const CHART_HEIGHT_PX: u32 = 450;

/// Top margin shared by every chart.
pub const MARGIN_TOP_PX: u32 = 60;

/// Bottom margin for charts with short x labels.
pub const MARGIN_BOTTOM_PX: u32 = 100;

/// Bottom margin for charts whose x labels are words or phrases.
pub const MARGIN_BOTTOM_WIDE_LABELS_PX: u32 = 150;

/// Left margin for bar charts.
pub const MARGIN_LEFT_PX: u32 = 80;

/// Left margin for the heatmap, which carries modality names on the y axis.
pub const MARGIN_LEFT_HEATMAP_PX: u32 = 100;

/// Right margin shared by every chart.
pub const MARGIN_RIGHT_PX: u32 = 60;

/// Heatmap x tick rotation in degrees.
pub const HEATMAP_TICK_ANGLE_DEG: i32 = -45;

// ── Annotations ─────────────────────────────────────────────────

/// Cell values strictly above this get light annotation text.
pub const CONTRAST_THRESHOLD: u64 = 15_000;

/// Font size for heatmap cell text and annotations.
pub const ANNOTATION_FONT_SIZE: u32 = 12;
