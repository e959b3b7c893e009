//! Colors shared across charts.

/// Categorical series colors. Index by split or series position.
pub const SERIES_COLORS: [&str; 10] = [
    "#4c72b0", "#dd8452", "#55a868", "#c44e52", "#8172b3", "#937860", "#da8bc3", "#8c8c8c", "#ccb974", "#64b5cd",
];

/// Heatmap colorscale stops, light to dark blue.
pub const HEATMAP_SCALE: [(f64, &str); 6] = [
    (0.0, "#e6f3ff"),
    (0.2, "#b3d9ff"),
    (0.4, "#80bfff"),
    (0.6, "#4da6ff"),
    (0.8, "#1a8cff"),
    (1.0, "#0066cc"),
];

/// Series color at `index`, wrapping past the end of the palette.
#[must_use]
pub fn series_color(index: usize) -> &'static str {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}
