//! Text formatting for chart labels and annotations.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Annotation text tone relative to the cell fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontTone {
    /// Drawn over dark cells.
    Light,
    /// Drawn over light cells.
    Dark,
}

impl FontTone {
    /// Pick the tone for a cell. Values strictly above `threshold` sit on dark fill.
    #[must_use]
    pub fn for_value(value: u64, threshold: u64) -> Self {
        if value > threshold { Self::Light } else { Self::Dark }
    }

    /// CSS color name understood by the chart library.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Light => "white",
            Self::Dark => "black",
        }
    }
}

/// Format a count with comma thousands separators, e.g. `27995` → `"27,995"`.
#[must_use]
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
