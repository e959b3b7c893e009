//! Dashboard configuration.
//!
//! Every field has a default matching the stock page, so an empty JSON object
//! (or no configuration at all) yields a working dashboard. Hosts that embed
//! the charts under different container ids override `targets`.

use serde::Deserialize;

use crate::charts::ChartId;
use crate::consts::{ANNOTATION_FONT_SIZE, CHART_HEIGHT_PX, CONTRAST_THRESHOLD};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Error returned when a configuration cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON text could not be parsed into a [`DashboardConfig`].
    #[error("failed to parse dashboard config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A chart was given a blank target id.
    #[error("chart {0} has an empty target id")]
    EmptyTarget(ChartId),
    /// Two charts were bound to the same target.
    #[error("target '{target}' is bound to both {first} and {second}")]
    DuplicateTarget { target: String, first: ChartId, second: ChartId },
    /// Charts need a positive height.
    #[error("chart height must be positive")]
    ZeroHeight,
}

/// Container id for each chart.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartTargets {
    pub category_breakdown: String,
    pub modality_breakdown: String,
    pub modality_category_heatmap: String,
    pub questions_per_video: String,
    pub question_length: String,
    pub correct_options: String,
    pub non_stopwords: String,
}

impl Default for ChartTargets {
    fn default() -> Self {
        Self {
            category_breakdown: "categoryBreakdownPlot".into(),
            modality_breakdown: "modalityBreakdownPlot".into(),
            modality_category_heatmap: "modalityCategoryHeatmap".into(),
            questions_per_video: "questionsPerVideoPlot".into(),
            question_length: "questionLengthPlot".into(),
            correct_options: "correctOptionsPlot".into(),
            non_stopwords: "nonStopwordsPlot".into(),
        }
    }
}

impl ChartTargets {
    /// The container id bound to `chart`.
    #[must_use]
    pub fn get(&self, chart: ChartId) -> &str {
        match chart {
            ChartId::CategoryBreakdown => &self.category_breakdown,
            ChartId::ModalityBreakdown => &self.modality_breakdown,
            ChartId::ModalityCategoryHeatmap => &self.modality_category_heatmap,
            ChartId::QuestionsPerVideo => &self.questions_per_video,
            ChartId::QuestionLength => &self.question_length,
            ChartId::CorrectOptions => &self.correct_options,
            ChartId::NonStopwords => &self.non_stopwords,
        }
    }
}

/// Typed dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub targets: ChartTargets,
    /// Fixed height applied to every chart, in CSS pixels.
    pub chart_height: u32,
    /// Heatmap cells above this value get light annotation text.
    pub contrast_threshold: u64,
    /// Font size for heatmap cell text and annotations.
    pub annotation_font_size: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            targets: ChartTargets::default(),
            chart_height: CHART_HEIGHT_PX,
            contrast_threshold: CONTRAST_THRESHOLD,
            annotation_font_size: ANNOTATION_FONT_SIZE,
        }
    }
}

impl DashboardConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields,
    /// and the [`DashboardConfig::validate`] errors otherwise.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every chart has its own non-blank target and the height is usable.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chart_height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        for (i, chart) in ChartId::ALL.iter().enumerate() {
            let target = self.targets.get(*chart);
            if target.trim().is_empty() {
                return Err(ConfigError::EmptyTarget(*chart));
            }
            if let Some(first) = ChartId::ALL[..i].iter().find(|c| self.targets.get(**c) == target) {
                return Err(ConfigError::DuplicateTarget {
                    target: target.to_string(),
                    first: *first,
                    second: *chart,
                });
            }
        }
        Ok(())
    }
}
