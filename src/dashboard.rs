//! The dashboard renderer.
//!
//! Two entry points drive it, both called by the host environment:
//!
//! - [`Dashboard::on_ready`] once the display surfaces exist. Renders every
//!   chart into its target. A missing target is reported and skipped; the
//!   other charts still render.
//! - [`Dashboard::on_resize`] whenever the viewport changes. Pushes each
//!   rendered chart's container width into its layout. Ignored until
//!   `on_ready` has run.

use std::collections::BTreeMap;

use crate::charts::{self, Chart, ChartId};
use crate::config::{ConfigError, DashboardConfig};
use crate::figure::LayoutUpdate;
use crate::host::{ChartHost, HostError};

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// Container widths keyed by target id, in CSS pixels.
pub type TargetWidths = BTreeMap<String, f64>;

/// A chart that could not be rendered.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// The configured container id does not resolve to a surface.
    #[error("chart {chart}: render target '{target}' does not exist")]
    MissingTarget { chart: ChartId, target: String },
    /// The host failed to render the chart.
    #[error("chart {chart}: render into '{target}' failed: {source}")]
    Render {
        chart: ChartId,
        target: String,
        #[source]
        source: HostError,
    },
}

/// Outcome of [`Dashboard::on_ready`].
#[derive(Debug, Default)]
pub struct ReadyReport {
    /// Charts now showing in their targets, in render order.
    pub rendered: Vec<ChartId>,
    /// Charts that could not be shown.
    pub failures: Vec<DashboardError>,
}

impl ReadyReport {
    /// True when every chart rendered.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Pending,
    Ready { rendered: Vec<ChartId> },
}

/// Binds the dataset charts to host surfaces and keeps them sized.
#[derive(Debug)]
pub struct Dashboard {
    config: DashboardConfig,
    charts: Vec<Chart>,
    phase: Phase,
}

impl Dashboard {
    /// Validate `config` and build every chart.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`DashboardConfig::validate`].
    pub fn new(config: DashboardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let charts = charts::build_all(&config);
        Ok(Self { config, charts, phase: Phase::Pending })
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Every chart, in render order.
    #[must_use]
    pub fn charts(&self) -> &[Chart] {
        &self.charts
    }

    #[must_use]
    pub fn chart(&self, id: ChartId) -> Option<&Chart> {
        self.charts.iter().find(|chart| chart.id == id)
    }

    /// Whether [`Dashboard::on_ready`] has run.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self.phase, Phase::Ready { .. })
    }

    /// Charts that rendered successfully. Empty before ready.
    #[must_use]
    pub fn rendered(&self) -> &[ChartId] {
        match &self.phase {
            Phase::Pending => &[],
            Phase::Ready { rendered } => rendered,
        }
    }

    /// Render every chart into its target.
    ///
    /// Failures are logged once each and collected in the report; they never
    /// stop the remaining charts. Calling this again after the first time
    /// does nothing and returns an empty report.
    pub fn on_ready<H: ChartHost>(&mut self, host: &mut H) -> ReadyReport {
        if self.is_ready() {
            log::debug!("dashboard already initialized; ignoring ready event");
            return ReadyReport::default();
        }

        let mut report = ReadyReport::default();
        for chart in &self.charts {
            match render_chart(host, chart) {
                Ok(()) => {
                    log::debug!("rendered {} ({}) into '{}'", chart.id, chart.kind.as_str(), chart.target);
                    report.rendered.push(chart.id);
                }
                Err(err) => {
                    log::warn!("{err}");
                    report.failures.push(err);
                }
            }
        }

        log::info!(
            "dashboard ready: {} of {} charts rendered",
            report.rendered.len(),
            self.charts.len()
        );
        self.phase = Phase::Ready { rendered: report.rendered.clone() };
        report
    }

    /// Apply container widths to the rendered charts.
    ///
    /// Only the layout width changes. Charts whose target is absent from
    /// `widths` keep their current width. Returns how many charts were
    /// updated; zero before [`Dashboard::on_ready`].
    pub fn on_resize<H: ChartHost>(&self, host: &mut H, widths: &TargetWidths) -> usize {
        let Phase::Ready { rendered } = &self.phase else {
            log::debug!("resize before ready; ignoring");
            return 0;
        };

        let mut updated = 0;
        for chart in self.charts.iter().filter(|chart| rendered.contains(&chart.id)) {
            let Some(&width) = widths.get(&chart.target) else {
                continue;
            };
            match host.relayout(&chart.target, &LayoutUpdate { width }) {
                Ok(()) => updated += 1,
                Err(err) => log::warn!("chart {}: relayout of '{}' failed: {err}", chart.id, chart.target),
            }
        }
        updated
    }

    /// Read the current width of every chart target the host knows.
    #[must_use]
    pub fn measure<H: ChartHost>(&self, host: &H) -> TargetWidths {
        self.charts
            .iter()
            .filter_map(|chart| host.target_width(&chart.target).map(|width| (chart.target.clone(), width)))
            .collect()
    }
}

fn render_chart<H: ChartHost>(host: &mut H, chart: &Chart) -> Result<(), DashboardError> {
    if !host.has_target(&chart.target) {
        return Err(DashboardError::MissingTarget { chart: chart.id, target: chart.target.clone() });
    }
    host.render(&chart.target, &chart.figure).map_err(|source| match source {
        HostError::MissingTarget(target) => DashboardError::MissingTarget { chart: chart.id, target },
        source => DashboardError::Render { chart: chart.id, target: chart.target.clone(), source },
    })
}
