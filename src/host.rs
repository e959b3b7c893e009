//! The chart host: whatever owns the display surfaces and the charting library.
//!
//! The dashboard never touches a DOM or a drawing API directly. It talks to a
//! [`ChartHost`], which resolves target ids to surfaces, renders figures into
//! them and applies layout updates. The browser host lives in `web`;
//! [`MemoryHost`] keeps surfaces in memory for headless use and tests.

use std::collections::BTreeMap;

use crate::figure::{Figure, LayoutUpdate};

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

/// Error returned by [`ChartHost`] operations.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// No display surface exists under this id.
    #[error("render target '{0}' not found")]
    MissingTarget(String),
    /// The surface exists but has no chart to update.
    #[error("render target '{0}' has no chart")]
    NotRendered(String),
    /// The figure could not be encoded for the charting library.
    #[error("failed to encode chart payload: {0}")]
    Encode(#[from] serde_json::Error),
    /// The charting library rejected the call.
    #[error("chart library error: {0}")]
    Library(String),
}

/// Display surfaces plus a charting library.
pub trait ChartHost {
    /// Whether a surface exists under `target`.
    fn has_target(&self, target: &str) -> bool;

    /// Draw `figure` into `target`, replacing whatever was there.
    ///
    /// # Errors
    ///
    /// [`HostError::MissingTarget`] when the surface does not exist, or a
    /// library/encoding error.
    fn render(&mut self, target: &str, figure: &Figure) -> Result<(), HostError>;

    /// Apply a partial layout update to the chart in `target`.
    ///
    /// # Errors
    ///
    /// [`HostError::MissingTarget`] or [`HostError::NotRendered`] when there is
    /// nothing to update, or a library/encoding error.
    fn relayout(&mut self, target: &str, update: &LayoutUpdate) -> Result<(), HostError>;

    /// Current rendered width of `target` in CSS pixels.
    fn target_width(&self, target: &str) -> Option<f64>;
}

/// One in-memory display surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Surface {
    pub width: f64,
    pub figure: Option<Figure>,
    pub render_count: usize,
}

/// [`ChartHost`] backed by a map of surfaces.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    surfaces: BTreeMap<String, Surface>,
}

impl MemoryHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A host with one empty surface of `width` per target.
    pub fn with_targets<I, S>(targets: I, width: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut host = Self::new();
        for target in targets {
            host.add_target(target, width);
        }
        host
    }

    /// Create (or reset) a surface.
    pub fn add_target(&mut self, target: impl Into<String>, width: f64) {
        self.surfaces.insert(target.into(), Surface { width, ..Surface::default() });
    }

    /// Remove a surface, as if its container left the page.
    pub fn remove_target(&mut self, target: &str) -> Option<Surface> {
        self.surfaces.remove(target)
    }

    /// Change a surface's container width. Returns false if the target is unknown.
    pub fn set_width(&mut self, target: &str, width: f64) -> bool {
        match self.surfaces.get_mut(target) {
            Some(surface) => {
                surface.width = width;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn surface(&self, target: &str) -> Option<&Surface> {
        self.surfaces.get(target)
    }

    /// The figure last rendered into `target`, with any relayouts applied.
    #[must_use]
    pub fn figure(&self, target: &str) -> Option<&Figure> {
        self.surfaces.get(target).and_then(|surface| surface.figure.as_ref())
    }

    /// Target ids in sorted order.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.surfaces.keys().map(String::as_str)
    }
}

impl ChartHost for MemoryHost {
    fn has_target(&self, target: &str) -> bool {
        self.surfaces.contains_key(target)
    }

    fn render(&mut self, target: &str, figure: &Figure) -> Result<(), HostError> {
        let surface = self
            .surfaces
            .get_mut(target)
            .ok_or_else(|| HostError::MissingTarget(target.to_string()))?;
        surface.figure = Some(figure.clone());
        surface.render_count += 1;
        Ok(())
    }

    fn relayout(&mut self, target: &str, update: &LayoutUpdate) -> Result<(), HostError> {
        let surface = self
            .surfaces
            .get_mut(target)
            .ok_or_else(|| HostError::MissingTarget(target.to_string()))?;
        let figure = surface
            .figure
            .as_mut()
            .ok_or_else(|| HostError::NotRendered(target.to_string()))?;
        figure.relayout(update);
        Ok(())
    }

    fn target_width(&self, target: &str) -> Option<f64> {
        self.surfaces.get(target).map(|surface| surface.width)
    }
}
