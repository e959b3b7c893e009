//! Static dataset dashboard for an audio-visual question-answering corpus.
//!
//! The crate binds a handful of pre-computed count tables (question categories,
//! modalities, question lengths, frequent answers and words) to chart surfaces
//! through a charting library. It owns the data, the table-to-figure
//! transformation and the render/resize lifecycle; drawing pixels is left to
//! the host's charting library. In the browser the host is Plotly.js and the
//! wiring lives in [`web`] (feature `hydrate`).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`stats`] | Embedded count tables in display order |
//! | [`palette`] | Series colors and the heatmap colorscale |
//! | [`format`] | Count text and annotation contrast |
//! | [`figure`] | Chart-library input model (traces, layout) |
//! | [`charts`] | The seven charts and their builders |
//! | [`config`] | Target ids and layout knobs |
//! | [`host`] | [`host::ChartHost`] trait and the in-memory host |
//! | [`dashboard`] | [`dashboard::Dashboard`]: ready and resize entry points |
//! | [`consts`] | Shared layout constants |

pub mod charts;
pub mod config;
pub mod consts;
pub mod dashboard;
pub mod figure;
pub mod format;
pub mod host;
pub mod palette;
pub mod stats;
#[cfg(feature = "hydrate")]
pub mod web;

pub use charts::{Chart, ChartId, ChartKind};
pub use config::{ConfigError, DashboardConfig};
pub use dashboard::{Dashboard, DashboardError, ReadyReport, TargetWidths};
pub use host::{ChartHost, HostError, MemoryHost};
