//! Plugin traits
//!
//! The host hands actions three capabilities: the tracking session to read
//! from, a logger for progress text, and a sink that displays finished tables.

use trackstat_core::{ExportError, SessionError, SinkError, Spot, Table, TrackId};
use crate::ActionContext;
use serde::Serialize;
use std::path::Path;

/// Read access to the host's tracking results.
///
/// The session is expected to stay unchanged while an action runs.
pub trait TrackingSession {
    /// Ids of the tracks currently marked visible, in the session's own order
    fn filtered_track_ids(&self) -> Result<Vec<TrackId>, SessionError>;

    /// Spots belonging to a track. Order is unspecified.
    fn track_spots(&self, track_id: TrackId) -> Result<Vec<&Spot>, SessionError>;

    /// Whether values of `feature` are semantically integral
    fn feature_is_int(&self, feature: &str) -> Result<bool, SessionError>;

    fn image_folder(&self) -> &Path;

    fn image_file_name(&self) -> &str;
}

/// Sink for human-readable progress messages
pub trait Logger {
    fn log(&self, message: &str);
}

/// Consumer of finished tables
pub trait TableSink {
    fn show(&mut self, table: Table, title: &str) -> Result<(), SinkError>;
}

/// Metadata for an action plugin
#[derive(Debug, Clone, Serialize)]
pub struct ActionMeta {
    pub key: &'static str,
    pub name: &'static str,
    pub info_text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
}

/// Host-dispatchable action
pub trait ActionPlugin: Send + Sync {
    fn meta(&self) -> ActionMeta;
    fn execute(&self, ctx: &mut ActionContext<'_>) -> Result<(), ExportError>;
}
