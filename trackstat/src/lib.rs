//! Trackstat - Track statistics export
//!
//! Dispatches export actions against a host's tracking session and provides
//! ready-made sinks and loggers for hosts that have none of their own.

mod render;
mod sinks;
pub mod logging;

pub use render::{Renderer, NumberFormat, TableLayout};
pub use sinks::{TextSink, JsonSink};
pub use logging::{init_logging, TracingLogger};
pub use trackstat_plugin::memory::{TrackModel, MemorySink, BufferLogger};

use trackstat_core::ExportError;
use trackstat_plugin::{ActionContext, ActionRegistry, Logger, TableSink, TrackingSession};
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Registry with every built-in action
pub fn standard_registry() -> ActionRegistry {
    trackstat_cellprofiler::load_cellprofiler_actions(ActionRegistry::new())
}

/// Main Trackstat engine
pub struct Trackstat {
    registry: Arc<ActionRegistry>,
}

impl Trackstat {
    pub fn new(registry: ActionRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn with_standard_actions() -> Self {
        Self::new(standard_registry())
    }

    /// Run the action registered under `key`
    pub fn run(
        &self,
        key: &str,
        session: &dyn TrackingSession,
        logger: &dyn Logger,
        sink: &mut dyn TableSink,
    ) -> Result<(), ExportError> {
        let mut ctx = ActionContext::new(session, logger, sink);
        self.registry.execute(key, &mut ctx).inspect_err(|e| {
            tracing::warn!(action = key, code = %e.code, "action failed: {}", e.message);
        })
    }

    /// Run the CellProfiler-style track statistics export
    pub fn export_statistics(
        &self,
        session: &dyn TrackingSession,
        logger: &dyn Logger,
        sink: &mut dyn TableSink,
    ) -> Result<(), ExportError> {
        self.run(trackstat_cellprofiler::KEY, session, logger, sink)
    }

    pub fn help(&self, key: Option<&str>) -> JsonValue {
        self.registry.help(key)
    }

    pub fn list_actions(&self) -> JsonValue {
        self.registry.list_actions()
    }
}

impl Default for Trackstat {
    fn default() -> Self {
        Self::with_standard_actions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackstat_core::{codes, features, Spot};

    fn model() -> TrackModel {
        TrackModel::new()
            .with_standard_features()
            .with_image("/experiments/day1", "cells.tif")
            .with_track(2, [
                Spot::new(11).at_frame(1).with_feature(features::POSITION_X, 4.25),
                Spot::new(10).at_frame(0).with_feature(features::POSITION_X, 4.0),
            ])
            .with_track(1, [Spot::new(12).at_frame(0)])
    }

    #[test]
    fn test_export_to_memory() {
        let engine = Trackstat::with_standard_actions();
        let logger = BufferLogger::new();
        let mut sink = MemorySink::new();
        engine.export_statistics(&model(), &logger, &mut sink).unwrap();

        let (title, table) = sink.last().unwrap();
        assert_eq!(title, "Track statistics");
        assert_eq!(table.len(), 3);
        let ids: Vec<&str> = table.column_values("ObjectNumber").filter_map(|c| c.as_str()).collect();
        assert_eq!(ids, vec!["10", "11", "12"]);
        assert_eq!(logger.contents(), "Generating table... Done.\n");
    }

    #[test]
    fn test_export_to_tsv() {
        let engine = Trackstat::default();
        let renderer = Renderer::new()
            .with_layout(TableLayout::Tsv)
            .with_number_format(NumberFormat::Shortest);
        let mut sink = TextSink::new(Vec::new()).with_renderer(renderer);
        engine.run("export_stats_to_xls", &model(), &TracingLogger, &mut sink).unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ImageNumber\tObjectNumber\tTrackObjects_ParentObjectNumber_50"));
        assert_eq!(
            lines[1],
            "0\t10\t2\tfile:/experiments/day1/cells.tif\t4.0\tNone\tNone\tNone\tNone"
        );
        assert_eq!(
            lines[3],
            "0\t12\t1\tfile:/experiments/day1/cells.tif\tNone\tNone\tNone\tNone\tNone"
        );
    }

    #[test]
    fn test_export_to_json() {
        let engine = Trackstat::default();
        let mut sink = JsonSink::new(Vec::new());
        engine.export_statistics(&model(), &BufferLogger::new(), &mut sink).unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&sink.into_inner()).unwrap();
        assert_eq!(doc["table"]["rows"].as_array().map(|r| r.len()), Some(3));
    }

    #[test]
    fn test_unknown_action() {
        let engine = Trackstat::default();
        let mut sink = MemorySink::new();
        let err = engine
            .run("EXPORT_STATS", &model(), &BufferLogger::new(), &mut sink)
            .unwrap_err();
        assert_eq!(err.code, codes::UNKNOWN_ACTION);
        assert!(err.suggestion.unwrap().contains("export_stats_to_xls"));
        assert!(sink.shown().is_empty());
    }

    #[test]
    fn test_list_and_help() {
        let engine = Trackstat::default();
        let list = engine.list_actions();
        assert_eq!(list[0]["key"], "EXPORT_STATS_TO_XLS");
        assert_eq!(list[0]["icon"], "Cellprofiler-icon-16x16.png");
        let help = engine.help(Some("EXPORT_STATS_TO_XLS"));
        assert_eq!(help["name"], "Export statistics to Excel tables");
    }
}
