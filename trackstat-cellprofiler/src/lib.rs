//! Trackstat CellProfiler Export Plugin
//!
//! Exports tracking results as a table whose column names follow CellProfiler
//! conventions, so pipelines built for CellProfiler output can read it as is.

mod schema;
mod export;

use trackstat_plugin::ActionRegistry;

pub use schema::{
    ColumnSchema, FIXED_COLUMNS,
    FRAME_COLUMN, SPOT_ID_COLUMN, TRACK_ID_COLUMN, FILE_COLUMN,
};
pub use export::{
    TableExportAction, source_location,
    KEY, NAME, INFO_TEXT, ICON, TABLE_TITLE, START_MESSAGE, DONE_MESSAGE,
};

/// Load CellProfiler export actions into registry
pub fn load_cellprofiler_actions(registry: ActionRegistry) -> ActionRegistry {
    registry.with_action(TableExportAction::new())
}
