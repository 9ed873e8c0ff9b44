//! Track statistics table export
//!
//! Flattens the visible tracks of a session into one row per spot: tracks in
//! session order, spots by ascending frame within a track.

use crate::schema::{ColumnSchema, FILE_COLUMN, FRAME_COLUMN, SPOT_ID_COLUMN, TRACK_ID_COLUMN};
use trackstat_plugin::prelude::*;
use std::collections::HashMap;
use std::path::{self, Path};

pub const KEY: &str = "EXPORT_STATS_TO_XLS";

pub const NAME: &str = "Export statistics to Excel tables";

pub const INFO_TEXT: &str = "<html>Compute and export track statistics to an Excel file.\
<p>The table is formatted to resemble a CellProfiler table.</html>";

pub const ICON: &str = "Cellprofiler-icon-16x16.png";

/// Title the table is shown under
pub const TABLE_TITLE: &str = "Track statistics";

pub const START_MESSAGE: &str = "Generating table...";
pub const DONE_MESSAGE: &str = " Done.\n";

const FILE_PREFIX: &str = "file:";

/// `file:` followed by the absolute path of `file_name` inside `folder`.
///
/// Relative folders resolve against the working directory; an empty folder
/// is the filesystem root. An empty file name names the folder itself.
/// Symlinks are not followed.
pub fn source_location(folder: &Path, file_name: &str) -> Result<String, ExportError> {
    let folder = if folder.as_os_str().is_empty() {
        Path::new(path::MAIN_SEPARATOR_STR)
    } else {
        folder
    };
    // A leading separator on the file name still means "inside folder"
    let file_name = file_name.trim_start_matches(path::is_separator);
    let joined = if file_name.is_empty() {
        folder.to_path_buf()
    } else {
        folder.join(file_name)
    };
    let absolute = path::absolute(&joined).map_err(|e| {
        ExportError::source_location(format!("'{}': {}", joined.display(), e))
    })?;
    Ok(format!("{}{}", FILE_PREFIX, absolute.display()))
}

/// Exports visible tracks as a CellProfiler-like table
#[derive(Debug, Clone, Default)]
pub struct TableExportAction {
    schema: ColumnSchema,
}

impl TableExportAction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema(schema: ColumnSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &ColumnSchema {
        &self.schema
    }

    /// Build the table, log progress, and show it in `sink`
    pub fn project(
        &self,
        session: &dyn TrackingSession,
        logger: &dyn Logger,
        sink: &mut dyn TableSink,
    ) -> Result<(), ExportError> {
        let location = source_location(session.image_folder(), session.image_file_name())?;

        logger.log(START_MESSAGE);
        let table = self.build_table(session, &location)?;
        logger.log(DONE_MESSAGE);

        sink.show(table, TABLE_TITLE)?;
        Ok(())
    }

    /// Rows for every visible track, with `location` in the file column
    pub fn build_table(&self, session: &dyn TrackingSession, location: &str) -> Result<Table, ExportError> {
        let mut table = Table::new(self.schema.columns());
        let mut int_flags: HashMap<&str, bool> = HashMap::new();

        let track_ids = session.filtered_track_ids()?;
        tracing::debug!(tracks = track_ids.len(), "generating track statistics table");

        for track_id in track_ids {
            let mut spots = session.track_spots(track_id)?
                .into_iter()
                .map(|spot| {
                    spot.frame()
                        .map(|frame| (frame, spot))
                        .ok_or(SessionError::MissingFrame(spot.id()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            // Stable: spots sharing a frame keep the session's order
            spots.sort_by(|a, b| a.0.total_cmp(&b.0));

            for (frame, spot) in spots {
                let mut row = Row::with_capacity(self.schema.width());
                row.add_value(FRAME_COLUMN, Cell::truncated(frame));
                row.add_value(SPOT_ID_COLUMN, Cell::int(spot.id()));
                row.add_value(TRACK_ID_COLUMN, Cell::int(track_id));
                row.add_value(FILE_COLUMN, Cell::literal(location));

                for (header, feature) in self.schema.pairs() {
                    let cell = match spot.feature(feature) {
                        None => Cell::none(),
                        Some(value) => {
                            if is_int_feature(session, &mut int_flags, feature)? {
                                Cell::truncated(value)
                            } else {
                                Cell::real(value)
                            }
                        }
                    };
                    row.add_value(header, cell);
                }

                table.push_row(row)?;
            }
        }

        tracing::debug!(rows = table.len(), "track statistics table complete");
        Ok(table)
    }
}

/// Integral flag of `feature`, asking the session at most once per call
fn is_int_feature<'a>(
    session: &dyn TrackingSession,
    cache: &mut HashMap<&'a str, bool>,
    feature: &'a str,
) -> Result<bool, SessionError> {
    if let Some(&flag) = cache.get(feature) {
        return Ok(flag);
    }
    let flag = session.feature_is_int(feature)?;
    cache.insert(feature, flag);
    Ok(flag)
}

impl ActionPlugin for TableExportAction {
    fn meta(&self) -> ActionMeta {
        ActionMeta {
            key: KEY,
            name: NAME,
            info_text: INFO_TEXT,
            icon: Some(ICON),
        }
    }

    fn execute(&self, ctx: &mut ActionContext<'_>) -> Result<(), ExportError> {
        self.project(ctx.session, ctx.logger, &mut *ctx.sink)
    }
}
