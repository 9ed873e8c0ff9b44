//! In-memory collaborators
//!
//! Reference implementations of the capability traits: a tracking model held
//! entirely in memory, a sink that keeps every table it is shown, and a logger
//! that records messages verbatim.

use crate::{Logger, TableSink, TrackingSession};
use trackstat_core::{features, SessionError, SinkError, Spot, SpotId, Table, TrackId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
struct TrackEntry {
    id: TrackId,
    spots: Vec<SpotId>,
    visible: bool,
}

/// Tracking session backed by plain collections.
///
/// Tracks enumerate in insertion order; spots of a track in the order they
/// were added.
#[derive(Debug, Clone, Default)]
pub struct TrackModel {
    image_folder: PathBuf,
    image_file_name: String,
    spots: HashMap<SpotId, Spot>,
    tracks: Vec<TrackEntry>,
    feature_types: HashMap<String, bool>,
}

impl TrackModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the source image location
    pub fn with_image(mut self, folder: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        self.image_folder = folder.into();
        self.image_file_name = file_name.into();
        self
    }

    /// Builder: declare whether a feature is integral
    pub fn with_feature_type(mut self, feature: impl Into<String>, is_int: bool) -> Self {
        self.feature_types.insert(feature.into(), is_int);
        self
    }

    /// Builder: declare the standard spot features. Frame is integral, the
    /// rest are real.
    pub fn with_standard_features(self) -> Self {
        [
            features::POSITION_X,
            features::POSITION_Y,
            features::POSITION_Z,
            features::RADIUS,
            features::QUALITY,
            features::MEAN_INTENSITY,
            features::MEDIAN_INTENSITY,
        ]
        .into_iter()
        .fold(self, |model, f| model.with_feature_type(f, false))
        .with_feature_type(features::FRAME, true)
    }

    /// Builder: add a visible track
    pub fn with_track(mut self, id: TrackId, spots: impl IntoIterator<Item = Spot>) -> Self {
        self.insert_track(id, spots, true);
        self
    }

    /// Builder: add a track that is filtered out
    pub fn with_hidden_track(mut self, id: TrackId, spots: impl IntoIterator<Item = Spot>) -> Self {
        self.insert_track(id, spots, false);
        self
    }

    /// Replace or append a track. Spots with an id already present are replaced.
    pub fn insert_track(&mut self, id: TrackId, spots: impl IntoIterator<Item = Spot>, visible: bool) {
        let mut ids = Vec::new();
        for spot in spots {
            ids.push(spot.id());
            self.spots.insert(spot.id(), spot);
        }
        let entry = TrackEntry { id, spots: ids, visible };
        match self.tracks.iter_mut().find(|t| t.id == id) {
            Some(existing) => *existing = entry,
            None => self.tracks.push(entry),
        }
    }

    pub fn set_visible(&mut self, id: TrackId, visible: bool) -> Result<(), SessionError> {
        let track = self.tracks.iter_mut()
            .find(|t| t.id == id)
            .ok_or(SessionError::UnknownTrack(id))?;
        track.visible = visible;
        Ok(())
    }

    pub fn spot_mut(&mut self, id: SpotId) -> Option<&mut Spot> {
        self.spots.get_mut(&id)
    }
}

impl TrackingSession for TrackModel {
    fn filtered_track_ids(&self) -> Result<Vec<TrackId>, SessionError> {
        Ok(self.tracks.iter().filter(|t| t.visible).map(|t| t.id).collect())
    }

    fn track_spots(&self, track_id: TrackId) -> Result<Vec<&Spot>, SessionError> {
        let track = self.tracks.iter()
            .find(|t| t.id == track_id)
            .ok_or(SessionError::UnknownTrack(track_id))?;
        track.spots.iter()
            .map(|id| {
                self.spots.get(id).ok_or_else(|| {
                    SessionError::Model(format!("track {} references missing spot {}", track_id, id))
                })
            })
            .collect()
    }

    fn feature_is_int(&self, feature: &str) -> Result<bool, SessionError> {
        self.feature_types
            .get(feature)
            .copied()
            .ok_or_else(|| SessionError::MissingFeatureMetadata(feature.to_string()))
    }

    fn image_folder(&self) -> &Path {
        &self.image_folder
    }

    fn image_file_name(&self) -> &str {
        &self.image_file_name
    }
}

/// Sink that keeps every table with its title
#[derive(Debug, Default)]
pub struct MemorySink {
    shown: Vec<(String, Table)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> &[(String, Table)] {
        &self.shown
    }

    pub fn last(&self) -> Option<(&str, &Table)> {
        self.shown.last().map(|(title, table)| (title.as_str(), table))
    }

    pub fn into_tables(self) -> Vec<(String, Table)> {
        self.shown
    }
}

impl TableSink for MemorySink {
    fn show(&mut self, table: Table, title: &str) -> Result<(), SinkError> {
        self.shown.push((title.to_string(), table));
        Ok(())
    }
}

/// Logger that records each message exactly as given
#[derive(Debug, Default)]
pub struct BufferLogger {
    messages: RefCell<Vec<String>>,
}

impl BufferLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    /// All messages concatenated, as a console would show them
    pub fn contents(&self) -> String {
        self.messages.borrow().concat()
    }
}

impl Logger for BufferLogger {
    fn log(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
