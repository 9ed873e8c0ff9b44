//! Detected objects and their features
//!
//! A spot is one detection at one frame. Everything measured on it, including
//! its position in time, is a named real-valued feature that may be absent.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Spot identity as assigned by the host
pub type SpotId = i32;

/// Track identity as assigned by the host
pub type TrackId = i32;

/// Standard spot feature keys
pub mod features {
    pub const POSITION_X: &str = "POSITION_X";
    pub const POSITION_Y: &str = "POSITION_Y";
    pub const POSITION_Z: &str = "POSITION_Z";
    pub const RADIUS: &str = "RADIUS";
    pub const FRAME: &str = "FRAME";
    pub const QUALITY: &str = "QUALITY";
    pub const MEAN_INTENSITY: &str = "MEAN_INTENSITY";
    pub const MEDIAN_INTENSITY: &str = "MEDIAN_INTENSITY";
}

/// A single detected object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    id: SpotId,
    features: HashMap<String, f64>,
}

impl Spot {
    pub fn new(id: SpotId) -> Self {
        Self {
            id,
            features: HashMap::new(),
        }
    }

    /// Builder: set a feature value
    pub fn with_feature(mut self, name: impl Into<String>, value: f64) -> Self {
        self.features.insert(name.into(), value);
        self
    }

    /// Builder: set the frame feature
    pub fn at_frame(self, frame: i32) -> Self {
        self.with_feature(features::FRAME, frame as f64)
    }

    pub fn id(&self) -> SpotId {
        self.id
    }

    pub fn feature(&self, name: &str) -> Option<f64> {
        self.features.get(name).copied()
    }

    pub fn remove_feature(&mut self, name: &str) -> Option<f64> {
        self.features.remove(name)
    }

    /// Raw frame value, if the spot carries one
    pub fn frame(&self) -> Option<f64> {
        self.feature(features::FRAME)
    }
}
