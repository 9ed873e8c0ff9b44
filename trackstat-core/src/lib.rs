//! Trackstat Core - Fundamental types
//!
//! This crate provides the core types used throughout Trackstat:
//! - `Spot`: a detected object with named real-valued features
//! - `Cell`, `Row`, `Table`: the exported table model
//! - `ExportError`: structured errors, plus collaborator error enums

mod spot;
mod cell;
mod table;
mod error;

pub use spot::{Spot, SpotId, TrackId, features};
pub use cell::{Cell, NONE_LITERAL, truncate};
pub use table::{Row, Table};
pub use error::{ExportError, SessionError, SinkError, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Spot, SpotId, TrackId, Cell, Row, Table, ExportError, SessionError, SinkError};
    pub use crate::error::codes;
    pub use crate::spot::features;
}
