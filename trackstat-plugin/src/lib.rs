//! Trackstat Plugin System
//!
//! Provides the capability traits a host implements:
//! - `TrackingSession` (read access to tracks and spots)
//! - `Logger` (progress messages)
//! - `TableSink` (table display)
//!
//! and the `ActionPlugin` trait plus registry for actions built on them.
//! The `memory` module holds in-memory implementations of all three.

mod traits;
mod registry;
mod context;
pub mod memory;

pub use traits::{
    TrackingSession, Logger, TableSink,
    ActionPlugin, ActionMeta,
};
pub use registry::ActionRegistry;
pub use context::ActionContext;

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{
        TrackingSession, Logger, TableSink,
        ActionPlugin, ActionMeta, ActionRegistry, ActionContext,
    };
    pub use trackstat_core::prelude::*;
}
