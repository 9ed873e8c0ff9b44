//! Action Context

use crate::{Logger, TableSink, TrackingSession};

/// Capabilities passed to an action for one invocation
pub struct ActionContext<'a> {
    pub session: &'a dyn TrackingSession,
    pub logger: &'a dyn Logger,
    pub sink: &'a mut dyn TableSink,
}

impl<'a> ActionContext<'a> {
    pub fn new(
        session: &'a dyn TrackingSession,
        logger: &'a dyn Logger,
        sink: &'a mut dyn TableSink,
    ) -> Self {
        Self { session, logger, sink }
    }

    pub fn log(&self, message: &str) {
        self.logger.log(message);
    }
}
