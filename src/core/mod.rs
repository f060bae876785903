pub mod anchors;
pub mod controller;
pub mod donation;
pub mod forms;
pub mod map;
pub mod reveal;
pub mod search;
pub mod subscribe;

pub use crate::domain::model::{Disposition, EventKind, Feature, Notice};
pub use crate::domain::ports::{
    Attributes, ClassToggle, Document, MapWidget, Notifier, Resettable, ScrollTarget, StyleSink,
    TextField,
};
pub use crate::utils::error::Result;

use crate::config::Messages;

/// Renders a [`Notice`] with the site's texts and hands it to the notifier.
pub struct Feedback<'a, N: Notifier> {
    notifier: &'a N,
    messages: &'a Messages,
}

impl<'a, N: Notifier> Feedback<'a, N> {
    pub fn new(notifier: &'a N, messages: &'a Messages) -> Self {
        Self { notifier, messages }
    }

    pub fn show(&self, notice: &Notice) {
        let text = self.messages.render(notice);
        tracing::info!(?notice, "notifying user");
        self.notifier.notify(&text);
    }
}
