//! Outbound seam for navigation intents.

use crossbeam_channel::{Sender, TrySendError};
use shared::domain::NavigationIntent;

/// Receives the intent emitted by an activated action control.
pub trait IntentSink {
    fn emit(&mut self, intent: NavigationIntent);
}

impl IntentSink for Vec<NavigationIntent> {
    fn emit(&mut self, intent: NavigationIntent) {
        self.push(intent);
    }
}

impl IntentSink for Sender<NavigationIntent> {
    fn emit(&mut self, intent: NavigationIntent) {
        match self.try_send(intent) {
            Ok(()) => tracing::debug!(page = %intent, "queued navigation intent"),
            Err(TrySendError::Full(_)) => {
                tracing::warn!(page = %intent, "navigation queue is full; intent dropped");
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::error!(page = %intent, "navigation collaborator disconnected");
            }
        }
    }
}
