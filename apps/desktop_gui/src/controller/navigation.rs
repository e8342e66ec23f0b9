//! Navigation collaborator: receives intents emitted by the login screen.
//!
//! No page transitions exist yet; requests are logged and `Exit` asks the
//! entry point to shut down.

use shared::domain::NavigationIntent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    Stay,
    Shutdown,
}

pub trait Navigator {
    fn navigate(&mut self, intent: NavigationIntent) -> NavigationOutcome;
}

#[derive(Debug, Default)]
pub struct PlaceholderNavigator {
    requested: Vec<NavigationIntent>,
}

impl PlaceholderNavigator {
    pub fn requested(&self) -> &[NavigationIntent] {
        &self.requested
    }
}

impl Navigator for PlaceholderNavigator {
    fn navigate(&mut self, intent: NavigationIntent) -> NavigationOutcome {
        self.requested.push(intent);
        if intent.is_exit() {
            tracing::info!("exit requested; shutting down");
            return NavigationOutcome::Shutdown;
        }
        tracing::info!(page = %intent, "opening page");
        NavigationOutcome::Stay
    }
}
