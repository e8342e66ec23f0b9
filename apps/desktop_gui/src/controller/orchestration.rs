//! Hands queued navigation intents to the navigation collaborator.

use crossbeam_channel::Receiver;
use shared::domain::NavigationIntent;

use crate::controller::navigation::{NavigationOutcome, Navigator};

/// Drains every queued intent; stops at the first one that requests shutdown.
pub fn drain_navigation(
    intent_rx: &Receiver<NavigationIntent>,
    navigator: &mut dyn Navigator,
) -> NavigationOutcome {
    for intent in intent_rx.try_iter() {
        if navigator.navigate(intent) == NavigationOutcome::Shutdown {
            return NavigationOutcome::Shutdown;
        }
    }
    NavigationOutcome::Stay
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::navigation::PlaceholderNavigator;
    use crossbeam_channel::bounded;

    #[test]
    fn forwards_intents_in_emission_order() {
        let (tx, rx) = bounded(8);
        tx.send(NavigationIntent::LoginPage).expect("send");
        tx.send(NavigationIntent::NextPage).expect("send");

        let mut navigator = PlaceholderNavigator::default();
        assert_eq!(
            drain_navigation(&rx, &mut navigator),
            NavigationOutcome::Stay
        );
        assert_eq!(
            navigator.requested(),
            &[NavigationIntent::LoginPage, NavigationIntent::NextPage]
        );
    }

    #[test]
    fn exit_requests_shutdown_and_leaves_later_intents_queued() {
        let (tx, rx) = bounded(8);
        tx.send(NavigationIntent::Exit).expect("send");
        tx.send(NavigationIntent::PrevPage).expect("send");

        let mut navigator = PlaceholderNavigator::default();
        assert_eq!(
            drain_navigation(&rx, &mut navigator),
            NavigationOutcome::Shutdown
        );
        assert_eq!(navigator.requested(), &[NavigationIntent::Exit]);
        assert_eq!(rx.len(), 1);
    }

    #[test]
    fn empty_queue_stays() {
        let (_tx, rx) = bounded::<NavigationIntent>(1);
        let mut navigator = PlaceholderNavigator::default();
        assert_eq!(
            drain_navigation(&rx, &mut navigator),
            NavigationOutcome::Stay
        );
        assert!(navigator.requested().is_empty());
    }
}
