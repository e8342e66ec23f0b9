use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::NavigationIntent;
use ui_core::Screen;

use crate::controller::{
    events::apply_inputs,
    navigation::{NavigationOutcome, Navigator, PlaceholderNavigator},
    orchestration::drain_navigation,
};
use crate::ui::render::show_screen;

const INTENT_QUEUE_CAPACITY: usize = 32;

pub struct BankGuiApp {
    screen: Screen,
    intent_tx: Sender<NavigationIntent>,
    intent_rx: Receiver<NavigationIntent>,
    navigator: Box<dyn Navigator>,
    closing: bool,
}

impl BankGuiApp {
    pub fn new(screen: Screen) -> Self {
        Self::with_navigator(screen, Box::new(PlaceholderNavigator::default()))
    }

    pub fn with_navigator(screen: Screen, navigator: Box<dyn Navigator>) -> Self {
        let (intent_tx, intent_rx) = crossbeam_channel::bounded(INTENT_QUEUE_CAPACITY);
        tracing::info!(screen = screen.title(), "mounting screen");
        Self {
            screen,
            intent_tx,
            intent_rx,
            navigator,
            closing: false,
        }
    }
}

impl eframe::App for BankGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let inputs = show_screen(ctx, &self.screen);
        if let Err(err) = apply_inputs(&mut self.screen, inputs, &mut self.intent_tx) {
            tracing::error!(%err, "failed to apply widget input");
        }

        if !self.closing
            && drain_navigation(&self.intent_rx, self.navigator.as_mut()) == NavigationOutcome::Shutdown
        {
            self.closing = true;
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
