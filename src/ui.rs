//! Screen toggling collaborator
//!
//! The state machine tells the UI which overlay to show; the UI never calls
//! back into the game.

/// Overlay screens and the level readout
pub trait Screens {
    fn show_idle_screen(&mut self);
    fn show_level_complete_screen(&mut self);
    fn show_game_over_screen(&mut self);
    /// Hide every overlay (a level is in play)
    fn hide_screens(&mut self);
    fn set_level(&mut self, level: u32);
}

/// Headless screens that only log
#[derive(Debug, Default)]
pub struct LogScreens;

impl Screens for LogScreens {
    fn show_idle_screen(&mut self) {
        log::info!("Press start");
    }

    fn show_level_complete_screen(&mut self) {
        log::info!("Level complete!");
    }

    fn show_game_over_screen(&mut self) {
        log::info!("Game over");
    }

    fn hide_screens(&mut self) {}

    fn set_level(&mut self, level: u32) {
        log::info!("Level: {}", level);
    }
}
