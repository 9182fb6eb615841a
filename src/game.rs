//! Level/phase state machine and driver command interface
//!
//! ```text
//! Idle --start--> Playing --last brick--> LevelComplete --advance--> Playing
//!                    |
//!                    +--ball lost--> GameOver --restart--> Playing
//! ```
//!
//! Every entry into `Playing` rebuilds the grid for the level and resets the
//! ball and paddle.

use crate::error::{GameError, Result};
use crate::input::InputState;
use crate::renderer::{Renderer, draw_frame};
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, StepOutcome, autopilot_input, tick};
use crate::ui::Screens;

/// Driver commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    AdvanceLevel,
    Restart,
    Step,
}

/// Game session: owns the state aggregate and talks to the UI
pub struct Game<S: Screens> {
    state: GameState,
    screens: S,
    input: InputState,
    autopilot: bool,
}

impl<S: Screens> Game<S> {
    /// Create an idle game and show the title screen
    pub fn new(settings: &Settings, mut screens: S) -> Self {
        let state = GameState::new(settings.arena()).with_paddle_speed(settings.paddle_speed);
        screens.show_idle_screen();
        Self {
            state,
            screens,
            input: InputState::default(),
            autopilot: settings.autopilot,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_playing(&self) -> bool {
        self.state.phase == GamePhase::Playing
    }

    pub fn screens(&self) -> &S {
        &self.screens
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
        log::info!("Autopilot: {}", enabled);
    }

    /// Key press from the environment
    pub fn key_down(&mut self, key: &str) {
        let playing = self.is_playing();
        self.input.key_down(key, playing);
    }

    /// Key release from the environment
    pub fn key_up(&mut self, key: &str) {
        self.input.key_up(key);
    }

    /// Idle -> Playing at level 1
    pub fn start(&mut self) -> Result<()> {
        self.expect_phase(Command::Start, GamePhase::Idle)?;
        self.state.level = 1;
        self.state.score = 0;
        self.enter_playing();
        Ok(())
    }

    /// LevelComplete -> Playing at the next level
    pub fn advance_level(&mut self) -> Result<()> {
        self.expect_phase(Command::AdvanceLevel, GamePhase::LevelComplete)?;
        self.state.level += 1;
        self.enter_playing();
        Ok(())
    }

    /// GameOver -> Playing at level 1
    pub fn restart(&mut self) -> Result<()> {
        self.expect_phase(Command::Restart, GamePhase::GameOver)?;
        self.state.level = 1;
        self.state.score = 0;
        self.enter_playing();
        Ok(())
    }

    /// Emit the frame, then advance the simulation by one step.
    ///
    /// Outside `Playing` nothing is drawn or mutated and `NotPlaying` is
    /// returned; the driver should stop scheduling steps.
    pub fn step<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<StepOutcome> {
        if self.state.phase != GamePhase::Playing {
            return Err(GameError::NotPlaying {
                phase: self.state.phase,
            });
        }

        draw_frame(renderer, &self.state);

        let input = if self.autopilot {
            autopilot_input(&self.state)
        } else {
            self.input.snapshot()
        };
        let outcome = tick(&mut self.state, &input);

        match outcome {
            StepOutcome::Running => {}
            StepOutcome::LevelComplete => {
                log::info!(
                    "Level {} cleared in {} frames, score {}",
                    self.state.level,
                    self.state.frame,
                    self.state.score
                );
                self.screens.show_level_complete_screen();
            }
            StepOutcome::GameOver => {
                log::info!(
                    "Ball lost on level {}, score {}",
                    self.state.level,
                    self.state.score
                );
                self.screens.show_game_over_screen();
            }
        }

        Ok(outcome)
    }

    fn expect_phase(&self, command: Command, expected: GamePhase) -> Result<()> {
        if self.state.phase == expected {
            Ok(())
        } else {
            log::warn!("Rejected {:?} while {:?}", command, self.state.phase);
            Err(GameError::InvalidCommand {
                command,
                phase: self.state.phase,
            })
        }
    }

    fn enter_playing(&mut self) {
        self.state.setup_level();
        self.screens.hide_screens();
        self.screens.set_level(self.state.level);
    }
}
