//! Brickfall entry point
//!
//! Browser builds wire the canvas, keyboard and overlay buttons to the game.
//! Native builds run a headless session driven by the autopilot.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use brickfall::renderer::{FrameBatch, RenderError, RenderState};
    use brickfall::sim::StepOutcome;
    use brickfall::ui::Screens;
    use brickfall::{Game, Settings};

    const START_SCREEN: &str = "startScreen";
    const WIN_SCREEN: &str = "winScreen";
    const LOSE_SCREEN: &str = "loseScreen";

    /// Overlay screens backed by DOM elements
    struct DomScreens {
        document: Document,
    }

    impl DomScreens {
        /// Show one overlay (or none) and hide the rest
        fn show_only(&self, visible: Option<&str>) {
            for id in [START_SCREEN, WIN_SCREEN, LOSE_SCREEN] {
                if let Some(el) = self.document.get_element_by_id(id) {
                    let class = if Some(id) == visible { "" } else { "hidden" };
                    let _ = el.set_attribute("class", class);
                }
            }
        }
    }

    impl Screens for DomScreens {
        fn show_idle_screen(&mut self) {
            self.show_only(Some(START_SCREEN));
        }

        fn show_level_complete_screen(&mut self) {
            self.show_only(Some(WIN_SCREEN));
        }

        fn show_game_over_screen(&mut self) {
            self.show_only(Some(LOSE_SCREEN));
        }

        fn hide_screens(&mut self) {
            self.show_only(None);
        }

        fn set_level(&mut self, level: u32) {
            if let Some(el) = self.document.get_element_by_id("levelDisplay") {
                el.set_text_content(Some(&format!("Level: {}", level)));
            }
        }
    }

    /// Game plus its GPU output
    struct App {
        game: Game<DomScreens>,
        settings: Settings,
        render_state: RenderState,
        batch: FrameBatch,
        /// A frame callback is pending
        looping: bool,
    }

    impl App {
        /// Flip the demo pilot and remember the choice
        fn toggle_autopilot(&mut self) {
            self.settings.autopilot = !self.game.autopilot();
            self.game.set_autopilot(self.settings.autopilot);
            self.settings.save();
        }

        /// Run one step and present it. Returns whether to keep looping.
        fn frame(&mut self) -> bool {
            let outcome = match self.game.step(&mut self.batch) {
                Ok(outcome) => outcome,
                Err(e) => {
                    log::warn!("{}", e);
                    return false;
                }
            };

            match self.render_state.render(&self.batch) {
                Ok(()) => {}
                Err(RenderError::Surface(wgpu::SurfaceError::Lost)) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(e) => log::warn!("Render error: {}", e),
            }

            outcome == StepOutcome::Running
        }
    }

    fn fatal(e: impl std::fmt::Display) -> JsValue {
        log::error!("{}", e);
        JsValue::from_str(&e.to_string())
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&JsValue::from_str(&e.to_string()));
        }

        log::info!("Brickfall starting...");

        let window = web_sys::window().ok_or_else(|| fatal("no window"))?;
        let document = window.document().ok_or_else(|| fatal("no document"))?;

        let canvas: HtmlCanvasElement = document
            .query_selector("canvas")?
            .ok_or_else(|| fatal("no canvas"))?
            .dyn_into()?;

        let settings = Settings::load();
        let width = settings.canvas_width as u32;
        let height = settings.canvas_height as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Renderer must exist before any game state is built
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| fatal(RenderError::from(e)))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| fatal(RenderError::from(e)))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, settings.arena())
            .await
            .map_err(fatal)?;

        let screens = DomScreens {
            document: document.clone(),
        };
        let app = Rc::new(RefCell::new(App {
            game: Game::new(&settings, screens),
            settings,
            render_state,
            batch: FrameBatch::new(),
            looping: false,
        }));

        setup_input_handlers(app.clone());
        setup_buttons(&document, app);

        log::info!("Brickfall ready");
        Ok(())
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                match event.key().as_str() {
                    "i" | "I" => a.toggle_autopilot(),
                    key => a.game.key_down(key),
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().game.key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Overlay buttons issue the state-machine commands and resume the loop
    fn setup_buttons(document: &Document, app: Rc<RefCell<App>>) {
        type Command = fn(&mut Game<DomScreens>) -> brickfall::error::Result<()>;
        let buttons: [(&str, Command); 3] = [
            ("startButton", Game::start),
            ("nextLevelButton", Game::advance_level),
            ("restartButton", Game::restart),
        ];

        for (id, command) in buttons {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing button #{}", id);
                continue;
            };
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let result = command(&mut app.borrow_mut().game);
                match result {
                    Ok(()) => ensure_loop(app.clone()),
                    Err(e) => log::warn!("{}", e),
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn ensure_loop(app: Rc<RefCell<App>>) {
        let already = std::mem::replace(&mut app.borrow_mut().looping, true);
        if !already {
            request_animation_frame(app);
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        let keep_going = {
            let mut a = app.borrow_mut();
            let keep_going = a.frame();
            a.looping = keep_going;
            keep_going
        };

        if keep_going {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use clap::Parser;

    use brickfall::renderer::FrameBatch;
    use brickfall::sim::StepOutcome;
    use brickfall::ui::LogScreens;
    use brickfall::{Game, GameError, Settings};

    #[derive(Parser)]
    #[command(name = "brickfall")]
    #[command(about = "Run a headless brick breaker session", long_about = None)]
    pub struct Cli {
        /// Settings JSON file
        #[arg(short, long)]
        settings: Option<PathBuf>,

        /// Maximum frames to simulate
        #[arg(short, long, default_value_t = 3600)]
        frames: u64,

        /// Stop after clearing this many levels
        #[arg(short, long, default_value_t = 3)]
        levels: u32,

        /// Disable the autopilot (the paddle stays put)
        #[arg(long)]
        manual: bool,
    }

    pub fn run(cli: &Cli) -> Result<(), GameError> {
        let mut settings = match &cli.settings {
            Some(path) => Settings::load_file(path)?,
            None => Settings::load(),
        };
        settings.autopilot = !cli.manual;

        let mut game = Game::new(&settings, LogScreens);
        game.start()?;

        let mut batch = FrameBatch::new();
        let mut frames = 0;
        let mut cleared = 0;
        while frames < cli.frames {
            frames += 1;
            match game.step(&mut batch)? {
                StepOutcome::Running => {}
                StepOutcome::LevelComplete => {
                    cleared += 1;
                    if cleared >= cli.levels {
                        break;
                    }
                    game.advance_level()?;
                }
                StepOutcome::GameOver => break,
            }
        }

        let state = game.state();
        log::info!(
            "Finished after {} frames: level {}, {} cleared, score {}, {:?}",
            frames,
            state.level,
            cleared,
            state.score,
            state.phase
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    env_logger::init();
    log::info!("Brickfall (headless) starting...");

    let cli = headless::Cli::parse();
    if let Err(e) = headless::run(&cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
