//! Bug Crossing entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement, KeyboardEvent,
        MouseEvent,
    };

    use bug_crossing::Settings;
    use bug_crossing::consts::*;
    use bug_crossing::platform::{AssetProvider, Canvas, UiSink};
    use bug_crossing::renderer::{self, ASSETS};
    use bug_crossing::sim::{Direction, FrameLoop, LoopControl, World};

    /// UI sink backed by DOM panels
    struct DomUi {
        document: Document,
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
    }

    impl DomUi {
        fn set_visible(&self, id: &str, visible: bool) {
            if let Some(el) = self.document.get_element_by_id(id) {
                let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
            }
        }

        fn set_canvas_visible(&self, visible: bool) {
            let _ = self
                .canvas
                .set_attribute("class", if visible { "" } else { "hidden" });
        }
    }

    impl UiSink for DomUi {
        fn set_lives_display(&mut self, lives: u8) {
            if let Some(el) = self.document.get_element_by_id("lives") {
                el.set_text_content(Some(&lives.to_string()));
            }
        }

        fn show_start_panel(&mut self) {
            self.set_visible("lives-div", false);
            self.set_visible("start-page", true);
            self.set_canvas_visible(false);
        }

        fn show_playing_panel(&mut self) {
            self.set_visible("start-page", false);
            self.set_visible("lives-div", true);
            self.set_canvas_visible(true);
        }

        fn show_game_over_panel(&mut self) {
            self.set_visible("lives-div", false);
            self.set_visible("start-page", true);
            self.set_canvas_visible(false);
        }

        fn clear_screen(&mut self) {
            self.ctx.clear_rect(0.0, 0.0, CLEAR_WIDTH, CLEAR_HEIGHT);
        }
    }

    /// 2D context as a drawing sink
    struct ContextCanvas<'a>(&'a CanvasRenderingContext2d);

    impl Canvas for ContextCanvas<'_> {
        type Image = HtmlImageElement;

        fn draw_image(&mut self, image: &HtmlImageElement, x: f32, y: f32) {
            if let Err(e) = self
                .0
                .draw_image_with_html_image_element(image, x as f64, y as f64)
            {
                log::warn!("drawImage failed: {:?}", e);
            }
        }
    }

    /// Image cache of `<img>` elements
    #[derive(Default)]
    struct WebAssets {
        images: HashMap<String, HtmlImageElement>,
        pending: Rc<Cell<usize>>,
        callbacks: Rc<RefCell<Vec<Box<dyn FnOnce()>>>>,
    }

    impl AssetProvider for WebAssets {
        type Image = HtmlImageElement;

        fn load(&mut self, ids: &[&str]) {
            for id in ids {
                if self.images.contains_key(*id) {
                    continue;
                }
                let image = match HtmlImageElement::new() {
                    Ok(image) => image,
                    Err(e) => {
                        log::error!("Cannot create image for {}: {:?}", id, e);
                        continue;
                    }
                };

                self.pending.set(self.pending.get() + 1);
                let pending = self.pending.clone();
                let callbacks = self.callbacks.clone();
                let closure = Closure::<dyn FnMut()>::new(move || {
                    pending.set(pending.get().saturating_sub(1));
                    if pending.get() == 0 {
                        let ready: Vec<_> = callbacks.borrow_mut().drain(..).collect();
                        for callback in ready {
                            callback();
                        }
                    }
                });
                image.set_onload(Some(closure.as_ref().unchecked_ref()));
                closure.forget();

                image.set_src(id);
                self.images.insert(id.to_string(), image);
            }
        }

        fn on_ready(&mut self, callback: Box<dyn FnOnce()>) {
            if self.pending.get() == 0 {
                callback();
            } else {
                self.callbacks.borrow_mut().push(callback);
            }
        }

        fn get(&self, id: &str) -> Option<&HtmlImageElement> {
            self.images.get(id)
        }
    }

    /// Game instance holding all state
    struct Game {
        world: World,
        frame_loop: FrameLoop,
        ui: DomUi,
        assets: WebAssets,
        /// Set once every image has loaded
        ready: Rc<Cell<bool>>,
        /// A frame is currently scheduled
        running: bool,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Trace).expect("Failed to init logger");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;
        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);

        let settings_json = canvas.get_attribute("data-settings");
        let settings = Settings::load_or_default(settings_json.as_deref());
        log::set_max_level(settings.level_filter());

        log::info!("Bug Crossing starting...");

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;

        let seed = settings.seed_or(js_sys::Date::now() as u64);
        let mut ui = DomUi {
            document,
            canvas,
            ctx,
        };
        ui.show_start_panel();

        let ready = Rc::new(Cell::new(false));
        let mut assets = WebAssets::default();
        assets.load(&ASSETS);
        {
            let ready = ready.clone();
            assets.on_ready(Box::new(move || {
                ready.set(true);
                log::info!("Assets loaded");
            }));
        }

        let game = Rc::new(RefCell::new(Game {
            world: World::new(seed, settings.enemy_count),
            frame_loop: FrameLoop::new(),
            ui,
            assets,
            ready,
            running: false,
        }));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone())?;
        setup_button("start-button", game.clone(), |world, ui| world.start(ui))?;
        setup_button("restart-button", game, |world, ui| {
            world.restart(ui);
            true
        })?;

        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let direction = Direction::from_key(&event.key())
                .or_else(|| Direction::from_key_code(event.key_code()));
            let mut guard = game.borrow_mut();
            let g = &mut *guard;
            g.world.handle_input(direction, &mut g.ui);
        });
        window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Wire a start/restart button. `action` returns true if play should resume.
    fn setup_button(
        id: &str,
        game: Rc<RefCell<Game>>,
        action: fn(&mut World, &mut DomUi) -> bool,
    ) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let Some(button) = document.get_element_by_id(id) else {
            log::debug!("No #{} element", id);
            return Ok(());
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let schedule = {
                let mut guard = game.borrow_mut();
                let g = &mut *guard;
                if !g.ready.get() {
                    log::warn!("Still loading assets");
                    return;
                }
                if !action(&mut g.world, &mut g.ui) {
                    return;
                }
                g.frame_loop.resume(js_sys::Date::now());
                let schedule = !g.running;
                g.running = true;
                schedule
            };
            if schedule {
                request_animation_frame(game.clone());
            }
        });
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let control = {
            let mut guard = game.borrow_mut();
            let g = &mut *guard;
            let now = js_sys::Date::now();
            let assets = &g.assets;
            let ctx = g.ui.ctx.clone();
            let control = g.frame_loop.step(&mut g.world, now, &mut g.ui, |world| {
                renderer::render(world, assets, &mut ContextCanvas(&ctx));
            });
            if control == LoopControl::Stop {
                g.running = false;
            }
            control
        };

        if control == LoopControl::Continue {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Start-up failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use serde::Serialize;

    use bug_crossing::Settings;
    use bug_crossing::platform::AssetProvider;
    use bug_crossing::platform::headless::{HeadlessAssets, RecordingCanvas, RecordingUi};
    use bug_crossing::renderer::{self, ASSETS};
    use bug_crossing::sim::{Direction, FrameLoop, GamePhase, LoopControl, World};

    /// Simulated frame interval (ms)
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// The scripted player hops up this often
    const HOP_EVERY: u32 = 20;

    /// Outcome of a headless run
    #[derive(Debug, Serialize)]
    struct RunSummary {
        seed: u64,
        frames: u64,
        ticks: u64,
        phase: GamePhase,
        lives: u8,
        draw_calls_last_frame: usize,
    }

    pub fn load_settings() -> Settings {
        let Some(path) = std::env::args().nth(1) else {
            return Settings::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(json) => Settings::load_or_default(Some(&json)),
            Err(e) => {
                log::warn!("Cannot read settings {}: {}", path, e);
                Settings::default()
            }
        }
    }

    /// Play a scripted game without a display
    pub fn run(settings: &Settings) {
        let clock_seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        let seed = settings.seed_or(clock_seed);

        let mut world = World::new(seed, settings.enemy_count);
        let mut ui = RecordingUi::new();
        let mut canvas = RecordingCanvas::new();
        let mut assets = HeadlessAssets::new();
        assets.load(&ASSETS);
        log::info!("Headless run with seed: {}", seed);

        world.start(&mut ui);
        let mut frame_loop = FrameLoop::new();
        frame_loop.resume(0.0);

        for frame in 1..=settings.demo_frames {
            if frame % HOP_EVERY == 0 {
                world.handle_input(Some(Direction::Up), &mut ui);
            }

            let now = frame as f64 * FRAME_MS;
            let control = frame_loop.step(&mut world, now, &mut ui, |world| {
                canvas.draws.clear();
                renderer::render(world, &assets, &mut canvas);
            });
            if control == LoopControl::Stop {
                break;
            }
        }

        let summary = RunSummary {
            seed,
            frames: frame_loop.frames,
            ticks: world.time_ticks,
            phase: world.phase,
            lives: world.player.lives,
            draw_calls_last_frame: canvas.draws.len(),
        };
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Cannot serialize summary: {}", e),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let settings = native::load_settings();
    log::set_max_level(settings.level_filter());
    log::info!("Bug Crossing (native) starting...");
    log::info!("The playable version runs in the browser; running a headless game instead");

    native::run(&settings);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
