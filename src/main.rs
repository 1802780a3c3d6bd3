//! Sky Hopper entry point
//!
//! The simulation core does not own a scheduler; this binary supplies one.
//! On wasm32 that is a requestAnimationFrame driver translating pointer and
//! key input into engine calls and publishing the per-tick snapshot for an
//! external renderer. On native it runs a short headless autopilot demo.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use sky_hopper::audio::WebAudioSink;
    use sky_hopper::persistence::LocalStorageStore;
    use sky_hopper::sim::GameStatus;
    use sky_hopper::{Config, Engine, FrameClock};

    /// Playfield width cap; the game keeps its narrow portrait layout on
    /// wide screens
    const MAX_VIEW_WIDTH: f32 = 420.0;

    /// Snapshot event name the renderer listens for
    const FRAME_EVENT: &str = "sky-hopper:frame";

    struct Driver {
        engine: Engine,
        clock: FrameClock,
    }

    impl Driver {
        /// One tap event, mapped 1:1 onto the transition valid right now
        fn handle_tap(&mut self) {
            match self.engine.state().status {
                GameStatus::Idle => {
                    self.clock.reset();
                    self.engine.start();
                }
                GameStatus::Playing => self.engine.tap_or_reverse(),
                GameStatus::GameOver => {
                    self.clock.reset();
                    self.engine.restart();
                }
            }
        }

        fn frame(&mut self, now_ms: f64) {
            let delta = self.clock.delta(now_ms);
            self.engine.advance(delta);
            publish_frame(&self.engine);
        }
    }

    fn view_size(window: &web_sys::Window) -> (f32, f32) {
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(360.0) as f32;
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(640.0) as f32;
        (width.min(MAX_VIEW_WIDTH), height)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("Sky Hopper starting...");

        let window = web_sys::window().expect("no window");
        let (width, height) = view_size(&window);

        let seed = js_sys::Date::now() as u64;
        let engine = Engine::new(
            Config::new(width, height),
            seed,
            Box::new(LocalStorageStore::new()),
            Box::new(WebAudioSink::new()),
        )
        .expect("default tuning is valid for any sane viewport");

        let driver = Rc::new(RefCell::new(Driver {
            engine,
            clock: FrameClock::new(),
        }));

        setup_input_handlers(driver.clone());
        setup_resize_handler(driver.clone());
        request_animation_frame(driver);

        log::info!("Sky Hopper running");
    }

    fn setup_input_handlers(driver: Rc<RefCell<Driver>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        // Pointer taps
        {
            let driver = driver.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                driver.borrow_mut().handle_tap();
            });
            let _ = document
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch taps
        {
            let driver = driver.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::TouchEvent| {
                event.prevent_default();
                driver.borrow_mut().handle_tap();
            });
            let _ = document
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if matches!(event.key().as_str(), " " | "Enter") {
                    driver.borrow_mut().handle_tap();
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(driver: Rc<RefCell<Driver>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let window = web_sys::window().unwrap();
            let (width, height) = view_size(&window);
            driver.borrow_mut().engine.resize(width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(driver: Rc<RefCell<Driver>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            frame_loop(driver, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(driver: Rc<RefCell<Driver>>, time: f64) {
        driver.borrow_mut().frame(time);
        request_animation_frame(driver);
    }

    /// Update the score HUD and hand the renderer this tick's snapshot
    fn publish_frame(engine: &Engine) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let state = engine.state();

        if let Some(el) = document.get_element_by_id("hud-score") {
            el.set_text_content(Some(&state.score.to_string()));
        }
        if let Some(el) = document.get_element_by_id("hud-high-score") {
            el.set_text_content(Some(&engine.current_high_score().to_string()));
        }
        if let Some(el) = document.get_element_by_id("start-screen") {
            let hidden = state.status != GameStatus::Idle;
            let _ = el.set_attribute("class", if hidden { "hidden" } else { "" });
        }
        if let Some(el) = document.get_element_by_id("game-over") {
            let hidden = state.status != GameStatus::GameOver;
            let _ = el.set_attribute("class", if hidden { "hidden" } else { "" });
        }

        // The renderer is external; it consumes the snapshot read-only
        if let Ok(json) = serde_json::to_string(state) {
            let init = web_sys::CustomEventInit::new();
            init.set_detail(&JsValue::from_str(&json));
            if let Ok(event) = web_sys::CustomEvent::new_with_event_init_dict(FRAME_EVENT, &init) {
                let _ = document.dispatch_event(&event);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main; this satisfies the bin target
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use sky_hopper::audio::NullSink;
    use sky_hopper::persistence::MemoryStore;
    use sky_hopper::sim::GameStatus;
    use sky_hopper::{Config, Engine};

    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(1);
    let mut engine = Engine::new(
        Config::default(),
        seed,
        Box::new(MemoryStore::new()),
        Box::new(NullSink),
    )
    .expect("default config is valid");

    log::info!("headless demo, seed {seed}");
    engine.start();

    let mut ticks = 0u32;
    while engine.state().status == GameStatus::Playing && ticks < 36_000 {
        autopilot_tap(&mut engine);
        engine.advance(1.0);
        ticks += 1;
    }

    println!(
        "demo over after {} ticks: score {}, best {}",
        ticks,
        engine.state().score,
        engine.current_high_score()
    );
}

/// Greedy autopilot: reverse whenever the copter accelerates away from the
/// next gap center. Loses eventually, which is the point of the demo.
#[cfg(not(target_arch = "wasm32"))]
fn autopilot_tap(engine: &mut sky_hopper::Engine) {
    let state = engine.state();
    let scroll = state.scroll_offset;
    let target = state
        .platforms
        .iter()
        .filter(|p| p.screen_y(scroll) <= state.character_y)
        .max_by(|a, b| a.base_y.total_cmp(&b.base_y))
        .map(|p| p.gap_x + p.gap_width / 2.0);

    if let Some(target) = target {
        let toward = (target - state.character_x).signum();
        if toward != 0.0 && state.direction.signum() != toward {
            engine.tap_or_reverse();
        }
    }
}
