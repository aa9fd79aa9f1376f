//! Laser Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use laser_runner::Tuning;
    use laser_runner::renderer::{DrawList, RenderState};
    use laser_runner::sim::{FrameClock, Game, InputEvent, InputQueue, Key};

    /// Everything the frame callback needs
    struct App {
        game: Game,
        clock: FrameClock,
        input: InputQueue,
        /// Window lost focus since the last frame; key-ups may never arrive
        focus_lost: bool,
        frame: DrawList,
        render_state: Option<RenderState>,
    }

    impl App {
        fn new(tuning: &Tuning) -> Self {
            Self {
                game: Game::new(tuning),
                clock: FrameClock::new(&tuning.clock),
                input: InputQueue::new(),
                focus_lost: false,
                frame: DrawList::new(),
                render_state: None,
            }
        }

        /// Apply queued input, then clear/update/draw into the frame list
        fn update(&mut self, time: f64) {
            let dt = self.clock.delta(time);
            log::trace!("frame {} dt={:.2}ms", self.clock.frame_count(), dt);

            for event in self.input.drain() {
                self.game.handle_event(event);
            }
            if std::mem::take(&mut self.focus_lost) {
                self.game.release_all();
            }

            self.frame.reset();
            self.game.frame(dt, &mut self.frame);
        }

        /// Present the recorded frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.frame) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let (width, height) = render_state.size();
                        render_state.resize(width, height);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Laser Runner starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas1")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let tuning = Tuning::load();
        let width = tuning.world.width as u32;
        let height = tuning.world.height as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let app = Rc::new(RefCell::new(App::new(&tuning)));
        log::info!(
            "Game initialized: {}x{}, {} ammo",
            width,
            height,
            app.borrow().game.ammo()
        );

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let world_size = glam::Vec2::new(tuning.world.width, tuning.world.height);
        match RenderState::new(surface, &adapter, width, height, world_size).await {
            Ok(render_state) => app.borrow_mut().render_state = Some(render_state),
            Err(e) => log::error!("Failed to create device: {}", e),
        }

        setup_input_handlers(app.clone());

        request_animation_frame(app);

        log::info!("Laser Runner running!");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        for (event_name, make_event) in [
            ("keydown", InputEvent::down as fn(Key) -> InputEvent),
            ("keyup", InputEvent::up as fn(Key) -> InputEvent),
        ] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = Key::from_dom_key(&event.key());
                if key != Key::Other {
                    // Keep arrows/space from scrolling the page
                    event.prevent_default();
                }
                app.borrow_mut().input.push(make_event(key));
            });
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur - held keys will never see their keyup
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                app.borrow_mut().focus_lost = true;
                log::info!("Window blurred, releasing held keys");
            });
            let _ = window
                .add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            a.update(time);
            a.render();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Laser Runner (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive a few seconds of scripted play at 60 fps and log what happened
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use laser_runner::Tuning;
    use laser_runner::renderer::DrawList;
    use laser_runner::sim::{FrameClock, Game, InputEvent, InputQueue, Key, MoveKey};

    let tuning = Tuning::load();
    let mut game = Game::new(&tuning);
    let mut clock = FrameClock::new(&tuning.clock);
    let mut queue = InputQueue::new();
    let mut frame = DrawList::new();

    const FRAME_MS: f64 = 1000.0 / 60.0;

    for n in 0..300u32 {
        match n {
            10 => queue.push(InputEvent::down(Key::Move(MoveKey::Up))),
            40 => queue.push(InputEvent::up(Key::Move(MoveKey::Up))),
            60 => queue.push(InputEvent::down(Key::Move(MoveKey::Down))),
            90 => queue.push(InputEvent::up(Key::Move(MoveKey::Down))),
            // Held through a focus loss: the key-up never arrives
            120 => queue.push(InputEvent::down(Key::Move(MoveKey::Up))),
            _ => {}
        }
        if n % 5 == 0 {
            queue.push(InputEvent::down(Key::Fire));
            queue.push(InputEvent::up(Key::Fire));
        }

        let dt = clock.delta(n as f64 * FRAME_MS);
        for event in queue.drain() {
            game.handle_event(event);
        }
        if n == 150 {
            game.release_all();
        }
        frame.reset();
        game.frame(dt, &mut frame);

        if n % 60 == 0 {
            let pos = game.player_pos();
            log::info!(
                "frame {:>3}: player=({:.0}, {:.0}) lasers={} ammo={}/{} draw_calls={}",
                clock.frame_count(),
                pos.x,
                pos.y,
                game.projectile_count(),
                game.ammo(),
                game.max_ammo(),
                frame.len()
            );
        }
    }

    println!(
        "✓ Ran {} frames: {} lasers in flight, {} ammo left",
        clock.frame_count(),
        game.projectile_count(),
        game.ammo()
    );
}
