use crate::canvas::CanvasSurface;
use crate::constants::{FIRST_FRAME_DT_SEC, LOADER_CANVAS_ID, MAX_FRAME_DT_SEC};
use crate::dom;
use crate::layout;
use crate::overlay::LoaderOverlay;
use instant::Instant;
use room_core::{LoaderDriver, SceneConfig, SceneRenderer, Schedule, TickOutcome};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one loader frame needs.
pub struct LoaderContext {
    driver: LoaderDriver,
    renderer: SceneRenderer,
    surface: CanvasSurface,
    overlay: LoaderOverlay,
    last_instant: Option<Instant>,
}

impl LoaderContext {
    /// Advance, draw and update the overlay. Returns false once the loop
    /// should stop rescheduling.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt_sec = match self.last_instant {
            Some(prev) => layout::clamp_frame_dt((now - prev).as_secs_f32(), MAX_FRAME_DT_SEC),
            None => FIRST_FRAME_DT_SEC,
        };
        self.last_instant = Some(now);

        let outcome = self.driver.tick(dt_sec);
        if outcome == TickOutcome::Halted {
            return false;
        }
        self.renderer.advance_particles(dt_sec);
        self.renderer.render(&mut self.surface, self.driver.record());
        self.overlay.update(
            self.driver.progress(),
            self.driver.logo_opacity(),
            self.driver.tagline_opacity(),
        );
        if outcome == TickOutcome::Completed {
            self.overlay.finish();
            return false;
        }
        true
    }

    pub fn resize(&mut self) {
        let size = self.surface.sync_backing_size();
        self.renderer.resize(size.x, size.y);
    }

    pub fn stop(&mut self) {
        self.driver.stop();
    }
}

/// Handle to a running loader; `stop` tears it down from any state.
pub struct LoaderHandle {
    running: Rc<Cell<bool>>,
    ctx: Rc<RefCell<LoaderContext>>,
}

impl LoaderHandle {
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn stop(&self) {
        self.running.set(false);
        self.ctx.borrow_mut().stop();
    }
}

/// Build the loader from the page. `Ok(None)` when the page has no loader canvas.
pub fn start_loader(document: &web::Document) -> anyhow::Result<Option<LoaderHandle>> {
    let overlay = LoaderOverlay::from_document(document);
    let Some(canvas) = dom::canvas_by_id(document, LOADER_CANVAS_ID) else {
        log::info!("[loader] no #{} on this page", LOADER_CANVAS_ID);
        overlay.skip();
        return Ok(None);
    };
    let surface = CanvasSurface::new(canvas)?;
    let size = surface.css_size();
    let schedule = Schedule::loader()?;
    let mut driver = LoaderDriver::new(schedule);
    driver.start();

    let ctx = Rc::new(RefCell::new(LoaderContext {
        driver,
        renderer: SceneRenderer::new(SceneConfig::loader(), size.x, size.y),
        surface,
        overlay,
        last_instant: None,
    }));
    let running = Rc::new(Cell::new(true));

    {
        let ctx = ctx.clone();
        let running = running.clone();
        dom::add_window_listener("resize", move || {
            if running.get() {
                ctx.borrow_mut().resize();
            }
        });
    }

    start_loop(ctx.clone(), running.clone());
    Ok(Some(LoaderHandle { running, ctx }))
}

/// Self-rescheduling requestAnimationFrame loop gated by `running`.
pub fn start_loop(ctx: Rc<RefCell<LoaderContext>>, running: Rc<Cell<bool>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            return;
        }
        if !ctx.borrow_mut().frame() {
            running.set(false);
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(window) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
