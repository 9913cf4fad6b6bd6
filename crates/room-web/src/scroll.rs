use crate::canvas::CanvasSurface;
use crate::constants::{
    COMPLETE_CLASS, ILLUSTRATION_COMPLETE_EVENT, ILLUSTRATION_SELECTOR, RANGE_END_ATTR,
    RANGE_START_ATTR, TRIGGER_ATTR,
};
use crate::dom;
use crate::layout;
use instant::Instant;
use room_core::constants::DUST_MAX_STEP_SEC;
use room_core::{SceneConfig, SceneRenderer, Schedule, ScrollDriver, ScrollRange};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One `canvas[data-blueprint="scroll"]` scrubbed by its trigger section.
pub struct Illustration {
    trigger: web::Element,
    range: ScrollRange,
    driver: ScrollDriver,
    renderer: SceneRenderer,
    surface: CanvasSurface,
    last_instant: Option<Instant>,
}

impl Illustration {
    pub fn from_canvas(
        document: &web::Document,
        canvas: web::HtmlCanvasElement,
        schedule: Schedule,
    ) -> anyhow::Result<Self> {
        let trigger = find_trigger(document, &canvas);
        let defaults = ScrollRange::default();
        let range = ScrollRange {
            start: layout::parse_fraction(
                canvas.get_attribute(RANGE_START_ATTR).as_deref(),
                defaults.start,
            ),
            end: layout::parse_fraction(
                canvas.get_attribute(RANGE_END_ATTR).as_deref(),
                defaults.end,
            ),
        };
        let surface = CanvasSurface::new(canvas)?;
        let size = surface.css_size();
        Ok(Self {
            trigger,
            range,
            driver: ScrollDriver::new(schedule),
            renderer: SceneRenderer::new(SceneConfig::illustration(), size.x, size.y),
            surface,
            last_instant: None,
        })
    }

    /// Scrub to the current scroll position and redraw. Returns true on the
    /// update that first reaches the end.
    pub fn update(&mut self) -> bool {
        let rect = self.trigger.get_bounding_client_rect();
        let progress = self.range.progress(
            rect.top() as f32,
            rect.height() as f32,
            dom::viewport_height(),
        );
        let outcome = self.driver.scrub(progress);

        let now = Instant::now();
        if let Some(prev) = self.last_instant {
            let dt = layout::clamp_frame_dt((now - prev).as_secs_f32(), DUST_MAX_STEP_SEC);
            self.renderer.advance_particles(dt);
        }
        self.last_instant = Some(now);

        self.renderer.render(&mut self.surface, self.driver.record());

        if outcome.completed_now {
            self.trigger.class_list().add_1(COMPLETE_CLASS).ok();
        }
        outcome.completed_now
    }

    pub fn resize(&mut self) {
        let size = self.surface.sync_backing_size();
        self.renderer.resize(size.x, size.y);
    }
}

/// Update every illustration; completion events go out after the borrow ends.
fn refresh(shared: &RefCell<Vec<Illustration>>, resize: bool) {
    let completed = layout::step_all(shared, |ill| {
        if resize {
            ill.resize();
        }
        ill.update().then(|| ill.surface.canvas().clone())
    });
    for canvas in &completed {
        dom::dispatch(canvas, ILLUSTRATION_COMPLETE_EVENT, true);
    }
}

fn find_trigger(document: &web::Document, canvas: &web::HtmlCanvasElement) -> web::Element {
    if let Some(id) = canvas.get_attribute(TRIGGER_ATTR) {
        match document.get_element_by_id(&id) {
            Some(el) => return el,
            None => log::warn!("[scroll] trigger #{} not found; using parent", id),
        }
    }
    canvas
        .parent_element()
        .unwrap_or_else(|| canvas.clone().unchecked_into::<web::Element>())
}

/// Wire every scroll illustration on the page to scroll and resize events.
/// Returns how many were attached.
pub fn attach_all(document: &web::Document) -> anyhow::Result<usize> {
    let nodes = document
        .query_selector_all(ILLUSTRATION_SELECTOR)
        .map_err(|e| anyhow::anyhow!("querySelectorAll failed: {:?}", e))?;
    let schedule = Schedule::illustration()?;

    let mut illustrations = Vec::new();
    for i in 0..nodes.length() {
        let Some(canvas) = nodes
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlCanvasElement>().ok())
        else {
            continue;
        };
        match Illustration::from_canvas(document, canvas, schedule.clone()) {
            Ok(ill) => illustrations.push(ill),
            Err(e) => log::error!("[scroll] illustration {} skipped: {:?}", i, e),
        }
    }
    let count = illustrations.len();
    if count == 0 {
        return Ok(0);
    }

    let shared = Rc::new(RefCell::new(illustrations));
    refresh(&shared, false);
    {
        let shared = shared.clone();
        dom::add_window_listener("scroll", move || refresh(&shared, false));
    }
    dom::add_window_listener("resize", move || refresh(&shared, true));
    log::info!("[scroll] {} illustration(s) attached", count);
    Ok(count)
}
