use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
}

/// Run `handler` on every window `event` for the lifetime of the page.
pub fn add_window_listener(event: &str, mut handler: impl FnMut() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Err(e) = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] could not listen for {}: {:?}", event, e);
    }
    closure.forget();
}

/// Run `handler` once after `delay_ms`.
pub fn after(delay_ms: u32, handler: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let callback = Closure::once_into_js(handler);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms as i32,
        )
        .ok();
}

pub fn dispatch(target: &web::EventTarget, name: &str, bubbles: bool) {
    let init = web::EventInit::new();
    init.set_bubbles(bubbles);
    match web::Event::new_with_event_init_dict(name, &init) {
        Ok(event) => {
            target.dispatch_event(&event).ok();
        }
        Err(e) => log::warn!("[dom] could not create {}: {:?}", name, e),
    }
}

pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    el.style().set_property(property, value).ok();
}

pub fn viewport_height() -> f32 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}
