use crate::constants::REDUCED_MOTION_QUERY;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Reads `prefers-reduced-motion`. A failed query counts as "motion allowed".
pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// An event listener that is removed again when dropped.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        match target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                kind,
                closure,
            }),
            Err(e) => {
                log::debug!("[dom] {} listener not added: {:?}", kind, e);
                None
            }
        }
    }

    /// Listen for clicks on the element with `element_id`, if it is present.
    pub fn click_by_id(
        document: &web::Document,
        element_id: &str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let el = document.get_element_by_id(element_id)?;
        Self::new(el.as_ref(), "click", handler)
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Client coordinates of a mouse-like event.
#[inline]
pub fn client_point(ev: &web::Event) -> Option<(f32, f32)> {
    let me = ev.dyn_ref::<web::MouseEvent>()?;
    Some((me.client_x() as f32, me.client_y() as f32))
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

#[inline]
pub fn set_translate_y(el: &web::HtmlElement, px: f32) {
    _ = el
        .style()
        .set_property("transform", &format!("translateY({:.2}px)", px));
}

#[inline]
pub fn viewport_height(window: &web::Window) -> f32 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}
