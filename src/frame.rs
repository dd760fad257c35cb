use crate::app::App;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub app: Rc<RefCell<App>>,
    removed_total: u64,
}

impl FrameContext {
    pub fn new(app: Rc<RefCell<App>>) -> Self {
        Self {
            app,
            removed_total: 0,
        }
    }

    pub fn frame(&mut self) {
        // Skip the frame rather than contend with an input handler.
        let Ok(mut app) = self.app.try_borrow_mut() else {
            return;
        };
        let removed = app.tick();
        if removed > 0 {
            self.removed_total += removed as u64;
            log::trace!(
                "[fx] removed {} (total {}, pending {})",
                removed,
                self.removed_total,
                app.pending_particles()
            );
        }
        app.apply_scroll_effects();
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
