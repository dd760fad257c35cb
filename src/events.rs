use crate::app::{self, App};
use crate::constants::{AGREE_BUTTON_ID, BACK_LINK_ID, POINTER_MOVE_EVENT, PRINT_BUTTON_ID};
use crate::dom::{self, Listener};
use action_items_core::{PointerSample, Route};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Sparkle trail subscription. Dropping the returned listener stops new
/// sparkles without touching those already on screen.
pub fn wire_pointermove(window: &web::Window, app: &Rc<RefCell<App>>) -> Option<Listener> {
    let app = app.clone();
    Listener::new(window.as_ref(), POINTER_MOVE_EVENT, move |ev: web::Event| {
        let Some((x, y)) = dom::client_point(&ev) else {
            return;
        };
        let sample = PointerSample::new(ev.time_stamp(), x, y);
        if let Ok(mut a) = app.try_borrow_mut() {
            a.on_pointer_move(sample);
        }
    })
}

pub fn wire_view_controls(
    document: &web::Document,
    route: Route,
    app: &Rc<RefCell<App>>,
) -> Vec<Listener> {
    match route {
        Route::Home => [
            wire_agree(document, app),
            wire_print(document, app),
        ]
        .into_iter()
        .flatten()
        .collect(),
        Route::Love => wire_back_home(document, app).into_iter().collect(),
    }
}

fn burst_at_event(app: &Rc<RefCell<App>>, ev: &web::Event) {
    if let Some((x, y)) = dom::client_point(ev) {
        if let Ok(mut a) = app.try_borrow_mut() {
            a.heart_burst(x, y);
        }
    }
}

// Navigation replaces the view whose listener is running, so it is deferred
// until the handler has returned.
fn navigate_later(app: &Rc<RefCell<App>>, route: Route) {
    let app = app.clone();
    spawn_local(async move {
        app::navigate(&app, route);
    });
}

fn wire_agree(document: &web::Document, app: &Rc<RefCell<App>>) -> Option<Listener> {
    let app = app.clone();
    Listener::click_by_id(document, AGREE_BUTTON_ID, move |ev| {
        burst_at_event(&app, &ev);
        log::info!("[click] agreed");
        navigate_later(&app, Route::Love);
    })
}

fn wire_print(document: &web::Document, app: &Rc<RefCell<App>>) -> Option<Listener> {
    let app = app.clone();
    Listener::click_by_id(document, PRINT_BUTTON_ID, move |ev| {
        burst_at_event(&app, &ev);
        let window = app.borrow().window.clone();
        _ = window.print();
    })
}

fn wire_back_home(document: &web::Document, app: &Rc<RefCell<App>>) -> Option<Listener> {
    let app = app.clone();
    Listener::click_by_id(document, BACK_LINK_ID, move |ev| {
        ev.prevent_default();
        navigate_later(&app, Route::Home);
    })
}

// Back/forward for the lifetime of the page. Fragment jumps within the
// current view also fire popstate and are left alone.
pub fn wire_popstate(window: &web::Window, app: &Rc<RefCell<App>>) {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PopStateEvent| {
        let path = app
            .borrow()
            .window
            .location()
            .pathname()
            .unwrap_or_else(|_| "/".to_string());
        let route = Route::from_path(&path);
        if route.is_some() && route == app.borrow().route() {
            return;
        }
        app::mount_location(&app);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    closure.forget();
}
