use crate::constants::{
    AGREE_BAR_SELECTOR, CARD_SELECTOR, HERO_ID, IN_VIEW_CLASS, RIBBON_SELECTOR,
};
use crate::dom::{self, Listener};
use crate::events;
use crate::sink::DomSink;
use crate::views;
use action_items_core::{
    hero_progress, BurstEmitter, BurstParams, EffectSurface, InstantClock, ParallaxParams,
    PointerSample, Reveal, Route, SparkleEmitter, SparkleParams,
};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub type Surface = EffectSurface<DomSink, InstantClock>;

/// DOM handles and listeners that belong to the currently rendered view.
/// Dropping it removes the view's listeners, including the sparkle trail.
struct MountedView {
    _listeners: Vec<Listener>,
    hero: Option<web::Element>,
    ribbons: Vec<web::HtmlElement>,
    reveals: Vec<(web::Element, Reveal)>,
    last_progress: Option<f32>,
}

impl MountedView {
    fn collect(document: &web::Document, listeners: Vec<Listener>) -> Self {
        let ribbons = dom::query_all(document, RIBBON_SELECTOR)
            .into_iter()
            .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
            .collect();
        let mut reveals: Vec<(web::Element, Reveal)> = dom::query_all(document, CARD_SELECTOR)
            .into_iter()
            .map(|el| (el, Reveal::card()))
            .collect();
        reveals.extend(
            dom::query_all(document, AGREE_BAR_SELECTOR)
                .into_iter()
                .map(|el| (el, Reveal::any())),
        );
        Self {
            _listeners: listeners,
            hero: document.get_element_by_id(HERO_ID),
            ribbons,
            reveals,
            last_progress: None,
        }
    }
}

pub struct App {
    pub window: web::Window,
    pub document: web::Document,
    root: web::Element,
    surface: Surface,
    sparkle: SparkleEmitter<StdRng>,
    burst: BurstEmitter<StdRng>,
    parallax: ParallaxParams,
    route: Option<Route>,
    view: Option<MountedView>,
}

impl App {
    pub fn new(window: web::Window, document: web::Document, root: web::Element) -> Self {
        let sink = DomSink::new(document.clone());
        Self {
            surface: EffectSurface::new(sink, InstantClock::new()),
            sparkle: SparkleEmitter::new(SparkleParams::default(), StdRng::from_entropy()),
            burst: BurstEmitter::new(BurstParams::default(), StdRng::from_entropy()),
            parallax: ParallaxParams::default(),
            route: None,
            view: None,
            window,
            document,
            root,
        }
    }

    pub fn route(&self) -> Option<Route> {
        self.route
    }

    pub fn on_pointer_move(&mut self, sample: PointerSample) -> usize {
        self.sparkle.on_pointer_move(sample, &mut self.surface)
    }

    /// Heart burst at a client point. Reduced motion is read on every call.
    pub fn heart_burst(&mut self, x: f32, y: f32) -> usize {
        let reduced = dom::prefers_reduced_motion(&self.window);
        self.burst.fire(Vec2::new(x, y), reduced, &mut self.surface)
    }

    /// Remove expired particles.
    pub fn tick(&mut self) -> usize {
        self.surface.tick()
    }

    pub fn pending_particles(&self) -> usize {
        self.surface.pending()
    }

    pub fn apply_scroll_effects(&mut self) {
        let Some(view) = self.view.as_mut() else {
            return;
        };
        if let Some(hero) = &view.hero {
            let rect = hero.get_bounding_client_rect();
            let progress = hero_progress(rect.top() as f32, rect.height() as f32);
            if view.last_progress != Some(progress) {
                let offsets = self.parallax.ribbon_offsets(progress);
                for (ribbon, offset) in view.ribbons.iter().zip(offsets) {
                    dom::set_translate_y(ribbon, offset);
                }
                view.last_progress = Some(progress);
            }
        }
        let vh = dom::viewport_height(&self.window);
        for (el, reveal) in view.reveals.iter_mut() {
            let rect = el.get_bounding_client_rect();
            if reveal.update(rect.top() as f32, rect.height() as f32, vh) {
                _ = el.class_list().add_1(IN_VIEW_CLASS);
            }
        }
    }

    fn unmount(&mut self) {
        self.sparkle.deactivate();
        self.view = None;
    }
}

/// Render `route` into the root and wire its listeners. The previous view's
/// listeners are dropped first; particles it spawned keep their deadlines.
pub fn mount(app: &Rc<RefCell<App>>, route: Option<Route>) {
    let (window, document) = {
        let mut a = app.borrow_mut();
        a.unmount();
        views::render(&a.document, &a.root, route);
        a.route = route;
        (a.window.clone(), a.document.clone())
    };
    let Some(route) = route else {
        return;
    };

    let mut listeners = Vec::new();
    let reduced = dom::prefers_reduced_motion(&window);
    let sparkles = app.borrow_mut().sparkle.activate(reduced);
    if sparkles {
        listeners.extend(events::wire_pointermove(&window, app));
    }
    listeners.extend(events::wire_view_controls(&document, route, app));

    let view = MountedView::collect(&document, listeners);
    app.borrow_mut().view = Some(view);
    log::info!(
        "[route] mounted {} (sparkles {})",
        route.path(),
        if sparkles { "on" } else { "off" }
    );
}

/// Mount whatever the current location points at.
pub fn mount_location(app: &Rc<RefCell<App>>) {
    let path = app
        .borrow()
        .window
        .location()
        .pathname()
        .unwrap_or_else(|_| "/".to_string());
    let route = Route::from_path(&path);
    if route.is_none() {
        log::warn!("[route] no view for {}", path);
    }
    mount(app, route);
}

/// Push `route` onto the history stack and mount it at the top of the page.
pub fn navigate(app: &Rc<RefCell<App>>, route: Route) {
    let window = app.borrow().window.clone();
    match window.history() {
        Ok(history) => {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(route.path())) {
                log::debug!("[route] pushState failed: {:?}", e);
            }
        }
        Err(e) => log::debug!("[route] no history: {:?}", e),
    }
    mount(app, Some(route));
    window.scroll_to_with_x_and_y(0.0, 0.0);
}
