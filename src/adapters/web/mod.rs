//! Browser entry point: binds the controller to the live page.

pub mod dom;
pub mod leaflet;

use crate::config::SiteConfig;
use crate::core::controller::{detect_features, PageController, Wiring};
use crate::core::reveal::IntersectionSample;
use crate::domain::model::{Disposition, EventKind};
use crate::utils::logger;
use dom::{BrowserAlert, BrowserPage};
use leaflet::LeafletWidget;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent,
};

type Controller = Rc<PageController<BrowserAlert>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logger::init_browser_logger();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let controller: Controller = Rc::new(PageController::new(
        SiteConfig::default(),
        BrowserAlert::new(window),
    ));
    let page = BrowserPage::new(document.clone());

    // The module may start after DOMContentLoaded has already fired.
    if document.ready_state() == "loading" {
        let callback = Closure::once_into_js(move || on_ready(&controller, &page));
        document.add_event_listener_with_callback(
            EventKind::Ready.dom_name(),
            callback.unchecked_ref(),
        )?;
    } else {
        on_ready(&controller, &page);
    }

    Ok(())
}

fn on_ready(controller: &Controller, page: &BrowserPage) {
    tracing::info!("page ready, attaching behaviors");

    for wiring in detect_features(page, controller.config()) {
        let feature = wiring.feature();
        if let Err(e) = attach(controller, page, wiring) {
            tracing::warn!(?feature, "failed to attach listeners: {:?}", e);
        }
    }
}

fn attach(controller: &Controller, page: &BrowserPage, wiring: Wiring<Element>) -> Result<(), JsValue> {
    match wiring {
        Wiring::Map => {
            let mut widget = LeafletWidget::new();
            if let Some(summary) = controller.init_map(&mut widget) {
                tracing::info!(markers = summary.markers, "map ready");
            }
        }
        Wiring::Search { button, input } => {
            let (c, p, i) = (Rc::clone(controller), page.clone(), input.clone());
            listen(&button, EventKind::Click, move |_| {
                c.on_search(&p, &i);
            })?;

            let (c, p, i) = (Rc::clone(controller), page.clone(), input.clone());
            listen(&input, EventKind::KeyPress, move |event| {
                if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(|k| k.key()) {
                    c.on_search_key(&p, &i, &key);
                }
            })?;
        }
        Wiring::Subscribe { button, input } => {
            let c = Rc::clone(controller);
            listen(&button, EventKind::Click, move |_| {
                c.on_subscribe(&input);
            })?;
        }
        Wiring::DonationAmounts { buttons } => {
            let buttons = Rc::new(buttons);
            for (index, button) in buttons.iter().enumerate() {
                let (c, group) = (Rc::clone(controller), Rc::clone(&buttons));
                listen(button, EventKind::Click, move |_| {
                    c.on_amount_click(group.as_slice(), index);
                })?;
            }
        }
        Wiring::Forms { forms } => {
            for form in forms {
                let (c, f) = (Rc::clone(controller), form.clone());
                listen(&form, EventKind::Submit, move |event| {
                    apply(&event, c.on_submit(&f));
                })?;
            }
        }
        Wiring::SmoothScroll { links } => {
            for link in links {
                let (c, p, l) = (Rc::clone(controller), page.clone(), link.clone());
                listen(&link, EventKind::Click, move |event| {
                    apply(&event, c.on_anchor_click(&p, &l));
                })?;
            }
        }
        Wiring::ScrollReveal => {
            // Element geometry is only final after every subresource has loaded.
            if page.document().ready_state() == "complete" {
                start_reveal(controller, page)?;
            } else {
                let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
                let (c, p) = (Rc::clone(controller), page.clone());
                listen(&window, EventKind::Load, move |_| {
                    if let Err(e) = start_reveal(&c, &p) {
                        tracing::warn!("scroll reveal not started: {:?}", e);
                    }
                })?;
            }
        }
    }
    Ok(())
}

fn apply(event: &Event, disposition: Disposition) {
    if disposition == Disposition::PreventDefault {
        event.prevent_default();
    }
}

/// Listeners live for the whole page; the closure is never dropped.
fn listen(
    target: &EventTarget,
    kind: EventKind,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind.dom_name(), closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn start_reveal(controller: &Controller, page: &BrowserPage) -> Result<(), JsValue> {
    let reveal = controller.on_load(page);
    if reveal.is_empty() {
        return Ok(());
    }

    let options = controller.config().reveal.observer_options();
    let watched: Vec<Element> = reveal.elements().cloned().collect();
    let reveal = Rc::new(RefCell::new(reveal));

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let mut reveal = reveal.borrow_mut();
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = reveal.position(&target) else {
                    continue;
                };
                let sample = IntersectionSample {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                if reveal.on_intersection(index, sample) {
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for element in &watched {
        observer.observe(element);
    }
    tracing::debug!(count = watched.len(), "observing animated elements");
    Ok(())
}
