//! Boot and event wiring.
//!
//! One [`WebApp`] is built per page load and shared by every handler through
//! `Rc<RefCell<_>>`. Handlers run to completion on the browser event loop, so
//! a borrow never outlives the callback that took it.

use crate::config::site_config;
use crate::dom::{self, js_error_message};
use crate::effects;
use crate::storage::LocalPrefs;
use crate::styles;
use crate::surface::DomSurface;
use anyhow::{Context, anyhow};
use gloo::timers::callback::Timeout;
use js_sys::Array;
use portfolio_core::{ObserverOptions, Synchronizer};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, IntersectionObserver, MouseEvent, Window};

pub type PageSync = Synchronizer<LocalPrefs, DomSurface>;

pub struct WebApp {
    pub sync: PageSync,
    notice_timer: Option<Timeout>,
}

pub type SharedApp = Rc<RefCell<WebApp>>;

fn js_err(err: JsValue) -> anyhow::Error {
    anyhow!(js_error_message(&err))
}

/// Build the app and attach every handler once.
///
/// # Errors
/// Returns an error when the page has no window/document or a handler cannot
/// be attached.
pub fn boot() -> anyhow::Result<SharedApp> {
    let window = dom::window().context("window unavailable")?;
    let document = dom::document().context("document unavailable")?;

    let marker = document.body().and_then(|body| body.get_attribute("data-variant"));
    let config = site_config(marker.as_deref());
    log::set_max_level(config.log_filter());
    styles::inject(&document);

    let effects_cfg = config.effects;
    let surface = DomSurface::capture(window.clone(), document.clone(), &config);
    let sync = Synchronizer::boot(LocalPrefs, surface, config);
    let app = Rc::new(RefCell::new(WebApp {
        sync,
        notice_timer: None,
    }));

    wire_preferences(&app).map_err(js_err)?;
    wire_navigation(&app, &window).map_err(js_err)?;
    wire_reveals(&app).map_err(js_err)?;
    wire_contact_form(&app).map_err(js_err)?;
    effects::start(&document, effects_cfg)
        .map_err(js_err)
        .context("starting effects")?;
    log::info!("page interactivity ready");
    Ok(app)
}

/// Boot now, or once the document has finished parsing.
pub fn boot_when_ready() {
    let Some(document) = dom::document() else {
        return;
    };
    if document.ready_state() != "loading" {
        report(boot());
        return;
    }
    let result = dom::listen(&document, "DOMContentLoaded", |_: Event| report(boot()));
    if let Err(err) = result {
        log::error!("could not wait for DOMContentLoaded: {}", js_error_message(&err));
    }
}

fn report(result: anyhow::Result<SharedApp>) {
    if let Err(err) = result {
        log::error!("boot failed: {err:#}");
    }
}

fn wire_preferences(app: &SharedApp) -> Result<(), JsValue> {
    let (toggle, buttons) = {
        let state = app.borrow();
        let page = state.sync.page();
        (page.theme_toggle().cloned(), page.lang_buttons().to_vec())
    };
    if let Some(toggle) = toggle {
        let app = app.clone();
        dom::listen(&toggle, "click", move |_: MouseEvent| {
            app.borrow_mut().sync.toggle_theme();
        })?;
    }
    for button in buttons {
        let app = app.clone();
        let code = button.get_attribute("data-lang").unwrap_or_default();
        dom::listen(&button, "click", move |_: MouseEvent| {
            if app.borrow_mut().sync.select_language(&code).is_none() {
                log::warn!("unsupported language button: {code}");
            }
        })?;
    }
    Ok(())
}

fn wire_navigation(app: &SharedApp, window: &Window) -> Result<(), JsValue> {
    let (links, toggle) = {
        let state = app.borrow();
        let page = state.sync.page();
        (page.nav_links().to_vec(), page.nav_toggle().cloned())
    };
    for link in links {
        let app = app.clone();
        let href = link.get_attribute("href").unwrap_or_default();
        dom::listen(&link, "click", move |event: MouseEvent| {
            event.prevent_default();
            app.borrow_mut().sync.follow_link(&href);
        })?;
    }
    if let Some(toggle) = toggle {
        let app = app.clone();
        dom::listen(&toggle, "click", move |_: MouseEvent| {
            app.borrow_mut().sync.toggle_menu();
        })?;
    }
    // Layout can also shift once images and fonts finish loading.
    for event in ["scroll", "resize", "load"] {
        let app = app.clone();
        dom::listen(window, event, move |_: Event| {
            app.borrow_mut().sync.on_scroll();
        })?;
    }
    Ok(())
}

fn wire_reveals(app: &SharedApp) -> Result<(), JsValue> {
    let targets = app.borrow().sync.page().reveal_targets().to_vec();
    if targets.is_empty() {
        return Ok(());
    }
    let handle = app.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for target in effects::intersecting_targets(&entries) {
                let index = handle.borrow().sync.page().reveal_index(&target);
                if let Some(index) = index
                    && handle.borrow_mut().sync.reveal(index)
                {
                    observer.unobserve(&target);
                }
            }
        },
    );
    let observer = effects::observer(ObserverOptions::reveal(), &callback)?;
    for target in &targets {
        observer.observe(target);
    }
    callback.forget();
    Ok(())
}

fn wire_contact_form(app: &SharedApp) -> Result<(), JsValue> {
    let Some(form) = app.borrow().sync.page().contact_form().cloned() else {
        return Ok(());
    };
    let app = app.clone();
    dom::listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        let submission = app.borrow().sync.page().read_contact_form();
        let Some(submission) = submission else {
            return;
        };
        let outcome = app.borrow_mut().sync.submit_contact(&submission, dom::now_ms());
        if let Err(err) = outcome {
            log::debug!("contact form rejected: {err}");
        }
        schedule_notice_timer(&app);
    })
}

/// Hold exactly one timer for the next notification deadline. Replacing the
/// held `Timeout` cancels the previous one.
fn schedule_notice_timer(app: &SharedApp) {
    let deadline = app.borrow().sync.next_notification_deadline();
    let timer = deadline.map(|at| {
        let delay = u32::try_from(at.saturating_sub(dom::now_ms())).unwrap_or(u32::MAX);
        let weak: Weak<RefCell<WebApp>> = Rc::downgrade(app);
        Timeout::new(delay, move || {
            let Some(app) = weak.upgrade() else {
                return;
            };
            app.borrow_mut().sync.advance_notifications(dom::now_ms());
            schedule_notice_timer(&app);
        })
    });
    app.borrow_mut().notice_timer = timer;
}
