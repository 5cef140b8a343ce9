//! Decorative effects of the portfolio variant.

use crate::dom::{self, query_all_html, set_style};
use gloo::timers::callback::Timeout;
use js_sys::Array;
use portfolio_core::constants::{SKILL_BAR_REPLAY_DELAY_MS, TYPING_START_DELAY_MS};
use portfolio_core::{
    EffectsConfig, ObserverOptions, SkillBarReplay, TypingSchedule, TypingStep, particle_animation,
    particle_delay, particle_pull,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent,
};

/// Start whichever effects the config enables.
///
/// # Errors
/// Returns an error if an observer or listener cannot be created.
pub fn start(document: &Document, effects: EffectsConfig) -> Result<(), JsValue> {
    if effects.skill_bars {
        observe_skill_bars(document)?;
    }
    if effects.particles {
        animate_particles(document)?;
    }
    if effects.typing {
        start_typing(document);
    }
    Ok(())
}

/// Build an intersection observer from core options.
///
/// # Errors
/// Returns an error if the browser rejects the options.
pub fn observer(
    options: ObserverOptions,
    callback: &Closure<dyn FnMut(Array, IntersectionObserver)>,
) -> Result<IntersectionObserver, JsValue> {
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);
    IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
}

pub(crate) fn intersecting_targets(entries: &Array) -> impl Iterator<Item = web_sys::Element> + '_ {
    entries
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
        .filter(IntersectionObserverEntry::is_intersecting)
        .map(|entry| entry.target())
}

fn observe_skill_bars(document: &Document) -> Result<(), JsValue> {
    let bars = query_all_html(document, ".skill-progress");
    if bars.is_empty() {
        return Ok(());
    }
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, _observer: IntersectionObserver| {
            for target in intersecting_targets(&entries) {
                let Ok(bar) = target.dyn_into::<HtmlElement>() else {
                    continue;
                };
                let width = bar.style().get_property_value("width").unwrap_or_default();
                let Some(replay) = SkillBarReplay::capture(&width) else {
                    continue;
                };
                let _ = bar.style().set_property("width", SkillBarReplay::COLLAPSED);
                Timeout::new(SKILL_BAR_REPLAY_DELAY_MS, move || {
                    let _ = bar.style().set_property("width", &replay.target_width);
                })
                .forget();
            }
        },
    );
    let observer = observer(ObserverOptions::skill_bars(), &callback)?;
    for bar in &bars {
        observer.observe(bar);
    }
    callback.forget();
    Ok(())
}

fn animate_particles(document: &Document) -> Result<(), JsValue> {
    for (index, particle) in query_all_html(document, ".particle").into_iter().enumerate() {
        let style = particle.style();
        let _ = style.set_property("animation", &particle_animation(index));
        let _ = style.set_property("animation-delay", &particle_delay(index));

        let tracked = particle.clone();
        dom::listen(&particle, "mousemove", move |event: MouseEvent| {
            let rect = tracked.get_bounding_client_rect();
            let dx = f64::from(event.client_x()) - (rect.left() + rect.width() / 2.0);
            let dy = f64::from(event.client_y()) - (rect.top() + rect.height() / 2.0);
            if let Some(transform) = particle_pull(dx, dy) {
                set_style(&tracked, "transform", &transform);
            }
        })?;
        let tracked = particle.clone();
        dom::listen(&particle, "mouseleave", move |_: MouseEvent| {
            set_style(&tracked, "transform", "none");
        })?;
    }
    Ok(())
}

fn start_typing(document: &Document) {
    let lines = query_all_html(document, ".code-line");
    if lines.is_empty() {
        return;
    }
    let lengths = lines
        .iter()
        .map(|line| line.text_content().unwrap_or_default().chars().count())
        .collect();
    let schedule = Rc::new(RefCell::new(TypingSchedule::new(lengths)));
    type_after(Rc::new(lines), schedule, TYPING_START_DELAY_MS);
}

fn type_after(lines: Rc<Vec<HtmlElement>>, schedule: Rc<RefCell<TypingSchedule>>, delay_ms: u32) {
    Timeout::new(delay_ms, move || {
        let step = schedule.borrow_mut().step();
        if let TypingStep::Reveal { line, delay_ms } = step {
            if let Some(element) = lines.get(line) {
                let _ = element.style().set_property("opacity", "1");
            }
            type_after(lines, schedule, delay_ms);
        }
    })
    .forget();
}
