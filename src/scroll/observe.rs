//! One-shot visibility triggers.
//!
//! Elements opt in through markup (marker classes and data attributes) and
//! are collected once at mount into typed [`Watchable`] records. [`watch`]
//! registers them with an IntersectionObserver, or falls back to bounded
//! scroll polling where the API is missing; both paths share the same
//! activate-at-most-once guard. Dropping the returned handle deregisters
//! everything.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use gloo_timers::callback::Interval;

use crate::anim::tween;
use crate::config;

const REVEAL_SELECTOR: &str =
    ".fade-in-up, .fade-in-left, .fade-in-right, .fade-in-down, .zoom-in, .rotate-in";
const ACTIVATED_CLASS: &str = "animated";

/// What activation does to an element. Each variant is terminal: it runs
/// once and the element is never observed again.
pub enum Activation {
    /// Add the fixed `animated` marker class.
    Reveal,
    /// Count the displayed number up from 0 with thousands separators,
    /// then snap to the exact terminal text.
    CountUp { target: i64, duration_ms: u32, prefix: String, suffix: String },
    /// Grow the inline width style from 0% to the target percentage.
    WidthGrow { target_percent: f64 },
    /// Move `data-src` into `src` on first visibility.
    LazyImage { src: String },
}

pub struct Watchable {
    pub element: Element,
    pub activation: Activation,
}

struct Slot {
    watchable: Watchable,
    activated: Cell<bool>,
}

/// Claim the one activation for a slot. Returns true exactly once.
fn first_claim(flag: &Cell<bool>) -> bool {
    !flag.replace(true)
}

/// Polling-fallback visibility check. `margin_px` moves the bottom edge of
/// the viewport used for the test, matching the observer's rootMargin.
fn in_viewport(rect_top: f64, viewport_height: f64, margin_px: f64) -> bool {
    rect_top <= viewport_height + margin_px
}

fn parse_count_up(
    count: Option<String>,
    duration: Option<String>,
    prefix: Option<String>,
    suffix: Option<String>,
) -> Activation {
    Activation::CountUp {
        target: count.and_then(|v| v.parse().ok()).unwrap_or(0),
        duration_ms: duration
            .and_then(|v| v.parse().ok())
            .unwrap_or(config::COUNT_UP_DEFAULT_MS),
        prefix: prefix.unwrap_or_default(),
        suffix: suffix.unwrap_or_default(),
    }
}

fn parse_width_grow(width: Option<String>) -> Activation {
    Activation::WidthGrow { target_percent: width.and_then(|v| v.parse().ok()).unwrap_or(0.0) }
}

fn width_style(percent: f64) -> String {
    format!("{}%", percent)
}

fn select_all(document: &Document, selector: &str) -> Vec<Element> {
    let mut elements = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(element) = list.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                elements.push(element);
            }
        }
    }
    elements
}

/// Elements carrying one of the reveal marker classes.
pub fn reveal_targets(document: &Document) -> Vec<Watchable> {
    select_all(document, REVEAL_SELECTOR)
        .into_iter()
        .map(|element| Watchable { element, activation: Activation::Reveal })
        .collect()
}

/// `.counter[data-count]` elements, with optional duration/prefix/suffix.
pub fn counter_targets(document: &Document) -> Vec<Watchable> {
    select_all(document, ".counter[data-count]")
        .into_iter()
        .map(|element| {
            let activation = parse_count_up(
                element.get_attribute("data-count"),
                element.get_attribute("data-duration"),
                element.get_attribute("data-prefix"),
                element.get_attribute("data-suffix"),
            );
            Watchable { element, activation }
        })
        .collect()
}

/// `.progress-bar[data-width]` elements.
pub fn progress_targets(document: &Document) -> Vec<Watchable> {
    select_all(document, ".progress-bar[data-width]")
        .into_iter()
        .map(|element| {
            let activation = parse_width_grow(element.get_attribute("data-width"));
            Watchable { element, activation }
        })
        .collect()
}

/// `img[data-src]` elements waiting for their real source.
pub fn lazy_image_targets(document: &Document) -> Vec<Watchable> {
    select_all(document, "img[data-src]")
        .into_iter()
        .filter_map(|element| {
            let src = element.get_attribute("data-src")?;
            Some(Watchable { element, activation: Activation::LazyImage { src } })
        })
        .collect()
}

/// Keeps the observation alive. `disconnect` (also run on drop) deregisters
/// the observer or cancels the fallback poll.
pub struct WatchHandle {
    observer: Option<IntersectionObserver>,
    callback: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>,
    poll: Option<Interval>,
}

impl WatchHandle {
    fn empty() -> Self {
        WatchHandle { observer: None, callback: None, poll: None }
    }

    pub fn disconnect(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.callback = None;
        self.poll = None;
    }
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        self.disconnect();
    }
}

fn supports_intersection_observer() -> bool {
    web_sys::window()
        .map(|window| {
            js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

/// Watch a set of elements and activate each at most once when it becomes
/// sufficiently visible. `threshold` is the visible fraction required;
/// `margin_px` shifts the bottom edge of the observation root.
///
/// An empty set is a no-op, and an unsupported observer API degrades to
/// scroll polling at a bounded rate with the same once-only semantics.
pub fn watch(watchables: Vec<Watchable>, threshold: f64, margin_px: i32) -> WatchHandle {
    if watchables.is_empty() {
        return WatchHandle::empty();
    }
    let slots: Rc<Vec<Slot>> = Rc::new(
        watchables
            .into_iter()
            .map(|watchable| Slot { watchable, activated: Cell::new(false) })
            .collect(),
    );

    if supports_intersection_observer() {
        if let Some(handle) = observer_watch(slots.clone(), threshold, margin_px) {
            return handle;
        }
    }
    poll_watch(slots, margin_px)
}

fn observer_watch(slots: Rc<Vec<Slot>>, threshold: f64, margin_px: i32) -> Option<WatchHandle> {
    let entry_slots = slots.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = match entry.dyn_into() {
                    Ok(entry) => entry,
                    Err(_) => continue,
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                if let Some(slot) =
                    entry_slots.iter().find(|slot| slot.watchable.element == target)
                {
                    if first_claim(&slot.activated) {
                        activate(&slot.watchable);
                    }
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(&format!("0px 0px {}px 0px", margin_px));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    for slot in slots.iter() {
        observer.observe(&slot.watchable.element);
    }
    Some(WatchHandle { observer: Some(observer), callback: Some(callback), poll: None })
}

fn poll_watch(slots: Rc<Vec<Slot>>, margin_px: i32) -> WatchHandle {
    let poll = Interval::new(config::SCROLL_POLL_MS, move || {
        let viewport_height = match web_sys::window()
            .and_then(|window| window.inner_height().ok())
            .and_then(|height| height.as_f64())
        {
            Some(height) => height,
            None => return,
        };
        for slot in slots.iter() {
            if slot.activated.get() {
                continue;
            }
            let rect = slot.watchable.element.get_bounding_client_rect();
            if in_viewport(rect.top(), viewport_height, margin_px as f64)
                && first_claim(&slot.activated)
            {
                activate(&slot.watchable);
            }
        }
    });
    WatchHandle { observer: None, callback: None, poll: Some(poll) }
}

fn activate(watchable: &Watchable) {
    match &watchable.activation {
        Activation::Reveal => {
            let _ = watchable.element.class_list().add_1(ACTIVATED_CLASS);
        }
        Activation::CountUp { target, duration_ms, prefix, suffix } => {
            run_count_up(&watchable.element, *target, *duration_ms, prefix, suffix);
        }
        Activation::WidthGrow { target_percent } => {
            run_width_grow(&watchable.element, *target_percent);
        }
        Activation::LazyImage { src } => {
            let _ = watchable.element.set_attribute("src", src);
            let _ = watchable.element.remove_attribute("data-src");
        }
    }
}

fn run_count_up(element: &Element, target: i64, duration_ms: u32, prefix: &str, suffix: &str) {
    let end_text = tween::counter_text(prefix, target, suffix);
    if target <= 0 {
        element.set_text_content(Some(&end_text));
        return;
    }
    let stepped = element.clone();
    let prefix = prefix.to_string();
    let suffix = suffix.to_string();
    let finished = element.clone();
    tween::run(
        duration_ms,
        move |progress| {
            let value = (target as f64 * progress).floor() as i64;
            stepped.set_text_content(Some(&tween::counter_text(&prefix, value, &suffix)));
        },
        // Snap to the exact terminal text; intermediate frames may round.
        move || finished.set_text_content(Some(&end_text)),
    );
}

fn run_width_grow(element: &Element, target_percent: f64) {
    let target = target_percent.clamp(0.0, 100.0);
    let bar: HtmlElement = match element.clone().dyn_into() {
        Ok(bar) => bar,
        Err(_) => return,
    };
    let _ = bar.style().set_property("width", &width_style(0.0));
    let stepped = bar.clone();
    tween::run(
        config::WIDTH_GROW_MS,
        move |progress| {
            let _ = stepped.style().set_property("width", &width_style(target * progress));
        },
        move || {
            let _ = bar.style().set_property("width", &width_style(target));
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_claim_fires_exactly_once() {
        let flag = Cell::new(false);
        assert!(first_claim(&flag));
        // A repeated visibility signal for the same element must not win
        // the claim again.
        assert!(!first_claim(&flag));
        assert!(!first_claim(&flag));
    }

    #[test]
    fn viewport_check_respects_margin() {
        assert!(in_viewport(500.0, 800.0, 0.0));
        assert!(!in_viewport(900.0, 800.0, 0.0));
        // Negative margin shrinks the viewport: the element must be further in.
        assert!(!in_viewport(780.0, 800.0, -50.0));
        assert!(in_viewport(740.0, 800.0, -50.0));
        // Positive margin fires early.
        assert!(in_viewport(900.0, 800.0, 150.0));
    }

    #[test]
    fn count_up_attributes_parse_with_defaults() {
        match parse_count_up(Some("1234".into()), None, Some("$".into()), Some("+".into())) {
            Activation::CountUp { target, duration_ms, prefix, suffix } => {
                assert_eq!(target, 1234);
                assert_eq!(duration_ms, config::COUNT_UP_DEFAULT_MS);
                assert_eq!(prefix, "$");
                assert_eq!(suffix, "+");
            }
            _ => panic!("expected CountUp"),
        }
    }

    #[test]
    fn malformed_numeric_attributes_fall_back() {
        match parse_count_up(Some("lots".into()), Some("fast".into()), None, None) {
            Activation::CountUp { target, duration_ms, .. } => {
                assert_eq!(target, 0);
                assert_eq!(duration_ms, config::COUNT_UP_DEFAULT_MS);
            }
            _ => panic!("expected CountUp"),
        }
        match parse_width_grow(Some("wide".into())) {
            Activation::WidthGrow { target_percent } => assert_eq!(target_percent, 0.0),
            _ => panic!("expected WidthGrow"),
        }
    }

    #[test]
    fn width_attribute_parses() {
        match parse_width_grow(Some("75".into())) {
            Activation::WidthGrow { target_percent } => assert_eq!(target_percent, 75.0),
            _ => panic!("expected WidthGrow"),
        }
    }

    #[test]
    fn terminal_width_style_has_no_fraction() {
        // A bar that grows to 75 must end at exactly "75%", whatever the
        // intermediate frames rounded to.
        assert_eq!(width_style(75.0), "75%");
        assert_eq!(width_style(100.0), "100%");
        assert_eq!(width_style(37.5), "37.5%");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    #[wasm_bindgen_test]
    fn scan_builds_typed_records_from_markup() {
        let document = document();
        let body = document.body().unwrap();
        let counter = document.create_element("span").unwrap();
        counter.set_class_name("counter");
        counter.set_attribute("data-count", "1234").unwrap();
        counter.set_attribute("data-prefix", "$").unwrap();
        counter.set_attribute("data-suffix", "+").unwrap();
        body.append_child(&counter).unwrap();

        let found = counter_targets(&document);
        assert_eq!(found.len(), 1);
        match &found[0].activation {
            Activation::CountUp { target, prefix, suffix, .. } => {
                assert_eq!(*target, 1234);
                assert_eq!(prefix, "$");
                assert_eq!(suffix, "+");
            }
            _ => panic!("expected CountUp"),
        }
        body.remove_child(&counter).unwrap();
    }

    #[wasm_bindgen_test]
    fn reveal_activation_adds_marker_class() {
        let document = document();
        let element = document.create_element("div").unwrap();
        element.set_class_name("fade-in-up");
        let watchable = Watchable { element: element.clone(), activation: Activation::Reveal };
        activate(&watchable);
        assert!(element.class_list().contains(ACTIVATED_CLASS));
    }

    #[wasm_bindgen_test]
    fn non_positive_count_jumps_to_terminal_text() {
        let document = document();
        let element = document.create_element("span").unwrap();
        let watchable = Watchable {
            element: element.clone(),
            activation: Activation::CountUp {
                target: 0,
                duration_ms: 2_000,
                prefix: String::new(),
                suffix: "+".into(),
            },
        };
        activate(&watchable);
        assert_eq!(element.text_content().unwrap(), "0+");
    }
}
