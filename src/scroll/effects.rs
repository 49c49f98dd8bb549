//! Continuous scroll-driven effects and smooth-scroll helpers.
//!
//! One window scroll listener drives the hero parallax, `[data-parallax]`
//! translations and the `.scroll-progress` bar. Missing markup degrades each
//! effect to a no-op. The returned handle removes the listener when dropped.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config;

const DEFAULT_PARALLAX_SPEED: f64 = 0.5;

pub struct ScrollEffects {
    window: Window,
    callback: Option<Closure<dyn FnMut()>>,
}

impl ScrollEffects {
    pub fn detach(&mut self) {
        if let Some(callback) = self.callback.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
        }
    }
}

impl Drop for ScrollEffects {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Attach the scroll listener and run it once for the initial position.
pub fn attach(document: &Document) -> Option<ScrollEffects> {
    let window = web_sys::window()?;
    let document = document.clone();
    let callback = Closure::wrap(Box::new(move || {
        let scrolled = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
        apply_parallax(&document, scrolled);
        apply_scroll_progress(&document, scrolled);
    }) as Box<dyn FnMut()>);

    window
        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
        .ok()?;
    // Initial check
    let _ = callback
        .as_ref()
        .unchecked_ref::<web_sys::js_sys::Function>()
        .call0(&JsValue::NULL);
    Some(ScrollEffects { window, callback: Some(callback) })
}

fn apply_parallax(document: &Document, scrolled: f64) {
    if let Some(hero) = document
        .query_selector(".hero-section")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = hero
            .style()
            .set_property("background-position", &format!("center {}px", scrolled * 0.5));
    }

    if let Ok(list) = document.query_selector_all("[data-parallax]") {
        for i in 0..list.length() {
            let element = match list.item(i).and_then(|node| node.dyn_into::<HtmlElement>().ok()) {
                Some(element) => element,
                None => continue,
            };
            let speed = element
                .get_attribute("data-parallax")
                .and_then(|v| v.parse::<f64>().ok())
                .unwrap_or(DEFAULT_PARALLAX_SPEED);
            let _ = element
                .style()
                .set_property("transform", &format!("translateY({}px)", -(scrolled * speed)));
        }
    }
}

fn apply_scroll_progress(document: &Document, scrolled: f64) {
    let bar = match document
        .query_selector(".scroll-progress")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        Some(bar) => bar,
        None => return,
    };
    let document_height =
        document.document_element().map(|root| root.scroll_height() as f64).unwrap_or(0.0);
    let viewport_height = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let percent = scroll_progress_percent(scrolled, document_height, viewport_height);
    let _ = bar.style().set_property("width", &format!("{}%", percent));
}

fn scroll_progress_percent(scrolled: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scrolled / scrollable * 100.0).clamp(0.0, 100.0)
}

pub fn scroll_to_y(y: f64) {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(y);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smooth-scroll an element into view below the fixed header and record the
/// anchor in the URL. Missing targets are ignored.
pub fn scroll_to_element(id: &str, header_offset: f64) {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let target: Option<Element> =
        window.document().and_then(|document| document.get_element_by_id(id));
    if let Some(target) = target {
        let rect = target.get_bounding_client_rect();
        let y = rect.top() + window.scroll_y().unwrap_or(0.0) - header_offset;
        scroll_to_y(y.max(0.0));
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&format!("#{}", id)));
        }
    }
}

/// Convenience wrapper used by in-page anchor links.
pub fn scroll_to_section(id: &str) {
    scroll_to_element(id, config::HEADER_SCROLL_OFFSET_PX);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped_fraction_of_scrollable_height() {
        assert_eq!(scroll_progress_percent(0.0, 2_000.0, 800.0), 0.0);
        assert_eq!(scroll_progress_percent(600.0, 2_000.0, 800.0), 50.0);
        assert_eq!(scroll_progress_percent(1_200.0, 2_000.0, 800.0), 100.0);
        assert_eq!(scroll_progress_percent(5_000.0, 2_000.0, 800.0), 100.0);
    }

    #[test]
    fn progress_handles_short_documents() {
        // Nothing to scroll: the bar stays empty instead of dividing by zero.
        assert_eq!(scroll_progress_percent(10.0, 700.0, 800.0), 0.0);
    }
}
