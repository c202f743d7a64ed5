#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::model::Theme;
#[cfg(target_arch = "wasm32")]
use crate::motion;

#[cfg(target_arch = "wasm32")]
const HASH_SCROLL_DELAY_MS: i32 = 100;

pub(super) fn apply_document_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        let mut targets: Vec<web_sys::Element> = Vec::new();
        if let Some(root) = document.document_element() {
            targets.push(root);
        }
        if let Some(body) = document.body() {
            targets.push(body.into());
        }
        for element in targets {
            let classes = element.class_list();
            let _ = if theme.is_dark() {
                classes.add_1("dark")
            } else {
                classes.remove_1("dark")
            };
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = theme;
}

pub(super) fn current_scroll_y() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            return window.scroll_y().unwrap_or(0.0);
        }
    }
    0.0
}

pub(super) fn location_hash() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let hash = web_sys::window()?.location().hash().ok()?;
        let section = hash.strip_prefix('#').unwrap_or(&hash);
        if !section.is_empty() {
            return Some(section.to_string());
        }
    }
    None
}

pub(super) fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

pub(super) fn scroll_to_section(dom_id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let Some(section) = document.get_element_by_id(dom_id) else {
            return;
        };
        let Some(section) = section.dyn_ref::<web_sys::HtmlElement>() else {
            return;
        };

        let options = web_sys::ScrollToOptions::new();
        options.set_top(motion::section_scroll_target(f64::from(
            section.offset_top(),
        )));
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = dom_id;
}

pub(super) fn scroll_section_into_view_soon(dom_id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let dom_id = dom_id.to_string();
        let callback = Closure::once_into_js(move || {
            let Some(document) = web_sys::window().and_then(|window| window.document()) else {
                return;
            };
            if let Some(section) = document.get_element_by_id(&dom_id) {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                options.set_block(web_sys::ScrollLogicalPosition::Start);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        });
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            HASH_SCROLL_DELAY_MS,
        );
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = dom_id;
}

pub(super) fn lock_body_scroll(locked: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        else {
            return;
        };
        let overflow = if locked { "hidden" } else { "unset" };
        let _ = body.style().set_property("overflow", overflow);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = locked;
}

pub(super) fn section_metrics(ids: &[&'static str]) -> Vec<(&'static str, f64, f64)> {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            return ids
                .iter()
                .filter_map(|id| {
                    let element = document.get_element_by_id(id)?;
                    let element = element.dyn_ref::<web_sys::HtmlElement>()?;
                    Some((
                        *id,
                        f64::from(element.offset_top()),
                        f64::from(element.offset_height()),
                    ))
                })
                .collect();
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = ids;
    Vec::new()
}
