//! Browser environment probe for color-scheme and viewport samples.

use platform_host::SystemProbe;

#[derive(Debug, Clone, Copy, Default)]
/// Browser probe reading `matchMedia` and the window geometry.
pub struct WebSystemProbe;

impl SystemProbe for WebSystemProbe {
    fn prefers_dark_color_scheme(&self) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(query)) = window.match_media("(prefers-color-scheme: dark)") {
                    return query.matches();
                }
            }
        }
        false
    }

    fn viewport_width(&self) -> Option<f64> {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                return window.inner_width().ok().and_then(|value| value.as_f64());
            }
        }
        None
    }
}
