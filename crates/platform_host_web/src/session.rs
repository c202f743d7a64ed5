//! `sessionStorage`-backed store for one-shot navigation flags.

use platform_host::SessionStore;

#[cfg(target_arch = "wasm32")]
fn session_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .and_then(|w| w.session_storage().ok().flatten())
        .ok_or_else(|| "sessionStorage unavailable".to_string())
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser session store backed by `window.sessionStorage`.
pub struct WebSessionStore;

impl SessionStore for WebSessionStore {
    fn set_value(&self, key: &str, value: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            session_storage()?
                .set_item(key, value)
                .map_err(|e| format!("sessionStorage set_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn take_value(&self, key: &str) -> Result<Option<String>, String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = session_storage()?;
            let value = storage
                .get_item(key)
                .map_err(|e| format!("sessionStorage get_item failed: {e:?}"))?;
            if value.is_some() {
                storage
                    .remove_item(key)
                    .map_err(|e| format!("sessionStorage remove_item failed: {e:?}"))?;
            }
            Ok(value)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }
}
