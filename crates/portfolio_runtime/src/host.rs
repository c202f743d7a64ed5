//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Effect execution, storage access, and document/scroll queries live behind this typed boundary
//! so the reducer stays pure and every consumer can run against in-memory services in tests.

mod boot;
mod host_ui;
mod persistence_effects;

use std::rc::Rc;

use content_store::StoreClient;
use leptos::{Callback, SignalGetUntracked};
use platform_host::{HostServices, PrefsStore, SessionStore, SystemProbe};

use crate::{
    components::PortfolioRuntimeContext,
    model::Theme,
    persistence,
    reducer::{PortfolioAction, RuntimeEffect},
};

#[derive(Clone)]
/// Host service bundle for portfolio runtime side effects.
pub struct PortfolioHostContext {
    services: HostServices,
    content: Rc<StoreClient>,
}

impl PortfolioHostContext {
    /// Bundles the injected browser services with the shared table-store client.
    pub fn new(services: HostServices, content: StoreClient) -> Self {
        Self {
            services,
            content: Rc::new(content),
        }
    }

    /// Returns the full service bundle for persistence helpers.
    pub fn services(&self) -> &HostServices {
        &self.services
    }

    /// Returns the configured preference store.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.services.prefs.clone()
    }

    /// Returns the configured session flag store.
    pub fn session_store(&self) -> Rc<dyn SessionStore> {
        self.services.session.clone()
    }

    /// Returns the configured system environment probe.
    pub fn system_probe(&self) -> Rc<dyn SystemProbe> {
        self.services.system.clone()
    }

    /// Returns the shared table-store client.
    pub fn content_client(&self) -> Rc<StoreClient> {
        self.content.clone()
    }

    /// Installs boot hydration side effects for the portfolio provider.
    ///
    /// Boot order:
    /// 1. sample the viewport once and seed the collapsed card limit
    /// 2. resolve the initial theme and apply it to the document
    /// 3. hydrate collections from the local snapshot
    /// 4. sync every collection against the table store
    pub fn install_boot_hydration(&self, dispatch: Callback<PortfolioAction>) {
        boot::install_boot_hydration(self.clone(), dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: PortfolioRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PersistSnapshot { rows } => {
                persistence_effects::persist_snapshot(self.clone(), rows)
            }
            RuntimeEffect::PersistTheme => {
                persistence_effects::persist_theme(self.clone(), runtime)
            }
            RuntimeEffect::ApplyThemeToDocument => {
                host_ui::apply_document_theme(runtime.state.get_untracked().theme)
            }
        }
    }

    /// Raises the one-shot case-study return flag ahead of back navigation.
    pub fn raise_return_flag(&self) {
        persistence::raise_return_to_case_studies(&self.services);
    }

    /// Consumes the one-shot case-study return flag, reporting whether it was raised.
    pub fn take_return_flag(&self) -> bool {
        persistence::take_return_to_case_studies(&self.services)
    }

    /// Applies `theme` to the document root and body immediately.
    pub fn apply_document_theme(&self, theme: Theme) {
        host_ui::apply_document_theme(theme);
    }

    /// Returns the current window scroll offset.
    pub fn current_scroll_y(&self) -> f64 {
        host_ui::current_scroll_y()
    }

    /// Returns the current location hash with the leading `#` stripped.
    pub fn location_hash(&self) -> Option<String> {
        host_ui::location_hash()
    }

    /// Smooth-scrolls the window to a landing section anchor.
    pub fn scroll_to_section(&self, dom_id: &str) {
        host_ui::scroll_to_section(dom_id);
    }

    /// Smooth-scrolls a section into view after a short delay, for hash navigation targets that
    /// mount together with the landing page.
    pub fn scroll_section_into_view_soon(&self, dom_id: &str) {
        host_ui::scroll_section_into_view_soon(dom_id);
    }

    /// Jumps the window scroll position back to the top of the page.
    pub fn scroll_to_top(&self) {
        host_ui::scroll_to_top();
    }

    /// Locks or releases body scrolling while an overlay menu is open.
    pub fn lock_body_scroll(&self, locked: bool) {
        host_ui::lock_body_scroll(locked);
    }

    /// Returns `(id, offset_top, height)` for each landing section currently in the document.
    pub fn section_metrics(&self, ids: &[&'static str]) -> Vec<(&'static str, f64, f64)> {
        host_ui::section_metrics(ids)
    }
}
