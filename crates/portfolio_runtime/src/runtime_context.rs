//! Runtime provider and context wiring for the portfolio site.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, and the host
//! bootstrap wiring. UI composition stays in [`crate::components`].
#![allow(clippy::clone_on_copy)]

use content_store::StoreClient;
use leptos::*;
use platform_host::HostServices;

use crate::{
    effect_executor,
    host::PortfolioHostContext,
    model::PortfolioState,
    reducer::{reduce_portfolio, PortfolioAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading portfolio state and dispatching [`PortfolioAction`] values.
pub struct PortfolioRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<PortfolioHostContext>,
    /// Long-lived reactive owner for runtime-managed resources that must outlive page views.
    pub owner: Owner,
    /// Reactive portfolio state signal.
    pub state: RwSignal<PortfolioState>,
    /// Queue of runtime effects emitted by the reducer and processed by the host.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<PortfolioAction>,
}

impl PortfolioRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: PortfolioAction) {
        self.dispatch.call(action);
    }
}

fn install_runtime_orchestration(runtime: PortfolioRuntimeContext) {
    runtime
        .host
        .get_value()
        .install_boot_hydration(runtime.dispatch);
    effect_executor::install(runtime);
}

#[component]
/// Provides [`PortfolioRuntimeContext`] to descendant components and boots persisted state.
pub fn PortfolioProvider(
    /// Injected browser host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Shared table-store client assembled by the entry layer.
    content: StoreClient,
    children: Children,
) -> impl IntoView {
    let host = store_value(PortfolioHostContext::new(host_services, content));
    let owner = Owner::current().expect("PortfolioProvider owner");
    let state = create_rw_signal(PortfolioState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: PortfolioAction| {
        let mut portfolio = state.get_untracked();
        let previous = portfolio.clone();

        match reduce_portfolio(&mut portfolio, action) {
            Ok(new_effects) => {
                if portfolio != previous {
                    state.set(portfolio);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("portfolio reducer error: {err}"),
        }
    });

    let runtime = PortfolioRuntimeContext {
        host,
        owner,
        state,
        effects,
        dispatch,
    };

    provide_context(runtime.clone());

    install_runtime_orchestration(runtime);

    children().into_view()
}

/// Returns the current [`PortfolioRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`PortfolioProvider`].
pub fn use_portfolio_runtime() -> PortfolioRuntimeContext {
    use_context::<PortfolioRuntimeContext>().expect("PortfolioRuntimeContext not provided")
}
