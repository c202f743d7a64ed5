use leptos::{create_effect, spawn_local, Callable, Callback};

use crate::{
    host::PortfolioHostContext,
    loader,
    model::{collapsed_limit_for_viewport, resolve_initial_theme},
    persistence,
    reducer::PortfolioAction,
};

pub(super) fn install_boot_hydration(
    host: PortfolioHostContext,
    dispatch: Callback<PortfolioAction>,
) {
    create_effect(move |_| {
        let dispatch = dispatch;
        let host = host.clone();

        let limit = collapsed_limit_for_viewport(host.system_probe().viewport_width());
        dispatch.call(PortfolioAction::SetCollapsedLimit { limit });

        spawn_local(async move {
            let saved = persistence::load_saved_theme(host.services()).await;
            let theme =
                resolve_initial_theme(saved, host.system_probe().prefers_dark_color_scheme());
            dispatch.call(PortfolioAction::HydrateTheme { theme });

            for rows in persistence::load_content_snapshots(host.services()).await {
                dispatch.call(PortfolioAction::HydrateCollection { rows });
            }

            let content = host.content_client();
            for outcome in loader::sync_all_collections(&content).await {
                dispatch.call(PortfolioAction::CollectionSynced { outcome });
            }
        });
    });
}
