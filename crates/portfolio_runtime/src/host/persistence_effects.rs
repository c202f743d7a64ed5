use leptos::{logging, spawn_local, SignalGetUntracked};

use crate::{
    components::PortfolioRuntimeContext, host::PortfolioHostContext, model::CollectionRows,
    persistence,
};

pub(super) fn persist_snapshot(host: PortfolioHostContext, rows: CollectionRows) {
    spawn_local(async move {
        if let Err(err) = persistence::persist_snapshot(host.services(), &rows).await {
            logging::warn!(
                "persist {} snapshot failed: {err}",
                rows.collection().label()
            );
        }
    });
}

pub(super) fn persist_theme(host: PortfolioHostContext, runtime: PortfolioRuntimeContext) {
    let theme = runtime.state.get_untracked().theme;
    spawn_local(async move {
        if let Err(err) = persistence::persist_theme(host.services(), theme).await {
            logging::warn!("persist theme failed: {err}");
        }
    });
}
