pub mod components;
pub mod loader;
pub mod model;
pub mod motion;
pub mod persistence;
pub mod reducer;
pub mod routes;

mod effect_executor;
mod host;
mod runtime_context;

pub use components::{
    use_portfolio_runtime, AnimatedBackdrop, CaseStudyPowerBiPage, CaseStudyServiceNowPage,
    CaseStudySslPage, GenericCaseStudyPage, LandingPage, NotFoundPage, PortfolioProvider,
    PortfolioRuntimeContext, ProjectDetailPage, SiteFooter,
};
pub use model::*;
pub use persistence::{
    load_content_snapshots, load_saved_theme, persist_snapshot, persist_theme,
    raise_return_to_case_studies, take_return_to_case_studies,
};
pub use reducer::{reduce_portfolio, PortfolioAction, RuntimeEffect, SyncOutcome};
