use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::{build_content_client, build_host_services};
use portfolio_runtime::{
    routes, AnimatedBackdrop, CaseStudyPowerBiPage, CaseStudyServiceNowPage, CaseStudySslPage,
    GenericCaseStudyPage, LandingPage, NotFoundPage, PortfolioProvider, ProjectDetailPage,
    SiteFooter,
};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Katherine Laxamana" />
        <Meta
            name="description"
            content="Personal portfolio of an I.T professional building AI and workflow automations."
        />

        <Router>
            <main class="site-root">
                <PortfolioEntry />
            </main>
        </Router>
    }
}

#[component]
pub fn PortfolioEntry() -> impl IntoView {
    let host_services = build_host_services();
    let content = build_content_client();

    if let Some(reason) = content.disabled_reason() {
        logging::warn!("content store disabled: {reason}");
    }

    // Held outside the route views so the welcome overlay plays once per page
    // load, not on every return to the landing route.
    let welcome_done = create_rw_signal(false);

    view! {
        <PortfolioProvider host_services content>
            <Routes>
                <Route path="" view=move || view! { <LandingPage welcome_done /> } />
                <Route path="/project/:id" view=ProjectDetailRoute />
                <Route
                    path=routes::CASE_STUDY_SSL_ROUTE
                    view=|| view! { <CaseStudyLayout><CaseStudySslPage /></CaseStudyLayout> }
                />
                <Route
                    path=routes::CASE_STUDY_SERVICENOW_ROUTE
                    view=|| view! { <CaseStudyLayout><CaseStudyServiceNowPage /></CaseStudyLayout> }
                />
                <Route
                    path=routes::CASE_STUDY_POWERBI_ROUTE
                    view=|| view! { <CaseStudyLayout><CaseStudyPowerBiPage /></CaseStudyLayout> }
                />
                <Route path="/case-study/:id" view=CaseStudyRoute />
                <Route path="/*any" view=NotFoundRoute />
            </Routes>
        </PortfolioProvider>
    }
}

#[component]
/// Backdrop and footer chrome shared by the dedicated case-study write-ups.
fn CaseStudyLayout(children: Children) -> impl IntoView {
    view! {
        <AnimatedBackdrop />
        {children()}
        <SiteFooter />
    }
}

#[component]
fn ProjectDetailRoute() -> impl IntoView {
    let params = use_params_map();
    let project_id = move || {
        params
            .with(|map| map.get("id").cloned())
            .and_then(|raw| raw.parse::<i64>().ok())
    };

    view! {
        {move || match project_id() {
            Some(id) => view! { <ProjectDetailPage project_id=id /> }.into_view(),
            None => view! { <NotFoundPage /> }.into_view(),
        }}
        <SiteFooter />
    }
}

#[component]
fn CaseStudyRoute() -> impl IntoView {
    let params = use_params_map();
    let case_study_id = move || {
        params
            .with(|map| map.get("id").cloned())
            .and_then(|raw| raw.parse::<i64>().ok())
    };

    view! {
        <AnimatedBackdrop />
        {move || match case_study_id() {
            Some(id) => view! { <GenericCaseStudyPage case_study_id=id /> }.into_view(),
            None => view! { <NotFoundPage /> }.into_view(),
        }}
        <SiteFooter />
    }
}

#[component]
fn NotFoundRoute() -> impl IntoView {
    view! {
        <NotFoundPage />
        <SiteFooter />
    }
}
