//! Portfolio page composition and interaction surfaces.

mod about;
mod backdrop;
mod cards;
mod case_studies;
mod hero;
mod navbar;
mod not_found;
mod portfolio;
mod project_detail;
mod welcome;

use leptos::*;
use site_ui::prelude::*;

use self::{
    about::AboutSection, hero::HeroSection, navbar::NavBar, portfolio::PortfolioSection,
    welcome::WelcomeScreen,
};

use crate::{
    model::{
        ContentCollection, PortfolioTab, CONTACT_MAIL_URL, HERO_ROTATION_WORDS, HERO_TECH_BADGES,
        SOCIAL_LINKS, TECH_STACK,
    },
    motion,
    reducer::PortfolioAction,
    routes,
};

pub use self::{
    backdrop::AnimatedBackdrop,
    case_studies::{
        CaseStudyPowerBiPage, CaseStudyServiceNowPage, CaseStudySslPage, GenericCaseStudyPage,
    },
    not_found::NotFoundPage,
    project_detail::ProjectDetailPage,
};
pub use crate::runtime_context::{use_portfolio_runtime, PortfolioProvider, PortfolioRuntimeContext};

#[component]
/// Row of external social profile links, shared by the welcome overlay and hero.
fn SocialIconRow() -> impl IntoView {
    view! {
        <Cluster gap=LayoutGap::Lg justify=LayoutJustify::Center ui_slot="social-links">
            <For each=move || SOCIAL_LINKS.to_vec() key=|link| link.name let:link>
                <LinkButton
                    href=link.url.to_string()
                    external=true
                    variant=ButtonVariant::Quiet
                    aria_label=link.name.to_string()
                    ui_slot="social-link"
                >
                    {link.name}
                </LinkButton>
            </For>
        </Cluster>
    }
}

#[component]
/// Light/dark switch wired to the runtime theme state.
fn ThemeToggle(#[prop(optional)] layout_class: Option<&'static str>) -> impl IntoView {
    let runtime = use_portfolio_runtime();
    let state = runtime.state;

    view! {
        <Button
            variant=ButtonVariant::Quiet
            layout_class=layout_class.unwrap_or("")
            aria_label="Toggle dark mode".to_string()
            ui_slot="theme-toggle"
            on_click=Callback::new(move |_| runtime.dispatch_action(PortfolioAction::ToggleTheme))
        >
            {move || {
                if state.with(|state| state.theme.is_dark()) {
                    "Light mode"
                } else {
                    "Dark mode"
                }
            }}
        </Button>
    }
}

#[component]
/// Footer line shared by every page layout.
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <hr class="site-footer-rule" />
            <Text role=TextRole::Caption tone=TextTone::Secondary>
                "© 2025 "
                <a href="https://flowbite.com/" class="site-footer-link">"kayelaxamana™"</a>
                ". All Rights Reserved."
            </Text>
        </footer>
    }
}

#[component]
/// Landing experience: the welcome overlay once per app instance, then the
/// hero, about, and portfolio sections under the fixed navbar.
pub fn LandingPage(
    /// Cleared when the app boots; set once the welcome overlay completes or a
    /// hash navigation skips it.
    welcome_done: RwSignal<bool>,
) -> impl IntoView {
    let runtime = use_portfolio_runtime();
    let host = runtime.host;

    // Arriving with a hash means the visitor came back from a detail page, so
    // the welcome overlay is skipped and the target section scrolls into view.
    create_effect(move |_| {
        let host = host.get_value();
        if let Some(section) = host.location_hash() {
            welcome_done.set(true);
            host.scroll_section_into_view_soon(&section);
        }
    });

    view! {
        <Show
            when=move || welcome_done.get()
            fallback=move || {
                view! { <WelcomeScreen on_complete=Callback::new(move |_| welcome_done.set(true)) /> }
            }
        >
            <NavBar />
            <AnimatedBackdrop />
            <HeroSection />
            <AboutSection />
            <PortfolioSection />
            <SiteFooter />
        </Show>
    }
}
