use super::*;

#[component]
/// Fixed top navigation shell.
///
/// `solid` switches the bar between its transparent top-of-page treatment and
/// the backed treatment used once the page scrolls.
pub fn NavShell(
    #[prop(optional, into)] solid: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-nav-shell", layout_class)
            data-ui-primitive="true"
            data-ui-kind="nav-shell"
            data-ui-state=move || if solid.get() { "solid" } else { "overlay" }
            aria-label=aria_label
        >
            {children()}
        </header>
    }
}

#[component]
/// Full-viewport overlay host for the welcome screen and mobile menu.
pub fn OverlayScreen(
    #[prop(optional, into)] dismissing: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-overlay-screen", layout_class)
            data-ui-primitive="true"
            data-ui-kind="overlay-screen"
            data-ui-slot=ui_slot
            data-ui-state=move || if dismissing.get() { "dismissing" } else { "open" }
        >
            {children()}
        </div>
    }
}

#[component]
/// Landing page section wrapper carrying the scroll anchor id.
pub fn PageSection(
    #[prop(into)] id: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            id=id
            class=merge_layout_class("ui-page-section", layout_class)
            data-ui-primitive="true"
            data-ui-kind="page-section"
            aria-label=aria_label
        >
            {children()}
        </section>
    }
}
