use super::*;

#[component]
/// Fixed top bar: centered section links, the theme toggle, and the mobile
/// menu. Tracks the scroll position for the solid treatment and the active
/// section highlight.
pub(super) fn NavBar() -> impl IntoView {
    let runtime = use_portfolio_runtime();
    let host = runtime.host;

    let scroll_y = create_rw_signal(host.get_value().current_scroll_y());
    let active = create_rw_signal(None::<&'static str>);
    let menu_open = create_rw_signal(false);

    let refresh = move || {
        let host = host.get_value();
        let y = host.current_scroll_y();
        scroll_y.set(y);
        active.set(motion::active_section(
            y,
            &host.section_metrics(&routes::SECTION_IDS),
        ));
    };

    // Runs once after the sections have mounted so the highlight is correct
    // before the first scroll event arrives.
    create_effect(move |_| refresh());

    let scroll_listener = window_event_listener(ev::scroll, move |_| refresh());
    on_cleanup(move || scroll_listener.remove());

    // The open mobile menu covers the page, so the page behind it must not
    // scroll along with swipe gestures.
    create_effect(move |_| {
        host.get_value().lock_body_scroll(menu_open.get());
    });

    let jump_to = move |section: &'static str| {
        host.get_value().scroll_to_section(section);
        menu_open.set(false);
    };

    let section_links = move || {
        view! {
            <For each=move || routes::SECTION_IDS.to_vec() key=|id| *id let:id>
                <a
                    href=format!("#{id}")
                    class="navbar-link"
                    data-ui-state=move || if active.get() == Some(id) { "active" } else { "idle" }
                    on:click=move |ev| {
                        ev.prevent_default();
                        jump_to(id);
                    }
                >
                    {id}
                </a>
            </For>
            <LinkButton
                href=CONTACT_MAIL_URL.to_string()
                external=true
                variant=ButtonVariant::Quiet
                ui_slot="navbar-contact"
            >
                "Contact"
            </LinkButton>
        }
    };

    view! {
        <NavShell
            solid=Signal::derive(move || menu_open.get() || motion::navbar_is_solid(scroll_y.get()))
            aria_label="Primary".to_string()
        >
            <Cluster justify=LayoutJustify::Between ui_slot="navbar-row">
                <div class="navbar-spacer"></div>
                <nav class="navbar-links" aria-label="Sections">{section_links()}</nav>
                <Cluster gap=LayoutGap::Sm ui_slot="navbar-controls">
                    <ThemeToggle layout_class="navbar-theme-toggle" />
                    <Button
                        variant=ButtonVariant::Quiet
                        layout_class="navbar-menu-button"
                        aria_label="Toggle navigation menu".to_string()
                        aria_expanded=menu_open
                        on_click=Callback::new(move |_| menu_open.update(|open| *open = !*open))
                    >
                        {move || if menu_open.get() { "Close" } else { "Menu" }}
                    </Button>
                </Cluster>
            </Cluster>
            <OverlayScreen dismissing=Signal::derive(move || !menu_open.get()) ui_slot="mobile-menu">
                <nav class="navbar-mobile-links" aria-label="Sections">{section_links()}</nav>
            </OverlayScreen>
        </NavShell>
    }
}
