use super::*;

#[component]
/// Full-screen boot overlay: social links, the welcome headline, and a
/// typewriter line spelling out the site handle.
pub(super) fn WelcomeScreen(
    /// Fired once the dismiss animation has run its course.
    on_complete: Callback<()>,
) -> impl IntoView {
    let ticks = create_rw_signal(0usize);
    let dismissing = create_rw_signal(false);

    if let Ok(interval) = set_interval_with_handle(
        move || ticks.update(|ticks| *ticks += 1),
        motion::WELCOME_TYPE_INTERVAL,
    ) {
        on_cleanup(move || interval.clear());
    }

    // The overlay holds, starts its dismiss treatment, and only then hands
    // control to the landing page so the exit transition can finish.
    if let Ok(hold) = set_timeout_with_handle(move || dismissing.set(true), motion::WELCOME_HOLD) {
        on_cleanup(move || hold.clear());
    }
    if let Ok(exit) = set_timeout_with_handle(
        move || on_complete.call(()),
        motion::WELCOME_HOLD + motion::WELCOME_EXIT,
    ) {
        on_cleanup(move || exit.clear());
    }

    let typed = move || motion::typed_prefix(motion::WELCOME_SITE_HANDLE, ticks.get());

    view! {
        <OverlayScreen dismissing=dismissing ui_slot="welcome">
            <div class="welcome-glow" aria-hidden="true"></div>
            <Stack gap=LayoutGap::Lg align=LayoutAlign::Center ui_slot="welcome-content">
                <SocialIconRow />
                <Heading role=TextRole::Title ui_slot="welcome-headline">
                    <span>"Welcome"</span>
                    " "
                    <span>"To"</span>
                    " "
                    <span>"My"</span>
                </Heading>
                <Heading role=TextRole::Title tone=TextTone::Accent ui_slot="welcome-headline">
                    <span>"Portfolio"</span>
                    " "
                    <span>"Website"</span>
                </Heading>
                <LinkButton
                    href=motion::WELCOME_SITE_HANDLE.to_string()
                    external=true
                    variant=ButtonVariant::Quiet
                    ui_slot="welcome-site-link"
                >
                    {typed}
                    <Text role=TextRole::Code layout_class="typing-cursor">"|"</Text>
                </LinkButton>
            </Stack>
        </OverlayScreen>
    }
}
