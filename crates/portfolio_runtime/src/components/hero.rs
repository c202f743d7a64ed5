use super::*;

#[component]
/// Opening section: headline, rotating role line, tech badges, and the two
/// calls to action.
pub(super) fn HeroSection() -> impl IntoView {
    let runtime = use_portfolio_runtime();
    let host = runtime.host;

    let cycle = create_rw_signal(motion::TypingCycle::new());

    // Reruns after every advance: waits out the current phase delay, moves
    // the cycle one tick, and thereby schedules the step after it. Cleanup
    // cancels the pending timer when the effect reruns or the hero unmounts.
    create_effect(move |_| {
        let current = cycle.get();
        if let Ok(timeout) = set_timeout_with_handle(
            move || cycle.update(|cycle| cycle.advance(&HERO_ROTATION_WORDS)),
            current.delay(),
        ) {
            on_cleanup(move || timeout.clear());
        }
    });

    view! {
        <PageSection id=routes::SECTION_HOME layout_class="hero-section">
            <Cluster
                gap=LayoutGap::Lg
                align=LayoutAlign::Center
                justify=LayoutJustify::Between
                ui_slot="hero-columns"
            >
                <Stack gap=LayoutGap::Md ui_slot="hero-copy">
                    <Badge tone=TextTone::Accent layout_class="hero-status">
                        "Ready to Automate"
                    </Badge>
                    <Heading role=TextRole::Title ui_slot="hero-title">
                        <span>"I.T"</span>
                        " "
                        <span data-ui-tone="accent">"Professional"</span>
                    </Heading>
                    <div class="hero-typing" aria-live="polite">
                        <Text role=TextRole::Label tone=TextTone::Accent>
                            {move || cycle.get().visible_text(&HERO_ROTATION_WORDS)}
                        </Text>
                        <Text role=TextRole::Code layout_class="typing-cursor">"|"</Text>
                    </div>
                    <Text tone=TextTone::Secondary ui_slot="hero-description">
                        "Building intelligent, functional, and intuitive AI automations that deliver results."
                    </Text>
                    <Cluster gap=LayoutGap::Sm ui_slot="hero-badges">
                        <For each=move || HERO_TECH_BADGES.to_vec() key=|badge| *badge let:badge>
                            <Badge>{badge}</Badge>
                        </For>
                    </Cluster>
                    <Cluster gap=LayoutGap::Md ui_slot="hero-actions">
                        <Button
                            variant=ButtonVariant::Primary
                            on_click=Callback::new(move |_| {
                                host.get_value().scroll_to_section(routes::SECTION_PORTFOLIO);
                            })
                        >
                            "Projects"
                        </Button>
                        <LinkButton href=CONTACT_MAIL_URL.to_string() external=true>
                            "Contact"
                        </LinkButton>
                    </Cluster>
                    <SocialIconRow />
                </Stack>
                <div class="hero-visual" aria-hidden="true"></div>
            </Cluster>
        </PageSection>
    }
}
