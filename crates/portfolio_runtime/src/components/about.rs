use super::*;

#[component]
/// Biography, portrait, and headline stats sourced from the cached content.
pub(super) fn AboutSection() -> impl IntoView {
    let runtime = use_portfolio_runtime();
    let state = runtime.state;
    let host = runtime.host;

    let stat = move |collection: ContentCollection| {
        Signal::derive(move || state.with(|state| state.collection_len(collection)).to_string())
    };

    view! {
        <PageSection id=routes::SECTION_ABOUT layout_class="about-section">
            <Stack gap=LayoutGap::Lg ui_slot="about-content">
                <Heading role=TextRole::Title ui_slot="about-heading">"About Me"</Heading>
                <Cluster
                    gap=LayoutGap::Lg
                    align=LayoutAlign::Start
                    justify=LayoutJustify::Between
                    ui_slot="about-columns"
                >
                    <Stack gap=LayoutGap::Md ui_slot="about-copy">
                        <Text tone=TextTone::Secondary>
                            "I'm Katherine, an I.T professional focused on DevOps and workflow \
                             automation. Most of my work is connecting the systems a business \
                             already runs, from AWS infrastructure and MySQL databases to \
                             Atlassian tooling and Make scenarios, so routine work happens \
                             without anyone touching it."
                        </Text>
                        <Text tone=TextTone::Secondary>
                            "Outside of build pipelines I handle the unglamorous side of \
                             operations: certificate renewals, gateway recoveries, and the \
                             documentation that makes the next incident shorter than the last \
                             one."
                        </Text>
                        <Cluster gap=LayoutGap::Md ui_slot="about-actions">
                            <LinkButton
                                href="/assets/Katherine-Laxamana-CV.pdf".to_string()
                                external=true
                                variant=ButtonVariant::Primary
                            >
                                "Download CV"
                            </LinkButton>
                            <Button
                                variant=ButtonVariant::Quiet
                                on_click=Callback::new(move |_| {
                                    host.get_value().scroll_to_section(routes::SECTION_PORTFOLIO);
                                })
                            >
                                "View Projects"
                            </Button>
                        </Cluster>
                    </Stack>
                    <img
                        class="about-portrait"
                        src="/assets/profile.jpg"
                        alt="Portrait of Katherine Laxamana"
                    />
                </Cluster>
                <Cluster gap=LayoutGap::Md ui_slot="about-stats">
                    <StatTile value=stat(ContentCollection::Projects) label="Total Projects" />
                    <StatTile
                        value=stat(ContentCollection::Certificates)
                        label="Total Certificates"
                    />
                </Cluster>
            </Stack>
        </PageSection>
    }
}
