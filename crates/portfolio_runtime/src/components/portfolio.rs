use super::*;

#[component]
/// Tabbed showcase over the three cached collections plus the static tech
/// stack grid.
pub(super) fn PortfolioSection() -> impl IntoView {
    let runtime = use_portfolio_runtime();
    let state = runtime.state;
    let host = runtime.host;

    // A detail page raises the return flag on its back control; the first
    // portfolio mount afterwards consumes it and lands on the case-studies
    // tab instead of the default.
    create_effect(move |_| {
        if host.get_value().take_return_flag() {
            runtime.dispatch_action(PortfolioAction::SelectTab {
                index: PortfolioTab::CaseStudies.index(),
            });
        }
    });

    let active_tab = create_memo(move |_| state.with(|state| state.active_tab));

    let section_toggle = move |collection: ContentCollection| {
        view! {
            <Show
                when=move || state.with(|state| state.can_toggle(collection))
                fallback=|| ()
            >
                <Cluster justify=LayoutJustify::Center ui_slot="section-toggle">
                    <Button
                        variant=ButtonVariant::Quiet
                        on_click=Callback::new(move |_| {
                            runtime
                                .dispatch_action(PortfolioAction::ToggleSection { collection });
                        })
                    >
                        {move || {
                            if state.with(|state| state.is_expanded(collection)) {
                                "See Less"
                            } else {
                                "See More"
                            }
                        }}
                    </Button>
                </Cluster>
            </Show>
        }
    };

    view! {
        <PageSection id=routes::SECTION_PORTFOLIO layout_class="portfolio-section">
            <Stack gap=LayoutGap::Lg ui_slot="portfolio-content">
                <Stack gap=LayoutGap::Sm align=LayoutAlign::Center ui_slot="portfolio-intro">
                    <Heading role=TextRole::Title ui_slot="portfolio-heading">
                        "Portfolio Showcase"
                    </Heading>
                    <Text tone=TextTone::Secondary>
                        "Explore my journey through projects, certifications, and technical expertise."
                    </Text>
                    <Text tone=TextTone::Secondary>
                        "Each section represents a milestone in my continuous learning path."
                    </Text>
                </Stack>

                <TabList layout_class="portfolio-tabs" aria_label="Portfolio sections">
                    <For each=move || PortfolioTab::ALL.to_vec() key=|tab| tab.index() let:tab>
                        <Tab
                            id=tab.tab_dom_id()
                            controls=tab.panel_dom_id()
                            selected=Signal::derive(move || active_tab.get() == tab)
                            tabindex=Signal::derive(
                                move || if active_tab.get() == tab { 0 } else { -1 },
                            )
                            on_click=Callback::new(move |_| {
                                runtime
                                    .dispatch_action(PortfolioAction::SelectTab {
                                        index: tab.index(),
                                    });
                            })
                        >
                            {tab.label()}
                        </Tab>
                    </For>
                </TabList>

                <div
                    class="portfolio-panel"
                    role="tabpanel"
                    id=PortfolioTab::Projects.panel_dom_id()
                    aria-labelledby=PortfolioTab::Projects.tab_dom_id()
                    hidden=move || active_tab.get() != PortfolioTab::Projects
                >
                    <Show
                        when=move || {
                            state
                                .with(|state| {
                                    state.collection_len(ContentCollection::Projects) > 0
                                })
                        }
                        fallback=|| {
                            view! { <EmptyState>"No projects published yet."</EmptyState> }
                        }
                    >
                        <Grid gap=LayoutGap::Md layout_class="portfolio-grid-projects">
                            <For
                                each=move || state.with(|state| state.visible_projects().to_vec())
                                key=|project| project.id
                                let:project
                            >
                                <super::cards::CardProject project/>
                            </For>
                        </Grid>
                    </Show>
                    {section_toggle(ContentCollection::Projects)}
                </div>

                <div
                    class="portfolio-panel"
                    role="tabpanel"
                    id=PortfolioTab::CaseStudies.panel_dom_id()
                    aria-labelledby=PortfolioTab::CaseStudies.tab_dom_id()
                    hidden=move || active_tab.get() != PortfolioTab::CaseStudies
                >
                    <Show
                        when=move || {
                            state
                                .with(|state| {
                                    state.collection_len(ContentCollection::CaseStudies) > 0
                                })
                        }
                        fallback=|| {
                            view! { <EmptyState>"No case studies published yet."</EmptyState> }
                        }
                    >
                        <Grid gap=LayoutGap::Md layout_class="portfolio-grid-case-studies">
                            <For
                                each=move || {
                                    state.with(|state| state.visible_case_studies().to_vec())
                                }
                                key=|case_study| case_study.id
                                let:case_study
                            >
                                <super::cards::CardCaseStudy case_study/>
                            </For>
                        </Grid>
                    </Show>
                    {section_toggle(ContentCollection::CaseStudies)}
                </div>

                <div
                    class="portfolio-panel"
                    role="tabpanel"
                    id=PortfolioTab::TechStack.panel_dom_id()
                    aria-labelledby=PortfolioTab::TechStack.tab_dom_id()
                    hidden=move || active_tab.get() != PortfolioTab::TechStack
                >
                    <Grid gap=LayoutGap::Md layout_class="portfolio-grid-tech">
                        <For each=move || TECH_STACK.to_vec() key=|entry| entry.label let:entry>
                            <super::cards::TechStackTile entry/>
                        </For>
                    </Grid>
                </div>

                <div
                    class="portfolio-panel"
                    role="tabpanel"
                    id=PortfolioTab::Certificates.panel_dom_id()
                    aria-labelledby=PortfolioTab::Certificates.tab_dom_id()
                    hidden=move || active_tab.get() != PortfolioTab::Certificates
                >
                    <Show
                        when=move || {
                            state
                                .with(|state| {
                                    state.collection_len(ContentCollection::Certificates) > 0
                                })
                        }
                        fallback=|| {
                            view! { <EmptyState>"No certificates published yet."</EmptyState> }
                        }
                    >
                        <Grid gap=LayoutGap::Md layout_class="portfolio-grid-certificates">
                            <For
                                each=move || {
                                    state.with(|state| state.visible_certificates().to_vec())
                                }
                                key=|certificate| certificate.id
                                let:certificate
                            >
                                <super::cards::CardCertificate certificate/>
                            </For>
                        </Grid>
                    </Show>
                    {section_toggle(ContentCollection::Certificates)}
                </div>
            </Stack>
        </PageSection>
    }
}
