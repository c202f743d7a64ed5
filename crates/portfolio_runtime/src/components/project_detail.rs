use super::*;

#[component]
/// Detail page for a single project row from the cached snapshot.
pub fn ProjectDetailPage(
    /// Row id taken from the route segment.
    project_id: i64,
) -> impl IntoView {
    let runtime = use_portfolio_runtime();
    let state = runtime.state;
    let host = runtime.host;

    create_effect(move |_| {
        host.get_value().scroll_to_top();
    });

    let project =
        create_memo(move |_| state.with(|state| state.project_by_id(project_id).cloned()));

    view! {
        <div class="project-detail-page">
            <Show
                when=move || project.get().is_some()
                fallback=|| view! { <super::not_found::NotFoundPage/> }
            >
                <Stack gap=LayoutGap::Lg ui_slot="project-detail-body">
                    <LinkButton
                        href=routes::LANDING_PORTFOLIO_HREF.to_string()
                        variant=ButtonVariant::Quiet
                        size=ButtonSize::Sm
                        ui_slot="project-detail-back"
                    >
                        "Back"
                    </LinkButton>
                    <img
                        class="project-detail-image"
                        src=move || project.get().map(|row| row.image_url).unwrap_or_default()
                        alt=move || project.get().map(|row| row.title).unwrap_or_default()
                    />
                    <Heading role=TextRole::Title ui_slot="project-detail-title">
                        {move || project.get().map(|row| row.title).unwrap_or_default()}
                    </Heading>
                    <Text tone=TextTone::Secondary ui_slot="project-detail-description">
                        {move || project.get().map(|row| row.description).unwrap_or_default()}
                    </Text>
                    <Show
                        when=move || project.get().map_or(false, |row| row.has_live_demo())
                        fallback=|| {
                            view! {
                                <Text
                                    role=TextRole::Caption
                                    tone=TextTone::Secondary
                                    layout_class="card-unavailable"
                                >
                                    "Demo Not Available"
                                </Text>
                            }
                        }
                    >
                        <LinkButton
                            href=Signal::derive(move || {
                                project.get().and_then(|row| row.demo_url).unwrap_or_default()
                            })
                            external=true
                            variant=ButtonVariant::Primary
                            ui_slot="project-detail-demo"
                        >
                            "Live Demo"
                        </LinkButton>
                    </Show>
                </Stack>
            </Show>
        </div>
    }
}
