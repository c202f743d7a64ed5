use super::*;
use crate::model::{CaseStudy, Certificate, Project, TechStackEntry};

#[component]
pub(super) fn CardProject(project: Project) -> impl IntoView {
    let demo = if project.has_live_demo() {
        let url = project.demo_url.clone().unwrap_or_default();
        view! {
            <LinkButton
                href=url
                external=true
                size=ButtonSize::Sm
                ui_slot="project-demo"
            >
                "Live Demo"
            </LinkButton>
        }
        .into_view()
    } else {
        view! {
            <Text
                role=TextRole::Caption
                tone=TextTone::Secondary
                layout_class="card-unavailable"
            >
                "Demo Not Available"
            </Text>
        }
        .into_view()
    };

    let details = match project.id {
        Some(id) => view! {
            <LinkButton
                href=routes::project_route(id)
                variant=ButtonVariant::Quiet
                size=ButtonSize::Sm
                ui_slot="project-details"
            >
                "Details"
            </LinkButton>
        }
        .into_view(),
        None => view! {
            <Text
                role=TextRole::Caption
                tone=TextTone::Secondary
                layout_class="card-unavailable"
            >
                "Details Not Available"
            </Text>
        }
        .into_view(),
    };

    view! {
        <Card elevation=Elevation::Raised ui_slot="project-card">
            <img class="card-image" src=project.image_url alt=project.title.clone()/>
            <Stack gap=LayoutGap::Sm padding=LayoutPadding::Md>
                <Heading role=TextRole::Label>{project.title}</Heading>
                <Text role=TextRole::Caption tone=TextTone::Secondary>
                    {project.description}
                </Text>
                <Cluster
                    gap=LayoutGap::Sm
                    justify=LayoutJustify::Between
                    ui_slot="project-card-actions"
                >
                    {demo}
                    {details}
                </Cluster>
            </Stack>
        </Card>
    }
}

#[component]
pub(super) fn CardCaseStudy(case_study: CaseStudy) -> impl IntoView {
    let details = match case_study.id {
        Some(id) => view! {
            <LinkButton
                href=routes::case_study_route(id)
                variant=ButtonVariant::Quiet
                size=ButtonSize::Sm
                ui_slot="case-study-details"
            >
                "Details"
            </LinkButton>
        }
        .into_view(),
        None => view! {
            <Text
                role=TextRole::Caption
                tone=TextTone::Secondary
                layout_class="card-unavailable"
            >
                "Details Not Available"
            </Text>
        }
        .into_view(),
    };

    view! {
        <Card elevation=Elevation::Raised ui_slot="case-study-card">
            <Stack gap=LayoutGap::Sm padding=LayoutPadding::Md>
                <Heading role=TextRole::Label>{case_study.title}</Heading>
                <Text role=TextRole::Caption tone=TextTone::Secondary>
                    {case_study.description}
                </Text>
                <Cluster justify=LayoutJustify::End ui_slot="case-study-card-actions">
                    {details}
                </Cluster>
            </Stack>
        </Card>
    }
}

#[component]
pub(super) fn CardCertificate(certificate: Certificate) -> impl IntoView {
    view! {
        <Card elevation=Elevation::Raised ui_slot="certificate-card">
            <img class="card-image" src=certificate.image_url alt="Certificate"/>
        </Card>
    }
}

#[component]
pub(super) fn TechStackTile(entry: TechStackEntry) -> impl IntoView {
    view! {
        <Card ui_slot="tech-stack-tile">
            <Stack gap=LayoutGap::Sm align=LayoutAlign::Center padding=LayoutPadding::Md>
                <img
                    class="tech-stack-icon"
                    src=entry.icon
                    alt=format!("{} icon", entry.label)
                />
                <Text role=TextRole::Caption tone=TextTone::Secondary>
                    {entry.label}
                </Text>
            </Stack>
        </Card>
    }
}
