use super::*;
use crate::model::CaseStudy;

#[component]
/// Shared detail-page chrome: scroll reset, floating theme toggle, and the
/// breadcrumb whose back control raises the return flag before navigating.
fn CaseStudyFrame(
    /// Short page label shown at the end of the breadcrumb trail.
    #[prop(into)]
    breadcrumb: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    let runtime = use_portfolio_runtime();
    let host = runtime.host;

    create_effect(move |_| {
        host.get_value().scroll_to_top();
    });

    view! {
        <div class="case-study-page">
            <ThemeToggle layout_class="case-study-theme-toggle"/>
            <nav class="case-study-breadcrumb" aria-label="Breadcrumb">
                <LinkButton
                    href=routes::LANDING_PORTFOLIO_HREF.to_string()
                    variant=ButtonVariant::Quiet
                    size=ButtonSize::Sm
                    ui_slot="case-study-back"
                    on_click=Callback::new(move |_| {
                        host.get_value().raise_return_flag();
                    })
                >
                    "Back"
                </LinkButton>
                <Text role=TextRole::Caption tone=TextTone::Secondary>"Case Studies"</Text>
                <Text role=TextRole::Caption>{move || breadcrumb.get()}</Text>
            </nav>
            {children()}
        </div>
    }
}

fn summary_stats(stats: [(&'static str, &'static str); 3]) -> impl IntoView {
    view! {
        <Cluster gap=LayoutGap::Md ui_slot="case-study-stats">
            {stats
                .into_iter()
                .map(|(label, value)| {
                    view! { <StatTile value=value.to_string() label=label/> }
                })
                .collect::<Vec<_>>()}
        </Cluster>
    }
}

fn technology_badges(title: &'static str, items: &'static [&'static str]) -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Sm ui_slot="case-study-technologies">
            <Heading role=TextRole::Label>{title}</Heading>
            <Cluster gap=LayoutGap::Sm>
                {items.iter().map(|item| view! { <Badge>{*item}</Badge> }).collect::<Vec<_>>()}
            </Cluster>
        </Stack>
    }
}

fn feature_list(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Sm ui_slot="case-study-features">
            <Heading role=TextRole::Label>"Key Features"</Heading>
            <ul class="case-study-feature-list">
                {items.iter().map(|item| view! { <li>{*item}</li> }).collect::<Vec<_>>()}
            </ul>
        </Stack>
    }
}

fn step_list(title: &'static str, steps: &'static [&'static str]) -> impl IntoView {
    view! {
        <Stack gap=LayoutGap::Sm ui_slot="case-study-steps">
            <Heading role=TextRole::Label>{title}</Heading>
            <ol class="case-study-step-list">
                {steps.iter().map(|step| view! { <li>{*step}</li> }).collect::<Vec<_>>()}
            </ol>
        </Stack>
    }
}

fn narrative_panel(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <Panel padding=LayoutPadding::Md ui_slot="case-study-narrative">
            <Stack gap=LayoutGap::Sm>
                <Heading role=TextRole::Label>{title}</Heading>
                <Text tone=TextTone::Secondary>{body}</Text>
            </Stack>
        </Panel>
    }
}

#[component]
/// Certificate renewal across ACM, the load balancer, and the report server.
pub fn CaseStudySslPage() -> impl IntoView {
    view! {
        <CaseStudyFrame breadcrumb="SSL Renewal (PBIRS)".to_string()>
            <Stack gap=LayoutGap::Lg ui_slot="case-study-body">
                <Heading role=TextRole::Title ui_slot="case-study-title">
                    "Mobile-Safe SSL Renewal"
                </Heading>
                <Text tone=TextTone::Secondary ui_slot="case-study-intro">
                    "Replaced and deployed a new Entrust certificate across AWS ACM, Load \
                     Balancer, and Power BI Report Server. Ensured secure mobile access on \
                     corporate Wi-Fi with clear verification and a documented rollback plan."
                </Text>
                {summary_stats([
                    ("Continuity", "Service maintained"),
                    ("Validation", "Mobile verified"),
                    ("Safety", "Rollback ready"),
                ])}
                {technology_badges(
                    "Technologies Used",
                    &[
                        "Venafi",
                        "Entrust",
                        "OpenSSL",
                        "AWS ACM",
                        "AWS Load Balancer",
                        "Windows Server",
                        "Power BI Report Server",
                    ],
                )}
                {feature_list(
                    &[
                        "End-to-end renewal (Venafi → ACM → LB → PBIRS) with zero downtime.",
                        "Deterministic extraction of certificate, private key, and CA chain with OpenSSL.",
                        "Mobile validation on the corporate network and a clear rollback plan.",
                    ],
                )}
                <Grid gap=LayoutGap::Md layout_class="case-study-narrative-grid">
                    {narrative_panel(
                        "Context",
                        "The client's Power BI Report Server needed an SSL renewal so users \
                         could securely access reports from mobile devices on the corporate \
                         network.",
                    )}
                    {narrative_panel(
                        "Objective",
                        "Renew and deploy the SSL certificate end to end (Venafi → AWS ACM → \
                         Load Balancer → PBIRS) while maintaining availability and validating \
                         mobile access.",
                    )}
                    {narrative_panel(
                        "Approach",
                        "Requested Entrust certificate via Venafi; prepared OpenSSL artifacts \
                         (cert, key, CA chain). Re-imported the certificate in AWS ACM and \
                         associated it with the Load Balancer.",
                    )}
                </Grid>
                {narrative_panel(
                    "Validation & Rollback",
                    "Verified the certificate chain and HTTPS lock on mobile; defined rollback \
                     via ACM re-import and PBIRS binding revert.",
                )}
                <Grid gap=LayoutGap::Md layout_class="case-study-outcome-grid">
                    {narrative_panel(
                        "Outcome",
                        "Updated SSL chain deployed across ACM, LB, and PBIRS, enabling secure \
                         mobile access with a documented rollback path.",
                    )}
                    {narrative_panel(
                        "Impact",
                        "Zero downtime, verified mobile SSL trust, and clear rollback \
                         procedures for future renewals.",
                    )}
                </Grid>
            </Stack>
        </CaseStudyFrame>
    }
}

#[component]
/// Access-request provisioning flow built in ServiceNow against Aurora MySQL.
pub fn CaseStudyServiceNowPage() -> impl IntoView {
    view! {
        <CaseStudyFrame breadcrumb="ServiceNow DB Access Automation".to_string()>
            <Stack gap=LayoutGap::Lg ui_slot="case-study-body">
                <Heading role=TextRole::Title ui_slot="case-study-title">
                    "Automating Database User Access Requests"
                </Heading>
                <Text tone=TextTone::Secondary ui_slot="case-study-intro">
                    "Built a ServiceNow flow that provisions time-boxed MySQL accounts on \
                     Aurora from approved catalog requests. Accounts are created with \
                     least-privilege grants, credentials are delivered through the vault, and \
                     expiry is enforced automatically."
                </Text>
                {summary_stats([
                    ("Turnaround", "Hours to minutes"),
                    ("Access", "Least privilege"),
                    ("Expiry", "Enforced automatically"),
                ])}
                {technology_badges(
                    "Technologies Used",
                    &[
                        "ServiceNow",
                        "Flow Designer",
                        "MySQL",
                        "Amazon Aurora",
                        "AWS Secrets Manager",
                        "Jira",
                    ],
                )}
                {feature_list(
                    &[
                        "Catalog request with approval routing drives the whole provisioning flow.",
                        "Grants are scoped per schema and role, never broad admin access.",
                        "Accounts expire on a fixed date and the cleanup job revokes them without a ticket.",
                    ],
                )}
                <Grid gap=LayoutGap::Md layout_class="case-study-narrative-grid">
                    {narrative_panel(
                        "Context",
                        "Database access requests were handled over chat and email, so \
                         turnaround was slow and grants drifted from what was approved.",
                    )}
                    {narrative_panel(
                        "Objective",
                        "Provision MySQL users on Aurora straight from an approved ServiceNow \
                         request, with scoped grants and automatic expiry.",
                    )}
                    {narrative_panel(
                        "Approach",
                        "Modeled the request as a catalog item with approval routing; a Flow \
                         Designer flow calls the provisioning script, applies the scoped \
                         grants, and stores credentials in the vault.",
                    )}
                </Grid>
                {narrative_panel(
                    "Validation & Rollback",
                    "Each grant is verified against the approved scope after provisioning; \
                     revocation is a single flow step, and the nightly job removes expired \
                     accounts.",
                )}
                <Grid gap=LayoutGap::Md layout_class="case-study-outcome-grid">
                    {narrative_panel(
                        "Outcome",
                        "Approved requests now provision in minutes with grants that match the \
                         ticket exactly.",
                    )}
                    {narrative_panel(
                        "Impact",
                        "Faster onboarding, auditable access, and no orphaned database \
                         accounts.",
                    )}
                </Grid>
            </Stack>
        </CaseStudyFrame>
    }
}

#[component]
/// Gateway restart runbook: UI path first, Windows Services fallback second.
pub fn CaseStudyPowerBiPage() -> impl IntoView {
    view! {
        <CaseStudyFrame breadcrumb="Power BI Gateway Restart".to_string()>
            <Stack gap=LayoutGap::Lg ui_slot="case-study-body">
                <Heading role=TextRole::Title ui_slot="case-study-title">
                    "Restoring Connectivity via Power BI On-premises Data Gateway Restart"
                </Heading>
                <Text tone=TextTone::Secondary ui_slot="case-study-intro">
                    "A repeatable, low-risk procedure to restart the on-premises data gateway \
                     when refreshes or live connections fail. Covers Gateway UI restart and \
                     Windows Services fallback, with sign-in and status checks."
                </Text>
                {summary_stats([
                    ("Scope", "Power BI On-premises Data Gateway"),
                    ("Path", "UI restart + Services fallback"),
                    ("Access", "RDP to gateway server"),
                ])}
                {technology_badges(
                    "Tools & Stack",
                    &[
                        "Power BI On-premises Data Gateway",
                        "Windows Server / Services",
                        "RDP",
                        "Azure sign-in",
                    ],
                )}
                <Grid gap=LayoutGap::Md layout_class="case-study-narrative-grid">
                    {narrative_panel(
                        "Context",
                        "Teams observed refresh failures and connectivity issues for reports \
                         routed through the on-premises data gateway. Ops required a \
                         minimal-risk restart path to restore connectivity.",
                    )}
                    {narrative_panel(
                        "Objective",
                        "Deliver a clear restart procedure covering the Gateway UI and a \
                         Windows Services fallback, including sign-in and status verification.",
                    )}
                </Grid>
                {step_list(
                    "Approach A — Restart via Gateway UI",
                    &[
                        "RDP to the Power BI Gateway server.",
                        "Open the On-premises data gateway app and continue if prompted.",
                        "Click Sign in and authenticate with your corporate Azure account.",
                        "Go to Service settings → Restart now.",
                    ],
                )}
                {step_list(
                    "Approach B — Fallback via Windows Services",
                    &[
                        "Open Services (services.msc).",
                        "Find On-premises data gateway, then Stop / Restart (or Start if stopped).",
                        "Confirm the service Status is Running.",
                    ],
                )}
                {narrative_panel(
                    "Validation & Notes",
                    "After restart, verify scheduled refreshes and live connections. If \
                     sign-in fails or the service won't start, check Event Viewer and outbound \
                     connectivity to Power BI endpoints.",
                )}
            </Stack>
        </CaseStudyFrame>
    }
}

#[component]
/// Detail frame for case studies that only exist as store rows. Renders the
/// cached title and description; ids without a row get the empty state.
pub fn GenericCaseStudyPage(
    /// Row id taken from the route segment.
    case_study_id: i64,
) -> impl IntoView {
    let runtime = use_portfolio_runtime();
    let state = runtime.state;

    let case_study = create_memo(move |_| {
        state.with(|state| state.case_study_by_id(case_study_id).cloned())
    });
    let breadcrumb = Signal::derive(move || {
        case_study
            .get()
            .map(|row: CaseStudy| row.title)
            .unwrap_or_else(|| "Case Study".to_string())
    });

    view! {
        <CaseStudyFrame breadcrumb=breadcrumb>
            <Stack gap=LayoutGap::Lg ui_slot="case-study-body">
                <Show
                    when=move || case_study.get().is_some()
                    fallback=|| {
                        view! {
                            <EmptyState>"This case study has not been published."</EmptyState>
                        }
                    }
                >
                    <Heading role=TextRole::Title ui_slot="case-study-title">
                        {move || case_study.get().map(|row| row.title).unwrap_or_default()}
                    </Heading>
                    <Text tone=TextTone::Secondary ui_slot="case-study-intro">
                        {move || {
                            case_study.get().map(|row| row.description).unwrap_or_default()
                        }}
                    </Text>
                </Show>
            </Stack>
        </CaseStudyFrame>
    }
}
