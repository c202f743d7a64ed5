use serde::{Deserialize, Serialize};

pub const NARROW_VIEWPORT_MAX_PX: f64 = 768.0;
pub const NARROW_COLLAPSED_LIMIT: usize = 4;
pub const WIDE_COLLAPSED_LIMIT: usize = 6;

pub const HERO_ROTATION_WORDS: [&str; 3] =
    ["I.T Professional", "DevOps Engineer", "Automation Specialist"];
pub const HERO_TECH_BADGES: [&str; 4] = ["AWS", "Make", "MySQL", "Atlassian"];
pub const CONTACT_MAIL_URL: &str =
    "https://mail.google.com/mail/?view=cm&fs=1&to=td.katherine.laxamana@gmail.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "GitHub",
        url: "https://github.com/kayelaxamana010",
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/katherine-laxamana/",
    },
    SocialLink {
        name: "WhatsApp",
        url: "https://wa.me/+639778491473",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechStackEntry {
    pub icon: &'static str,
    pub label: &'static str,
}

pub const TECH_STACK: [TechStackEntry; 18] = [
    TechStackEntry {
        icon: "aws.svg",
        label: "AWS",
    },
    TechStackEntry {
        icon: "google-cloud.svg",
        label: "Google Cloud",
    },
    TechStackEntry {
        icon: "github.svg",
        label: "GitHub",
    },
    TechStackEntry {
        icon: "confluence.svg",
        label: "Confluence",
    },
    TechStackEntry {
        icon: "jira.svg",
        label: "Jira",
    },
    TechStackEntry {
        icon: "windows.svg",
        label: "Windows",
    },
    TechStackEntry {
        icon: "linux.svg",
        label: "Linux",
    },
    TechStackEntry {
        icon: "make.svg",
        label: "Make",
    },
    TechStackEntry {
        icon: "zapier.svg",
        label: "Zapier",
    },
    TechStackEntry {
        icon: "mysql.svg",
        label: "MySQL",
    },
    TechStackEntry {
        icon: "postgresql.svg",
        label: "PostgreSQL",
    },
    TechStackEntry {
        icon: "powershell.svg",
        label: "PowerShell",
    },
    TechStackEntry {
        icon: "sap.svg",
        label: "SAP",
    },
    TechStackEntry {
        icon: "slack.svg",
        label: "Slack",
    },
    TechStackEntry {
        icon: "microsoft-office.svg",
        label: "MS Office",
    },
    TechStackEntry {
        icon: "snow.svg",
        label: "ServiceNow",
    },
    TechStackEntry {
        icon: "cursor-ai.svg",
        label: "Cursor AI",
    },
    TechStackEntry {
        icon: "openai.svg",
        label: "OpenAI",
    },
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Img", default)]
    pub image_url: String,
    #[serde(rename = "Link", default)]
    pub demo_url: Option<String>,
}

impl Project {
    pub fn has_live_demo(&self) -> bool {
        self.demo_url
            .as_deref()
            .map_or(false, |url| !url.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Description", default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "Img", default)]
    pub image_url: String,
}

pub fn fallback_case_studies() -> Vec<CaseStudy> {
    vec![
        CaseStudy {
            id: Some(1),
            title: "Mobile Safe SSL Renewal for Power BI Report Server".to_string(),
            description: "Replaced and deployed a new Entrust certificate across AWS ACM, Load \
                          Balancer, and Power BI Report Server. Ensured secure mobile access on \
                          corporate WiFi with clear verification and rollback."
                .to_string(),
        },
        CaseStudy {
            id: Some(2),
            title: "ServiceNow Automation for Database User Access Requests".to_string(),
            description: "Automated intake and fulfillment of MySQL/Aurora DB user access via \
                          ServiceNow. Applied least-privilege by environment, stored credentials \
                          in the vault, and notified users with time-boxed links."
                .to_string(),
        },
        CaseStudy {
            id: Some(3),
            title: "Restoring Connectivity via Power BI On-premises Data Gateway Restart"
                .to_string(),
            description: "A repeatable, low-risk procedure to restart the on-premises data \
                          gateway when refreshes or live connections fail. Covers Gateway UI \
                          restart and Windows Services fallback, with sign-in and status checks."
                .to_string(),
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentCollection {
    Projects,
    CaseStudies,
    Certificates,
}

impl ContentCollection {
    pub const ALL: [ContentCollection; 3] = [
        ContentCollection::Projects,
        ContentCollection::CaseStudies,
        ContentCollection::Certificates,
    ];

    pub fn table_name(self) -> &'static str {
        match self {
            ContentCollection::Projects => "projects",
            ContentCollection::CaseStudies => "case_studies",
            ContentCollection::Certificates => "certificates",
        }
    }

    pub fn snapshot_key(self) -> &'static str {
        match self {
            ContentCollection::Projects => "projects",
            ContentCollection::CaseStudies => "caseStudies",
            ContentCollection::Certificates => "certificates",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentCollection::Projects => "projects",
            ContentCollection::CaseStudies => "case studies",
            ContentCollection::Certificates => "certificates",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CollectionRows {
    Projects(Vec<Project>),
    CaseStudies(Vec<CaseStudy>),
    Certificates(Vec<Certificate>),
}

impl CollectionRows {
    pub fn collection(&self) -> ContentCollection {
        match self {
            CollectionRows::Projects(_) => ContentCollection::Projects,
            CollectionRows::CaseStudies(_) => ContentCollection::CaseStudies,
            CollectionRows::Certificates(_) => ContentCollection::Certificates,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            CollectionRows::Projects(rows) => rows.len(),
            CollectionRows::CaseStudies(rows) => rows.len(),
            CollectionRows::Certificates(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Theme> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

pub fn resolve_initial_theme(saved: Option<Theme>, system_prefers_dark: bool) -> Theme {
    match saved {
        Some(theme) => theme,
        None if system_prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

pub fn collapsed_limit_for_viewport(viewport_width: Option<f64>) -> usize {
    match viewport_width {
        Some(width) if width < NARROW_VIEWPORT_MAX_PX => NARROW_COLLAPSED_LIMIT,
        _ => WIDE_COLLAPSED_LIMIT,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortfolioTab {
    Projects,
    CaseStudies,
    TechStack,
    Certificates,
}

impl PortfolioTab {
    pub const ALL: [PortfolioTab; 4] = [
        PortfolioTab::Projects,
        PortfolioTab::CaseStudies,
        PortfolioTab::TechStack,
        PortfolioTab::Certificates,
    ];

    pub fn index(self) -> usize {
        match self {
            PortfolioTab::Projects => 0,
            PortfolioTab::CaseStudies => 1,
            PortfolioTab::TechStack => 2,
            PortfolioTab::Certificates => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<PortfolioTab> {
        PortfolioTab::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            PortfolioTab::Projects => "Projects",
            PortfolioTab::CaseStudies => "Case Studies",
            PortfolioTab::TechStack => "Tech Stack",
            PortfolioTab::Certificates => "Certificates",
        }
    }

    pub fn tab_dom_id(self) -> String {
        format!("full-width-tab-{}", self.index())
    }

    pub fn panel_dom_id(self) -> String {
        format!("full-width-tabpanel-{}", self.index())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpandedPanels {
    pub projects: bool,
    pub case_studies: bool,
    pub certificates: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioState {
    pub theme: Theme,
    pub active_tab: PortfolioTab,
    pub collapsed_limit: usize,
    pub expanded: ExpandedPanels,
    pub projects: Vec<Project>,
    pub case_studies: Vec<CaseStudy>,
    pub certificates: Vec<Certificate>,
}

impl Default for PortfolioState {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            active_tab: PortfolioTab::Projects,
            collapsed_limit: WIDE_COLLAPSED_LIMIT,
            expanded: ExpandedPanels::default(),
            projects: Vec::new(),
            case_studies: Vec::new(),
            certificates: Vec::new(),
        }
    }
}

fn visible_slice<T>(rows: &[T], expanded: bool, collapsed_limit: usize) -> &[T] {
    if expanded {
        rows
    } else {
        &rows[..rows.len().min(collapsed_limit)]
    }
}

impl PortfolioState {
    pub fn collection_len(&self, collection: ContentCollection) -> usize {
        match collection {
            ContentCollection::Projects => self.projects.len(),
            ContentCollection::CaseStudies => self.case_studies.len(),
            ContentCollection::Certificates => self.certificates.len(),
        }
    }

    pub fn is_expanded(&self, collection: ContentCollection) -> bool {
        match collection {
            ContentCollection::Projects => self.expanded.projects,
            ContentCollection::CaseStudies => self.expanded.case_studies,
            ContentCollection::Certificates => self.expanded.certificates,
        }
    }

    pub fn can_toggle(&self, collection: ContentCollection) -> bool {
        self.collection_len(collection) > self.collapsed_limit
    }

    pub fn visible_projects(&self) -> &[Project] {
        visible_slice(&self.projects, self.expanded.projects, self.collapsed_limit)
    }

    pub fn visible_case_studies(&self) -> &[CaseStudy] {
        visible_slice(
            &self.case_studies,
            self.expanded.case_studies,
            self.collapsed_limit,
        )
    }

    pub fn visible_certificates(&self) -> &[Certificate] {
        visible_slice(
            &self.certificates,
            self.expanded.certificates,
            self.collapsed_limit,
        )
    }

    pub fn rows_snapshot(&self, collection: ContentCollection) -> CollectionRows {
        match collection {
            ContentCollection::Projects => CollectionRows::Projects(self.projects.clone()),
            ContentCollection::CaseStudies => {
                CollectionRows::CaseStudies(self.case_studies.clone())
            }
            ContentCollection::Certificates => {
                CollectionRows::Certificates(self.certificates.clone())
            }
        }
    }

    pub fn case_study_by_id(&self, id: i64) -> Option<&CaseStudy> {
        self.case_studies
            .iter()
            .find(|case_study| case_study.id == Some(id))
    }

    pub fn project_by_id(&self, id: i64) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn projects(count: usize) -> Vec<Project> {
        (0..count)
            .map(|n| Project {
                id: Some(n as i64 + 1),
                title: format!("Project {}", n + 1),
                ..Project::default()
            })
            .collect()
    }

    #[test]
    fn collapsed_limit_tracks_the_viewport_breakpoint() {
        assert_eq!(collapsed_limit_for_viewport(Some(320.0)), 4);
        assert_eq!(collapsed_limit_for_viewport(Some(767.9)), 4);
        assert_eq!(collapsed_limit_for_viewport(Some(768.0)), 6);
        assert_eq!(collapsed_limit_for_viewport(Some(1440.0)), 6);
        assert_eq!(collapsed_limit_for_viewport(None), 6);
    }

    #[test]
    fn collapsed_view_shows_at_most_the_limit() {
        let mut state = PortfolioState {
            projects: projects(9),
            ..PortfolioState::default()
        };
        assert_eq!(state.visible_projects().len(), 6);
        assert!(state.can_toggle(ContentCollection::Projects));

        state.expanded.projects = true;
        assert_eq!(state.visible_projects().len(), 9);
    }

    #[test]
    fn short_collections_never_offer_a_toggle() {
        let state = PortfolioState {
            projects: projects(3),
            ..PortfolioState::default()
        };
        assert_eq!(state.visible_projects().len(), 3);
        assert!(!state.can_toggle(ContentCollection::Projects));
    }

    #[test]
    fn tab_indices_round_trip() {
        for tab in PortfolioTab::ALL {
            assert_eq!(PortfolioTab::from_index(tab.index()), Some(tab));
        }
        assert_eq!(PortfolioTab::from_index(4), None);
    }

    #[test]
    fn saved_theme_wins_over_the_system_preference() {
        assert_eq!(
            resolve_initial_theme(Some(Theme::Light), true),
            Theme::Light
        );
        assert_eq!(resolve_initial_theme(Some(Theme::Dark), false), Theme::Dark);
        assert_eq!(resolve_initial_theme(None, true), Theme::Dark);
        assert_eq!(resolve_initial_theme(None, false), Theme::Light);
    }

    #[test]
    fn blank_demo_links_count_as_missing() {
        let mut project = Project::default();
        assert!(!project.has_live_demo());

        project.demo_url = Some("   ".to_string());
        assert!(!project.has_live_demo());

        project.demo_url = Some("https://example.com/demo".to_string());
        assert!(project.has_live_demo());
    }

    #[test]
    fn record_fields_keep_their_wire_casing() {
        let row = serde_json::json!({
            "id": 7,
            "Title": "Workflow Automation",
            "Description": "Intake to fulfillment",
            "Img": "https://cdn.example.com/automation.png",
            "Link": "https://demo.example.com"
        });
        let project: Project = serde_json::from_value(row).expect("project decodes");
        assert_eq!(project.title, "Workflow Automation");
        assert_eq!(project.demo_url.as_deref(), Some("https://demo.example.com"));

        let encoded = serde_json::to_value(&project).expect("project encodes");
        assert_eq!(encoded["Title"], "Workflow Automation");
        assert_eq!(encoded["Img"], "https://cdn.example.com/automation.png");
    }

    #[test]
    fn fallback_case_studies_cover_the_three_engagements() {
        let fallback = fallback_case_studies();
        assert_eq!(fallback.len(), 3);
        assert_eq!(
            fallback.iter().map(|cs| cs.id).collect::<Vec<_>>(),
            vec![Some(1), Some(2), Some(3)]
        );
        assert!(fallback[0].title.contains("SSL"));
        assert!(fallback[1].title.contains("ServiceNow"));
        assert!(fallback[2].title.contains("Gateway"));
    }
}
