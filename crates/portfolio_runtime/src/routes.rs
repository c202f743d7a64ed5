//! Route paths and section anchors shared by the router, navbar, and page components.

/// Landing page section anchor ids, in page order.
///
/// The portfolio anchor keeps the spelling used by published links to the live site.
pub const SECTION_HOME: &str = "Home";
pub const SECTION_ABOUT: &str = "About";
pub const SECTION_PORTFOLIO: &str = "Portofolio";

pub const SECTION_IDS: [&str; 3] = [SECTION_HOME, SECTION_ABOUT, SECTION_PORTFOLIO];

pub const LANDING_PORTFOLIO_HREF: &str = "/#Portofolio";

pub const CASE_STUDY_SSL_ROUTE: &str = "/case-study/ssl";
pub const CASE_STUDY_SERVICENOW_ROUTE: &str = "/case-study/servicenow";
pub const CASE_STUDY_POWERBI_ROUTE: &str = "/case-study/powerbi";

/// Returns the detail route for a project card.
pub fn project_route(project_id: i64) -> String {
    format!("/project/{project_id}")
}

/// Returns the detail route for a case-study card.
///
/// The first three ids map onto the dedicated write-up pages. Any newer row published to the
/// table store falls through to the numeric route so it stays reachable without a code change.
pub fn case_study_route(case_study_id: i64) -> String {
    match case_study_id {
        1 => CASE_STUDY_SSL_ROUTE.to_string(),
        2 => CASE_STUDY_SERVICENOW_ROUTE.to_string(),
        3 => CASE_STUDY_POWERBI_ROUTE.to_string(),
        other => format!("/case-study/{other}"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn dedicated_case_study_routes_cover_the_first_three_ids() {
        assert_eq!(case_study_route(1), "/case-study/ssl");
        assert_eq!(case_study_route(2), "/case-study/servicenow");
        assert_eq!(case_study_route(3), "/case-study/powerbi");
    }

    #[test]
    fn other_case_study_ids_use_the_numeric_route() {
        assert_eq!(case_study_route(4), "/case-study/4");
        assert_eq!(case_study_route(42), "/case-study/42");
    }

    #[test]
    fn project_routes_are_numeric() {
        assert_eq!(project_route(7), "/project/7");
    }
}
