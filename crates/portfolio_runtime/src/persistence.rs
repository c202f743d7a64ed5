//! Snapshot and preference persistence for the portfolio runtime.
//!
//! Content snapshots live under one key per collection and keep the wire
//! casing of the row fields, so snapshots written by earlier deployments of
//! the site stay readable. The theme choice is stored as a bare
//! `light`/`dark` string, and the case-study return marker is a one-shot
//! session flag that is cleared the moment it is read.

use leptos::logging;
use platform_host::{load_pref_with, raise_flag, save_pref_with, take_flag, HostServices};

use crate::model::{
    fallback_case_studies, CaseStudy, Certificate, CollectionRows, ContentCollection, Project,
    Theme,
};

/// Preference key holding the saved theme choice.
pub const THEME_KEY: &str = "theme";
/// Session flag raised by detail pages before navigating back to the tabs.
pub const RETURN_TO_CASE_STUDIES_KEY: &str = "returnToCaseStudies";

async fn load_snapshot_rows(
    services: &HostServices,
    collection: ContentCollection,
) -> Option<CollectionRows> {
    let prefs = services.prefs.as_ref();
    let key = collection.snapshot_key();
    let loaded = match collection {
        ContentCollection::Projects => load_pref_with::<_, Vec<Project>>(prefs, key)
            .await
            .map(|rows| rows.map(CollectionRows::Projects)),
        ContentCollection::CaseStudies => load_pref_with::<_, Vec<CaseStudy>>(prefs, key)
            .await
            .map(|rows| rows.map(CollectionRows::CaseStudies)),
        ContentCollection::Certificates => load_pref_with::<_, Vec<Certificate>>(prefs, key)
            .await
            .map(|rows| rows.map(CollectionRows::Certificates)),
    };

    match loaded {
        Ok(rows) => rows,
        Err(err) => {
            logging::warn!("{} snapshot unreadable: {err}", collection.label());
            None
        }
    }
}

/// Loads every decodable content snapshot for boot hydration, in
/// [`ContentCollection::ALL`] order.
///
/// Case studies fall back to the built-in samples when no snapshot exists, so
/// that tab has content before the first sync settles. An unreadable snapshot
/// is treated the same as a missing one.
pub async fn load_content_snapshots(services: &HostServices) -> Vec<CollectionRows> {
    let mut hydrated = Vec::new();
    for collection in ContentCollection::ALL {
        match load_snapshot_rows(services, collection).await {
            Some(rows) => hydrated.push(rows),
            None if collection == ContentCollection::CaseStudies => {
                hydrated.push(CollectionRows::CaseStudies(fallback_case_studies()));
            }
            None => {}
        }
    }
    hydrated
}

/// Writes freshly synced rows to the snapshot store.
pub async fn persist_snapshot(
    services: &HostServices,
    rows: &CollectionRows,
) -> Result<(), String> {
    let prefs = services.prefs.as_ref();
    let key = rows.collection().snapshot_key();
    match rows {
        CollectionRows::Projects(projects) => save_pref_with(prefs, key, projects).await,
        CollectionRows::CaseStudies(case_studies) => save_pref_with(prefs, key, case_studies).await,
        CollectionRows::Certificates(certificates) => {
            save_pref_with(prefs, key, certificates).await
        }
    }
}

/// Reads the saved theme choice, if any. Unknown values count as unsaved.
pub async fn load_saved_theme(services: &HostServices) -> Option<Theme> {
    match services.prefs.load_pref(THEME_KEY).await {
        Ok(raw) => raw.as_deref().and_then(Theme::parse),
        Err(err) => {
            logging::warn!("saved theme unreadable: {err}");
            None
        }
    }
}

/// Saves the current theme choice as a bare string.
pub async fn persist_theme(services: &HostServices, theme: Theme) -> Result<(), String> {
    services.prefs.save_pref(THEME_KEY, theme.as_str()).await
}

/// Consumes the one-shot return flag. The flag is cleared even when the
/// stored value does not match.
pub fn take_return_to_case_studies(services: &HostServices) -> bool {
    match take_flag(services.session.as_ref(), RETURN_TO_CASE_STUDIES_KEY) {
        Ok(raised) => raised,
        Err(err) => {
            logging::warn!("case-study return flag unreadable: {err}");
            false
        }
    }
}

/// Raises the one-shot return flag ahead of navigating back to the landing
/// page.
pub fn raise_return_to_case_studies(services: &HostServices) {
    if let Err(err) = raise_flag(services.session.as_ref(), RETURN_TO_CASE_STUDIES_KEY) {
        logging::warn!("case-study return flag not raised: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    fn sample_projects() -> Vec<Project> {
        vec![Project {
            id: Some(1),
            title: "Automation portal".to_string(),
            description: "Self-service intake".to_string(),
            image_url: "portal.png".to_string(),
            demo_url: None,
        }]
    }

    #[test]
    fn snapshots_round_trip_through_the_store() {
        let services = HostServices::memory();
        let rows = CollectionRows::Projects(sample_projects());

        block_on(async {
            persist_snapshot(&services, &rows).await.expect("persist");
            let hydrated = load_content_snapshots(&services).await;

            assert_eq!(hydrated.len(), 2);
            assert_eq!(hydrated[0], rows);
            assert_eq!(
                hydrated[1],
                CollectionRows::CaseStudies(fallback_case_studies())
            );
        });
    }

    #[test]
    fn missing_case_study_snapshot_yields_the_fallback() {
        let services = HostServices::memory();

        let hydrated = block_on(load_content_snapshots(&services));

        assert_eq!(
            hydrated,
            vec![CollectionRows::CaseStudies(fallback_case_studies())]
        );
    }

    #[test]
    fn unreadable_snapshots_are_skipped() {
        let services = HostServices::memory();

        block_on(async {
            services
                .prefs
                .save_pref("projects", "definitely not json")
                .await
                .expect("seed");
            let hydrated = load_content_snapshots(&services).await;

            assert_eq!(
                hydrated,
                vec![CollectionRows::CaseStudies(fallback_case_studies())]
            );
        });
    }

    #[test]
    fn snapshots_keep_the_wire_casing() {
        let services = HostServices::memory();
        let rows = CollectionRows::Projects(sample_projects());

        block_on(async {
            persist_snapshot(&services, &rows).await.expect("persist");
            let raw = services
                .prefs
                .load_pref("projects")
                .await
                .expect("load")
                .expect("present");

            assert!(raw.contains("\"Title\""));
            assert!(raw.contains("\"Img\""));
        });
    }

    #[test]
    fn theme_round_trips_as_a_bare_string() {
        let services = HostServices::memory();

        block_on(async {
            persist_theme(&services, Theme::Dark).await.expect("save");
            let raw = services.prefs.load_pref(THEME_KEY).await.expect("load");

            assert_eq!(raw.as_deref(), Some("dark"));
            assert_eq!(load_saved_theme(&services).await, Some(Theme::Dark));
        });
    }

    #[test]
    fn unknown_saved_theme_counts_as_unsaved() {
        let services = HostServices::memory();

        block_on(async {
            services
                .prefs
                .save_pref(THEME_KEY, "sepia")
                .await
                .expect("seed");

            assert_eq!(load_saved_theme(&services).await, None);
        });
    }

    #[test]
    fn return_flag_is_consumed_on_first_read() {
        let services = HostServices::memory();

        raise_return_to_case_studies(&services);
        assert!(take_return_to_case_studies(&services));
        assert!(!take_return_to_case_studies(&services));
    }
}
