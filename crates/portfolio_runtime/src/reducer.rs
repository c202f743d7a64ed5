//! Pure state transitions for the portfolio runtime.
//!
//! [`reduce_portfolio`] applies a single [`PortfolioAction`] to a
//! [`PortfolioState`] and returns the [`RuntimeEffect`] values the host layer
//! must perform afterwards. Reductions never touch the DOM, the network, or
//! storage, so every transition can be exercised in plain native tests.

use thiserror::Error;

use crate::model::{
    fallback_case_studies, CollectionRows, ContentCollection, PortfolioState, PortfolioTab, Theme,
};

/// Result of one branch of the concurrent content sync.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    /// The branch answered. The rows are authoritative, even when empty.
    Fresh(CollectionRows),
    /// The branch failed. Whatever content is already on screen stays.
    Unavailable(ContentCollection),
}

/// A user or boot intent the reducer can apply.
#[derive(Debug, Clone, PartialEq)]
pub enum PortfolioAction {
    /// Replaces a collection with rows decoded from the local snapshot
    /// during boot, ahead of the network sync.
    HydrateCollection {
        /// Rows read back from the snapshot store.
        rows: CollectionRows,
    },
    /// Applies the resolved initial theme during boot.
    HydrateTheme {
        /// Theme derived from the saved choice or the system preference.
        theme: Theme,
    },
    /// Applies the result of one sync branch once its request settles.
    CollectionSynced {
        /// Fresh rows or a failure marker for the branch.
        outcome: SyncOutcome,
    },
    /// Activates the portfolio tab at a zero-based index.
    SelectTab {
        /// Position of the tab in the tab strip.
        index: usize,
    },
    /// Flips a collection between its collapsed preview and the full list.
    ToggleSection {
        /// Collection whose expansion flag should flip.
        collection: ContentCollection,
    },
    /// Records how many cards a collapsed collection may show, sampled from
    /// the viewport once at mount.
    SetCollapsedLimit {
        /// Maximum number of cards in the collapsed preview.
        limit: usize,
    },
    /// Switches between the light and dark theme.
    ToggleTheme,
}

/// Side effects the host must run after a successful reduction.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeEffect {
    /// Write freshly synced rows to the local snapshot store.
    PersistSnapshot {
        /// Rows exactly as they should appear in the snapshot.
        rows: CollectionRows,
    },
    /// Write the current theme choice to preference storage.
    PersistTheme,
    /// Reflect the current theme on the document root.
    ApplyThemeToDocument,
}

/// Raised when an action cannot be applied to the current state.
#[derive(Debug, Error, PartialEq)]
pub enum ReducerError {
    /// The tab strip has no tab at the requested index.
    #[error("no portfolio tab at index {index}")]
    UnknownTab {
        /// Index that was requested.
        index: usize,
    },
    /// A collapsed preview must always show at least one card.
    #[error("collapsed limit must be at least 1")]
    InvalidCollapsedLimit,
}

fn apply_rows(state: &mut PortfolioState, rows: &CollectionRows) {
    match rows {
        CollectionRows::Projects(projects) => state.projects = projects.clone(),
        CollectionRows::CaseStudies(case_studies) => state.case_studies = case_studies.clone(),
        CollectionRows::Certificates(certificates) => state.certificates = certificates.clone(),
    }
}

/// Applies `action` to `state` and returns the effects to run.
///
/// On error the state is left untouched.
pub fn reduce_portfolio(
    state: &mut PortfolioState,
    action: PortfolioAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    match action {
        PortfolioAction::HydrateCollection { rows } => {
            apply_rows(state, &rows);
            Ok(Vec::new())
        }
        PortfolioAction::HydrateTheme { theme } => {
            state.theme = theme;
            Ok(vec![RuntimeEffect::ApplyThemeToDocument])
        }
        PortfolioAction::CollectionSynced { outcome } => match outcome {
            SyncOutcome::Fresh(rows) => {
                apply_rows(state, &rows);
                Ok(vec![RuntimeEffect::PersistSnapshot { rows }])
            }
            SyncOutcome::Unavailable(collection) => {
                // A failed branch never overwrites usable content and never
                // touches the snapshot. Case studies are the one collection
                // with built-in fallback copy when nothing else is available.
                if collection == ContentCollection::CaseStudies && state.case_studies.is_empty() {
                    state.case_studies = fallback_case_studies();
                }
                Ok(Vec::new())
            }
        },
        PortfolioAction::SelectTab { index } => {
            let tab = PortfolioTab::from_index(index).ok_or(ReducerError::UnknownTab { index })?;
            state.active_tab = tab;
            Ok(Vec::new())
        }
        PortfolioAction::ToggleSection { collection } => {
            match collection {
                ContentCollection::Projects => {
                    state.expanded.projects = !state.expanded.projects;
                }
                ContentCollection::CaseStudies => {
                    state.expanded.case_studies = !state.expanded.case_studies;
                }
                ContentCollection::Certificates => {
                    state.expanded.certificates = !state.expanded.certificates;
                }
            }
            Ok(Vec::new())
        }
        PortfolioAction::SetCollapsedLimit { limit } => {
            if limit == 0 {
                return Err(ReducerError::InvalidCollapsedLimit);
            }
            state.collapsed_limit = limit;
            Ok(Vec::new())
        }
        PortfolioAction::ToggleTheme => {
            state.theme = state.theme.toggled();
            Ok(vec![
                RuntimeEffect::ApplyThemeToDocument,
                RuntimeEffect::PersistTheme,
            ])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CaseStudy, Project};
    use pretty_assertions::assert_eq;

    fn project(id: i64, title: &str) -> Project {
        Project {
            id: Some(id),
            title: title.to_string(),
            ..Project::default()
        }
    }

    fn case_study(id: i64, title: &str) -> CaseStudy {
        CaseStudy {
            id: Some(id),
            title: title.to_string(),
            ..CaseStudy::default()
        }
    }

    #[test]
    fn selecting_a_tab_by_index() {
        let mut state = PortfolioState::default();
        let effects = reduce_portfolio(&mut state, PortfolioAction::SelectTab { index: 1 })
            .expect("tab exists");

        assert_eq!(state.active_tab, PortfolioTab::CaseStudies);
        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn unknown_tab_index_is_rejected() {
        let mut state = PortfolioState::default();
        let err = reduce_portfolio(&mut state, PortfolioAction::SelectTab { index: 9 })
            .expect_err("index out of range");

        assert_eq!(err, ReducerError::UnknownTab { index: 9 });
        assert_eq!(state.active_tab, PortfolioTab::Projects);
    }

    #[test]
    fn toggling_a_section_flips_only_that_section() {
        let mut state = PortfolioState::default();
        reduce_portfolio(
            &mut state,
            PortfolioAction::ToggleSection {
                collection: ContentCollection::Certificates,
            },
        )
        .expect("toggle applies");

        assert!(state.expanded.certificates);
        assert!(!state.expanded.projects);
        assert!(!state.expanded.case_studies);

        reduce_portfolio(
            &mut state,
            PortfolioAction::ToggleSection {
                collection: ContentCollection::Certificates,
            },
        )
        .expect("toggle applies");
        assert!(!state.expanded.certificates);
    }

    #[test]
    fn zero_collapsed_limit_is_rejected() {
        let mut state = PortfolioState::default();
        let err = reduce_portfolio(&mut state, PortfolioAction::SetCollapsedLimit { limit: 0 })
            .expect_err("zero limit");

        assert_eq!(err, ReducerError::InvalidCollapsedLimit);
        assert_eq!(state.collapsed_limit, 6);
    }

    #[test]
    fn fresh_rows_replace_state_and_persist() {
        let mut state = PortfolioState {
            projects: vec![project(1, "Cached")],
            ..PortfolioState::default()
        };
        let fresh = CollectionRows::Projects(vec![project(2, "Fresh"), project(3, "Newer")]);

        let effects = reduce_portfolio(
            &mut state,
            PortfolioAction::CollectionSynced {
                outcome: SyncOutcome::Fresh(fresh.clone()),
            },
        )
        .expect("fresh sync applies");

        assert_eq!(state.projects.len(), 2);
        assert_eq!(state.projects[0].title, "Fresh");
        assert_eq!(effects, vec![RuntimeEffect::PersistSnapshot { rows: fresh }]);
    }

    #[test]
    fn fresh_empty_rows_still_replace_cached_content() {
        let mut state = PortfolioState {
            case_studies: vec![case_study(1, "Cached study")],
            ..PortfolioState::default()
        };
        let fresh = CollectionRows::CaseStudies(Vec::new());

        let effects = reduce_portfolio(
            &mut state,
            PortfolioAction::CollectionSynced {
                outcome: SyncOutcome::Fresh(fresh.clone()),
            },
        )
        .expect("fresh sync applies");

        assert_eq!(state.case_studies, Vec::new());
        assert_eq!(effects, vec![RuntimeEffect::PersistSnapshot { rows: fresh }]);
    }

    #[test]
    fn unavailable_case_studies_fall_back_only_when_empty() {
        let mut state = PortfolioState::default();
        let effects = reduce_portfolio(
            &mut state,
            PortfolioAction::CollectionSynced {
                outcome: SyncOutcome::Unavailable(ContentCollection::CaseStudies),
            },
        )
        .expect("unavailable branch applies");

        assert_eq!(state.case_studies, fallback_case_studies());
        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn unavailable_case_studies_keep_hydrated_rows() {
        let hydrated = vec![case_study(9, "From snapshot")];
        let mut state = PortfolioState {
            case_studies: hydrated.clone(),
            ..PortfolioState::default()
        };

        reduce_portfolio(
            &mut state,
            PortfolioAction::CollectionSynced {
                outcome: SyncOutcome::Unavailable(ContentCollection::CaseStudies),
            },
        )
        .expect("unavailable branch applies");

        assert_eq!(state.case_studies, hydrated);
    }

    #[test]
    fn unavailable_projects_leave_state_untouched() {
        let mut state = PortfolioState {
            projects: vec![project(1, "Cached")],
            ..PortfolioState::default()
        };

        let effects = reduce_portfolio(
            &mut state,
            PortfolioAction::CollectionSynced {
                outcome: SyncOutcome::Unavailable(ContentCollection::Projects),
            },
        )
        .expect("unavailable branch applies");

        assert_eq!(state.projects.len(), 1);
        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn hydrating_a_collection_emits_no_effects() {
        let mut state = PortfolioState::default();
        let effects = reduce_portfolio(
            &mut state,
            PortfolioAction::HydrateCollection {
                rows: CollectionRows::Certificates(Vec::new()),
            },
        )
        .expect("hydrate applies");

        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn hydrating_the_theme_applies_without_persisting() {
        let mut state = PortfolioState::default();
        let effects = reduce_portfolio(
            &mut state,
            PortfolioAction::HydrateTheme { theme: Theme::Dark },
        )
        .expect("hydrate applies");

        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(effects, vec![RuntimeEffect::ApplyThemeToDocument]);
    }

    #[test]
    fn toggling_the_theme_applies_and_persists() {
        let mut state = PortfolioState::default();
        let effects =
            reduce_portfolio(&mut state, PortfolioAction::ToggleTheme).expect("toggle applies");

        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::ApplyThemeToDocument,
                RuntimeEffect::PersistTheme,
            ]
        );

        reduce_portfolio(&mut state, PortfolioAction::ToggleTheme).expect("toggle applies");
        assert_eq!(state.theme, Theme::Light);
    }
}
