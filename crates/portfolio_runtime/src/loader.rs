//! Concurrent content sync against the table store.
//!
//! All three collections are read in one burst. Each branch settles on its
//! own, so a failing table degrades only its own section of the page while
//! the other branches still deliver fresh rows.

use content_store::{StoreClient, StoreError};
use leptos::logging;

use crate::model::{CaseStudy, Certificate, CollectionRows, ContentCollection, Project};
use crate::reducer::SyncOutcome;

/// Reads every collection concurrently and returns one [`SyncOutcome`] per
/// branch, in [`ContentCollection::ALL`] order.
///
/// Failures are logged here so the reducer stays silent about transport
/// details. A disabled client degrades every branch at once without issuing
/// requests.
pub async fn sync_all_collections(client: &StoreClient) -> Vec<SyncOutcome> {
    if let Some(reason) = client.disabled_reason() {
        logging::error!("content sync skipped: {reason}");
        return ContentCollection::ALL
            .into_iter()
            .map(SyncOutcome::Unavailable)
            .collect();
    }

    let (projects, case_studies, certificates) = futures::join!(
        client.read_all_ordered::<Project>(ContentCollection::Projects.table_name()),
        client.read_all_ordered::<CaseStudy>(ContentCollection::CaseStudies.table_name()),
        client.read_all_ordered::<Certificate>(ContentCollection::Certificates.table_name()),
    );

    vec![
        branch_outcome(
            ContentCollection::Projects,
            projects.map(CollectionRows::Projects),
        ),
        branch_outcome(
            ContentCollection::CaseStudies,
            case_studies.map(CollectionRows::CaseStudies),
        ),
        branch_outcome(
            ContentCollection::Certificates,
            certificates.map(CollectionRows::Certificates),
        ),
    ]
}

fn branch_outcome(
    collection: ContentCollection,
    result: Result<CollectionRows, StoreError>,
) -> SyncOutcome {
    match result {
        Ok(rows) => SyncOutcome::Fresh(rows),
        Err(err) => {
            logging::warn!("{} sync failed: {err}", collection.label());
            SyncOutcome::Unavailable(collection)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content_store::{MemoryTransport, StoreConfig, TransportResponse};
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::rc::Rc;

    const BASE: &str = "https://stub.supabase.co";

    fn table_url(collection: ContentCollection) -> String {
        format!(
            "{BASE}/rest/v1/{}?select=*&order=id.asc",
            collection.table_name()
        )
    }

    fn client_with(transport: &Rc<MemoryTransport>) -> StoreClient {
        StoreClient::connect(Ok(StoreConfig::new(BASE, "anon-key")), transport.clone())
    }

    #[test]
    fn all_branches_fresh_in_collection_order() {
        let transport = Rc::new(MemoryTransport::default());
        transport.script_ok(
            table_url(ContentCollection::Projects),
            TransportResponse::ok(r#"[{"id":1,"Title":"Automation portal"}]"#),
        );
        transport.script_ok(
            table_url(ContentCollection::CaseStudies),
            TransportResponse::ok(r#"[{"id":1,"Title":"Renewal"},{"id":2,"Title":"Access"}]"#),
        );
        transport.script_ok(
            table_url(ContentCollection::Certificates),
            TransportResponse::ok(r#"[]"#),
        );

        let outcomes = block_on(sync_all_collections(&client_with(&transport)));

        assert_eq!(outcomes.len(), 3);
        match &outcomes[0] {
            SyncOutcome::Fresh(CollectionRows::Projects(rows)) => {
                assert_eq!(rows[0].title, "Automation portal");
            }
            other => panic!("unexpected projects outcome: {other:?}"),
        }
        match &outcomes[1] {
            SyncOutcome::Fresh(CollectionRows::CaseStudies(rows)) => assert_eq!(rows.len(), 2),
            other => panic!("unexpected case studies outcome: {other:?}"),
        }
        assert_eq!(
            outcomes[2],
            SyncOutcome::Fresh(CollectionRows::Certificates(Vec::new()))
        );
    }

    #[test]
    fn one_failing_branch_does_not_poison_the_others() {
        let transport = Rc::new(MemoryTransport::default());
        transport.script_ok(
            table_url(ContentCollection::Projects),
            TransportResponse::ok(r#"[{"id":4,"Title":"Kept"}]"#),
        );
        transport.script_failure(table_url(ContentCollection::CaseStudies), "socket closed");
        transport.script_ok(
            table_url(ContentCollection::Certificates),
            TransportResponse::ok(r#"[{"id":1,"Img":"cert.png"}]"#),
        );

        let outcomes = block_on(sync_all_collections(&client_with(&transport)));

        assert!(matches!(outcomes[0], SyncOutcome::Fresh(_)));
        assert_eq!(
            outcomes[1],
            SyncOutcome::Unavailable(ContentCollection::CaseStudies)
        );
        assert!(matches!(outcomes[2], SyncOutcome::Fresh(_)));
    }

    #[test]
    fn disabled_client_reports_every_branch_unavailable() {
        let transport = Rc::new(MemoryTransport::default());
        let client = StoreClient::disabled("missing credentials", transport.clone());

        let outcomes = block_on(sync_all_collections(&client));

        assert_eq!(
            outcomes,
            vec![
                SyncOutcome::Unavailable(ContentCollection::Projects),
                SyncOutcome::Unavailable(ContentCollection::CaseStudies),
                SyncOutcome::Unavailable(ContentCollection::Certificates),
            ]
        );
        assert_eq!(transport.requests().len(), 0);
    }

    #[test]
    fn undecodable_rows_mark_the_branch_unavailable() {
        let transport = Rc::new(MemoryTransport::default());
        transport.script_ok(
            table_url(ContentCollection::Projects),
            TransportResponse::ok(r#"{"rows": "not an array"}"#),
        );
        transport.script_ok(
            table_url(ContentCollection::CaseStudies),
            TransportResponse::ok(r#"[]"#),
        );
        transport.script_ok(
            table_url(ContentCollection::Certificates),
            TransportResponse::ok(r#"[]"#),
        );

        let outcomes = block_on(sync_all_collections(&client_with(&transport)));

        assert_eq!(
            outcomes[0],
            SyncOutcome::Unavailable(ContentCollection::Projects)
        );
        assert!(matches!(outcomes[1], SyncOutcome::Fresh(_)));
    }
}
