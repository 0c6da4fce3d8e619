//! Controller tests against a mocked contacts service.

use super::*;
use crate::api::MockContactsApi;
use crate::model::ContactPage;
use crate::state::PageQuery;
use mockall::Sequence;
use rstest::rstest;

fn record(id: &str, first: &str) -> ContactRecord {
    ContactRecord {
        id: id.into(),
        first_name: first.into(),
        last_name: "Doe".into(),
        email: format!("{id}@example.com"),
        phone_number: "5551234567".into(),
        company: None,
        job_title: None,
        created_at: "2025-01-01T00:00:00+00:00".into(),
        updated_at: "2025-01-01T00:00:00+00:00".into(),
    }
}

fn page(contacts: Vec<ContactRecord>, total_contacts: u64) -> ContactPage {
    ContactPage {
        contacts,
        current_page: 1,
        total_pages: total_contacts.div_ceil(5),
        total_contacts,
    }
}

fn fill_valid_form<A: ContactsApi>(table: &mut ContactTable<A>) {
    table.set_new_contact_field(Column::FirstName, "Jane");
    table.set_new_contact_field(Column::LastName, "Doe");
    table.set_new_contact_field(Column::Email, "jane@example.com");
    table.set_new_contact_field(Column::PhoneNumber, "5551234567");
}

fn messages(notifications: &[Notification]) -> Vec<(NotificationLevel, &str)> {
    notifications
        .iter()
        .map(|n| (n.level, n.message.as_str()))
        .collect()
}

#[rstest]
#[tokio::test]
async fn load_fetches_and_sorts_the_first_page() {
    let mut api = MockContactsApi::new();
    api.expect_list()
        .withf(|query| *query == PageQuery { page: 1, limit: 5 })
        .times(1)
        .returning(|_| Ok(page(vec![record("b", "Zoe"), record("a", "Amy")], 2)));
    let mut table = ContactTable::new(api);

    table.load().await.expect("page loads");

    let firsts: Vec<&str> = table
        .state()
        .rows
        .iter()
        .map(|r| r.first_name.as_str())
        .collect();
    assert_eq!(firsts, vec!["Amy", "Zoe"]);
    assert_eq!(table.state().total_contacts, 2);
}

#[rstest]
#[tokio::test]
async fn invalid_form_never_reaches_the_service() {
    let mut api = MockContactsApi::new();
    api.expect_create().never();
    api.expect_list().never();
    let mut table = ContactTable::new(api);
    table.set_new_contact_field(Column::FirstName, "Jane");

    let err = table.create().await.expect_err("validation fails");

    assert!(matches!(err, ClientError::Validation(ref errors) if errors.len() == 4));
    let notes = table.drain_notifications();
    assert_eq!(notes.len(), 4);
    assert!(notes.iter().all(|n| n.level == NotificationLevel::Error));
    assert_eq!(table.new_contact().first_name, "Jane");
}

#[rstest]
#[tokio::test]
async fn successful_create_resets_form_and_refetches_current_page() {
    let mut seq = Sequence::new();
    let mut api = MockContactsApi::new();
    api.expect_list()
        .withf(|query| query.page == 2)
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(page(vec![record("f", "Fay")], 6)));
    api.expect_create()
        .withf(|form| form.email == "jane@example.com")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(record("j", "Jane")));
    api.expect_list()
        .withf(|query| query.page == 2)
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(page(vec![record("f", "Fay"), record("j", "Jane")], 7)));
    let mut table = ContactTable::new(api);
    table
        .dispatch(TableAction::ChangePage(2))
        .await
        .expect("page two loads");
    fill_valid_form(&mut table);

    let created = table.create().await.expect("create succeeds");

    assert_eq!(created.id, "j");
    assert_eq!(table.new_contact(), &ContactForm::default());
    assert_eq!(table.state().page, 2);
    assert_eq!(table.state().total_contacts, 7);
    assert_eq!(
        messages(&table.drain_notifications()),
        vec![(NotificationLevel::Success, ADDED)]
    );
}

#[rstest]
#[tokio::test]
async fn conflict_keeps_form_and_reports_server_message() {
    let mut api = MockContactsApi::new();
    api.expect_create().times(1).returning(|_| {
        Err(ClientError::Server {
            status: 409,
            message: "Email already exists".into(),
        })
    });
    api.expect_list().never();
    let mut table = ContactTable::new(api);
    fill_valid_form(&mut table);

    let err = table.create().await.expect_err("conflict");

    assert!(matches!(err, ClientError::Server { status: 409, .. }));
    assert_eq!(table.new_contact().email, "jane@example.com");
    assert_eq!(
        messages(&table.drain_notifications()),
        vec![(NotificationLevel::Error, "Email already exists")]
    );
}

#[rstest]
#[tokio::test]
async fn saving_an_edit_updates_then_clears_the_buffer() {
    let mut seq = Sequence::new();
    let mut api = MockContactsApi::new();
    api.expect_list()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(page(vec![record("a", "Amy")], 1)));
    api.expect_update()
        .withf(|id, form| id == "a" && form.company == "Acme")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| {
            let mut updated = record("a", "Amy");
            updated.company = Some("Acme".into());
            Ok(updated)
        });
    api.expect_list().times(1).in_sequence(&mut seq).returning(|_| {
        let mut updated = record("a", "Amy");
        updated.company = Some("Acme".into());
        Ok(page(vec![updated], 1))
    });
    let mut table = ContactTable::new(api);
    table.load().await.expect("page loads");
    table
        .dispatch(TableAction::BeginEdit("a".into()))
        .await
        .expect("edit begins");
    table
        .dispatch(TableAction::EditField {
            column: Column::Company,
            value: "Acme".into(),
        })
        .await
        .expect("field edits");

    let updated = table.save_edit().await.expect("update succeeds");

    assert_eq!(updated.and_then(|r| r.company), Some("Acme".to_owned()));
    assert!(table.state().edit.is_none());
    assert_eq!(
        table.state().rows.first().and_then(|r| r.company.as_deref()),
        Some("Acme")
    );
    assert_eq!(
        messages(&table.drain_notifications()),
        vec![(NotificationLevel::Success, UPDATED)]
    );
}

#[rstest]
#[tokio::test]
async fn saving_without_an_edit_does_nothing() {
    let mut api = MockContactsApi::new();
    api.expect_update().never();
    let mut table = ContactTable::new(api);

    assert_eq!(table.save_edit().await, Ok(None));
    assert!(table.drain_notifications().is_empty());
}

#[rstest]
#[tokio::test]
async fn invalid_edit_keeps_the_buffer() {
    let mut api = MockContactsApi::new();
    api.expect_list()
        .times(1)
        .returning(|_| Ok(page(vec![record("a", "Amy")], 1)));
    api.expect_update().never();
    let mut table = ContactTable::new(api);
    table.load().await.expect("page loads");
    table
        .dispatch(TableAction::BeginEdit("a".into()))
        .await
        .expect("edit begins");
    table
        .dispatch(TableAction::EditField {
            column: Column::PhoneNumber,
            value: "12ab".into(),
        })
        .await
        .expect("field edits");

    let err = table.save_edit().await.expect_err("validation fails");

    assert!(matches!(err, ClientError::Validation(_)));
    assert_eq!(
        table.state().edit.as_ref().map(|e| e.form.phone_number.as_str()),
        Some("12ab")
    );
}

#[rstest]
#[tokio::test]
async fn delete_refetches_and_reports() {
    let mut api = MockContactsApi::new();
    api.expect_delete()
        .withf(|id| id == "a")
        .times(1)
        .returning(|_| Ok(record("a", "Amy")));
    api.expect_list()
        .times(1)
        .returning(|_| Ok(page(Vec::new(), 0)));
    let mut table = ContactTable::new(api);

    let deleted = table.delete("a").await.expect("delete succeeds");

    assert_eq!(deleted.id, "a");
    assert!(table.state().rows.is_empty());
    assert_eq!(
        messages(&table.drain_notifications()),
        vec![(NotificationLevel::Success, DELETED)]
    );
}

#[rstest]
#[tokio::test]
async fn transport_failures_are_notified() {
    let mut api = MockContactsApi::new();
    api.expect_list()
        .times(1)
        .returning(|_| Err(ClientError::transport("connection refused")));
    let mut table = ContactTable::new(api);

    let err = table.load().await.expect_err("transport failure");

    assert_eq!(err, ClientError::transport("connection refused"));
    assert_eq!(
        messages(&table.drain_notifications()),
        vec![(NotificationLevel::Error, "connection refused")]
    );
}

#[rstest]
#[tokio::test]
async fn failed_page_change_keeps_the_loaded_page_and_can_be_retried() {
    let mut seq = Sequence::new();
    let mut api = MockContactsApi::new();
    api.expect_list()
        .withf(|query| query.page == 1)
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(page(vec![record("a", "Amy")], 6)));
    api.expect_list()
        .withf(|query| query.page == 2)
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Err(ClientError::transport("connection reset")));
    api.expect_list()
        .withf(|query| query.page == 2)
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| {
            Ok(ContactPage {
                current_page: 2,
                ..page(vec![record("f", "Fay")], 6)
            })
        });
    let mut table = ContactTable::new(api);
    table.load().await.expect("page one loads");

    let err = table
        .dispatch(TableAction::ChangePage(2))
        .await
        .expect_err("fetch fails");

    assert_eq!(err, ClientError::transport("connection reset"));
    assert_eq!(table.state().page, 1);
    let ids: Vec<&str> = table.state().rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["a"]);

    table
        .dispatch(TableAction::ChangePage(2))
        .await
        .expect("retry loads page two");
    assert_eq!(table.state().page, 2);
    assert_eq!(
        table.state().rows.first().map(|r| r.id.as_str()),
        Some("f")
    );
}

#[rstest]
#[tokio::test]
async fn failed_page_size_change_keeps_the_previous_size() {
    let mut seq = Sequence::new();
    let mut api = MockContactsApi::new();
    api.expect_list()
        .withf(|query| query.limit == 5)
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(page(vec![record("a", "Amy")], 1)));
    api.expect_list()
        .withf(|query| query.limit == 25)
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Err(ClientError::transport("timed out")));
    let mut table = ContactTable::new(api);
    table.load().await.expect("page loads");
    let before = table.state().clone();

    table
        .dispatch(TableAction::ChangePageSize(25))
        .await
        .expect_err("fetch fails");

    assert_eq!(table.state(), &before);
    assert_eq!(
        messages(&table.drain_notifications()),
        vec![(NotificationLevel::Error, "timed out")]
    );
}
