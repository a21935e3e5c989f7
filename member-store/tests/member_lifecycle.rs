//! End-to-end member lifecycle against a file-backed database:
//! validate, add, reload, reject a duplicate email, update, delete.

use member_store::validation::validate_member_form;
use member_store::{MemberFilter, MemberStorage, MemberStore};
use shared::models::{EmergencyContactDraft, MemberDraft, MemberStatus, MemberUpdate};

fn jane_draft() -> MemberDraft {
    MemberDraft {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: "jane@x.com".to_string(),
        phone: "5551234567".to_string(),
        age: "30".to_string(),
        membership_type: "basic".to_string(),
        emergency_contact: EmergencyContactDraft {
            name: "John Doe".to_string(),
            relationship: "Spouse".to_string(),
            phone: "5559876543".to_string(),
        },
    }
}

#[test]
fn member_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("members.redb");

    let storage = MemberStorage::open(&path).unwrap();
    let mut store = MemberStore::load(storage);
    assert!(store.is_empty());

    // Validate against the current (empty) email set, then add
    let draft = jane_draft();
    let errors = validate_member_form(&draft, &store.existing_emails());
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");

    let member = draft.build().unwrap();
    let id = member.id.clone();
    store.add(member.clone());
    assert_eq!(store.len(), 1);
    assert!(store.existing_emails().contains(&"jane@x.com".to_string()));

    // A second draft with the same email in a different case is rejected
    let mut dup = jane_draft();
    dup.email = "Jane@X.com".to_string();
    let errors = validate_member_form(&dup, &store.existing_emails());
    assert_eq!(
        errors.get("email").map(String::as_str),
        Some("This email is already registered")
    );

    // Reload from disk: the record round-trips, joinDate included
    drop(store);
    let storage = MemberStorage::open(&path).unwrap();
    let mut store = MemberStore::load(storage);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(&id), Some(&member));

    // Suspend the member; unspecified fields are retained
    let updated = store
        .update(
            &id,
            MemberUpdate {
                status: Some(MemberStatus::Suspended),
                ..Default::default()
            },
        )
        .expect("member should be found");
    assert_eq!(updated.status, MemberStatus::Suspended);
    assert_eq!(updated.email, "jane@x.com");
    assert_eq!(updated.join_date, member.join_date);

    // The suspended member shows up under the status filter
    let suspended = store.filter(&MemberFilter {
        status: Some(MemberStatus::Suspended),
        ..Default::default()
    });
    assert_eq!(suspended.len(), 1);
    assert_eq!(store.stats().suspended, 1);

    // Unknown ids are explicit not-found results, not errors
    assert!(store.update("no-such-id", MemberUpdate::default()).is_none());
    assert!(!store.delete("no-such-id"));
    assert_eq!(store.len(), 1);

    // Delete and verify the snapshot no longer contains the record
    assert!(store.delete(&id));
    assert!(store.is_empty());
    drop(store);

    let storage = MemberStorage::open(&path).unwrap();
    let store = MemberStore::load(storage);
    assert!(store.is_empty());
}
