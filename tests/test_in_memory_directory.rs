//! End-to-end lookups against a JSON-backed in-memory directory.

use contact_phone_resolver::directory::{ContactDirectory, InMemoryDirectory};
use contact_phone_resolver::domain::phone_type;
use contact_phone_resolver::error::DirectoryError;
use contact_phone_resolver::resolver::ContactResolver;
use std::io::Write;
use std::sync::Arc;

const CONTACTS: &str = r#"{
  "contacts": [
    {
      "id": 1,
      "name": "Alice Martin",
      "phones": [
        {"number": "+33 6 12 34 56 78", "label": "", "type": 2},
        {"number": "01 23 45 67 89", "type": 1}
      ]
    },
    {
      "id": 2,
      "name": "Bob Martinez",
      "phones": [
        {"number": "+1 415 555 0100", "label": "Cell", "type": 2}
      ]
    },
    {
      "id": 3,
      "name": "Chloé Bernard"
    }
  ]
}"#;

fn load() -> InMemoryDirectory {
    InMemoryDirectory::from_json_str(CONTACTS).unwrap()
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CONTACTS.as_bytes()).unwrap();

    let directory = InMemoryDirectory::from_path(file.path()).unwrap();
    assert_eq!(directory.len(), 3);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = InMemoryDirectory::from_path(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, DirectoryError::Io(_)));
}

#[test]
fn test_resolve_by_name() {
    let resolver = ContactResolver::with_default_plan(Arc::new(load()));
    let phones = resolver.resolve_candidates("martin").unwrap();

    let numbers: Vec<(&str, &str, Option<&str>)> = phones
        .iter()
        .map(|p| (p.contact_name(), p.clean_number(), p.label()))
        .collect();
    assert_eq!(
        numbers,
        vec![
            ("Alice Martin", "0612345678", Some("Mobile")),
            ("Alice Martin", "0123456789", Some("Home")),
            ("Bob Martinez", "+14155550100", Some("Cell")),
        ]
    );
}

#[test]
fn test_resolve_literal_number_finds_owner() {
    let resolver = ContactResolver::with_default_plan(Arc::new(load()));
    let phones = resolver.resolve_candidates("06 12 34 56 78").unwrap();

    assert_eq!(phones.len(), 1);
    assert_eq!(phones[0].contact_name(), "Alice Martin");
    assert_eq!(phones[0].clean_number(), "0612345678");
}

#[test]
fn test_mobile_only_across_plans() {
    let resolver = ContactResolver::with_default_plan(Arc::new(load()));

    let french = resolver.resolve_mobile_candidates("Alice").unwrap();
    assert_eq!(french.len(), 1);
    assert!(french[0].is_mobile());

    let american = resolver.resolve_mobile_candidates("Bob").unwrap();
    assert_eq!(american.len(), 1);
    assert!(!american[0].is_mobile());
    assert_eq!(american[0].phone_type(), phone_type::MOBILE);
}

#[test]
fn test_contact_without_phones_contributes_nothing() {
    let directory = load();
    assert_eq!(directory.find_contacts("chloé").unwrap().len(), 1);

    let resolver = ContactResolver::with_default_plan(Arc::new(directory));
    assert!(resolver.resolve_candidates("Chloé").unwrap().is_empty());
}
