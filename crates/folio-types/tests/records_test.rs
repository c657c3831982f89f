use folio_types::{ContactMessage, Experience, Record, Schema, Testimonial, DEFAULT_SOURCE};
use serde_json::json;

#[test]
fn test_contact_source_defaults_when_missing() {
    let msg: ContactMessage = serde_json::from_value(json!({
        "name": "A",
        "email": "a@b.com",
        "subject": "Hi",
        "message": "Hello"
    }))
    .unwrap();

    assert_eq!(msg.source, DEFAULT_SOURCE);
    assert!(msg.created_at.is_none());
    assert!(msg.updated_at.is_none());
}

#[test]
fn test_contact_source_defaults_when_null() {
    let msg: ContactMessage = serde_json::from_value(json!({
        "name": "A",
        "email": "a@b.com",
        "subject": "Hi",
        "message": "Hello",
        "source": null
    }))
    .unwrap();

    assert_eq!(msg.source, "portfolio");
}

#[test]
fn test_contact_keeps_explicit_source() {
    let msg: ContactMessage = serde_json::from_value(json!({
        "name": "A",
        "email": "a@b.com",
        "subject": "Hi",
        "message": "Hello",
        "source": "linkedin"
    }))
    .unwrap();

    assert_eq!(msg.source, "linkedin");
}

#[test]
fn test_contact_rejects_missing_required_field() {
    let result = serde_json::from_value::<ContactMessage>(json!({
        "name": "A",
        "subject": "Hi",
        "message": "Hello"
    }));

    let err = result.unwrap_err().to_string();
    assert!(err.contains("email"), "unexpected error: {}", err);
}

#[test]
fn test_contact_rejects_non_string_field() {
    let result = serde_json::from_value::<ContactMessage>(json!({
        "name": "A",
        "email": "a@b.com",
        "subject": 42,
        "message": "Hello"
    }));

    assert!(result.is_err());
}

#[test]
fn test_contact_ignores_unknown_fields() {
    let msg: ContactMessage = serde_json::from_value(json!({
        "name": "A",
        "email": "a@b.com",
        "subject": "Hi",
        "message": "Hello",
        "phone": "555-0100"
    }))
    .unwrap();

    assert_eq!(msg, ContactMessage::new("A", "a@b.com", "Hi", "Hello"));
}

#[test]
fn test_contact_serializes_without_unset_timestamps() {
    let value = serde_json::to_value(ContactMessage::new("A", "a@b.com", "Hi", "Hello")).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 5);
    assert!(!object.contains_key("created_at"));
}

#[test]
fn test_collection_names() {
    assert_eq!(ContactMessage::COLLECTION, "contactmessage");
    assert_eq!(Testimonial::COLLECTION, "testimonial");
    assert_eq!(Experience::COLLECTION, "experience");
}

#[test]
fn test_field_names_follow_declaration_order() {
    assert_eq!(
        ContactMessage::field_names(),
        &["name", "email", "subject", "message", "source", "created_at", "updated_at"]
    );
    assert_eq!(Testimonial::field_names(), &["name", "role", "quote", "avatar_url"]);
    assert_eq!(
        Experience::field_names(),
        &["company", "title", "start", "end", "highlights", "logo_url"]
    );
}

#[test]
fn test_portfolio_schema_json() {
    let value = serde_json::to_value(Schema::portfolio()).unwrap();

    assert_eq!(
        value,
        json!({
            "contactmessage": ["name", "email", "subject", "message", "source", "created_at", "updated_at"],
            "testimonial": ["name", "role", "quote", "avatar_url"],
            "experience": ["company", "title", "start", "end", "highlights", "logo_url"]
        })
    );
}

#[test]
fn test_schema_lookup_by_collection() {
    let schema = Schema::portfolio();

    assert_eq!(schema.fields("testimonial").map(|f| f.len()), Some(4));
    assert_eq!(schema.fields("unknown"), None);
}

#[test]
fn test_experience_builder() {
    let exp = Experience::new("Acme", "Engineer", "2020", "Present")
        .with_highlights(["Shipped things", "Fixed things"])
        .with_logo_url("https://example.com/acme.png");

    assert_eq!(exp.highlights, vec!["Shipped things", "Fixed things"]);
    assert_eq!(exp.logo_url.as_deref(), Some("https://example.com/acme.png"));
}
