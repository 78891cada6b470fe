use super::*;

#[test]
fn test_fielded_key_never_equals_bare_key() {
    let bare = ChoiceKey::named("identifier");
    let fielded = ChoiceKey::fielded("name", "identifier");
    assert_ne!(bare, fielded);
    assert_eq!(bare, ChoiceKey::named("identifier"));
    assert_eq!(fielded, ChoiceKey::fielded("name", "identifier"));
}

#[test]
fn test_keys_with_different_fields_differ() {
    assert_ne!(
        ChoiceKey::fielded("name", "identifier"),
        ChoiceKey::fielded("body", "identifier")
    );
}

#[test]
fn test_descriptor_key_carries_field() {
    let descriptor = Descriptor::fielded("name", "identifier");
    assert_eq!(descriptor.key(), ChoiceKey::fielded("name", "identifier"));

    let descriptor = Descriptor::named("string");
    assert_eq!(descriptor.key(), ChoiceKey::named("string"));
}

#[test]
fn test_repeated_descriptor_keeps_same_key() {
    let plain = Descriptor::named("attribute");
    let repeated = Descriptor::named("attribute").repeated();
    assert!(repeated.repeat);
    assert_eq!(plain.key(), repeated.key());
}

#[test]
fn test_display() {
    assert_eq!(Descriptor::named("string").to_string(), "string");
    assert_eq!(
        Descriptor::fielded("name", "identifier").to_string(),
        "name:identifier"
    );
    assert_eq!(
        Descriptor::named("attribute").repeated().to_string(),
        "attribute+"
    );
    assert_eq!(ChoiceKey::fielded("body", "block").to_string(), "body:block");
}
