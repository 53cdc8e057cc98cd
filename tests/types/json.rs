use erreur::{Erreur, JsonValue};
use serde_json::json;

#[test]
fn erreur_serializes_through_its_json_projection() {
    let err = Erreur::create("boom").with_name("Boom");
    let value = serde_json::to_value(&err).unwrap();

    assert_eq!(value, json!({ "message": "boom", "name": "Boom" }));
}

#[test]
fn custom_json_is_serialized_as_is() {
    let err = Erreur::create("boom").with_json(json!({ "code": 500, "retry": false }));

    let value = serde_json::to_value(&err).unwrap();
    assert_eq!(value, json!({ "code": 500, "retry": false }));
    assert_eq!(serde_json::to_string(&err).unwrap(), r#"{"code":500,"retry":false}"#);
}

#[test]
fn parsed_documents_can_be_attached() {
    let value: JsonValue = serde_json::from_str(r#"{"name":"Boom","tags":["a",null]}"#).unwrap();
    let err = Erreur::new().with_json(value.clone());

    assert_eq!(err.to_json(), value);
    assert_eq!(err.to_json()["tags"], json!(["a", null]));
}
