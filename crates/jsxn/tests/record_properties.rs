// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Registry + record behavior through the public API only.

use jsxn::serde_json::json;
use jsxn::{codec, Definition, Error, Map, RecordInput, ShapeInput, ShapeRegistry, Value};

#[test]
fn test_template_then_populate() {
    let mut registry = ShapeRegistry::new();
    let dynamic = registry
        .factory(
            "dynamic",
            Some(ShapeInput::from(r#"{"schema":100,"key":"value"}"#)),
        )
        .expect("register");

    let mut record = dynamic.template();
    assert_eq!(
        codec::decode(&record.to_json()).expect("decode"),
        json!({"schema": null, "key": null}).as_object().cloned().expect("object")
    );

    record.set("key", "populate").expect("set");
    assert_eq!(record.to_json(), r#"{"schema":null,"key":"populate"}"#);
}

#[test]
fn test_field_list_template() {
    let mut registry = ShapeRegistry::new();
    let attrs = registry
        .factory("attrs", Some(ShapeInput::from(["attr1", "attr2", "attr3"])))
        .expect("register");

    assert_eq!(attrs.shape().len(), 3);
    assert_eq!(
        attrs.template().to_json(),
        r#"{"attr1":null,"attr2":null,"attr3":null}"#
    );
}

#[test]
fn test_delete_and_reregister() {
    let mut registry = ShapeRegistry::new();
    let old = registry
        .factory("dynamic", Some(ShapeInput::from(["a", "b"])))
        .expect("register");

    registry.delete("dynamic").expect("delete");
    assert_eq!(
        registry.factory("dynamic", None).unwrap_err(),
        Error::UnknownSchema("dynamic".into())
    );

    let new = registry
        .factory("dynamic", Some(ShapeInput::from(r#"{"c": true}"#)))
        .expect("re-register");
    assert_eq!(new.template().to_json(), r#"{"c":null}"#);

    // The factory obtained before deletion still works on its own shape.
    assert_eq!(old.template().to_json(), r#"{"a":null,"b":null}"#);
}

#[test]
fn test_overwrite_does_not_touch_existing_records() {
    let mut registry = ShapeRegistry::new();
    let before = registry
        .factory("x", Some(ShapeInput::from(["a"])))
        .expect("first")
        .build(json!({"a": 1}))
        .expect("build");

    registry.register("x", ["b"]).expect("second");

    let after = registry
        .factory("x", None)
        .expect("lookup")
        .build(json!({"b": 2}))
        .expect("build");

    assert_eq!(before.to_json(), r#"{"a":1}"#);
    assert_eq!(after.to_json(), r#"{"b":2}"#);
    assert!(before.get("b").is_err());
}

#[test]
fn test_strictness_for_every_undeclared_name() {
    let mut registry = ShapeRegistry::new();
    let records = registry
        .factory("strict", Some(ShapeInput::from(["id", "name"])))
        .expect("register");
    let mut record = records.build(json!({"id": 1})).expect("build");

    for name in ["", "ID", "name ", "id.x", "other", "__slots__"] {
        let expected = Error::UndeclaredField {
            shape: "strict".into(),
            field: name.into(),
        };
        assert_eq!(record.get(name).unwrap_err(), expected);
        assert_eq!(record.set(name, 0).unwrap_err(), expected);
    }
    assert_eq!(record.to_json(), r#"{"id":1,"name":null}"#);
}

#[test]
fn test_partial_update_and_atomicity() {
    let mut registry = ShapeRegistry::new();
    let records = registry
        .factory(
            "user",
            Some(ShapeInput::from(r#"{"id": 0, "name": "", "email": "", "tags": []}"#)),
        )
        .expect("register");

    let mut record = records
        .build(json!({"id": 7, "name": "ada", "email": "ada@example.org"}))
        .expect("build");

    record.update(RecordInput::pairs([("name", "ada l.")])).expect("update");
    assert_eq!(record.get("id").expect("declared"), Some(&json!(7)));
    assert_eq!(record.get("email").expect("declared"), Some(&json!("ada@example.org")));
    assert_eq!(record.get("name").expect("declared"), Some(&json!("ada l.")));

    let snapshot = record.to_map();
    let err = record
        .update(json!({"tags": ["x"], "role": "admin"}))
        .unwrap_err();
    assert_eq!(
        err,
        Error::UnknownField {
            shape: "user".into(),
            field: "role".into()
        }
    );
    assert_eq!(record.to_map(), snapshot);
}

#[test]
fn test_round_trip_through_codec() {
    let mut registry = ShapeRegistry::new();
    let records = registry
        .factory(
            "mixed",
            Some(ShapeInput::from(["n", "f", "s", "b", "list", "obj", "nil", "unset"])),
        )
        .expect("register");

    let mut values = Map::new();
    values.insert("n".into(), json!(-12));
    values.insert("f".into(), json!(0.25));
    values.insert("s".into(), json!("text with \"quotes\""));
    values.insert("b".into(), json!(false));
    values.insert("list".into(), json!([1, "two", null]));
    values.insert("obj".into(), json!({"inner": {"deep": 1}}));
    values.insert("nil".into(), Value::Null);

    let record = records.build(values).expect("build");
    assert_eq!(
        codec::decode(&record.to_json()).expect("decode"),
        record.to_map()
    );
    assert!(!record.is_set("unset").expect("declared"));
    assert!(record.is_set("nil").expect("declared"));
}

#[test]
fn test_seeded_first_instance() {
    let mut registry = ShapeRegistry::new();
    let records = registry
        .factory(
            "dynamic",
            Some(ShapeInput::from(r#"{"schema":100,"key":"value"}"#)),
        )
        .expect("register");

    assert_eq!(records.seeded().to_json(), r#"{"schema":100,"key":"value"}"#);
    assert_eq!(records.template().to_json(), r#"{"schema":null,"key":null}"#);
}

#[test]
fn test_hand_written_definition_with_behavior() {
    let mut registry = ShapeRegistry::new();
    let def = Definition::new("Greeting")
        .typed_field("who", "str")
        .behavior("greet", |record, _args| {
            let who = record.field("who")?.as_str().unwrap_or("nobody").to_string();
            Ok(json!(format!("hello, {}", who)))
        });

    let records = registry
        .factory("greeting", Some(def.into()))
        .expect("register");
    let mut record = records.build(json!({"who": "world"})).expect("build");

    assert_eq!(record.invoke("greet", &[]).expect("greet"), json!("hello, world"));
    assert_eq!(records.shape().type_tag("who"), Some("str"));
}
