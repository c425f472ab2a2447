// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! `#[derive(Definable)]` end to end: definition, registration, behaviors.

#![allow(dead_code)]

use jsxn::serde_json::json;
use jsxn::{Definable, Error, Record, ShapeInput, ShapeRegistry, Value};

#[derive(Definable)]
#[jsxn(behavior(hello))]
struct Sleep {
    one: String,
    two: i64,
}

impl Sleep {
    fn hello(record: &mut Record, _args: &[Value]) -> jsxn::Result<Value> {
        let one = record.field("one")?.clone();
        let two = record.field("two")?.clone();
        Ok(json!([one, two]))
    }
}

#[derive(Definable)]
#[jsxn(name = "radios", behavior(save))]
struct Radios {
    radio: u32,
    rig: String,
    input: Option<String>,
    output: Option<String>,
}

impl Radios {
    fn save(record: &mut Record, _args: &[Value]) -> jsxn::Result<Value> {
        Ok(Value::String(format!("save: {}", record)))
    }
}

#[derive(Definable)]
struct Renamed {
    #[jsxn(rename = "type")]
    kind: String,
    r#ref: u64,
    #[jsxn(skip)]
    cache: Vec<u8>,
    tags: Vec<String>,
}

#[derive(Definable)]
struct Marker;

#[derive(Definable)]
#[jsxn(allow_empty)]
struct Nothing {}

#[test]
fn test_derived_definition_fields_and_tags() {
    let def = <Sleep as Definable>::definition();
    assert_eq!(def.name(), "Sleep");

    let read = def.read_fields();
    assert_eq!(read.names, ["one", "two"]);
    assert_eq!(
        read.type_tags,
        Some(vec![Some("String".to_string()), Some("i64".to_string())])
    );
    assert_eq!(read.behaviors.keys().collect::<Vec<_>>(), ["hello"]);
}

#[test]
fn test_register_definable_under_own_name() {
    let mut registry = ShapeRegistry::new();
    let sleep = registry.register_definable::<Sleep>().expect("register");

    assert!(registry.has("Sleep"));
    assert_eq!(sleep.name(), "Sleep");

    let mut record = sleep
        .build([("one", json!("b")), ("two", json!("c"))])
        .expect("build");
    assert_eq!(record.to_json(), r#"{"one":"b","two":"c"}"#);

    // Declared types are informational only.
    record.set("two", 100).expect("set");
    assert_eq!(record.to_map()["two"], json!(100));
    assert_eq!(
        record.invoke("hello", &[]).expect("hello"),
        json!(["b", 100])
    );
}

#[test]
fn test_explicit_name_and_behavior() {
    let mut registry = ShapeRegistry::new();
    let radios = registry.register_definable::<Radios>().expect("register");
    assert_eq!(radios.name(), "radios");
    assert_eq!(
        radios.shape().type_tag("input"),
        Some("Option<String>")
    );

    let mut record = radios
        .build([("radio", json!(1)), ("rig", json!("a"))])
        .expect("build");
    assert_eq!(
        record.invoke("save", &[]).expect("save"),
        json!(r#"save: {"radio":1,"rig":"a","input":null,"output":null}"#)
    );

    let mut record = radios.build(json!({"radio": 2, "rig": "b"})).expect("build");
    assert_eq!(record.get("rig").expect("declared"), Some(&json!("b")));
    assert!(matches!(
        record.invoke("hello", &[]),
        Err(Error::UnknownBehavior { .. })
    ));
}

#[test]
fn test_rename_skip_and_raw_identifiers() {
    let read = <Renamed as Definable>::definition().read_fields();
    assert_eq!(read.names, ["type", "ref", "tags"]);
    assert_eq!(
        read.type_tags,
        Some(vec![
            Some("String".to_string()),
            Some("u64".to_string()),
            Some("Vec<String>".to_string()),
        ])
    );
}

#[test]
fn test_empty_definitions() {
    let mut registry = ShapeRegistry::new();

    let err = registry.register_definable::<Marker>().unwrap_err();
    assert_eq!(err, Error::EmptyDefinition("Marker".into()));
    assert!(!registry.has("Marker"));

    let nothing = registry.register_definable::<Nothing>().expect("opted in");
    assert_eq!(nothing.template().to_json(), "{}");
}

#[test]
fn test_definable_through_resolve() {
    let mut registry = ShapeRegistry::new();
    let shape = registry
        .resolve("sleepers", Some(ShapeInput::of::<Sleep>()))
        .expect("resolve");
    assert_eq!(shape.name(), "sleepers");
    assert_eq!(shape.behavior_names().collect::<Vec<_>>(), ["hello"]);
}
