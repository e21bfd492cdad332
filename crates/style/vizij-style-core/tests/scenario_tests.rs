mod common;

use std::collections::HashMap;

use common::RecordingElement;
use serde::Deserialize;
use vizij_style::{
    Config, Dispatcher, ElementData, ResolvedWrite, StaticSupport, StyleRegistry, StyleValue,
    WriteRequest,
};
use vizij_test_fixtures::{engines, scenarios};

#[derive(Debug, Deserialize)]
struct Scenario {
    engine: String,
    supported: Vec<String>,
    svg: bool,
    #[serde(default)]
    current: HashMap<String, String>,
    steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
struct Step {
    property: String,
    value: StyleValue,
    #[serde(default)]
    root_value: Option<String>,
    expect: ResolvedWrite,
}

fn run_scenario(name: &str) {
    let scenario: Scenario = scenarios::load(name).unwrap();
    let config: Config = engines::load(&scenario.engine).unwrap();
    let registry =
        StyleRegistry::standard(&config, StaticSupport::new(scenario.supported.clone())).unwrap();
    let dispatcher = Dispatcher::new(&registry, &config);

    let mut element = RecordingElement::new();
    element.current = scenario.current.clone();
    let mut data = if scenario.svg {
        ElementData::svg()
    } else {
        ElementData::html()
    };

    for step in &scenario.steps {
        let mut request = WriteRequest::new(&step.property, step.value.clone());
        if let Some(root) = &step.root_value {
            request = request.with_root_value(root);
        }
        let resolved = dispatcher
            .apply(&mut element, &mut data, request)
            .unwrap_or_else(|e| panic!("{name}/{}: {e}", step.property));
        assert_eq!(resolved, step.expect, "{name}/{}", step.property);
    }
}

#[test]
fn html_basics() {
    run_scenario("html-basics");
}

#[test]
fn svg_shapes() {
    run_scenario("svg-shapes");
}

#[test]
fn every_engine_fixture_builds_a_registry() {
    for key in engines::keys() {
        let config = Config::from_json(&engines::json(&key).unwrap()).unwrap();
        assert!(
            StyleRegistry::standard(&config, StaticSupport::default()).is_ok(),
            "{key}"
        );
    }
}
