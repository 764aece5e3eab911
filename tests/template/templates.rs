//! Integration tests for parsed templates
//!
//! Tests parsing, scope resolution, and configuration together.

use quasi_template::{ErrorKind, Scope, Template, TemplateConfig, UnboundPolicy, Value};

#[test]
fn parse_and_render() {
    let template = Template::parse("Dear ${name},\nyou owe $${amount}.").unwrap();
    let scope = Scope::new().bind("name", "Ada").bind("amount", 12.5);
    let out = template.render(&scope, &TemplateConfig::default()).unwrap();
    assert_eq!(out, "Dear Ada,\nyou owe $12.5.");
}

#[test]
fn parsed_shape_invariant() {
    let template = Template::parse("${a} and ${b} and ${c}").unwrap();
    assert_eq!(template.strings().len(), 4);
    assert_eq!(template.placeholders().len(), 3);
}

#[test]
fn shared_base_scope() {
    let template = Template::parse("${greeting}, ${name}!").unwrap();
    let base = Scope::new().bind("greeting", "Hello");
    let config = TemplateConfig::default();

    let outputs: Vec<String> = ["Ada", "Grace"]
        .into_iter()
        .map(|name| template.render(&base.bind("name", name), &config).unwrap())
        .collect();

    assert_eq!(outputs, vec!["Hello, Ada!", "Hello, Grace!"]);
    assert!(!base.contains("name"));
}

#[test]
fn substitutions_follow_source_order() {
    let template = Template::parse("${b}${a}${b}").unwrap();
    let scope = Scope::new().bind("a", 1).bind("b", 2);
    let subs = template
        .substitutions(&scope, &TemplateConfig::default())
        .unwrap();
    assert_eq!(subs, vec![Value::Int(2), Value::Int(1), Value::Int(2)]);
}

#[test]
fn unbound_policy_switch() {
    let template = Template::parse("x=${x}").unwrap();
    let strict = TemplateConfig::default();
    let lenient = strict.clone().with_unbound(UnboundPolicy::Undefined);

    let err = template.render(&Scope::new(), &strict).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnboundName(ref n) if n == "x"));
    assert_eq!(template.render(&Scope::new(), &lenient).unwrap(), "x=undefined");
}

#[test]
fn null_binding_is_not_unbound() {
    let template = Template::parse("${v}").unwrap();
    let scope = Scope::new().bind("v", Value::Null);
    assert_eq!(template.render(&scope, &TemplateConfig::strict()).unwrap(), "null");
}

#[test]
fn parse_error_positions() {
    let err = Template::parse("ok\nok ${bad name}").unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::ParseError {
            line: 2,
            column: 4,
            ..
        }
    ));
}

#[test]
fn placeholder_limit_from_config() {
    let config = TemplateConfig::lenient().with_max_placeholders(0);
    assert!(Template::parse_with("no placeholders", &config).is_ok());
    let err = Template::parse_with("${one}", &config).unwrap_err();
    assert_eq!(err.kind, ErrorKind::LimitExceeded { limit: 0, actual: 1 });
}

#[test]
fn multiline_with_crlf() {
    let template = Template::parse("a\r\n${x}\r\nb").unwrap();
    let out = template
        .render(&Scope::new().bind("x", "-"), &TemplateConfig::default())
        .unwrap();
    assert_eq!(out, "a\n-\nb");
}

#[test]
fn public_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Template>();
    assert_send_sync::<Scope>();
    assert_send_sync::<Value>();
    assert_send_sync::<quasi_template::Error>();
    assert_send_sync::<quasi_template::TemplateStrings>();
    assert_send_sync::<TemplateConfig>();
}
