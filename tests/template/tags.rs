//! Integration tests for tags
//!
//! Tests the built-in tags and custom tag functions over parsed templates.

use quasi_template::{
    Cooked, ErrorKind, HtmlEscape, Raw, Result, Scope, Tag, Template, TemplateConfig,
    TemplateStrings, Value, render,
};

fn scope() -> Scope {
    Scope::new().bind("user", "<admin>").bind("n", 3)
}

#[test]
fn cooked_is_the_default() {
    let template = Template::parse(r"${user}\t${n}").unwrap();
    let config = TemplateConfig::default();
    assert_eq!(
        template.render(&scope(), &config).unwrap(),
        template.render_with(&Cooked, &scope(), &config).unwrap()
    );
}

#[test]
fn raw_tag_like_string_raw() {
    let template = Template::parse(r"C:\new ${user}\n").unwrap();
    let out = template
        .render_with(&Raw, &scope(), &TemplateConfig::default())
        .unwrap();
    assert_eq!(out, r"C:\new <admin>\n");
}

#[test]
fn raw_tag_accepts_invalid_escapes() {
    let template = Template::parse(r"\unicode \xyz ${n}").unwrap();
    let config = TemplateConfig::default();
    let err = template.render(&scope(), &config).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidEscape { fragment: 0 }));
    assert_eq!(
        template.render_with(&Raw, &scope(), &config).unwrap(),
        r"\unicode \xyz 3"
    );
}

#[test]
fn html_escape_tag() {
    let template = Template::parse("<span>${user} x${n}</span>").unwrap();
    let out = template
        .render_with(&HtmlEscape, &scope(), &TemplateConfig::default())
        .unwrap();
    assert_eq!(out, "<span>&lt;admin&gt; x3</span>");
}

/// Tag that shows the raw and cooked views side by side.
struct Inspect;

impl Tag for Inspect {
    fn apply(&self, strings: &TemplateStrings, substitutions: &[Value]) -> Result<String> {
        let raw: Vec<&str> = strings.raw().iter().map(|s| &**s).collect();
        Ok(format!(
            "raw={raw:?} cooked={:?} subs={substitutions:?}",
            strings.cooked()
        ))
    }
}

#[test]
fn custom_tag_sees_both_views() {
    let template = Template::parse(r"a\n${n}").unwrap();
    let out = template
        .render_with(&Inspect, &scope(), &TemplateConfig::default())
        .unwrap();
    assert_eq!(out, r#"raw=["a\\n", ""] cooked=[Some("a\n"), Some("")] subs=[3]"#);
}

#[test]
fn closure_tag_with_prefix() {
    let bullet = |strings: &TemplateStrings, subs: &[Value]| -> Result<String> {
        render(&strings.cooked_fragments()?, subs).map(|s| format!("* {s}"))
    };
    let template = Template::parse("${n} items").unwrap();
    let out = template
        .render_with(&bullet, &scope(), &TemplateConfig::default())
        .unwrap();
    assert_eq!(out, "* 3 items");
}

#[test]
fn boxed_tags() {
    let tags: Vec<Box<dyn Tag>> = vec![Box::new(Cooked), Box::new(Raw), Box::new(HtmlEscape)];
    let template = Template::parse(r"${user}\!").unwrap();
    let config = TemplateConfig::default();
    let outs: Vec<String> = tags
        .iter()
        .map(|tag| template.render_with(tag.as_ref(), &scope(), &config).unwrap())
        .collect();
    assert_eq!(outs, vec!["<admin>!", r"<admin>\!", "&lt;admin&gt;!"]);
}
