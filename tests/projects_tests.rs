// Host-side tests for the project list.

use lab_carousel::core::*;

#[test]
fn builtin_list_has_six_distinct_projects() {
    let p = default_projects();
    assert_eq!(p.len(), 6);
    assert_eq!(p[0].title, "Project Alpha");
    assert_eq!(p[5].href, "#zeta");
    let mut hrefs: Vec<_> = p.iter().map(|x| x.href.as_str()).collect();
    hrefs.dedup();
    assert_eq!(hrefs.len(), 6);
}

#[test]
fn parses_camel_case_json() {
    let json = r#"[
        {"title": "Orbit", "alt": "Orbit demo", "thumbSrc": "/img/orbit.png", "href": "/orbit"},
        {"title": "Tides", "thumbSrc": "/img/tides.png", "href": "/tides"}
    ]"#;
    let p = parse_projects(json).expect("valid json");
    assert_eq!(p.len(), 2);
    assert_eq!(p[0].alt_text(), "Orbit demo");
    assert_eq!(p[1].alt, None);
    assert_eq!(p[1].alt_text(), "Tides");
}

#[test]
fn blank_alt_falls_back_to_title() {
    let p = Project {
        title: "Echo".into(),
        alt: Some("  ".into()),
        thumb_src: "/e.png".into(),
        href: "#e".into(),
    };
    assert_eq!(p.alt_text(), "Echo");
}

#[test]
fn bad_or_empty_json_uses_builtin_list() {
    assert_eq!(projects_or_default(None), default_projects());
    assert_eq!(projects_or_default(Some("not json")), default_projects());
    assert_eq!(projects_or_default(Some("[]")), default_projects());
    assert_eq!(
        projects_or_default(Some(r#"[{"title": "missing fields"}]"#)),
        default_projects()
    );
}

#[test]
fn valid_json_replaces_builtin_list() {
    let json = r#"[{"title": "Solo", "thumbSrc": "/s.png", "href": "/s"}]"#;
    let p = projects_or_default(Some(json));
    assert_eq!(p.len(), 1);
    assert_eq!(p[0].title, "Solo");
}
