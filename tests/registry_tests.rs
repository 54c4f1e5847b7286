//! Integration tests for `create_enum` and `Registry`.

use std::sync::Once;

use string_enum::prelude::*;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

#[derive(Debug, Clone, Copy, Enumeration)]
#[allow(clippy::upper_case_acronyms)]
enum Color {
    RED,
    GREEN,
}

#[derive(Debug, Clone, Copy, Enumeration)]
#[enumeration(rename_all = "lowercase")]
enum Role {
    Admin,
    #[enumeration(name = "Member")]
    User,
    #[enumeration(value = "admin")]
    Root,
}

#[derive(Debug, Clone, Copy, Enumeration)]
enum Nothing {}

const PROBES: &[&str] = &["RED", "GREEN", "BLUE", "", "red", "admin", "user", "root", "Member"];

#[test]
fn color_registry_scenario() {
    init_tracing();
    let colors = create_enum::<Color>();

    assert_eq!(colors["RED"], Color::RED);
    assert!(std::ptr::eq(&colors["RED"], Color::value_of("RED").unwrap()));
    assert_eq!(colors.value_of("RED"), Some(&Color::RED));
    assert_eq!(colors.value_of("BLUE"), None);
}

#[test]
fn keys_are_declared_member_names() {
    init_tracing();
    let roles = create_enum::<Role>();

    assert_eq!(roles.keys().collect::<Vec<_>>(), vec!["Admin", "Member", "Root"]);
    assert!(roles.contains_key("Member"));
    assert!(!roles.contains_key("User"));
    assert_eq!(roles.get("Member"), Some(&Role::User));
    assert_eq!(roles.len(), 3);
    assert!(!roles.is_empty());
}

#[test]
fn values_match_the_enumeration_type() {
    init_tracing();
    let colors = create_enum::<Color>();
    let roles = create_enum::<Role>();

    assert_eq!(colors.values(), Color::values());
    assert_eq!(roles.values(), Role::values());
}

#[test]
fn value_of_matches_the_enumeration_type() {
    init_tracing();
    let colors = create_enum::<Color>();
    let roles = create_enum::<Role>();

    for &probe in PROBES {
        assert_eq!(colors.value_of(probe), Color::value_of(probe), "probe {probe:?}");
        assert_eq!(roles.value_of(probe), Role::value_of(probe), "probe {probe:?}");
        assert_eq!(roles.try_value_of(probe).ok(), Role::value_of(probe), "probe {probe:?}");
    }
}

#[test]
fn duplicate_value_lookup_returns_first_member() {
    init_tracing();
    let roles = create_enum::<Role>();

    let found = roles.value_of("admin").unwrap();
    assert_eq!(found.member_name(), "Admin");
    // The later member keeps its own key.
    assert_eq!(roles["Root"].member_name(), "Root");
}

#[test]
fn iteration_follows_declaration_order() {
    init_tracing();
    let colors = create_enum::<Color>();

    let pairs: Vec<(&str, &str)> = colors.iter().map(|(name, member)| (name, member.as_str())).collect();
    assert_eq!(pairs, vec![("RED", "RED"), ("GREEN", "GREEN")]);

    let mut names = Vec::new();
    for (name, _) in &colors {
        names.push(name);
    }
    assert_eq!(names, vec!["RED", "GREEN"]);
}

#[test]
fn empty_enumeration_builds_empty_registry() {
    init_tracing();
    let nothing = create_enum::<Nothing>();

    assert!(nothing.is_empty());
    assert_eq!(nothing.keys().count(), 0);
    assert!(nothing.values().is_empty());
    assert_eq!(nothing.value_of("anything"), None);
    assert!(nothing.try_value_of("anything").is_err());
}

#[test]
fn registries_are_independent_but_equal() {
    init_tracing();
    let first = create_enum::<Color>();
    let second = first.clone();
    let third = create_enum::<Color>();

    assert_eq!(first.iter().collect::<Vec<_>>(), second.iter().collect::<Vec<_>>());
    assert_eq!(first.iter().collect::<Vec<_>>(), third.iter().collect::<Vec<_>>());
}

#[test]
fn source_table_is_untouched() {
    init_tracing();
    let before = Role::values();
    let _roles = create_enum::<Role>();
    assert_eq!(Role::values(), before);
    assert_eq!(Role::User.member_name(), "Member");
}

#[test]
fn debug_lists_names_and_values() {
    init_tracing();
    let roles = create_enum::<Role>();
    insta::assert_snapshot!(
        format!("{roles:?}"),
        @r#"Registry<Role> {"Admin": "admin", "Member": "user", "Root": "admin"}"#
    );
}
