use std::collections::HashMap;

use string_enum_core::lang::errors;
use string_enum_core::lang::rename;
use string_enum_core::lang::reserved;

#[test]
fn error_kind_spellings_unique_and_resolvable() {
    let mut seen = HashMap::new();

    for info in errors::ERROR_KINDS {
        assert_eq!(
            errors::from_str(info.canonical),
            Some(info.id),
            "error kind canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            errors::as_str(info.id),
            info.canonical,
            "error kind as_str mismatch for {:?}",
            info.id
        );
        assert!(!errors::description(info.id).is_empty());

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate error kind spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn reserved_spellings_unique_and_resolvable() {
    let mut seen = HashMap::new();

    for info in reserved::RESERVED_NAMES {
        assert_eq!(reserved::as_str(info.id), info.canonical);
        for &spelling in std::iter::once(&info.canonical).chain(info.aliases) {
            assert_eq!(
                reserved::from_str(spelling),
                Some(info.id),
                "reserved spelling not resolvable: {}",
                spelling
            );
            assert!(reserved::is_reserved(spelling));
            if let Some(prev) = seen.insert(spelling, info.id) {
                panic!("duplicate reserved spelling {:?}: {:?} and {:?}", spelling, prev, info.id);
            }
        }
    }

    assert!(!reserved::is_reserved("Values"));
    assert!(!reserved::is_reserved("RED"));
}

#[test]
fn rename_spellings_unique() {
    let mut seen = HashMap::new();

    for info in rename::RENAME_RULES {
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate rename rule spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
    assert_eq!(rename::from_str("verbatim"), Some(rename::RenameRule::default()));
}
