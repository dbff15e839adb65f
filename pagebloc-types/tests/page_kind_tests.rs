use pagebloc_types::{Error, PageKind};
use std::str::FromStr;

#[test]
fn all_lists_every_kind_once() {
    assert_eq!(PageKind::ALL.len(), 4);
    let mut seen = std::collections::HashSet::new();
    for kind in PageKind::ALL {
        assert!(seen.insert(kind));
    }
}

#[test]
fn as_str_round_trips_through_from_str() {
    for kind in PageKind::ALL {
        assert_eq!(PageKind::from_str(kind.as_str()).unwrap(), kind);
    }
}

#[test]
fn display_matches_as_str() {
    for kind in PageKind::ALL {
        assert_eq!(kind.to_string(), kind.as_str());
    }
}

#[test]
fn from_str_rejects_unknown_kind() {
    let err = PageKind::from_str("blog").unwrap_err();
    assert!(matches!(err, Error::UnknownPageKind(k) if k == "blog"));
}

#[test]
fn from_str_is_case_sensitive() {
    assert!(PageKind::from_str("Home").is_err());
}

#[test]
fn serde_uses_snake_case() {
    assert_eq!(serde_json::to_string(&PageKind::Home).unwrap(), "\"home\"");
    let parsed: PageKind = serde_json::from_str("\"catalog\"").unwrap();
    assert_eq!(parsed, PageKind::Catalog);
}
