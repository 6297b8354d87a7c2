use super::*;

#[test]
fn heading_for_known_routes() {
    assert_eq!(heading_for("/dashboard"), Some("Dashboard"));
    assert_eq!(heading_for("/purchase-order"), Some("Purchase Order"));
    assert_eq!(heading_for("/settings/accounting-codes"), Some("Accounting-Codes"));
}

#[test]
fn heading_for_ignores_trailing_slash() {
    assert_eq!(heading_for("/projects/"), Some("Projects"));
    assert_eq!(heading_for("/settings/segments//"), Some("Segments"));
}

#[test]
fn heading_for_is_exact_match_only() {
    assert_eq!(heading_for("/projects/42"), None);
    assert_eq!(heading_for("/settings/unknown"), None);
    assert_eq!(heading_for("dashboard"), None);
    assert_eq!(heading_for("/"), None);
    assert_eq!(heading_for(""), None);
}

#[test]
fn heading_routes_are_unique_absolute_paths() {
    for (i, (route, heading)) in HEADINGS.iter().enumerate() {
        assert!(route.starts_with('/'), "{route}");
        assert!(!heading.is_empty());
        assert!(HEADINGS[i + 1..].iter().all(|(other, _)| other != route), "duplicate {route}");
    }
}
