use super::*;

#[test]
fn public_and_guest_only_sets_agree() {
    for path in GUEST_ONLY_PAGES {
        assert!(is_public(path), "{path} should be public");
    }
    assert!(is_public("/unauthorized"));
    assert!(!is_guest_only("/unauthorized"));
    assert!(!is_public("/"));
    assert!(!is_public("/credit-applications"));
}

#[test]
fn parse_single_name() {
    let required = RequiredPermissions::parse("users.view");
    assert_eq!(required.names(), ["users.view"]);
}

#[test]
fn parse_pipe_delimited_names() {
    let required = RequiredPermissions::parse("users.view| users.edit ");
    assert_eq!(required.names(), ["users.view", "users.edit"]);
}

#[test]
fn parse_deduplicates_preserving_order() {
    let required = RequiredPermissions::parse("a.view|b.view|a.view");
    assert_eq!(required.names(), ["a.view", "b.view"]);
}

#[test]
fn parse_empty_declaration_is_empty() {
    assert!(RequiredPermissions::parse("").is_empty());
    assert!(RequiredPermissions::parse(" | ").is_empty());
}

#[test]
fn from_list_normalizes_like_parse() {
    let required = RequiredPermissions::from_list(&["users.view", "users.edit", "users.view"]);
    assert_eq!(required.names(), ["users.view", "users.edit"]);
}

#[test]
fn known_routes_declare_permissions() {
    let users = route_permissions("/users").expect("users route");
    assert_eq!(users.names(), ["users.view"]);

    let new_application = route_permissions("/credit-applications/new").expect("new application");
    assert_eq!(
        new_application.names(),
        ["credit-applications.create", "credit-applications.edit"]
    );

    assert!(route_permissions("/").is_none());
    assert!(route_permissions("/login").is_none());
}
