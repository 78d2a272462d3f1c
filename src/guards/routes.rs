//! Route metadata: page visibility sets and required permissions.
//!
//! DESIGN
//! ======
//! Pages declare their permission requirement as a single name, a
//! pipe-delimited string, or a list. All three shapes normalize here into
//! [`RequiredPermissions`] — an ordered, deduplicated set — so the guards
//! never branch on the raw metadata shape.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Pages reachable without a session.
pub const PUBLIC_PAGES: [&str; 5] = [
    "/login",
    "/forgot-password",
    "/reset-password",
    "/register",
    "/unauthorized",
];

/// Pages only meaningful to signed-out visitors.
pub const GUEST_ONLY_PAGES: [&str; 4] = [
    "/login",
    "/forgot-password",
    "/reset-password",
    "/register",
];

#[must_use]
pub fn is_public(path: &str) -> bool {
    PUBLIC_PAGES.contains(&path)
}

#[must_use]
pub fn is_guest_only(path: &str) -> bool {
    GUEST_ONLY_PAGES.contains(&path)
}

/// Canonical required-permission set for a route: ordered, deduplicated.
/// A visitor holding at least one named permission may enter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequiredPermissions(Vec<String>);

impl RequiredPermissions {
    /// Parse a declaration: one permission name, or several separated by
    /// `|`. Whitespace around names is ignored.
    #[must_use]
    pub fn parse(declaration: &str) -> Self {
        Self::from_names(declaration.split('|'))
    }

    /// Normalize an explicit list of names.
    #[must_use]
    pub fn from_list<S: AsRef<str>>(names: &[S]) -> Self {
        Self::from_names(names.iter().map(AsRef::as_ref))
    }

    fn from_names<'a>(names: impl Iterator<Item = &'a str>) -> Self {
        let mut set = Vec::new();
        for name in names {
            let name = name.trim();
            if !name.is_empty() && !set.iter().any(|existing| existing == name) {
                set.push(name.to_owned());
            }
        }
        Self(set)
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Permissions a route requires, if it declares any.
#[must_use]
pub fn route_permissions(path: &str) -> Option<RequiredPermissions> {
    match path {
        "/users" => Some(RequiredPermissions::parse("users.view")),
        "/credit-applications" => Some(RequiredPermissions::parse("credit-applications.view")),
        "/credit-applications/new" => Some(RequiredPermissions::parse(
            "credit-applications.create|credit-applications.edit",
        )),
        _ => None,
    }
}
