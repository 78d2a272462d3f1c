//! Role and permission checks over the session user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The permission guard and permission-aware components share this
//! evaluator so authorization truth lives in one place. Permission checks
//! resolve to `false` in the server environment — no user is considered
//! resolvable during a server render pass.

#[cfg(test)]
#[path = "permissions_test.rs"]
mod permissions_test;

use crate::env::Environment;
use crate::net::types::AuthUser;

/// Role that sees every branch without restriction.
pub const ROLE_SUPER_ADMIN: &str = "super_admin";
/// Role with administrative access, scoped by allowed branches.
pub const ROLE_ADMIN: &str = "admin";

/// Evaluates role/permission questions for an optional session user.
#[derive(Clone, Copy, Debug)]
pub struct PermissionEvaluator<'a> {
    env: Environment,
    user: Option<&'a AuthUser>,
}

impl<'a> PermissionEvaluator<'a> {
    #[must_use]
    pub fn new(env: Environment, user: Option<&'a AuthUser>) -> Self {
        Self { env, user }
    }

    /// Whether the user holds the given role.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles().iter().any(|r| r == role)
    }

    /// Whether the user holds at least one of the given roles.
    ///
    /// An empty list evaluates to `false`.
    #[must_use]
    pub fn has_any_role(&self, roles: &[&str]) -> bool {
        !roles.is_empty() && roles.iter().any(|role| self.has_role(role))
    }

    /// Whether the user holds every one of the given roles.
    ///
    /// An empty list evaluates to `false`.
    #[must_use]
    pub fn has_all_roles(&self, roles: &[&str]) -> bool {
        !roles.is_empty() && roles.iter().all(|role| self.has_role(role))
    }

    /// Whether the user holds the given permission. Always `false` on the
    /// server.
    #[must_use]
    pub fn has_permission(&self, permission: &str) -> bool {
        self.env.is_client() && self.permissions().iter().any(|p| p == permission)
    }

    /// Whether the user holds at least one of the given permissions.
    /// Always `false` on the server; an empty list evaluates to `false`.
    #[must_use]
    pub fn has_any_permission<S: AsRef<str>>(&self, permissions: &[S]) -> bool {
        self.env.is_client()
            && !permissions.is_empty()
            && permissions.iter().any(|p| self.has_permission(p.as_ref()))
    }

    /// Whether the user holds every one of the given permissions.
    /// Always `false` on the server; an empty list evaluates to `false`.
    #[must_use]
    pub fn has_all_permissions<S: AsRef<str>>(&self, permissions: &[S]) -> bool {
        self.env.is_client()
            && !permissions.is_empty()
            && permissions.iter().all(|p| self.has_permission(p.as_ref()))
    }

    /// Whether the user is a super administrator.
    #[must_use]
    pub fn is_super_admin(&self) -> bool {
        self.has_role(ROLE_SUPER_ADMIN)
    }

    /// Whether the user holds either administrative role; administrators
    /// bypass fine-grained permission checks entirely.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN) || self.has_role(ROLE_SUPER_ADMIN)
    }

    /// All role names on the user, or empty when signed out.
    #[must_use]
    pub fn roles(&self) -> &[String] {
        self.user.map_or(&[], |u| u.roles.as_slice())
    }

    /// All permission names on the user, or empty when signed out.
    #[must_use]
    pub fn permissions(&self) -> &[String] {
        self.user.map_or(&[], |u| u.permissions.as_slice())
    }
}
