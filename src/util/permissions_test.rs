use super::*;

fn user_with(roles: &[&str], permissions: &[&str]) -> AuthUser {
    AuthUser {
        id: 1,
        name: "Prueba".to_owned(),
        email: "prueba@example.com".to_owned(),
        email_verified_at: None,
        created_at: None,
        updated_at: None,
        branch_id: None,
        branch: None,
        roles: roles.iter().map(|r| (*r).to_owned()).collect(),
        permissions: permissions.iter().map(|p| (*p).to_owned()).collect(),
    }
}

#[test]
fn admin_role_truth_table() {
    let user = user_with(&["admin"], &[]);
    let eval = PermissionEvaluator::new(Environment::Client, Some(&user));
    assert!(eval.has_role("admin"));
    assert!(!eval.has_role("super_admin"));
    assert!(eval.is_admin());
    assert!(!eval.is_super_admin());
}

#[test]
fn super_admin_implies_admin() {
    let user = user_with(&["super_admin"], &[]);
    let eval = PermissionEvaluator::new(Environment::Client, Some(&user));
    assert!(eval.is_super_admin());
    assert!(eval.is_admin());
}

#[test]
fn no_user_resolves_everything_false() {
    let eval = PermissionEvaluator::new(Environment::Client, None);
    assert!(!eval.has_role("admin"));
    assert!(!eval.has_permission("users.view"));
    assert!(!eval.is_admin());
    assert!(eval.roles().is_empty());
}

#[test]
fn any_and_all_role_combinations() {
    let user = user_with(&["analyst", "teller"], &[]);
    let eval = PermissionEvaluator::new(Environment::Client, Some(&user));
    assert!(eval.has_any_role(&["manager", "teller"]));
    assert!(!eval.has_any_role(&["manager"]));
    assert!(eval.has_all_roles(&["analyst", "teller"]));
    assert!(!eval.has_all_roles(&["analyst", "manager"]));
    assert!(!eval.has_any_role(&[]));
    assert!(!eval.has_all_roles(&[]));
}

#[test]
fn permission_checks_follow_the_grant_list() {
    let user = user_with(&[], &["users.view", "credit-applications.view"]);
    let eval = PermissionEvaluator::new(Environment::Client, Some(&user));
    assert!(eval.has_permission("users.view"));
    assert!(!eval.has_permission("users.edit"));
    assert!(eval.has_any_permission(&["users.edit", "users.view"]));
    assert!(!eval.has_any_permission(&["users.edit"]));
    assert!(eval.has_all_permissions(&["users.view", "credit-applications.view"]));
    assert!(!eval.has_all_permissions(&["users.view", "users.edit"]));
    assert!(!eval.has_any_permission::<&str>(&[]));
    assert!(!eval.has_all_permissions::<&str>(&[]));
}

#[test]
fn permission_checks_are_false_on_the_server() {
    let user = user_with(&["admin"], &["users.view"]);
    let eval = PermissionEvaluator::new(Environment::Server, Some(&user));
    assert!(!eval.has_permission("users.view"));
    assert!(!eval.has_any_permission(&["users.view"]));
    assert!(!eval.has_all_permissions(&["users.view"]));
    // Role checks are environment-independent.
    assert!(eval.has_role("admin"));
    assert!(eval.is_admin());
}
