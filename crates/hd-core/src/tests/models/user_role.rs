use crate::UserRole;

use std::str::FromStr;

#[test]
fn test_user_role_from_str() {
    assert_eq!(UserRole::from_str("ADMIN").unwrap(), UserRole::Admin);
    assert_eq!(UserRole::from_str("MEMBER").unwrap(), UserRole::Member);
    assert!(UserRole::from_str("OWNER").is_err());
}

#[test]
fn test_user_role_is_admin() {
    assert!(UserRole::Admin.is_admin());
    assert!(!UserRole::Member.is_admin());
}

#[test]
fn test_user_role_default_is_member() {
    assert_eq!(UserRole::default(), UserRole::Member);
}
