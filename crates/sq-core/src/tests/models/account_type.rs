use crate::{AccountType, Destination};

use std::str::FromStr;

#[test]
fn test_account_type_as_str() {
    assert_eq!(AccountType::Student.as_str(), "student");
    assert_eq!(AccountType::Parent.as_str(), "parent");
    assert_eq!(AccountType::Teacher.as_str(), "teacher");
}

#[test]
fn test_account_type_from_str_normalizes_case_and_whitespace() {
    assert_eq!(
        AccountType::from_str("  Parent ").unwrap(),
        AccountType::Parent
    );
    assert_eq!(
        AccountType::from_str("TEACHER").unwrap(),
        AccountType::Teacher
    );
    assert_eq!(
        AccountType::from_str("student").unwrap(),
        AccountType::Student
    );
    assert!(AccountType::from_str("admin").is_err());
    assert!(AccountType::from_str("").is_err());
}

#[test]
fn test_account_type_default_is_student() {
    assert_eq!(AccountType::default(), AccountType::Student);
}

#[test]
fn test_each_account_type_maps_to_its_own_dashboard() {
    assert_eq!(
        AccountType::Student.dashboard(),
        Destination::StudentDashboard
    );
    assert_eq!(AccountType::Parent.dashboard(), Destination::ParentDashboard);
    assert_eq!(
        AccountType::Teacher.dashboard(),
        Destination::TeacherDashboard
    );
}

#[test]
fn test_account_type_serializes_lowercase() {
    let json = serde_json::to_string(&AccountType::Teacher).unwrap();
    assert_eq!(json, "\"teacher\"");
}

#[test]
fn test_destination_url_joins_origin() {
    assert_eq!(
        Destination::ParentDashboard.url("https://sciquest.example/"),
        "https://sciquest.example/dashboards/parent-dashboard.html"
    );
    assert_eq!(
        Destination::SignIn.url("https://sciquest.example"),
        "https://sciquest.example/auth/auth.html"
    );
}
