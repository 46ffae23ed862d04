use crate::{AccountType, AccountTypeHint};

#[test]
fn given_query_value_when_building_hint_then_query_wins_over_persisted() {
    let hint = AccountTypeHint::from_sources(Some("teacher"), Some("parent"));

    assert_eq!(hint.account_type(), Some(AccountType::Teacher));
}

#[test]
fn given_empty_query_when_building_hint_then_persisted_value_used() {
    let hint = AccountTypeHint::from_sources(Some(""), Some("parent"));

    assert_eq!(hint.account_type(), Some(AccountType::Parent));
}

#[test]
fn given_no_sources_when_building_hint_then_unset() {
    let hint = AccountTypeHint::from_sources(None, None);

    assert!(!hint.is_set());
    assert_eq!(hint.to_string(), "not specified");
}

#[test]
fn given_unknown_value_when_building_hint_then_unset() {
    let hint = AccountTypeHint::from_sources(Some("principal"), Some("student"));

    assert!(!hint.is_set());
}

#[test]
fn given_student_hint_then_is_student() {
    assert!(AccountTypeHint::from(AccountType::Student).is_student());
    assert!(!AccountTypeHint::from(AccountType::Parent).is_student());
    assert!(!AccountTypeHint::unset().is_student());
}
