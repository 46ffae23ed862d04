use crate::{AccountType, Identity, NewProfile, Profile, ProfileForm, StudentFields};

use serde_json::json;
use uuid::Uuid;

fn profile(account_type: Option<&str>) -> Profile {
    Profile {
        id: Uuid::new_v4(),
        email: Some(String::from("kid@example.com")),
        account_type: account_type.map(String::from),
        first_name: None,
        full_name: None,
        username: None,
        age: None,
        parent_email: None,
        parent_id: None,
        avatar_url: None,
    }
}

#[test]
fn test_profile_deserializes_with_missing_columns() {
    let id = Uuid::new_v4();
    let row: Profile = serde_json::from_value(json!({
        "id": id,
        "account_type": "teacher"
    }))
    .unwrap();

    assert_eq!(row.id, id);
    assert_eq!(row.account_type(), Some(AccountType::Teacher));
    assert!(row.email.is_none());
}

#[test]
fn test_display_name_prefers_first_name_then_falls_through_empty_values() {
    let mut row = profile(Some("student"));
    assert_eq!(row.display_name(), "kid@example.com");

    row.username = Some(String::from("rocketkid"));
    assert_eq!(row.display_name(), "rocketkid");

    row.first_name = Some(String::new());
    row.full_name = Some(String::from("Ada Lovelace"));
    assert_eq!(row.display_name(), "Ada Lovelace");

    row.first_name = Some(String::from("Ada"));
    assert_eq!(row.display_name(), "Ada");
}

#[test]
fn test_badge_follows_parsed_category() {
    assert_eq!(profile(Some(" Parent ")).badge(), Some("Parent"));
    assert_eq!(profile(Some("admin")).badge(), None);
    assert_eq!(profile(None).badge(), None);
}

#[test]
fn test_avatar_initial_only_without_avatar_url() {
    let mut row = profile(Some("student"));
    row.username = Some(String::from("zed"));
    assert_eq!(row.avatar_initial(), Some('Z'));

    row.first_name = Some(String::from("ada"));
    assert_eq!(row.avatar_initial(), Some('A'));

    row.avatar_url = Some(String::from("https://cdn.example/a.png"));
    assert_eq!(row.avatar_initial(), None);
}

#[test]
fn test_new_profile_omits_unset_optional_columns() {
    let identity = Identity::new(Uuid::new_v4(), "p@example.com");
    let row = NewProfile::new(&identity, AccountType::Parent);

    let value = serde_json::to_value(&row).unwrap();

    assert_eq!(
        value,
        json!({
            "id": identity.id,
            "email": "p@example.com",
            "account_type": "parent"
        })
    );
}

#[test]
fn given_student_profile_when_form_has_empty_first_name_then_rejected() {
    let row = profile(Some("student"));
    let form = ProfileForm::default();

    let err = form.to_update(&row).unwrap_err();

    assert_eq!(err.user_message(), "First name is required");
}

#[test]
fn given_parent_profile_when_form_has_empty_names_then_nulls_written_without_student_fields() {
    let row = profile(Some("parent"));
    let form = ProfileForm {
        age: String::from("40"),
        ..ProfileForm::default()
    };

    let update = form.to_update(&row).unwrap();

    assert_eq!(update.first_name, None);
    assert_eq!(update.student, None);
    assert_eq!(
        serde_json::to_value(&update).unwrap(),
        json!({ "first_name": null, "full_name": null })
    );
}

#[test]
fn given_student_profile_when_form_valid_then_student_fields_included() {
    let row = profile(Some("student"));
    let form = ProfileForm {
        first_name: String::from(" Ada "),
        full_name: String::new(),
        age: String::from("9"),
        parent_email: String::from("mum@example.com"),
    };

    let update = form.to_update(&row).unwrap();

    assert_eq!(update.first_name.as_deref(), Some("Ada"));
    assert_eq!(
        update.student,
        Some(StudentFields {
            age: Some(9),
            parent_email: Some(String::from("mum@example.com")),
        })
    );
    assert_eq!(
        serde_json::to_value(&update).unwrap(),
        json!({
            "first_name": "Ada",
            "full_name": null,
            "age": 9,
            "parent_email": "mum@example.com"
        })
    );
}

#[test]
fn given_student_profile_when_age_out_of_range_then_rejected() {
    let row = profile(Some("student"));
    for age in ["4", "13", "99999999999", "-99999999999"] {
        let form = ProfileForm {
            first_name: String::from("Ada"),
            age: String::from(age),
            ..ProfileForm::default()
        };

        let err = form.to_update(&row).unwrap_err();

        assert_eq!(err.user_message(), "Age must be between 5 and 12");
    }
}

#[test]
fn given_student_profile_when_age_blank_then_age_cleared() {
    let row = profile(Some("student"));
    let form = ProfileForm {
        first_name: String::from("Ada"),
        ..ProfileForm::default()
    };

    let update = form.to_update(&row).unwrap();

    assert_eq!(update.student.unwrap().age, None);
}

#[test]
fn given_student_profile_when_parent_email_malformed_then_rejected() {
    let row = profile(Some("student"));
    let form = ProfileForm {
        first_name: String::from("Ada"),
        parent_email: String::from("mum-at-example"),
        ..ProfileForm::default()
    };

    let err = form.to_update(&row).unwrap_err();

    assert_eq!(
        err.user_message(),
        "Please enter a valid parent email address"
    );
}

#[test]
fn test_form_prefills_from_profile() {
    let mut row = profile(Some("student"));
    row.first_name = Some(String::from("Ada"));
    row.age = Some(8);

    let form = ProfileForm::from_profile(&row);

    assert_eq!(form.first_name, "Ada");
    assert_eq!(form.age, "8");
    assert_eq!(form.parent_email, "");
}
