use crate::{Destination, FlowOutcome, FollowUp, NavigationTarget, Notice};

use serde_json::json;

#[test]
fn test_busy_outcome_is_empty() {
    let outcome = FlowOutcome::busy();

    assert!(outcome.is_busy());
    assert!(!outcome.is_error());
    assert_eq!(outcome.destination(), None);
}

#[test]
fn test_redirect_outcome_carries_banner_and_delay() {
    let outcome = FlowOutcome::redirect("Login successful! Redirecting...", Destination::Index, 1500);

    assert_eq!(
        outcome.notice,
        Some(Notice::Success(String::from("Login successful! Redirecting...")))
    );
    let navigation = outcome.navigation.as_ref().unwrap();
    assert_eq!(navigation.delay_ms, 1500);
    assert_eq!(navigation.target, NavigationTarget::Page(Destination::Index));
    assert_eq!(outcome.destination(), Some(Destination::Index));
}

#[test]
fn test_error_outcome_never_navigates() {
    let outcome = FlowOutcome::error("nope").with_follow_up(FollowUp::ClearCaptcha);

    assert!(outcome.is_error());
    assert!(outcome.navigation.is_none());
    assert_eq!(outcome.message(), Some("nope"));
}

#[test]
fn test_outcome_json_shape() {
    let outcome = FlowOutcome::redirect("ok", Destination::TeacherDashboard, 1500)
        .with_follow_up(FollowUp::SwitchToSignIn { after_ms: 2000 });

    let value = serde_json::to_value(&outcome).unwrap();

    assert_eq!(
        value,
        json!({
            "notice": { "kind": "success", "message": "ok" },
            "navigation": {
                "target": { "kind": "page", "target": "teacher_dashboard" },
                "delay_ms": 1500
            },
            "follow_up": { "kind": "switch_to_sign_in", "after_ms": 2000 }
        })
    );
}
