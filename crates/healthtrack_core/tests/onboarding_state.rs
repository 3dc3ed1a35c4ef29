use healthtrack_core::{OnboardingState, UserProfile};

#[test]
fn state_helpers_expose_ready_name_only() {
    let ready = OnboardingState::Ready {
        name: "Alice".to_string(),
    };
    assert!(ready.is_ready());
    assert_eq!(ready.display_name(), Some("Alice"));

    assert!(!OnboardingState::Uninitialized.is_ready());
    assert_eq!(OnboardingState::Uninitialized.display_name(), None);
    assert!(!OnboardingState::NeedsName.is_ready());
    assert_eq!(OnboardingState::NeedsName.display_name(), None);
}

#[test]
fn state_serialization_uses_expected_wire_fields() {
    let ready = OnboardingState::Ready {
        name: "Alice".to_string(),
    };
    let json = serde_json::to_value(&ready).unwrap();
    assert_eq!(json["state"], "ready");
    assert_eq!(json["name"], "Alice");

    let needs_name = serde_json::to_value(&OnboardingState::NeedsName).unwrap();
    assert_eq!(needs_name["state"], "needs_name");

    let decoded: OnboardingState = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, ready);
}

#[test]
fn profile_serialization_round_trips() {
    let profile = UserProfile {
        id: 7,
        name: "Bob".to_string(),
    };
    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["name"], "Bob");

    let decoded: UserProfile = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, profile);
}
