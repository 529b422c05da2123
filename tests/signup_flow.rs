//! Contract tests for the pieces that do not need a browser: wire decoding,
//! remaining-spots math, and the status-message policy around mutations.

use activity_signup_web::{ActivityCatalog, ApiError, CatalogState, StatusMessage};

fn sample_payload() -> &'static str {
    r#"{
        "Chess Club": {
            "description": "Learn strategies and compete in chess tournaments",
            "schedule": "Fridays, 3:30 PM - 5:00 PM",
            "max_participants": 12,
            "participants": ["michael@mergington.edu", "daniel@mergington.edu"]
        },
        "Programming Class": {
            "description": "Learn programming fundamentals and build software projects",
            "schedule": "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            "max_participants": 20,
            "participants": ["emma@mergington.edu"]
        },
        "Gym Class": {
            "description": "Physical education and sports activities",
            "schedule": "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            "max_participants": 30,
            "participants": []
        }
    }"#
}

#[test]
fn spots_left_matches_capacity_minus_roster_for_every_activity() {
    let catalog: ActivityCatalog = serde_json::from_str(sample_payload()).unwrap();

    for (name, activity) in &catalog {
        assert_eq!(
            activity.spots_left(),
            activity.max_participants as i64 - activity.participants.len() as i64,
            "spots_left mismatch for {}",
            name
        );
    }
    assert_eq!(catalog["Chess Club"].spots_left(), 10);
    assert_eq!(catalog["Gym Class"].spots_left(), 30);
}

#[test]
fn rendering_inputs_are_stable_across_refetches() {
    let first: ActivityCatalog = serde_json::from_str(sample_payload()).unwrap();
    let second: ActivityCatalog = serde_json::from_str(sample_payload()).unwrap();

    let state_a = CatalogState::Ready(first);
    let state_b = CatalogState::Ready(second);

    // Same data twice gives the same list and the same select options;
    // nothing accumulates between fetches.
    assert_eq!(state_a, state_b);
    assert_eq!(state_a.activity_names(), state_b.activity_names());
    assert_eq!(
        state_a.activity_names(),
        vec!["Chess Club", "Gym Class", "Programming Class"]
    );
}

#[test]
fn rejected_signup_surfaces_detail_as_error() {
    // POST returned 400 with {"detail": "Already registered"}
    let result: Result<String, ApiError> = Err(ApiError::Rejected {
        status: 400,
        detail: Some("Already registered".to_string()),
    });

    let status = StatusMessage::from_result(&result, "An error occurred");
    assert_eq!(status, StatusMessage::Error("Already registered".to_string()));
    assert_eq!(status.css_class(), "message error");

    // A failed mutation does not trigger a refetch
    assert!(result.is_err());
}

#[test]
fn successful_signup_surfaces_confirmation() {
    let result: Result<String, ApiError> =
        Ok("Signed up a@x.com for Chess Club".to_string());

    let status = StatusMessage::from_result(&result, "An error occurred");
    assert_eq!(
        status,
        StatusMessage::Success("Signed up a@x.com for Chess Club".to_string())
    );
    assert_eq!(status.css_class(), "message success");
}

#[test]
fn failed_catalog_fetch_renders_empty_select() {
    let state = CatalogState::Failed;
    assert!(state.catalog().is_none());
    assert!(state.activity_names().is_empty());
}
