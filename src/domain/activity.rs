use serde::Deserialize;

/// A named school activity as served by `GET /activities`.
///
/// The activity name is the unique key of the catalog mapping and is not
/// repeated inside the value. The roster order is server-assigned and
/// preserved as-is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Activity {
    /// Free-text description shown on the card
    pub description: String,
    /// Free-text schedule, e.g. "Fridays, 3:30 PM - 5:00 PM"
    pub schedule: String,
    /// Capacity of the activity
    pub max_participants: u32,
    /// Registered participant emails, in server order
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity, recomputed on every render.
    ///
    /// Signed because the server is authoritative: an over-subscribed roster
    /// renders as a negative count rather than clamping.
    pub fn spots_left(&self) -> i64 {
        self.max_participants as i64 - self.participants.len() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess_club() -> Activity {
        Activity {
            description: "Learn strategies and compete in chess tournaments".to_string(),
            schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: 10,
            participants: vec!["a@x.com".to_string()],
        }
    }

    #[test]
    fn test_spots_left() {
        assert_eq!(chess_club().spots_left(), 9);

        let mut empty = chess_club();
        empty.participants.clear();
        assert_eq!(empty.spots_left(), 10);
    }

    #[test]
    fn test_spots_left_can_go_negative() {
        let over = Activity {
            description: String::new(),
            schedule: String::new(),
            max_participants: 1,
            participants: vec!["a@x.com".into(), "b@x.com".into()],
        };
        assert_eq!(over.spots_left(), -1);
    }

    #[test]
    fn test_decodes_wire_shape() {
        let json = r#"{
            "description": "Learn strategies and compete in chess tournaments",
            "schedule": "Fridays, 3:30 PM - 5:00 PM",
            "max_participants": 10,
            "participants": ["a@x.com"]
        }"#;

        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity, chess_club());
    }

    #[test]
    fn test_missing_participants_defaults_to_empty() {
        let json = r#"{
            "description": "Weekly drama rehearsals",
            "schedule": "Tuesdays, 4:00 PM",
            "max_participants": 20
        }"#;

        let activity: Activity = serde_json::from_str(json).unwrap();
        assert!(activity.participants.is_empty());
        assert_eq!(activity.spots_left(), 20);
    }
}
