use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use cropcast_core::types::Timestamp;

// =============================================================================
// Enums
// =============================================================================

/// Feed category for a recent-activity entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Yield,
    Pest,
    Market,
    Chat,
    Weather,
}

// =============================================================================
// Entity Structs
// =============================================================================

/// One entry in the recent-activity feed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Activity {
    pub id: Uuid,
    pub kind: ActivityKind,
    pub title: String,
    pub detail: String,
    pub recorded_at: Timestamp,
    /// Whether the entry links through to a detail view.
    pub clickable: bool,
}

impl Activity {
    /// Create an activity with a fresh ID.
    pub fn new(
        kind: ActivityKind,
        title: impl Into<String>,
        detail: impl Into<String>,
        recorded_at: Timestamp,
        clickable: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            detail: detail.into(),
            recorded_at,
            clickable,
        }
    }

    /// Relative age as displayed in the feed: `just now`, `N hours ago`,
    /// or `N days ago`.
    pub fn age_label(&self) -> String {
        let hours = self.recorded_at.age_hours();
        if hours < 1 {
            return "just now".to_string();
        }
        if hours < 24 {
            return if hours == 1 {
                "1 hour ago".to_string()
            } else {
                format!("{} hours ago", hours)
            };
        }
        let days = hours / 24;
        if days == 1 {
            "1 day ago".to_string()
        } else {
            format!("{} days ago", days)
        }
    }
}

/// The bundled sample feed, newest first.
pub fn recent_activities() -> Vec<Activity> {
    let activities = vec![
        Activity::new(
            ActivityKind::Yield,
            "Yield Prediction Completed",
            "Predicted 450 kg/acre for wheat crop",
            hours_ago(2),
            true,
        ),
        Activity::new(
            ActivityKind::Pest,
            "Pest Detection Scan",
            "Leaf rust detected - 85% confidence",
            hours_ago(5),
            true,
        ),
        Activity::new(
            ActivityKind::Market,
            "Market Price Check",
            "Wheat: ₹2,150/quintal in local mandi",
            hours_ago(24),
            true,
        ),
        Activity::new(
            ActivityKind::Chat,
            "AI Assistant Query",
            "Asked about organic fertilizer recommendations",
            hours_ago(48),
            true,
        ),
        Activity::new(
            ActivityKind::Weather,
            "Weather Alert",
            "Heavy rain predicted for next 3 days",
            hours_ago(72),
            false,
        ),
    ];
    debug!(entries = activities.len(), "Built sample activity feed");
    activities
}

fn hours_ago(hours: i64) -> Timestamp {
    Timestamp(Timestamp::now().0 - hours * 3600)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_feed_order_and_length() {
        let feed = recent_activities();
        let titles: Vec<&str> = feed.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Yield Prediction Completed",
                "Pest Detection Scan",
                "Market Price Check",
                "AI Assistant Query",
                "Weather Alert",
            ]
        );
    }

    #[test]
    fn test_only_weather_alert_is_not_clickable() {
        let feed = recent_activities();
        let inert: Vec<&str> = feed
            .iter()
            .filter(|a| !a.clickable)
            .map(|a| a.title.as_str())
            .collect();
        assert_eq!(inert, vec!["Weather Alert"]);
    }

    #[test]
    fn test_feed_age_labels() {
        let feed = recent_activities();
        let labels: Vec<String> = feed.iter().map(|a| a.age_label()).collect();
        assert_eq!(
            labels,
            vec![
                "2 hours ago",
                "5 hours ago",
                "1 day ago",
                "2 days ago",
                "3 days ago",
            ]
        );
    }

    #[test]
    fn test_age_label_just_now() {
        let activity = Activity::new(
            ActivityKind::Chat,
            "AI Assistant Query",
            "Asked about sowing windows",
            Timestamp::now(),
            true,
        );
        assert_eq!(activity.age_label(), "just now");
    }

    #[test]
    fn test_age_label_singular_hour() {
        let activity = Activity::new(
            ActivityKind::Pest,
            "Pest Detection Scan",
            "No pests found",
            hours_ago(1),
            true,
        );
        assert_eq!(activity.age_label(), "1 hour ago");
    }

    #[test]
    fn test_feed_ids_are_unique() {
        let feed = recent_activities();
        let ids: HashSet<Uuid> = feed.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), feed.len());
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ActivityKind::Yield).unwrap();
        assert_eq!(json, "\"yield\"");

        let back: ActivityKind = serde_json::from_str("\"weather\"").unwrap();
        assert_eq!(back, ActivityKind::Weather);
    }

    #[test]
    fn test_activity_serialization_roundtrip() {
        let activity = &recent_activities()[2];
        let json = serde_json::to_string(activity).unwrap();
        let back: Activity = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, activity.id);
        assert_eq!(back.kind, ActivityKind::Market);
        assert_eq!(back.detail, "Wheat: ₹2,150/quintal in local mandi");
    }
}
