//! Meeting records

use super::Metadata;
use serde::{Deserialize, Serialize};

/// A scheduled meeting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meeting {
    /// Record metadata
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Meeting title
    pub title: String,
    /// Description
    pub description: Option<String>,
    /// Meeting date
    pub date: chrono::NaiveDate,
    /// Start time
    pub start_time: chrono::NaiveTime,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Meeting kind
    pub kind: MeetingKind,
    /// How attendees join
    pub format: MeetingFormat,
    /// Location or link, depending on format
    pub location: Option<String>,
    /// Attendee display names
    pub attendees: Vec<String>,
}

/// What kind of meeting this is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingKind {
    /// Project-internal meeting
    Project,
    /// Client-facing meeting
    Client,
    /// Daily standup
    Standup,
    /// Anything else
    Other,
}

/// How a meeting is held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingFormat {
    /// Video call
    Video,
    /// In person
    InPerson,
    /// Phone call
    Phone,
}

impl Default for MeetingFormat {
    fn default() -> Self {
        Self::Video
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meeting_serializes_kind_as_snake_case() {
        let meeting = Meeting {
            metadata: Metadata::new(),
            title: "Team Standup".to_string(),
            description: None,
            date: chrono::NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(),
            start_time: chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            duration_minutes: 30,
            kind: MeetingKind::Standup,
            format: MeetingFormat::Video,
            location: None,
            attendees: vec!["All Team".to_string()],
        };

        let json = serde_json::to_value(&meeting).unwrap();
        assert_eq!(json["kind"], "standup");
        assert_eq!(json["format"], "video");
    }
}
