//! In-memory meeting calendar

use crate::core::models::{Meeting, MeetingFormat, MeetingKind, Metadata};
use crate::utils::error::{DashboardError, Result};
use parking_lot::RwLock;
use serde::Deserialize;

/// Calendar holding every scheduled meeting
#[derive(Debug, Default)]
pub struct MeetingCalendar {
    meetings: RwLock<Vec<Meeting>>,
}

/// Fields for scheduling a meeting
#[derive(Debug, Clone, Deserialize)]
pub struct NewMeeting {
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
    #[serde(default = "default_kind")]
    pub kind: MeetingKind,
    /// How attendees join
    #[serde(default)]
    pub format: MeetingFormat,
    /// Location or link
    pub location: Option<String>,
    /// Attendee display names
    #[serde(default)]
    pub attendees: Vec<String>,
}

fn default_kind() -> MeetingKind {
    MeetingKind::Other
}

impl MeetingCalendar {
    /// Create an empty calendar
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an existing meeting record
    pub fn insert(&self, meeting: Meeting) {
        self.meetings.write().push(meeting);
    }

    /// Schedule a meeting
    pub fn schedule(&self, new_meeting: NewMeeting) -> Result<Meeting> {
        if new_meeting.title.trim().is_empty() {
            return Err(DashboardError::validation("Meeting title is required"));
        }
        if new_meeting.duration_minutes == 0 {
            return Err(DashboardError::validation(
                "Meeting duration must be positive",
            ));
        }

        let meeting = Meeting {
            metadata: Metadata::new(),
            title: new_meeting.title,
            description: new_meeting.description,
            date: new_meeting.date,
            start_time: new_meeting.start_time,
            duration_minutes: new_meeting.duration_minutes,
            kind: new_meeting.kind,
            format: new_meeting.format,
            location: new_meeting.location,
            attendees: new_meeting.attendees,
        };

        self.meetings.write().push(meeting.clone());
        Ok(meeting)
    }

    /// All meetings ordered by date and start time
    pub fn list(&self) -> Vec<Meeting> {
        let mut meetings = self.meetings.read().clone();
        meetings.sort_by(|a, b| a.date.cmp(&b.date).then(a.start_time.cmp(&b.start_time)));
        meetings
    }

    /// Meetings on a given date, ordered by start time
    pub fn on_date(&self, date: chrono::NaiveDate) -> Vec<Meeting> {
        let mut meetings: Vec<Meeting> = self
            .meetings
            .read()
            .iter()
            .filter(|m| m.date == date)
            .cloned()
            .collect();
        meetings.sort_by(|a, b| a.start_time.cmp(&b.start_time));
        meetings
    }

    /// Meetings on or after a date
    pub fn upcoming(&self, from: chrono::NaiveDate) -> Vec<Meeting> {
        let mut meetings: Vec<Meeting> = self
            .meetings
            .read()
            .iter()
            .filter(|m| m.date >= from)
            .cloned()
            .collect();
        meetings.sort_by(|a, b| a.date.cmp(&b.date).then(a.start_time.cmp(&b.start_time)));
        meetings
    }

    /// Number of meetings
    pub fn len(&self) -> usize {
        self.meetings.read().len()
    }

    /// Whether the calendar is empty
    pub fn is_empty(&self) -> bool {
        self.meetings.read().is_empty()
    }
}
