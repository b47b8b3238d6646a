/// Types for course catalog data
use super::error::CatalogError;
use super::fields::{int_or_zero, opt_string, strict_int};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use serde_json::Value;
use std::hash::{Hash, Hasher};
use tracing::debug;

/// A course offered by the university, e.g. "CS 161".
///
/// Identity depends only on `subject_code` and `course_number`: two courses
/// with the same pair compare equal and hash the same, whatever their title
/// or sections.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    subject_code: String,
    course_number: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    credits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    abbr: Option<String>,
    sections: Vec<Section>,
}

impl Course {
    /// Creates a course from its identifying fields alone.
    ///
    /// The result has no title, credits, description or `abbr`, and no
    /// sections. It stands in for a course whose full record is not loaded.
    pub fn new(subject_code: impl Into<String>, course_number: i64) -> Self {
        Self {
            subject_code: subject_code.into(),
            course_number,
            title: None,
            credits: None,
            description: None,
            abbr: None,
            sections: Vec::new(),
        }
    }

    /// Decodes a course from a JSON record.
    ///
    /// # Arguments
    /// * `record` - A JSON object in the catalog API's course shape
    ///
    /// # Returns
    /// * `Ok(Course)` - The decoded course, sections in document order
    /// * `Err(CatalogError::MissingRequiredField)` - If `subjectCode` is not a
    ///   string or `courseNumber` is not an integer
    pub fn from_json(record: &Value) -> Result<Self, CatalogError> {
        let subject_code =
            opt_string(record, "subjectCode").ok_or(CatalogError::MissingRequiredField {
                field: "subjectCode",
            })?;
        let course_number =
            strict_int(record, "courseNumber").ok_or(CatalogError::MissingRequiredField {
                field: "courseNumber",
            })?;

        let abbr = format!("{subject_code} {course_number}");

        let sections: Vec<Section> = record
            .get("sections")
            .and_then(Value::as_array)
            .map(|array| array.iter().map(Section::from_json).collect())
            .unwrap_or_default();

        debug!("Decoded course {} with {} sections", abbr, sections.len());

        Ok(Self {
            subject_code,
            course_number,
            title: opt_string(record, "title"),
            credits: opt_string(record, "credits"),
            description: opt_string(record, "description"),
            abbr: Some(abbr),
            sections,
        })
    }

    /// Parses `text` as JSON and decodes it with [`Course::from_json`].
    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        let record: Value = serde_json::from_str(text)?;
        Self::from_json(&record)
    }

    pub fn subject_code(&self) -> &str {
        &self.subject_code
    }

    pub fn course_number(&self) -> i64 {
        self.course_number
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn credits(&self) -> Option<&str> {
        self.credits.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Display label such as "CS 161". Only set on courses decoded from a
    /// full record.
    pub fn abbr(&self) -> Option<&str> {
        self.abbr.as_deref()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.subject_code == other.subject_code && self.course_number == other.course_number
    }
}

impl Eq for Course {}

impl Hash for Course {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.subject_code.hash(state);
        self.course_number.hash(state);
    }
}

/// One offered instance of a course in a given term.
///
/// Meeting fields come from the first entry of the record's `meetingTimes`
/// array. Further meeting times are not represented.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(skip_serializing_if = "Option::is_none")]
    term: Option<String>,
    crn: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    instructor: Option<String>,

    // From meetingTimes[0]
    #[serde(skip_serializing_if = "Option::is_none")]
    building_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    days: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    room_number: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    section_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fees: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    restrictions: Option<String>,
    capacity: i64,
    current_enrollment: i64,
    waitlist_current: i64,
}

impl Section {
    /// Decodes a section from a JSON record. Never fails: missing strings
    /// become `None` and missing or unparseable counters become `0`.
    pub fn from_json(record: &Value) -> Self {
        let first_meeting = record
            .get("meetingTimes")
            .and_then(Value::as_array)
            .and_then(|times| times.first());

        let meeting_field = |key: &str| first_meeting.and_then(|m| opt_string(m, key));

        Self {
            term: opt_string(record, "term"),
            crn: int_or_zero(record, "crn"),
            instructor: opt_string(record, "instructor"),
            building_code: meeting_field("buildingCode"),
            days: meeting_field("days"),
            start_time: meeting_field("startTime"),
            end_time: meeting_field("endTime"),
            room_number: meeting_field("roomNumber"),
            section_type: opt_string(record, "type"),
            status: opt_string(record, "status"),
            fees: opt_string(record, "fees"),
            restrictions: opt_string(record, "restrictions"),
            capacity: int_or_zero(record, "capacity"),
            current_enrollment: int_or_zero(record, "currentEnrollment"),
            // The upstream API spells this key in lowercase
            waitlist_current: int_or_zero(record, "waitlistcurrent"),
        }
    }

    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    /// Course reference number, `0` when the record had none.
    pub fn crn(&self) -> i64 {
        self.crn
    }

    pub fn instructor(&self) -> Option<&str> {
        self.instructor.as_deref()
    }

    pub fn building_code(&self) -> Option<&str> {
        self.building_code.as_deref()
    }

    pub fn days(&self) -> Option<&str> {
        self.days.as_deref()
    }

    pub fn start_time(&self) -> Option<&str> {
        self.start_time.as_deref()
    }

    pub fn end_time(&self) -> Option<&str> {
        self.end_time.as_deref()
    }

    pub fn room_number(&self) -> Option<&str> {
        self.room_number.as_deref()
    }

    /// Section type as sent by the API, e.g. "Lecture" or "Lab".
    pub fn section_type(&self) -> Option<&str> {
        self.section_type.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn fees(&self) -> Option<&str> {
        self.fees.as_deref()
    }

    pub fn restrictions(&self) -> Option<&str> {
        self.restrictions.as_deref()
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    pub fn current_enrollment(&self) -> i64 {
        self.current_enrollment
    }

    pub fn waitlist_current(&self) -> i64 {
        self.waitlist_current
    }

    /// Parses the start time as an RFC 3339 timestamp
    /// (e.g. "2024-09-25T10:00:00-07:00").
    pub fn start_datetime(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(self.start_time.as_deref())
    }

    /// Parses the end time as an RFC 3339 timestamp.
    pub fn end_datetime(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(self.end_time.as_deref())
    }

    /// Seats left before the section reaches capacity, never negative.
    pub fn open_seats(&self) -> i64 {
        self.capacity.saturating_sub(self.current_enrollment).max(0)
    }

    /// True when the section has a capacity and every seat is taken.
    pub fn is_full(&self) -> bool {
        self.capacity > 0 && self.open_seats() == 0
    }
}

fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw?).ok()
}
