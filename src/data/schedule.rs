use std::sync::Arc;

use druid::{im::Vector, Data, Lens};
use serde::Deserialize;
use time::OffsetDateTime;

/// Envelope of the schedule fetch; everything but the `schedule` field is
/// dropped after deserialization.
#[derive(Clone, Debug, Deserialize)]
pub struct ScheduleResponse {
    pub me: Arc<str>,
    pub owner: Arc<str>,
    pub schedule: Vector<Schedule>,
}

/// One week of the festival schedule.
#[derive(Clone, Debug, Data, Lens, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(rename = "weekName")]
    pub name: Arc<str>,
    pub week_number: u32,
    pub days: Vector<Day>,
}

#[derive(Clone, Debug, Data, Lens, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    pub date: Arc<str>,
    pub week_day: Arc<str>,
    pub stages: Vector<Stage>,
}

#[derive(Clone, Debug, Data, Lens, Deserialize)]
pub struct Stage {
    #[serde(rename = "stage")]
    pub name: Arc<str>,
    pub artists: Vector<Slot>,
}

/// A single artist time slot, clickable to toggle attendance.
#[derive(Clone, Debug, PartialEq, Data, Lens, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub id: Arc<str>,
    pub artist: Arc<str>,
    pub attendees: Vector<Arc<str>>,
    pub attending: bool,
    #[data(same_fn = "PartialEq::eq")]
    #[serde(with = "time::serde::rfc3339")]
    pub time_start: OffsetDateTime,
    #[data(same_fn = "PartialEq::eq")]
    #[serde(with = "time::serde::rfc3339")]
    pub time_end: OffsetDateTime,
}

impl Slot {
    /// Zero-padded 24-hour start and end, `09:05-10:00`.
    pub fn time_range(&self) -> String {
        format!(
            "{:02}:{:02}-{:02}:{:02}",
            self.time_start.hour(),
            self.time_start.minute(),
            self.time_end.hour(),
            self.time_end.minute()
        )
    }
}

/// Payload of an attendance toggle request.
#[derive(Clone, Debug)]
pub struct AttendanceChange {
    pub id: Arc<str>,
    pub attending: bool,
}

impl AttendanceChange {
    /// Request flipping the slot's current attendance.
    pub fn toggle_of(slot: &Slot) -> Self {
        Self {
            id: slot.id.clone(),
            attending: !slot.attending,
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn slot(id: &str, attending: bool) -> Slot {
        Slot {
            id: id.into(),
            artist: "Overlook".into(),
            attendees: Vector::new(),
            attending,
            time_start: datetime!(2024-07-05 09:05 UTC),
            time_end: datetime!(2024-07-05 10:00 UTC),
        }
    }

    #[test]
    fn time_range_is_zero_padded() {
        assert_eq!(slot("a", false).time_range(), "09:05-10:00");
    }

    #[test]
    fn toggle_flips_current_attendance() {
        let change = AttendanceChange::toggle_of(&slot("a", false));
        assert!(change.attending);

        let change = AttendanceChange::toggle_of(&slot("a", true));
        assert!(!change.attending);
        assert_eq!(&*change.id, "a");
    }

    #[test]
    fn deserializes_wire_document() {
        let json = r#"{
            "me": "u-1",
            "owner": "u-1",
            "schedule": [{
                "weekName": "Week 1",
                "weekNumber": 27,
                "days": [{
                    "date": "2024-07-05",
                    "weekDay": "Friday",
                    "stages": [{
                        "stage": "Main Stage",
                        "artists": [{
                            "id": "slot-1",
                            "artist": "Overlook",
                            "attendees": ["u-1", "u-2"],
                            "attending": true,
                            "timeStart": "2024-07-05T09:05:00Z",
                            "timeEnd": "2024-07-05T10:00:00Z"
                        }]
                    }]
                }]
            }]
        }"#;
        let response: ScheduleResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.schedule.len(), 1);

        let week = &response.schedule[0];
        assert_eq!(&*week.name, "Week 1");
        assert_eq!(week.week_number, 27);

        let slot = &week.days[0].stages[0].artists[0];
        assert_eq!(&*slot.artist, "Overlook");
        assert_eq!(slot.attendees.len(), 2);
        assert!(slot.attending);
        assert_eq!(slot.time_range(), "09:05-10:00");
    }
}
