use chrono::{DateTime, NaiveDate};

use super::Timestamp;

/// A dated calendar event, e.g. `{ "name": "fullMoon", "date": "2025-01-13" }`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarDate {
    pub name: String,
    /// UTC day in `YYYY-MM-DD` form.
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Calendar {
    pub dates: Vec<CalendarDate>,
}

impl Calendar {
    pub const FULL_MOON: &'static str = "fullMoon";

    pub fn with_full_moon(date: impl Into<String>) -> Self {
        Self {
            dates: vec![CalendarDate {
                name: Self::FULL_MOON.to_owned(),
                date: date.into(),
            }],
        }
    }

    /// True when an event named `name` falls on the UTC day containing `now`.
    ///
    /// Entries with an unparsable date never match.
    pub fn has_event_on(&self, name: &str, now: Timestamp) -> bool {
        let Some(today) = utc_day(now) else {
            return false;
        };

        self.dates
            .iter()
            .filter(|event| event.name == name)
            .filter_map(|event| NaiveDate::parse_from_str(&event.date, "%Y-%m-%d").ok())
            .any(|day| day == today)
    }

    pub fn is_full_moon(&self, now: Timestamp) -> bool {
        self.has_event_on(Self::FULL_MOON, now)
    }
}

fn utc_day(now: Timestamp) -> Option<NaiveDate> {
    let millis = i64::try_from(now.as_millis()).ok()?;
    DateTime::from_timestamp_millis(millis).map(|instant| instant.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2025-01-13T12:00:00Z
    const MID_DAY: Timestamp = Timestamp(1_736_769_600_000);

    #[test]
    fn full_moon_matches_utc_day() {
        let calendar = Calendar::with_full_moon("2025-01-13");
        assert!(calendar.is_full_moon(MID_DAY));
        assert!(!calendar.is_full_moon(Timestamp(MID_DAY.0 + 12 * 3_600_000)));
    }

    #[test]
    fn other_events_and_bad_dates_do_not_count() {
        let calendar = Calendar {
            dates: vec![
                CalendarDate {
                    name: "tornado".into(),
                    date: "2025-01-13".into(),
                },
                CalendarDate {
                    name: Calendar::FULL_MOON.into(),
                    date: "13/01/2025".into(),
                },
            ],
        };
        assert!(!calendar.is_full_moon(MID_DAY));
        assert!(calendar.has_event_on("tornado", MID_DAY));
        assert!(!Calendar::default().is_full_moon(MID_DAY));
    }
}
