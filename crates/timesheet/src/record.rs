//! Clock-in/clock-out events and the recent-records feed.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use pontual_core::ClockEventId;

/// Direction of a clock event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockEventKind {
    Entry,
    Exit,
}

impl ClockEventKind {
    /// Feed label: "Entrada" / "Saída".
    pub fn label(self) -> &'static str {
        match self {
            ClockEventKind::Entry => "Entrada",
            ClockEventKind::Exit => "Saída",
        }
    }
}

/// One punch of the clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockEvent {
    pub id: ClockEventId,
    pub kind: ClockEventKind,
    pub day: NaiveDate,
    pub time: NaiveTime,
}

impl ClockEvent {
    fn new(kind: ClockEventKind, day: NaiveDate, time: NaiveTime) -> Self {
        Self {
            id: ClockEventId::new(),
            kind,
            day,
            time,
        }
    }

    /// Relative day label for the feed: "Hoje", "Ontem" or `dd/MM`.
    pub fn day_label(&self, today: NaiveDate) -> String {
        if self.day == today {
            "Hoje".to_owned()
        } else if today.pred_opt() == Some(self.day) {
            "Ontem".to_owned()
        } else {
            self.day.format("%d/%m").to_string()
        }
    }

    /// Feed time label, `HH:MM`.
    pub fn time_label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

/// The recent-records feed shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timesheet {
    events: Vec<ClockEvent>,
}

impl Timesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The five demo records, in display order: three punches today, the end
    /// and start of yesterday's shift.
    pub fn demo(today: NaiveDate) -> Self {
        let yesterday = today.pred_opt().unwrap_or(today);
        let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN);

        Self {
            events: vec![
                ClockEvent::new(ClockEventKind::Entry, today, at(8, 0)),
                ClockEvent::new(ClockEventKind::Exit, today, at(12, 0)),
                ClockEvent::new(ClockEventKind::Entry, today, at(13, 0)),
                ClockEvent::new(ClockEventKind::Exit, yesterday, at(17, 0)),
                ClockEvent::new(ClockEventKind::Entry, yesterday, at(8, 0)),
            ],
        }
    }

    /// Punch the clock now. The event lands at the top of the feed.
    pub fn clock_in(&mut self, now: NaiveDateTime) -> ClockEvent {
        let event = ClockEvent::new(ClockEventKind::Entry, now.date(), now.time());
        self.events.insert(0, event.clone());
        event
    }

    pub fn recent(&self) -> &[ClockEvent] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn demo_feed_has_the_five_expected_records() {
        let today = date(2024, 6, 14);
        let sheet = Timesheet::demo(today);
        let feed = sheet.recent();

        assert_eq!(feed.len(), 5);

        let rendered: Vec<(String, String, String)> = feed
            .iter()
            .map(|e| {
                (
                    e.kind.label().to_owned(),
                    e.time_label(),
                    e.day_label(today),
                )
            })
            .collect();

        assert_eq!(
            rendered,
            vec![
                ("Entrada".into(), "08:00".into(), "Hoje".into()),
                ("Saída".into(), "12:00".into(), "Hoje".into()),
                ("Entrada".into(), "13:00".into(), "Hoje".into()),
                ("Saída".into(), "17:00".into(), "Ontem".into()),
                ("Entrada".into(), "08:00".into(), "Ontem".into()),
            ]
        );
    }

    #[test]
    fn older_events_fall_back_to_numeric_day_label() {
        let today = date(2024, 6, 14);
        let sheet = Timesheet::demo(date(2024, 6, 3));
        let oldest = sheet.recent().last().unwrap();
        assert_eq!(oldest.day_label(today), "02/06");
    }

    #[test]
    fn clock_in_prepends_an_entry_event() {
        let today = date(2024, 6, 14);
        let mut sheet = Timesheet::demo(today);
        let now = today.and_hms_opt(14, 32, 5).unwrap();

        let event = sheet.clock_in(now);

        assert_eq!(event.kind, ClockEventKind::Entry);
        assert_eq!(sheet.recent().first(), Some(&event));
        assert_eq!(event.time_label(), "14:32");
        assert_eq!(event.day_label(today), "Hoje");
    }
}
