//! `pontual-timesheet` — clock events and the mocked dashboard data.
//!
//! The dashboard feed and month summary are demo data: typed and formatted
//! here, but not computed from any real record history.

pub mod record;
pub mod summary;

pub use record::{ClockEvent, ClockEventKind, Timesheet};
pub use summary::MonthSummary;
