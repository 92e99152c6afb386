//! Month summary tiles: worked hours, hour bank, absences.

use chrono::Duration;

use pontual_core::ValueObject;

/// Mocked month aggregate shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSummary {
    pub worked: Duration,
    /// Hour-bank balance; may be negative.
    pub balance: Duration,
    pub absent_days: u32,
}

impl ValueObject for MonthSummary {}

impl MonthSummary {
    /// The demo month: 160h30 worked, +8h15 banked, no absences.
    pub fn demo() -> Self {
        Self {
            worked: Duration::minutes(160 * 60 + 30),
            balance: Duration::minutes(8 * 60 + 15),
            absent_days: 0,
        }
    }

    /// "160h 30min"
    pub fn worked_label(&self) -> String {
        format_minutes(self.worked.num_minutes())
    }

    /// "+8h 15min" / "-2h 05min"
    pub fn balance_label(&self) -> String {
        let minutes = self.balance.num_minutes();
        let sign = if minutes < 0 { "-" } else { "+" };
        format!("{sign}{}", format_minutes(minutes.abs()))
    }

    /// "0 dias"
    pub fn absent_label(&self) -> String {
        format!("{} dias", self.absent_days)
    }
}

fn format_minutes(total: i64) -> String {
    format!("{}h {:02}min", total / 60, total % 60)
}
