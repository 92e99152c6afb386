//! Authenticated dashboard view model.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use pontual_timesheet::{ClockEvent, MonthSummary, Timesheet};

use crate::contract::{Navigator, Notification, Notifier, Route};

pub const NOTIFY_CLOCK_IN_TITLE: &str = "Ponto registrado com sucesso!";
pub const NOTIFY_LOGOUT_TITLE: &str = "Logout realizado";
pub const NOTIFY_LOGOUT_DESCRIPTION: &str = "Você foi desconectado com sucesso.";

/// Dashboard view model: greeting, the mocked recent records and month
/// summary, and the clock-in/logout actions.
pub struct Dashboard {
    employee_name: String,
    timesheet: Timesheet,
    summary: MonthSummary,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl Dashboard {
    pub fn open(
        employee_name: impl Into<String>,
        today: NaiveDate,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            employee_name: employee_name.into(),
            timesheet: Timesheet::demo(today),
            summary: MonthSummary::demo(),
            notifier,
            navigator,
        }
    }

    /// "Bem-vindo, {name}!"
    pub fn greeting(&self) -> String {
        format!("Bem-vindo, {}!", self.employee_name)
    }

    /// "Hoje é sexta-feira, 14 de junho de 2024"
    pub fn date_line(&self, today: NaiveDate) -> String {
        format!("Hoje é {}", format_long_date_pt(today))
    }

    pub fn recent_records(&self) -> &[ClockEvent] {
        self.timesheet.recent()
    }

    pub fn summary(&self) -> &MonthSummary {
        &self.summary
    }

    /// Punch the clock: records an entry event and notifies with the time.
    pub fn clock_in(&mut self, now: NaiveDateTime) -> ClockEvent {
        let event = self.timesheet.clock_in(now);
        self.notifier.notify(Notification::new(
            NOTIFY_CLOCK_IN_TITLE,
            format!("Entrada registrada às {}", now.format("%H:%M:%S")),
        ));
        event
    }

    /// Leave the authenticated view.
    pub fn logout(&self) {
        self.notifier.notify(Notification::new(
            NOTIFY_LOGOUT_TITLE,
            NOTIFY_LOGOUT_DESCRIPTION,
        ));
        self.navigator.navigate(Route::Login);
    }
}

/// Long pt-BR date: "sexta-feira, 14 de junho de 2024".
pub fn format_long_date_pt(date: NaiveDate) -> String {
    const WEEKDAYS: [&str; 7] = [
        "segunda-feira",
        "terça-feira",
        "quarta-feira",
        "quinta-feira",
        "sexta-feira",
        "sábado",
        "domingo",
    ];
    const MONTHS: [&str; 12] = [
        "janeiro",
        "fevereiro",
        "março",
        "abril",
        "maio",
        "junho",
        "julho",
        "agosto",
        "setembro",
        "outubro",
        "novembro",
        "dezembro",
    ];

    let weekday = WEEKDAYS[date.weekday().num_days_from_monday() as usize];
    let month = MONTHS[date.month0() as usize];
    format!("{weekday}, {} de {month} de {}", date.day(), date.year())
}
