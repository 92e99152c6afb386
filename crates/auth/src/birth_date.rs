//! Birth date input adapter: structured picker plus manual `DD/MM/AAAA` text.

use chrono::NaiveDate;

use pontual_core::{DomainError, DomainResult};

/// Display/parse format for manually typed dates (day/month/year order).
pub const BIRTH_DATE_FORMAT: &str = "%d/%m/%Y";

fn min_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Dual-input birth date field.
///
/// The structured value only changes when the typed text parses as a real
/// calendar date (`31/02/2024` does not) or when a date is picked from the
/// calendar. Unparseable text is retained in the field so the user can keep
/// editing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BirthDateField {
    text: String,
    value: Option<NaiveDate>,
}

impl BirthDateField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record manually typed text. The structured value updates only when the
    /// text parses as a valid calendar date in day/month/year order.
    pub fn set_text(&mut self, input: &str) {
        self.text = input.to_owned();
        if input.is_empty() {
            return;
        }
        if let Ok(date) = NaiveDate::parse_from_str(input, BIRTH_DATE_FORMAT) {
            self.value = Some(date);
        }
    }

    /// Record a calendar pick. The picker range is 1900-01-01 up to `today`;
    /// anything outside is rejected. A successful pick rewrites the text in
    /// the display format.
    pub fn pick(&mut self, date: NaiveDate, today: NaiveDate) -> DomainResult<()> {
        if date > today || date < min_birth_date() {
            return Err(DomainError::validation(
                "data de nascimento fora do intervalo do calendário",
            ));
        }
        self.value = Some(date);
        self.text = date.format(BIRTH_DATE_FORMAT).to_string();
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> Option<NaiveDate> {
        self.value
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.value = None;
    }
}
