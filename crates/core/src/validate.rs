//! Field-level validation layer.
//!
//! Each form defines one declarative rule-set (`static [TextRule]`) applied
//! against its concrete input struct before any business check runs. Rules are
//! pure; the only output is the per-field error list.

use core::fmt;

/// A single per-field validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Stable field name, matching the input struct field.
    pub field: &'static str,
    /// Human-readable message, surfaced inline next to the field.
    pub message: String,
}

/// Ordered collection of field failures for one submission attempt.
///
/// An empty collection means the input passed; a non-empty one blocks
/// submission entirely (the business flow is never reached).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// First message recorded for `field`, if any.
    pub fn first_for(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// `Ok(())` when empty, `Err(self)` otherwise.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Restricted character sets a text field may be limited to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// Letters, digits and underscore (usernames).
    Identifier,
    /// ASCII digits only (CPF).
    Digits,
}

impl Charset {
    pub fn allows(self, c: char) -> bool {
        match self {
            Charset::Identifier => c.is_ascii_alphanumeric() || c == '_',
            Charset::Digits => c.is_ascii_digit(),
        }
    }
}

/// Declarative rule for one text field: minimum length plus an optional
/// charset restriction. Rule-sets are defined once as `static` data per form.
#[derive(Debug, Clone, Copy)]
pub struct TextRule {
    pub field: &'static str,
    pub min_len: usize,
    /// Message when the value is shorter than `min_len`.
    pub too_short: &'static str,
    /// Charset restriction and its message, when the field has one.
    pub charset: Option<(Charset, &'static str)>,
}

impl TextRule {
    /// Check `value`, appending at most one failure per violated constraint.
    ///
    /// The length check short-circuits the charset check, mirroring how the
    /// rules are surfaced one at a time in the form.
    pub fn check(&self, value: &str, errors: &mut FieldErrors) {
        if value.chars().count() < self.min_len {
            errors.push(self.field, self.too_short);
            return;
        }
        if let Some((charset, message)) = self.charset {
            if !value.chars().all(|c| charset.allows(c)) {
                errors.push(self.field, message);
            }
        }
    }
}

/// Apply a whole rule-set against resolved field values.
///
/// `values` must be in the same order as `rules`; the pairing is by index.
pub fn check_all(rules: &[TextRule], values: &[&str], errors: &mut FieldErrors) {
    debug_assert_eq!(rules.len(), values.len());
    for (rule, value) in rules.iter().zip(values) {
        rule.check(value, errors);
    }
}

/// Standard email shape: exactly one `@`, non-empty local part, dotted
/// domain, no whitespace, no empty domain labels.
pub fn is_email_shape(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    if !domain.contains('.') {
        return false;
    }
    !(domain.starts_with('.') || domain.ends_with('.') || domain.contains(".."))
}

#[cfg(test)]
mod tests {
    use super::*;

    static USERNAME_RULE: TextRule = TextRule {
        field: "username",
        min_len: 3,
        too_short: "too short",
        charset: Some((Charset::Identifier, "bad charset")),
    };

    #[test]
    fn text_rule_accepts_valid_value() {
        let mut errors = FieldErrors::new();
        USERNAME_RULE.check("maria_01", &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn text_rule_reports_short_value() {
        let mut errors = FieldErrors::new();
        USERNAME_RULE.check("ab", &mut errors);
        assert_eq!(errors.first_for("username"), Some("too short"));
    }

    #[test]
    fn length_check_short_circuits_charset_check() {
        let mut errors = FieldErrors::new();
        USERNAME_RULE.check("a!", &mut errors);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first_for("username"), Some("too short"));
    }

    #[test]
    fn text_rule_reports_charset_violation() {
        let mut errors = FieldErrors::new();
        USERNAME_RULE.check("maria santos", &mut errors);
        assert_eq!(errors.first_for("username"), Some("bad charset"));
    }

    #[test]
    fn digits_charset_rejects_everything_but_ascii_digits() {
        assert!(Charset::Digits.allows('7'));
        assert!(!Charset::Digits.allows('a'));
        assert!(!Charset::Digits.allows('.'));
        assert!(!Charset::Digits.allows('²'));
    }

    #[test]
    fn empty_errors_convert_to_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn non_empty_errors_convert_to_err() {
        let mut errors = FieldErrors::new();
        errors.push("email", "Email inválido");
        let err = errors.into_result().unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.to_string(), "email: Email inválido");
    }

    #[test]
    fn email_shape_accepts_common_addresses() {
        for ok in [
            "a@b.co",
            "maria.santos@empresa.com.br",
            "user_1@example.com",
        ] {
            assert!(is_email_shape(ok), "{ok} should be accepted");
        }
    }

    #[test]
    fn email_shape_rejects_malformed_addresses() {
        for bad in [
            "",
            "plainaddress",
            "@example.com",
            "user@",
            "user@@example.com",
            "user@example",
            "user@.example.com",
            "user@example.com.",
            "user@exa..mple.com",
            "user name@example.com",
        ] {
            assert!(!is_email_shape(bad), "{bad:?} should be rejected");
        }
    }
}
