//! Form validation run before any create or update reaches the service.
//!
//! The service only checks presence; shape rules live here. Every violation
//! is reported, in column order.

use std::fmt;

use crate::model::{Column, ContactForm};

const NAME_MAX: usize = 50;
const DETAIL_MAX: usize = 100;
const PHONE_MIN: usize = 10;
const PHONE_MAX: usize = 15;

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Offending field.
    pub field: Column,
    /// User-facing message.
    pub message: &'static str,
}

impl FieldError {
    const fn new(field: Column, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.as_str(), self.message)
    }
}

fn check_name(errors: &mut Vec<FieldError>, field: Column, value: &str, required: &'static str) {
    let length = value.trim().chars().count();
    if length == 0 {
        errors.push(FieldError::new(field, required));
    } else if length > NAME_MAX {
        errors.push(FieldError::new(field, "Max length is 50 characters"));
    }
}

fn check_detail(errors: &mut Vec<FieldError>, field: Column, value: &str) {
    if value.trim().chars().count() > DETAIL_MAX {
        errors.push(FieldError::new(field, "Max length is 100 characters"));
    }
}

fn check_phone(errors: &mut Vec<FieldError>, raw: &str) {
    let value = raw.trim();
    let length = value.chars().count();
    if length < PHONE_MIN {
        errors.push(FieldError::new(
            Column::PhoneNumber,
            "Phone number must be at least 10 characters",
        ));
    }
    if length > PHONE_MAX {
        errors.push(FieldError::new(
            Column::PhoneNumber,
            "Phone number can't exceed 15 characters",
        ));
    }
    if !value.chars().all(|c| c.is_ascii_digit()) || value.is_empty() {
        errors.push(FieldError::new(
            Column::PhoneNumber,
            "Phone number must contain only digits",
        ));
    }
}

fn is_domain_label(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Syntactic email check: `local@domain.tld` with a letter-only TLD of two
/// or more characters.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.trim().split_once('@') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-'".contains(c));
    let labels: Vec<&str> = domain.split('.').collect();
    let tld_ok = labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()));
    local_ok && labels.len() >= 2 && tld_ok && labels.iter().all(|l| is_domain_label(l))
}

/// Check every field of `form`.
///
/// # Errors
/// Returns all violations when any rule fails.
pub fn validate(form: &ContactForm) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    check_name(
        &mut errors,
        Column::FirstName,
        &form.first_name,
        "First name is required",
    );
    check_name(
        &mut errors,
        Column::LastName,
        &form.last_name,
        "Last name is required",
    );
    if !is_valid_email(&form.email) {
        errors.push(FieldError::new(Column::Email, "Invalid email address"));
    }
    check_phone(&mut errors, &form.phone_number);
    check_detail(&mut errors, Column::Company, &form.company);
    check_detail(&mut errors, Column::JobTitle, &form.job_title);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn form() -> ContactForm {
        ContactForm {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            email: "grace@navy.mil".into(),
            phone_number: "2025550143".into(),
            company: String::new(),
            job_title: "Rear Admiral".into(),
        }
    }

    fn messages(form: &ContactForm) -> Vec<&'static str> {
        validate(form)
            .err()
            .unwrap_or_default()
            .into_iter()
            .map(|e| e.message)
            .collect()
    }

    #[rstest]
    fn complete_form_passes(form: ContactForm) {
        assert_eq!(validate(&form), Ok(()));
    }

    #[rstest]
    fn empty_form_reports_every_violation() {
        assert_eq!(
            messages(&ContactForm::default()),
            vec![
                "First name is required",
                "Last name is required",
                "Invalid email address",
                "Phone number must be at least 10 characters",
                "Phone number must contain only digits",
            ]
        );
    }

    #[rstest]
    #[case("123456789", &["Phone number must be at least 10 characters"])]
    #[case("1234567890123456", &["Phone number can't exceed 15 characters"])]
    #[case("555-123-4567", &["Phone number must contain only digits"])]
    #[case("123456789012345", &[])]
    fn phone_rules(mut form: ContactForm, #[case] phone: &str, #[case] expected: &[&str]) {
        form.phone_number = phone.into();
        assert_eq!(messages(&form), expected);
    }

    #[rstest]
    #[case(Column::FirstName, 51, "Max length is 50 characters")]
    #[case(Column::LastName, 51, "Max length is 50 characters")]
    #[case(Column::Company, 101, "Max length is 100 characters")]
    #[case(Column::JobTitle, 101, "Max length is 100 characters")]
    fn length_bounds(
        mut form: ContactForm,
        #[case] field: Column,
        #[case] length: usize,
        #[case] message: &'static str,
    ) {
        form.set(field, "x".repeat(length));
        assert_eq!(
            validate(&form),
            Err(vec![FieldError { field, message }])
        );
    }

    #[rstest]
    #[case("ada@example.com", true)]
    #[case("first.last+tag@mail.example.co.uk", true)]
    #[case("  ada@example.com ", true)]
    #[case("ada", false)]
    #[case("ada@", false)]
    #[case("@example.com", false)]
    #[case("ada@example", false)]
    #[case("ada@example.c", false)]
    #[case("ada..b@example.com", false)]
    #[case("ada@-example.com", false)]
    #[case("ada@exa mple.com", false)]
    #[case("a@b@example.com", false)]
    fn email_syntax(#[case] email: &str, #[case] valid: bool) {
        assert_eq!(is_valid_email(email), valid);
    }
}
