//! Field specifications for the three site forms.
//!
//! Each form is a flat table of [`FieldSpec`]s: the field's submitted name,
//! the validation predicate it uses, and the inline messages shown next to
//! it. The tables drive both submit-time validation (every field) and
//! blur-time validation (single field, lenient about emptiness).

use chrono::NaiveDate;

use prospectus_types::FormKind;

use crate::validate;

/// Which predicate a field validates with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Email,
    /// Email that may be left blank (guardian email on the SHS 1 form).
    OptionalEmail,
    Phone,
    DateOfBirth,
    BeceAggregate,
    BeceIndex,
    Address,
    Message,
    /// A `<select>`: any non-empty choice is valid.
    Selection,
    /// A consent checkbox: must be checked.
    Consent,
}

/// One field of a form.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Name the field is submitted under (also its container id on the page).
    pub name: &'static str,
    pub kind: FieldKind,
    /// Message when the field is left empty, where that differs from the
    /// invalid message.
    pub empty_message: Option<&'static str>,
    /// Message when the value fails the predicate.
    pub invalid_message: &'static str,
}

impl FieldSpec {
    const fn new(name: &'static str, kind: FieldKind, invalid_message: &'static str) -> Self {
        Self {
            name,
            kind,
            empty_message: None,
            invalid_message,
        }
    }

    const fn with_empty_message(mut self, message: &'static str) -> Self {
        self.empty_message = Some(message);
        self
    }

    /// Message shown when the submitted value is empty.
    #[must_use]
    pub const fn message_for_empty(&self) -> &'static str {
        match self.empty_message {
            Some(message) => message,
            None => self.invalid_message,
        }
    }

    /// Validate for submission. Returns the error message to show inline,
    /// or `None` when the field passes.
    #[must_use]
    pub fn validate(&self, value: &str, today: NaiveDate) -> Option<&'static str> {
        let value = value.trim();
        match self.kind {
            FieldKind::OptionalEmail if value.is_empty() => None,
            FieldKind::Consent => (!is_checked(value)).then_some(self.message_for_empty()),
            _ if value.is_empty() => Some(self.message_for_empty()),
            _ => (!self.predicate_holds(value, today)).then_some(self.invalid_message),
        }
    }

    /// Validate on blur. Empty plain fields clear their error instead of
    /// showing one; empty selections still complain.
    #[must_use]
    pub fn validate_on_blur(&self, value: &str, today: NaiveDate) -> Option<&'static str> {
        let value = value.trim();
        match self.kind {
            FieldKind::Consent => None,
            FieldKind::Selection => value.is_empty().then_some(self.message_for_empty()),
            _ if value.is_empty() => None,
            _ => (!self.predicate_holds(value, today)).then_some(self.invalid_message),
        }
    }

    fn predicate_holds(&self, value: &str, today: NaiveDate) -> bool {
        match self.kind {
            FieldKind::Name => validate::is_valid_name(value),
            FieldKind::Email | FieldKind::OptionalEmail => validate::is_valid_email(value),
            FieldKind::Phone => validate::is_valid_phone(value),
            FieldKind::DateOfBirth => validate::is_valid_date_of_birth(value, today),
            FieldKind::BeceAggregate => validate::is_valid_bece_aggregate(value),
            FieldKind::BeceIndex => validate::is_valid_bece_index(value),
            FieldKind::Address => validate::is_valid_address(value),
            FieldKind::Message => validate::is_valid_message(value),
            FieldKind::Selection => true,
            FieldKind::Consent => is_checked(value),
        }
    }
}

/// Checkbox semantics: any submitted value except an explicit "false"
/// counts as checked (browsers send "on").
fn is_checked(value: &str) -> bool {
    !value.is_empty() && !value.eq_ignore_ascii_case("false")
}

const ADMISSION_FIELDS: &[FieldSpec] = &[
    FieldSpec::new(
        "fullName",
        FieldKind::Name,
        "Please enter a valid full name (at least 2 characters)",
    ),
    FieldSpec::new("email", FieldKind::Email, "Please enter a valid email address"),
    FieldSpec::new(
        "phone",
        FieldKind::Phone,
        "Please enter a valid phone number (at least 10 digits)",
    ),
    FieldSpec::new(
        "dateOfBirth",
        FieldKind::DateOfBirth,
        "Age must be between 15 and 25 years",
    )
    .with_empty_message("Please select your date of birth"),
    FieldSpec::new(
        "jhsAttended",
        FieldKind::Name,
        "Please enter the name of your Junior High School",
    ),
    FieldSpec::new(
        "beceResults",
        FieldKind::BeceAggregate,
        "Please enter a valid BECE aggregate (6-30)",
    )
    .with_empty_message("Please enter your BECE aggregate results"),
    FieldSpec::new(
        "programme",
        FieldKind::Selection,
        "Please select a programme of interest",
    ),
    FieldSpec::new(
        "guardianName",
        FieldKind::Name,
        "Please enter guardian's full name (at least 2 characters)",
    ),
    FieldSpec::new(
        "guardianContact",
        FieldKind::Phone,
        "Please enter a valid guardian contact number",
    ),
    FieldSpec::new(
        "residentialAddress",
        FieldKind::Address,
        "Please enter a complete residential address (at least 10 characters)",
    ),
    FieldSpec::new(
        "termsConditions",
        FieldKind::Consent,
        "You must agree to the terms and conditions",
    ),
];

const SHS1_FIELDS: &[FieldSpec] = &[
    FieldSpec::new(
        "shs1FullName",
        FieldKind::Name,
        "Please enter a valid full name (at least 2 characters)",
    ),
    FieldSpec::new(
        "shs1Email",
        FieldKind::Email,
        "Please enter a valid email address",
    ),
    FieldSpec::new(
        "shs1Phone",
        FieldKind::Phone,
        "Please enter a valid phone number (at least 10 digits)",
    ),
    FieldSpec::new(
        "shs1DateOfBirth",
        FieldKind::DateOfBirth,
        "Age must be between 15 and 25 years",
    )
    .with_empty_message("Please select your date of birth"),
    FieldSpec::new("shs1Gender", FieldKind::Selection, "Please select your gender"),
    FieldSpec::new(
        "shs1JhsName",
        FieldKind::Name,
        "Please enter your Junior High School name",
    ),
    FieldSpec::new(
        "shs1JhsLocation",
        FieldKind::Name,
        "Please enter your JHS location",
    ),
    FieldSpec::new(
        "shs1BeceIndex",
        FieldKind::BeceIndex,
        "Please enter a valid 10-digit BECE index number",
    )
    .with_empty_message("Please enter your BECE index number"),
    FieldSpec::new(
        "shs1BeceAggregate",
        FieldKind::BeceAggregate,
        "Please enter a valid BECE aggregate (6-30)",
    )
    .with_empty_message("Please enter your BECE aggregate"),
    FieldSpec::new(
        "shs1Programme",
        FieldKind::Selection,
        "Please select a programme of interest",
    ),
    FieldSpec::new(
        "shs1GuardianName",
        FieldKind::Name,
        "Please enter guardian's full name (at least 2 characters)",
    ),
    FieldSpec::new(
        "shs1GuardianRelation",
        FieldKind::Selection,
        "Please select guardian's relationship",
    ),
    FieldSpec::new(
        "shs1GuardianPhone",
        FieldKind::Phone,
        "Please enter a valid guardian phone number",
    ),
    FieldSpec::new(
        "shs1GuardianEmail",
        FieldKind::OptionalEmail,
        "Please enter a valid guardian email address",
    ),
    FieldSpec::new(
        "shs1Address",
        FieldKind::Address,
        "Please enter a complete residential address (at least 10 characters)",
    ),
    FieldSpec::new("shs1Region", FieldKind::Selection, "Please select your region"),
    FieldSpec::new("shs1District", FieldKind::Name, "Please enter your district"),
    FieldSpec::new(
        "shs1Terms",
        FieldKind::Consent,
        "You must agree to the terms and conditions",
    ),
];

const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new(
        "contactName",
        FieldKind::Name,
        "Please enter a valid name (at least 2 characters)",
    ),
    FieldSpec::new(
        "contactEmail",
        FieldKind::Email,
        "Please enter a valid email address",
    ),
    FieldSpec::new("subject", FieldKind::Selection, "Please select a subject"),
    FieldSpec::new(
        "message",
        FieldKind::Message,
        "Please enter a message (at least 10 characters)",
    ),
];

/// The field table for a form.
#[must_use]
pub fn fields(form: FormKind) -> &'static [FieldSpec] {
    match form {
        FormKind::Admission => ADMISSION_FIELDS,
        FormKind::Shs1Admission => SHS1_FIELDS,
        FormKind::Contact => CONTACT_FIELDS,
    }
}

/// Look up one field of a form by its submitted name.
#[must_use]
pub fn field(form: FormKind, name: &str) -> Option<&'static FieldSpec> {
    fields(form).iter().find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).expect("fixed test date")
    }

    #[test]
    fn every_form_has_unique_field_names() {
        for form in FormKind::ALL {
            let specs = fields(form);
            for (i, a) in specs.iter().enumerate() {
                for b in &specs[i + 1..] {
                    assert_ne!(a.name, b.name, "duplicate field in {form:?}");
                }
            }
        }
    }

    #[test]
    fn empty_required_field_uses_the_empty_message() {
        let dob = field(FormKind::Admission, "dateOfBirth").expect("field");
        assert_eq!(
            dob.validate("", today()),
            Some("Please select your date of birth")
        );
        assert_eq!(
            dob.validate("2015-01-01", today()),
            Some("Age must be between 15 and 25 years")
        );
        assert_eq!(dob.validate("2008-01-01", today()), None);
    }

    #[test]
    fn optional_guardian_email_skips_when_blank() {
        let spec = field(FormKind::Shs1Admission, "shs1GuardianEmail").expect("field");
        assert_eq!(spec.validate("", today()), None);
        assert_eq!(
            spec.validate("not-an-email", today()),
            Some("Please enter a valid guardian email address")
        );
        assert_eq!(spec.validate("parent@mail.com", today()), None);
    }

    #[test]
    fn consent_requires_a_checked_box() {
        let spec = field(FormKind::Admission, "termsConditions").expect("field");
        assert_eq!(
            spec.validate("", today()),
            Some("You must agree to the terms and conditions")
        );
        assert_eq!(spec.validate("false", today()), spec.validate("", today()));
        assert_eq!(spec.validate("on", today()), None);
    }

    #[test]
    fn blur_is_lenient_about_empty_plain_fields() {
        let email = field(FormKind::Contact, "contactEmail").expect("field");
        assert_eq!(email.validate_on_blur("", today()), None);
        assert_eq!(
            email.validate_on_blur("nope", today()),
            Some("Please enter a valid email address")
        );

        // Selections still complain when cleared.
        let subject = field(FormKind::Contact, "subject").expect("field");
        assert_eq!(
            subject.validate_on_blur("", today()),
            Some("Please select a subject")
        );
        assert_eq!(subject.validate_on_blur("admissions", today()), None);
    }

    #[test]
    fn unknown_field_lookup_is_none() {
        assert!(field(FormKind::Contact, "fullName").is_none());
    }
}
