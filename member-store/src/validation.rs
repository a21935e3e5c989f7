//! Member form validation
//!
//! Centralized field validators and the composite form check. Each
//! validator returns the first failing rule's message for its field;
//! fields are independent, so one pass over a draft can report several
//! errors at once. An empty [`FieldErrors`] map means the candidate is
//! acceptable.
//!
//! These are pure functions: no I/O, no store access. Email uniqueness is
//! checked against the caller-supplied existing-emails set.

use std::collections::BTreeMap;

use shared::models::{EmergencyContactDraft, MemberDraft, MembershipType};

/// Form field name → error message. `BTreeMap` keeps iteration order
/// stable for reporting.
pub type FieldErrors = BTreeMap<&'static str, String>;

// ── Field limits ────────────────────────────────────────────────────

/// Person names: first, last, emergency contact
const MIN_NAME_LEN: usize = 2;
const MAX_NAME_LEN: usize = 50;

/// Digits after stripping formatting characters
const MIN_PHONE_DIGITS: usize = 10;
const MAX_PHONE_DIGITS: usize = 15;

/// Members outside this range are handled manually by the front desk
const MIN_AGE: i64 = 16;
const MAX_AGE: i64 = 80;

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == ' ' || c == '-' || c == '\''
}

/// Validate a person-name field. `field_label` is the display name used
/// in the message ("First name", "Emergency contact name", ...).
pub fn validate_name(name: &str, field_label: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_label} is required"));
    }
    if trimmed.chars().count() < MIN_NAME_LEN {
        return Some(format!(
            "{field_label} must be at least {MIN_NAME_LEN} characters long"
        ));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Some(format!(
            "{field_label} must be less than {MAX_NAME_LEN} characters"
        ));
    }
    if !trimmed.chars().all(is_name_char) {
        return Some(format!(
            "{field_label} can only contain letters, spaces, hyphens, and apostrophes"
        ));
    }
    None
}

/// `local@domain.tld` shape: no whitespace, a single `@`, a non-empty
/// local part, and a dot inside the domain.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Validate an email address and its uniqueness against the supplied
/// existing-emails set (entries lowercased, as produced by
/// [`crate::MemberStore::existing_emails`]).
pub fn validate_email(email: &str, existing_emails: &[String]) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("Email is required".to_string());
    }
    if !is_valid_email(trimmed) {
        return Some("Please enter a valid email address".to_string());
    }
    let lowered = trimmed.to_lowercase();
    if existing_emails.iter().any(|e| *e == lowered) {
        return Some("This email is already registered".to_string());
    }
    None
}

/// Digits remaining after stripping formatting characters.
fn strip_digits(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validate a phone field (member phone and emergency phone share the
/// same rule).
pub fn validate_phone(phone: &str) -> Option<String> {
    if phone.trim().is_empty() {
        return Some("Phone number is required".to_string());
    }
    let digits = strip_digits(phone);
    if digits.len() < MIN_PHONE_DIGITS {
        return Some(format!(
            "Phone number must be at least {MIN_PHONE_DIGITS} digits"
        ));
    }
    if digits.len() > MAX_PHONE_DIGITS {
        return Some(format!(
            "Phone number must be less than {MAX_PHONE_DIGITS} digits"
        ));
    }
    None
}

/// Validate the raw age string: integer in [16, 80].
pub fn validate_age(age: &str) -> Option<String> {
    let trimmed = age.trim();
    if trimmed.is_empty() {
        return Some("Age is required".to_string());
    }
    let Ok(age) = trimmed.parse::<i64>() else {
        return Some("Age must be a valid number".to_string());
    };
    if age < MIN_AGE {
        return Some(format!("Member must be at least {MIN_AGE} years old"));
    }
    if age > MAX_AGE {
        return Some(format!(
            "Please contact us directly for members over {MAX_AGE}"
        ));
    }
    None
}

/// Validate the raw membership type string against the catalog.
pub fn validate_membership_type(membership_type: &str) -> Option<String> {
    if membership_type.is_empty() {
        return Some("Membership type is required".to_string());
    }
    if membership_type.parse::<MembershipType>().is_err() {
        return Some("Please select a valid membership type".to_string());
    }
    None
}

/// Validate the emergency contact sub-record. Errors are keyed with the
/// `emergencyContact*` form field names.
pub fn validate_emergency_contact(contact: &EmergencyContactDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if let Some(msg) = validate_name(&contact.name, "Emergency contact name") {
        errors.insert("emergencyContactName", msg);
    }
    if contact.relationship.trim().is_empty() {
        errors.insert(
            "emergencyContactRelationship",
            "Relationship is required".to_string(),
        );
    }
    if let Some(msg) = validate_phone(&contact.phone) {
        errors.insert("emergencyContactPhone", msg);
    }
    errors
}

/// Validate a full member draft. Every field is evaluated; no rule
/// short-circuits the others.
pub fn validate_member_form(draft: &MemberDraft, existing_emails: &[String]) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if let Some(msg) = validate_name(&draft.first_name, "First name") {
        errors.insert("firstName", msg);
    }
    if let Some(msg) = validate_name(&draft.last_name, "Last name") {
        errors.insert("lastName", msg);
    }
    if let Some(msg) = validate_email(&draft.email, existing_emails) {
        errors.insert("email", msg);
    }
    if let Some(msg) = validate_phone(&draft.phone) {
        errors.insert("phone", msg);
    }
    if let Some(msg) = validate_age(&draft.age) {
        errors.insert("age", msg);
    }
    if let Some(msg) = validate_membership_type(&draft.membership_type) {
        errors.insert("membershipType", msg);
    }
    errors.extend(validate_emergency_contact(&draft.emergency_contact));
    errors
}

/// Display transform, not a validation rule: a raw value that strips to
/// exactly 10 digits renders as `(XXX) XXX-XXXX`; anything else passes
/// through unchanged.
pub fn format_phone_number(phone: &str) -> String {
    let digits = strip_digits(phone);
    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        phone.to_string()
    }
}
