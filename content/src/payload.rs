//! Payload shape validation.
//!
//! There is no shared schema across endpoints; each section owns its
//! expected shape and validates it here, entry by entry. Malformed entries
//! are filtered with a warning rather than failing the section, but a
//! payload whose required key is missing, empty, or yields no valid entry
//! at all is an error: rendering an empty section would look like success.

use serde_json::Value;
use thiserror::Error;

use prospectus_types::{
    Contact, FooterContact, ImportantDate, QuickLink, VisitingHour, escape_html,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// The required key is missing or not the expected container type.
    #[error("payload key {key:?} is missing or malformed")]
    InvalidShape { key: &'static str },
    /// The container is present but has no entries.
    #[error("payload key {key:?} is empty")]
    Empty { key: &'static str },
    /// Entries were present but none survived validation.
    #[error("payload key {key:?} has no valid entries")]
    NoValidEntries { key: &'static str },
}

fn required_array<'a>(payload: &'a Value, key: &'static str) -> Result<&'a [Value], PayloadError> {
    let entries = payload
        .get(key)
        .and_then(Value::as_array)
        .ok_or(PayloadError::InvalidShape { key })?;
    if entries.is_empty() {
        return Err(PayloadError::Empty { key });
    }
    Ok(entries)
}

fn collect_entries<T>(
    payload: &Value,
    key: &'static str,
    parse: impl Fn(&Value) -> Option<T>,
) -> Result<Vec<T>, PayloadError> {
    let entries = required_array(payload, key)?;
    let valid: Vec<T> = entries.iter().filter_map(|entry| {
        let parsed = parse(entry);
        if parsed.is_none() {
            tracing::warn!(key, "dropping malformed payload entry");
        }
        parsed
    }).collect();
    if valid.is_empty() {
        return Err(PayloadError::NoValidEntries { key });
    }
    Ok(valid)
}

fn non_blank_string(entry: &Value) -> Option<String> {
    let text = entry.as_str()?.trim();
    if text.is_empty() {
        return None;
    }
    Some(escape_html(text).into_owned())
}

/// `{"requirements": ["..."]}` - escaped, blank entries dropped.
pub fn parse_requirements(payload: &Value) -> Result<Vec<String>, PayloadError> {
    collect_entries(payload, "requirements", non_blank_string)
}

/// `{"steps": ["..."]}` - escaped, blank entries dropped.
pub fn parse_process_steps(payload: &Value) -> Result<Vec<String>, PayloadError> {
    collect_entries(payload, "steps", non_blank_string)
}

/// `{"dates": [{"title", "date"}]}`.
pub fn parse_important_dates(payload: &Value) -> Result<Vec<ImportantDate>, PayloadError> {
    collect_entries(payload, "dates", ImportantDate::from_value)
}

/// `{"contacts": [{...}]}` - lenient per-entry contract, see
/// [`Contact::from_value`].
pub fn parse_contacts(payload: &Value) -> Result<Vec<Contact>, PayloadError> {
    collect_entries(payload, "contacts", Contact::from_value)
}

/// `{"hours": [{"day", "time"}]}`.
pub fn parse_visiting_hours(payload: &Value) -> Result<Vec<VisitingHour>, PayloadError> {
    collect_entries(payload, "hours", VisitingHour::from_value)
}

/// `{"quickContacts": [{"link", "title", "description", "icon"?}]}`.
pub fn parse_quick_links(payload: &Value) -> Result<Vec<QuickLink>, PayloadError> {
    collect_entries(payload, "quickContacts", QuickLink::from_value)
}

/// `{"footerContact": {"email"?, "phone"?, "address"?}}` - at least one
/// field must be present.
pub fn parse_footer_contact(payload: &Value) -> Result<FooterContact, PayloadError> {
    let key = "footerContact";
    let entry = payload.get(key).ok_or(PayloadError::InvalidShape { key })?;
    FooterContact::from_value(entry).ok_or(PayloadError::InvalidShape { key })
}
