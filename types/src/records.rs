//! Content records delivered by the backend API.
//!
//! Each record type validates at construction from a raw JSON value:
//! required fields must be present and non-blank, optional fields render
//! conditionally, and every string is HTML-escaped on the way in. A record
//! that fails validation yields `None` and is filtered out by the payload
//! layer rather than failing the whole section.

use serde_json::Value;

use crate::escape_html;

fn text_field(value: &Value, key: &str) -> Option<String> {
    let raw = value.get(key)?.as_str()?.trim();
    if raw.is_empty() {
        return None;
    }
    Some(escape_html(raw).into_owned())
}

/// A contact card (department, office or person).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// CSS class hook for card styling.
    pub type_class: String,
    pub icon: String,
    pub title: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub phone2: Option<String>,
    pub description: String,
}

impl Contact {
    pub const DEFAULT_ICON: &'static str = "📞";

    /// Validate and sanitize one contact entry.
    ///
    /// Non-object entries are rejected; missing type/icon/title fall back to
    /// defaults and missing description renders empty, matching the lenient
    /// contract of the contacts endpoint.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        Some(Self {
            type_class: text_field(value, "type").unwrap_or_else(|| "default".to_string()),
            icon: text_field(value, "icon").unwrap_or_else(|| Self::DEFAULT_ICON.to_string()),
            title: text_field(value, "title").unwrap_or_else(|| "Contact".to_string()),
            name: text_field(value, "name"),
            email: text_field(value, "email"),
            phone: text_field(value, "phone"),
            phone2: text_field(value, "phone2"),
            description: text_field(value, "description").unwrap_or_default(),
        })
    }
}

/// A deadline or event on the admissions calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportantDate {
    pub title: String,
    pub date: String,
}

impl ImportantDate {
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        Some(Self {
            title: text_field(value, "title")?,
            date: text_field(value, "date")?,
        })
    }
}

/// One row of the visiting-hours table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitingHour {
    pub day: String,
    pub time: String,
}

impl VisitingHour {
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        Some(Self {
            day: text_field(value, "day")?,
            time: text_field(value, "time")?,
        })
    }
}

/// A quick-contact tile linking to another page or channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickLink {
    pub link: String,
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl QuickLink {
    /// Link, title and description are all required for a tile to render.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        Some(Self {
            link: text_field(value, "link")?,
            icon: text_field(value, "icon")
                .unwrap_or_else(|| Contact::DEFAULT_ICON.to_string()),
            title: text_field(value, "title")?,
            description: text_field(value, "description")?,
        })
    }
}

/// The footer contact block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterContact {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl FooterContact {
    /// At least one of email/phone/address must be present.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        let contact = Self {
            email: text_field(value, "email"),
            phone: text_field(value, "phone"),
            address: text_field(value, "address"),
        };
        if contact.email.is_none() && contact.phone.is_none() && contact.address.is_none() {
            return None;
        }
        Some(contact)
    }
}
