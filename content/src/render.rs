//! Pure HTML templates for section content.
//!
//! Every function here maps validated data to a markup fragment; nothing
//! touches the page or the network. Text content arrives pre-escaped from
//! the payload layer, so templates only assemble structure. The one
//! exception is caller-supplied message text (loading and error states),
//! which is escaped here.

use std::fmt::Write;

use prospectus_types::{
    Contact, FooterContact, ImportantDate, QuickLink, Section, VisitingHour, escape_html,
};

/// Static tile appended after every quick-contact render, API or not.
const APPLY_FOR_ADMISSION_TILE: &str = r#"<a href="admissions.html" class="quick-contact-item">
    <div class="quick-icon">📝</div>
    <h4>Apply for Admission</h4>
    <p>Start your application</p>
</a>"#;

/// `<ul>` of admission requirements.
#[must_use]
pub fn requirements_list(items: &[String]) -> String {
    list("ul", items)
}

/// `<ol>` of application process steps.
#[must_use]
pub fn process_steps(items: &[String]) -> String {
    list("ol", items)
}

fn list(tag: &str, items: &[String]) -> String {
    let mut out = format!("<{tag}>");
    for item in items {
        let _ = write!(out, "<li>{item}</li>");
    }
    let _ = write!(out, "</{tag}>");
    out
}

/// `<ul>` of important dates with bolded titles.
#[must_use]
pub fn important_dates(dates: &[ImportantDate]) -> String {
    let mut out = String::from("<ul>");
    for entry in dates {
        let _ = write!(
            out,
            "<li><strong>{}:</strong> {}</li>",
            entry.title, entry.date
        );
    }
    out.push_str("</ul>");
    out
}

/// Card grid of contacts with conditional detail rows.
#[must_use]
pub fn contact_cards(contacts: &[Contact]) -> String {
    let mut out = String::new();
    for contact in contacts {
        let _ = write!(
            out,
            r#"<div class="contact-card {}"><div class="contact-icon">{}</div><h3>{}</h3><div class="contact-details">"#,
            contact.type_class, contact.icon, contact.title
        );
        if let Some(name) = &contact.name {
            let _ = write!(out, "<p><strong>Name:</strong> {name}</p>");
        }
        if let Some(email) = &contact.email {
            let _ = write!(
                out,
                r#"<p><strong>Email:</strong> <a href="mailto:{email}">{email}</a></p>"#
            );
        }
        for phone in [&contact.phone, &contact.phone2].into_iter().flatten() {
            let _ = write!(
                out,
                r#"<p><strong>Phone:</strong> <a href="tel:{phone}">{phone}</a></p>"#
            );
        }
        let _ = write!(
            out,
            r#"</div><p class="contact-description">{}</p></div>"#,
            contact.description
        );
    }
    out
}

/// Visiting hours block with its heading.
#[must_use]
pub fn visiting_hours(hours: &[VisitingHour]) -> String {
    let mut out = String::from("<h4>Visiting Hours</h4>");
    for entry in hours {
        let _ = write!(
            out,
            "<p><strong>{}:</strong> {}</p>",
            entry.day, entry.time
        );
    }
    out
}

/// Quick-contact tiles; the apply-for-admission tile is always appended
/// after the API-supplied items.
#[must_use]
pub fn quick_contact(links: &[QuickLink]) -> String {
    let mut out = String::new();
    for link in links {
        let _ = write!(
            out,
            r#"<a href="{}" class="quick-contact-item"><div class="quick-icon">{}</div><h4>{}</h4><p>{}</p></a>"#,
            link.link, link.icon, link.title, link.description
        );
    }
    out.push_str(APPLY_FOR_ADMISSION_TILE);
    out
}

/// Footer contact rows; absent fields render nothing.
#[must_use]
pub fn footer_contact(contact: &FooterContact) -> String {
    let mut out = String::new();
    if let Some(email) = &contact.email {
        let _ = write!(out, "<p>Email: {email}</p>");
    }
    if let Some(phone) = &contact.phone {
        let _ = write!(out, "<p>Phone: {phone}</p>");
    }
    if let Some(address) = &contact.address {
        let _ = write!(out, "<p>Address: {address}</p>");
    }
    out
}

/// Spinner shown while a section loads.
#[must_use]
pub fn loading_placeholder(message: &str) -> String {
    format!(
        r#"<div class="loading-placeholder"><div class="loading-spinner"></div><p class="loading-text">{}</p></div>"#,
        escape_html(message)
    )
}

/// Error state with a manual retry affordance.
///
/// The button carries the section slug in `data-retry`; the embedding page
/// resolves it through `Section::from_slug` and re-runs that loader.
#[must_use]
pub fn error_state(section: Section, message: &str) -> String {
    format!(
        r#"<div class="error-message"><div class="error-icon">⚠️</div><p class="error-text">{}</p><button class="retry-button" data-retry="{}">🔄 Try Again</button></div>"#,
        escape_html(message),
        section.slug()
    )
}
