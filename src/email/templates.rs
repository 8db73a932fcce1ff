use askama::Template;
use chrono::{DateTime, Utc};

use crate::contact::model::Submission;

#[derive(Template)]
#[template(path = "emails/contact.html")]
struct ContactHtmlTemplate<'a> {
    name: &'a str,
    email: &'a str,
    services: String,
    message_lines: Vec<&'a str>,
    received: String,
}

#[derive(Template)]
#[template(path = "emails/contact.txt")]
struct ContactTextTemplate<'a> {
    name: &'a str,
    email: &'a str,
    services: String,
    message: &'a str,
    received: String,
}

fn received(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// User text is escaped by the template; message newlines become `<br>`.
pub fn render_contact_html(
    submission: &Submission,
    received_at: DateTime<Utc>,
) -> askama::Result<String> {
    ContactHtmlTemplate {
        name: submission.name.trim(),
        email: submission.email.trim(),
        services: submission.services_line(),
        message_lines: submission.message.lines().collect(),
        received: received(received_at),
    }
    .render()
}

pub fn render_contact_text(
    submission: &Submission,
    received_at: DateTime<Utc>,
) -> askama::Result<String> {
    ContactTextTemplate {
        name: submission.name.trim(),
        email: submission.email.trim(),
        services: submission.services_line(),
        message: &submission.message,
        received: received(received_at),
    }
    .render()
}
