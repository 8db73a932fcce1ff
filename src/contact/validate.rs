use regex::Regex;
use std::sync::LazyLock;

use super::model::{SERVICE_CATALOG, Submission};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

const MAX_NAME: usize = 200;
const MAX_EMAIL: usize = 254;
const MAX_MESSAGE: usize = 10_000;
const MAX_LABEL: usize = 100;

/// Check a submission before it is relayed. Returns every problem found, in field order.
pub fn validate(submission: &Submission) -> Result<(), Vec<String>> {
    let mut problems = Vec::new();

    let name = submission.name.trim();
    if name.is_empty() {
        problems.push("Name is required".to_string());
    } else if name.chars().count() > MAX_NAME {
        problems.push(format!("Name must be at most {MAX_NAME} characters"));
    }

    let email = submission.email.trim();
    if email.is_empty() {
        problems.push("Email is required".to_string());
    } else if email.len() > MAX_EMAIL || !EMAIL_RE.is_match(email) {
        problems.push("Please enter a valid email address".to_string());
    }

    let message = submission.message.trim();
    if message.is_empty() {
        problems.push("Message is required".to_string());
    } else if message.chars().count() > MAX_MESSAGE {
        problems.push(format!("Message must be at most {MAX_MESSAGE} characters"));
    }

    if submission.services.len() > SERVICE_CATALOG.len() {
        problems.push("Too many services selected".to_string());
    }
    if submission
        .services
        .iter()
        .any(|s| s.trim().is_empty() || s.chars().count() > MAX_LABEL)
    {
        problems.push("Invalid service label".to_string());
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(problems)
    }
}
