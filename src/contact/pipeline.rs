use std::net::IpAddr;
use std::time::Duration;

use axum::http::HeaderMap;
use chrono::Utc;
use uuid::Uuid;

use crate::email::{MailError, OutboundEmail};
use crate::error::AppError;
use crate::state::SharedState;

use super::honeypot;
use super::metadata;
use super::parser;
use super::validate;

#[derive(Debug, PartialEq)]
pub enum Outcome {
    Sent,
    /// Honeypot tripped: reported as success, nothing sent.
    Discarded,
}

pub async fn run(
    state: &SharedState,
    headers: &HeaderMap,
    peer: IpAddr,
    body: &[u8],
) -> Result<Outcome, AppError> {
    let config = &state.config;
    let ip = metadata::client_ip(headers, peer, &config.trusted_proxies);

    if let Err(retry_after) =
        state
            .submission_limiter
            .check(ip, config.rate_limit, config.rate_window_secs)
    {
        tracing::warn!(%ip, retry_after, "Contact submission rate limited");
        return Err(AppError::RateLimited(retry_after));
    }

    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());
    let raw = parser::parse_body(content_type, body).map_err(AppError::BadRequest)?;

    if honeypot::is_spam(&raw, config.honeypot_field.as_deref()) {
        return Ok(Outcome::Discarded);
    }

    let submission = parser::into_submission(raw).map_err(AppError::BadRequest)?;

    if let Err(problems) = validate::validate(&submission) {
        tracing::debug!(%ip, ?problems, "Rejected contact submission");
        let first = problems.into_iter().next().unwrap_or_default();
        return Err(AppError::BadRequest(first));
    }

    let id = Uuid::now_v7();
    let email = OutboundEmail::contact(&submission, &config.contact_to, Utc::now())?;

    let timeout = Duration::from_secs(config.mail_timeout_secs);
    match tokio::time::timeout(timeout, state.mailer.send(email)).await {
        Ok(Ok(())) => {
            tracing::info!(%id, %ip, services = submission.services.len(), "Contact email sent");
            Ok(Outcome::Sent)
        }
        Ok(Err(e)) => Err(AppError::MailFailed(format!("submission {id}: {e}"))),
        Err(_) => Err(AppError::MailFailed(format!(
            "submission {id}: {}",
            MailError::Timeout(timeout)
        ))),
    }
}
