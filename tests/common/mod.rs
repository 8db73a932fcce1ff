#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use folio::config::{Config, SmtpConfig, TlsMode};
use folio::email::{MailError, Mailer, OutboundEmail};
use folio::state::SharedState;

pub const CONTACT_TO: &str = "owner@portfolio.test";

/// Records every message it is asked to deliver.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutboundEmail>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

/// Behaves like a provider rejecting the account credentials.
#[derive(Default)]
pub struct RejectingMailer {
    pub attempts: AtomicUsize,
}

impl RejectingMailer {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Mailer for RejectingMailer {
    async fn send(&self, _email: OutboundEmail) -> Result<(), MailError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(MailError::Transport(
            "535 5.7.8 Username and Password not accepted".to_string(),
        ))
    }
}

/// Never finishes within any reasonable timeout.
pub struct HangingMailer;

#[async_trait]
impl Mailer for HangingMailer {
    async fn send(&self, _email: OutboundEmail) -> Result<(), MailError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(())
    }
}

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        contact_to: CONTACT_TO.to_string(),
        smtp: SmtpConfig {
            host: "localhost".to_string(),
            port: 2525,
            user: "relay@portfolio.test".to_string(),
            pass: "secret".to_string(),
            from: "relay@portfolio.test".to_string(),
            tls: TlsMode::None,
        },
        mail_timeout_secs: 1,
        max_body_size: 65_536,
        trusted_proxies: vec![],
        cors_origins: vec![],
        rate_limit: 0,
        rate_window_secs: 60,
        honeypot_field: Some("website".to_string()),
        site_dir: PathBuf::from("public"),
        log_level: "warn".to_string(),
    }
}

/// A running relay bound to a random local port.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub state: SharedState,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a JSON payload to the relay, return (body, status).
    pub async fn send_json(&self, payload: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/send-email"))
            .json(payload)
            .send()
            .await
            .expect("send-email request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST a form-urlencoded payload to the relay, return (body, status).
    pub async fn send_form(&self, data: &[(&str, &str)]) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/send-email"))
            .form(data)
            .send()
            .await
            .expect("send-email form request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

pub async fn spawn_app(mailer: Arc<dyn Mailer>) -> TestApp {
    spawn_app_with(test_config(), mailer).await
}

pub async fn spawn_app_with(config: Config, mailer: Arc<dyn Mailer>) -> TestApp {
    let (app, state) = folio::build_app(config, mailer);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
        state,
    }
}

pub fn amy() -> Value {
    json!({
        "name": "Amy",
        "email": "a@x.com",
        "message": "Hello",
        "services": ["Web Development"]
    })
}
