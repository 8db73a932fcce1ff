use std::sync::Arc;

use crate::config::Config;
use crate::email::Mailer;
use crate::rate_limit::SubmissionRateLimiter;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub mailer: Arc<dyn Mailer>,
    pub submission_limiter: SubmissionRateLimiter,
}
