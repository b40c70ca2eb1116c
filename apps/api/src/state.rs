use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use crate::config::Config;
use crate::contact::mailer::Mailer;
use crate::models::PortfolioContent;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// The portfolio document. Static for the process lifetime; every listing
    /// handler builds its page window from this.
    pub content: Arc<PortfolioContent>,
    /// Pluggable contact-mail backend. Default: ResendMailer. LogMailer when
    /// no RESEND_API_KEY is configured.
    pub mailer: Arc<dyn Mailer>,
    /// Index of the project currently under the spotlight, published by the
    /// rotation task.
    pub spotlight: Arc<AtomicUsize>,
}
