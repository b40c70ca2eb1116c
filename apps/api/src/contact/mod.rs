// Contact form forwarding. The handler validates and hands off to a pluggable
// Mailer backend; nothing is persisted.

pub mod handlers;
pub mod mailer;
