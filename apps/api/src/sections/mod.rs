// Listing endpoints for the portfolio sections. Each paged handler builds a
// fresh pagination engine over the shared content for the lifetime of one
// request — no cursor state survives between requests.

pub mod handlers;
