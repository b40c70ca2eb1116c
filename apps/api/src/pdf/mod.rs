// Experimental PDF-to-text extraction. CPU-bound parsing runs inside
// tokio::task::spawn_blocking.

pub mod extract;
pub mod handlers;
