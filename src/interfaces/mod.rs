// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod rewrite_handler;

pub use rewrite_handler::{
    LoggingRewriteHandler, NoOpRewriteHandler, RewriteEvent, RewriteHandler,
};
