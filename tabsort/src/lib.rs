// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler items for convenience
pub use handlers::{
    ClipboardOutcome, ClipboardSink, GroupArgs, PublishError, PublishOutcome, SaveOutcome,
    SavePrompt, publish, resolve_save_path, run_group,
};
