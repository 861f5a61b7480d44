//! cchooks - typed event contexts and response builders for Claude Code hooks.
//!
//! A hook program reads one JSON event from stdin, classifies it into a
//! [`HookContext`], and answers through the builder for that event kind:
//!
//! ```no_run
//! use cchooks::prelude::*;
//!
//! let mut emitter = Emitter::stdio();
//! let ctx = match safe_create_context(std::io::stdin().lock(), &mut emitter, ErrorPolicy::default()) {
//!     Ok(ctx) => ctx,
//!     Err(exit) => exit.terminate(),
//! };
//!
//! let exit = match ctx {
//!     HookContext::PreToolUse(c) if c.file_path().is_some_and(|p| p.ends_with(".env")) => {
//!         c.stdio_output().deny("Refusing to touch .env files", false)
//!     }
//!     HookContext::PreToolUse(c) => c.stdio_output().allow("ok", true),
//!     _ => Exit::SUCCESS,
//! };
//! exit.terminate();
//! ```

pub mod config;
pub mod contexts;
pub mod display;
pub mod error;
pub mod event;
pub mod exit;
pub mod fields;
pub mod handlers;
pub mod input;
pub mod logging;
pub mod response;

pub use contexts::{classify, create_context, EventContext, HookContext, HookOutput};
pub use error::{HookError, ParseError, ValidationError};
pub use event::{CompactTrigger, HookEventKind, ToolName};
pub use exit::{Emitter, Exit};
pub use handlers::safe_create_context;

/// The types most hook programs need.
pub mod prelude {
    pub use crate::config::{ConfigLoader, ErrorPolicy, HookConfig};
    pub use crate::contexts::{
        classify, create_context, EventContext, HookContext, HookOutput, NotificationContext,
        PostToolUseContext, PreCompactContext, PreToolUseContext, StopContext,
        SubagentStopContext, UserPromptSubmitContext,
    };
    pub use crate::error::HookError;
    pub use crate::event::{CompactTrigger, HookEventKind, ToolName};
    pub use crate::exit::{Emitter, Exit};
    pub use crate::handlers::safe_create_context;
}
