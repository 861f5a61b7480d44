//! Event kinds, tool names and other closed vocabularies of the hook protocol.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HookError;

/// The lifecycle point that triggered a hook invocation.
///
/// Wire names are exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HookEventKind {
    PreToolUse,
    PostToolUse,
    Notification,
    UserPromptSubmit,
    Stop,
    SubagentStop,
    PreCompact,
}

impl HookEventKind {
    /// Every kind, in lifecycle order.
    pub const ALL: [Self; 7] = [
        Self::PreToolUse,
        Self::PostToolUse,
        Self::Notification,
        Self::UserPromptSubmit,
        Self::Stop,
        Self::SubagentStop,
        Self::PreCompact,
    ];

    /// The `hook_event_name` string the host sends for this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PreToolUse => "PreToolUse",
            Self::PostToolUse => "PostToolUse",
            Self::Notification => "Notification",
            Self::UserPromptSubmit => "UserPromptSubmit",
            Self::Stop => "Stop",
            Self::SubagentStop => "SubagentStop",
            Self::PreCompact => "PreCompact",
        }
    }

    /// Look up a kind by its exact wire name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// Fields that must be present for this kind, beyond the common ones.
    #[must_use]
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::PreToolUse => &["tool_name", "tool_input"],
            Self::PostToolUse => &["tool_name", "tool_input", "tool_response"],
            Self::Notification => &["message"],
            Self::UserPromptSubmit => &["prompt"],
            Self::Stop | Self::SubagentStop => &["stop_hook_active"],
            Self::PreCompact => &["trigger"],
        }
    }
}

impl fmt::Display for HookEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookEventKind {
    type Err = HookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| HookError::InvalidHookType(s.to_string()))
    }
}

/// Tools Claude Code is known to invoke.
///
/// Names outside the catalogue (including MCP tools such as
/// `mcp__github__create_issue`) are kept verbatim in [`ToolName::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ToolName {
    Task,
    Bash,
    Glob,
    Grep,
    #[allow(clippy::upper_case_acronyms)]
    LS,
    Read,
    Edit,
    MultiEdit,
    Write,
    NotebookRead,
    NotebookEdit,
    WebFetch,
    WebSearch,
    TodoWrite,
    ExitPlanMode,
    Other(String),
}

impl ToolName {
    /// The tool name as the host spells it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Task => "Task",
            Self::Bash => "Bash",
            Self::Glob => "Glob",
            Self::Grep => "Grep",
            Self::LS => "LS",
            Self::Read => "Read",
            Self::Edit => "Edit",
            Self::MultiEdit => "MultiEdit",
            Self::Write => "Write",
            Self::NotebookRead => "NotebookRead",
            Self::NotebookEdit => "NotebookEdit",
            Self::WebFetch => "WebFetch",
            Self::WebSearch => "WebSearch",
            Self::TodoWrite => "TodoWrite",
            Self::ExitPlanMode => "ExitPlanMode",
            Self::Other(name) => name,
        }
    }

    /// Whether this tool writes to the file system.
    #[must_use]
    pub fn is_file_mutation(&self) -> bool {
        matches!(
            self,
            Self::Write | Self::Edit | Self::MultiEdit | Self::NotebookEdit
        )
    }

    /// Whether this is an MCP server tool (`mcp__<server>__<tool>`).
    #[must_use]
    pub fn is_mcp(&self) -> bool {
        matches!(self, Self::Other(name) if name.starts_with("mcp__"))
    }
}

impl From<&str> for ToolName {
    fn from(name: &str) -> Self {
        match name {
            "Task" => Self::Task,
            "Bash" => Self::Bash,
            "Glob" => Self::Glob,
            "Grep" => Self::Grep,
            "LS" => Self::LS,
            "Read" => Self::Read,
            "Edit" => Self::Edit,
            "MultiEdit" => Self::MultiEdit,
            "Write" => Self::Write,
            "NotebookRead" => Self::NotebookRead,
            "NotebookEdit" => Self::NotebookEdit,
            "WebFetch" => Self::WebFetch,
            "WebSearch" => Self::WebSearch,
            "TodoWrite" => Self::TodoWrite,
            "ExitPlanMode" => Self::ExitPlanMode,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ToolName {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<ToolName> for String {
    fn from(name: ToolName) -> Self {
        match name {
            ToolName::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What started a transcript compaction.
///
/// Values the host may add later are kept verbatim in
/// [`CompactTrigger::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CompactTrigger {
    /// Requested by the user with `/compact`, possibly with instructions.
    Manual,
    /// Started by Claude Code because the context window is full.
    Auto,
    Other(String),
}

impl CompactTrigger {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Manual => "manual",
            Self::Auto => "auto",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for CompactTrigger {
    fn from(name: &str) -> Self {
        match name {
            "manual" => Self::Manual,
            "auto" => Self::Auto,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for CompactTrigger {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<CompactTrigger> for String {
    fn from(trigger: CompactTrigger) -> Self {
        match trigger {
            CompactTrigger::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for CompactTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
