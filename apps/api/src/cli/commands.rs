//! Command parsing and dispatch for CLI mode.
//!
//! Commands are matched case-insensitively against the fixed vocabulary the
//! site's help screen advertises. Dispatch produces printable output lines
//! plus an optional side effect for the client to act on (navigation, theme
//! switch, clear, exit, resume download). Unrecognized input is an ordinary
//! reply, never an error.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::PortfolioContent;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// A navigable section of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Intro,
    Projects,
    Skills,
    Experience,
    Education,
    Blogs,
    Contact,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Intro => "intro",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Blogs => "blogs",
            Section::Contact => "contact",
        };
        f.write_str(name)
    }
}

/// The two visual themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Retro,
    Sunset,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Retro => "retro",
            Theme::Sunset => "sunset",
        })
    }
}

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    /// Navigate to a section (everything except `skills`, which prints
    /// inline instead of navigating).
    Goto(Section),
    Skills,
    SetTheme(Theme),
    Resume,
    Clear,
    Exit,
    Unknown(String),
}

/// A client-side action requested by a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    Navigate { section: Section },
    SetTheme { theme: Theme },
    Clear,
    Exit,
    DownloadResume { url: String },
}

/// Output of one dispatched command: printable lines plus an optional effect.
#[derive(Debug, Clone, Serialize)]
pub struct CliReply {
    pub lines: Vec<String>,
    pub effect: Option<Effect>,
}

impl CliReply {
    fn lines_only(lines: Vec<String>) -> Self {
        Self {
            lines,
            effect: None,
        }
    }
}

const HELP_LINES: &[&str] = &[
    "Available commands:",
    "  intro - View introduction",
    "  projects - View projects",
    "  skills - View skills",
    "  experience - View work experience",
    "  education - View education",
    "  blogs - View blogs",
    "  contact - View contact information",
    "  theme [retro|sunset] - Change theme",
    "  resume - Download resume",
    "  clear - Clear the console",
    "  exit - Exit CLI mode",
];

// ────────────────────────────────────────────────────────────────────────────
// Parsing
// ────────────────────────────────────────────────────────────────────────────

/// Parses a raw input line. Whitespace is trimmed and matching is
/// case-insensitive; anything outside the vocabulary becomes
/// [`Command::Unknown`] carrying the trimmed input for echoing.
pub fn parse(input: &str) -> Command {
    let trimmed = input.trim();
    match trimmed.to_lowercase().as_str() {
        "help" => Command::Help,
        "intro" => Command::Goto(Section::Intro),
        "projects" => Command::Goto(Section::Projects),
        "skills" => Command::Skills,
        "experience" => Command::Goto(Section::Experience),
        "education" => Command::Goto(Section::Education),
        "blogs" => Command::Goto(Section::Blogs),
        "contact" => Command::Goto(Section::Contact),
        "theme retro" => Command::SetTheme(Theme::Retro),
        "theme sunset" => Command::SetTheme(Theme::Sunset),
        "resume" => Command::Resume,
        "clear" => Command::Clear,
        "exit" => Command::Exit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Dispatch
// ────────────────────────────────────────────────────────────────────────────

/// Dispatches one input line against the portfolio content.
pub fn respond(input: &str, content: &PortfolioContent) -> CliReply {
    match parse(input) {
        Command::Help => {
            CliReply::lines_only(HELP_LINES.iter().map(|s| s.to_string()).collect())
        }
        Command::Goto(section) => CliReply {
            lines: vec![format!("Navigated to {section} section")],
            effect: Some(Effect::Navigate { section }),
        },
        Command::Skills => {
            let mut lines = vec!["Skills:".to_string()];
            lines.extend(
                content
                    .skills
                    .iter()
                    .map(|s| format!("{} ({})", s.name, s.category)),
            );
            CliReply::lines_only(lines)
        }
        Command::SetTheme(theme) => CliReply {
            lines: vec![format!("Theme changed to {theme}")],
            effect: Some(Effect::SetTheme { theme }),
        },
        Command::Resume => CliReply {
            lines: vec!["Downloading resume...".to_string()],
            effect: Some(Effect::DownloadResume {
                url: content.profile.resume_url.clone(),
            }),
        },
        Command::Clear => CliReply {
            lines: vec![],
            effect: Some(Effect::Clear),
        },
        Command::Exit => CliReply {
            lines: vec!["Exiting CLI mode...".to_string()],
            effect: Some(Effect::Exit),
        },
        Command::Unknown(cmd) => CliReply::lines_only(vec![format!(
            "Command not recognized: {cmd}. Type 'help' for a list of available commands."
        )]),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
