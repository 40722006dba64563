use serde_json::json;
use std::fmt;

/// Colour of a private notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Error,
}

impl Tone {
    fn color(self) -> &'static str {
        match self {
            Tone::Info => "yellow",
            Tone::Error => "red",
        }
    }
}

/// A single console command line
///
/// Each statement renders to one complete line that the server interprets on
/// its own. Nothing is ever read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Give { target: String, item: String, count: u32 },
    Teleport { subject: String, destination: String },
    Tell { target: String, text: String, tone: Tone },
    Say(String),
}

impl Statement {
    pub fn info(target: &str, text: impl Into<String>) -> Self {
        Statement::Tell {
            target: target.to_string(),
            text: text.into(),
            tone: Tone::Info,
        }
    }

    pub fn error(target: &str, text: impl Into<String>) -> Self {
        Statement::Tell {
            target: target.to_string(),
            text: text.into(),
            tone: Tone::Error,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Give { target, item, count } => {
                write!(f, "give {} {} {}", target, item, count)
            }
            Statement::Teleport { subject, destination } => {
                write!(f, "tp {} {}", subject, destination)
            }
            Statement::Tell { target, text, tone } => {
                let body = json!({ "text": text, "color": tone.color() });
                write!(f, "tellraw {} {}", target, body)
            }
            Statement::Say(text) => write!(f, "say {}", text),
        }
    }
}
