//! Line commands typed into the viewer.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Activation of the element carrying this class name.
    Activate(String),
    /// New viewport width, in pixels.
    Resize(f64),
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseCommandError {
    #[error("unknown command '{0}' (try prev, next, click <class>, resize <px>, quit)")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("invalid viewport width '{0}'")]
    InvalidWidth(String),
}

/// Parses one input line; blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, ParseCommandError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };

    let command = match verb {
        "p" | "prev" => Command::Activate("prev".into()),
        "n" | "next" => Command::Activate("next".into()),
        "click" => {
            let class = words.next().ok_or(ParseCommandError::MissingArgument("click"))?;
            Command::Activate(class.to_string())
        }
        "r" | "resize" => {
            let raw = words.next().ok_or(ParseCommandError::MissingArgument("resize"))?;
            match raw.parse::<f64>() {
                Ok(width) if width.is_finite() && width > 0.0 => Command::Resize(width),
                _ => return Err(ParseCommandError::InvalidWidth(raw.to_string())),
            }
        }
        "q" | "quit" | "exit" => Command::Quit,
        other => return Err(ParseCommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}
