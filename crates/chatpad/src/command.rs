use std::error::Error;
use std::fmt::{self, Display};
use std::path::PathBuf;

/// A line of user input, interpreted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Send this text as a message.
    Send(String),
    /// Send the kept draft again. Typed as an empty line.
    Resend,
    /// Select the file at this path for upload.
    SelectFile(PathBuf),
    /// Upload the selected file.
    Upload,
    /// End the session.
    Quit,
    /// Show the available commands.
    Help,
}

/// Error returned for input that looks like a command but isn't one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// The command needs an argument that was not given.
    MissingArgument(&'static str),
    /// No command has this name.
    Unknown(String),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::MissingArgument(usage) => write!(f, "usage: {usage}"),
            CommandError::Unknown(name) => {
                write!(f, "unknown command `/{name}`, try /help")
            }
        }
    }
}

impl Error for CommandError {}

impl Command {
    /// Help text listing every command.
    pub const HELP: &str = "\
<text>         send a message
(empty line)   send the last unsent message again
/file <path>   select a PDF file
/upload        upload the selected file
/help          show this help
/quit          leave";

    /// Interprets one line of input. Lines starting with `//` send the
    /// rest of the line prefixed with a single `/`.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Ok(Command::Resend);
        }

        let Some(rest) = line.strip_prefix('/') else {
            return Ok(Command::Send(line.to_owned()));
        };
        if rest.starts_with('/') {
            return Ok(Command::Send(rest.to_owned()));
        }

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };
        match name {
            "file" if arg.is_empty() => {
                Err(CommandError::MissingArgument("/file <path>"))
            }
            "file" => Ok(Command::SelectFile(PathBuf::from(arg))),
            "upload" => Ok(Command::Upload),
            "quit" | "exit" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            _ => Err(CommandError::Unknown(name.to_owned())),
        }
    }
}
