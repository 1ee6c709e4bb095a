//! Interactive command loop over an open session

use crate::cmd;
use crate::util;
use anyhow::Result;
use ft_core::VersionId;
use ft_journal::Session;
use std::io::{BufRead, Write};

pub const MENU: &str = "Welcome to the filetrack versioning shell!

To add the content of your file to version control press 'a'
To remove a version press 'r'
To load a version press 'l'
To print to the screen the detailed list of all versions press 'p'
To compare any 2 versions press 'c'
To search versions for a keyword press 's'
To exit press 'e'
";

const PROMPT: &str = "ft> ";

/// One menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    Add,
    Remove,
    Load,
    Print,
    Compare,
    Search,
    Exit,
}

impl ShellCommand {
    /// Parse a menu selection, accepting the single letter or the full word
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "a" | "add" => Some(Self::Add),
            "r" | "remove" => Some(Self::Remove),
            "l" | "load" => Some(Self::Load),
            "p" | "print" | "log" => Some(Self::Print),
            "c" | "compare" => Some(Self::Compare),
            "s" | "search" => Some(Self::Search),
            "e" | "exit" | "quit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Parse a version number typed at a prompt
pub fn parse_version(input: &str) -> Option<VersionId> {
    input.trim().parse::<u32>().ok().map(VersionId::new)
}

/// Line-oriented shell reading from `input` and reporting to `out`
pub struct Shell<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Run until `e` or end of input.
    ///
    /// Missing versions and file errors are reported and the loop continues;
    /// anything else ends the shell with an error.
    pub fn run(&mut self, session: &mut Session) -> Result<()> {
        write!(self.out, "{}", MENU)?;

        loop {
            let Some(line) = self.prompt(PROMPT)? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let Some(command) = ShellCommand::parse(&line) else {
                writeln!(self.out, "Invalid input.")?;
                continue;
            };
            if command == ShellCommand::Exit {
                break;
            }

            tracing::debug!("Shell command {:?}", command);
            match self.dispatch(session, command) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) if util::is_recoverable(&e) => writeln!(self.out, "Error: {}", e)?,
                Err(e) => return Err(e),
            }
        }

        self.out.flush()?;
        Ok(())
    }

    /// Execute one command; `Ok(false)` means input ended mid-command
    fn dispatch(&mut self, session: &mut Session, command: ShellCommand) -> Result<bool> {
        match command {
            ShellCommand::Add => {
                cmd::add::run(session, &mut self.out)?;
            }
            ShellCommand::Print => cmd::log::run(session, false, &mut self.out)?,
            ShellCommand::Load => {
                let Some(version) = self.prompt_version("Which version would you like to load? ")?
                else {
                    return Ok(false);
                };
                if let Some(version) = version {
                    cmd::load::run(session, version, &mut self.out)?;
                }
            }
            ShellCommand::Remove => {
                let Some(version) =
                    self.prompt_version("Enter the number of the version that you want to delete: ")?
                else {
                    return Ok(false);
                };
                if let Some(version) = version {
                    cmd::remove::run(session, version, &mut self.out)?;
                }
            }
            ShellCommand::Compare => {
                let Some(left) =
                    self.prompt_version("Please enter the number of the first version to compare: ")?
                else {
                    return Ok(false);
                };
                let Some(left) = left else {
                    return Ok(true);
                };
                let Some(right) = self
                    .prompt_version("Please enter the number of the second version to compare: ")?
                else {
                    return Ok(false);
                };
                if let Some(right) = right {
                    cmd::compare::run(session, left, right, &mut self.out)?;
                }
            }
            ShellCommand::Search => {
                let Some(keyword) =
                    self.prompt("Please enter the keyword that you are looking for: ")?
                else {
                    return Ok(false);
                };
                cmd::search::run(session, keyword.trim(), &mut self.out)?;
            }
            ShellCommand::Exit => return Ok(false),
        }
        Ok(true)
    }

    /// Print `text` and read one line; `None` at end of input
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Read a version number. The inner `None` means the input was not a
    /// number, which is reported and skips the command.
    fn prompt_version(&mut self, text: &str) -> Result<Option<Option<VersionId>>> {
        let Some(line) = self.prompt(text)? else {
            return Ok(None);
        };
        match parse_version(&line) {
            Some(version) => Ok(Some(Some(version))),
            None => {
                writeln!(self.out, "Please enter a valid version number, got '{}'.", line.trim())?;
                Ok(Some(None))
            }
        }
    }
}
