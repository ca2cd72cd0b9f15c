//! Interactive registration session.
//!
//! One registration cycle walks Idle -> Editing -> Validating. A rejected
//! submission re-renders the form with its messages and goes back to editing
//! only the fields in error; a successful one prints the Patient Information
//! panel and returns to the command prompt.

use crate::render::{write_form, write_information, write_patient_list};
use registry_core::constants::{APP_HEADING, SUBMIT_LABEL};
use registry_core::{
    FormField, Gender, PatientId, PatientManagement, RegistryError, RegistryResult, SubmitOutcome,
};
use std::fmt;
use std::io::{BufRead, Write};

const COMMAND_PROMPT: &str = "registry> ";
const HELP_TEXT: &str = "Commands: register, list, show <ID>, help, quit";

/// Attempts allowed for a gender choice before the field is left unchanged.
const GENDER_ATTEMPTS: usize = 2;

/// A line typed at the command prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Register,
    List,
    Show(PatientId),
    Help,
    Quit,
    /// Blank line.
    Nothing,
}

impl Command {
    /// Parses a command line.
    ///
    /// # Errors
    ///
    /// Returns a message suitable for printing back to the user.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(Command::Nothing);
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "register" | "r" => Command::Register,
            "list" | "l" => Command::List,
            "show" | "s" => {
                let raw = words.next().ok_or("usage: show <ID>")?;
                Command::Show(PatientId::parse(raw).map_err(|e| e.to_string())?)
            }
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(format!("unknown command '{other}' ({HELP_TEXT})")),
        };

        match words.next() {
            Some(extra) => Err(format!("unexpected argument '{extra}'")),
            None => Ok(command),
        }
    }
}

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Terminal session over arbitrary input and output streams.
pub struct Console<R, W> {
    app: PatientManagement,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(app: PatientManagement, input: R, output: W) -> Self {
        Self { app, input, output }
    }

    pub fn app(&self) -> &PatientManagement {
        &self.app
    }

    pub fn into_app(self) -> PatientManagement {
        self.app
    }

    /// Runs the command loop until `quit` or end of input.
    pub fn run(&mut self) -> RegistryResult<()> {
        self.say(APP_HEADING)?;
        self.say(HELP_TEXT)?;

        loop {
            let Some(line) = self.prompt(COMMAND_PROMPT)? else {
                break;
            };

            let flow = match Command::parse(&line) {
                Ok(command) => self.execute(command)?,
                Err(message) => {
                    self.say(message)?;
                    Flow::Continue
                }
            };
            if flow == Flow::Stop {
                break;
            }
        }

        tracing::debug!("session closed with {} patients", self.app.store().len());
        Ok(())
    }

    fn execute(&mut self, command: Command) -> RegistryResult<Flow> {
        match command {
            Command::Register => return self.register(),
            Command::List => {
                let records = self.app.store().list();
                write_patient_list(&mut self.output, &records).map_err(RegistryError::Console)?;
            }
            Command::Show(id) => {
                self.app.show(id);
                self.write_display()?;
            }
            Command::Help => self.say(HELP_TEXT)?,
            Command::Quit => return Ok(Flow::Stop),
            Command::Nothing => {}
        }
        Ok(Flow::Continue)
    }

    /// One registration cycle.
    fn register(&mut self) -> RegistryResult<Flow> {
        let mut pending = FormField::ALL.to_vec();

        loop {
            for field in pending {
                if self.edit(field)? == Flow::Stop {
                    return Ok(Flow::Stop);
                }
            }

            self.say(format_args!("[{SUBMIT_LABEL}]"))?;
            match self.app.submit() {
                SubmitOutcome::Registered(_) => {
                    self.write_display()?;
                    return Ok(Flow::Continue);
                }
                SubmitOutcome::Rejected(errors) => {
                    write_form(&mut self.output, self.app.form())
                        .map_err(RegistryError::Console)?;
                    pending = errors.fields().collect();
                }
            }
        }
    }

    fn edit(&mut self, field: FormField) -> RegistryResult<Flow> {
        if field == FormField::Gender {
            return self.choose_gender();
        }

        let Some(value) = self.prompt(&format!("{} > ", field.placeholder()))? else {
            return Ok(Flow::Stop);
        };
        self.app.form_mut().set_text(field, value)?;
        Ok(Flow::Continue)
    }

    fn choose_gender(&mut self) -> RegistryResult<Flow> {
        let options = Gender::ALL
            .iter()
            .enumerate()
            .map(|(i, g)| format!("{}) {g}", i + 1))
            .collect::<Vec<_>>()
            .join("  ");
        self.say(format_args!("{}: {options}", FormField::Gender.placeholder()))?;

        for _ in 0..GENDER_ATTEMPTS {
            let Some(answer) = self.prompt(&format!("{} > ", FormField::Gender.label()))? else {
                return Ok(Flow::Stop);
            };

            match parse_gender_choice(&answer) {
                Some(choice) => {
                    self.app.form_mut().select_gender(choice);
                    return Ok(Flow::Continue);
                }
                None => self.say(format_args!("Unknown option '{}'", answer.trim()))?,
            }
        }
        Ok(Flow::Continue)
    }

    fn write_display(&mut self) -> RegistryResult<()> {
        if let Some(display) = self.app.display() {
            write_information(&mut self.output, display).map_err(RegistryError::Console)?;
        }
        Ok(())
    }

    /// Prints `prompt` and reads one line without its line ending.
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> RegistryResult<Option<String>> {
        write!(self.output, "{prompt}").map_err(RegistryError::Console)?;
        self.output.flush().map_err(RegistryError::Console)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(RegistryError::Console)?;
        if read == 0 {
            writeln!(self.output).map_err(RegistryError::Console)?;
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn say(&mut self, text: impl fmt::Display) -> RegistryResult<()> {
        writeln!(self.output, "{text}").map_err(RegistryError::Console)
    }
}

/// Maps a typed answer to a gender selection.
///
/// Blank clears the selection; numbers follow [`Gender::ALL`]. `None` means
/// the answer names no option.
fn parse_gender_choice(answer: &str) -> Option<Option<Gender>> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Some(None);
    }
    if let Ok(n) = answer.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| Gender::ALL.get(i).copied())
            .map(Some);
    }
    answer.parse::<Gender>().ok().map(Some)
}
