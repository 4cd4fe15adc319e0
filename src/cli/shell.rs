//! Interactive shell: a line-oriented stand-in for the journal form
//!
//! Each input line is one user action (New, Save, Delete, Clear, selecting
//! an entry, typing into a field). After every action the status line is
//! echoed as `[status]`.

use crate::application::{EditorSession, SaveOutcome};
use crate::cli::output::{format_entry, format_entry_list};
use crate::domain::EntryRef;
use crate::error::{DiaryError, Result};
use crate::infrastructure::{EntryStore, ExternalEditor};
use chrono::Local;
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  list              show entries, newest first
  new               start a new entry
  select <REF>      load an entry (list position or id)
  title <TEXT>      set the title
  text <LINE>       append a line to the content
  compose           edit the content in your editor
  show              print the entry being edited
  save              save the entry being edited
  delete [REF]      delete an entry (default: the one being edited)
  clear             blank title and content
  status            repeat the status line
  help              this text
  quit              leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellCommand {
    List,
    New,
    Select(String),
    Title(String),
    Text(String),
    Compose,
    Show,
    Save,
    Delete(Option<String>),
    Clear,
    Status,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    fn parse(line: &str) -> std::result::Result<Option<Self>, String> {
        let line = line.trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (line.trim_end(), ""),
        };
        let arg = rest.trim();

        let command = match word.to_lowercase().as_str() {
            "" => return Ok(None),
            "list" | "ls" => ShellCommand::List,
            "new" => ShellCommand::New,
            "select" | "open" => {
                if arg.is_empty() {
                    return Err("Usage: select <REF>".to_string());
                }
                ShellCommand::Select(arg.to_string())
            }
            "title" => ShellCommand::Title(arg.to_string()),
            "text" => ShellCommand::Text(rest.to_string()),
            "compose" => ShellCommand::Compose,
            "show" => ShellCommand::Show,
            "save" => ShellCommand::Save,
            "delete" | "rm" => {
                ShellCommand::Delete((!arg.is_empty()).then(|| arg.to_string()))
            }
            "clear" => ShellCommand::Clear,
            "status" => ShellCommand::Status,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            other => return Err(format!("Unknown command: '{}'. Type 'help'.", other)),
        };

        Ok(Some(command))
    }
}

/// Interactive session over one loaded store
pub struct Shell<R, W> {
    store: EntryStore,
    session: EditorSession,
    editor: ExternalEditor,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(store: EntryStore, editor: ExternalEditor, input: R, output: W) -> Self {
        Shell {
            store,
            session: EditorSession::new(),
            editor,
            input,
            output,
        }
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    /// Read and dispatch commands until `quit` or end of input
    pub fn run(&mut self) -> Result<()> {
        if self.store.recovered_from_corrupt() {
            self.session
                .set_status("Journal file was unreadable; starting with an empty journal");
        }

        writeln!(self.output, "diary shell. Type 'help' for commands.")?;
        self.print_list()?;
        self.print_status()?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };

            let command = match ShellCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(message) => {
                    writeln!(self.output, "{}", message)?;
                    continue;
                }
            };

            if command == ShellCommand::Quit {
                break;
            }

            if let Err(e) = self.dispatch(command) {
                self.report(&e)?;
            }
            self.print_status()?;
        }

        Ok(())
    }

    fn dispatch(&mut self, command: ShellCommand) -> Result<()> {
        match command {
            ShellCommand::List => self.print_list()?,
            ShellCommand::New => {
                self.session.new_entry();
                let label = self.session.date_label(&self.store, Local::now());
                writeln!(self.output, "{}", label)?;
            }
            ShellCommand::Select(reference) => {
                let id = self.store.resolve(&EntryRef::parse(&reference)?)?;
                self.session.select(&self.store, &id)?;
                self.print_buffers()?;
            }
            ShellCommand::Title(title) => self.session.set_title(title),
            ShellCommand::Text(line) => self.session.append_line(&line),
            ShellCommand::Compose => {
                let text = self.editor.compose(self.session.content())?;
                self.session.set_content(text);
                self.session.set_status("Content updated from editor");
            }
            ShellCommand::Show => self.print_buffers()?,
            ShellCommand::Save => {
                let outcome = self.session.save(&mut self.store, Local::now())?;
                if let SaveOutcome::Created(id) = &outcome {
                    writeln!(self.output, "Created {}", id)?;
                }
                writeln!(self.output, "Diary entry saved successfully!")?;
            }
            ShellCommand::Delete(reference) => self.delete(reference)?,
            ShellCommand::Clear => self.session.clear(),
            ShellCommand::Status => {}
            ShellCommand::Help => writeln!(self.output, "{}", HELP)?,
            ShellCommand::Quit => {}
        }
        Ok(())
    }

    fn delete(&mut self, reference: Option<String>) -> Result<()> {
        let id = match reference {
            Some(reference) => self.store.resolve(&EntryRef::parse(&reference)?)?,
            None => match self.session.current_id() {
                Some(id) => id.clone(),
                None => {
                    writeln!(self.output, "Warning: Please select an entry to delete.")?;
                    return Ok(());
                }
            },
        };

        write!(
            self.output,
            "Are you sure you want to delete this diary entry? [y/N] "
        )?;
        self.output.flush()?;
        let answer = self.read_line()?.unwrap_or_default();
        if !is_yes(&answer) {
            self.session.set_status("Delete cancelled");
            return Ok(());
        }

        self.session.delete(&mut self.store, &id)?;
        writeln!(self.output, "Diary entry deleted successfully!")?;
        Ok(())
    }

    fn report(&mut self, error: &DiaryError) -> Result<()> {
        if error.is_validation() {
            writeln!(self.output, "Warning: {}", error)?;
        } else {
            writeln!(self.output, "Error: {}", error)?;
        }
        Ok(())
    }

    fn print_list(&mut self) -> Result<()> {
        let listing = format_entry_list(&self.store.list_sorted());
        writeln!(self.output, "{}", listing.trim_end())?;
        Ok(())
    }

    fn print_buffers(&mut self) -> Result<()> {
        let saved = self
            .session
            .current_id()
            .and_then(|id| self.store.get(id).map(|entry| (id, entry)));

        let text = match saved {
            Some((id, entry))
                if entry.title == self.session.title()
                    && entry.content == self.session.content() =>
            {
                format_entry(id, entry)
            }
            _ => format!(
                "Title: {}\n{}\n\n{}\n",
                self.session.title(),
                self.session.date_label(&self.store, Local::now()),
                self.session.content()
            ),
        };

        write!(self.output, "{}", text)?;
        Ok(())
    }

    fn print_status(&mut self) -> Result<()> {
        writeln!(self.output, "[{}]", self.session.status())?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(
            line.trim_end_matches(|c| c == '\n' || c == '\r').to_string(),
        ))
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
