//! Text menu loop driving a [`ContactStore`].
//!
//! Generic over input and output so it can run against stdin/stdout or
//! in-memory buffers.
//!
//! CHANGELOG:
//! - 10/16/2026 - Store errors reported at the loop boundary instead of exiting
//! - 10/16/2026 - Initial implementation

use crate::contacts::{Contact, ContactStore, DeleteSource};
use crate::error::StoreError;
use crate::output::{format_error, OutputControls};
use anyhow::Result;
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::debug;

pub const BANNER: &str = "☎️Address book☎️";
pub const GOODBYE: &str = "Exit. Goodbye!";
pub const INVALID_DELETE_OPTION: &str = "Invalid option. Please choose 1 or 2.";

const SEARCH_PROMPT: &str = "Please enter a first name or last name to search:";
const POSITION_PROMPT: &str = "Please select the number of the contact you want:";
const DELETE_OPTION_PROMPT: &str = "Please select a contact display option:\
\n1) Show all contacts.\
\n2) Search contacts by first name or last name.\n";

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    ViewAll,
    Search,
    Delete,
    Exit,
}

/// Why a menu choice was rejected.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChoiceError {
    #[error("Please enter a number.")]
    NotANumber,

    #[error("Invalid selection. Please enter a number between 1 and 5.")]
    OutOfRange,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Result<Self, ChoiceError> {
        let n: i64 = input.trim().parse().map_err(|_| ChoiceError::NotANumber)?;
        match n {
            1 => Ok(MenuChoice::Add),
            2 => Ok(MenuChoice::ViewAll),
            3 => Ok(MenuChoice::Search),
            4 => Ok(MenuChoice::Delete),
            5 => Ok(MenuChoice::Exit),
            _ => Err(ChoiceError::OutOfRange),
        }
    }
}

/// Parse the delete display option.
///
/// Whitespace is dropped and case ignored, so "Show all contacts" and
/// "showallcontacts" both select the full list.
pub fn parse_delete_source(input: &str) -> Option<DeleteSource> {
    let normalized: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    match normalized.as_str() {
        "1" | "showallcontacts" => Some(DeleteSource::FullList),
        "2" | "firstname" | "lastname" => Some(DeleteSource::LastSearch),
        _ => None,
    }
}

/// Parse a 1-based contact position.
pub fn parse_position(input: &str) -> Result<usize, StoreError> {
    input
        .trim()
        .parse()
        .map_err(|_| StoreError::InvalidPosition(input.trim().to_string()))
}

/// Input ended before the loop was told to exit.
#[derive(Error, Debug)]
#[error("input closed")]
struct InputClosed;

/// Interactive menu over a reader and writer.
pub struct Menu<R, W> {
    input: R,
    output: W,
    controls: OutputControls,
    show_banner: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, controls: OutputControls) -> Self {
        Self {
            input,
            output,
            controls,
            show_banner: true,
        }
    }

    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until Exit is chosen or input ends.
    ///
    /// Store errors are printed and the loop continues; I/O errors are returned.
    pub fn run(&mut self, store: &mut ContactStore) -> Result<()> {
        loop {
            match self.step(store) {
                Ok(Some(message)) => self.say(&message)?,
                Ok(None) => {
                    self.say(GOODBYE)?;
                    return Ok(());
                }
                Err(e) if e.is::<InputClosed>() => {
                    debug!("input closed, leaving menu");
                    return Ok(());
                }
                Err(e) => match e.downcast_ref::<StoreError>() {
                    Some(store_err) => {
                        debug!(kind = ?store_err.kind(), "operation failed");
                        let message = self.error_message(store_err);
                        self.say(&message)?;
                    }
                    None => return Err(e),
                },
            }
        }
    }

    /// One menu round. `None` means the user chose Exit.
    fn step(&mut self, store: &mut ContactStore) -> Result<Option<String>> {
        self.print_menu()?;
        let line = self.prompt("Choice: ")?;

        let choice = match MenuChoice::parse(&line) {
            Ok(choice) => choice,
            Err(e) => return Ok(Some(e.to_string())),
        };
        debug!(?choice, "menu selection");

        let message = match choice {
            MenuChoice::Add => self.add(store)?,
            MenuChoice::ViewAll => self.view_all(store),
            MenuChoice::Search => self.search(store)?,
            MenuChoice::Delete => self.delete(store)?,
            MenuChoice::Exit => return Ok(None),
        };
        Ok(Some(message))
    }

    fn add(&mut self, store: &mut ContactStore) -> Result<String> {
        let first_name = self.prompt("Enter the first name:")?;
        let last_name = self.prompt("Enter the last name:")?;
        if first_name.is_empty() || last_name.is_empty() {
            return Err(StoreError::EmptyName.into());
        }

        let number = self.prompt("Enter the number:")?;
        let email = self.prompt("Enter the Email address:")?;
        let note = self.prompt("Enter the note:")?;

        Ok(store.add_contact(&first_name, &last_name, &number, &email, &note)?)
    }

    fn view_all(&self, store: &ContactStore) -> String {
        let all: Vec<&Contact> = store.contacts().iter().collect();
        self.controls.render_contacts(&all, store.list_contacts())
    }

    fn search(&mut self, store: &mut ContactStore) -> Result<String> {
        let query = self.prompt(SEARCH_PROMPT)?;
        if self.controls.json {
            let matched = store.search_matches(&query);
            Ok(self.controls.emit(&matched))
        } else {
            Ok(store.search_contacts(&query))
        }
    }

    fn delete(&mut self, store: &mut ContactStore) -> Result<String> {
        let option = self.prompt(DELETE_OPTION_PROMPT)?;
        let Some(source) = parse_delete_source(&option) else {
            return Ok(INVALID_DELETE_OPTION.to_string());
        };

        let shown = match source {
            DeleteSource::FullList => self.view_all(store),
            DeleteSource::LastSearch => self.search(store)?,
        };
        self.say(&shown)?;

        let position = parse_position(&self.prompt(POSITION_PROMPT)?)?;
        Ok(store.delete_contact(source, position)?)
    }

    fn error_message(&self, err: &StoreError) -> String {
        if self.controls.json {
            format_error(&err.to_string())
        } else {
            err.to_string()
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        if self.show_banner {
            writeln!(self.output, "{}", BANNER)?;
        }
        writeln!(self.output, "1) Add contact")?;
        writeln!(self.output, "2) View all contacts")?;
        writeln!(self.output, "3) Search contact")?;
        writeln!(self.output, "4) Delete contact")?;
        writeln!(self.output, "5) Exit")?;
        Ok(())
    }

    /// Print a prompt and read one line, without its line ending.
    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputClosed.into());
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::Cursor;

    fn run_session(input: &str, store: &mut ContactStore) -> String {
        run_with(input, store, OutputControls::default())
    }

    fn run_with(input: &str, store: &mut ContactStore, controls: OutputControls) -> String {
        let mut menu = Menu::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), controls);
        menu.run(store).unwrap();
        String::from_utf8(menu.into_output()).unwrap()
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse(" 1 "), Ok(MenuChoice::Add));
        assert_eq!(MenuChoice::parse("5"), Ok(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("6"), Err(ChoiceError::OutOfRange));
        assert_eq!(MenuChoice::parse("0"), Err(ChoiceError::OutOfRange));
        assert_eq!(MenuChoice::parse("add"), Err(ChoiceError::NotANumber));
    }

    #[test]
    fn test_parse_delete_source_aliases() {
        assert_eq!(parse_delete_source("1"), Some(DeleteSource::FullList));
        assert_eq!(parse_delete_source("Show all contacts"), Some(DeleteSource::FullList));
        assert_eq!(parse_delete_source(" 2 "), Some(DeleteSource::LastSearch));
        assert_eq!(parse_delete_source("First Name"), Some(DeleteSource::LastSearch));
        assert_eq!(parse_delete_source("lastname"), Some(DeleteSource::LastSearch));
        assert_eq!(parse_delete_source("3"), None);
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position(" 3 "), Ok(3));
        let err = parse_position("x").unwrap_err();
        assert_eq!(err, StoreError::InvalidPosition("x".into()));
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(parse_position("-1").is_err());
    }

    #[test]
    fn test_full_session() {
        let mut store = ContactStore::new();
        let input = "1\nAnn\nLee\n5551234\na@x.com\n\n\
                     2\n\
                     3\nlee\n\
                     4\n1\n1\n\
                     2\n\
                     5\n";
        let out = run_session(input, &mut store);

        assert!(out.contains(BANNER));
        assert!(out.contains("Contact saved✅"));
        assert!(out.contains("1 | First name: Ann | Last name: Lee | Phone number: 5551234"));
        assert!(out.contains("First name: Ann | Last name: Lee deleted successfully✅"));
        assert!(out.contains("The address book is empty!❌"));
        assert!(out.trim_end().ends_with(GOODBYE));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_with_empty_name_skips_remaining_prompts() {
        let mut store = ContactStore::new();
        let out = run_session("1\n\nLee\n5\n", &mut store);
        assert!(out.contains("First name and last name cannot be empty!❌"));
        assert!(!out.contains("Enter the number:"));
        assert!(out.contains(GOODBYE));
        assert!(store.is_empty());
    }

    #[test]
    fn test_bad_input_does_not_end_loop() {
        let mut store = ContactStore::new();
        let input = "abc\n9\n1\nAnn\nLee\nnot-a-number\nx\ny\n4\n1\nfirst\n4\n7\n5\n";
        let out = run_session(input, &mut store);

        assert!(out.contains("Please enter a number."));
        assert!(out.contains("Invalid selection. Please enter a number between 1 and 5."));
        assert!(out.contains("Phone number must be an integer: 'not-a-number'❌"));
        assert!(out.contains("Contact number must be a positive integer: 'first'❌"));
        assert!(out.contains(INVALID_DELETE_OPTION));
        assert!(out.contains(GOODBYE));
    }

    #[test]
    fn test_delete_out_of_range_is_reported() {
        let mut store = ContactStore::new();
        store.add_contact("Ann", "Lee", "1", "", "").unwrap();
        let out = run_session("4\n1\n3\n5\n", &mut store);
        assert!(out.contains("No contact at position 3 (1-1 available)❌"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_by_search_result() {
        let mut store = ContactStore::new();
        store.add_contact("Ann", "Doe", "1", "", "").unwrap();
        store.add_contact("Bo", "Ray", "2", "", "").unwrap();
        store.add_contact("Jane", "Doe", "3", "", "").unwrap();

        let out = run_session("4\n2\nDoe\n2\n5\n", &mut store);
        assert!(out.contains("2 | First name: Jane"));
        assert!(out.contains("First name: Jane | Last name: Doe deleted successfully✅"));

        let remaining: Vec<&str> = store.contacts().iter().map(|c| c.first_name.as_str()).collect();
        assert_eq!(remaining, vec!["Ann", "Bo"]);
    }

    #[test]
    fn test_names_are_not_trimmed() {
        let mut store = ContactStore::new();
        run_session("1\n Ann\nLee \n1\n\n\n5\n", &mut store);
        assert_eq!(store.contacts()[0].first_name, " Ann");
        assert_eq!(store.contacts()[0].last_name, "Lee ");
    }

    #[test]
    fn test_end_of_input_stops_loop() {
        let mut store = ContactStore::new();
        let out = run_session("1\nAnn\n", &mut store);
        assert!(!out.contains(GOODBYE));
        assert!(store.is_empty());
    }

    #[test]
    fn test_windows_line_endings() {
        let mut store = ContactStore::new();
        run_session("1\r\nAnn\r\nLee\r\n42\r\n\r\n\r\n5\r\n", &mut store);
        assert_eq!(store.contacts()[0].first_name, "Ann");
        assert_eq!(store.contacts()[0].number, 42);
    }

    #[test]
    fn test_json_output() {
        let mut store = ContactStore::new();
        store.add_contact("Ann", "Lee", "5551234", "a@x.com", "").unwrap();
        let controls = OutputControls { json: true, compact: true };
        let out = run_with("2\n3\nnobody\n4\n2\nlee\n9\n5\n", &mut store, controls);

        assert!(out.contains(r#""first_name":"Ann""#));
        assert!(out.contains(&format!("{}[]\n", SEARCH_PROMPT)));
        assert!(out.contains(r#""success":false"#));
    }

    #[test]
    fn test_banner_can_be_hidden() {
        let mut store = ContactStore::new();
        let mut menu = Menu::new(Cursor::new(b"5\n".to_vec()), Vec::new(), OutputControls::default())
            .with_banner(false);
        menu.run(&mut store).unwrap();
        let out = String::from_utf8(menu.into_output()).unwrap();
        assert!(!out.contains(BANNER));
        assert!(out.contains("1) Add contact"));
    }
}
