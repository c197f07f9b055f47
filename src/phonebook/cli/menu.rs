//! The interactive menu loop.
//!
//! Generic over input and output so the whole session can be driven from a
//! byte buffer in tests.

use super::print::{print_found, print_menu, print_messages, print_page};
use colored::Colorize;
use phonebook::api::{CmdMessage, Phonebook};
use phonebook::error::{PhonebookError, Result};
use phonebook::model::Record;
use phonebook::pager::Navigation;
use phonebook::store::DataStore;
use std::io::{BufRead, Write};
use tracing::debug;

const PAGING_PROMPT: &str =
    "Enter 'n' for next page, 'p' for previous page, or any other key to exit: ";
const ACK_PROMPT: &str = "Press Enter to exit...";

/// Asked in file field order.
const FIELD_PROMPTS: [&str; 6] = [
    "Last Name: ",
    "First Name: ",
    "Middle Name: ",
    "Company: ",
    "Work Phone: ",
    "Personal Phone: ",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Display,
    Add,
    Search,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::Display),
            "2" => Some(MenuChoice::Add),
            "3" => Some(MenuChoice::Search),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Runs the menu until the user exits or input ends.
///
/// Invalid choices and rejected field values are reported and the loop goes
/// on; any other error (a failed save, a broken terminal) ends the session.
pub fn run_session<S, R, W>(
    book: &mut Phonebook<S>,
    input: R,
    output: W,
    page_size: usize,
) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    let mut session = Session {
        book,
        input,
        output,
        page_size,
    };
    session.serve()
}

struct Session<'a, S: DataStore, R, W> {
    book: &'a mut Phonebook<S>,
    input: R,
    output: W,
    page_size: usize,
}

impl<S: DataStore, R: BufRead, W: Write> Session<'_, S, R, W> {
    fn serve(&mut self) -> Result<()> {
        loop {
            print_menu(&mut self.output)?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                break;
            };

            let flow = match MenuChoice::parse(&line) {
                Some(MenuChoice::Display) => self.display()?,
                Some(MenuChoice::Add) => self.add()?,
                Some(MenuChoice::Search) => self.search()?,
                Some(MenuChoice::Exit) => Flow::Exit,
                None => {
                    debug!(input = %line, "invalid menu choice");
                    print_messages(
                        &mut self.output,
                        &[CmdMessage::error(
                            "Invalid choice. Please choose a valid option.",
                        )],
                    )?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        writeln!(self.output, "{}", "Goodbye!".bold())?;
        self.output.flush()?;
        Ok(())
    }

    fn display(&mut self) -> Result<Flow> {
        let mut pager = self.book.pager(self.page_size);
        loop {
            let result = self.book.page(&pager)?;
            print_messages(&mut self.output, &result.messages)?;
            if let Some(view) = &result.page {
                print_page(&mut self.output, view)?;
            }

            if !pager.is_paged() {
                return Ok(match self.prompt(ACK_PROMPT)? {
                    Some(_) => Flow::Continue,
                    None => Flow::Exit,
                });
            }

            let Some(line) = self.prompt(PAGING_PROMPT)? else {
                return Ok(Flow::Exit);
            };
            if !pager.navigate(Navigation::parse(&line)) {
                return Ok(Flow::Continue);
            }
        }
    }

    fn add(&mut self) -> Result<Flow> {
        let mut values: [String; 6] = Default::default();
        for (slot, label) in values.iter_mut().zip(FIELD_PROMPTS) {
            match self.prompt(label)? {
                Some(value) => *slot = value,
                None => return Ok(Flow::Exit),
            }
        }

        let [last, first, middle, org, work, personal] = values;
        let record = Record::new(last, first, middle, org, work, personal);

        match self.book.add(record) {
            Ok(result) => print_messages(&mut self.output, &result.messages)?,
            Err(e @ PhonebookError::InvalidField { .. }) => {
                print_messages(
                    &mut self.output,
                    &[CmdMessage::warning(format!("Entry not added. {}", e))],
                )?;
            }
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let Some(last_name) = self.prompt("Search by Last Name: ")? else {
            return Ok(Flow::Exit);
        };

        let result = self.book.find_by_last_name(&last_name)?;
        print_found(&mut self.output, &result.listed_records)?;
        print_messages(&mut self.output, &result.messages)?;
        Ok(Flow::Continue)
    }

    /// Prints `text` and reads one line without its terminator; `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
