use std::io::{self, BufRead, Write};

use crate::domain::Contact;
use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddContact,
    EditContact,
    DeleteContact,
    SearchContact,
    ListContacts,
    ExportContacts,
    ImportContacts,
    Quit,
}

pub fn parse_menu_choice(input: &str) -> Result<MenuChoice, AppError> {
    match input.trim() {
        "1" => Ok(MenuChoice::AddContact),
        "2" => Ok(MenuChoice::EditContact),
        "3" => Ok(MenuChoice::DeleteContact),
        "4" => Ok(MenuChoice::SearchContact),
        "5" => Ok(MenuChoice::ListContacts),
        "6" => Ok(MenuChoice::ExportContacts),
        "7" => Ok(MenuChoice::ImportContacts),
        "8" => Ok(MenuChoice::Quit),
        other => Err(AppError::InvalidMenuSelection(other.to_string())),
    }
}

pub fn display_contact(identifier: &str, contact: &Contact) -> String {
    format!(
        "Identifier: {}\n\
        Name: {}\n\
        Phone: {}\n\
        Email: {}\n\
        Address: {}\n\
        Notes: {}",
        identifier, contact.name, contact.phone, contact.email, contact.address, contact.notes
    )
}

/// Line-oriented terminal: prompts go to `output`, answers come from `input`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, message: &str) -> Result<(), AppError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    pub fn show_menu(&mut self) -> Result<(), AppError> {
        self.say(
            "\nMenu:\n\
            1. Add a new contact\n\
            2. Edit an existing contact\n\
            3. Delete a contact\n\
            4. Search for a contact\n\
            5. Display all contacts\n\
            6. Export contacts to a text file\n\
            7. Import contacts from a text file\n\
            8. Quit",
        )
    }

    /// Prints `prompt` and returns the trimmed answer. End of input surfaces as
    /// an `UnexpectedEof` I/O error.
    pub fn ask(&mut self, prompt: &str) -> Result<String, AppError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            )));
        }
        Ok(answer.trim().to_string())
    }
}
