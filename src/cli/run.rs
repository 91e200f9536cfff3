use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, info};

use crate::{
    cli::{
        command::{Cli, Settings},
        menu::{Console, MenuChoice, display_contact, parse_menu_choice},
    },
    domain::{ContactStore, ContactUpdate},
    errors::AppError,
};

/// Runs the menu on stdin/stdout with the given configuration.
pub fn run_app(cli: &Cli) -> Result<(), AppError> {
    let mut store = ContactStore::new();
    let stdin = io::stdin();
    let stdout = io::stdout();

    run_session(&mut store, &cli.settings(), stdin.lock(), stdout.lock())
}

/// Drives the menu loop until the user quits or input runs out. Operation
/// errors are reported and the loop continues; only terminal I/O errors end it.
pub fn run_session<R: BufRead, W: Write>(
    store: &mut ContactStore,
    settings: &Settings,
    input: R,
    output: W,
) -> Result<(), AppError> {
    let mut console = Console::new(input, output);
    console.say("Welcome to the Contact Management System!")?;

    loop {
        console.show_menu()?;

        let outcome = console
            .ask("Select an option: ")
            .and_then(|answer| parse_menu_choice(&answer))
            .and_then(|choice| match choice {
                MenuChoice::Quit => Ok(false),
                choice => dispatch(choice, store, settings, &mut console).map(|_| true),
            });

        match outcome {
            Ok(true) => continue,
            Ok(false) => break,
            Err(AppError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                debug!("input closed, leaving menu");
                break;
            }
            Err(e @ AppError::Io(_)) => return Err(e),
            Err(e) => console.say(&format!("Error: {}", e))?,
        }
    }

    info!(contacts = store.len(), "session finished");
    console.say("Quitting the application.")
}

fn dispatch<R: BufRead, W: Write>(
    choice: MenuChoice,
    store: &mut ContactStore,
    settings: &Settings,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    match choice {
        MenuChoice::AddContact => add_contact(store, console),
        MenuChoice::EditContact => edit_contact(store, console),
        MenuChoice::DeleteContact => delete_contact(store, console),
        MenuChoice::SearchContact => search_contact(store, console),
        MenuChoice::ListContacts => list_contacts(store, console),
        MenuChoice::ExportContacts => export_contacts(store, settings, console),
        MenuChoice::ImportContacts => import_contacts(store, settings, console),
        MenuChoice::Quit => Ok(()),
    }
}

fn add_contact<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    let identifier = console.ask("Enter a unique identifier (phone/email): ")?;

    // Refuse early instead of collecting five more answers first
    if store.contains(&identifier) {
        return Err(AppError::DuplicateIdentifier(identifier));
    }

    let name = console.ask("Enter name: ")?;
    let phone = console.ask("Enter phone number: ")?;
    let email = console.ask("Enter email address: ")?;
    let address = console.ask("Enter address (optional): ")?;
    let notes = console.ask("Enter notes (optional): ")?;

    store.add(&identifier, &name, &phone, &email, &address, &notes)?;

    console.say("Contact added successfully.")
}

fn edit_contact<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    let identifier = console.ask("Enter the unique identifier of the contact to edit: ")?;
    let current = store.find(&identifier)?.clone();

    console.say("Leave fields empty if you don't want to change them.")?;
    let update = ContactUpdate {
        name: Some(console.ask(&format!("Enter new name (current: {}): ", current.name))?),
        phone: Some(console.ask(&format!(
            "Enter new phone number (current: {}): ",
            current.phone
        ))?),
        email: Some(console.ask(&format!(
            "Enter new email address (current: {}): ",
            current.email
        ))?),
        address: Some(console.ask(&format!(
            "Enter new address (current: {}): ",
            current.address
        ))?),
        notes: Some(console.ask(&format!("Enter new notes (current: {}): ", current.notes))?),
    };

    store.edit(&identifier, update)?;

    console.say("Contact updated successfully.")
}

fn delete_contact<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    let identifier = console.ask("Enter the unique identifier of the contact to delete: ")?;

    store.delete(&identifier)?;

    console.say("Contact deleted successfully.")
}

fn search_contact<R: BufRead, W: Write>(
    store: &ContactStore,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    let identifier = console.ask("Enter the unique identifier of the contact to search: ")?;
    let contact = store.find(&identifier)?;

    console.say(&display_contact(&identifier, contact))
}

fn list_contacts<R: BufRead, W: Write>(
    store: &ContactStore,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    if store.is_empty() {
        return console.say("No contacts available.");
    }

    for (identifier, contact) in store.list_all() {
        console.say("")?;
        console.say(&display_contact(identifier, contact))?;
    }
    Ok(())
}

fn export_contacts<R: BufRead, W: Write>(
    store: &ContactStore,
    settings: &Settings,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    let path = ask_path(console, "export contacts to", settings)?;

    let total = store.export_to_file(&path)?;

    console.say(&format!("Exported {} contacts to {}.", total, path.display()))
}

fn import_contacts<R: BufRead, W: Write>(
    store: &mut ContactStore,
    settings: &Settings,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    let path = ask_path(console, "import contacts from", settings)?;

    let report = store.import_from_file(&path, settings.import_policy)?;

    console.say(&format!(
        "Imported {} contacts from {}.",
        report.imported,
        path.display()
    ))?;
    for (position, reason) in &report.rejected {
        console.say(&format!("Skipped contact #{}: {}", position, reason))?;
    }
    Ok(())
}

fn ask_path<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    action: &str,
    settings: &Settings,
) -> Result<PathBuf, AppError> {
    let answer = console.ask(&format!(
        "Enter the filename to {} (default: {}): ",
        action,
        settings.default_file.display()
    ))?;

    if answer.is_empty() {
        Ok(settings.default_file.clone())
    } else {
        Ok(PathBuf::from(answer))
    }
}
