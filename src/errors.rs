use core::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum AppError {
    DuplicateIdentifier(String),
    NotFound(String),
    InvalidEmail(String),
    InvalidPhone(String),
    FileRead { path: PathBuf, source: std::io::Error },
    FileWrite { path: PathBuf, source: std::io::Error },
    InvalidMenuSelection(String),
    MalformedStanza { line: String, expected: &'static str },
    RejectedStanza(Box<AppError>),
    Io(std::io::Error),
    Regex(regex::Error),
}

impl AppError {
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::FileRead {
            path: path.into(),
            source,
        }
    }

    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::FileWrite {
            path: path.into(),
            source,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Regex(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::DuplicateIdentifier(id) => {
                write!(f, "Contact '{}' already exists.", id)
            }
            AppError::NotFound(id) => {
                write!(f, "Contact '{}' not found.", id)
            }
            AppError::InvalidEmail(email) => {
                write!(f, "Invalid email format: '{}'.", email)
            }
            AppError::InvalidPhone(phone) => {
                write!(f, "Phone number must be 10 digits, got '{}'.", phone)
            }
            AppError::FileRead { path, source } => {
                write!(f, "Error reading from file {}: {}", path.display(), source)
            }
            AppError::FileWrite { path, source } => {
                write!(f, "Error writing to file {}: {}", path.display(), source)
            }
            AppError::InvalidMenuSelection(choice) => {
                write!(
                    f,
                    "Invalid option '{}'. Please select a number between 1 and 8.",
                    choice
                )
            }
            AppError::MalformedStanza { line, expected } => {
                write!(f, "Expected '{}: <value>', found '{}'", expected, line)
            }
            AppError::RejectedStanza(reason) => {
                write!(f, "Rejected by strict import: {}", reason)
            }
            AppError::Io(e) => {
                write!(f, "I/O error on the terminal: {}", e)
            }
            AppError::Regex(e) => {
                write!(f, "Invalid validation pattern: {}", e)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::FileRead { source, .. } | AppError::FileWrite { source, .. } => Some(source),
            AppError::RejectedStanza(reason) => Some(reason.as_ref()),
            AppError::Io(e) => Some(e),
            AppError::Regex(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::io;

    use super::*;

    #[test]
    fn confirm_menu_selection_error_message() {
        let err = AppError::InvalidMenuSelection("9".to_string());

        assert_eq!(
            format!("{}", err),
            "Invalid option '9'. Please select a number between 1 and 8."
        );
    }

    #[test]
    fn file_errors_name_the_path() {
        let missing = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err = AppError::file_read("./nowhere/contacts.txt", missing);

        let message = err.to_string();
        assert!(message.starts_with("Error reading from file ./nowhere/contacts.txt"));
        assert!(err.source().is_some());
    }

    #[test]
    fn io_error_converts_with_question_mark() {
        fn fails() -> Result<String, AppError> {
            Ok(std::fs::read_to_string("./no/such/dir/contacts.txt")?)
        }

        assert!(matches!(fails(), Err(AppError::Io(_))));
    }

    #[test]
    fn rejected_stanza_wraps_reason() {
        let err = AppError::RejectedStanza(Box::new(AppError::InvalidPhone("12".to_string())));

        assert_eq!(
            err.to_string(),
            "Rejected by strict import: Phone number must be 10 digits, got '12'."
        );
    }
}
