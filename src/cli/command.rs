use std::path::PathBuf;

use clap::Parser;
use dotenv::dotenv;

use crate::domain::ImportPolicy;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// File used by export and import when the filename prompt is left empty
    #[arg(long, env = "CONTACT_BOOK_FILE", default_value = "contacts.txt")]
    pub file: PathBuf,

    /// Reject imported contacts whose phone or email fails validation
    #[arg(long, env = "CONTACT_BOOK_STRICT_IMPORT")]
    pub strict_import: bool,

    /// Log filter used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, env = "CONTACT_BOOK_LOG", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Parses flags after loading `.env` so its values act as env fallbacks.
    pub fn load() -> Self {
        dotenv().ok();
        Cli::parse()
    }

    pub fn settings(&self) -> Settings {
        Settings {
            default_file: self.file.clone(),
            import_policy: if self.strict_import {
                ImportPolicy::Validated
            } else {
                ImportPolicy::Trusted
            },
        }
    }
}

/// What the menu loop needs from the startup configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    pub default_file: PathBuf,
    pub import_policy: ImportPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_file: PathBuf::from("contacts.txt"),
            import_policy: ImportPolicy::Trusted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_import_flag_selects_validated_policy() {
        let cli = Cli::parse_from(["contact-book", "--strict-import", "--file", "book.txt"]);
        let settings = cli.settings();

        assert_eq!(settings.import_policy, ImportPolicy::Validated);
        assert_eq!(settings.default_file, PathBuf::from("book.txt"));
    }

    #[test]
    fn log_level_flag_is_read() {
        let cli = Cli::parse_from(["contact-book", "--log-level", "debug"]);

        assert_eq!(cli.log_level, "debug");
    }
}
