use super::*;

use crate::helper;
use std::{collections::HashMap, fs, path::Path};
use tracing::{debug, error, info, warn};

/// In-memory contact book keyed by identifier.
///
/// `order` keeps identifiers in insertion order so listing and export are
/// deterministic. Every key in `mem` appears in `order` exactly once.
#[derive(Debug, Default)]
pub struct ContactStore {
    mem: HashMap<String, Contact>,
    order: Vec<String>,
}

/// How imported stanzas are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportPolicy {
    /// Take every well-formed stanza as-is, even with a bad phone or email.
    #[default]
    Trusted,
    /// Apply the add-time phone/email rules and reject stanzas that fail them.
    Validated,
}

/// Outcome of a deserialize or import.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub imported: usize,
    /// 1-based stanza position and the reason it was not applied.
    pub rejected: Vec<(usize, AppError)>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.mem.contains_key(identifier)
    }

    pub fn add(
        &mut self,
        identifier: &str,
        name: &str,
        phone: &str,
        email: &str,
        address: &str,
        notes: &str,
    ) -> Result<(), AppError> {
        if self.contains(identifier) {
            return Err(AppError::DuplicateIdentifier(identifier.to_string()));
        }

        let contact = Contact::new(
            name.to_string(),
            phone.to_string(),
            email.to_string(),
            address.to_string(),
            notes.to_string(),
        );
        contact.validate()?;

        self.insert(identifier.to_string(), contact);
        info!(identifier, "contact added");
        Ok(())
    }

    pub fn edit(&mut self, identifier: &str, update: ContactUpdate) -> Result<(), AppError> {
        let contact = self
            .mem
            .get_mut(identifier)
            .ok_or_else(|| AppError::NotFound(identifier.to_string()))?;

        // A bad phone or email must leave every field as it was.
        update.validate()?;
        update.apply_to(contact);
        info!(identifier, "contact updated");
        Ok(())
    }

    pub fn delete(&mut self, identifier: &str) -> Result<(), AppError> {
        match self.mem.remove(identifier) {
            Some(_) => {
                self.order.retain(|id| id != identifier);
                info!(identifier, "contact deleted");
                Ok(())
            }
            None => Err(AppError::NotFound(identifier.to_string())),
        }
    }

    pub fn find(&self, identifier: &str) -> Result<&Contact, AppError> {
        self.mem
            .get(identifier)
            .ok_or_else(|| AppError::NotFound(identifier.to_string()))
    }

    /// Every contact in insertion order.
    pub fn list_all(&self) -> Vec<(&str, &Contact)> {
        self.order
            .iter()
            .filter_map(|id| self.mem.get(id).map(|contact| (id.as_str(), contact)))
            .collect()
    }

    pub fn serialize(&self) -> String {
        helper::serialize_contacts(&self.list_all())
    }

    /// Applies every well-formed stanza in `text`, overwriting contacts that
    /// share an identifier. Stanzas shorter than six lines are skipped
    /// without being reported.
    pub fn deserialize(&mut self, text: &str, policy: ImportPolicy) -> ImportReport {
        let mut report = ImportReport::default();

        for (position, stanza) in helper::split_stanzas(text).into_iter().enumerate() {
            let position = position + 1;

            if stanza.len() < helper::STANZA_LINES {
                debug!(position, lines = stanza.len(), "skipping short stanza");
                continue;
            }

            let parsed = helper::parse_stanza(&stanza).and_then(|(identifier, contact)| {
                if policy == ImportPolicy::Validated {
                    contact
                        .validate()
                        .map_err(|e| AppError::RejectedStanza(Box::new(e)))?;
                }
                Ok((identifier, contact))
            });

            match parsed {
                Ok((identifier, contact)) => {
                    debug!(position, identifier = %identifier, "importing stanza");
                    self.insert(identifier, contact);
                    report.imported += 1;
                }
                Err(e) => {
                    warn!(position, error = %e, "stanza not imported");
                    report.rejected.push((position, e));
                }
            }
        }

        report
    }

    /// Writes the whole store to `path`, replacing any existing file.
    pub fn export_to_file(&self, path: &Path) -> Result<usize, AppError> {
        fs::write(path, self.serialize()).map_err(|e| {
            error!(path = %path.display(), error = %e, "export failed");
            AppError::file_write(path, e)
        })?;

        info!(path = %path.display(), count = self.len(), "contacts exported");
        Ok(self.len())
    }

    /// Reads `path` in full and imports it. The store is untouched when the
    /// file cannot be read.
    pub fn import_from_file(
        &mut self,
        path: &Path,
        policy: ImportPolicy,
    ) -> Result<ImportReport, AppError> {
        let text = fs::read_to_string(path).map_err(|e| {
            error!(path = %path.display(), error = %e, "import failed");
            AppError::file_read(path, e)
        })?;

        let report = self.deserialize(&text, policy);
        info!(
            path = %path.display(),
            imported = report.imported,
            rejected = report.rejected.len(),
            "contacts imported"
        );
        Ok(report)
    }

    fn insert(&mut self, identifier: String, contact: Contact) {
        if !self.mem.contains_key(&identifier) {
            self.order.push(identifier.clone());
        }
        self.mem.insert(identifier, contact);
    }
}
