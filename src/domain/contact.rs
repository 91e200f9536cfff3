use super::*;
use regex::Regex;

/// A stored contact. The identifier it is filed under lives in the store's key,
/// not in the record.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub notes: String,
}

/// Replacement values for an edit. `None` and empty strings both mean
/// "keep the current value".
#[derive(Debug, Clone, Default)]
pub struct ContactUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

impl Contact {
    pub fn new(name: String, phone: String, email: String, address: String, notes: String) -> Self {
        Contact {
            name,
            phone,
            email,
            address,
            notes,
        }
    }

    /// Checks the phone and email rules that `add` enforces.
    /// Email is checked before phone.
    pub fn validate(&self) -> Result<(), AppError> {
        if !validate_email(&self.email)? {
            return Err(AppError::InvalidEmail(self.email.clone()));
        }

        if !validate_phone(&self.phone)? {
            return Err(AppError::InvalidPhone(self.phone.clone()));
        }

        Ok(())
    }
}

impl ContactUpdate {
    /// Validates every replacement that was actually supplied.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(email) = requested(&self.email)
            && !validate_email(email)?
        {
            return Err(AppError::InvalidEmail(email.to_string()));
        }

        if let Some(phone) = requested(&self.phone)
            && !validate_phone(phone)?
        {
            return Err(AppError::InvalidPhone(phone.to_string()));
        }

        Ok(())
    }

    /// Copies the supplied replacements onto `contact`. Call `validate` first.
    pub fn apply_to(self, contact: &mut Contact) {
        let fields = [
            (self.name, &mut contact.name),
            (self.phone, &mut contact.phone),
            (self.email, &mut contact.email),
            (self.address, &mut contact.address),
            (self.notes, &mut contact.notes),
        ];

        for (replacement, current) in fields {
            if let Some(value) = replacement
                && !value.is_empty()
            {
                *current = value;
            }
        }
    }
}

fn requested(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

pub fn validate_phone(phone: &str) -> Result<bool, AppError> {
    // Exactly ten ASCII digits, nothing else
    let re = Regex::new(r"^[0-9]{10}$")?;
    Ok(re.is_match(phone))
}

pub fn validate_email(email: &str) -> Result<bool, AppError> {
    // local@domain, both parts made of word characters, dots and hyphens.
    // The domain does not need a dot.
    let re = Regex::new(r"^[\w.-]+@[\w.-]+$")?;
    Ok(re.is_match(email))
}
