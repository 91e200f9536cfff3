use crate::domain::Contact;
use crate::errors::AppError;

/// Lines a stanza needs before it is considered for import.
pub const STANZA_LINES: usize = 6;

const LABELS: [&str; STANZA_LINES] = ["Identifier", "Name", "Phone", "Email", "Address", "Notes"];

pub fn serialize_contacts(contacts: &[(&str, &Contact)]) -> String {
    let mut data = String::new();

    for (identifier, contact) in contacts {
        let ser_contact = format!(
            "Identifier: {}\n\
            Name: {}\n\
            Phone: {}\n\
            Email: {}\n\
            Address: {}\n\
            Notes: {}\n\n",
            identifier, contact.name, contact.phone, contact.email, contact.address, contact.notes
        );

        data.push_str(&ser_contact);
    }
    data
}

/// Groups lines into stanzas. Any run of blank lines ends a stanza.
pub fn split_stanzas(text: &str) -> Vec<Vec<&str>> {
    let mut stanzas = Vec::new();
    let mut current = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                stanzas.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.push(line);
    }

    if !current.is_empty() {
        stanzas.push(current);
    }
    stanzas
}

/// Reads the first six lines of a stanza into an identifier and a contact.
/// Extra lines are ignored.
pub fn parse_stanza(lines: &[&str]) -> Result<(String, Contact), AppError> {
    let mut values = [""; STANZA_LINES];

    for ((value, line), label) in values.iter_mut().zip(lines).zip(LABELS) {
        *value = field_value(line, label)?;
    }

    let [identifier, name, phone, email, address, notes] = values.map(str::to_string);

    Ok((identifier, Contact::new(name, phone, email, address, notes)))
}

/// `Label: value` -> `value`. A bare `Label:` reads as an empty value, which is
/// what an exported empty field looks like once trailing spaces are trimmed.
fn field_value<'a>(line: &'a str, label: &'static str) -> Result<&'a str, AppError> {
    let malformed = || AppError::MalformedStanza {
        line: line.to_string(),
        expected: label,
    };

    let rest = line
        .strip_prefix(label)
        .and_then(|rest| rest.strip_prefix(':'))
        .ok_or_else(malformed)?;

    match rest.strip_prefix(' ') {
        Some(value) => Ok(value),
        None if rest.is_empty() => Ok(rest),
        None => Err(malformed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Contact {
        Contact::new(
            "Alice".to_string(),
            "5551234567".to_string(),
            "a@b.com".to_string(),
            "123 St".to_string(),
            "vip".to_string(),
        )
    }

    #[test]
    fn check_serialize_contact() {
        let contact = alice();

        let ser_data = serialize_contacts(&[("555-1234", &contact)]);

        assert_eq!(
            ser_data,
            "Identifier: 555-1234\n\
            Name: Alice\n\
            Phone: 5551234567\n\
            Email: a@b.com\n\
            Address: 123 St\n\
            Notes: vip\n\n"
                .to_string()
        )
    }

    #[test]
    fn serialize_empty_store_is_empty_text() {
        assert_eq!(serialize_contacts(&[]), "");
    }

    #[test]
    fn stanzas_split_on_blank_lines() {
        let text = "a\nb\n\n\nc\r\nd\r\n\r\ne";

        let stanzas = split_stanzas(text);

        assert_eq!(stanzas, vec![vec!["a", "b"], vec!["c", "d"], vec!["e"]]);
    }

    #[test]
    fn parse_stanza_reads_values_after_separator() -> Result<(), AppError> {
        let lines = [
            "Identifier: 555-1234",
            "Name: Alice",
            "Phone: 5551234567",
            "Email: a@b.com",
            "Address: 123 St",
            "Notes: vip",
            "Extra: ignored",
        ];

        let (identifier, contact) = parse_stanza(&lines)?;

        assert_eq!(identifier, "555-1234");
        assert_eq!(contact, alice());
        Ok(())
    }

    #[test]
    fn bare_label_is_an_empty_value() -> Result<(), AppError> {
        assert_eq!(field_value("Notes:", "Notes")?, "");
        assert_eq!(field_value("Notes: ", "Notes")?, "");
        assert_eq!(field_value("Notes: a: b", "Notes")?, "a: b");
        Ok(())
    }

    #[test]
    fn wrong_label_or_missing_separator_is_malformed() {
        assert!(matches!(
            field_value("Nmae: Alice", "Name"),
            Err(AppError::MalformedStanza { expected: "Name", .. })
        ));
        assert!(field_value("Name Alice", "Name").is_err());
        assert!(field_value("Name:Alice", "Name").is_err());
    }
}
