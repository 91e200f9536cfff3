use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn deleting_contacts() {
    // Attempt to delete non existing contact
    Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .write_stdin("3\nghost\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Contact 'ghost' not found."));

    // Add two contacts, delete one, then confirm it is gone
    Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .write_stdin(
            "1\npatricia\nPatricia\n8066809241\nlmartinez@bender-patterson.net\n\nothers\n\
             1\ndiane\nDiane\n8064879199\ngrahammatthew@gmail.com\n\nschool\n\
             3\npatricia\n\
             4\npatricia\n\
             5\n8\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact deleted successfully."))
        .stdout(predicate::str::contains("Error: Contact 'patricia' not found."))
        .stdout(predicate::str::contains("Identifier: diane"))
        .stdout(predicate::str::contains("Identifier: patricia\n").not());
}
