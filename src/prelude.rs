pub use crate::cli::{command, menu, run_app};
pub use crate::domain::{
    contact::{self, Contact, ContactUpdate},
    manager::{self, ContactStore, ImportPolicy, ImportReport},
};
pub use crate::errors::AppError;
