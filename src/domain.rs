pub mod contact;
pub mod manager;

use crate::errors::AppError;

pub use contact::{Contact, ContactUpdate};
pub use manager::{ContactStore, ImportPolicy, ImportReport};
