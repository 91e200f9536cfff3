pub mod cli;
pub mod domain;
pub mod errors;
pub mod helper;
pub mod prelude;
