//! Command implementations.

pub mod add;
pub mod doctor;
pub mod dump;
pub mod export;
pub mod import;
pub mod list;
pub mod run;
pub mod set_title;
pub mod version;
