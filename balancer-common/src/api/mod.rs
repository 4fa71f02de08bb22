pub mod lobby;
pub mod format;
