pub mod add;
pub mod config;
pub mod fields;
pub mod form;
pub mod init;
