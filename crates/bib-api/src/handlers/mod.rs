pub mod login;
pub mod participants;
pub mod register;
pub mod reports;
