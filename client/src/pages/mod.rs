pub mod about;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
