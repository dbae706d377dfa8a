pub mod home;
pub mod login;
pub mod recommended;
pub mod register;
