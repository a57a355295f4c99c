pub mod catalog;
pub mod progress;
pub mod session;
