pub mod config;
pub mod list;
pub mod menu;
pub mod register;
pub mod remove;
