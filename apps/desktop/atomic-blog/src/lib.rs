// Library exports for testing
// The binary (main.rs) imports these as well

pub mod app;
pub mod args;
pub mod commands;
pub mod console;
pub mod error;
pub mod logger;
pub mod theme;
pub mod view;

#[cfg(test)]
mod tests;
