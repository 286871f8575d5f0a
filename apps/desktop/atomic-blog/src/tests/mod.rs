mod args;
mod error;
mod theme;
