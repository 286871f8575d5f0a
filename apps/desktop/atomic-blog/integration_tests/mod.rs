mod commands;
mod session;
