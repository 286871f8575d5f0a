mod scenarios;
mod state;
