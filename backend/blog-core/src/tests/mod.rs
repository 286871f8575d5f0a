mod archive;
mod search;
