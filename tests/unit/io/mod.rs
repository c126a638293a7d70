mod cli;
mod progress;
