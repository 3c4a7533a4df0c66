mod cli;
mod common;
mod demo;
