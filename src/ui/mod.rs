pub mod ansi;
pub mod ascii;
pub mod chrome;
pub mod render;
#[cfg(test)]
mod tests;
mod width_util;
