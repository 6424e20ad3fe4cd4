pub mod config;
pub mod game;
pub mod output;

#[cfg(test)]
mod test_utils;
