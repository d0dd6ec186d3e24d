pub mod animation;
pub mod config;
pub mod constants;
pub mod error;
pub mod maze;
pub mod render;

#[cfg(test)]
pub mod test_helpers;
