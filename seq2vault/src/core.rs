pub mod analyzer;
pub mod config;
pub mod discovery;
pub mod output;
pub mod paths;
pub mod pipeline;
pub mod rules;
pub mod session;
#[cfg(test)]
pub mod test_utils;
