// ABOUTME: Shared wiring for the Taskpad command-line front end
// ABOUTME: Builds the task store and session mirror from configuration and renders output

pub mod context;
pub mod logging;
pub mod output;

pub use context::AppContext;

#[cfg(test)]
mod tests;
