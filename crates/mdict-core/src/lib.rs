pub mod bridge;
pub mod cache;
pub mod error;
pub mod panel;
pub mod queries;
pub mod search;
pub mod shortcut;
pub mod storage;
pub mod store;
pub mod views;
pub mod wordbook;

#[cfg(test)]
mod tests;
