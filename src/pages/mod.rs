//! Data loaders for the application's pages.

pub mod create;
