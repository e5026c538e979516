//! Request and response models for the supported APIs.
pub mod billing;
pub mod loadtest;
pub mod safedns;
