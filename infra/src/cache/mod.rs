//! Cache module providing the verification code store
//!
//! Codes live only in process memory. A restart drops every outstanding code,
//! which users recover from by requesting a new one.

pub mod code_store;

pub use code_store::InMemoryCodeStore;

#[cfg(test)]
mod tests;
