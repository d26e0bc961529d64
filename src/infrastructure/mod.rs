//! Concrete implementations of the domain's collaborator contracts.

pub mod dto;
pub mod reply;
pub mod store;
