//! Core domain concepts shared across all subdomains.
//!
//! - [`card::Card`]: a card from the fixed planning poker deck
//! - [`error::DomainError`]: domain-level errors

pub mod card;
pub mod error;
