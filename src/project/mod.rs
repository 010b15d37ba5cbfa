//! Project terms and listing loaders

mod terms;
pub mod loader;

pub use terms::{ProjectTerms, TokenSupply};
pub use loader::{load_holdings, load_projects, ListedProject};

#[cfg(test)]
pub(crate) use terms::fixtures;
