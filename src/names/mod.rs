//! Character name normalization and alias resolution
//!
//! Every downstream component sees characters only through their canonical
//! names: raw spellings are whitespace-normalized by [`clean_name`] and then
//! resolved through an [`AliasIndex`].

mod alias;
mod normalize;

pub use alias::{AliasEntry, AliasIndex};
pub use normalize::clean_name;
