#![allow(clippy::match_like_matches_macro)]
#![allow(clippy::module_inception)]

pub mod marketplace;
pub mod providers;
pub mod sync;
pub mod wizard;
