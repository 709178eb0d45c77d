// Time types used across the marketplace
//
// Listing launch dates come from the catalog as unix timestamps in
// milliseconds; the alias keeps that unit visible in the type signatures.

pub type TimestampMillis = u64;
