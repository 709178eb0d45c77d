// 7 decimals numbers, matching the ledger's license unit representation
pub const UNIT_DECIMALS: u8 = 7;

// License symbol bounds, enforced on every write and re-checked at validation
pub const SYMBOL_MIN_LEN: usize = 3;
pub const SYMBOL_MAX_LEN: usize = 5;

// Number of steps in the tokenization wizard
pub const WIZARD_STEP_COUNT: u8 = 5;

// Flat deployment cost (USD) shown on the review step before publishing
pub const DEPLOYMENT_FEE_USD: u64 = 2_500;

// Suggested minimum declared value (USD) per data asset type
// Displayed next to each type option; not a hard validation gate
pub const MIN_VALUE_IMAGE: u64 = 100_000;
pub const MIN_VALUE_SPECTRUM: u64 = 50_000;
pub const MIN_VALUE_CATALOG: u64 = 150_000;
pub const MIN_VALUE_EDUCATIONAL_SET: u64 = 75_000;
