//! Ecosystem Constants for the Emission Parachain
//!
//! This module centralizes system-level constants: pallet IDs used to derive
//! pallet-owned accounts and the default economic parameters of the emission engine.
//!
//! These constants are the single source of truth and are re-used by pallet mocks
//! and runtime configurations via the primitives crate.

/// Balance type alias for consistency across ecosystem
pub type Balance = u128;

/// Pallet identifiers for deriving pallet-owned accounts.
///
/// Used by `PalletId::into_account_truncating()` to deterministically generate
/// accounts for pallet-specific operations.
pub mod pallet_ids {
  /// Token Manager pallet ID (synthetic registry and mint authority)
  pub const TOKEN_MANAGER_PALLET_ID: &[u8; 8] = b"tokenmgr";

  /// Bond Manager account seed (debt claimant)
  pub const BOND_MANAGER_PALLET_ID: &[u8; 8] = b"bondmgr0";

  /// Board (staking reward pool) account seed
  pub const BOARD_PALLET_ID: &[u8; 8] = b"boardrm0";
}

/// Economic parameters of the positive rebase engine.
pub mod params {
  use super::Balance;
  use sp_arithmetic::Percent;

  /// Precision scalar for price ratios (10^12).
  ///
  /// A price equal to `PRECISION` means the synthetic trades exactly at its peg.
  pub const PRECISION: Balance = 1_000_000_000_000;

  /// Minimum seconds between two positive rebases (one day).
  pub const DEFAULT_REBASE_PERIOD: u64 = 86_400;

  /// Minimum price ratio, in hundredths, that triggers a rebase (1.05x).
  pub const DEFAULT_REBASE_THRESHOLD: u32 = 105;

  /// Cap on the premium, in percentage points, used for the rebase amount.
  ///
  /// At 100 a single rebase can at most double the supply.
  pub const DEFAULT_MAX_REBASE: u32 = 100;

  /// Suggested dev fund cut of every rebase (2%).
  pub const DEFAULT_DEV_FUND_RATE: Percent = Percent::from_percent(2);

  /// Suggested stability reserve cut of the post-debt remainder (70%).
  pub const DEFAULT_STABLE_FUND_RATE: Percent = Percent::from_percent(70);

  /// Upper bound on registered synthetic tokens, including deleted slots.
  pub const MAX_SYNTHETIC_TOKENS: u32 = 64;
}
