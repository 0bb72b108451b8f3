use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use polkadot_sdk::sp_runtime::DispatchResult;
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use crate::ecosystem::Balance;

/// Identifier of a fungible asset managed by pallet-assets (synthetic, bond or underlying).
pub type AssetId = u32;

/// Handle of a time-weighted price oracle bound to a synthetic token.
pub type OracleId = u32;

/// Price ratio of one synthetic unit in underlying units, scaled by `params::PRECISION`.
///
/// `PRECISION` is the peg (1.0). Decimal differences between the synthetic and the
/// underlying are normalised by the price source, so the ratio is decimal-free.
pub type Price = u128;

/// A synthetic token registered in the token manager.
///
/// Entries are never removed from the registry. Deleting a token flips `deleted`
/// so the slot index of every other entry stays stable.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub struct SyntheticToken {
  /// The pegged synthetic asset minted by rebases
  pub synthetic: AssetId,
  /// Debt instrument (bond) absorbing below-peg periods
  pub bond: AssetId,
  /// Reference asset the synthetic is pegged to
  pub underlying: AssetId,
  /// Oracle reporting the synthetic/underlying TWAP
  pub oracle: OracleId,
  /// Soft-delete tombstone
  pub deleted: bool,
}

impl SyntheticToken {
  pub fn new(synthetic: AssetId, bond: AssetId, underlying: AssetId, oracle: OracleId) -> Self {
    Self {
      synthetic,
      bond,
      underlying,
      oracle,
      deleted: false,
    }
  }

  pub fn is_live(&self) -> bool {
    !self.deleted
  }
}

/// Ordered registry of synthetic tokens with per-token mint authority.
pub trait TokenRegistry<AccountId> {
  /// All entries in registration order, including deleted ones.
  fn tokens() -> Vec<SyntheticToken>;

  /// Upper bound on the number of entries, deleted ones included.
  fn max_tokens() -> u32;

  /// Current total supply of a synthetic token.
  fn total_supply(token: AssetId) -> Balance;

  /// Mint `amount` of `token` into `recipient`, issued by `minter`.
  ///
  /// Implementations reject any `minter` that does not hold mint authority.
  fn mint(
    minter: &AccountId,
    token: AssetId,
    recipient: &AccountId,
    amount: Balance,
  ) -> DispatchResult;
}

/// Cached time-weighted price of a synthetic token in units of its underlying.
pub trait PriceSource {
  /// Latest published price. `None` until the first oracle update.
  fn current_price(token: AssetId) -> Option<Price>;
}

/// Outstanding debt a synthetic token owes to its bond holders.
pub trait DebtLedger {
  fn outstanding(token: AssetId) -> Balance;
}

impl DebtLedger for () {
  fn outstanding(_token: AssetId) -> Balance {
    0
  }
}

/// Staking reward pool receiving the board share of each rebase.
pub trait RewardPool {
  /// Notify the pool that `amount` of `token` has been minted into its account.
  fn deposit(token: AssetId, amount: Balance) -> DispatchResult;
}

impl RewardPool for () {
  fn deposit(_token: AssetId, _amount: Balance) -> DispatchResult {
    Ok(())
  }
}

/// Time-weighted average price oracle refreshed on demand.
pub trait TwapOracle {
  /// Roll the averaging window forward and publish a new price.
  fn update(oracle: OracleId) -> DispatchResult;

  /// Last published average price.
  fn average_price(oracle: OracleId) -> Option<Price>;
}
