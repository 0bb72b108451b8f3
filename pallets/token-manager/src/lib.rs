//! Token Manager Pallet
//!
//! Registry of synthetic token tuples (synthetic, bond, underlying, oracle) backing the
//! emission engine. Owns mint authority over registered synthetics and exposes their
//! cached oracle prices.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

pub(crate) const LOG_TARGET: &str = "runtime::token-manager";

/// Helper for benchmarking
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper {
  /// Make sure `asset` exists so it can be registered.
  fn create_asset(asset: primitives::AssetId) -> frame::deps::sp_runtime::DispatchResult;
  /// Publish a price for `oracle` so `update_oracle` succeeds.
  fn prepare_oracle(oracle: primitives::OracleId) -> frame::deps::sp_runtime::DispatchResult;
}

#[frame::pallet]
pub mod pallet {
  use super::{LOG_TARGET, WeightInfo};
  use alloc::vec::Vec;
  use frame::deps::{
    frame_support::traits::fungibles::{Inspect as FungiblesInspect, Mutate as FungiblesMutate},
    sp_runtime::{DispatchError, traits::AccountIdConversion},
  };
  use frame::prelude::*;
  use primitives::{
    AssetId, Balance, OracleId, Price, PriceSource, SyntheticToken, TokenRegistry, TwapOracle,
  };

  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// The assets pallet holding synthetic, bond and underlying balances
    type Assets: FungiblesInspect<Self::AccountId, AssetId = AssetId, Balance = Balance>
      + FungiblesMutate<Self::AccountId, AssetId = AssetId, Balance = Balance>;

    /// TWAP oracle backing each registered synthetic
    type Oracle: TwapOracle;

    /// Origin that can register and delete synthetic tokens
    type RegistryOrigin: EnsureOrigin<Self::RuntimeOrigin>;

    /// Pallet ID deriving the mint authority account
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// Maximum number of registry slots, deleted ones included
    #[pallet::constant]
    type MaxTokens: Get<u32>;

    /// Weight information for extrinsics
    type WeightInfo: WeightInfo;

    /// Helper for benchmarking
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::BenchmarkHelper;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  /// Registered synthetic tokens in registration order.
  ///
  /// Append-only: deletion sets the tombstone flag and keeps the slot.
  #[pallet::storage]
  #[pallet::getter(fn registered_tokens)]
  pub type Tokens<T: Config> =
    StorageValue<_, BoundedVec<SyntheticToken, T::MaxTokens>, ValueQuery>;

  /// Slot of a synthetic asset inside `Tokens`
  #[pallet::storage]
  #[pallet::getter(fn token_index)]
  pub type TokenIndex<T: Config> = StorageMap<_, Blake2_128Concat, AssetId, u32, OptionQuery>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// A synthetic token was registered
    TokenAdded {
      index: u32,
      synthetic: AssetId,
      bond: AssetId,
      underlying: AssetId,
      oracle: OracleId,
    },
    /// A synthetic token was soft-deleted
    TokenDeleted { index: u32, synthetic: AssetId },
    /// The oracle of a synthetic token published a new average price
    OracleUpdated {
      synthetic: AssetId,
      price: Option<Price>,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// The synthetic asset already occupies a registry slot
    TokenAlreadyRegistered,
    /// The synthetic asset is not registered
    TokenNotRegistered,
    /// The synthetic asset was deleted from the registry
    TokenIsDeleted,
    /// Registry capacity exhausted
    TooManyTokens,
    /// One of the referenced assets does not exist in pallet-assets
    AssetNotFound,
    /// Caller does not hold mint authority
    NotMinter,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Register a synthetic token together with its bond, underlying and oracle.
    ///
    /// All three assets must already exist. The entry is appended at the end of the
    /// registry, so registration order is iteration order.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::add_token())]
    pub fn add_token(
      origin: OriginFor<T>,
      synthetic: AssetId,
      bond: AssetId,
      underlying: AssetId,
      oracle: OracleId,
    ) -> DispatchResult {
      T::RegistryOrigin::ensure_origin(origin)?;
      ensure!(
        !TokenIndex::<T>::contains_key(synthetic),
        Error::<T>::TokenAlreadyRegistered
      );
      ensure!(
        T::Assets::asset_exists(synthetic)
          && T::Assets::asset_exists(bond)
          && T::Assets::asset_exists(underlying),
        Error::<T>::AssetNotFound
      );
      let index = Tokens::<T>::try_mutate(|tokens| -> Result<u32, DispatchError> {
        let index = tokens.len() as u32;
        tokens
          .try_push(SyntheticToken::new(synthetic, bond, underlying, oracle))
          .map_err(|_| Error::<T>::TooManyTokens)?;
        Ok(index)
      })?;
      TokenIndex::<T>::insert(synthetic, index);
      Self::deposit_event(Event::TokenAdded {
        index,
        synthetic,
        bond,
        underlying,
        oracle,
      });
      Ok(())
    }

    /// Soft-delete a synthetic token.
    ///
    /// The slot stays in place; rebases skip it and mints against it are refused.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::delete_token())]
    pub fn delete_token(origin: OriginFor<T>, synthetic: AssetId) -> DispatchResult {
      T::RegistryOrigin::ensure_origin(origin)?;
      let index = TokenIndex::<T>::get(synthetic).ok_or(Error::<T>::TokenNotRegistered)?;
      Tokens::<T>::try_mutate(|tokens| -> DispatchResult {
        let entry = tokens
          .get_mut(index as usize)
          .ok_or(Error::<T>::TokenNotRegistered)?;
        ensure!(entry.is_live(), Error::<T>::TokenIsDeleted);
        entry.deleted = true;
        Ok(())
      })?;
      Self::deposit_event(Event::TokenDeleted { index, synthetic });
      Ok(())
    }

    /// Refresh the TWAP oracle of a live synthetic token. Callable by anyone.
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::update_oracle())]
    pub fn update_oracle(origin: OriginFor<T>, synthetic: AssetId) -> DispatchResult {
      ensure_signed(origin)?;
      let entry = Self::live_token(synthetic)?;
      T::Oracle::update(entry.oracle)?;
      let price = T::Oracle::average_price(entry.oracle);
      log::debug!(
        target: LOG_TARGET,
        "oracle {} of synthetic {} published {:?}",
        entry.oracle,
        synthetic,
        price
      );
      Self::deposit_event(Event::OracleUpdated { synthetic, price });
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    /// Account holding mint authority over registered synthetics
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    /// Registry entry of a synthetic asset, deleted or not
    pub fn token(synthetic: AssetId) -> Option<SyntheticToken> {
      let index = TokenIndex::<T>::get(synthetic)?;
      Tokens::<T>::get().get(index as usize).copied()
    }

    /// Registry entry of a synthetic asset that has not been deleted
    pub fn live_token(synthetic: AssetId) -> Result<SyntheticToken, DispatchError> {
      let entry = Self::token(synthetic).ok_or(Error::<T>::TokenNotRegistered)?;
      ensure!(entry.is_live(), Error::<T>::TokenIsDeleted);
      Ok(entry)
    }
  }

  impl<T: Config> TokenRegistry<T::AccountId> for Pallet<T> {
    fn tokens() -> Vec<SyntheticToken> {
      Tokens::<T>::get().into_inner()
    }

    fn max_tokens() -> u32 {
      T::MaxTokens::get()
    }

    fn total_supply(token: AssetId) -> Balance {
      T::Assets::total_issuance(token)
    }

    fn mint(
      minter: &T::AccountId,
      token: AssetId,
      recipient: &T::AccountId,
      amount: Balance,
    ) -> DispatchResult {
      ensure!(*minter == Self::account_id(), Error::<T>::NotMinter);
      Self::live_token(token)?;
      T::Assets::mint_into(token, recipient, amount)?;
      Ok(())
    }
  }

  impl<T: Config> PriceSource for Pallet<T> {
    fn current_price(token: AssetId) -> Option<Price> {
      let entry = Self::token(token)?;
      T::Oracle::average_price(entry.oracle)
    }
  }

  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    /// Pre-registered (synthetic, bond, underlying, oracle) tuples
    pub tokens: Vec<(AssetId, AssetId, AssetId, OracleId)>,
    #[serde(skip)]
    pub _marker: core::marker::PhantomData<T>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      frame_system::Pallet::<T>::inc_providers(&Pallet::<T>::account_id());
      let mut tokens = BoundedVec::<SyntheticToken, T::MaxTokens>::default();
      for (synthetic, bond, underlying, oracle) in self.tokens.iter().copied() {
        assert!(
          !TokenIndex::<T>::contains_key(synthetic),
          "duplicate synthetic in genesis"
        );
        TokenIndex::<T>::insert(synthetic, tokens.len() as u32);
        tokens
          .try_push(SyntheticToken::new(synthetic, bond, underlying, oracle))
          .expect("genesis tokens exceed MaxTokens");
      }
      Tokens::<T>::put(tokens);
    }
  }
}
