//! Emission Manager Pallet
//!
//! Positive rebase engine for synthetic assets pegged to an underlying reference asset.
//! Once per period it walks the token registry, sizes a supply expansion for every
//! synthetic trading above its threshold and splits the new supply between the dev fund,
//! outstanding bond debt, the stability reserve and the board.
//!
//! ## Distribution
//!
//! For a rebase amount `A`:
//! 1. `dev = dev_fund_rate * A` goes to the dev fund.
//! 2. Bond debt absorbs up to `A - dev`.
//! 3. The rest is split `stable_fund_rate` to the stability reserve, the remainder to the
//!    board, which is then notified through the reward pool.
//!
//! Each token is distributed inside its own storage layer. A failing mint or deposit
//! rolls back that token only; the batch and its timestamp stand.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

pub(crate) const LOG_TARGET: &str = "runtime::emission-manager";

/// Helper for benchmarking
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId> {
  /// Account the registry accepts as mint authority.
  fn mint_authority() -> AccountId;
  /// Register a synthetic with issued supply and a published price above its peg.
  fn register_eligible_token(index: u32) -> frame::deps::sp_runtime::DispatchResult;
}

#[frame::pallet]
pub mod pallet {
  use super::{LOG_TARGET, WeightInfo};
  use frame::deps::{
    frame_support::{storage::with_storage_layer, traits::UnixTime},
    sp_core::U256,
    sp_runtime::{DispatchError, PerThing, Percent, traits::Zero},
  };
  use frame::prelude::*;
  use primitives::{
    AssetId, Balance, DebtLedger, Price, PriceSource, RewardPool, TokenRegistry,
    params::PRECISION,
  };

  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// Registry of synthetic tokens, holder of their mint authority
    type Registry: TokenRegistry<Self::AccountId>;

    /// Cached TWAP price of each synthetic in units of its underlying
    type PriceSource: PriceSource;

    /// Outstanding bond debt served before the percentage split
    type DebtLedger: DebtLedger;

    /// Staking reward pool notified of every board share
    type RewardPool: RewardPool;

    /// Wall clock used by the debounce gate
    type TimeProvider: UnixTime;

    /// Default minimum seconds between two rebases
    #[pallet::constant]
    type DefaultPeriod: Get<u64>;

    /// Default eligibility threshold, in hundredths of the peg
    #[pallet::constant]
    type DefaultThreshold: Get<u32>;

    /// Default cap on the premium, in percentage points
    #[pallet::constant]
    type DefaultMaxRebase: Get<u32>;

    /// Largest registry the rebase weight is benchmarked for. The registry's own
    /// bound must not exceed it.
    #[pallet::constant]
    type MaxTokens: Get<u32>;

    /// Weight information for extrinsics
    type WeightInfo: WeightInfo;

    /// Helper for benchmarking
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::BenchmarkHelper<Self::AccountId>;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  /// Minimum seconds between two rebases
  #[pallet::storage]
  #[pallet::getter(fn period)]
  pub type Period<T: Config> = StorageValue<_, u64, ValueQuery, T::DefaultPeriod>;

  /// Price ratio, in hundredths, a synthetic must reach to be rebased
  #[pallet::storage]
  #[pallet::getter(fn threshold)]
  pub type Threshold<T: Config> = StorageValue<_, u32, ValueQuery, T::DefaultThreshold>;

  /// Cap on the premium, in percentage points
  #[pallet::storage]
  #[pallet::getter(fn max_rebase)]
  pub type MaxRebase<T: Config> = StorageValue<_, u32, ValueQuery, T::DefaultMaxRebase>;

  /// Share of every rebase minted to the dev fund
  #[pallet::storage]
  #[pallet::getter(fn dev_fund_rate)]
  pub type DevFundRate<T: Config> = StorageValue<_, Percent, ValueQuery>;

  /// Share of the post-debt remainder minted to the stability reserve
  #[pallet::storage]
  #[pallet::getter(fn stable_fund_rate)]
  pub type StableFundRate<T: Config> = StorageValue<_, Percent, ValueQuery>;

  #[pallet::storage]
  #[pallet::getter(fn dev_fund)]
  pub type DevFund<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

  #[pallet::storage]
  #[pallet::getter(fn stable_fund)]
  pub type StableFund<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

  /// Reward pool account credited with the board share
  #[pallet::storage]
  #[pallet::getter(fn board)]
  pub type Board<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

  /// Account the registry recognises as mint authority
  #[pallet::storage]
  #[pallet::getter(fn token_manager)]
  pub type TokenManager<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

  /// Account credited with the debt share
  #[pallet::storage]
  #[pallet::getter(fn bond_manager)]
  pub type BondManager<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

  #[pallet::storage]
  #[pallet::getter(fn paused)]
  pub type Paused<T: Config> = StorageValue<_, bool, ValueQuery>;

  /// Unix seconds before which no rebase runs, zero for no bound
  #[pallet::storage]
  #[pallet::getter(fn start_time)]
  pub type StartTime<T: Config> = StorageValue<_, u64, ValueQuery>;

  /// Unix seconds of the last executed rebase, zero if none
  #[pallet::storage]
  #[pallet::getter(fn last_rebase)]
  pub type LastRebase<T: Config> = StorageValue<_, u64, ValueQuery>;

  /// Holder of the configuration role
  #[pallet::storage]
  #[pallet::getter(fn owner)]
  pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

  /// Holder of the pause role
  #[pallet::storage]
  #[pallet::getter(fn operator)]
  pub type Operator<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// A synthetic was found eligible and `amount` new supply will be distributed
    RebaseTotal { token: AssetId, amount: Balance },
    /// Dev fund share minted
    DevFundFunded { token: AssetId, amount: Balance },
    /// Bond debt share minted
    DebtFunded { token: AssetId, amount: Balance },
    /// Stability reserve share minted
    StableFundFunded { token: AssetId, amount: Balance },
    /// Board share minted and deposited into the reward pool
    BoardFunded { token: AssetId, amount: Balance },
    /// Distribution for a synthetic was rolled back
    RebaseFailed { token: AssetId, error: DispatchError },
    /// A rebase batch ran to completion
    PositiveRebaseExecuted { timestamp: u64 },
    DevFundUpdated { account: T::AccountId },
    StableFundUpdated { account: T::AccountId },
    BoardUpdated { account: T::AccountId },
    TokenManagerUpdated { account: T::AccountId },
    BondManagerUpdated { account: T::AccountId },
    DevFundRateUpdated { old_rate: Percent, new_rate: Percent },
    StableFundRateUpdated { old_rate: Percent, new_rate: Percent },
    ThresholdUpdated { old_threshold: u32, new_threshold: u32 },
    MaxRebaseUpdated { old_max_rebase: u32, new_max_rebase: u32 },
    PeriodUpdated { old_period: u64, new_period: u64 },
    StartTimeUpdated { old_start_time: u64, new_start_time: u64 },
    /// Positive rebases were paused or resumed
    PauseUpdated { paused: bool },
    OwnershipTransferred {
      previous: Option<T::AccountId>,
      new: T::AccountId,
    },
    OperatorTransferred {
      previous: Option<T::AccountId>,
      new: T::AccountId,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// Caller does not hold the required role
    Unauthorized,
    /// An endpoint is missing or the dev fund rate is zero
    NotInitialized,
    /// Positive rebases are paused
    Paused,
    /// The start time has not been reached
    NotStarted,
    /// The rebase period has not elapsed yet
    TooSoon,
  }

  /// Endpoints of an initialized engine
  #[derive(Clone, Debug, PartialEq, Eq)]
  pub struct Endpoints<AccountId> {
    pub dev_fund: AccountId,
    pub stable_fund: AccountId,
    pub board: AccountId,
    pub token_manager: AccountId,
    pub bond_manager: AccountId,
  }

  /// Split of one rebase amount between the four claimants
  #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
  pub struct RebaseSplit {
    pub dev: Balance,
    pub debt: Balance,
    pub stable: Balance,
    pub board: Balance,
  }

  impl RebaseSplit {
    pub fn total(&self) -> Balance {
      self
        .dev
        .saturating_add(self.debt)
        .saturating_add(self.stable)
        .saturating_add(self.board)
    }
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Rebase every live synthetic trading above its threshold.
    ///
    /// Callable by any signed account once per period. Gates are checked in order:
    /// initialization, pause, start time, elapsed period. The timestamp is written
    /// before any token is processed.
    ///
    /// Charged for a full registry up front, refunded down to the entries walked.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::make_positive_rebase(T::Registry::max_tokens()))]
    pub fn make_positive_rebase(origin: OriginFor<T>) -> DispatchResultWithPostInfo {
      ensure_signed(origin)?;
      let endpoints = Self::endpoints()
        .filter(|_| DevFundRate::<T>::get().deconstruct() > 0)
        .ok_or(Error::<T>::NotInitialized)?;
      ensure!(!Paused::<T>::get(), Error::<T>::Paused);

      let now = T::TimeProvider::now().as_secs();
      ensure!(now >= StartTime::<T>::get(), Error::<T>::NotStarted);
      let last = LastRebase::<T>::get();
      ensure!(
        now.saturating_sub(last) >= Period::<T>::get(),
        Error::<T>::TooSoon
      );
      // never moves backwards
      let timestamp = now.max(last);
      LastRebase::<T>::put(timestamp);

      let tokens = T::Registry::tokens();
      let walked = tokens.len() as u32;
      let mut rebased: u32 = 0;
      for entry in tokens {
        let token = entry.synthetic;
        if entry.deleted {
          log::debug!(target: LOG_TARGET, "skipping deleted synthetic {}", token);
          continue;
        }
        let amount = Self::positive_rebase_amount(token);
        if amount.is_zero() {
          log::debug!(target: LOG_TARGET, "synthetic {} not eligible", token);
          continue;
        }
        match with_storage_layer(|| Self::distribute(&endpoints, token, amount)) {
          Ok(()) => rebased = rebased.saturating_add(1),
          Err(error) => {
            log::warn!(
              target: LOG_TARGET,
              "rebase of synthetic {} rolled back: {:?}",
              token,
              error
            );
            Self::deposit_event(Event::RebaseFailed { token, error });
          }
        }
      }

      log::info!(
        target: LOG_TARGET,
        "positive rebase at {} expanded {} synthetic(s)",
        timestamp,
        rebased
      );
      Self::deposit_event(Event::PositiveRebaseExecuted { timestamp });
      Ok(Some(T::WeightInfo::make_positive_rebase(walked)).into())
    }

    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::set_endpoint())]
    pub fn set_dev_fund(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
      Self::ensure_owner(origin)?;
      DevFund::<T>::put(&account);
      Self::deposit_event(Event::DevFundUpdated { account });
      Ok(())
    }

    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::set_endpoint())]
    pub fn set_stable_fund(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
      Self::ensure_owner(origin)?;
      StableFund::<T>::put(&account);
      Self::deposit_event(Event::StableFundUpdated { account });
      Ok(())
    }

    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::set_endpoint())]
    pub fn set_board(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
      Self::ensure_owner(origin)?;
      Board::<T>::put(&account);
      Self::deposit_event(Event::BoardUpdated { account });
      Ok(())
    }

    #[pallet::call_index(4)]
    #[pallet::weight(T::WeightInfo::set_endpoint())]
    pub fn set_token_manager(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
      Self::ensure_owner(origin)?;
      TokenManager::<T>::put(&account);
      Self::deposit_event(Event::TokenManagerUpdated { account });
      Ok(())
    }

    #[pallet::call_index(5)]
    #[pallet::weight(T::WeightInfo::set_endpoint())]
    pub fn set_bond_manager(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
      Self::ensure_owner(origin)?;
      BondManager::<T>::put(&account);
      Self::deposit_event(Event::BondManagerUpdated { account });
      Ok(())
    }

    /// A zero rate leaves the engine uninitialized.
    #[pallet::call_index(6)]
    #[pallet::weight(T::WeightInfo::set_parameter())]
    pub fn set_dev_fund_rate(origin: OriginFor<T>, new_rate: Percent) -> DispatchResult {
      Self::ensure_owner(origin)?;
      let old_rate = DevFundRate::<T>::get();
      DevFundRate::<T>::put(new_rate);
      Self::deposit_event(Event::DevFundRateUpdated { old_rate, new_rate });
      Ok(())
    }

    #[pallet::call_index(7)]
    #[pallet::weight(T::WeightInfo::set_parameter())]
    pub fn set_stable_fund_rate(origin: OriginFor<T>, new_rate: Percent) -> DispatchResult {
      Self::ensure_owner(origin)?;
      let old_rate = StableFundRate::<T>::get();
      StableFundRate::<T>::put(new_rate);
      Self::deposit_event(Event::StableFundRateUpdated { old_rate, new_rate });
      Ok(())
    }

    #[pallet::call_index(8)]
    #[pallet::weight(T::WeightInfo::set_parameter())]
    pub fn set_threshold(origin: OriginFor<T>, new_threshold: u32) -> DispatchResult {
      Self::ensure_owner(origin)?;
      let old_threshold = Threshold::<T>::get();
      Threshold::<T>::put(new_threshold);
      Self::deposit_event(Event::ThresholdUpdated {
        old_threshold,
        new_threshold,
      });
      Ok(())
    }

    #[pallet::call_index(9)]
    #[pallet::weight(T::WeightInfo::set_parameter())]
    pub fn set_max_rebase(origin: OriginFor<T>, new_max_rebase: u32) -> DispatchResult {
      Self::ensure_owner(origin)?;
      let old_max_rebase = MaxRebase::<T>::get();
      MaxRebase::<T>::put(new_max_rebase);
      Self::deposit_event(Event::MaxRebaseUpdated {
        old_max_rebase,
        new_max_rebase,
      });
      Ok(())
    }

    #[pallet::call_index(10)]
    #[pallet::weight(T::WeightInfo::set_parameter())]
    pub fn set_period(origin: OriginFor<T>, new_period: u64) -> DispatchResult {
      Self::ensure_owner(origin)?;
      let old_period = Period::<T>::get();
      Period::<T>::put(new_period);
      Self::deposit_event(Event::PeriodUpdated {
        old_period,
        new_period,
      });
      Ok(())
    }

    /// Pause or resume positive rebases. Operator only.
    #[pallet::call_index(11)]
    #[pallet::weight(T::WeightInfo::set_pause_positive_rebase())]
    pub fn set_pause_positive_rebase(origin: OriginFor<T>, paused: bool) -> DispatchResult {
      let who = ensure_signed(origin)?;
      ensure!(
        Operator::<T>::get().as_ref() == Some(&who),
        Error::<T>::Unauthorized
      );
      Paused::<T>::put(paused);
      Self::deposit_event(Event::PauseUpdated { paused });
      Ok(())
    }

    #[pallet::call_index(12)]
    #[pallet::weight(T::WeightInfo::transfer_role())]
    pub fn transfer_ownership(origin: OriginFor<T>, new: T::AccountId) -> DispatchResult {
      let who = Self::ensure_owner(origin)?;
      Owner::<T>::put(&new);
      Self::deposit_event(Event::OwnershipTransferred {
        previous: Some(who),
        new,
      });
      Ok(())
    }

    /// Hand the operator role over. Callable by the operator or the owner.
    #[pallet::call_index(13)]
    #[pallet::weight(T::WeightInfo::transfer_role())]
    pub fn transfer_operator(origin: OriginFor<T>, new: T::AccountId) -> DispatchResult {
      let who = ensure_signed(origin)?;
      let previous = Operator::<T>::get();
      ensure!(
        previous.as_ref() == Some(&who) || Owner::<T>::get().as_ref() == Some(&who),
        Error::<T>::Unauthorized
      );
      Operator::<T>::put(&new);
      Self::deposit_event(Event::OperatorTransferred { previous, new });
      Ok(())
    }

    #[pallet::call_index(14)]
    #[pallet::weight(T::WeightInfo::set_parameter())]
    pub fn set_start_time(origin: OriginFor<T>, new_start_time: u64) -> DispatchResult {
      Self::ensure_owner(origin)?;
      let old_start_time = StartTime::<T>::get();
      StartTime::<T>::put(new_start_time);
      Self::deposit_event(Event::StartTimeUpdated {
        old_start_time,
        new_start_time,
      });
      Ok(())
    }
  }

  #[pallet::hooks]
  impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
    fn integrity_test() {
      assert!(
        T::Registry::max_tokens() <= T::MaxTokens::get(),
        "registry bound exceeds the benchmarked MaxTokens"
      );
    }
  }

  impl<T: Config> Pallet<T> {
    /// Whether every endpoint is set and the dev fund rate is non-zero
    pub fn is_initialized() -> bool {
      Self::endpoints().is_some() && DevFundRate::<T>::get().deconstruct() > 0
    }

    /// Configured endpoints, `None` while any of them is missing
    pub fn endpoints() -> Option<Endpoints<T::AccountId>> {
      Some(Endpoints {
        dev_fund: DevFund::<T>::get()?,
        stable_fund: StableFund::<T>::get()?,
        board: Board::<T>::get()?,
        token_manager: TokenManager::<T>::get()?,
        bond_manager: BondManager::<T>::get()?,
      })
    }

    /// Supply expansion a synthetic qualifies for at its cached price.
    ///
    /// Does not refresh the oracle; a synthetic without a published price yields zero.
    pub fn positive_rebase_amount(token: AssetId) -> Balance {
      let Some(price) = T::PriceSource::current_price(token) else {
        return Zero::zero();
      };
      Self::rebase_amount(
        T::Registry::total_supply(token),
        price,
        Threshold::<T>::get(),
        MaxRebase::<T>::get(),
      )
    }

    /// `supply * min(price - 1, max_rebase%)` once `price` reaches `threshold` hundredths.
    ///
    /// `price` is a ratio scaled by `PRECISION`. Rounds down and saturates at
    /// `Balance::MAX`.
    pub fn rebase_amount(supply: Balance, price: Price, threshold: u32, max_rebase: u32) -> Balance {
      if price.saturating_mul(100) < (threshold as u128).saturating_mul(PRECISION) {
        return Zero::zero();
      }
      let premium = price
        .saturating_sub(PRECISION)
        .saturating_mul(100)
        .min((max_rebase as u128).saturating_mul(PRECISION));
      let amount = U256::from(supply)
        .saturating_mul(U256::from(premium))
        / U256::from(100u128 * PRECISION);
      if amount > U256::from(u128::MAX) {
        u128::MAX
      } else {
        amount.as_u128()
      }
    }

    /// Apportion `amount` given the bond debt still outstanding.
    ///
    /// The dev share comes off the top, debt is served next and only what is left is
    /// split between the stability reserve and the board.
    pub fn split(amount: Balance, debt_outstanding: Balance) -> RebaseSplit {
      let dev = DevFundRate::<T>::get().mul_floor(amount);
      let remaining = amount.saturating_sub(dev);
      let debt = remaining.min(debt_outstanding);
      let remaining = remaining.saturating_sub(debt);
      let stable = StableFundRate::<T>::get().mul_floor(remaining);
      RebaseSplit {
        dev,
        debt,
        stable,
        board: remaining.saturating_sub(stable),
      }
    }

    fn distribute(
      endpoints: &Endpoints<T::AccountId>,
      token: AssetId,
      amount: Balance,
    ) -> DispatchResult {
      Self::deposit_event(Event::RebaseTotal { token, amount });
      let split = Self::split(amount, T::DebtLedger::outstanding(token));
      let minter = &endpoints.token_manager;

      if !split.dev.is_zero() {
        T::Registry::mint(minter, token, &endpoints.dev_fund, split.dev)?;
        Self::deposit_event(Event::DevFundFunded {
          token,
          amount: split.dev,
        });
      }
      if !split.debt.is_zero() {
        T::Registry::mint(minter, token, &endpoints.bond_manager, split.debt)?;
        Self::deposit_event(Event::DebtFunded {
          token,
          amount: split.debt,
        });
      }
      if !split.stable.is_zero() {
        T::Registry::mint(minter, token, &endpoints.stable_fund, split.stable)?;
        Self::deposit_event(Event::StableFundFunded {
          token,
          amount: split.stable,
        });
      }
      if !split.board.is_zero() {
        T::Registry::mint(minter, token, &endpoints.board, split.board)?;
        T::RewardPool::deposit(token, split.board)?;
        Self::deposit_event(Event::BoardFunded {
          token,
          amount: split.board,
        });
      }
      Ok(())
    }

    fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
      let who = ensure_signed(origin)?;
      ensure!(
        Owner::<T>::get().as_ref() == Some(&who),
        Error::<T>::Unauthorized
      );
      Ok(who)
    }
  }

  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    pub owner: Option<T::AccountId>,
    pub operator: Option<T::AccountId>,
    pub dev_fund: Option<T::AccountId>,
    pub stable_fund: Option<T::AccountId>,
    pub board: Option<T::AccountId>,
    pub token_manager: Option<T::AccountId>,
    pub bond_manager: Option<T::AccountId>,
    pub dev_fund_rate: Percent,
    pub stable_fund_rate: Percent,
    /// Overrides `DefaultThreshold` when set
    pub threshold: Option<u32>,
    /// Overrides `DefaultMaxRebase` when set
    pub max_rebase: Option<u32>,
    /// Overrides `DefaultPeriod` when set
    pub period: Option<u64>,
    /// Earliest unix second of the first rebase, zero for no bound
    pub start_time: u64,
    pub paused: bool,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      if let Some(owner) = &self.owner {
        Owner::<T>::put(owner);
      }
      if let Some(operator) = &self.operator {
        Operator::<T>::put(operator);
      }
      if let Some(dev_fund) = &self.dev_fund {
        DevFund::<T>::put(dev_fund);
      }
      if let Some(stable_fund) = &self.stable_fund {
        StableFund::<T>::put(stable_fund);
      }
      if let Some(board) = &self.board {
        Board::<T>::put(board);
      }
      if let Some(token_manager) = &self.token_manager {
        TokenManager::<T>::put(token_manager);
      }
      if let Some(bond_manager) = &self.bond_manager {
        BondManager::<T>::put(bond_manager);
      }
      DevFundRate::<T>::put(self.dev_fund_rate);
      StableFundRate::<T>::put(self.stable_fund_rate);
      if let Some(threshold) = self.threshold {
        Threshold::<T>::put(threshold);
      }
      if let Some(max_rebase) = self.max_rebase {
        MaxRebase::<T>::put(max_rebase);
      }
      if let Some(period) = self.period {
        Period::<T>::put(period);
      }
      StartTime::<T>::put(self.start_time);
      Paused::<T>::put(self.paused);
    }
  }
}
