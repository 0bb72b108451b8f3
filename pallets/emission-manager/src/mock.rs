extern crate alloc;

use crate as pallet_emission_manager;
use core::time::Duration;
use polkadot_sdk::frame_support::{
  PalletId, construct_runtime, derive_impl,
  traits::{ConstU32, ConstU64, ConstU128, UnixTime, fungibles::Mutate},
};
use polkadot_sdk::frame_system::{self, EnsureRoot, EnsureSigned};
use polkadot_sdk::sp_runtime::{
  BuildStorage, DispatchError, DispatchResult,
  testing::H256,
  traits::{AccountIdConversion, BlakeTwo256, IdentityLookup},
};
use primitives::{
  AssetId, Balance, DebtLedger, OracleId, Price, RewardPool, TwapOracle,
  ecosystem::{params, pallet_ids},
};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

pub const OWNER: u64 = 1;
pub const OPERATOR: u64 = 2;
pub const KEEPER: u64 = 3;
pub const HOLDER: u64 = 4;
pub const DEV_FUND: u64 = 5;
pub const STABLE_FUND: u64 = 6;

pub const UNDERLYING: AssetId = 1;
pub const SYN_A: AssetId = 10;
pub const BOND_A: AssetId = 11;
pub const SYN_B: AssetId = 20;
pub const BOND_B: AssetId = 21;
pub const SYN_C: AssetId = 30;
pub const BOND_C: AssetId = 31;
pub const SYN_D: AssetId = 40;
pub const BOND_D: AssetId = 41;

pub const ORACLE_A: OracleId = 1;
pub const ORACLE_B: OracleId = 2;
pub const ORACLE_C: OracleId = 3;
pub const ORACLE_D: OracleId = 4;

/// Wall clock at genesis, well past one period after the epoch
pub const START: u64 = 1_700_000_000;
pub const PERIOD: u64 = params::DEFAULT_REBASE_PERIOD;

thread_local! {
    static NOW: RefCell<u64> = const { RefCell::new(START) };

    // Spot prices observed by each oracle, published on `update`
    static SPOT_PRICES: RefCell<BTreeMap<OracleId, Price>> = const { RefCell::new(BTreeMap::new()) };
    static PUBLISHED_PRICES: RefCell<BTreeMap<OracleId, Price>> = const { RefCell::new(BTreeMap::new()) };

    static OUTSTANDING_DEBT: RefCell<BTreeMap<AssetId, Balance>> = const { RefCell::new(BTreeMap::new()) };

    // Board deposits in arrival order
    static DEPOSITS: RefCell<alloc::vec::Vec<(AssetId, Balance)>> = const { RefCell::new(alloc::vec::Vec::new()) };
    static REJECTED_DEPOSITS: RefCell<BTreeSet<AssetId>> = const { RefCell::new(BTreeSet::new()) };

    static BENCHMARKED_TOKENS: RefCell<u32> = const { RefCell::new(params::MAX_SYNTHETIC_TOKENS) };
}

/// Emission `MaxTokens`, adjustable per test
pub struct BenchmarkedTokens;
impl polkadot_sdk::frame_support::traits::Get<u32> for BenchmarkedTokens {
  fn get() -> u32 {
    BENCHMARKED_TOKENS.with(|m| *m.borrow())
  }
}

pub fn set_benchmarked_tokens(max: u32) {
  BENCHMARKED_TOKENS.with(|m| *m.borrow_mut() = max);
}

pub struct MockTime;
impl UnixTime for MockTime {
  fn now() -> Duration {
    Duration::from_secs(NOW.with(|n| *n.borrow()))
  }
}

pub fn now() -> u64 {
  NOW.with(|n| *n.borrow())
}

pub fn set_now(secs: u64) {
  NOW.with(|n| *n.borrow_mut() = secs);
}

pub fn advance_time(secs: u64) {
  NOW.with(|n| *n.borrow_mut() += secs);
}

pub struct MockOracle;
impl TwapOracle for MockOracle {
  fn update(oracle: OracleId) -> DispatchResult {
    let spot = SPOT_PRICES
      .with(|p| p.borrow().get(&oracle).copied())
      .ok_or(DispatchError::Other("No observations"))?;
    PUBLISHED_PRICES.with(|p| p.borrow_mut().insert(oracle, spot));
    Ok(())
  }

  fn average_price(oracle: OracleId) -> Option<Price> {
    PUBLISHED_PRICES.with(|p| p.borrow().get(&oracle).copied())
  }
}

pub fn set_spot_price(oracle: OracleId, price: Price) {
  SPOT_PRICES.with(|p| p.borrow_mut().insert(oracle, price));
}

pub struct MockDebtLedger;
impl DebtLedger for MockDebtLedger {
  fn outstanding(token: AssetId) -> Balance {
    OUTSTANDING_DEBT.with(|d| d.borrow().get(&token).copied().unwrap_or_default())
  }
}

pub fn set_outstanding_debt(token: AssetId, amount: Balance) {
  OUTSTANDING_DEBT.with(|d| d.borrow_mut().insert(token, amount));
}

pub struct MockRewardPool;
impl RewardPool for MockRewardPool {
  fn deposit(token: AssetId, amount: Balance) -> DispatchResult {
    if REJECTED_DEPOSITS.with(|r| r.borrow().contains(&token)) {
      return Err(DispatchError::Other("Reward pool closed"));
    }
    DEPOSITS.with(|d| d.borrow_mut().push((token, amount)));
    Ok(())
  }
}

pub fn reject_deposits(token: AssetId) {
  REJECTED_DEPOSITS.with(|r| r.borrow_mut().insert(token));
}

pub fn deposits() -> alloc::vec::Vec<(AssetId, Balance)> {
  DEPOSITS.with(|d| d.borrow().clone())
}

type Block = frame_system::mocking::MockBlock<Test>;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    Balances: polkadot_sdk::pallet_balances,
    Assets: polkadot_sdk::pallet_assets,
    TokenManager: pallet_token_manager,
    EmissionManager: pallet_emission_manager,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = u64;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = H256;
  type Hashing = BlakeTwo256;
  type AccountData = polkadot_sdk::pallet_balances::AccountData<u128>;
}

impl polkadot_sdk::pallet_balances::Config for Test {
  type MaxLocks = ();
  type MaxReserves = ();
  type ReserveIdentifier = [u8; 8];
  type Balance = u128;
  type DustRemoval = ();
  type RuntimeEvent = RuntimeEvent;
  type ExistentialDeposit = ConstU128<1>;
  type AccountStore = System;
  type WeightInfo = ();
  type FreezeIdentifier = ();
  type MaxFreezes = ();
  type RuntimeHoldReason = ();
  type RuntimeFreezeReason = ();
  type DoneSlashHandler = ();
}

impl polkadot_sdk::pallet_assets::Config for Test {
  type RuntimeEvent = RuntimeEvent;
  type Balance = u128;
  type AssetId = u32;
  type AssetIdParameter = u32;
  type Currency = Balances;
  type CreateOrigin =
    polkadot_sdk::frame_support::traits::AsEnsureOriginWithArg<EnsureSigned<Self::AccountId>>;
  type ForceOrigin = EnsureRoot<Self::AccountId>;
  type AssetDeposit = ConstU128<1>;
  type AssetAccountDeposit = ConstU128<1>;
  type MetadataDepositBase = ConstU128<1>;
  type MetadataDepositPerByte = ConstU128<1>;
  type ApprovalDeposit = ConstU128<1>;
  type StringLimit = ConstU32<50>;
  type Freezer = ();
  type Extra = ();
  type ReserveData = ();
  type CallbackHandle = ();
  type WeightInfo = ();
  type RemoveItemsLimit = ConstU32<5>;
  type Holder = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = ();
}

pub struct TokenManagerPalletId;
impl polkadot_sdk::frame_support::traits::Get<PalletId> for TokenManagerPalletId {
  fn get() -> PalletId {
    PalletId(*pallet_ids::TOKEN_MANAGER_PALLET_ID)
  }
}

impl pallet_token_manager::Config for Test {
  type Assets = Assets;
  type Oracle = MockOracle;
  type RegistryOrigin = EnsureRoot<u64>;
  type PalletId = TokenManagerPalletId;
  type MaxTokens = ConstU32<{ params::MAX_SYNTHETIC_TOKENS }>;
  type WeightInfo = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = TokenManagerBenchmarkHelper;
}

impl pallet_emission_manager::Config for Test {
  type Registry = TokenManager;
  type PriceSource = TokenManager;
  type DebtLedger = MockDebtLedger;
  type RewardPool = MockRewardPool;
  type TimeProvider = MockTime;
  type DefaultPeriod = ConstU64<{ params::DEFAULT_REBASE_PERIOD }>;
  type DefaultThreshold = ConstU32<{ params::DEFAULT_REBASE_THRESHOLD }>;
  type DefaultMaxRebase = ConstU32<{ params::DEFAULT_MAX_REBASE }>;
  type MaxTokens = BenchmarkedTokens;
  type WeightInfo = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = EmissionBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct TokenManagerBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl pallet_token_manager::BenchmarkHelper for TokenManagerBenchmarkHelper {
  fn create_asset(asset: AssetId) -> DispatchResult {
    use polkadot_sdk::frame_support::traits::fungibles::Inspect;
    if !Assets::asset_exists(asset) {
      Assets::force_create(RuntimeOrigin::root(), asset, OWNER, true, 1)?;
    }
    Ok(())
  }

  fn prepare_oracle(oracle: OracleId) -> DispatchResult {
    set_spot_price(oracle, params::PRECISION);
    Ok(())
  }
}

#[cfg(feature = "runtime-benchmarks")]
pub struct EmissionBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl crate::BenchmarkHelper<u64> for EmissionBenchmarkHelper {
  fn mint_authority() -> u64 {
    token_manager_account()
  }

  fn register_eligible_token(index: u32) -> DispatchResult {
    let synthetic = 1_000 + index * 2;
    let bond = synthetic + 1;
    let oracle = 100 + index;
    for asset in [synthetic, bond] {
      Assets::force_create(RuntimeOrigin::root(), asset, OWNER, true, 1)?;
    }
    TokenManager::add_token(RuntimeOrigin::root(), synthetic, bond, UNDERLYING, oracle)?;
    Assets::mint_into(synthetic, &HOLDER, 1_000_000 * params::PRECISION)?;
    set_spot_price(oracle, 2 * params::PRECISION);
    TokenManager::update_oracle(RuntimeOrigin::signed(KEEPER), synthetic)
  }
}

pub fn token_manager_account() -> u64 {
  TokenManager::account_id()
}

pub fn board_account() -> u64 {
  PalletId(*pallet_ids::BOARD_PALLET_ID).into_account_truncating()
}

pub fn bond_manager_account() -> u64 {
  PalletId(*pallet_ids::BOND_MANAGER_PALLET_ID).into_account_truncating()
}

pub fn balance(token: AssetId, who: u64) -> Balance {
  Assets::balance(token, who)
}

/// Mint `amount` of `token` to the holder, outside the engine
pub fn issue(token: AssetId, amount: Balance) {
  Assets::mint_into(token, &HOLDER, amount).unwrap();
}

/// Observe `price` on the token's oracle and publish it through the registry
pub fn publish_price(token: AssetId, price: Price) {
  let oracle = TokenManager::token(token).unwrap().oracle;
  set_spot_price(oracle, price);
  TokenManager::update_oracle(RuntimeOrigin::signed(KEEPER), token).unwrap();
}

pub fn register(token: AssetId, bond: AssetId, oracle: OracleId) {
  TokenManager::add_token(RuntimeOrigin::root(), token, bond, UNDERLYING, oracle).unwrap();
}

/// Engine wired to every endpoint with a 2% dev cut and a 70% stable cut; `SYN_A`
/// registered.
pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  build_ext(
    alloc::vec![(SYN_A, BOND_A, UNDERLYING, ORACLE_A)],
    pallet_emission_manager::GenesisConfig::<Test> {
      owner: Some(OWNER),
      operator: Some(OPERATOR),
      dev_fund: Some(DEV_FUND),
      stable_fund: Some(STABLE_FUND),
      board: Some(board_account()),
      token_manager: Some(TokenManager::account_id()),
      bond_manager: Some(bond_manager_account()),
      dev_fund_rate: params::DEFAULT_DEV_FUND_RATE,
      stable_fund_rate: params::DEFAULT_STABLE_FUND_RATE,
      ..Default::default()
    },
  )
}

/// Engine with roles but no endpoints and an empty registry.
pub fn bare_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  build_ext(
    alloc::vec![],
    pallet_emission_manager::GenesisConfig::<Test> {
      owner: Some(OWNER),
      operator: Some(OPERATOR),
      ..Default::default()
    },
  )
}

fn build_ext(
  tokens: alloc::vec::Vec<(AssetId, AssetId, AssetId, OracleId)>,
  emission: pallet_emission_manager::GenesisConfig<Test>,
) -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  polkadot_sdk::pallet_balances::GenesisConfig::<Test> {
    balances: alloc::vec![(OWNER, 1_000), (KEEPER, 1_000), (HOLDER, 1_000)],
    dev_accounts: None,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  polkadot_sdk::pallet_assets::GenesisConfig::<Test> {
    assets: [
      UNDERLYING, SYN_A, BOND_A, SYN_B, BOND_B, SYN_C, BOND_C, SYN_D, BOND_D,
    ]
    .into_iter()
    .map(|id| (id, OWNER, true, 1))
    .collect(),
    metadata: alloc::vec![],
    accounts: alloc::vec![],
    reserves: alloc::vec![],
    next_asset_id: None,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  pallet_token_manager::GenesisConfig::<Test> {
    tokens,
    _marker: Default::default(),
  }
  .assimilate_storage(&mut t)
  .unwrap();

  emission.assimilate_storage(&mut t).unwrap();

  NOW.with(|n| *n.borrow_mut() = START);
  SPOT_PRICES.with(|p| p.borrow_mut().clear());
  PUBLISHED_PRICES.with(|p| p.borrow_mut().clear());
  OUTSTANDING_DEBT.with(|d| d.borrow_mut().clear());
  DEPOSITS.with(|d| d.borrow_mut().clear());
  REJECTED_DEPOSITS.with(|r| r.borrow_mut().clear());
  set_benchmarked_tokens(params::MAX_SYNTHETIC_TOKENS);

  let mut ext: polkadot_sdk::sp_io::TestExternalities = t.into();
  ext.execute_with(|| System::set_block_number(1));
  ext
}
