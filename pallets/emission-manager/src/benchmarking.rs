use super::*;
use crate::BenchmarkHelper as _;
use frame::deps::sp_runtime::Percent;
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_system::RawOrigin;
use primitives::TokenRegistry;

fn set_owner<T: Config>() -> T::AccountId {
  let owner: T::AccountId = account("owner", 0, 0);
  Owner::<T>::put(&owner);
  owner
}

/// Wire every endpoint and open the rebase window.
fn initialize<T: Config>() {
  DevFund::<T>::put(account::<T::AccountId>("dev_fund", 0, 0));
  StableFund::<T>::put(account::<T::AccountId>("stable_fund", 0, 0));
  Board::<T>::put(account::<T::AccountId>("board", 0, 0));
  BondManager::<T>::put(account::<T::AccountId>("bond_manager", 0, 0));
  TokenManager::<T>::put(T::BenchmarkHelper::mint_authority());
  DevFundRate::<T>::put(Percent::from_percent(2));
  StableFundRate::<T>::put(Percent::from_percent(70));
  Period::<T>::put(0);
}

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn make_positive_rebase(n: Linear<1, { T::Registry::max_tokens() }>) {
    initialize::<T>();
    for index in 0..n {
      T::BenchmarkHelper::register_eligible_token(index).expect("token setup failed");
    }
    let caller: T::AccountId = whitelisted_caller();

    #[extrinsic_call]
    _(RawOrigin::Signed(caller));

    assert!(LastRebase::<T>::exists());
  }

  #[benchmark]
  fn set_endpoint() {
    let owner = set_owner::<T>();
    let dev_fund: T::AccountId = account("dev_fund", 0, 0);

    #[extrinsic_call]
    set_dev_fund(RawOrigin::Signed(owner), dev_fund.clone());

    assert_eq!(DevFund::<T>::get(), Some(dev_fund));
  }

  #[benchmark]
  fn set_parameter() {
    let owner = set_owner::<T>();

    #[extrinsic_call]
    set_threshold(RawOrigin::Signed(owner), 110);

    assert_eq!(Threshold::<T>::get(), 110);
  }

  #[benchmark]
  fn set_pause_positive_rebase() {
    let operator: T::AccountId = account("operator", 0, 0);
    Operator::<T>::put(&operator);

    #[extrinsic_call]
    _(RawOrigin::Signed(operator), true);

    assert!(Paused::<T>::get());
  }

  #[benchmark]
  fn transfer_role() {
    let owner = set_owner::<T>();
    let new: T::AccountId = account("new_owner", 0, 0);

    #[extrinsic_call]
    transfer_ownership(RawOrigin::Signed(owner), new.clone());

    assert_eq!(Owner::<T>::get(), Some(new));
  }

  impl_benchmark_test_suite!(Pallet, crate::mock::bare_test_ext(), crate::mock::Test);
}
