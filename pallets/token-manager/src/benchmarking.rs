use super::*;
use crate::BenchmarkHelper as _;
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_system::RawOrigin;

const SYNTHETIC: primitives::AssetId = 1_001;
const BOND: primitives::AssetId = 1_002;
const UNDERLYING: primitives::AssetId = 1_003;
const ORACLE: primitives::OracleId = 7;

fn create_assets<T: Config>() {
  for asset in [SYNTHETIC, BOND, UNDERLYING] {
    T::BenchmarkHelper::create_asset(asset).expect("asset creation failed");
  }
}

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn add_token() {
    create_assets::<T>();

    #[extrinsic_call]
    add_token(RawOrigin::Root, SYNTHETIC, BOND, UNDERLYING, ORACLE);

    assert_eq!(TokenIndex::<T>::get(SYNTHETIC), Some(0));
  }

  #[benchmark]
  fn delete_token() {
    create_assets::<T>();
    Pallet::<T>::add_token(RawOrigin::Root.into(), SYNTHETIC, BOND, UNDERLYING, ORACLE)
      .expect("registration failed");

    #[extrinsic_call]
    delete_token(RawOrigin::Root, SYNTHETIC);

    assert!(!Pallet::<T>::token(SYNTHETIC).expect("registered").is_live());
  }

  #[benchmark]
  fn update_oracle() {
    create_assets::<T>();
    T::BenchmarkHelper::prepare_oracle(ORACLE).expect("oracle setup failed");
    Pallet::<T>::add_token(RawOrigin::Root.into(), SYNTHETIC, BOND, UNDERLYING, ORACLE)
      .expect("registration failed");
    let caller: T::AccountId = whitelisted_caller();

    #[extrinsic_call]
    update_oracle(RawOrigin::Signed(caller), SYNTHETIC);
  }

  impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
