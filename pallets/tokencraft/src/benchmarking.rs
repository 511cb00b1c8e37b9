//! Benchmarking setup for pallet-tokencraft

use super::*;

#[allow(unused)]
use crate::Pallet as TokenCraft;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn set_role() {
        let owner: T::AccountId = whitelisted_caller();
        Owner::<T>::put(&owner);
        let who: T::AccountId = account("who", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), Role::Minter, who.clone(), true);

        assert_eq!(Roles::<T>::get(Role::Minter, &who), true);
    }

    #[benchmark]
    fn mint() {
        let minter: T::AccountId = whitelisted_caller();
        Roles::<T>::insert(Role::Minter, &minter, true);
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;

        #[extrinsic_call]
        _(RawOrigin::Signed(minter), amount, recipient.clone());

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn burn() {
        let burner: T::AccountId = whitelisted_caller();
        Roles::<T>::insert(Role::Burner, &burner, true);
        Balances::<T>::insert(&burner, 10_000_000);
        TotalSupply::<T>::put(10_000_000u128);

        #[extrinsic_call]
        _(RawOrigin::Signed(burner.clone()), 1_000_000);

        assert_eq!(Balances::<T>::get(&burner), 9_000_000);
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        Balances::<T>::insert(&caller, 10_000_000);
        TotalSupply::<T>::put(10_000_000u128);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), 1_000_000, recipient.clone());

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
    }

    #[benchmark]
    fn transfer_fixed() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        Balances::<T>::insert(&caller, 10_000_000);
        TotalSupply::<T>::put(10_000_000u128);
        let memo = Memo::truncate_from([7u8; MAX_MEMO_LEN as usize].to_vec());

        #[extrinsic_call]
        _(
            RawOrigin::Signed(caller.clone()),
            1_000_000,
            caller.clone(),
            recipient.clone(),
            Some(memo),
        );

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
    }

    #[benchmark]
    fn set_pause_status() {
        let owner: T::AccountId = whitelisted_caller();
        Owner::<T>::put(&owner);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), true);

        assert_eq!(Paused::<T>::get(), true);
    }

    impl_benchmark_test_suite!(TokenCraft, crate::mock::new_test_ext(), crate::mock::Test);
}
