//! # TokenCraft pallet
//!
//! A role-gated fungible token ledger. A single owner identity, fixed at
//! genesis, grants per-account `Minter`/`Burner` roles and controls a global
//! pause switch; any account may transfer its own funds while the ledger is
//! unpaused. Every dispatchable validates all preconditions before touching
//! storage, so a failed call leaves the ledger untouched.
//!
//! Precondition ordering is part of the external contract: authorization is
//! checked before amount/balance validation, and the pause flag is checked
//! before amount/balance validation on transfer-class calls. External
//! callers branch on the stable numeric codes in [`error_code`].

#![cfg_attr(not(feature = "std"), no_std)]
// Constant extrinsic weights until generated WeightInfo lands
#![allow(deprecated)]

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;
use sp_std::prelude::*;

pub use pallet::*;

pub mod migrations;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

/// Longest memo accepted on [`Pallet::transfer_fixed`], in bytes.
pub const MAX_MEMO_LEN: u32 = 34;

/// Opaque memo carried alongside a transfer for auditability. Never
/// interpreted by the ledger.
pub type Memo = BoundedVec<u8, ConstU32<MAX_MEMO_LEN>>;

/// Stable numeric identifiers for [`Error`] variants.
///
/// These are published to external callers, which branch on them; they must
/// never change once released.
pub mod error_code {
    pub const UNAUTHORIZED: u16 = 1001;
    pub const INSUFFICIENT_BALANCE: u16 = 1002;
    pub const INVALID_AMOUNT: u16 = 1003;
    pub const CONTRACT_PAUSED: u16 = 1004;
    pub const OVERFLOW: u16 = 1005;
}

/// Capability grants held per account, independent of ownership.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Encode,
    Decode,
    DecodeWithMemTracking,
    MaxEncodedLen,
    TypeInfo,
    RuntimeDebug,
)]
pub enum Role {
    /// May create new units via `mint`.
    Minter,
    /// May destroy units from its own balance via `burn`.
    Burner,
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// The owner identity, fixed at genesis. Only the owner may set roles
    /// and toggle the pause switch. There is no rotation call.
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Role grants. An absent entry means the role is not held.
    #[pallet::storage]
    #[pallet::getter(fn has_role)]
    pub type Roles<T: Config> =
        StorageDoubleMap<_, Blake2_128Concat, Role, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Global emergency stop. Gates transfer-class operations only.
    #[pallet::storage]
    #[pallet::getter(fn is_paused)]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    /// Token name (e.g., "TokenCraft")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "TCRAFT")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Token decimals
    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply. Equals the sum of all balances at all times.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances. Absent entries are zero.
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// A role grant was set or cleared by the owner
        RoleSet { role: Role, who: T::AccountId, granted: bool },
        /// New tokens minted
        Minted { to: T::AccountId, amount: u128 },
        /// Tokens destroyed from the caller's own balance
        Burned { from: T::AccountId, amount: u128 },
        /// Tokens moved from one account to another; `memo` is carried
        /// opaquely when supplied via `transfer_fixed`
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128, memo: Option<Memo> },
        /// The pause switch was set by the owner
        PauseStatusSet { paused: bool },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the owner or lacks the required role grant.
        Unauthorized,
        /// A debit would drive a balance below zero.
        InsufficientBalance,
        /// Amount must be greater than zero.
        InvalidAmount,
        /// A transfer-class operation was attempted while paused.
        ContractPaused,
        /// Balance or total supply arithmetic overflowed.
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Set or clear a role grant for `who`. Owner only. Idempotent:
        /// writing the current value succeeds and re-emits the event.
        #[pallet::call_index(0)]
        #[pallet::weight(10_000)]
        pub fn set_role(
            origin: OriginFor<T>,
            role: Role,
            who: T::AccountId,
            granted: bool,
        ) -> DispatchResult {
            Self::ensure_owner(origin)?;
            if granted {
                Roles::<T>::insert(role, &who, true);
            } else {
                Roles::<T>::remove(role, &who);
            }
            Self::deposit_event(Event::RoleSet { role, who, granted });
            Ok(())
        }

        /// Create `amount` new units and credit them to `recipient`.
        /// Caller must hold the `Minter` role. Not gated by pause.
        #[pallet::call_index(1)]
        #[pallet::weight(10_000)]
        pub fn mint(origin: OriginFor<T>, amount: u128, recipient: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(Roles::<T>::get(Role::Minter, &who), Error::<T>::Unauthorized);
            ensure!(amount > 0, Error::<T>::InvalidAmount);

            let new_supply =
                TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
            let new_balance =
                Balances::<T>::get(&recipient).checked_add(amount).ok_or(Error::<T>::Overflow)?;

            TotalSupply::<T>::put(new_supply);
            Balances::<T>::insert(&recipient, new_balance);
            Self::deposit_event(Event::Minted { to: recipient, amount });
            Ok(())
        }

        /// Destroy `amount` units from the caller's own balance. Caller must
        /// hold the `Burner` role; burning another account's balance is not
        /// expressible. Not gated by pause.
        #[pallet::call_index(2)]
        #[pallet::weight(10_000)]
        pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(Roles::<T>::get(Role::Burner, &who), Error::<T>::Unauthorized);
            ensure!(amount > 0, Error::<T>::InvalidAmount);

            let balance = Balances::<T>::get(&who);
            ensure!(balance >= amount, Error::<T>::InsufficientBalance);

            Balances::<T>::insert(&who, balance - amount);
            TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_sub(amount));
            Self::deposit_event(Event::Burned { from: who, amount });
            Ok(())
        }

        /// Move `amount` units from the caller to `recipient`. No role
        /// required; fails while the ledger is paused.
        #[pallet::call_index(3)]
        #[pallet::weight(10_000)]
        pub fn transfer(
            origin: OriginFor<T>,
            amount: u128,
            recipient: T::AccountId,
        ) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::do_transfer(&sender, &recipient, amount, None)
        }

        /// SIP-010-style transfer with an explicit `sender` (must equal the
        /// caller) and an optional opaque memo carried into the event.
        #[pallet::call_index(4)]
        #[pallet::weight(10_000)]
        pub fn transfer_fixed(
            origin: OriginFor<T>,
            amount: u128,
            sender: T::AccountId,
            recipient: T::AccountId,
            memo: Option<Memo>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(who == sender, Error::<T>::Unauthorized);
            Self::do_transfer(&sender, &recipient, amount, memo)
        }

        /// Set the pause switch. Owner only. Writing the current value is a
        /// no-op success.
        #[pallet::call_index(5)]
        #[pallet::weight(10_000)]
        pub fn set_pause_status(origin: OriginFor<T>, paused: bool) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Paused::<T>::put(paused);
            Self::deposit_event(Event::PauseStatusSet { paused });
            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        /// Authenticate the caller and require it to be the owner.
        fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
            let who = ensure_signed(origin)?;
            ensure!(Owner::<T>::get().as_ref() == Some(&who), Error::<T>::Unauthorized);
            Ok(who)
        }

        /// Shared transfer path. Check order: pause, amount, sender balance,
        /// recipient headroom; writes happen only after every check passes.
        fn do_transfer(
            from: &T::AccountId,
            to: &T::AccountId,
            amount: u128,
            memo: Option<Memo>,
        ) -> DispatchResult {
            ensure!(!Paused::<T>::get(), Error::<T>::ContractPaused);
            ensure!(amount > 0, Error::<T>::InvalidAmount);

            let from_balance = Balances::<T>::get(from);
            ensure!(from_balance >= amount, Error::<T>::InsufficientBalance);

            if from != to {
                let new_to_balance =
                    Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
                Balances::<T>::insert(from, from_balance - amount);
                Balances::<T>::insert(to, new_to_balance);
            }
            // A self-transfer leaves both entries as they were.

            Self::deposit_event(Event::Transferred {
                from: from.clone(),
                to: to.clone(),
                amount,
                memo,
            });
            Ok(())
        }

        /// Re-derive the supply invariant: `TotalSupply == Σ Balances`.
        #[cfg(any(feature = "try-runtime", test))]
        pub fn do_try_state() -> Result<(), DispatchError> {
            let sum = Balances::<T>::iter_values().fold(0u128, |acc, b| acc.saturating_add(b));
            ensure!(
                sum == TotalSupply::<T>::get(),
                DispatchError::Other("total supply does not match sum of balances")
            );
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// The owner identity; immutable for the ledger's lifetime
        pub owner: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        /// Accounts granted the minter role at genesis
        pub minters: Vec<T::AccountId>,
        /// Accounts granted the burner role at genesis
        pub burners: Vec<T::AccountId>,
        /// Initial token balances (account, amount)
        pub initial_balances: Vec<(T::AccountId, u128)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            if let Some(ref owner) = self.owner {
                Owner::<T>::put(owner);
            }

            for who in &self.minters {
                Roles::<T>::insert(Role::Minter, who, true);
            }
            for who in &self.burners {
                Roles::<T>::insert(Role::Burner, who, true);
            }

            // Seed balances; the supply starts as their sum so the ledger
            // invariant holds from block zero.
            let mut total: u128 = 0;
            for (account, amount) in &self.initial_balances {
                Balances::<T>::insert(account, amount);
                total = total.saturating_add(*amount);
            }
            TotalSupply::<T>::put(total);
        }
    }
}

impl<T> Error<T> {
    /// Stable numeric identifier published to external callers.
    pub fn code(&self) -> u16 {
        match self {
            Error::Unauthorized => error_code::UNAUTHORIZED,
            Error::InsufficientBalance => error_code::INSUFFICIENT_BALANCE,
            Error::InvalidAmount => error_code::INVALID_AMOUNT,
            Error::ContractPaused => error_code::CONTRACT_PAUSED,
            Error::Overflow => error_code::OVERFLOW,
            // The remaining generated variant only carries the pallet's type
            // parameter and is uninhabited.
            _ => unreachable!(),
        }
    }
}
