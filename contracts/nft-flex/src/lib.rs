#![no_std]

#[cfg(test)]
extern crate std;

pub mod nft;

mod storage;


#[cfg(test)]
mod test_invariants;

use soroban_sdk::{contract, contractimpl, panic_with_error, token, Address, Env, Symbol};

use nftflex_lib::{
    validation, Asset, Error, Rental, EARNINGS_WITHDRAWN_EVENT,
    RENTAL_CREATED_EVENT, RENTAL_ENDED_EVENT, RENTAL_STARTED_EVENT,
};

use nft::NftOwnershipClient;
use storage::*;

fn require_initialized(env: &Env) {
    if get_admin(env).is_none() {
        panic_with_error!(env, Error::NotInitialized);
    }
}

fn load_rental(env: &Env, rental_id: u64) -> Rental {
    get_rental(env, rental_id).unwrap_or_else(|| panic_with_error!(env, Error::RentalDoesNotExist))
}

/// Resolve the token contract that settles a rental's asset.
fn settlement_token(env: &Env, asset: &Asset) -> Address {
    match asset {
        Asset::Native => {
            get_native_token(env).unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
        }
        Asset::Token(address) => address.clone(),
    }
}

fn escrow_credit(env: &Env, token: &Address, amount: i128) {
    let balance = get_escrow(env, token)
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(env, Error::AmountOverflow));
    set_escrow(env, token, balance);
}

fn escrow_debit(env: &Env, token: &Address, amount: i128) {
    let balance = get_escrow(env, token)
        .checked_sub(amount)
        .unwrap_or_else(|| panic_with_error!(env, Error::AmountOverflow));
    set_escrow(env, token, balance);
}

#[contract]
pub struct NftFlex;

#[contractimpl]
impl NftFlex {
    /// One-time initialization: records the admin and the Stellar Asset
    /// Contract that settles `Asset::Native` rentals.
    pub fn init_contract(env: Env, admin: Address, native_token: Address) {
        if get_admin(&env).is_some() {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }

        admin.require_auth();
        set_admin(&env, &admin);
        set_native_token(&env, &native_token);
    }

    /// List an NFT for hourly rental. The caller must currently own the
    /// token per the external registry; no funds move here.
    pub fn create_rental(
        env: Env,
        owner: Address,
        nft_address: Address,
        token_id: u64,
        price_per_hour: i128,
        is_fractional: bool,
        asset: Asset,
        collateral_amount: i128,
    ) -> u64 {
        owner.require_auth();
        require_initialized(&env);

        let current_owner = NftOwnershipClient::new(&env, &nft_address).owner_of(&token_id);
        if current_owner != owner {
            panic_with_error!(&env, Error::SenderIsNotOwnerOfTheNft);
        }
        if price_per_hour <= 0 {
            panic_with_error!(&env, Error::PriceMustBeGreaterThanZero);
        }
        if collateral_amount <= 0 {
            panic_with_error!(&env, Error::CollateralMustBeGreaterThanZero);
        }

        let rental_id = next_rental_id(&env);
        let rental = Rental {
            rental_id,
            nft_address: nft_address.clone(),
            token_id,
            owner: owner.clone(),
            renter: None,
            price_per_hour,
            is_fractional,
            asset,
            collateral_amount,
            start_time: 0,
            end_time: 0,
        };
        set_rental(&env, &rental);

        env.events().publish(
            (Symbol::new(&env, RENTAL_CREATED_EVENT),),
            (rental_id, owner, nft_address, token_id),
        );

        rental_id
    }

    /// Occupy a vacant rental for `duration_hours`, escrowing rent plus
    /// collateral with the engine.
    ///
    /// `payment` models the value attached by the caller and is only
    /// consulted on the native path, where it must equal the exact total.
    /// Token-settled rentals pull the total from a pre-authorized allowance
    /// instead; a short allowance or balance surfaces as the token
    /// contract's own failure.
    pub fn rent_nft(env: Env, rental_id: u64, renter: Address, duration_hours: u64, payment: i128) {
        renter.require_auth();
        require_initialized(&env);

        let mut rental = load_rental(&env, rental_id);
        if rental.renter.is_some() {
            panic_with_error!(&env, Error::NftAlreadyRented);
        }
        if duration_hours == 0 {
            panic_with_error!(&env, Error::DurationMustBeGreaterThanZero);
        }

        let rent = validation::rent_portion(rental.price_per_hour, duration_hours)
            .unwrap_or_else(|e| panic_with_error!(&env, e));
        let total = validation::rental_total(
            rental.price_per_hour,
            duration_hours,
            rental.collateral_amount,
        )
        .unwrap_or_else(|e| panic_with_error!(&env, e));

        if rental.asset == Asset::Native && payment != total {
            panic_with_error!(&env, Error::IncorrectPaymentAmount);
        }

        let start_time = env.ledger().timestamp();
        let end_time = validation::occupancy_end(start_time, duration_hours)
            .unwrap_or_else(|e| panic_with_error!(&env, e));

        // Effects before the external pull: record, earnings, escrow.
        rental.renter = Some(renter.clone());
        rental.start_time = start_time;
        rental.end_time = end_time;
        set_rental(&env, &rental);

        let mut earnings = get_earnings(&env, rental_id);
        earnings.amount = earnings
            .amount
            .checked_add(rent)
            .unwrap_or_else(|| panic_with_error!(&env, Error::AmountOverflow));
        earnings.unlock_at = end_time;
        set_earnings(&env, rental_id, &earnings);

        let settlement = settlement_token(&env, &rental.asset);
        escrow_credit(&env, &settlement, total);

        let engine = env.current_contract_address();
        let client = token::Client::new(&env, &settlement);
        match &rental.asset {
            Asset::Native => client.transfer(&renter, &engine, &total),
            Asset::Token(_) => client.transfer_from(&engine, &renter, &engine, &total),
        }

        env.events().publish(
            (Symbol::new(&env, RENTAL_STARTED_EVENT),),
            (rental_id, renter, start_time, end_time, rental.collateral_amount),
        );
    }

    /// End an elapsed occupancy: refund the collateral to the renter and
    /// reset the record to vacant. The rent portion stays in the earnings
    /// ledger for the owner to withdraw.
    pub fn end_rental(env: Env, rental_id: u64, renter: Address) {
        renter.require_auth();

        let mut rental = load_rental(&env, rental_id);
        match &rental.renter {
            Some(current) if *current == renter => {}
            _ => panic_with_error!(&env, Error::OnlyRenterCanEndRental),
        }
        if env.ledger().timestamp() < rental.end_time {
            panic_with_error!(&env, Error::RentalPeriodNotEnded);
        }

        // Reset occupancy fully before the refund leaves the contract.
        rental.renter = None;
        rental.start_time = 0;
        rental.end_time = 0;
        set_rental(&env, &rental);

        let settlement = settlement_token(&env, &rental.asset);
        escrow_debit(&env, &settlement, rental.collateral_amount);

        token::Client::new(&env, &settlement).transfer(
            &env.current_contract_address(),
            &renter,
            &rental.collateral_amount,
        );

        env.events().publish(
            (Symbol::new(&env, RENTAL_ENDED_EVENT),),
            (rental_id, renter),
        );
    }

    /// Pay accrued rent out to the rental's owner. Gated on the earnings
    /// entry's own unlock time, so it works before or after `end_rental`.
    /// Idempotent-safe: a second call with nothing owed fails cleanly.
    pub fn withdraw_earnings(env: Env, rental_id: u64, owner: Address) {
        owner.require_auth();

        let rental = load_rental(&env, rental_id);
        if rental.owner != owner {
            panic_with_error!(&env, Error::OnlyOwnerCanWithdrawEarnings);
        }

        let mut earnings = get_earnings(&env, rental_id);
        if env.ledger().timestamp() < earnings.unlock_at {
            panic_with_error!(&env, Error::RentalStillActive);
        }
        if earnings.amount <= 0 {
            panic_with_error!(&env, Error::EarningTransferFailed);
        }

        let amount = earnings.amount;
        earnings.amount = 0;
        set_earnings(&env, rental_id, &earnings);

        let settlement = settlement_token(&env, &rental.asset);
        escrow_debit(&env, &settlement, amount);

        token::Client::new(&env, &settlement).transfer(
            &env.current_contract_address(),
            &owner,
            &amount,
        );

        env.events().publish(
            (Symbol::new(&env, EARNINGS_WITHDRAWN_EVENT),),
            (rental_id, owner, amount),
        );
    }

    /* ---------------- READ SURFACE ---------------- */

    pub fn get_rental(env: Env, rental_id: u64) -> Option<Rental> {
        get_rental(&env, rental_id)
    }

    /// Rent currently withdrawable (or accruing) for a rental.
    pub fn pending_earnings(env: Env, rental_id: u64) -> i128 {
        get_earnings(&env, rental_id).amount
    }

    pub fn total_rentals(env: Env) -> u64 {
        rental_count(&env)
    }

    /// Custodied balance the engine believes it holds in `token`. Matches the
    /// token contract's own balance for the engine after every operation.
    pub fn escrow_balance(env: Env, token: Address) -> i128 {
        get_escrow(&env, &token)
    }

    pub fn get_admin(env: Env) -> Address {
        get_admin(&env).unwrap_or_else(|| panic_with_error!(&env, Error::NotInitialized))
    }

    pub fn native_token(env: Env) -> Address {
        get_native_token(&env).unwrap_or_else(|| panic_with_error!(&env, Error::NotInitialized))
    }
}
