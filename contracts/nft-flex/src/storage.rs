use soroban_sdk::{contracttype, Address, Env, Symbol};

use nftflex_lib::{PendingEarnings, Rental, RENTAL_COUNTER_KEY};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    NativeToken,
    Rental(u64),
    Earnings(u64),
    Escrow(Address),
}

/* ---------------- ADMIN / CONFIG ---------------- */

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn set_native_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::NativeToken, token);
}

pub fn get_native_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::NativeToken)
}

/* ---------------- RENTAL REGISTRY ---------------- */

pub fn next_rental_id(env: &Env) -> u64 {
    let counter_key = Symbol::new(env, RENTAL_COUNTER_KEY);
    let counter: u64 = env.storage().instance().get(&counter_key).unwrap_or(0);
    let rental_id = counter + 1;
    env.storage().instance().set(&counter_key, &rental_id);
    rental_id
}

pub fn rental_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&Symbol::new(env, RENTAL_COUNTER_KEY))
        .unwrap_or(0)
}

pub fn set_rental(env: &Env, rental: &Rental) {
    env.storage()
        .persistent()
        .set(&DataKey::Rental(rental.rental_id), rental);
}

pub fn get_rental(env: &Env, rental_id: u64) -> Option<Rental> {
    env.storage().persistent().get(&DataKey::Rental(rental_id))
}

/* ---------------- EARNINGS LEDGER ---------------- */

pub fn set_earnings(env: &Env, rental_id: u64, earnings: &PendingEarnings) {
    env.storage()
        .persistent()
        .set(&DataKey::Earnings(rental_id), earnings);
}

pub fn get_earnings(env: &Env, rental_id: u64) -> PendingEarnings {
    env.storage()
        .persistent()
        .get(&DataKey::Earnings(rental_id))
        .unwrap_or(PendingEarnings {
            amount: 0,
            unlock_at: 0,
        })
}

/* ---------------- ESCROW LEDGER ---------------- */

pub fn get_escrow(env: &Env, token: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Escrow(token.clone()))
        .unwrap_or(0)
}

pub fn set_escrow(env: &Env, token: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Escrow(token.clone()), &amount);
}
