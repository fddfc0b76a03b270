#![no_std]


use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, Address, Env, String,
    Symbol,
};

use nftflex_lib::{MAX_URI_LENGTH, MINT_EVENT, TOKEN_COUNTER_KEY, TRANSFER_EVENT};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    TokenDoesNotExist = 3,
    NotTokenOwner = 4,
    UriTooLong = 5,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    TokenOwner(u64),
    TokenUri(u64),
}

/// Ownership registry consumed by the rental engine. Rentals grant usage
/// rights only, so tokens stay with their owners; the engine calls `owner_of`
/// and nothing else.
#[contract]
pub struct SimpleNft;

#[contractimpl]
impl SimpleNft {
    /// One-time initialization with the contract admin.
    pub fn init_contract(env: Env, admin: Address) {
        if env.storage().instance().has(&DataKey::Admin) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }

        admin.require_auth();
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&Symbol::new(&env, TOKEN_COUNTER_KEY), &0u64);
    }

    /// Mint a token to `owner`; ids are monotonic starting at 1.
    pub fn mint(env: Env, owner: Address, token_uri: String) -> u64 {
        owner.require_auth();

        if !env.storage().instance().has(&DataKey::Admin) {
            panic_with_error!(&env, Error::NotInitialized);
        }
        if token_uri.len() > MAX_URI_LENGTH {
            panic_with_error!(&env, Error::UriTooLong);
        }

        let counter_key = Symbol::new(&env, TOKEN_COUNTER_KEY);
        let counter: u64 = env.storage().instance().get(&counter_key).unwrap_or(0);
        let token_id = counter + 1;

        env.storage()
            .persistent()
            .set(&DataKey::TokenOwner(token_id), &owner);
        env.storage()
            .persistent()
            .set(&DataKey::TokenUri(token_id), &token_uri);
        env.storage().instance().set(&counter_key, &token_id);

        env.events()
            .publish((Symbol::new(&env, MINT_EVENT),), (token_id, owner));

        token_id
    }

    /// Current owner of `token_id`; the only call the rental engine makes.
    pub fn owner_of(env: Env, token_id: u64) -> Address {
        env.storage()
            .persistent()
            .get(&DataKey::TokenOwner(token_id))
            .unwrap_or_else(|| panic_with_error!(&env, Error::TokenDoesNotExist))
    }

    /// Transfer a token; only its current owner may move it.
    pub fn transfer(env: Env, from: Address, to: Address, token_id: u64) {
        from.require_auth();

        let owner: Address = env
            .storage()
            .persistent()
            .get(&DataKey::TokenOwner(token_id))
            .unwrap_or_else(|| panic_with_error!(&env, Error::TokenDoesNotExist));
        if owner != from {
            panic_with_error!(&env, Error::NotTokenOwner);
        }

        env.storage()
            .persistent()
            .set(&DataKey::TokenOwner(token_id), &to);

        env.events()
            .publish((Symbol::new(&env, TRANSFER_EVENT),), (from, to, token_id));
    }

    pub fn token_uri(env: Env, token_id: u64) -> String {
        env.storage()
            .persistent()
            .get(&DataKey::TokenUri(token_id))
            .unwrap_or_else(|| panic_with_error!(&env, Error::TokenDoesNotExist))
    }

    pub fn total_tokens(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&Symbol::new(&env, TOKEN_COUNTER_KEY))
            .unwrap_or(0)
    }
}
