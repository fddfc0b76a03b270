use soroban_sdk::{contractclient, Address, Env};

/// Interface boundary to the external NFT ownership registry. The engine
/// consumes ownership proof only; it never transfers or locks the asset.
#[contractclient(name = "NftOwnershipClient")]
pub trait NftOwnership {
    fn owner_of(env: Env, token_id: u64) -> Address;
}
