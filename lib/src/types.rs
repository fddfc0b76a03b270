use soroban_sdk::{contracttype, Address};

/// Settlement asset for a rental. Selected once at `create_rental` and never
/// changed. `Native` resolves to the native-asset Stellar Asset Contract the
/// engine was initialized with; `Token` is any SAC-compatible token contract.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Asset {
    Native,
    Token(Address),
}

/// One listing of an NFT for timed occupancy.
///
/// The record itself is never deleted; `renter`, `start_time` and `end_time`
/// are reset when an occupancy ends, making the rental vacant and re-rentable.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Rental {
    pub rental_id: u64,
    /// Contract address of the external NFT ownership registry.
    pub nft_address: Address,
    pub token_id: u64,
    /// Listing creator; verified against the registry at creation time.
    pub owner: Address,
    /// `None` means vacant.
    pub renter: Option<Address>,
    /// Positive; denominated in `asset`.
    pub price_per_hour: i128,
    /// Reserved for shared-rental semantics; stored but never branched on.
    pub is_fractional: bool,
    pub asset: Asset,
    /// Positive; escrowed by the renter, refunded in full at `end_rental`.
    pub collateral_amount: i128,
    pub start_time: u64,
    pub end_time: u64,
}

impl Rental {
    pub fn is_vacant(&self) -> bool {
        self.renter.is_none()
    }
}

/// Rent owed to a rental's owner, tracked separately from the occupancy
/// fields so a withdrawal still succeeds after `end_rental` has reset the
/// record.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PendingEarnings {
    /// Accrued rent; zeroed on payout.
    pub amount: i128,
    /// End time of the occupancy that accrued `amount`; the temporal gate for
    /// `withdraw_earnings`.
    pub unlock_at: u64,
}
