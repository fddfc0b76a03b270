use soroban_sdk::contracterror;

/// Typed errors for the rental engine. Every precondition violation aborts
/// the whole invocation with one of these codes; there is no partial state
/// change and no value movement on failure.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Caller does not own the NFT it is trying to list.
    SenderIsNotOwnerOfTheNft = 3,
    PriceMustBeGreaterThanZero = 4,
    CollateralMustBeGreaterThanZero = 5,
    RentalDoesNotExist = 6,
    NftAlreadyRented = 7,
    DurationMustBeGreaterThanZero = 8,
    /// Attached native payment differs from `price * hours + collateral`.
    IncorrectPaymentAmount = 9,
    OnlyRenterCanEndRental = 10,
    RentalPeriodNotEnded = 11,
    OnlyOwnerCanWithdrawEarnings = 12,
    RentalStillActive = 13,
    /// Nothing to withdraw, or the underlying value transfer failed.
    EarningTransferFailed = 14,
    AmountOverflow = 15,
}
