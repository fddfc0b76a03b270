use crate::{errors::Error, SECONDS_PER_HOUR};

/// Rent portion owed for one occupancy: `price_per_hour * duration_hours`,
/// overflow-checked.
pub fn rent_portion(price_per_hour: i128, duration_hours: u64) -> Result<i128, Error> {
    price_per_hour
        .checked_mul(duration_hours as i128)
        .ok_or(Error::AmountOverflow)
}

/// Exact amount a renter must pay up front: rent portion plus collateral.
pub fn rental_total(
    price_per_hour: i128,
    duration_hours: u64,
    collateral_amount: i128,
) -> Result<i128, Error> {
    rent_portion(price_per_hour, duration_hours)?
        .checked_add(collateral_amount)
        .ok_or(Error::AmountOverflow)
}

/// Occupancy end time: `start_time + duration_hours * 3600`, overflow-checked.
pub fn occupancy_end(start_time: u64, duration_hours: u64) -> Result<u64, Error> {
    duration_hours
        .checked_mul(SECONDS_PER_HOUR)
        .and_then(|span| start_time.checked_add(span))
        .ok_or(Error::AmountOverflow)
}
