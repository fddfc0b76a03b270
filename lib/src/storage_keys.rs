//! Storage key names and event topics shared between the contracts.

pub const RENTAL_COUNTER_KEY: &str = "rental_counter";
pub const TOKEN_COUNTER_KEY: &str = "token_counter";

pub const MINT_EVENT: &str = "mint";
pub const TRANSFER_EVENT: &str = "transfer";
pub const RENTAL_CREATED_EVENT: &str = "rental_created";
pub const RENTAL_STARTED_EVENT: &str = "rental_started";
pub const RENTAL_ENDED_EVENT: &str = "rental_ended";
pub const EARNINGS_WITHDRAWN_EVENT: &str = "earnings_withdrawn";
