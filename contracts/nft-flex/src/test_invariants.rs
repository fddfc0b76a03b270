//! Property tests for the escrow invariants: exact occupancy spans, strict
//! payment matching, and custodied balance always equal to the sum of
//! escrowed-but-unsettled obligations.

#![cfg(test)]

use proptest::prelude::*;
use soroban_sdk::Env;

use nftflex_lib::{Asset, Error, SECONDS_PER_HOUR};

use crate::testutils::{advance_to, setup, setup_token, BASE_TIME};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_occupancy_span_is_exact(
        duration in 1u64..=720,
        price in 1i128..=1_000,
        collateral in 1i128..=1_000,
    ) {
        let env = Env::default();
        let ctx = setup(&env);
        let total = price * duration as i128 + collateral;
        ctx.native_admin.mint(&ctx.renter, &total);

        let rental_id = ctx.flex.create_rental(
            &ctx.owner,
            &ctx.nft_address,
            &ctx.token_id,
            &price,
            &false,
            &Asset::Native,
            &collateral,
        );
        ctx.flex.rent_nft(&rental_id, &ctx.renter, &duration, &total);

        let rental = ctx.flex.get_rental(&rental_id).unwrap();
        prop_assert_eq!(rental.start_time, BASE_TIME);
        prop_assert_eq!(
            rental.end_time - rental.start_time,
            duration * SECONDS_PER_HOUR
        );
    }

    #[test]
    fn prop_payment_deviation_always_rejected(deviation in -50i128..=50) {
        prop_assume!(deviation != 0);

        let env = Env::default();
        let ctx = setup(&env);
        ctx.native_admin.mint(&ctx.renter, &10_000);

        let rental_id = ctx.flex.create_rental(
            &ctx.owner,
            &ctx.nft_address,
            &ctx.token_id,
            &10,
            &false,
            &Asset::Native,
            &5,
        );
        let total = 10 * 2 + 5;

        // INVARIANT: any nonzero deviation from the exact total is refused.
        let res = ctx.flex.try_rent_nft(&rental_id, &ctx.renter, &2, &(total + deviation));
        match res {
            Err(Ok(e)) if e == Error::IncorrectPaymentAmount.into() => {}
            _ => panic!("deviation {} was not rejected as IncorrectPaymentAmount", deviation),
        }
        prop_assert!(ctx.flex.get_rental(&rental_id).unwrap().is_vacant());
    }

    #[test]
    fn prop_escrow_ledger_matches_custodied_balance(
        cycles in prop::collection::vec((1u64..=24, any::<bool>()), 1..=4),
        price in 1i128..=50,
        collateral in 1i128..=50,
    ) {
        let env = Env::default();
        let ctx = setup(&env);
        let (token_address, token, token_admin) = setup_token(&env);
        token_admin.mint(&ctx.renter, &1_000_000);

        let rental_id = ctx.flex.create_rental(
            &ctx.owner,
            &ctx.nft_address,
            &ctx.token_id,
            &price,
            &false,
            &Asset::Token(token_address.clone()),
            &collateral,
        );

        let mut now = BASE_TIME;
        let mut expected_owner_total = 0i128;
        for (duration, withdraw_before_end) in cycles {
            let total = price * duration as i128 + collateral;
            token.approve(
                &ctx.renter,
                &ctx.flex.address,
                &total,
                &(env.ledger().sequence() + 1000),
            );
            ctx.flex.rent_nft(&rental_id, &ctx.renter, &duration, &0);

            // INVARIANT: ledger equals custody after every operation.
            prop_assert_eq!(
                ctx.flex.escrow_balance(&token_address),
                token.balance(&ctx.flex.address)
            );

            now += duration * SECONDS_PER_HOUR;
            advance_to(&env, now);

            // Settlement order must not matter.
            if withdraw_before_end {
                ctx.flex.withdraw_earnings(&rental_id, &ctx.owner);
                ctx.flex.end_rental(&rental_id, &ctx.renter);
            } else {
                ctx.flex.end_rental(&rental_id, &ctx.renter);
                ctx.flex.withdraw_earnings(&rental_id, &ctx.owner);
            }
            prop_assert_eq!(
                ctx.flex.escrow_balance(&token_address),
                token.balance(&ctx.flex.address)
            );

            expected_owner_total += price * duration as i128;
        }

        // Every cycle fully settled: no value created, lost, or retained.
        prop_assert_eq!(token.balance(&ctx.flex.address), 0);
        prop_assert_eq!(ctx.flex.escrow_balance(&token_address), 0);
        prop_assert_eq!(token.balance(&ctx.owner), expected_owner_total);
    }

    #[test]
    fn prop_withdraw_total_never_exceeds_rent(
        duration in 1u64..=48,
        extra_calls in 1usize..=4,
    ) {
        let env = Env::default();
        let ctx = setup(&env);
        let price = 7i128;
        let collateral = 3i128;
        let total = price * duration as i128 + collateral;
        ctx.native_admin.mint(&ctx.renter, &total);

        let rental_id = ctx.flex.create_rental(
            &ctx.owner,
            &ctx.nft_address,
            &ctx.token_id,
            &price,
            &false,
            &Asset::Native,
            &collateral,
        );
        ctx.flex.rent_nft(&rental_id, &ctx.renter, &duration, &total);
        advance_to(&env, BASE_TIME + duration * SECONDS_PER_HOUR);

        ctx.flex.withdraw_earnings(&rental_id, &ctx.owner);
        for _ in 0..extra_calls {
            let res = ctx.flex.try_withdraw_earnings(&rental_id, &ctx.owner);
            match res {
                Err(Ok(e)) if e == Error::EarningTransferFailed.into() => {}
                _ => panic!("repeated withdrawal did not fail cleanly"),
            }
        }

        // INVARIANT: total paid is exactly one rent portion.
        prop_assert_eq!(ctx.native.balance(&ctx.owner), price * duration as i128);
    }
}
