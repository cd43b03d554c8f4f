//! # Leftover Reward Flows
//!
//! End-block distribution: fractional rewards accumulate per reward address
//! and are released as whole coins at the threshold.

#[cfg(test)]
mod tests {
    use crate::integration::{dec_coin, init_test_logging, keeper};
    use gas_tracking::prelude::*;

    const OWNER: &str = "reward1owner";

    #[test]
    fn test_threshold_batching_across_blocks() {
        init_test_logging();
        let keeper = keeper();
        let mut store = InMemoryKVStore::new();

        {
            let mut ctx = ExecutionContext::new(10, &mut store);
            let released = keeper
                .create_or_merge_left_over_reward_entry(
                    &mut ctx,
                    OWNER,
                    vec![dec_coin("uusd", "7.5")],
                    10,
                )
                .unwrap();
            assert!(released.is_empty());

            let entry = keeper.get_left_over_reward_entry(&ctx, OWNER).unwrap();
            assert_eq!(entry.contract_rewards.to_string(), "7.500000000000000000uusd");
        }

        let mut ctx = ExecutionContext::new(11, &mut store);
        let released = keeper
            .create_or_merge_left_over_reward_entry(
                &mut ctx,
                OWNER,
                vec![dec_coin("uusd", "5.0")],
                10,
            )
            .unwrap();
        assert_eq!(released, vec![Coin::new("uusd", 12u64)]);

        let entry = keeper.get_left_over_reward_entry(&ctx, OWNER).unwrap();
        assert_eq!(entry.contract_rewards.to_string(), "0.500000000000000000uusd");
    }

    #[test]
    fn test_multi_denom_release_is_denom_ordered() {
        let keeper = keeper();
        let mut store = InMemoryKVStore::new();
        let mut ctx = ExecutionContext::new(20, &mut store);

        let released = keeper
            .create_or_merge_left_over_reward_entry(
                &mut ctx,
                OWNER,
                vec![
                    dec_coin("uusd", "3.3"),
                    dec_coin("ustake", "0.9"),
                    dec_coin("ibc/ATOM", "2.05"),
                    dec_coin("ustake", "1.2"),
                ],
                2,
            )
            .unwrap();

        assert_eq!(
            released,
            vec![
                Coin::new("ibc/ATOM", 2u64),
                Coin::new("ustake", 2u64),
                Coin::new("uusd", 3u64),
            ]
        );
        assert!(check_distribution_integral(&released, 2));

        let entry = keeper.get_left_over_reward_entry(&ctx, OWNER).unwrap();
        assert_eq!(
            entry.contract_rewards.amount_of("ustake"),
            Dec::parse("0.1").unwrap()
        );
        assert!(check_remainder_below_unit(&entry.contract_rewards, &released));
    }

    #[test]
    fn test_zero_threshold_releases_every_whole_unit() {
        let keeper = keeper();
        let mut store = InMemoryKVStore::new();
        let mut ctx = ExecutionContext::new(20, &mut store);

        let released = keeper
            .create_or_merge_left_over_reward_entry(
                &mut ctx,
                OWNER,
                vec![dec_coin("uusd", "1.000000000000000001")],
                0,
            )
            .unwrap();
        assert_eq!(released, vec![Coin::new("uusd", 1u64)]);

        let entry = keeper.get_left_over_reward_entry(&ctx, OWNER).unwrap();
        assert_eq!(
            entry.contract_rewards.amount_of("uusd"),
            Dec::parse("0.000000000000000001").unwrap()
        );
    }

    #[test]
    fn test_many_small_rewards_add_up_exactly() {
        let keeper = keeper();
        let mut store = InMemoryKVStore::new();
        let mut ctx = ExecutionContext::new(30, &mut store);

        let mut released = Vec::new();
        for _ in 0..30 {
            released.extend(
                keeper
                    .create_or_merge_left_over_reward_entry(
                        &mut ctx,
                        OWNER,
                        vec![dec_coin("uusd", "0.1")],
                        1,
                    )
                    .unwrap(),
            );
        }

        // 30 x 0.1 is exactly 3 with fixed-point decimals.
        let total: u64 = released.iter().map(|c| c.amount.as_u64()).sum();
        let remaining = keeper
            .get_left_over_reward_entry(&ctx, OWNER)
            .unwrap()
            .contract_rewards
            .amount_of("uusd");
        assert_eq!(total, 3);
        assert!(remaining.is_zero());
    }

    #[test]
    fn test_end_block_uses_configured_threshold() {
        let config = GasTrackingConfig::default().with_left_over_threshold(3);
        let keeper = GasTrackingKeeper::new(config);
        let mut store = InMemoryKVStore::new();

        let mut paid = Vec::new();
        for height in 60..64u64 {
            let mut ctx = ExecutionContext::new(height, &mut store);
            paid.extend(
                keeper
                    .distribute_left_over_rewards(&mut ctx, OWNER, vec![dec_coin("uusd", "1.25")])
                    .unwrap(),
            );
        }

        // 2.5 after two blocks, 3.75 after three: release 3, keep 0.75, then 2.0.
        assert_eq!(paid, vec![Coin::new("uusd", 3u64)]);
        let ctx = ExecutionContext::new(64, &mut store);
        assert_eq!(
            keeper
                .get_left_over_reward_entry(&ctx, OWNER)
                .unwrap()
                .contract_rewards
                .amount_of("uusd"),
            Dec::parse("2").unwrap()
        );
    }

    #[test]
    fn test_unknown_address_then_first_merge() {
        let keeper = keeper();
        let mut store = InMemoryKVStore::new();
        let mut ctx = ExecutionContext::new(40, &mut store);

        let err = keeper.get_left_over_reward_entry(&ctx, "reward1new").unwrap_err();
        assert!(err.is_not_found());

        keeper
            .create_or_merge_left_over_reward_entry(
                &mut ctx,
                "reward1new",
                vec![dec_coin("uusd", "0.3")],
                5,
            )
            .unwrap();
        assert!(keeper.get_left_over_reward_entry(&ctx, "reward1new").is_ok());
    }

    #[test]
    fn test_end_block_distribution_rolls_back_with_overlay() {
        let keeper = keeper();
        let mut store = InMemoryKVStore::new();

        {
            let mut branch = CacheKVStore::new(&mut store);
            let mut ctx = ExecutionContext::new(50, &mut branch);
            let released = keeper
                .create_or_merge_left_over_reward_entry(
                    &mut ctx,
                    OWNER,
                    vec![dec_coin("uusd", "4.5")],
                    1,
                )
                .unwrap();
            assert_eq!(released, vec![Coin::new("uusd", 4u64)]);
            // Payout failed downstream: branch dropped.
        }

        let ctx = ExecutionContext::new(50, &mut store);
        assert_eq!(
            keeper.get_left_over_reward_entry(&ctx, OWNER),
            Err(GasTrackingError::RewardEntryNotFound {
                reward_address: OWNER.to_string()
            })
        );
    }
}
