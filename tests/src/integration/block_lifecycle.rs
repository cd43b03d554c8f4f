//! # Block Lifecycle Flows
//!
//! 1. **Genesis**: transactions at height 1 run before any block record exists
//! 2. **Steady state**: begin-block, N transactions, nested contract calls
//! 3. **Rollback**: a failed transaction's writes vanish with its overlay

#[cfg(test)]
mod tests {
    use crate::integration::{dec_coin, init_test_logging, keeper};
    use gas_tracking::prelude::*;

    /// Simulate one transaction: ante handler plus its contract calls.
    fn run_tx<KV: KeyValueStore>(
        keeper: &GasTrackingKeeper,
        ctx: &mut ExecutionContext<'_, KV>,
        gas_limit: u64,
        calls: &[(&str, u64, ContractOperation)],
    ) -> Result<(), GasTrackingError> {
        keeper.track_new_tx(ctx, vec![dec_coin("uusd", "0.25")], gas_limit)?;
        for (contract, gas, operation) in calls {
            keeper.track_contract_gas_usage(ctx, contract, *gas, *operation, true)?;
        }
        Ok(())
    }

    // =========================================================================
    // GENESIS
    // =========================================================================

    #[test]
    fn test_genesis_block_without_begin_block() {
        init_test_logging();
        let keeper = keeper();
        let mut store = InMemoryKVStore::new();
        let mut ctx = ExecutionContext::new(1, &mut store);

        run_tx(
            &keeper,
            &mut ctx,
            300_000,
            &[("contract-genesis", 120_000, ContractOperation::Instantiation)],
        )
        .unwrap();

        let block = keeper.get_current_block_tracking_info(&ctx).unwrap();
        assert_eq!(block.tx_count(), 1);
        assert_eq!(block.total_gas_consumed(), 120_000);
    }

    #[test]
    fn test_height_two_without_begin_block_fails() {
        let keeper = keeper();
        let mut store = InMemoryKVStore::new();
        let mut ctx = ExecutionContext::new(2, &mut store);

        let err = keeper.track_new_tx(&mut ctx, vec![], 300_000).unwrap_err();
        assert_eq!(err, GasTrackingError::BlockTrackingDataNotFound);
        assert!(err.is_not_found());
    }

    // =========================================================================
    // STEADY STATE
    // =========================================================================

    #[test]
    fn test_multi_block_flow() {
        init_test_logging();
        let keeper = keeper();
        let mut store = InMemoryKVStore::new();

        for height in 2..=4u64 {
            let mut ctx = ExecutionContext::new(height, &mut store);
            keeper
                .track_new_block(&mut ctx, BlockGasTracking::new())
                .unwrap();

            for tx in 0..height {
                run_tx(
                    &keeper,
                    &mut ctx,
                    100_000 + tx,
                    &[
                        ("contract-a", 1_000, ContractOperation::Execution),
                        ("contract-b", 500, ContractOperation::Sudo),
                        ("contract-a", 250, ContractOperation::Reply),
                    ],
                )
                .unwrap();
            }

            let block = keeper.get_current_block_tracking_info(&ctx).unwrap();
            assert_eq!(block.tx_count() as u64, height);
            assert_eq!(block.total_gas_consumed(), 1_750 * height);

            let last = block.last_transaction().unwrap();
            assert_eq!(last.max_gas_allowed, 100_000 + height - 1);
            assert_eq!(last.contract_tracking_infos.len(), 3);
            assert_eq!(last.gas_by_contract()["contract-a"], 1_250);
        }
    }

    #[test]
    fn test_no_tx_and_no_block_are_distinct() {
        let keeper = keeper();
        let mut store = InMemoryKVStore::new();
        let mut ctx = ExecutionContext::new(9, &mut store);

        let no_block = keeper
            .track_contract_gas_usage(&mut ctx, "contract-a", 1, ContractOperation::Query, false)
            .unwrap_err();

        keeper
            .track_new_block(&mut ctx, BlockGasTracking::new())
            .unwrap();
        let no_tx = keeper
            .track_contract_gas_usage(&mut ctx, "contract-a", 1, ContractOperation::Query, false)
            .unwrap_err();

        assert_eq!(no_block, GasTrackingError::BlockTrackingDataNotFound);
        assert_eq!(no_tx, GasTrackingError::TxTrackingDataNotFound);
    }

    #[test]
    fn test_metadata_survives_across_blocks() {
        let keeper = keeper();
        let mut store = InMemoryKVStore::new();

        {
            let mut ctx = ExecutionContext::new(2, &mut store);
            keeper
                .add_new_contract_metadata(
                    &mut ctx,
                    "contract-a",
                    ContractInstanceMetadata {
                        reward_address: "reward1owner".to_string(),
                        gas_rebate_to_user: false,
                        collect_premium: false,
                        premium_percentage_charged: 0,
                    },
                )
                .unwrap();
        }

        let mut ctx = ExecutionContext::new(50, &mut store);
        keeper
            .track_new_block(&mut ctx, BlockGasTracking::new())
            .unwrap();
        keeper
            .add_new_contract_metadata(
                &mut ctx,
                "contract-a",
                ContractInstanceMetadata {
                    reward_address: "reward1owner".to_string(),
                    gas_rebate_to_user: true,
                    collect_premium: true,
                    premium_percentage_charged: 15,
                },
            )
            .unwrap();

        let stored = keeper.get_new_contract_metadata(&ctx, "contract-a").unwrap();
        assert!(stored.gas_rebate_to_user);
        assert_eq!(stored.premium_percentage_charged, 15);
    }

    // =========================================================================
    // ROLLBACK
    // =========================================================================

    #[test]
    fn test_failed_tx_rolls_back_with_overlay() {
        init_test_logging();
        let keeper = keeper();
        let mut store = InMemoryKVStore::new();

        {
            let mut ctx = ExecutionContext::new(3, &mut store);
            keeper
                .track_new_block(&mut ctx, BlockGasTracking::new())
                .unwrap();
        }

        // Successful transaction: commit its overlay.
        {
            let mut branch = CacheKVStore::new(&mut store);
            {
                let mut ctx = ExecutionContext::new(3, &mut branch);
                run_tx(
                    &keeper,
                    &mut ctx,
                    200_000,
                    &[("contract-a", 10_000, ContractOperation::Execution)],
                )
                .unwrap();
            }
            branch.write().unwrap();
        }

        // Failed transaction: its overlay is dropped.
        {
            let mut branch = CacheKVStore::new(&mut store);
            let mut ctx = ExecutionContext::new(3, &mut branch);
            run_tx(
                &keeper,
                &mut ctx,
                200_000,
                &[("contract-b", 99_999, ContractOperation::Execution)],
            )
            .unwrap();
        }

        let ctx = ExecutionContext::new(3, &mut store);
        let block = keeper.get_current_block_tracking_info(&ctx).unwrap();
        assert_eq!(block.tx_count(), 1);
        assert_eq!(block.total_gas_consumed(), 10_000);
    }
}
