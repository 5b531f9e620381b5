//! Integration tests for delegate reward projections
//!
//! These tests verify the proportional share formula, the horizon
//! multipliers, vote weight and configuration loading.

use calculus_rewards::{BigNumber, CalculusError, Calculator, CalculatorConfig, ARKTOSHI};
use proptest::prelude::*;
use std::io::Write;

fn num(text: &str) -> BigNumber {
    text.parse().unwrap()
}

mod per_block_tests {
    use super::*;

    #[test]
    fn test_tenth_of_pool_at_ten_percent() {
        let calculator = Calculator::new(1_000_000_000, 10);

        assert_eq!(calculator.per_block(100_000_000).unwrap(), num("2000000"));
        assert_eq!(calculator.per_day(100_000_000).unwrap(), num("422000000"));
    }

    #[test]
    fn test_stake_equal_to_pool_gets_full_reward() {
        let calculator = Calculator::new(1_000_000_000, 10);

        assert_eq!(calculator.per_block(1_000_000_000).unwrap(), num("200000000"));
    }

    #[test]
    fn test_zero_profit_share() {
        let calculator = Calculator::new(1_000_000_000, 0);

        assert!(calculator.per_block(100_000_000).unwrap().is_zero());
        // Full-pool branch ignores the profit share
        assert_eq!(calculator.per_block(1_000_000_000).unwrap(), num("200000000"));
    }

    #[test]
    fn test_whole_unit_stakes() {
        let pool = 150_000 * ARKTOSHI as i64;
        let stake = 1_500 * ARKTOSHI as i64;
        let calculator = Calculator::new(pool, 80);

        // 2 ARK × 80% × 1% = 0.016 ARK
        let reward = calculator.per_block(stake).unwrap();
        assert_eq!(reward.to_whole_units().unwrap().to_string(), "0.01600000");
    }
}

mod vote_weight_tests {
    use super::*;

    #[test]
    fn test_tenth_of_pool() {
        let calculator = Calculator::new(500, 10);

        assert_eq!(calculator.vote_weight(50).unwrap().to_string(), "10.00000000");
    }

    #[test]
    fn test_empty_pool_is_zero() {
        let calculator = Calculator::new(0, 10);

        let weight = calculator.vote_weight(1_000).unwrap();
        assert!(weight.is_zero());
    }

    #[test]
    fn test_pool_reconfigured_to_zero() {
        let mut calculator = Calculator::new(500, 10);
        calculator.set_voting_pool(0);

        assert_eq!(calculator.vote_weight(50).unwrap(), BigNumber::zero());
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "voting_pool = 1000000000").unwrap();
        writeln!(file, "profit_share = 10").unwrap();

        let calculator = CalculatorConfig::load(file.path()).unwrap().into_calculator();
        assert_eq!(calculator.per_block(100_000_000).unwrap(), num("2000000"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CalculatorConfig::load(&dir.path().join("absent.toml")).unwrap_err();

        assert!(matches!(err, CalculusError::Config(_)));
        assert_eq!(err.code(), 3001);
    }
}

proptest! {
    #[test]
    fn per_block_matches_formula(
        pool in 1i64..=1_000_000_000_000,
        share in 0i64..=100,
        reward in 0i64..=1_000_000_000,
        stake_ratio in 0.0f64..1.0,
        precision in 0u32..24,
    ) {
        let stake = ((pool as f64) * stake_ratio) as i64;
        prop_assume!(stake < pool);

        let mut calculator = Calculator::new(pool, share).with_reward(reward);
        calculator.set_division_precision(precision);
        let expected = BigNumber::from(reward)
            .times(share)
            .unwrap()
            .times(stake)
            .unwrap()
            .divided_by_with_precision(i128::from(pool) * 100, precision)
            .unwrap();

        prop_assert_eq!(calculator.per_block(stake).unwrap(), expected);
    }

    #[test]
    fn stake_covering_pool_gets_reward(pool in 1i64..=1_000_000_000_000, extra in 0i64..=1_000_000, share in 0i64..=100) {
        let calculator = Calculator::new(pool, share);
        prop_assert_eq!(calculator.per_block(pool + extra).unwrap(), BigNumber::from(200_000_000u64));
    }

    #[test]
    fn horizons_compose(pool in 1i64..=1_000_000_000_000, stake in 0i64..=1_000_000_000_000, share in 0i64..=100) {
        let calculator = Calculator::new(pool, share);
        let block = calculator.per_block(stake).unwrap();
        let day = calculator.per_day(stake).unwrap();
        let week = calculator.per_week(stake).unwrap();
        let month = calculator.per_month(stake).unwrap();

        prop_assert_eq!(&day, &block.times(211).unwrap());
        prop_assert_eq!(&week, &day.times(7).unwrap());
        prop_assert_eq!(&month, &week.times(4).unwrap());
        prop_assert_eq!(calculator.per_quarter(stake).unwrap(), month.times(3).unwrap());
        prop_assert_eq!(calculator.per_year(stake).unwrap(), month.times(12).unwrap());
    }

    #[test]
    fn vote_weight_matches_ratio(pool in 1i64..=1_000_000_000_000, stake in 0i64..=1_000_000_000_000) {
        let calculator = Calculator::new(pool, 10);
        let expected = BigNumber::from(stake)
            .divided_by_with_precision(pool, 8)
            .unwrap()
            .times(100)
            .unwrap();

        prop_assert_eq!(calculator.vote_weight(stake).unwrap(), expected);
    }

    #[test]
    fn repeated_calls_are_identical(pool in 1i64..=1_000_000_000, stake in 0i64..=1_000_000_000, share in 0i64..=100) {
        let calculator = Calculator::new(pool, share);

        prop_assert_eq!(calculator.per_year(stake).unwrap(), calculator.per_year(stake).unwrap());
        prop_assert_eq!(calculator.projection(stake).unwrap(), calculator.projection(stake).unwrap());
    }
}
