#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::engine::{calculate_portfolio, calculate_positions};
    use crate::models::TransactionKind::{Buy, Sell};
    use crate::models::{Transaction, TransactionKind};
    use crate::test::fixtures::tx;

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            tx(1, "ACME", Buy, dec!(10), dec!(10), dec!(0), 1),
            tx(2, "ACME", Sell, dec!(10), dec!(15), dec!(0), 2),
            tx(3, "ZETA", Buy, dec!(20), dec!(20), dec!(0), 1),
        ]
    }

    #[test]
    fn empty_transaction_list_is_all_zero() {
        let stats = calculate_portfolio(&[], None);

        assert_eq!(*stats.total_invested(), dec!(0));
        assert_eq!(*stats.total_received(), dec!(0));
        assert_eq!(*stats.realized_gain(), dec!(0));
        assert_eq!(*stats.current_value(), dec!(0));
        assert_eq!(*stats.unrealized_gain(), dec!(0));
        assert_eq!(*stats.total_gain(), dec!(0));
        assert_eq!(*stats.gain_loss_percent(), dec!(0));
        assert_eq!(*stats.unique_stocks(), 0);
        assert_eq!(*stats.stocks_with_holdings(), 0);
        assert_eq!(*stats.total_transactions(), 0);
    }

    #[test]
    fn aggregates_across_symbols_with_prices() {
        let transactions = sample_transactions();
        let price_map: HashMap<String, Decimal> =
            HashMap::from([("ZETA".to_string(), dec!(25))]);

        let stats = calculate_portfolio(&transactions, Some(&price_map));

        assert_eq!(*stats.total_invested(), dec!(500));
        assert_eq!(*stats.total_received(), dec!(150));
        assert_eq!(*stats.realized_gain(), dec!(50));
        assert_eq!(*stats.unrealized_gain(), dec!(100));
        assert_eq!(*stats.current_value(), dec!(500));
        assert_eq!(*stats.total_gain(), dec!(150));
        assert_eq!(*stats.gain_loss_percent(), dec!(30));
        assert_eq!(*stats.unique_stocks(), 2);
        assert_eq!(*stats.stocks_with_holdings(), 1);
        assert_eq!(*stats.total_transactions(), 3);
    }

    #[test]
    fn without_prices_value_falls_back_to_most_recent_buy() {
        let transactions = vec![
            tx(1, "ZETA", Buy, dec!(10), dec!(20), dec!(0), 1),
            tx(2, "ZETA", Buy, dec!(10), dec!(30), dec!(0), 3),
        ];

        let stats = calculate_portfolio(&transactions, None);

        assert_eq!(*stats.current_value(), dec!(600));
        assert_eq!(*stats.unrealized_gain(), dec!(0));
        assert_eq!(*stats.total_gain(), dec!(0));
        assert_eq!(*stats.gain_loss_percent(), dec!(0));
    }

    #[test]
    fn closed_positions_count_as_unique_but_not_held() {
        let stats = calculate_portfolio(&sample_transactions(), None);

        assert_eq!(*stats.unique_stocks(), 2);
        assert_eq!(*stats.stocks_with_holdings(), 1);
    }

    #[test]
    fn repeated_calls_leave_input_untouched_and_agree() {
        // deliberately out of order: the engine must sort a copy, not the input
        let transactions = vec![
            tx(1, "ACME", Sell, dec!(5), dec!(20), dec!(0), 4),
            tx(2, "ACME", Buy, dec!(10), dec!(10), dec!(0), 1),
            tx(3, "ZETA", Buy, dec!(1), dec!(100), dec!(0), 2),
        ];
        let snapshot = transactions.clone();

        let first_positions = calculate_positions(&transactions, None);
        let first_stats = calculate_portfolio(&transactions, None);
        let second_positions = calculate_positions(&transactions, None);
        let second_stats = calculate_portfolio(&transactions, None);

        assert_eq!(first_positions, second_positions);
        assert_eq!(first_stats, second_stats);
        assert_eq!(transactions, snapshot);
    }

    #[test]
    fn stats_serialize_for_display_collaborators() {
        let stats = calculate_portfolio(&sample_transactions(), None);

        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["unique_stocks"], 2);
        assert_eq!(value["total_transactions"], 3);
    }

    #[test]
    fn kind_round_trips_through_strings() {
        assert_eq!(TransactionKind::Buy.to_string(), "Buy");
        assert_eq!("sell".parse::<TransactionKind>().unwrap(), TransactionKind::Sell);
        assert!("transfer".parse::<TransactionKind>().is_err());
    }
}
