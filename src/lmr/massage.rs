use crate::money::{self, MoneyError};
use crate::Transaction;

use std::cmp::Ordering;

use rust_decimal::Decimal;

/// Sorts by date and recomputes every running balance.
///
/// Applied to each freshly fetched batch and after every mutation of the
/// transaction mirror.
pub fn massage_transactions(transactions: &mut [Transaction]) -> Result<(), MoneyError> {
    sort_by_date(transactions);

    return calculate_balance(transactions);
}

/// Earlier dates first. Stable, so transactions sharing a date keep their
/// relative order.
pub fn sort_by_date(transactions: &mut [Transaction]) {
    transactions.sort_by(compare_by_date);
}

pub fn compare_by_date(a: &Transaction, b: &Transaction) -> Ordering {
    return a.date.cmp(&b.date);
}

/// Sets each balance to the sum of all amounts up to and including it.
///
/// Expects `transactions` to already be in date order. Balances are only
/// written once every running sum fits, so an overflow leaves them untouched.
pub fn calculate_balance(transactions: &mut [Transaction]) -> Result<(), MoneyError> {
    let mut running = Decimal::ZERO;
    let mut balances = Vec::with_capacity(transactions.len());

    for transaction in transactions.iter() {
        running = money::add(running, transaction.amount)?;
        balances.push(running);
    }

    for (transaction, balance) in transactions.iter_mut().zip(balances) {
        transaction.balance = balance;
    }

    return Ok(());
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ids::TransactionId;

    use chrono::NaiveDate;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn build_transaction(id: &str, day: u32, amount: Decimal) -> Transaction {
        let mut transaction = Transaction::new(
            NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            format!("tx {id}"),
            amount,
        );
        transaction.id = Some(TransactionId::from(id));

        transaction
    }

    fn ids(transactions: &[Transaction]) -> Vec<String> {
        transactions
            .iter()
            .map(|transaction| transaction.id.as_ref().unwrap().to_string())
            .collect()
    }

    fn balances(transactions: &[Transaction]) -> Vec<Decimal> {
        transactions.iter().map(|transaction| transaction.balance).collect()
    }

    #[test]
    fn compare_by_date_is_three_way() {
        let early = build_transaction("a", 1, dec!(1));
        let late = build_transaction("b", 2, dec!(1));
        let also_early = build_transaction("c", 1, dec!(5));

        assert_eq!(compare_by_date(&early, &late), Ordering::Less);
        assert_eq!(compare_by_date(&late, &early), Ordering::Greater);
        assert_eq!(compare_by_date(&early, &also_early), Ordering::Equal);
    }

    #[test]
    fn sort_keeps_input_order_for_equal_dates() {
        let mut transactions = vec![
            build_transaction("late", 9, dec!(1)),
            build_transaction("tie-1", 4, dec!(1)),
            build_transaction("early", 2, dec!(1)),
            build_transaction("tie-2", 4, dec!(1)),
            build_transaction("tie-3", 4, dec!(1)),
        ];

        sort_by_date(&mut transactions);

        assert_eq!(ids(&transactions), vec!["early", "tie-1", "tie-2", "tie-3", "late"]);
    }

    #[test]
    fn balance_accumulates() {
        let mut transactions = vec![
            build_transaction("a", 1, dec!(100.00)),
            build_transaction("b", 2, dec!(-25.50)),
            build_transaction("c", 3, dec!(0.25)),
        ];

        calculate_balance(&mut transactions).unwrap();

        assert_eq!(balances(&transactions), vec![dec!(100.00), dec!(74.50), dec!(74.75)]);
    }

    #[test]
    fn balance_ignores_stale_values() {
        let mut transactions = vec![build_transaction("a", 1, dec!(10))];
        transactions[0].balance = dec!(999);

        calculate_balance(&mut transactions).unwrap();

        assert_eq!(balances(&transactions), vec![dec!(10)]);
    }

    #[test]
    fn massage_sorts_then_balances() {
        let mut transactions = vec![
            build_transaction("c", 20, dec!(-5)),
            build_transaction("a", 1, dec!(50)),
            build_transaction("b", 10, dec!(20)),
            build_transaction("b2", 10, dec!(1)),
        ];

        massage_transactions(&mut transactions).unwrap();

        assert_eq!(ids(&transactions), vec!["a", "b", "b2", "c"]);
        assert_eq!(balances(&transactions), vec![dec!(50), dec!(70), dec!(71), dec!(66)]);

        for (idx, transaction) in transactions.iter().enumerate() {
            let expected: Decimal = transactions[..=idx].iter().map(|tx| tx.amount).sum();
            assert_eq!(transaction.balance, expected);
        }
    }

    #[test]
    fn massage_empty_is_noop() {
        let mut transactions: Vec<Transaction> = vec![];

        massage_transactions(&mut transactions).unwrap();

        assert!(transactions.is_empty());
    }

    #[test]
    fn balance_overflow_is_an_error() {
        let mut transactions = vec![
            build_transaction("a", 1, Decimal::MAX),
            build_transaction("b", 2, Decimal::MAX),
        ];

        let result = calculate_balance(&mut transactions);

        assert_eq!(result, Err(MoneyError::Overflow("add", Decimal::MAX, Decimal::MAX)));
        assert_eq!(balances(&transactions), vec![Decimal::ZERO, Decimal::ZERO]);
    }

    #[test]
    fn balance_underflow_is_an_error() {
        let mut transactions = vec![
            build_transaction("a", 1, Decimal::MIN),
            build_transaction("b", 2, dec!(-1)),
        ];

        assert!(matches!(
            massage_transactions(&mut transactions),
            Err(MoneyError::Underflow(..))
        ));
    }

    fn input_position(transaction: &Transaction) -> usize {
        transaction.id.as_ref().unwrap().0.parse().unwrap()
    }

    fn arb_transactions() -> impl Strategy<Value = Vec<Transaction>> {
        prop::collection::vec((1u32..=28, -1_000_000i64..1_000_000), 0..40).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(idx, (day, cents))| build_transaction(&idx.to_string(), day, Decimal::new(cents, 2)))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn massage_orders_stably_and_balances(mut transactions in arb_transactions()) {
            let count = transactions.len();

            massage_transactions(&mut transactions).unwrap();

            prop_assert_eq!(transactions.len(), count);

            for pair in transactions.windows(2) {
                prop_assert!(pair[0].date <= pair[1].date);
                if pair[0].date == pair[1].date {
                    prop_assert!(input_position(&pair[0]) < input_position(&pair[1]));
                }
            }

            let mut running = Decimal::ZERO;
            for transaction in &transactions {
                running += transaction.amount;
                prop_assert_eq!(transaction.balance, running);
            }
        }
    }
}
