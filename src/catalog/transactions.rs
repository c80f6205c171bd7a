//! Mock wallet data loaded on connect.

use crate::domain::{Transaction, TxKind, TxStatus};
use chrono::NaiveDate;

/// Address assigned to every connected mock wallet.
pub const MOCK_WALLET_ADDRESS: &str = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";

fn tx(id: &str, day: u32, amount: &str, kind: TxKind) -> Transaction {
    Transaction {
        id: id.to_string(),
        date: NaiveDate::from_ymd_opt(2025, 4, day).unwrap_or(NaiveDate::MIN),
        amount: amount.to_string(),
        kind,
        status: TxStatus::Completed,
    }
}

#[must_use]
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        tx("tx1", 10, "1.5 ETH", TxKind::Receive),
        tx("tx2", 8, "0.5 ETH", TxKind::Send),
        tx("tx3", 3, "2.0 ETH", TxKind::Swap),
    ]
}
