//! Wallet session: connection state, address and transactions.

pub mod session;

pub use session::{ConnectOutcome, DisconnectOutcome, WalletSession, WalletState};
