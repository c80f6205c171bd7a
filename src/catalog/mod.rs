//! Static sample data backing the guide.
//!
//! Everything here is fixture data built once and never mutated: the search
//! catalog, the trip plan, the wallet's transaction history and the map's
//! points of interest. The attendee directory lives here too.
//!
//! # Modules
//!
//! - [`items`]: Searchable catalog entries
//! - [`trip`]: Trip plan fixture
//! - [`transactions`]: Mock wallet address and transactions
//! - [`poi`]: Map points of interest
//! - [`attendants`]: Attendee directory

pub mod attendants;
pub mod items;
pub mod poi;
pub mod transactions;
pub mod trip;

pub use attendants::attendants;
pub use items::{all_items, find_item};
pub use poi::{points_in_category, points_of_interest, DEFAULT_CENTER, DEFAULT_ZOOM};
pub use transactions::{sample_transactions, MOCK_WALLET_ADDRESS};
pub use trip::sample_trip_plan;
