//! Paged, sorted and filtered list pages.
//!
//! `query` holds the URL codec, `controller` the pure state machine and
//! `view_model` wires both to signals, the gateway and the address bar.

pub mod address_bar;
pub mod controller;
pub mod query;
pub mod view_model;

pub use address_bar::{AddressBar, RouterAddressBar, MemoryAddressBar};
pub use controller::{FetchTicket, ListState};
pub use query::{encode_query, parse_query, ListDefaults, ListQuery, PageSize, SortDirection};
pub use view_model::ListViewModel;
