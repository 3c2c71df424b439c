pub mod pagination_controls;
pub mod stock_badge;
