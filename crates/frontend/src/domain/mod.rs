pub mod a001_inventory;
pub mod a002_employee;
pub mod a003_voucher;
