pub mod close_cdt;
pub mod deposit;
pub mod open_cdt;
pub mod withdrawal;
