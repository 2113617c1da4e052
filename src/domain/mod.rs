pub mod account;
pub mod cdt;
pub mod checking;
pub mod client;
pub mod portfolio;
pub mod projection;
pub mod saving;
