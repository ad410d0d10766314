pub mod converters;
pub mod wallets;
