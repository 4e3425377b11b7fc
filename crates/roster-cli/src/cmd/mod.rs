pub mod activities;
pub mod check;
pub mod seed;
pub mod serve;
