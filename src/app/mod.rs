//! Application module

pub mod cli;
pub mod coalesce;
pub mod startup;
