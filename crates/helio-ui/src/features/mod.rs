//! Dashboard pages and the gallery that lists them.

pub(crate) mod battery_storage;
pub(crate) mod charging_stations;
pub(crate) mod co2_savings;
pub(crate) mod energy_mix;
pub(crate) mod gallery;
pub(crate) mod page;
pub(crate) mod solar_yield;

pub(crate) use gallery::Gallery;
pub(crate) use page::DashboardPage;
