#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod stats_service;

pub use scale_core::Clock;

pub use app_services::AppServices;
pub use error::StatsError;
pub use stats_service::StatsService;
