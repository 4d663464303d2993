//! Agent service adapters

pub mod city_service;

pub use city_service::CityAgentService;
