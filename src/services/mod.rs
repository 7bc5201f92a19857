pub mod catalog;
pub mod climatology_client;
pub mod coastline_client;
pub mod geometry;
pub mod irradiation_service;
pub mod location_service;
pub mod offline_model;
pub mod report_service;
pub mod sizing_service;
