//! CHKO Dashboard Library
//!
//! This library provides core functionality for the CHKO Kysuce care-program
//! dashboard: loading the land-ownership analysis workbook, building the
//! ownership charts, browsing the static PDF map exports, and serving the
//! whole thing as a local web page.

// Module declarations
pub mod config;
pub mod constants;
pub mod models;
pub mod services;
pub mod web;
