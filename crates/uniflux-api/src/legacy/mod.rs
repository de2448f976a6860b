// Legacy API device records
//
// Models for the `stat/device` payload of the UniFi controller's legacy JSON
// API, plus envelope unwrapping. Polling the controller is the caller's job;
// this module starts from the response body.

pub mod devices;
pub mod models;
pub mod tables;
