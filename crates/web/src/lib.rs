//! HTTP front end: routing, handlers, and server-rendered views.

pub mod app;
pub mod middleware;
pub mod views;
