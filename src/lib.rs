//! Core building blocks for the transport-management back office.
//!
//! The back office renders its screens on top of a REST API; this crate
//! owns the client-side state behind them: the paged-list controller that
//! every table is driven by ([`listing`]), the page-fetch boundary
//! ([`fetcher`]), the role gating that decides which sections and actions
//! an operator sees ([`access`]), and the read models for the order,
//! container, driver, vehicle, role and salary-formula screens
//! ([`domain`]). HTTP transport, authentication and routing belong to the
//! embedding application.

pub mod access;
pub mod domain;
pub mod dto;
pub mod fetcher;
pub mod listing;
pub mod models;
pub mod pagination;
pub mod services;

/// Role granting access to the back office at all.
pub const SERVICE_ACCESS_ROLE: &str = "tms";
/// Role granting the administrative screens and mutating actions.
pub const SERVICE_ADMIN_ROLE: &str = "tms_admin";
/// Role granting the order and container screens.
pub const DISPATCH_ROLE: &str = "tms_dispatcher";
/// Role granting the driver and vehicle screens.
pub const FLEET_ROLE: &str = "tms_fleet";
