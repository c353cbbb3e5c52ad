//! REST backend for the VNE techwear storefront catalogue.
//!
//! The crate is split the usual way for an axum service: `entity` holds the
//! SeaORM table definition, `dto` the request shapes and their validation,
//! `services` the queries, and `routes` the HTTP surface.

pub mod config;
pub mod db;
pub mod dto;
pub mod entity;
pub mod error;
pub mod extract;
pub mod models;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
