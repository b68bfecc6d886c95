//! Core library exports for the wardrobe catalog service.
//!
//! This crate exposes domain types, Diesel models, repositories, routes and
//! service layers used by the wardrobe HTTP API.

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;
