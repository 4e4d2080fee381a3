pub mod app;
pub mod auth;
pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod repo;
pub mod routes;
pub mod services;
pub mod state;
pub mod validation;
