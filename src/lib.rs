pub mod api;
pub mod dtos;
pub mod error;
pub mod models;
pub mod repository;
