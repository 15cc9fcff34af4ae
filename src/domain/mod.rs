pub mod dto;
pub mod entities;
pub mod models;
