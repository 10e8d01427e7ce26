// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod dispatch_service;


// Re-export all services and their types
pub use dispatch_service::{DispatchConfig, DispatchService};
