// src/registry/mod.rs
//
// Component registry seam
//
// CRITICAL RULES:
// - The registry is a DUMB candidate source
// - NO filtering, NO ignore-list knowledge, NO dispatch decisions
// - Query failures propagate unchanged to the caller

pub mod component_registry;

pub use component_registry::{
    ComponentRegistry, FailingComponentRegistry, StaticComponentRegistry,
    SYSTEM_CHOOSER_COMPONENT,
};
