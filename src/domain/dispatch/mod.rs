// src/domain/dispatch/mod.rs

pub mod value_objects;

pub use value_objects::{
    ChooserRequest, DispatchOutcome, LaunchKind, LaunchRequest, ResolutionOutcome,
    ResolutionResult, TargetRequest,
};
