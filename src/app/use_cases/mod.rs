//! Use-Cases der Application-Layer-Orchestrierung.

pub mod curve;
pub mod input;
pub mod options;
pub mod scene;
pub mod selection;
