//! Engine data structures: models, materials, instances, and batches.
//!
//! This module contains the core data types for scene representation:
//!
//! - `model` contains mesh and color material definitions plus the draw trait
//! - `instance` holds per-instance transformation data and its GPU layout
//! - `batch` ties one shared model to many instances (the reuse demonstrator)
//! - `texture` contains the depth texture wrapper

pub mod batch;
pub mod instance;
pub mod model;
pub mod texture;
