//! Data structures representing meshes and 3MF models

mod core;
mod document;

// Re-export all public types from core module
pub use core::{Mesh, Triangle, Triangle3, Vertex3};

// Re-export all public types from document module
pub use document::{
    BuildItem, CORE_NAMESPACE, LANG, Model, OBJECT_ID, OBJECT_TYPE, Object, UNIT,
};
