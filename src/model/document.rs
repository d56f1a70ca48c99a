//! The 3MF document assembled around a single indexed mesh

use super::core::Mesh;

/// Language tag written on the `model` element
pub const LANG: &str = "en-US";

/// 3MF core specification namespace
pub const CORE_NAMESPACE: &str = "http://schemas.microsoft.com/3dmanufacturing/core/2015/02";

/// Unit of measurement for all coordinates
pub const UNIT: &str = "mm";

/// Id of the single mesh object, also referenced by the build item
pub const OBJECT_ID: &str = "1";

/// Type of the single mesh object
pub const OBJECT_TYPE: &str = "model";

/// A mesh object inside `resources`
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    /// Object id
    pub id: &'static str,
    /// Object type
    pub object_type: &'static str,
    /// Indexed mesh data
    pub mesh: Mesh,
}

/// An item inside `build` referencing an object to be manufactured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildItem {
    /// Id of the referenced object
    pub objectid: &'static str,
}

/// Complete 3MF model: one mesh object and one build item
///
/// Built once per export, serialized, then dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Language tag (`xml:lang`)
    pub lang: &'static str,
    /// XML namespace
    pub xmlns: &'static str,
    /// Unit of measurement
    pub unit: &'static str,
    /// The single mesh object
    pub object: Object,
    /// The single build item
    pub item: BuildItem,
}

impl Model {
    /// Wrap an indexed mesh in a core 3MF document
    pub fn from_mesh(mesh: Mesh) -> Self {
        Self {
            lang: LANG,
            xmlns: CORE_NAMESPACE,
            unit: UNIT,
            object: Object {
                id: OBJECT_ID,
                object_type: OBJECT_TYPE,
                mesh,
            },
            item: BuildItem {
                objectid: OBJECT_ID,
            },
        }
    }

    /// The mesh carried by the document
    pub fn mesh(&self) -> &Mesh {
        &self.object.mesh
    }
}
