//! # mesh3mf
//!
//! Export triangle meshes as 3MF (3D Manufacturing Format) documents.
//!
//! Meshes usually arrive as a triangle soup: every triangle carries its own
//! copy of each corner. This library folds exactly coincident corners into a
//! single vertex table, turns each triangle into an index triple (keeping its
//! winding order), and writes the result as a single-object 3MF core
//! document.
//!
//! ## Features
//!
//! - Pure Rust implementation with no unsafe code
//! - Exact vertex deduplication in first-occurrence order, so output is
//!   byte-for-byte reproducible
//! - Bare model XML or a full OPC (ZIP) 3MF package
//! - Structured logging through `tracing`
//!
//! ## Example
//!
//! ```no_run
//! use mesh3mf::{Triangle3, Vertex3, save_3mf};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let a = Vertex3::new(0.0, 0.0, 0.0);
//! let b = Vertex3::new(1.0, 0.0, 0.0);
//! let c = Vertex3::new(1.0, 1.0, 0.0);
//! let d = Vertex3::new(0.0, 1.0, 0.0);
//!
//! // A unit square split along its diagonal: 4 vertices, 2 triangles
//! save_3mf("square.3mf", &[Triangle3::new(a, b, c), Triangle3::new(a, c, d)])?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod dedup;
pub mod error;
pub mod export;
pub mod model;
pub mod opc;
mod writer;

pub use dedup::{VertexDeduplicator, deduplicate};
pub use error::{Error, ErrorKind, Result};
pub use export::{save_3mf, save_3mf_with_config, write_3mf, write_3mf_with_config};
pub use model::{
    BuildItem, CORE_NAMESPACE, LANG, Mesh, Model, OBJECT_ID, OBJECT_TYPE, Object, Triangle,
    Triangle3, UNIT, Vertex3,
};
pub use writer::{OutputFormat, WriterConfig, write_model_xml};

use std::io::{BufWriter, Write};
use tracing::info;

impl Model {
    /// Write the document to a writer using the default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use mesh3mf::{Mesh, Model};
    ///
    /// let model = Model::from_mesh(Mesh::new());
    /// let bytes = model.to_writer(Vec::new()).unwrap();
    /// assert!(bytes.starts_with(b"<?xml"));
    /// ```
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<W> {
        self.to_writer_with_config(writer, &WriterConfig::default())
    }

    /// Write the document to a writer
    ///
    /// The writer is returned unflushed.
    pub fn to_writer_with_config<W: Write>(&self, writer: W, config: &WriterConfig) -> Result<W> {
        writer::write_document(self, writer, config)
    }

    /// Write the document to a file path using the default configuration
    pub fn write_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        self.write_to_file_with_config(path, &WriterConfig::default())
    }

    /// Write the document to a file path
    ///
    /// The file is created or truncated, written through a buffer and flushed
    /// before this returns. The handle is closed on every exit path.
    pub fn write_to_file_with_config<P: AsRef<std::path::Path>>(
        &self,
        path: P,
        config: &WriterConfig,
    ) -> Result<()> {
        let path = path.as_ref();
        let mesh = self.mesh();
        info!(
            path = %path.display(),
            vertices = mesh.vertices.len(),
            triangles = mesh.triangles.len(),
            format = ?config.format(),
            "Writing 3MF"
        );

        let file = std::fs::File::create(path).map_err(|e| Error::create_file(path, e))?;
        let mut out = self.to_writer_with_config(BufWriter::new(file), config)?;
        out.flush().map_err(|e| Error::flush(path, e))?;

        info!(path = %path.display(), "3MF written");
        Ok(())
    }
}
