//! Triangle soup to 3MF export
//!
//! The pipeline is linear: deduplicate the triangle soup, wrap the indexed
//! mesh in a [`Model`], serialize, flush. Nothing outlives the call.

use std::io::Write;
use std::path::Path;

use tracing::info_span;

use crate::dedup::deduplicate;
use crate::error::Result;
use crate::model::{Model, Triangle3};
use crate::writer::WriterConfig;

/// Export triangles to a 3MF file at `path`
///
/// The file is created or truncated. Vertex positions shared between
/// triangles are written once; triangles keep their winding order.
///
/// # Errors
///
/// - [`Error::CreateFile`](crate::Error::CreateFile) if the file cannot be
///   created; nothing is written in that case
/// - [`Error::XmlWrite`](crate::Error::XmlWrite) if a write fails while the
///   document is being serialized
/// - [`Error::Flush`](crate::Error::Flush) if the final flush fails
///
/// # Example
///
/// ```no_run
/// use mesh3mf::{Triangle3, Vertex3, save_3mf};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let a = Vertex3::new(0.0, 0.0, 0.0);
/// let b = Vertex3::new(10.0, 0.0, 0.0);
/// let c = Vertex3::new(0.0, 10.0, 0.0);
/// save_3mf("triangle.3mf", &[Triangle3::new(a, b, c)])?;
/// # Ok(())
/// # }
/// ```
pub fn save_3mf<P: AsRef<Path>>(path: P, triangles: &[Triangle3]) -> Result<()> {
    save_3mf_with_config(path, triangles, &WriterConfig::default())
}

/// Export triangles to a 3MF file at `path` with a custom configuration
pub fn save_3mf_with_config<P: AsRef<Path>>(
    path: P,
    triangles: &[Triangle3],
    config: &WriterConfig,
) -> Result<()> {
    let path = path.as_ref();
    let span = info_span!(
        "export_3mf",
        path = %path.display(),
        triangles = triangles.len()
    );
    let _enter = span.enter();

    let model = Model::from_mesh(deduplicate(triangles));
    model.write_to_file_with_config(path, config)
}

/// Export triangles as a 3MF document into any writer
///
/// Returns the writer once the document is complete. The writer is not
/// flushed; that stays with the caller who owns it.
///
/// # Example
///
/// ```
/// use mesh3mf::{Triangle3, Vertex3, write_3mf};
///
/// let a = Vertex3::new(0.0, 0.0, 0.0);
/// let b = Vertex3::new(1.0, 0.0, 0.0);
/// let c = Vertex3::new(0.0, 1.0, 0.0);
/// let bytes = write_3mf(Vec::new(), &[Triangle3::new(a, b, c)]).unwrap();
///
/// let xml = String::from_utf8(bytes).unwrap();
/// assert!(xml.contains(r#"<triangle v1="0" v2="1" v3="2"/>"#));
/// ```
pub fn write_3mf<W: Write>(writer: W, triangles: &[Triangle3]) -> Result<W> {
    write_3mf_with_config(writer, triangles, &WriterConfig::default())
}

/// Export triangles as a 3MF document into any writer with a custom configuration
pub fn write_3mf_with_config<W: Write>(
    writer: W,
    triangles: &[Triangle3],
    config: &WriterConfig,
) -> Result<W> {
    let span = info_span!("export_3mf", triangles = triangles.len());
    let _enter = span.enter();

    let model = Model::from_mesh(deduplicate(triangles));
    model.to_writer_with_config(writer, config)
}
