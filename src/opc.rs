//! OPC (Open Packaging Conventions) packaging for 3MF files
//!
//! A 3MF file on disk is a ZIP archive following the OPC standard. The model
//! document lives at `3D/3dmodel.model`, next to the content types part and
//! the root relationships part that points at it.

use crate::error::Result;
use std::io::{Seek, Write};
use zip::ZipWriter;
use zip::result::ZipError;
use zip::write::SimpleFileOptions;

/// Main 3D model file path within the 3MF archive
pub const MODEL_PATH: &str = "3D/3dmodel.model";

/// Content types file path
pub const CONTENT_TYPES_PATH: &str = "[Content_Types].xml";

/// Relationships file path
pub const RELS_PATH: &str = "_rels/.rels";

/// Relationship type of the start part (the 3D model)
pub const MODEL_REL_TYPE: &str = "http://schemas.microsoft.com/3dmanufacturing/2013/01/3dmodel";

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="model" ContentType="application/vnd.ms-package.3dmanufacturing-3dmodel+xml"/>
</Types>"#;

/// Build the `_rels/.rels` part
fn root_relationships() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Target="/{}" Id="rel0" Type="{}"/>
</Relationships>"#,
        MODEL_PATH, MODEL_REL_TYPE
    )
}

/// Create a 3MF package (ZIP archive) from model data
///
/// This function writes:
/// - `[Content_Types].xml`
/// - `_rels/.rels`
/// - `3D/3dmodel.model`
///
/// # Returns
///
/// Returns the writer after finishing the ZIP archive
pub fn create_package<W: Write + Seek>(writer: W, model_xml: &[u8]) -> Result<W> {
    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default();

    zip.start_file(CONTENT_TYPES_PATH, options)?;
    zip.write_all(CONTENT_TYPES_XML.as_bytes()).map_err(ZipError::from)?;

    zip.start_file(RELS_PATH, options)?;
    zip.write_all(root_relationships().as_bytes()).map_err(ZipError::from)?;

    zip.start_file(MODEL_PATH, options)?;
    zip.write_all(model_xml).map_err(ZipError::from)?;

    Ok(zip.finish()?)
}
