//! XML writing for 3MF model files
//!
//! This module serializes a [`Model`] into the 3MF core XML document and,
//! when asked to, wraps that document in an OPC package.

mod core;

use crate::error::{Error, Result};
use crate::model::*;
use crate::opc;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use std::io::{Cursor, Write as IoWrite};

/// Container format of the exported bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The bare model XML document
    #[default]
    Xml,
    /// A 3MF package: ZIP archive holding the model at `3D/3dmodel.model`
    Package,
}

/// Configuration for writing 3MF documents
///
/// Document metadata (language, namespace, unit) are fixed and not part of
/// the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    indent: usize,
    format: OutputFormat,
}

impl WriterConfig {
    /// Default configuration: bare XML indented by two spaces per level
    pub fn new() -> Self {
        Self {
            indent: 2,
            format: OutputFormat::Xml,
        }
    }

    /// Set the number of spaces per nesting level (0 disables indentation)
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Select the container format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Spaces per nesting level
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Container format
    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Write a Model to XML format
///
/// Serializes the model to 3MF core XML: the declaration line, then
/// `model` with `resources` and `build`.
pub fn write_model_xml<W: IoWrite>(model: &Model, writer: W, indent: usize) -> Result<()> {
    let mut xml_writer = if indent > 0 {
        Writer::new_with_indent(writer, b' ', indent)
    } else {
        Writer::new(writer)
    };

    // Write XML declaration
    xml_writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(|e| Error::xml_write(format!("Failed to write XML declaration: {}", e)))?;

    // The declaration sits on its own line even without indentation
    if indent == 0 {
        xml_writer
            .get_mut()
            .write_all(b"\n")
            .map_err(|e| Error::xml_write(format!("Failed to write XML declaration: {}", e)))?;
    }

    let mut model_elem = BytesStart::new("model");
    model_elem.push_attribute(("xml:lang", model.lang));
    model_elem.push_attribute(("xmlns", model.xmlns));
    model_elem.push_attribute(("unit", model.unit));

    xml_writer
        .write_event(Event::Start(model_elem))
        .map_err(|e| Error::xml_write(format!("Failed to write model element: {}", e)))?;

    // Write resources
    xml_writer
        .write_event(Event::Start(BytesStart::new("resources")))
        .map_err(|e| Error::xml_write(format!("Failed to write resources element: {}", e)))?;

    core::write_object(&mut xml_writer, &model.object)?;

    xml_writer
        .write_event(Event::End(BytesEnd::new("resources")))
        .map_err(|e| Error::xml_write(format!("Failed to close resources element: {}", e)))?;

    // Write build
    core::write_build(&mut xml_writer, &model.item)?;

    // Close model element
    xml_writer
        .write_event(Event::End(BytesEnd::new("model")))
        .map_err(|e| Error::xml_write(format!("Failed to close model element: {}", e)))?;

    Ok(())
}

/// Write a model to `writer` in the configured container format
pub(crate) fn write_document<W: IoWrite>(
    model: &Model,
    mut writer: W,
    config: &WriterConfig,
) -> Result<W> {
    match config.format {
        OutputFormat::Xml => write_model_xml(model, &mut writer, config.indent)?,
        OutputFormat::Package => {
            let mut xml_buffer = Vec::new();
            write_model_xml(model, &mut xml_buffer, config.indent)?;

            // ZIP needs a seekable sink; assemble in memory, then copy out
            let package = opc::create_package(Cursor::new(Vec::new()), &xml_buffer)?;
            writer
                .write_all(&package.into_inner())
                .map_err(|e| Error::xml_write(format!("Failed to write 3MF package: {}", e)))?;
        }
    }

    Ok(writer)
}
