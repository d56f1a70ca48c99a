//! Shared utilities for export tests
//!
//! Reads an exported model document back with quick-xml so tests can assert
//! on structure instead of substrings.

#![allow(dead_code)]

use mesh3mf::{Triangle3, Vertex3};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// The parts of a model document the tests care about
#[derive(Debug, Default)]
pub struct ParsedModel {
    /// Attributes of the `model` element, in document order
    pub model_attrs: Vec<(String, String)>,
    /// Attributes of each `object` element
    pub objects: Vec<Vec<(String, String)>>,
    /// Vertex table
    pub vertices: Vec<Vertex3>,
    /// Index triples
    pub triangles: Vec<[usize; 3]>,
    /// `objectid` of each build item
    pub build_items: Vec<String>,
    /// Element paths as they were opened, e.g. `model/resources/object`
    pub paths: Vec<String>,
}

impl ParsedModel {
    /// Resolve every index triple back to positions
    pub fn resolved_triangles(&self) -> Vec<Triangle3> {
        self.triangles
            .iter()
            .map(|&[a, b, c]| {
                Triangle3::new(self.vertices[a], self.vertices[b], self.vertices[c])
            })
            .collect()
    }
}

fn attrs(e: &BytesStart) -> Vec<(String, String)> {
    e.attributes()
        .map(|attr| {
            let attr = attr.expect("malformed attribute");
            let key = std::str::from_utf8(attr.key.as_ref()).unwrap().to_string();
            let value = std::str::from_utf8(&attr.value).unwrap().to_string();
            (key, value)
        })
        .collect()
}

fn attr<'a>(attrs: &'a [(String, String)], name: &str) -> &'a str {
    attrs
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
        .unwrap_or_else(|| panic!("missing attribute '{}'", name))
}

/// Parse an exported model document
///
/// Panics on malformed XML or unbalanced elements.
pub fn parse_model(xml: &[u8]) -> ParsedModel {
    let text = std::str::from_utf8(xml).expect("document is not UTF-8");
    assert!(
        text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"),
        "document must start with the XML declaration line"
    );

    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut parsed = ParsedModel::default();
    let mut stack: Vec<String> = Vec::new();

    loop {
        let event = reader.read_event().expect("malformed XML");
        let is_empty = matches!(event, Event::Empty(_));

        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let name = std::str::from_utf8(e.name().as_ref()).unwrap().to_string();
                stack.push(name.clone());
                parsed.paths.push(stack.join("/"));

                let a = attrs(e);
                match name.as_str() {
                    "model" => parsed.model_attrs = a,
                    "object" => parsed.objects.push(a),
                    "vertex" => parsed.vertices.push(Vertex3::new(
                        attr(&a, "x").parse().unwrap(),
                        attr(&a, "y").parse().unwrap(),
                        attr(&a, "z").parse().unwrap(),
                    )),
                    "triangle" => parsed.triangles.push([
                        attr(&a, "v1").parse().unwrap(),
                        attr(&a, "v2").parse().unwrap(),
                        attr(&a, "v3").parse().unwrap(),
                    ]),
                    "item" => parsed.build_items.push(attr(&a, "objectid").to_string()),
                    _ => {}
                }

                if is_empty {
                    stack.pop();
                }
            }
            Event::End(ref e) => {
                let name = std::str::from_utf8(e.name().as_ref()).unwrap().to_string();
                assert_eq!(stack.pop().as_deref(), Some(name.as_str()));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    assert!(stack.is_empty(), "unclosed elements: {:?}", stack);
    parsed
}

/// Triangles of an axis-aligned box, two per face, outward winding
pub fn cube(size: f64) -> Vec<Triangle3> {
    let p = |x: f64, y: f64, z: f64| Vertex3::new(x * size, y * size, z * size);
    let c = [
        p(0.0, 0.0, 0.0),
        p(1.0, 0.0, 0.0),
        p(1.0, 1.0, 0.0),
        p(0.0, 1.0, 0.0),
        p(0.0, 0.0, 1.0),
        p(1.0, 0.0, 1.0),
        p(1.0, 1.0, 1.0),
        p(0.0, 1.0, 1.0),
    ];
    let faces = [
        [0, 3, 2, 1], // bottom
        [4, 5, 6, 7], // top
        [0, 1, 5, 4], // front
        [2, 3, 7, 6], // back
        [1, 2, 6, 5], // right
        [3, 0, 4, 7], // left
    ];

    faces
        .iter()
        .flat_map(|&[a, b, cc, d]| {
            [
                Triangle3::new(c[a], c[b], c[cc]),
                Triangle3::new(c[a], c[cc], c[d]),
            ]
        })
        .collect()
}
