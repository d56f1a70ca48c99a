#![no_main]

use libfuzzer_sys::arbitrary::{Arbitrary, Result, Unstructured};
use libfuzzer_sys::fuzz_target;
use mesh3mf::{Triangle3, Vertex3};

#[derive(Debug)]
struct FuzzSoup {
    triangles: Vec<Triangle3>,
}

impl<'a> Arbitrary<'a> for FuzzSoup {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        // Draw corners from a small pool so positions repeat across triangles
        let pool_size = u.int_in_range(1..=32)?;
        let mut pool = Vec::with_capacity(pool_size);
        for _ in 0..pool_size {
            pool.push(Vertex3::new(u.arbitrary()?, u.arbitrary()?, u.arbitrary()?));
        }

        let triangle_count = u.int_in_range(0..=64)?;
        let mut triangles = Vec::with_capacity(triangle_count);
        for _ in 0..triangle_count {
            let a = pool[u.int_in_range(0..=(pool_size - 1))?];
            let b = pool[u.int_in_range(0..=(pool_size - 1))?];
            let c = pool[u.int_in_range(0..=(pool_size - 1))?];
            triangles.push(Triangle3::new(a, b, c));
        }

        Ok(FuzzSoup { triangles })
    }
}

fuzz_target!(|soup: FuzzSoup| {
    let mesh = mesh3mf::deduplicate(&soup.triangles);

    assert_eq!(mesh.triangles.len(), soup.triangles.len());
    assert!(mesh.vertices.len() <= soup.triangles.len() * 3);
    for tri in &mesh.triangles {
        // NaN corners break PartialEq, so check index bounds rather than positions
        assert!(mesh.resolve(tri).is_some());
    }

    // Arbitrary coordinates, including non-finite ones, must still serialize
    let bytes = mesh3mf::write_3mf(Vec::new(), &soup.triangles).expect("in-memory export failed");
    assert!(bytes.starts_with(b"<?xml"));
});
