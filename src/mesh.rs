use crate::{
    block::data::{CORNERS, SIDE_CORNER_DELTAS, SIDE_DELTAS},
    chunk::Chunk,
    color::Rgb,
};
use bytemuck::{Pod, Zeroable};
use log::debug;
use nalgebra::{Point3, Vector3};

pub const VERTICES_PER_BLOCK: usize = 36;

/// One interleaved vertex record: position, normal and color, tightly packed
/// as nine `f32`s (offsets 0, 12 and 24, stride 36 bytes).
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Debug, Zeroable, Pod)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: Rgb<f32>,
}

impl Vertex {
    fn new(position: Point3<f32>, normal: Vector3<f32>, color: Rgb<f32>) -> Self {
        Self {
            position: position.into(),
            normal: normal.into(),
            color,
        }
    }
}

/// Triangle soup for one chunk: 36 vertices per visible block, nothing for
/// inactive or occluded ones. The whole chunk tiles the unit cube
/// `[-0.5, 0.5]³` in model space.
#[derive(PartialEq, Debug)]
pub struct ChunkMesh {
    vertices: Vec<Vertex>,
}

impl ChunkMesh {
    pub fn build(chunk: &Chunk) -> Self {
        let vertices: Vec<_> = chunk
            .blocks()
            .filter(|&(coords, block)| block.is_active() && !chunk.is_occluded(coords))
            .flat_map(|(coords, block)| block_vertices(chunk.size(), coords, block.data().color))
            .collect();
        debug!(
            "meshed {} visible blocks into {} vertices",
            vertices.len() / VERTICES_PER_BLOCK,
            vertices.len()
        );
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn block_count(&self) -> usize {
        self.vertices.len() / VERTICES_PER_BLOCK
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

fn block_vertices(
    size: usize,
    coords: Point3<usize>,
    color: Rgb<f32>,
) -> impl Iterator<Item = Vertex> {
    SIDE_CORNER_DELTAS.iter().flat_map(move |(side, corner_deltas)| {
        let normal = SIDE_DELTAS[side].cast();
        CORNERS.into_iter().map(move |corner| {
            let position = (coords + corner_deltas[corner].cast())
                .map(|c| c as f32 / size as f32 - 0.5);
            Vertex::new(position, normal, color)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        block::{data::BLOCK_DATA, Block, BlockKind},
        chunk::generator::{Generator, SolidCube, Sphere},
    };
    use nalgebra::point;
    use std::{collections::HashSet, mem};

    #[test]
    fn vertex_layout_is_tightly_packed() {
        assert_eq!(mem::size_of::<Vertex>(), 36);
        assert_eq!(mem::offset_of!(Vertex, position), 0);
        assert_eq!(mem::offset_of!(Vertex, normal), 12);
        assert_eq!(mem::offset_of!(Vertex, color), 24);
    }

    #[test]
    fn empty_chunk_builds_an_empty_mesh() {
        let mesh = ChunkMesh::build(&Chunk::new(8));
        assert!(mesh.is_empty());
        assert_eq!(mesh.block_count(), 0);
    }

    #[test]
    fn lone_block_emits_a_full_cube() {
        let mut chunk = Chunk::new(4);
        chunk[point![1, 2, 3]] = Block::new(BlockKind::Stone);
        let mesh = ChunkMesh::build(&chunk);
        assert_eq!(mesh.len(), VERTICES_PER_BLOCK);
        assert_eq!(mesh.block_count(), 1);
    }

    #[test]
    fn solid_chunk_culls_its_interior() {
        let mesh = ChunkMesh::build(&generate(
            4,
            &SolidCube {
                kind: BlockKind::Default,
            },
        ));
        assert_eq!(mesh.block_count(), 64 - 8);
        assert_eq!(mesh.len(), VERTICES_PER_BLOCK * 56);
    }

    #[test]
    fn positions_tile_the_unit_cube() {
        let mesh = ChunkMesh::build(&generate(
            2,
            &SolidCube {
                kind: BlockKind::Default,
            },
        ));
        for vertex in mesh.vertices() {
            for c in vertex.position {
                assert!(c == -0.5 || c == 0.0 || c == 0.5, "{c}");
            }
        }
    }

    #[test]
    fn lone_block_spans_exactly_its_sub_cube() {
        let mut chunk = Chunk::new(4);
        chunk[point![0, 0, 0]] = Block::new(BlockKind::Default);
        let mesh = ChunkMesh::build(&chunk);
        for vertex in mesh.vertices() {
            for c in vertex.position {
                assert!(c == -0.5 || c == -0.25, "{c}");
            }
        }
    }

    #[test]
    fn normals_are_the_six_axis_units() {
        let mut chunk = Chunk::new(4);
        chunk[point![2, 1, 3]] = Block::new(BlockKind::Grass);
        let mesh = ChunkMesh::build(&chunk);
        for vertex in mesh.vertices() {
            let abs_sum: f32 = vertex.normal.iter().map(|c| c.abs()).sum();
            assert_eq!(abs_sum, 1.0);
        }
        let distinct: HashSet<[i8; 3]> = mesh
            .vertices()
            .iter()
            .map(|v| v.normal.map(|c| c as i8))
            .collect();
        assert_eq!(distinct.len(), 6);
    }

    #[test]
    fn every_vertex_wears_the_block_color() {
        let mut chunk = Chunk::new(4);
        chunk[point![1, 1, 1]] = Block::new(BlockKind::Snow);
        let mesh = ChunkMesh::build(&chunk);
        assert!(mesh.vertices().iter().all(|v| v.color == BLOCK_DATA[BlockKind::Snow].color));
    }

    #[test]
    fn build_is_deterministic() {
        let chunk = generate(
            8,
            &Sphere {
                kind: BlockKind::Grass,
            },
        );
        let (a, b) = (ChunkMesh::build(&chunk), ChunkMesh::build(&chunk));
        assert_eq!(a, b);
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn byte_view_matches_the_vertex_stride() {
        let mesh = ChunkMesh::build(&generate(
            2,
            &SolidCube {
                kind: BlockKind::Sand,
            },
        ));
        assert_eq!(mesh.as_bytes().len(), mesh.len() * mem::size_of::<Vertex>());
    }

    fn generate(size: usize, generator: &dyn Generator) -> Chunk {
        let mut chunk = Chunk::new(size);
        generator.populate(&mut chunk);
        chunk
    }
}
