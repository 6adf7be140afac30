use super::Chunk;
use crate::{
    block::{Block, BlockKind},
    height::HeightmapSource,
};
use nalgebra::{point, Vector2};

/// A terrain fill strategy. Strategies expect a cleared chunk and only
/// activate blocks.
pub trait Generator {
    fn populate(&self, chunk: &mut Chunk);
}

pub struct Empty;

impl Generator for Empty {
    fn populate(&self, _: &mut Chunk) {}
}

pub struct SolidCube {
    pub kind: BlockKind,
}

impl Generator for SolidCube {
    fn populate(&self, chunk: &mut Chunk) {
        for x in 0..chunk.size() {
            for z in 0..chunk.size() {
                for y in 0..chunk.size() {
                    chunk[point![x, y, z]] = Block::new(self.kind);
                }
            }
        }
    }
}

/// Fills the largest sphere that fits in the grid: blocks whose index-space
/// distance from the center is within `size / 2`, boundary ties included.
pub struct Sphere {
    pub kind: BlockKind,
}

impl Generator for Sphere {
    fn populate(&self, chunk: &mut Chunk) {
        let radius = chunk.size() as f64 / 2.0;
        let center = point![radius, radius, radius];
        for x in 0..chunk.size() {
            for z in 0..chunk.size() {
                for y in 0..chunk.size() {
                    let coords = point![x, y, z];
                    if (coords.map(|c| c as f64) - center).norm() <= radius {
                        chunk[coords] = Block::new(self.kind);
                    }
                }
            }
        }
    }
}

/// Raises one column per `(x, z)` cell up to the sampled height, clamped to
/// the grid. `offset` shifts sampling into world space so neighboring chunks
/// can share one seamless heightmap.
pub struct HeightmapColumns<H> {
    pub source: H,
    pub offset: Vector2<f64>,
    pub kind: BlockKind,
}

impl<H: HeightmapSource> Generator for HeightmapColumns<H> {
    fn populate(&self, chunk: &mut Chunk) {
        let size = chunk.size();
        for x in 0..size {
            for z in 0..size {
                let height = self
                    .source
                    .height(x as f64 + self.offset.x, z as f64 + self.offset.y)
                    .clamp(0.0, size as f64);
                for y in (0..size).take_while(|&y| (y as f64) < height) {
                    chunk[point![x, y, z]] = Block::new(self.kind);
                }
            }
        }
    }
}
