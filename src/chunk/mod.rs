pub mod generator;

use crate::block::{data::SIDE_DELTAS, Block, BlockKind};
use nalgebra::{point, Point3};
use std::ops::{Index, IndexMut};

/// A dense cubic grid of blocks backed by one contiguous buffer,
/// linearized as `x * size² + y * size + z`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Chunk {
    size: usize,
    blocks: Box<[Block]>,
}

impl Chunk {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            blocks: vec![Block::default(); size.pow(3)].into_boxed_slice(),
        }
    }

    pub fn from_fn<F: FnMut(Point3<usize>) -> Block>(size: usize, mut f: F) -> Self {
        let mut chunk = Self::new(size);
        for x in 0..size {
            for z in 0..size {
                for y in 0..size {
                    let coords = point![x, y, z];
                    chunk[coords] = f(coords);
                }
            }
        }
        chunk
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn block(&self, coords: Point3<usize>) -> Block {
        self[coords]
    }

    pub fn is_active(&self, coords: Point3<usize>) -> bool {
        self[coords].is_active()
    }

    pub fn set_active(&mut self, coords: Point3<usize>, is_active: bool) {
        self[coords].set_active(is_active);
    }

    pub fn set_kind(&mut self, coords: Point3<usize>, kind: BlockKind) {
        self[coords].set_kind(kind);
    }

    /// A block is occluded iff all six face neighbors are in range and active.
    /// Boundary blocks never are.
    pub fn is_occluded(&self, coords: Point3<usize>) -> bool {
        SIDE_DELTAS.values().all(|delta| {
            let neighbor = coords.map(|c| c as i64) + delta.cast();
            self.get(neighbor).is_some_and(Block::is_active)
        })
    }

    pub fn clear(&mut self) {
        for block in self.blocks.iter_mut() {
            block.set_active(false);
        }
    }

    pub fn blocks(&self) -> impl Iterator<Item = (Point3<usize>, Block)> + '_ {
        let size = self.size;
        (0..size).flat_map(move |x| {
            (0..size).flat_map(move |z| {
                (0..size).map(move |y| {
                    let coords = point![x, y, z];
                    (coords, self[coords])
                })
            })
        })
    }

    fn get(&self, coords: Point3<i64>) -> Option<Block> {
        (0..3)
            .all(|i| (0..self.size as i64).contains(&coords[i]))
            .then(|| self[coords.map(|c| c as usize)])
    }

    fn index(&self, coords: Point3<usize>) -> usize {
        assert!((0..3).all(|i| coords[i] < self.size), "block coords out of bounds: {coords}");
        coords.x * self.size.pow(2) + coords.y * self.size + coords.z
    }
}

impl Index<Point3<usize>> for Chunk {
    type Output = Block;

    fn index(&self, coords: Point3<usize>) -> &Self::Output {
        &self.blocks[self.index(coords)]
    }
}

impl IndexMut<Point3<usize>> for Chunk {
    fn index_mut(&mut self, coords: Point3<usize>) -> &mut Self::Output {
        let index = self.index(coords);
        &mut self.blocks[index]
    }
}
