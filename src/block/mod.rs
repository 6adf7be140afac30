pub mod data;

use self::data::{BlockData, BLOCK_DATA};
use enum_map::Enum;
use serde::Deserialize;

/// A single voxel. Only active blocks participate in occlusion and meshing;
/// while a block is inactive its kind is meaningless leftover data.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Block {
    is_active: bool,
    kind: BlockKind,
}

impl Block {
    pub fn new(kind: BlockKind) -> Self {
        Self {
            is_active: true,
            kind,
        }
    }

    pub fn is_active(self) -> bool {
        self.is_active
    }

    pub fn kind(self) -> BlockKind {
        self.kind
    }

    pub fn set_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }

    pub fn set_kind(&mut self, kind: BlockKind) {
        self.kind = kind;
    }

    pub fn data(self) -> &'static BlockData {
        &BLOCK_DATA[self.kind]
    }
}

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Enum, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    #[default]
    Default,
    Grass,
    Sand,
    Stone,
    Snow,
}
