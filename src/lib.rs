pub mod block;
pub mod chunk;
pub mod color;
pub mod height;
pub mod mesh;
