use chunkmason::{
    block::BlockKind,
    chunk::{
        generator::{Empty, Generator, HeightmapColumns, SolidCube, Sphere},
        Chunk,
    },
    height::{preview, NoiseHeightmap},
    mesh::ChunkMesh,
};
use clap::{Parser, ValueEnum};
use log::{error, info};
use nalgebra::vector;
use std::{fs, path::PathBuf, process::ExitCode};

#[derive(Parser)]
struct Args {
    /// Blocks per chunk axis
    #[arg(long, default_value_t = 16)]
    size: usize,
    /// Terrain fill strategy
    #[arg(long, value_enum, default_value = "terrain")]
    mode: Mode,
    /// Heightmap noise seed
    #[arg(long, default_value_t = 0)]
    seed: u32,
    /// World-space heightmap offset along x
    #[arg(long, default_value_t = 0.0)]
    offset_x: f64,
    /// World-space heightmap offset along z
    #[arg(long, default_value_t = 0.0)]
    offset_z: f64,
    /// Write the mesh's raw vertex bytes here
    #[arg(long)]
    out: Option<PathBuf>,
    /// Write a PNG preview of the sampled heightmap here
    #[arg(long)]
    preview: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Empty,
    Cube,
    Sphere,
    Terrain,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let offset = vector![args.offset_x, args.offset_z];
    let amplitude = args.size as f64 / 2.0;
    let generator: Box<dyn Generator> = match args.mode {
        Mode::Empty => Box::new(Empty),
        Mode::Cube => Box::new(SolidCube {
            kind: BlockKind::Stone,
        }),
        Mode::Sphere => Box::new(Sphere {
            kind: BlockKind::Default,
        }),
        Mode::Terrain => Box::new(HeightmapColumns {
            source: NoiseHeightmap::new(args.seed, amplitude),
            offset,
            kind: BlockKind::Grass,
        }),
    };

    let mut chunk = Chunk::new(args.size);
    generator.populate(&mut chunk);
    let mesh = ChunkMesh::build(&chunk);
    info!("meshed {size}x{size}x{size} chunk", size = args.size);
    println!(
        "{} visible blocks, {} vertices, {} bytes",
        mesh.block_count(),
        mesh.len(),
        mesh.as_bytes().len()
    );

    if let Some(path) = &args.out {
        if let Err(e) = fs::write(path, mesh.as_bytes()) {
            error!("failed to write {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
        println!("wrote vertex buffer to {}", path.display());
    }

    if let Some(path) = &args.preview {
        let source = NoiseHeightmap::new(args.seed, amplitude);
        if let Err(e) = preview::write_preview(&source, offset, args.size as u32, amplitude, path)
        {
            error!("failed to write {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
        println!("wrote heightmap preview to {}", path.display());
    }

    ExitCode::SUCCESS
}
