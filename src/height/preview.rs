use super::HeightmapSource;
use crate::color::Rgb;
use image::{ImageResult, RgbImage};
use log::trace;
use nalgebra::Vector2;
use std::path::Path;

/// Piecewise-linear color ramp over `[-1, 1]`, clamped at both ends.
pub struct ColorGradient {
    stops: Vec<(f64, Rgb<f32>)>,
}

impl ColorGradient {
    pub fn new(stops: Vec<(f64, Rgb<f32>)>) -> Self {
        assert!(!stops.is_empty(), "gradient requires at least one stop");
        assert!(
            stops.windows(2).all(|w| w[0].0 < w[1].0),
            "gradient stops must be strictly ascending"
        );
        Self { stops }
    }

    /// Deep water through shoreline, grassland and rock up to snow.
    pub fn terrain() -> Self {
        Self::new(vec![
            (-1.0, Rgb::new(0.0, 0.0, 128.0)),
            (-0.25, Rgb::new(0.0, 0.0, 255.0)),
            (0.0, Rgb::new(0.0, 128.0, 255.0)),
            (0.0625, Rgb::new(240.0, 240.0, 64.0)),
            (0.125, Rgb::new(32.0, 160.0, 0.0)),
            (0.375, Rgb::new(224.0, 224.0, 0.0)),
            (0.75, Rgb::new(128.0, 128.0, 128.0)),
            (1.0, Rgb::new(255.0, 255.0, 255.0)),
        ])
    }

    pub fn sample(&self, t: f64) -> Rgb<f32> {
        let (mut prev_t, mut prev) = self.stops[0];
        if t <= prev_t {
            return prev;
        }
        for &(stop_t, stop) in &self.stops[1..] {
            if t <= stop_t {
                return prev.lerp(stop, ((t - prev_t) / (stop_t - prev_t)) as f32);
            }
            (prev_t, prev) = (stop_t, stop);
        }
        prev
    }
}

/// Renders an `extent`² sample of the source, normalized by `amplitude`,
/// through the terrain gradient and writes it as an image.
pub fn write_preview<H: HeightmapSource>(
    source: &H,
    origin: Vector2<f64>,
    extent: u32,
    amplitude: f64,
    path: &Path,
) -> ImageResult<()> {
    let gradient = ColorGradient::terrain();
    let image = RgbImage::from_fn(extent, extent, |px, pz| {
        let height = source.height(origin.x + px as f64, origin.y + pz as f64);
        let t = (height / amplitude).clamp(-1.0, 1.0);
        image::Rgb(gradient.sample(t).map(|c| c.round() as u8).into())
    });
    trace!("writing {extent}x{extent} heightmap preview to {}", path.display());
    image.save(path)
}
