pub mod preview;

use noise::{Fbm, NoiseFn, Perlin};

/// An external scalar terrain field. Implementations must be pure: equal
/// inputs produce equal heights.
pub trait HeightmapSource {
    fn height(&self, x: f64, z: f64) -> f64;
}

/// Fractal Perlin field scaled to `[-amplitude, amplitude]`.
pub struct NoiseHeightmap {
    noise: Fbm<Perlin>,
    amplitude: f64,
}

impl NoiseHeightmap {
    pub fn new(seed: u32, amplitude: f64) -> Self {
        Self {
            noise: Fbm::new(seed),
            amplitude,
        }
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }
}

impl HeightmapSource for NoiseHeightmap {
    fn height(&self, x: f64, z: f64) -> f64 {
        self.noise.get([x, z]) * self.amplitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_seeds_sample_equally() {
        let a = NoiseHeightmap::new(7, 8.0);
        let b = NoiseHeightmap::new(7, 8.0);
        for i in 0..16 {
            let (x, z) = (i as f64 * 0.37, i as f64 * 1.21);
            assert_eq!(a.height(x, z), b.height(x, z));
        }
    }

    #[test]
    fn amplitude_scales_samples() {
        let unit = NoiseHeightmap::new(3, 1.0);
        let scaled = NoiseHeightmap::new(3, 4.0);
        assert_eq!(scaled.height(0.3, 0.7), unit.height(0.3, 0.7) * 4.0);
    }
}
