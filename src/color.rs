use bytemuck::{Pod, Zeroable};
use serde::Deserialize;
use std::{
    array,
    ops::{Add, Index, Mul},
};

#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Debug, Default, Zeroable, Pod, Deserialize)]
pub struct Rgb<T>([T; 3]);

impl<T> Rgb<T> {
    pub fn new(r: T, g: T, b: T) -> Self {
        Self([r, g, b])
    }

    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self(array::from_fn(f))
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Rgb<U> {
        Rgb(self.0.map(f))
    }

    fn zip_map<U, V, F>(self, other: Rgb<U>, mut f: F) -> Rgb<V>
    where
        T: Copy,
        U: Copy,
        F: FnMut(T, U) -> V,
    {
        Rgb::from_fn(|i| f(self[i], other[i]))
    }
}

impl Rgb<f32> {
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self * (1.0 - t) + other * t
    }
}

impl<T> Index<usize> for Rgb<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T: Add + Copy> Add for Rgb<T> {
    type Output = Rgb<T::Output>;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, Add::add)
    }
}

impl<T: Mul + Copy> Mul<T> for Rgb<T> {
    type Output = Rgb<T::Output>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|c| c * rhs)
    }
}

impl<T> From<Rgb<T>> for [T; 3] {
    fn from(color: Rgb<T>) -> Self {
        color.0
    }
}

impl<T> IntoIterator for Rgb<T> {
    type Item = T;
    type IntoIter = array::IntoIter<T, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_hits_endpoints_and_midpoint() {
        let a = Rgb::new(0.0, 0.0, 128.0);
        let b = Rgb::new(0.0, 0.0, 255.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgb::new(0.0, 0.0, 191.5));
    }

    #[test]
    fn deserializes_from_component_array() {
        let color: Rgb<f32> = toml::from_str::<std::collections::HashMap<String, Rgb<f32>>>(
            "color = [0.26, 0.74, 0.32]",
        )
        .unwrap()["color"];
        assert_eq!(color, Rgb::new(0.26, 0.74, 0.32));
    }
}
