/// Electrical class of a polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Material {
    Conductor,
    Dielectric,
    Air,
}

impl Material {
    /// Larger wins when materials overlap.
    #[inline]
    pub fn priority(self) -> u8 {
        match self {
            Material::Conductor => 2,
            Material::Dielectric => 1,
            Material::Air => 0,
        }
    }

    /// Classify from relative permittivity, permeability and conductivity.
    pub fn deduce(epsilon: f64, mue: f64, kappa: f64) -> Self {
        if kappa > 0.0 {
            Material::Conductor
        } else if (epsilon - 1.0).abs() > f64::EPSILON || (mue - 1.0).abs() > f64::EPSILON {
            Material::Dielectric
        } else {
            Material::Air
        }
    }
}
