use std::fmt;

/// What sort of vehicle a [`Vehicle`] is. Only cars carry extra data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleKind {
    Generic,
    Car { wheels: u32 },
}

/// A vehicle record: brand, model and production year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    brand: String,
    model: String,
    production_year: i32,
    kind: VehicleKind,
}

impl Vehicle {
    pub fn new(brand: impl Into<String>, model: impl Into<String>, production_year: i32) -> Self {
        Vehicle {
            brand: brand.into(),
            model: model.into(),
            production_year,
            kind: VehicleKind::Generic,
        }
    }

    pub fn car(
        brand: impl Into<String>,
        model: impl Into<String>,
        production_year: i32,
        wheels: u32,
    ) -> Self {
        Vehicle {
            kind: VehicleKind::Car { wheels },
            ..Self::new(brand, model, production_year)
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn production_year(&self) -> i32 {
        self.production_year
    }

    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    /// One-line description; cars also report their wheel count.
    pub fn detail(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (brand, model, year) = (&self.brand, &self.model, self.production_year);
        match self.kind {
            VehicleKind::Generic => write!(f, "Kendaraan: {brand} {model} ({year})"),
            VehicleKind::Car { wheels } => {
                write!(f, "Mobil: {brand} {model} ({year}), Roda: {wheels}")
            }
        }
    }
}
