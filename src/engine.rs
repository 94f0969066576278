use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Horsepower per kilowatt
pub const HP_PER_KW: f64 = 1.34102;

/// The engine of a [Vehicle](crate::vehicle::Vehicle). Engines are ordered by power only.
#[derive(Clone, Debug)]
pub struct Engine {
    fuel_type: String,
    power: f64,
}

impl Engine {
    /// Create a new [Engine] with `power` in kilowatts.
    pub fn new(fuel_type: &str, power: f64) -> Engine {
        Engine {
            fuel_type: fuel_type.to_string(),
            power,
        }
    }

    pub fn fuel_type(&self) -> &str {
        &self.fuel_type
    }

    /// Power in kilowatts
    pub fn power(&self) -> f64 {
        self.power
    }

    /// Power in horsepower, derived from [Engine::power].
    pub fn horsepower(&self) -> f64 {
        self.power * HP_PER_KW
    }
}

impl Display for Engine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Engine [{}, {:?} KW / {:.2} hp]", self.fuel_type, self.power, self.horsepower())
    }
}

impl Eq for Engine {}

impl PartialEq<Self> for Engine {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd<Self> for Engine {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Engine {
    // NaN power sorts before any other power
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.power, other.power);
        if a.is_nan() && b.is_nan() {
            Ordering::Equal
        } else if !a.is_nan() && b.is_nan() {
            Ordering::Greater
        } else if a.is_nan() && !b.is_nan() {
            Ordering::Less
        } else {
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
    }
}
