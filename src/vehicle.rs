use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use crate::comparator::{ByField, ByKey, Comparator};
use crate::engine::Engine;
use crate::error::{RecordError, RecordResult};
use crate::field::Field;
use crate::field_type::FieldType;
use crate::record::{schema_mismatch, take_values, Record};
use crate::value::Value;

/// A vehicle. Model, year and engine are fixed at construction, the color can be changed
/// freely and the odometer only moves forward through [Vehicle::drive].
///
/// The natural order is by model, ignoring case, then by year.
///
/// # Examples
/// ```
/// use text_record_sort::engine::Engine;
/// use text_record_sort::vehicle::Vehicle;
///
/// let mut yugo = Vehicle::new("Yugo", 1985, Engine::new("Benzin", 40.0), "Plava", 500_000);
/// yugo.drive(120)?;
/// assert_eq!(yugo.odometer(), 500_120);
/// assert!(yugo.drive(0).is_err());
/// # Ok::<(), text_record_sort::error::RecordError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Vehicle {
    model: String,
    year: i64,
    engine: Engine,
    color: String,
    odometer: i64,
}

impl Vehicle {
    pub fn new(model: &str, year: i64, engine: Engine, color: &str, odometer: i64) -> Vehicle {
        Vehicle {
            model: model.to_string(),
            year,
            engine,
            color: color.to_string(),
            odometer,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_color(&mut self, color: &str) {
        self.color = color.to_string();
    }

    /// Distance traveled in kilometers
    pub fn odometer(&self) -> i64 {
        self.odometer
    }

    /// Add `distance` kilometers to the odometer.
    ///
    /// Fails with [RecordError::InvalidDistance] when `distance` is not positive and with
    /// [RecordError::OdometerOverflow] when the odometer can not hold the result. The odometer is
    /// left unchanged on failure.
    pub fn drive(&mut self, distance: i64) -> RecordResult<()> {
        if distance <= 0 {
            return Err(RecordError::InvalidDistance { distance });
        }

        self.odometer = self.odometer
            .checked_add(distance)
            .ok_or(RecordError::OdometerOverflow { odometer: self.odometer, distance })?;
        log::debug!("{} driven {} km, odometer at {} km", self.model, distance, self.odometer);
        Ok(())
    }
}

/// Newer vehicles first, vehicles of the same year with less distance traveled first.
pub fn by_year_desc_then_odometer() -> impl Comparator<Vehicle> {
    ByKey::new(Vehicle::year)
        .reversed()
        .then(ByKey::new(Vehicle::odometer))
}

/// Weaker engines first.
pub fn by_engine() -> impl Comparator<Vehicle> {
    ByField::new(Vehicle::engine)
}

impl Display for Vehicle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) {}, {} km", self.model, self.year, self.color, self.odometer)
    }
}

impl Eq for Vehicle {}

impl PartialEq<Self> for Vehicle {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd<Self> for Vehicle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vehicle {
    fn cmp(&self, other: &Self) -> Ordering {
        let a = self.model.chars().flat_map(char::to_lowercase);
        let b = other.model.chars().flat_map(char::to_lowercase);
        a.cmp(b).then(self.year.cmp(&other.year))
    }
}

impl Record for Vehicle {
    const NAME: &'static str = "vehicle";

    fn fields() -> Vec<Field> {
        vec![
            Field::new("separator", FieldType::Skip),
            Field::new("model", FieldType::String),
            Field::new("year", FieldType::Integer),
            Field::new("fuel type", FieldType::String),
            Field::new("power", FieldType::Number),
            Field::new("color", FieldType::String),
            Field::new("odometer", FieldType::Integer),
        ]
    }

    fn from_values(values: Vec<Value>) -> RecordResult<Vehicle> {
        match take_values::<7>(Self::NAME, values)? {
            [
                Value::Skipped,
                Value::String { s: model },
                Value::Integer { i: year },
                Value::String { s: fuel_type },
                Value::Number { n: power },
                Value::String { s: color },
                Value::Integer { i: odometer },
            ] => {
                Ok(Vehicle::new(&model, year, Engine::new(&fuel_type, power), &color, odometer))
            }
            _ => Err(schema_mismatch(Self::NAME, 7)),
        }
    }

    fn to_values(&self) -> Vec<Value> {
        vec![
            Value::Skipped,
            Value::string(&self.model),
            Value::integer(self.year),
            Value::string(self.engine.fuel_type()),
            Value::number(self.engine.power()),
            Value::string(&self.color),
            Value::integer(self.odometer),
        ]
    }

    fn row(&self) -> String {
        format!(
            "{:>20} ({:4}) {:>8} {:8.2} KW {:>8} {:8} km ",
            self.model,
            self.year,
            self.engine.fuel_type(),
            self.engine.power(),
            self.color,
            self.odometer,
        )
    }
}
