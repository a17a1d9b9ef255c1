//! Types exchanged with the food diary API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Catalog food, with energy given per reference portion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    /// The food ID
    pub id: i64,

    /// Display name
    pub name: String,

    /// Kilocalories per portion
    pub calories: f64,

    /// Reference portion in grams
    pub portion: f64,
}

impl Food {
    /// Caption shown under the selected food, e.g. `"100 kcal / 30 g"`
    pub fn caption(&self) -> String {
        format!("{} kcal / {} g", self.calories, self.portion)
    }
}

/// A logged diary entry
///
/// Name, calories and portion are copies of the referenced [`Food`] taken
/// when the entry was created or last updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: i64,
    pub user_id: i64,
    pub food_id: i64,
    pub name: String,
    pub calories: f64,
    pub portion: f64,
    /// Grams consumed
    pub quantity: u32,
    /// ISO-8601 instant, opaque to the client
    pub timestamp: String,
}

impl FoodItem {
    /// Snapshot of the referenced food as captured on this entry
    pub fn food(&self) -> Food {
        Food {
            id: self.food_id,
            name: self.name.clone(),
            calories: self.calories,
            portion: self.portion,
        }
    }

    /// Rounded kilocalories for the consumed quantity
    pub fn energy(&self) -> i64 {
        crate::summary::entry_energy(self.calories, self.quantity, self.portion)
    }
}

/// Body of create and update requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryPayload {
    pub food_id: i64,
    pub quantity: u32,
    pub timestamp: String,
}

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Calendar day a diary view is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayDate(NaiveDate);

impl DayDate {
    /// Build a day from calendar parts (month is 1-based)
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, Error> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(DayDate)
            .ok_or_else(|| Error::invalid_date(format!("{}-{}-{}", year, month, day)))
    }

    /// Parse a `YYYY-MM-DD` string
    pub fn parse(value: &str) -> Result<Self, Error> {
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(DayDate)
            .map_err(|_| Error::invalid_date(value))
    }

    /// Today in the local time zone
    pub fn today() -> Self {
        DayDate(chrono::Local::now().date_naive())
    }

    /// Timestamp used to filter and create entries for this day
    pub fn timestamp_filter(&self) -> String {
        format!("{}T00:00:00.000Z", self)
    }
}

impl fmt::Display for DayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DayDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayDate::parse(s)
    }
}
