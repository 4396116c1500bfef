//! Priced items a reservation can order.
//!
//! Reservations store these opaquely; only bill computation reads [`OrderItem::price`].

use serde::{Deserialize, Serialize};

/// Cold drinks cost this many percent more.
pub const COLD_DRINK_SURCHARGE: f64 = 10.0;
/// Desserts served without sugar cost this many percent more.
pub const SUGAR_FREE_SURCHARGE: f64 = 10.0;

/// Menu section of a plain dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Course {
    FirstCourse,
    MainCourse,
    Additional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrinkSize {
    Small,
    Medium,
    Large,
}

impl DrinkSize {
    /// Percent added to the base price.
    pub fn surcharge(self) -> f64 {
        match self {
            DrinkSize::Small => 0.0,
            DrinkSize::Medium => 15.0,
            DrinkSize::Large => 30.0,
        }
    }
}

/// A single ordered item, carrying whatever its price depends on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OrderItem {
    Course {
        course: Course,
        name: String,
        base_price: f64,
    },
    Dessert {
        name: String,
        base_price: f64,
        with_sugar: bool,
    },
    Drink {
        name: String,
        base_price: f64,
        cold: bool,
        size: DrinkSize,
    },
    Bread {
        name: String,
        price: f64,
    },
}

impl OrderItem {
    pub fn course(course: Course, name: impl Into<String>, base_price: f64) -> Self {
        OrderItem::Course {
            course,
            name: name.into(),
            base_price,
        }
    }

    pub fn dessert(name: impl Into<String>, base_price: f64, with_sugar: bool) -> Self {
        OrderItem::Dessert {
            name: name.into(),
            base_price,
            with_sugar,
        }
    }

    pub fn drink(name: impl Into<String>, base_price: f64, cold: bool, size: DrinkSize) -> Self {
        OrderItem::Drink {
            name: name.into(),
            base_price,
            cold,
            size,
        }
    }

    pub fn bread(name: impl Into<String>, price: f64) -> Self {
        OrderItem::Bread {
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            OrderItem::Course { name, .. }
            | OrderItem::Dessert { name, .. }
            | OrderItem::Drink { name, .. }
            | OrderItem::Bread { name, .. } => name,
        }
    }

    /// Price charged for this item.
    pub fn price(&self) -> f64 {
        match self {
            OrderItem::Course { base_price, .. } => *base_price,
            OrderItem::Dessert {
                base_price,
                with_sugar,
                ..
            } => {
                let surcharge = if *with_sugar { 0.0 } else { SUGAR_FREE_SURCHARGE };
                base_price * (1.0 + surcharge / 100.0)
            }
            OrderItem::Drink {
                base_price,
                cold,
                size,
                ..
            } => {
                let cold = if *cold { COLD_DRINK_SURCHARGE } else { 0.0 };
                base_price * (1.0 + (cold + size.surcharge()) / 100.0)
            }
            OrderItem::Bread { price, .. } => *price,
        }
    }
}
