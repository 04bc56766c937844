//! The fixed set of production departments.

use axum::Json;
use serde::Serialize;

/// A production department and, for some departments, its budget figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Department {
    /// The department name, as used in expense records.
    pub name: &'static str,
    /// The budget allocated to the department, if set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated: Option<f64>,
    /// The amount of the budget spent so far, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spent: Option<f64>,
}

impl Department {
    const fn budgeted(name: &'static str, allocated: f64, spent: f64) -> Self {
        Self {
            name,
            allocated: Some(allocated),
            spent: Some(spent),
        }
    }

    const fn unbudgeted(name: &'static str) -> Self {
        Self {
            name,
            allocated: None,
            spent: None,
        }
    }
}

/// Every department, in the order they are offered in the department filter.
pub static DEPARTMENTS: [Department; 12] = [
    Department::budgeted("Wardrobe", 5000.0, 4200.0),
    Department::budgeted("Props", 3000.0, 2500.0),
    Department::budgeted("Technical", 8000.0, 6000.0),
    Department::budgeted("F&B", 4000.0, 3700.0),
    Department::unbudgeted("Makeup"),
    Department::unbudgeted("Transport"),
    Department::unbudgeted("Talent"),
    Department::unbudgeted("Handy"),
    Department::unbudgeted("Stationary"),
    Department::unbudgeted("Rental"),
    Department::unbudgeted("Misc"),
    Department::unbudgeted("Pre Pro"),
];

/// List the departments as JSON.
pub async fn get_departments() -> Json<&'static [Department]> {
    Json(DEPARTMENTS.as_slice())
}
