use serde::{Deserialize, Serialize};

use crate::{
    errors::{check_positive, SwingupError},
    types::Float,
    GRAVITY,
};

/// Physical constants of the cart-pole as seen by the controller.
///
/// `length` is the pole half-length, i.e. pivot to center of mass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalParams {
    pub mass_cart: Float,
    pub mass_pole: Float,
    pub length: Float,
    pub gravity: Float,
}

impl Default for PhysicalParams {
    fn default() -> Self {
        PhysicalParams {
            mass_cart: 2.0,
            mass_pole: 0.1,
            length: 0.25,
            gravity: GRAVITY,
        }
    }
}

impl PhysicalParams {
    /// Pole moment of inertia about the pivot, treating the pole as a point
    /// mass at its center of mass: J = m * L^2
    pub fn moment_of_inertia(&self) -> Float {
        self.mass_pole * self.length * self.length
    }

    pub fn validate(&self) -> Result<(), SwingupError> {
        check_positive("mass_cart", self.mass_cart)?;
        check_positive("mass_pole", self.mass_pole)?;
        check_positive("length", self.length)?;
        check_positive("gravity", self.gravity)
    }
}
