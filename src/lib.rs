#![allow(non_snake_case)]

use types::Float;
pub extern crate nalgebra as na;

pub mod cart_pole;
pub mod config;
pub mod control;
pub mod energy;
pub mod env;
pub mod errors;
pub mod integrators;
pub mod params;
pub mod plot;
pub mod simulate;
pub mod state;
pub mod types;
pub mod util;

pub const GRAVITY: Float = 9.81;

pub const PI: Float = std::f64::consts::PI;
pub const TWO_PI: Float = 2.0 * PI;
