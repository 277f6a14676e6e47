//! Core state types for the gravity simulators.
//!
//! Defines the 2D body record shared by both simulators:
//! - `Body`     the mutable state owned by a simulator
//! - `BodyView` the read-only snapshot handed out to renderers
//!
//! Both simulators own their own `Vec<Body>`; bodies are never shared.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass, > 0, never mutated after creation
    pub radius: f64, // collision radius (direct simulator only)
}

impl Body {
    pub fn new(x: NVec2, v: NVec2, m: f64, radius: f64) -> Self {
        Self { x, v, m, radius }
    }

    /// Euclidean distance to `other`, clamped from below to the sum of both radii
    pub fn distance_to(&self, other: &Body) -> f64 {
        let d = (other.x - self.x).norm();
        d.max(self.radius + other.radius)
    }

    pub fn view(&self) -> BodyView {
        BodyView {
            position: self.x,
            velocity: self.v,
            mass: self.m,
            radius: self.radius,
        }
    }
}

/// Copy of the observable part of a body at the time `Simulator::bodies` was called
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyView {
    position: NVec2,
    velocity: NVec2,
    mass: f64,
    radius: f64,
}

impl BodyView {
    pub fn position(&self) -> NVec2 {
        self.position
    }

    pub fn velocity(&self) -> NVec2 {
        self.velocity
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}
