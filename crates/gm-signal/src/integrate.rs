//! Cumulative quadrature rules.

use serde::{Deserialize, Serialize};

/// A rule that turns samples `y(x)` into a running integral starting at 0.
pub trait CumulativeRule {
    /// Running integral with `out[0] == 0` and `out.len() == y.len()`.
    ///
    /// Callers guarantee `x.len() == y.len()`.
    fn cumulative(&self, y: &[f64], x: &[f64]) -> Vec<f64>;
}

/// Trapezoidal rule: `0.5 * (y[i] + y[i+1]) * (x[i+1] - x[i])` per step.
#[derive(Clone, Copy, Debug)]
pub struct Trapezoid;

impl CumulativeRule for Trapezoid {
    fn cumulative(&self, y: &[f64], x: &[f64]) -> Vec<f64> {
        let mut out = Vec::with_capacity(y.len());
        if y.is_empty() {
            return out;
        }
        let mut acc = 0.0;
        out.push(acc);
        for i in 0..y.len() - 1 {
            acc += 0.5 * (y[i] + y[i + 1]) * (x[i + 1] - x[i]);
            out.push(acc);
        }
        out
    }
}

/// Left rectangle rule: `y[i] * (x[i+1] - x[i])` per step.
/// First order, kept as a cheap cross-check for the trapezoid.
#[derive(Clone, Copy, Debug)]
pub struct LeftRectangle;

impl CumulativeRule for LeftRectangle {
    fn cumulative(&self, y: &[f64], x: &[f64]) -> Vec<f64> {
        let mut out = Vec::with_capacity(y.len());
        if y.is_empty() {
            return out;
        }
        let mut acc = 0.0;
        out.push(acc);
        for i in 0..y.len() - 1 {
            acc += y[i] * (x[i + 1] - x[i]);
            out.push(acc);
        }
        out
    }
}

/// Integration rule selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationRule {
    /// Trapezoidal rule (default)
    #[default]
    Trapezoid,
    /// Left rectangle rule
    LeftRectangle,
}

impl IntegrationRule {
    pub fn cumulative(self, y: &[f64], x: &[f64]) -> Vec<f64> {
        match self {
            IntegrationRule::Trapezoid => Trapezoid.cumulative(y, x),
            IntegrationRule::LeftRectangle => LeftRectangle.cumulative(y, x),
        }
    }
}
