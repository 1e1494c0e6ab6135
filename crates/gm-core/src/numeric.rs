use crate::{GmError, GmResult};

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> GmResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(GmError::NonFinite { what, value: v })
    }
}

/// Mean spacing of a time base, `mean(diff(time))`.
///
/// Equivalent to `(time[n-1] - time[0]) / (n - 1)`, which is what the
/// telescoping sum of differences reduces to.
pub fn mean_step(time: &[Real]) -> GmResult<Real> {
    if time.len() < 2 {
        return Err(GmError::TooShort {
            what: "mean time step",
            len: time.len(),
            min: 2,
        });
    }
    let span = time[time.len() - 1] - time[0];
    let step = ensure_finite(span / (time.len() - 1) as Real, "mean time step")?;
    if step <= 0.0 {
        return Err(GmError::InvalidArg {
            what: "time base must be increasing",
        });
    }
    Ok(step)
}

/// Largest absolute value in a series (0 for an empty series).
pub fn peak_abs(values: &[Real]) -> Real {
    values.iter().fold(0.0, |acc: Real, v| acc.max(v.abs()))
}

/// True if every element is >= its predecessor.
pub fn is_non_decreasing(values: &[Real]) -> bool {
    values.windows(2).all(|w| w[1] >= w[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn mean_step_uniform_grid() {
        let t: Vec<Real> = (0..101).map(|i| i as Real * 0.01).collect();
        let dt = mean_step(&t).unwrap();
        assert!((dt - 0.01).abs() < 1e-12);
    }

    #[test]
    fn mean_step_rejects_single_sample() {
        assert!(matches!(
            mean_step(&[0.0]),
            Err(GmError::TooShort { len: 1, .. })
        ));
    }

    #[test]
    fn mean_step_rejects_reversed_time() {
        assert!(mean_step(&[1.0, 0.5, 0.0]).is_err());
    }

    #[test]
    fn peak_abs_uses_magnitude() {
        assert_eq!(peak_abs(&[0.2, -0.7, 0.5]), 0.7);
        assert_eq!(peak_abs(&[]), 0.0);
    }
}
