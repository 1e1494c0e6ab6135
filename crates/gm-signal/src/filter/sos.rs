use num_complex::Complex64;

/// One biquad section.
///
/// Transfer function: H(z) = (b0 + b1*z^-1 + b2*z^-2) / (1 + a1*z^-1 + a2*z^-2)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SecondOrderSection {
    /// Numerator [b0, b1, b2]
    pub b: [f64; 3],
    /// Denominator [a1, a2], a0 normalized to 1
    pub a: [f64; 2],
}

impl SecondOrderSection {
    pub fn new(b: [f64; 3], a: [f64; 2]) -> Self {
        Self { b, a }
    }

    /// Process one sample in Direct Form II Transposed.
    #[inline]
    pub fn step(&self, state: &mut [f64; 2], input: f64) -> f64 {
        let output = self.b[0] * input + state[0];
        state[0] = self.b[1] * input - self.a[0] * output + state[1];
        state[1] = self.b[2] * input - self.a[1] * output;
        output
    }

    /// Complex response at `z`.
    pub fn response(&self, z: Complex64) -> Complex64 {
        let zi = z.inv();
        let zi2 = zi * zi;
        let num = self.b[0] + self.b[1] * zi + self.b[2] * zi2;
        let den = 1.0 + self.a[0] * zi + self.a[1] * zi2;
        num / den
    }

    /// DC gain, `sum(b) / sum(a)`.
    pub fn dc_gain(&self) -> f64 {
        (self.b[0] + self.b[1] + self.b[2]) / (1.0 + self.a[0] + self.a[1])
    }

    /// Poles inside the unit circle (Jury conditions for a quadratic).
    pub fn is_stable(&self) -> bool {
        self.a[1].abs() < 1.0 && self.a[0].abs() < 1.0 + self.a[1]
    }
}

/// Run `x` through the cascade, optionally starting from per-section state.
pub fn sosfilt(sections: &[SecondOrderSection], x: &[f64], zi: Option<&[[f64; 2]]>) -> Vec<f64> {
    let mut state: Vec<[f64; 2]> = match zi {
        Some(z) => z.to_vec(),
        None => vec![[0.0; 2]; sections.len()],
    };
    debug_assert_eq!(state.len(), sections.len());

    x.iter()
        .map(|&sample| {
            sections
                .iter()
                .zip(state.iter_mut())
                .fold(sample, |acc, (sec, st)| sec.step(st, acc))
        })
        .collect()
}
