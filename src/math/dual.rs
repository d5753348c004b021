use std::ops::{Add, Div, Mul, Neg, Sub};

use super::Vector2;

/// A dual number carrying a value and its gradient with respect to the two
/// surface parameters `(u, v)`.
///
/// Every operation applies the matching calculus rule to the gradient, so an
/// expression built from [`Dual2::variable_u`] and [`Dual2::variable_v`]
/// carries its exact partial derivatives alongside its value.
///
/// Domain errors follow IEEE float semantics: dividing by a zero value or
/// taking the logarithm of zero yields infinities or NaN in the result
/// instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dual2 {
    /// Function value.
    pub value: f64,
    /// Partial derivatives `(d/du, d/dv)`.
    pub gradient: Vector2,
}

impl Dual2 {
    /// Creates a dual number from a value and a gradient.
    #[must_use]
    pub fn new(value: f64, gradient: Vector2) -> Self {
        Self { value, gradient }
    }

    /// A constant: zero gradient.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self::new(value, Vector2::zeros())
    }

    /// The independent variable `u`, seeded with gradient `(1, 0)`.
    #[must_use]
    pub fn variable_u(value: f64) -> Self {
        Self::new(value, Vector2::new(1.0, 0.0))
    }

    /// The independent variable `v`, seeded with gradient `(0, 1)`.
    #[must_use]
    pub fn variable_v(value: f64) -> Self {
        Self::new(value, Vector2::new(0.0, 1.0))
    }

    /// Returns `true` if the value and both gradient components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.value.is_finite() && self.gradient.iter().all(|g| g.is_finite())
    }

    /// Scales the gradient by the outer derivative `d`.
    fn chain(self, value: f64, d: f64) -> Self {
        Self::new(value, self.gradient * d)
    }

    /// `e^self`.
    #[must_use]
    pub fn exp(self) -> Self {
        let e = self.value.exp();
        self.chain(e, e)
    }

    /// Sine, in radians.
    #[must_use]
    pub fn sin(self) -> Self {
        self.chain(self.value.sin(), self.value.cos())
    }

    /// Cosine, in radians.
    #[must_use]
    pub fn cos(self) -> Self {
        self.chain(self.value.cos(), -self.value.sin())
    }

    /// Tangent, computed as `sin / cos` so it shares the quotient's
    /// behavior at `cos == 0`.
    #[must_use]
    pub fn tan(self) -> Self {
        self.sin() / self.cos()
    }

    /// Hyperbolic sine.
    #[must_use]
    pub fn sinh(self) -> Self {
        self.chain(self.value.sinh(), self.value.cosh())
    }

    /// Hyperbolic cosine.
    #[must_use]
    pub fn cosh(self) -> Self {
        self.chain(self.value.cosh(), self.value.sinh())
    }

    /// Hyperbolic tangent, computed as `sinh / cosh`.
    #[must_use]
    pub fn tanh(self) -> Self {
        self.sinh() / self.cosh()
    }

    /// Natural logarithm. `ln(0)` gives a value of `-inf` and an infinite
    /// or NaN gradient.
    #[must_use]
    pub fn ln(self) -> Self {
        Self::new(self.value.ln(), self.gradient / self.value)
    }

    /// Raises to a constant real power `n`; the exponent is not
    /// differentiated.
    #[must_use]
    pub fn powf(self, n: f64) -> Self {
        self.chain(self.value.powf(n), n * self.value.powf(n - 1.0))
    }

    /// Square root. The gradient is not finite at zero.
    #[must_use]
    pub fn sqrt(self) -> Self {
        self.powf(0.5)
    }
}

impl From<f64> for Dual2 {
    fn from(value: f64) -> Self {
        Self::constant(value)
    }
}

impl Add for Dual2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value, self.gradient + rhs.gradient)
    }
}

impl Sub for Dual2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value, self.gradient - rhs.gradient)
    }
}

impl Mul for Dual2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.value * rhs.value,
            rhs.gradient * self.value + self.gradient * rhs.value,
        )
    }
}

impl Div for Dual2 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        let denom = rhs.value * rhs.value;
        Self::new(
            self.value / rhs.value,
            (self.gradient * rhs.value - rhs.gradient * self.value) / denom,
        )
    }
}

impl Neg for Dual2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value, -self.gradient)
    }
}

// Mixed forms: the plain scalar is a constant.

impl Add<f64> for Dual2 {
    type Output = Self;

    fn add(self, rhs: f64) -> Self {
        Self::new(self.value + rhs, self.gradient)
    }
}

impl Sub<f64> for Dual2 {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self {
        Self::new(self.value - rhs, self.gradient)
    }
}

impl Mul<f64> for Dual2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.value * rhs, self.gradient * rhs)
    }
}

impl Div<f64> for Dual2 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.value / rhs, self.gradient / rhs)
    }
}

impl Add<Dual2> for f64 {
    type Output = Dual2;

    fn add(self, rhs: Dual2) -> Dual2 {
        rhs + self
    }
}

impl Sub<Dual2> for f64 {
    type Output = Dual2;

    fn sub(self, rhs: Dual2) -> Dual2 {
        Dual2::new(self - rhs.value, -rhs.gradient)
    }
}

impl Mul<Dual2> for f64 {
    type Output = Dual2;

    fn mul(self, rhs: Dual2) -> Dual2 {
        rhs * self
    }
}

impl Div<Dual2> for f64 {
    type Output = Dual2;

    fn div(self, rhs: Dual2) -> Dual2 {
        Dual2::constant(self) / rhs
    }
}
