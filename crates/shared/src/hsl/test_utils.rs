use approx::{AbsDiffEq, assert_relative_eq, RelativeEq};
use crate::Hsl;

pub fn assert_relative_eq_hsl(left: Hsl, right: Hsl) {
    assert_relative_eq!(
        AssertableHsl(left),
        AssertableHsl(right),
    )
}

#[derive(PartialEq, Debug)]
pub(crate) struct AssertableHsl(pub Hsl);

impl AbsDiffEq for AssertableHsl {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.0.h, &other.0.h, epsilon) &&
        f64::abs_diff_eq(&self.0.s, &other.0.s, epsilon) &&
        f64::abs_diff_eq(&self.0.l, &other.0.l, epsilon)
    }
}

impl RelativeEq for AssertableHsl {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.0.h, &other.0.h, epsilon, max_relative) &&
        f64::relative_eq(&self.0.s, &other.0.s, epsilon, max_relative) &&
        f64::relative_eq(&self.0.l, &other.0.l, epsilon, max_relative)
    }
}
