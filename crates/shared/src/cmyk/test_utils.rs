use approx::{AbsDiffEq, assert_relative_eq, RelativeEq};
use crate::Cmyk;

pub fn assert_relative_eq_cmyk(left: Cmyk, right: Cmyk) {
    assert_relative_eq!(
        AssertableCmyk(left),
        AssertableCmyk(right),
    )
}

#[derive(PartialEq, Debug)]
pub(crate) struct AssertableCmyk(pub Cmyk);

impl AbsDiffEq for AssertableCmyk {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.0.c, &other.0.c, epsilon) &&
        f64::abs_diff_eq(&self.0.m, &other.0.m, epsilon) &&
        f64::abs_diff_eq(&self.0.y, &other.0.y, epsilon) &&
        f64::abs_diff_eq(&self.0.k, &other.0.k, epsilon)
    }
}

impl RelativeEq for AssertableCmyk {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.0.c, &other.0.c, epsilon, max_relative) &&
        f64::relative_eq(&self.0.m, &other.0.m, epsilon, max_relative) &&
        f64::relative_eq(&self.0.y, &other.0.y, epsilon, max_relative) &&
        f64::relative_eq(&self.0.k, &other.0.k, epsilon, max_relative)
    }
}
