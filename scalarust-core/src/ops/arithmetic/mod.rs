// Implements `std::ops::$trait` for every combination of `Scalar`, `&Scalar` and `f64`
// by delegating to the `_op` function. Literals are lifted to fresh leaves.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl std::ops::$trait<&Scalar> for &Scalar {
            type Output = Scalar;
            fn $method(self, rhs: &Scalar) -> Scalar {
                $op_fn(self, rhs)
            }
        }

        impl std::ops::$trait<Scalar> for Scalar {
            type Output = Scalar;
            fn $method(self, rhs: Scalar) -> Scalar {
                $op_fn(&self, &rhs)
            }
        }

        impl std::ops::$trait<&Scalar> for Scalar {
            type Output = Scalar;
            fn $method(self, rhs: &Scalar) -> Scalar {
                $op_fn(&self, rhs)
            }
        }

        impl std::ops::$trait<Scalar> for &Scalar {
            type Output = Scalar;
            fn $method(self, rhs: Scalar) -> Scalar {
                $op_fn(self, &rhs)
            }
        }

        impl std::ops::$trait<f64> for &Scalar {
            type Output = Scalar;
            fn $method(self, rhs: f64) -> Scalar {
                $op_fn(self, &Scalar::new(rhs))
            }
        }

        impl std::ops::$trait<f64> for Scalar {
            type Output = Scalar;
            fn $method(self, rhs: f64) -> Scalar {
                $op_fn(&self, &Scalar::new(rhs))
            }
        }

        impl std::ops::$trait<&Scalar> for f64 {
            type Output = Scalar;
            fn $method(self, rhs: &Scalar) -> Scalar {
                $op_fn(&Scalar::new(self), rhs)
            }
        }

        impl std::ops::$trait<Scalar> for f64 {
            type Output = Scalar;
            fn $method(self, rhs: Scalar) -> Scalar {
                $op_fn(&Scalar::new(self), &rhs)
            }
        }
    };
}

// Export foundational arithmetic operations directly
pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;

// Re-export the primary operation functions
pub use add::add_op;
pub use div::div_op;
pub use mul::mul_op;
pub use neg::neg_op;
pub use pow::pow_op;
pub use sub::sub_op;
