use super::*;
use crate::autograd::grad_check::check_grad;
use crate::autograd::BackwardOp;

#[test]
fn test_sub_forward() {
    let a = Scalar::new(5.0);
    let b = Scalar::new(2.0);
    let c = sub_op(&a, &b);
    assert_eq!(c.value(), 3.0);
}

#[test]
fn test_sub_is_addition_of_negation() {
    let a = Scalar::new(5.0);
    let b = Scalar::new(2.0);
    let c = &a - &b;
    assert_eq!(c.grad_fn(), Some(BackwardOp::Add));
    let operands = c.operands();
    assert!(operands[0].ptr_eq(&a));
    assert_eq!(operands[1].value(), -2.0);
    assert!(operands[1].operands()[0].ptr_eq(&b));
}

#[test]
fn test_sub_backward() {
    let a = Scalar::new(5.0);
    let b = Scalar::new(2.0);
    let c = &a - &b;
    c.backward();
    assert_eq!(a.gradient(), 1.0);
    assert_eq!(b.gradient(), -1.0);
    assert_eq!(c.gradient(), 1.0);
}

#[test]
fn test_sub_self_is_zero_with_zero_gradient() {
    let a = Scalar::new(7.0);
    let c = &a - &a;
    assert_eq!(c.value(), 0.0);
    c.backward();
    assert_eq!(a.gradient(), 0.0);
}

#[test]
fn test_sub_literal_both_sides() {
    let a = Scalar::new(1.0);
    assert_eq!((&a - 3.0).value(), -2.0);
    let c = 3.0 - &a;
    assert_eq!(c.value(), 2.0);
    c.backward();
    assert_eq!(a.gradient(), -1.0);
}

#[test]
fn test_sub_grad_check() {
    let result = check_grad(|x| &(&x[0] - &x[1]) * &x[1], &[2.0, 0.5], 1e-6, 1e-6);
    assert!(result.is_ok(), "{:?}", result);
}
