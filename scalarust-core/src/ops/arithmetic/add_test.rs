use super::*;
use crate::autograd::grad_check::check_grad;

#[test]
fn test_add_forward() {
    let a = Scalar::new(-1.0);
    let b = Scalar::new(1.0);
    let c = add_op(&a, &b);
    assert_eq!(c.value(), 0.0);
    assert_eq!(c.gradient(), 0.0);
    assert_eq!(c.grad_fn(), Some(BackwardOp::Add));
}

#[test]
fn test_add_preserves_operand_order() {
    let a = Scalar::new(-2.0);
    let b = Scalar::new(2.0);
    let c = &a + &b;
    assert_eq!(c.operands(), vec![a, b]);
}

#[test]
fn test_add_same_node_twice() {
    let a = Scalar::new(3.0);
    let c = &a + &a;
    let operands = c.operands();
    assert_eq!(operands.len(), 2);
    assert!(operands[0].ptr_eq(&a));
    assert!(operands[1].ptr_eq(&a));

    c.backward();
    assert_eq!(a.gradient(), 2.0);
}

#[test]
fn test_add_backward() {
    let a = Scalar::new(-3.0);
    let b = Scalar::new(2.0);
    let c = &a + &b;
    c.backward();
    assert_eq!(a.gradient(), 1.0);
    assert_eq!(b.gradient(), 1.0);
    assert_eq!(c.gradient(), 1.0);
}

#[test]
fn test_add_literal_both_sides() {
    let a = Scalar::new(1.5);
    let right = &a + 2.0;
    let left = 2.0 + &a;
    assert_eq!(right.value(), 3.5);
    assert_eq!(left.value(), 3.5);
    // The literal is a fresh leaf on the side it was written
    assert!(right.operands()[0].ptr_eq(&a));
    assert!(right.operands()[1].is_leaf());
    assert!(left.operands()[1].ptr_eq(&a));
}

#[test]
fn test_add_owned_operands() {
    let a = Scalar::new(1.0);
    let b = Scalar::new(2.0);
    let c = a.clone() + b.clone();
    assert_eq!(c.value(), 3.0);
    c.backward();
    assert_eq!(a.gradient(), 1.0);
    assert_eq!(b.gradient(), 1.0);
}

#[test]
fn test_add_grad_check() {
    let result = check_grad(|x| &x[0] + &x[1], &[0.3, -1.7], 1e-6, 1e-6);
    assert!(result.is_ok(), "{:?}", result);
}
