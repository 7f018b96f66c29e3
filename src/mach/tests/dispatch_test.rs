use super::*;
use crate::lang::ErrorCode;

fn stack(r: &Runtime) -> Vec<i32> {
    r.stack().iter().copied().collect()
}

#[test]
fn test_operand_order() {
    let mut r = Runtime::default();
    assert_eq!(run(&mut r, &["10 3 - .", "10 3 / .", "10 3 mod .", "1 4 << ."]), "7\n3\n1\n16\n");
}

#[test]
fn test_bitwise() {
    let mut r = Runtime::default();
    assert_eq!(run(&mut r, &["12 10 and . 12 10 or .", "-8 1 >> ."]), "8\n14\n-4\n");
}

#[test]
fn test_division_by_zero_keeps_operands() {
    let mut r = Runtime::default();
    let events = r.enter("10 0 /");
    assert_eq!(errors(&events), 1);
    match &events[0] {
        Event::Error(e) => assert_eq!(e.code(), ErrorCode::DivisionByZero),
        _ => panic!("expected an error"),
    }
    assert_eq!(stack(&r), vec![10, 0]);
    let events = r.enter("mod");
    assert_eq!(errors(&events), 1);
    assert_eq!(stack(&r), vec![10, 0]);
}

#[test]
fn test_underflow_is_a_no_op() {
    let mut r = Runtime::default();
    assert_eq!(
        run(&mut r, &["."]),
        "Stack underflow in line 1, column 1: .\n"
    );
    assert_eq!(r.stack().depth(), 0);
    r.enter("5 +");
    assert_eq!(stack(&r), vec![5]);
    r.enter("swap");
    assert_eq!(stack(&r), vec![5]);
}

#[test]
fn test_overflow_drops_the_value() {
    let mut r = small();
    let out = run(&mut r, &["1 2 3 4 5 6"]);
    assert_eq!(
        out,
        "Stack overflow in line 1, column 9: 5\nStack overflow in line 1, column 11: 6\n"
    );
    assert_eq!(stack(&r), vec![1, 2, 3, 4]);
    run(&mut r, &["dup"]);
    assert_eq!(stack(&r), vec![1, 2, 3, 4]);
    assert_eq!(run(&mut r, &["+ ."]), "7\n");
}

#[test]
fn test_show_stack_bottom_to_top() {
    let mut r = Runtime::default();
    assert_eq!(run(&mut r, &[".s", "1 2 3 .s"]), "<0>\n<3> 1 2 3\n");
    assert_eq!(stack(&r), vec![1, 2, 3]);
}

#[test]
fn test_arithmetic_overflow_keeps_operands() {
    let mut r = Runtime::default();
    let out = run(&mut r, &["2147483647 1 +"]);
    assert_eq!(out, "Arithmetic overflow in line 1, column 14: +\n");
    assert_eq!(stack(&r), vec![i32::MAX, 1]);
}
