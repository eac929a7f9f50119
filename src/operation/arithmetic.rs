use crate::operation::operator::Operation;

/// Addition: priority 1, associative and commutative
pub fn add() -> Operation<i64> {
    Operation::new(
        "+",
        1,
        |a: &i64, b: &i64| a + b,
        |a: &i64, b: &i64| a.checked_add(*b).is_some(),
    )
    .associative()
    .commutative()
}

/// Subtraction: priority 1, only legal when the result is not negative
pub fn subtract() -> Operation<i64> {
    Operation::new(
        "-",
        1,
        |a: &i64, b: &i64| a - b,
        |a: &i64, b: &i64| a.checked_sub(*b).is_some_and(|d| d >= 0),
    )
}

/// Multiplication: priority 2, associative and commutative
pub fn multiply() -> Operation<i64> {
    Operation::new(
        "*",
        2,
        |a: &i64, b: &i64| a * b,
        |a: &i64, b: &i64| a.checked_mul(*b).is_some(),
    )
    .associative()
    .commutative()
}

/// Division: priority 2, only legal when it divides exactly
pub fn divide() -> Operation<i64> {
    Operation::new(
        "/",
        2,
        |a: &i64, b: &i64| a / b,
        |a: &i64, b: &i64| *b != 0 && a.checked_rem(*b) == Some(0),
    )
}

/// The four operators of the numbers round
pub fn arithmetic_operators() -> Vec<Operation<i64>> {
    vec![add(), subtract(), multiply(), divide()]
}
