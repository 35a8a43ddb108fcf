//! Trapping a narrow error kind and handling it as data.

use std::error::Error;
use std::fmt;
use std::result::Result as StdResult;

use match_variant::{trap, BoxError, Result};

#[derive(Debug)]
struct DivideByZero;

impl fmt::Display for DivideByZero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "division by zero")
    }
}

impl Error for DivideByZero {}

fn divide(numerator: i64, denominator: i64) -> StdResult<i64, BoxError> {
    match numerator.checked_div(denominator) {
        Some(quotient) => Ok(quotient),
        None => Err(Box::new(DivideByZero)),
    }
}

fn main() -> StdResult<(), BoxError> {
    for denominator in [0, 2] {
        let trapped = trap::<(DivideByZero,), _, _>(|trapped| {
            trapped.ok(divide(100, denominator)?);
            Ok(())
        })?;

        println!("{}", trapped);

        match &trapped {
            Result::ok(value) => println!("got {}", value),
            Result::error(_) => println!("Something went wrong"),
        }

        println!("{}", trapped.to_maybe());
    }

    Ok(())
}
