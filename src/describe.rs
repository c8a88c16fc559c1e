//! Human-readable description of a transformed function.

use crate::function::Function;

/// Describe the mapping applied to the base function.
///
/// The first line shows the base graph `x -> (x, f(x))`, the second the
/// transformed point, e.g. `((1/2)x + 1, -3(sin x) -2)`.
pub fn describe(function: &Function) -> String {
    let c = function.coefficients();
    let base = format!("({function})");
    let mut out = format!("x -> (x,{base}) -> \n(");
    if c.b == 0 {
        out.push_str(&format!("x, {})", c.k));
        return out;
    }
    out.push_str(&format!("{}x{}, ", b_text(c.b), shift_text(c.h)));
    if c.a == 0 {
        out.push_str(&format!("{})", shift_text(c.k)));
    } else {
        out.push_str(&format!("{}{base}{})", a_text(c.a), shift_text(c.k)));
    }
    out
}

fn a_text(a: i32) -> String {
    match a {
        1 => String::new(),
        -1 => "-".to_string(),
        _ => a.to_string(),
    }
}

fn b_text(b: i32) -> String {
    match b {
        1 => String::new(),
        -1 => "-".to_string(),
        _ => format!("(1/{b})"),
    }
}

fn shift_text(shift: i32) -> String {
    match shift {
        0 => String::new(),
        s if s > 0 => format!(" + {s}"),
        s => format!(" {s}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::{Coefficients, FunctionKind, LogKind, TrigKind};

    #[test]
    fn identity_description() {
        let function = Function::new(FunctionKind::Power { exponent: 2 }, Coefficients::identity());
        assert_eq!(describe(&function), "x -> (x,(x^2)) -> \n(x, (x^2))");
    }

    #[test]
    fn full_transformation() {
        let function =
            Function::new(FunctionKind::Trig(TrigKind::Sin), Coefficients::new(-3, 2, 1, -2));
        assert_eq!(
            describe(&function),
            "x -> (x,(sin x)) -> \n((1/2)x + 1, -3(sin x) -2)"
        );
    }

    #[test]
    fn negated_stretches() {
        let function =
            Function::new(FunctionKind::Log(LogKind::Ln), Coefficients::new(-1, -1, -2, 3));
        assert_eq!(describe(&function), "x -> (x,(ln x)) -> \n(-x -2, -(ln x) + 3)");
    }

    #[test]
    fn zero_stretches_collapse() {
        let flat = Function::new(FunctionKind::Exp { base: 3 }, Coefficients::new(0, 1, 0, 2));
        assert_eq!(describe(&flat), "x -> (x,(3^x)) -> \n(x,  + 2)");
        let vertical = Function::new(FunctionKind::Exp { base: 3 }, Coefficients::new(1, 0, 0, 2));
        assert_eq!(describe(&vertical), "x -> (x,(3^x)) -> \n(x, 2)");
    }
}
