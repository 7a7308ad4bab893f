use proptest::prelude::*;
use reckon::{
    error::EvalFailure,
    evaluate,
    interpreter::lexer::{Token, Tokenizer},
};

#[derive(Debug, Clone)]
enum Expr {
    Num(u32),
    Neg(Box<Expr>),
    Bin(Box<Expr>, char, Box<Expr>),
}

impl Expr {
    fn render(&self) -> String {
        match self {
            Self::Num(n) => n.to_string(),
            Self::Neg(inner) => format!("-({})", inner.render()),
            Self::Bin(left, op, right) => format!("({} {op} {})", left.render(), right.render()),
        }
    }

    /// Reference value, `None` when a division by zero happens anywhere.
    fn value(&self) -> Option<f64> {
        match self {
            Self::Num(n) => Some(f64::from(*n)),
            Self::Neg(inner) => inner.value().map(|v| -v),
            Self::Bin(left, op, right) => {
                let left = left.value()?;
                let right = right.value()?;
                match op {
                    '+' => Some(left + right),
                    '-' => Some(left - right),
                    '*' => Some(left * right),
                    _ if right == 0.0 => None,
                    _ => Some(left / right),
                }
            },
        }
    }
}

fn expr() -> impl Strategy<Value = Expr> {
    let leaf = (0u32..1000).prop_map(Expr::Num);
    leaf.prop_recursive(4, 32, 2, |inner| {
            prop_oneof![inner.clone().prop_map(|e| Expr::Neg(Box::new(e))),
                        (inner.clone(), prop::sample::select(vec!['+', '-', '*', '/']), inner)
                            .prop_map(|(l, op, r)| Expr::Bin(Box::new(l), op, Box::new(r))),]
        })
}

/// Puts `gap` between every pair of characters that are not both digits.
fn respace(text: &str, gap: &str) -> String {
    let mut out = String::new();
    let mut chars = text.chars().filter(|c| !c.is_whitespace()).peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if let Some(next) = chars.peek()
           && !(c.is_ascii_digit() && next.is_ascii_digit())
        {
            out.push_str(gap);
        }
    }
    out
}

proptest! {
    #[test]
    fn agrees_with_reference_arithmetic(tree in expr()) {
        let text = tree.render();
        match tree.value() {
            Some(expected) => prop_assert_eq!(evaluate(&text), Ok(expected)),
            None => prop_assert!(matches!(evaluate(&text), Err(EvalFailure::Eval(_)))),
        }
    }

    #[test]
    fn multiplication_binds_tighter(a in 0u32..10_000, b in 0u32..10_000, c in 0u32..10_000) {
        let (x, y, z) = (f64::from(a), f64::from(b), f64::from(c));
        prop_assert_eq!(evaluate(&format!("{a} + {b} * {c}")), Ok(x + y * z));
        prop_assert_eq!(evaluate(&format!("{a} * {b} - {c}")), Ok(x * y - z));
    }

    #[test]
    fn same_level_operators_are_left_associative(a in 0u32..10_000,
                                                 b in 1u32..10_000,
                                                 c in 1u32..10_000) {
        let (x, y, z) = (f64::from(a), f64::from(b), f64::from(c));
        prop_assert_eq!(evaluate(&format!("{a} - {b} - {c}")), Ok((x - y) - z));
        prop_assert_eq!(evaluate(&format!("{a} / {b} / {c}")), Ok((x / y) / z));
        prop_assert_eq!(evaluate(&format!("{a} / {b} * {c}")), Ok((x / y) * z));
    }

    #[test]
    fn whitespace_between_tokens_is_ignored(tree in expr(), gap in "[ \t\r\n]{0,3}") {
        let text = tree.render();
        prop_assert_eq!(evaluate(&respace(&text, &gap)), evaluate(&respace(&text, "")));
    }

    #[test]
    fn evaluation_is_repeatable(text in "[0-9+*/() @-]{0,24}") {
        let first = evaluate(&text);
        prop_assert_eq!(evaluate(&text), first.clone());
        prop_assert_eq!(evaluate(&text), first);
    }

    #[test]
    fn arbitrary_input_never_panics(text in any::<String>()) {
        let _ = evaluate(&text);
    }

    #[test]
    fn tokenizer_cursor_moves_forward(text in "[0-9+*/() \t-]{0,32}") {
        let mut tokenizer = Tokenizer::new(&text);
        let mut last = tokenizer.position();
        let mut reached_end = false;

        for _ in 0..=text.len() {
            let token = tokenizer.next_token();
            prop_assert!(token.is_ok());
            let position = tokenizer.position();
            prop_assert!(position >= last);
            prop_assert!(position <= text.len());
            last = position;
            if token == Ok(Token::End) {
                reached_end = true;
                break;
            }
        }

        prop_assert!(reached_end);
        prop_assert_eq!(tokenizer.next_token(), Ok(Token::End));
        prop_assert_eq!(tokenizer.position(), text.len());
    }
}
