use bincalc::{
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, FractionPolicy, Lookahead},
        store::history::History,
        token::{Token, TokenSource, TokenStream},
    },
};

fn num(value: f64) -> Token {
    Token::Number(value)
}

fn name(text: &str) -> Token {
    Token::Name(text.to_string())
}

/// Evaluates hand-built tokens positioned on the first one.
fn eval_tokens(context: &mut Context, tokens: Vec<Token>) -> (Result<f64, EvalError>, bool) {
    let mut stream = TokenStream::new(tokens);
    let evaluation = context.evaluate(&mut stream, Lookahead::Positioned);
    (evaluation.result, evaluation.suppress_print)
}

fn assert_eval(context: &mut Context, tokens: Vec<Token>, expected: f64) {
    let (result, _) = eval_tokens(context, tokens.clone());
    assert_eq!(result, Ok(expected), "tokens {tokens:?}");
}

#[test]
fn advance_lookahead_skips_the_current_token() {
    let mut context = Context::empty(History::default());
    let mut stream = TokenStream::new(vec![Token::Print, num(4.0), Token::Mul, num(2.0)]);

    let evaluation = context.evaluate(&mut stream, Lookahead::Advance);
    assert_eq!(evaluation.result, Ok(8.0));
    assert_eq!(stream.current(), &Token::End);
}

#[test]
fn expression_leaves_its_terminator_current() {
    let mut context = Context::empty(History::default());
    let mut stream = TokenStream::new(vec![num(1.0), Token::Plus, num(2.0), Token::RParen]);

    let evaluation = context.evaluate(&mut stream, Lookahead::Positioned);
    assert_eq!(evaluation.result, Ok(3.0));
    assert_eq!(stream.current(), &Token::RParen);
}

#[test]
fn subtraction_folds_left() {
    let mut context = Context::empty(History::default());
    assert_eval(&mut context,
                vec![num(1.0), Token::Minus, num(2.0), Token::Minus, num(3.0)],
                -4.0);
}

#[test]
fn shift_binds_tighter_than_addition() {
    let mut context = Context::empty(History::default());
    assert_eval(&mut context,
                vec![num(1.0), Token::Plus, num(2.0), Token::LShift, num(1.0)],
                5.0);
}

#[test]
fn division_and_modulo_by_zero() {
    let mut context = Context::empty(History::default());

    let (result, _) = eval_tokens(&mut context, vec![num(5.0), Token::Div, num(0.0)]);
    assert_eq!(result, Err(EvalError::DivideByZero));

    let (result, _) = eval_tokens(&mut context, vec![num(5.0), Token::Mod, num(0.0)]);
    assert_eq!(result, Err(EvalError::ModuloByZero));

    // The divisor of `%` is truncated before the zero check.
    context.fraction_policy = FractionPolicy::Preserve;
    let (result, _) = eval_tokens(&mut context, vec![num(5.0), Token::Mod, num(0.5)]);
    assert_eq!(result, Err(EvalError::ModuloByZero));
}

#[test]
fn modulo_keeps_the_sign_of_the_dividend() {
    let mut context = Context::empty(History::default());
    assert_eval(&mut context, vec![Token::MagNeg, num(7.0), Token::Mod, num(3.0)], -1.0);
    assert_eval(&mut context, vec![num(7.0), Token::Mod, Token::MagNeg, num(3.0)], 1.0);
}

#[test]
fn assignment_creates_the_slot_first() {
    let mut context = Context::empty(History::default());

    assert_eval(&mut context,
                vec![name("count"), Token::Assign, name("count"), Token::Plus, num(1.0)],
                1.0);
    assert_eq!(context.variables.get("count"), Some(1.0));
}

#[test]
fn chained_assignment_sets_every_name() {
    let mut context = Context::empty(History::default());

    assert_eval(&mut context,
                vec![name("x"), Token::Assign, name("y"), Token::Assign, num(3.0)],
                3.0);
    assert_eq!(context.variables.get("x"), Some(3.0));
    assert_eq!(context.variables.get("y"), Some(3.0));
}

#[test]
fn failed_assignment_keeps_earlier_effects() {
    let mut context = Context::empty(History::default());

    // x = 1 + (y = 2) / 0
    let (result, _) = eval_tokens(&mut context,
                                  vec![name("x"),
                                       Token::Assign,
                                       num(1.0),
                                       Token::Plus,
                                       Token::LParen,
                                       name("y"),
                                       Token::Assign,
                                       num(2.0),
                                       Token::RParen,
                                       Token::Div,
                                       num(0.0)]);
    assert_eq!(result, Err(EvalError::DivideByZero));
    assert_eq!(context.variables.get("y"), Some(2.0));
    assert_eq!(context.variables.get("x"), Some(0.0));
}

#[test]
fn undefined_name_suppresses_print() {
    let mut context = Context::empty(History::default());

    let (result, suppress) = eval_tokens(&mut context, vec![name("ghost")]);
    assert_eq!(result, Err(EvalError::UndefinedName { name: "ghost".to_string() }));
    assert!(suppress);
}

#[test]
fn suppress_flag_is_reset_per_expression() {
    let mut context = Context::empty(History::default());

    let (_, suppress) = eval_tokens(&mut context, vec![name("ghost")]);
    assert!(suppress);
    let (_, suppress) = eval_tokens(&mut context, vec![num(1.0)]);
    assert!(!suppress);
}

#[test]
fn functions_hide_variables_of_the_same_name() {
    let mut context = Context::empty(History::default());
    context.variables.set("twice", 100.0);
    context.unary_functions.register("twice", |v| v * 2.0);

    assert_eval(&mut context, vec![name("twice"), num(4.0)], 8.0);
}

#[test]
fn functions_apply_to_the_next_primary_only() {
    let mut context = Context::empty(History::default());
    context.unary_functions.register("twice", |v| v * 2.0);

    assert_eval(&mut context, vec![name("twice"), num(4.0), Token::Plus, num(1.0)], 9.0);
}

#[test]
fn functions_hide_modifiers_of_the_same_name() {
    let mut context = Context::new();
    context.unary_functions.register("quit", |v| v + 1.0);

    let (result, suppress) = eval_tokens(&mut context, vec![name("quit"), num(4.0)]);
    assert_eq!(result, Ok(5.0));
    assert!(!suppress);
    assert!(!context.requests.quit);
}

#[test]
fn modifiers_hide_variables_and_suppress_print() {
    let mut context = Context::new();
    context.variables.set("quit", 7.0);

    let (result, suppress) = eval_tokens(&mut context, vec![name("quit")]);
    assert_eq!(result, Ok(0.0));
    assert!(suppress);
    assert!(context.requests.quit);
}

#[test]
fn parenthesis_must_be_closed() {
    let mut context = Context::empty(History::default());

    let (result, _) = eval_tokens(&mut context, vec![Token::LParen, num(1.0), Token::Plus, num(2.0)]);
    assert_eq!(result,
               Err(EvalError::UnterminatedParenthesis { found: "end of input".to_string() }));
}

#[test]
fn unexpected_token_in_primary() {
    let mut context = Context::empty(History::default());

    let (result, _) = eval_tokens(&mut context, vec![Token::Mul, num(2.0)]);
    assert_eq!(result, Err(EvalError::UnexpectedToken { found: "'*'".to_string() }));
}

#[test]
fn history_offsets_count_from_the_end() {
    let mut context = Context::empty(History::new(4));
    context.history.push(10.0);
    context.history.push(20.0);

    assert_eval(&mut context, vec![Token::Last(1)], 20.0);
    assert_eval(&mut context, vec![Token::Last(2)], 10.0);

    let (result, _) = eval_tokens(&mut context, vec![Token::Last(3)]);
    assert_eq!(result, Err(EvalError::HistoryOutOfRange { offset: 3, len: 2 }));

    let (result, _) = eval_tokens(&mut context, vec![Token::Last(0)]);
    assert_eq!(result, Err(EvalError::HistoryOutOfRange { offset: 0, len: 2 }));
}

#[test]
fn factorial_uses_the_first_primary() {
    let mut context = Context::empty(History::default());

    assert_eval(&mut context, vec![num(5.0), Token::Fact], 120.0);
    // The power is applied, then the factorial counts from the base.
    assert_eval(&mut context, vec![num(2.0), Token::Pow, num(3.0), Token::Fact], 8.0);
    // The integer mirror follows `~`: ~(-5) is 4, so 4 * 3 * 2.
    assert_eval(&mut context,
                vec![Token::BitNot,
                     Token::LParen,
                     Token::MagNeg,
                     num(5.0),
                     Token::RParen,
                     Token::Fact],
                24.0);
}

#[test]
fn factorial_ends_the_unary_level() {
    let mut context = Context::empty(History::default());

    // 3! ^ 2 stops at `^`, which the term level cannot use.
    let mut stream = TokenStream::new(vec![num(3.0), Token::Fact, Token::Pow, num(2.0)]);
    let evaluation = context.evaluate(&mut stream, Lookahead::Positioned);
    assert_eq!(evaluation.result, Ok(6.0));
    assert_eq!(stream.current(), &Token::Pow);
}

#[test]
fn stray_factorial_reads_as_zero() {
    let mut context = Context::empty(History::default());
    assert_eval(&mut context, vec![num(1.0), Token::Plus, Token::Fact], 1.0);
}

#[test]
fn magnitude_negation_applies_to_one_primary() {
    let mut context = Context::empty(History::default());

    assert_eval(&mut context, vec![Token::MagNeg, num(2.0), Token::Pow, num(2.0)], 4.0);
    assert_eval(&mut context, vec![num(2.0), Token::Mul, Token::MagNeg, num(3.0)], -6.0);
}

#[test]
fn literal_marker_takes_the_next_primary() {
    let mut context = Context::empty(History::default());
    assert_eval(&mut context, vec![Token::Lit, num(7.0), Token::Plus, num(1.0)], 8.0);
}

#[test]
fn bitwise_operators_fold_on_integers() {
    let mut context = Context::empty(History::default());

    assert_eval(&mut context, vec![num(12.0), Token::BitAnd, num(10.0)], 8.0);
    assert_eval(&mut context, vec![num(12.0), Token::BitOr, num(3.0)], 15.0);
    assert_eval(&mut context, vec![num(12.0), Token::BitXor, num(10.0)], 6.0);
    assert_eval(&mut context, vec![Token::BitNot, num(0.0)], -1.0);
    assert_eval(&mut context,
                vec![Token::MagNeg, num(1.0), Token::RShift, num(31.0)],
                1.0);
    assert_eval(&mut context, vec![num(1.0), Token::LShift, num(32.0)], 0.0);
}

#[test]
fn fraction_policy_controls_truncation() {
    let mut context = Context::empty(History::default());

    assert_eval(&mut context, vec![num(2.75)], 2.0);
    assert_eval(&mut context, vec![num(2.75), Token::BitOr, num(0.0)], 2.0);
    assert_eval(&mut context, vec![num(10.0), Token::Div, num(4.0)], 2.5);

    context.fraction_policy = FractionPolicy::Preserve;
    assert_eval(&mut context, vec![num(2.75)], 2.75);
    assert_eval(&mut context, vec![num(2.75), Token::BitOr, num(0.0)], 2.0);
}

#[test]
fn evaluation_is_deterministic() {
    let tokens = vec![name("a"),
                      Token::Assign,
                      num(3.0),
                      Token::Mul,
                      Token::LParen,
                      num(4.0),
                      Token::Minus,
                      num(1.0),
                      Token::RParen,
                      Token::Pow,
                      num(2.0)];

    let mut first = Context::new();
    let mut second = Context::new();
    assert_eq!(eval_tokens(&mut first, tokens.clone()),
               eval_tokens(&mut second, tokens));
    assert_eq!(first.variables.get("a"), second.variables.get("a"));
}
