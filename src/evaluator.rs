/// The lexer module tokenizes expression text.
///
/// The lexer reads the raw expression and produces a stream of tokens
/// (numeric literals, operators and parentheses), each tagged with the byte
/// offset where it starts. Whitespace is dropped here, so later stages never
/// see it.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Groups maximal runs of digits and decimal points into one literal.
/// - Reports characters outside the grammar.
pub mod lexer;
/// Binary operators, their precedence and their dispatch to the arithmetic
/// layer.
pub mod operator;
/// Core evaluation logic.
///
/// Implements the operator-precedence (shunting-yard) pass that turns the
/// token stream into a single value, applying each operator as soon as its
/// precedence is resolved.
///
/// # Responsibilities
/// - Decides whether a `-` is unary or binary.
/// - Maintains the operator stack and the output stack.
/// - Reports unbalanced parentheses, missing operands and empty input.
pub mod core;
