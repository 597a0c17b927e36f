use crate::lexer::tokens::TokenKind;

/// Binding powers for expression parsing, weakest first.
///
/// `Unary` is only ever passed down when parsing a prefix operator's
/// operand; `binding_power` never returns it. `Call` is the reserved slot
/// for function invocation, which has no grammar yet.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Unary,
    Call,
}

/// Binding power of an infix operator kind. Everything else maps to
/// `Default`, which halts the climb in `parse_expr`.
pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Equals | TokenKind::NotEquals => BindingPower::Equality,
        TokenKind::Less | TokenKind::Greater => BindingPower::Relational,
        TokenKind::Plus | TokenKind::Dash => BindingPower::Additive,
        TokenKind::Slash | TokenKind::Star => BindingPower::Multiplicative,
        _ => BindingPower::Default,
    }
}
