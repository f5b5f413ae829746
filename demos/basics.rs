use std::fmt::{Display, Formatter, Result as FmtResult};
use stmatch::*;

// The atoms of the expression tree for a simple calculator
#[derive(Clone, Copy, Debug, PartialEq)]
enum Atom {
    Add,
    Mul,
    Num(i32),
}

impl Display for Atom {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Atom::Add => write!(f, "+"),
            Atom::Mul => write!(f, "*"),
            Atom::Num(n) => write!(f, "{}", n),
        }
    }
}

type Expr = Tree<Atom>;

fn num(n: i32) -> Expr {
    Tree::new(Atom::Num(n))
}

fn main() {
    use Atom::*;

    // Create a tree representing the expression: 1 + ((2 * 3) + 4)
    let expr = Tree::new(Add).with_children([
        num(1),
        Tree::new(Add).with_children([Tree::new(Mul).with_children([num(2), num(3)]), num(4)]),
    ]);
    println!("expr: {}", expr);

    // The leaves are the operands, in reading order
    let operands: Vec<&Atom> = expr.leaves().collect();
    println!("operands: {:?}", operands);

    // Match the operand sequence exactly
    let exact: Pattern<Atom> = [Num(1), Num(2), Num(3), Num(4)]
        .into_iter()
        .map(Token::from)
        .collect();
    println!("[{}] => {}", exact, exact.is_match(&expr));

    // A wildcard swallows the whole ((2 * 3) + 4) subtree in one step
    let tail: Pattern<Atom> = [Token::Leaf(Num(1)), Token::Subtree].into_iter().collect();
    println!("[{}] => {}", tail, tail.is_match(&expr));

    // It narrows to (2 * 3) when the 4 is demanded afterwards
    let middle: Pattern<Atom> = [Token::Leaf(Num(1)), Token::Subtree, Token::Leaf(Num(4))]
        .into_iter()
        .collect();
    println!("[{}] => {}", middle, middle.is_match(&expr));

    // But no single wildcard covers 1 and 2: they are not one subtree
    let straddle: Pattern<Atom> = [Token::Subtree, Token::Leaf(Num(3)), Token::Leaf(Num(4))]
        .into_iter()
        .collect();
    println!("[{}] => {}", straddle, straddle.is_match(&expr));

    // Driving the cursor by hand
    let cursor = expr.cursor().first_leaf();
    println!("first leaf: {}", cursor.token());
    match cursor.next_subtree() {
        Some(rest) => println!("next after it: {}", rest.first_leaf().token()),
        None => println!("walk exhausted"),
    }
}
