//! Named lookup of the object-shaped entry points, for a compiler that
//! links calls by symbol rather than by Rust path. Constructors taking
//! native literals (`create_number`, `create_string`, `create_vector`) and
//! the name-operand queries (`is_type`, `is_protocol`) are called directly
//! and deliberately absent here.

use crate::builtins::{booleans, numbers, strings};
use crate::error::RtResult;
use crate::heap;
use crate::object::ObjectRef;

pub struct IntrinsicSpec {
    pub symbol: &'static str,
    pub arity: u8,
}

#[derive(Copy, Clone)]
pub enum IntrinsicFn {
    Nullary(fn() -> RtResult<ObjectRef>),
    Unary(fn(ObjectRef) -> RtResult<ObjectRef>),
    Binary(fn(ObjectRef, ObjectRef) -> RtResult<ObjectRef>),
}

impl IntrinsicFn {
    pub fn arity(self) -> u8 {
        match self {
            IntrinsicFn::Nullary(_) => 0,
            IntrinsicFn::Unary(_) => 1,
            IntrinsicFn::Binary(_) => 2,
        }
    }
}

pub const INTRINSICS: &[IntrinsicSpec] = &[
    IntrinsicSpec { symbol: "print", arity: 1 },
    IntrinsicSpec { symbol: "range", arity: 2 },
    IntrinsicSpec { symbol: "reseat", arity: 2 },
    IntrinsicSpec { symbol: "duplicate_binding", arity: 1 },
    IntrinsicSpec { symbol: "add", arity: 2 },
    IntrinsicSpec { symbol: "sub", arity: 2 },
    IntrinsicSpec { symbol: "mul", arity: 2 },
    IntrinsicSpec { symbol: "div", arity: 2 },
    IntrinsicSpec { symbol: "pow", arity: 2 },
    IntrinsicSpec { symbol: "rem", arity: 2 },
    IntrinsicSpec { symbol: "gt", arity: 2 },
    IntrinsicSpec { symbol: "ge", arity: 2 },
    IntrinsicSpec { symbol: "lt", arity: 2 },
    IntrinsicSpec { symbol: "le", arity: 2 },
    IntrinsicSpec { symbol: "and", arity: 2 },
    IntrinsicSpec { symbol: "or", arity: 2 },
    IntrinsicSpec { symbol: "not", arity: 1 },
    IntrinsicSpec { symbol: "concat", arity: 2 },
    IntrinsicSpec { symbol: "parse", arity: 1 },
    IntrinsicSpec { symbol: "sqrt", arity: 1 },
    IntrinsicSpec { symbol: "sin", arity: 1 },
    IntrinsicSpec { symbol: "cos", arity: 1 },
    IntrinsicSpec { symbol: "exp", arity: 1 },
    IntrinsicSpec { symbol: "ln", arity: 1 },
    IntrinsicSpec { symbol: "rand", arity: 0 },
];

pub fn resolve_symbol(symbol: &str) -> Option<IntrinsicFn> {
    Some(match symbol {
        "print" => IntrinsicFn::Unary(super::print),
        "range" => IntrinsicFn::Binary(super::range),
        "reseat" => IntrinsicFn::Binary(heap::reseat),
        "duplicate_binding" => IntrinsicFn::Unary(heap::duplicate_binding),
        "add" => IntrinsicFn::Binary(numbers::add),
        "sub" => IntrinsicFn::Binary(numbers::sub),
        "mul" => IntrinsicFn::Binary(numbers::mul),
        "div" => IntrinsicFn::Binary(numbers::div),
        "pow" => IntrinsicFn::Binary(numbers::pow),
        "rem" => IntrinsicFn::Binary(numbers::rem),
        "gt" => IntrinsicFn::Binary(numbers::gt),
        "ge" => IntrinsicFn::Binary(numbers::ge),
        "lt" => IntrinsicFn::Binary(numbers::lt),
        "le" => IntrinsicFn::Binary(numbers::le),
        "and" => IntrinsicFn::Binary(booleans::and),
        "or" => IntrinsicFn::Binary(booleans::or),
        "not" => IntrinsicFn::Unary(booleans::not),
        "concat" => IntrinsicFn::Binary(strings::concat),
        "parse" => IntrinsicFn::Unary(numbers::parse),
        "sqrt" => IntrinsicFn::Unary(numbers::sqrt),
        "sin" => IntrinsicFn::Unary(numbers::sin),
        "cos" => IntrinsicFn::Unary(numbers::cos),
        "exp" => IntrinsicFn::Unary(numbers::exp),
        "ln" => IntrinsicFn::Unary(numbers::ln),
        "rand" => IntrinsicFn::Nullary(numbers::rand),
        _ => return None,
    })
}
