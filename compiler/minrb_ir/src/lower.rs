//! Lowering from the parser's untyped tree to typed [`Node`]s.
//!
//! Validates the child count of every known tag up front, so a malformed
//! program is rejected before it prints anything. Unknown tags lower to
//! [`Node::Unknown`] and only fail when evaluated. Identifiers are interned
//! here.

use crate::ast::{BinaryOp, Literal, Node};
use crate::{Name, Sexp, StringInterner};

/// Failure to turn parser output into a [`Node`] tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LowerError {
    /// A known tag with the wrong shape of children.
    #[error("malformed `{tag}` node: {reason}")]
    MalformedNode { tag: String, reason: String },
}

fn malformed(tag: &str, reason: impl Into<String>) -> LowerError {
    LowerError::MalformedNode {
        tag: tag.to_owned(),
        reason: reason.into(),
    }
}

/// Lower a whole program.
pub fn lower(sexp: &Sexp, interner: &StringInterner) -> Result<Node, LowerError> {
    Lowerer { interner }.node(sexp)
}

struct Lowerer<'i> {
    interner: &'i StringInterner,
}

impl Lowerer<'_> {
    fn node(&self, sexp: &Sexp) -> Result<Node, LowerError> {
        let Sexp::List(items) = sexp else {
            return Err(malformed(
                "<node>",
                format!("expected a node list, found {}", sexp.kind_name()),
            ));
        };
        let Some((head, children)) = items.split_first() else {
            return Err(malformed("<node>", "empty node list"));
        };
        let Sexp::Str(tag) = head else {
            return Err(malformed(
                "<node>",
                format!("node tag must be a string, found {}", head.kind_name()),
            ));
        };
        let tag = tag.as_str();

        if let Some(op) = BinaryOp::from_tag(tag) {
            let [left, right] = exactly::<2>(tag, children)?;
            return Ok(Node::binary(op, self.node(left)?, self.node(right)?));
        }

        match tag {
            "lit" => {
                let [value] = exactly::<1>(tag, children)?;
                Ok(Node::Lit(literal(value)?))
            }
            "stmts" => Ok(Node::Stmts(self.nodes(children)?)),
            "var_ref" => {
                let [name] = exactly::<1>(tag, children)?;
                Ok(Node::VarRef(self.ident(tag, name)?))
            }
            "var_assign" => {
                let [name, value] = exactly::<2>(tag, children)?;
                Ok(Node::VarAssign {
                    name: self.ident(tag, name)?,
                    value: self.boxed(value)?,
                })
            }
            "if" => match children {
                [cond, then_branch] => Ok(Node::If {
                    cond: self.boxed(cond)?,
                    then_branch: self.boxed(then_branch)?,
                    else_branch: None,
                }),
                [cond, then_branch, else_branch] => Ok(Node::If {
                    cond: self.boxed(cond)?,
                    then_branch: self.boxed(then_branch)?,
                    else_branch: Some(self.boxed(else_branch)?),
                }),
                _ => Err(arity(tag, "2 or 3", children.len())),
            },
            "while" => {
                let [cond, body] = exactly::<2>(tag, children)?;
                Ok(Node::While {
                    cond: self.boxed(cond)?,
                    body: self.boxed(body)?,
                })
            }
            "func_call" => {
                let Some((name, args)) = children.split_first() else {
                    return Err(arity(tag, "at least 1", 0));
                };
                Ok(Node::FuncCall {
                    name: self.ident(tag, name)?,
                    args: self.nodes(args)?,
                })
            }
            "func_def" => {
                let [name, params, body] = exactly::<3>(tag, children)?;
                let Sexp::List(params) = params else {
                    return Err(malformed(
                        tag,
                        format!("parameters must be a list, found {}", params.kind_name()),
                    ));
                };
                Ok(Node::FuncDef {
                    name: self.ident(tag, name)?,
                    params: params
                        .iter()
                        .map(|param| self.ident(tag, param))
                        .collect::<Result<_, _>>()?,
                    body: self.boxed(body)?,
                })
            }
            "ary_new" => Ok(Node::AryNew(self.nodes(children)?)),
            "ary_ref" => {
                let [collection, index] = exactly::<2>(tag, children)?;
                Ok(Node::AryRef {
                    collection: self.boxed(collection)?,
                    index: self.boxed(index)?,
                })
            }
            "ary_assign" => {
                let [collection, index, value] = exactly::<3>(tag, children)?;
                Ok(Node::AryAssign {
                    collection: self.boxed(collection)?,
                    index: self.boxed(index)?,
                    value: self.boxed(value)?,
                })
            }
            "hash_new" => {
                if children.len() % 2 != 0 {
                    return Err(malformed(
                        tag,
                        format!("expected key/value pairs, found {} children", children.len()),
                    ));
                }
                let pairs = children
                    .chunks_exact(2)
                    .map(|pair| Ok((self.node(&pair[0])?, self.node(&pair[1])?)))
                    .collect::<Result<_, LowerError>>()?;
                Ok(Node::HashNew(pairs))
            }
            _ => Ok(Node::Unknown {
                tag: tag.to_owned(),
            }),
        }
    }

    fn boxed(&self, sexp: &Sexp) -> Result<Box<Node>, LowerError> {
        self.node(sexp).map(Box::new)
    }

    fn nodes(&self, sexps: &[Sexp]) -> Result<Vec<Node>, LowerError> {
        sexps.iter().map(|sexp| self.node(sexp)).collect()
    }

    fn ident(&self, tag: &str, sexp: &Sexp) -> Result<Name, LowerError> {
        match sexp {
            Sexp::Str(name) => Ok(self.interner.intern(name)),
            other => Err(malformed(
                tag,
                format!("identifier must be a string, found {}", other.kind_name()),
            )),
        }
    }
}

fn literal(sexp: &Sexp) -> Result<Literal, LowerError> {
    match sexp {
        Sexp::Nil => Ok(Literal::Nil),
        Sexp::Bool(b) => Ok(Literal::Bool(*b)),
        Sexp::Int(n) => Ok(Literal::Int(*n)),
        Sexp::Float(f) => Ok(Literal::Float(*f)),
        Sexp::Str(s) => Ok(Literal::Str(s.clone())),
        Sexp::List(_) => Err(malformed("lit", "literal must be a scalar, found list")),
    }
}

fn exactly<'s, const N: usize>(
    tag: &str,
    children: &'s [Sexp],
) -> Result<&'s [Sexp; N], LowerError> {
    <&[Sexp; N]>::try_from(children).map_err(|_| arity(tag, &N.to_string(), children.len()))
}

fn arity(tag: &str, expected: &str, found: usize) -> LowerError {
    malformed(tag, format!("expected {expected} children, found {found}"))
}
