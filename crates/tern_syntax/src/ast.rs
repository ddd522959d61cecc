use std::{fmt, mem};

use crate::{Node, NodeCopy};

#[derive(Node!, Default)]
pub struct Root {
    pub items: Vec<Item>,
}

impl Root {
    pub fn imports(&self) -> impl Iterator<Item = &Import> {
        self.items.iter().filter_map(|item| match item {
            Item::Import(import) => Some(import),
            _ => None,
        })
    }

    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.items.iter().filter_map(|item| match item {
            Item::Function(function) => Some(function),
            _ => None,
        })
    }

    /// Whether an error marker appears anywhere in the tree.
    pub fn contains_error(&self) -> bool {
        self.items.iter().any(|item| match item {
            Item::Import(_) => false,
            Item::Function(function) => function.body.contains_error(),
            Item::Error => true,
        })
    }
}

#[derive(Node!)]
pub enum Item {
    Import(Import),
    Function(Function),

    Error,
}

/// `import namespace::name;`
#[derive(Node!)]
pub struct Import {
    pub namespace: String,
    pub name: String,
}

#[derive(Node!)]
pub struct Function {
    pub name: String,
    pub return_type: String,
    pub args: Vec<Arg>,
    pub body: Body,
}

#[derive(Node!)]
pub struct Arg {
    pub name: String,
    pub ty: String,
}

#[derive(Node!, Default)]
pub struct Body {
    pub stmts: Vec<Stmt>,
}

impl Body {
    pub fn contains_error(&self) -> bool {
        self.stmts.iter().any(Stmt::contains_error)
    }
}

#[derive(Node!)]
pub enum Stmt {
    VariableDeclaration {
        name: String,
        ty: String,
        initializer: Option<Expr>,
    },
    FunctionCall(FunctionCall),
    /// Opaque foreign invocation; `content` is the raw string literal text.
    Call {
        content: String,
    },
    Return(Expr),

    Error,
}

impl Stmt {
    pub fn contains_error(&self) -> bool {
        match self {
            Stmt::VariableDeclaration { initializer, .. } => {
                initializer.as_ref().is_some_and(Expr::contains_error)
            }
            Stmt::FunctionCall(call) => call.args.iter().any(Expr::contains_error),
            Stmt::Call { .. } => false,
            Stmt::Return(expr) => expr.contains_error(),
            Stmt::Error => true,
        }
    }
}

#[derive(Node!)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Expr>,
}

#[derive(Node!)]
pub enum Expr {
    BinaryOperation {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },

    Int(i32),
    Float(f32),
    String(String),
    Char(char),
    Bool(bool),

    Error,
}

impl Expr {
    pub fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::BinaryOperation {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn contains_error(&self) -> bool {
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            match expr {
                Expr::BinaryOperation { lhs, rhs, .. } => stack.extend([&**lhs, &**rhs]),
                Expr::Error => return true,
                _ => {}
            }
        }
        false
    }
}

/// Operator chains nest as deep as they are long, so children are detached
/// onto a worklist instead of dropped recursively.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut stack = vec![];
        if let Expr::BinaryOperation { lhs, rhs, .. } = self {
            stack.push(mem::replace(&mut **lhs, Expr::Error));
            stack.push(mem::replace(&mut **rhs, Expr::Error));
        }

        while let Some(mut expr) = stack.pop() {
            if let Expr::BinaryOperation { lhs, rhs, .. } = &mut expr {
                stack.push(mem::replace(&mut **lhs, Expr::Error));
                stack.push(mem::replace(&mut **rhs, Expr::Error));
            }
        }
    }
}

#[derive(NodeCopy!)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
