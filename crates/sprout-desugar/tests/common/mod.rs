//! Minimal reference evaluator for desugared programs.
//!
//! Covers only what the tests need: literals, closures, `if`, `let`, and the
//! primitives `car`, `cdr`, `cons`, `eq?` plus a little arithmetic.

use rhizome_sprout_ir::{Expression, Program, SExpValue, TopLevel};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Data(SExpValue),
    Closure {
        params: Vec<String>,
        body: Vec<Expression>,
        env: HashMap<String, Value>,
    },
    Prim(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    Unbound(String),
    /// `car` or `cdr` applied to the empty list.
    EmptyAccess(&'static str),
    NotAPair(&'static str),
    NotCallable,
    Arity { expected: usize, got: usize },
    Unsupported(String),
}

#[derive(Default)]
pub struct Evaluator {
    globals: HashMap<String, Value>,
}

impl Evaluator {
    /// Evaluate each form in order and return the value of the last bare expression.
    pub fn run(&mut self, program: &Program) -> Result<Option<Value>, EvalError> {
        let mut last = None;
        for form in &program.forms {
            match form {
                TopLevel::Define { name, value } => {
                    let value = self.eval(value, &HashMap::new())?;
                    self.globals.insert(name.clone(), value);
                }
                TopLevel::Expr(expr) => last = Some(self.eval(expr, &HashMap::new())?),
            }
        }
        Ok(last)
    }

    pub fn eval(
        &self,
        expr: &Expression,
        env: &HashMap<String, Value>,
    ) -> Result<Value, EvalError> {
        match expr {
            Expression::Number(n) => Ok(Value::Data(SExpValue::Number(*n))),
            Expression::Bool(b) => Ok(Value::Data(SExpValue::Bool(*b))),
            Expression::Str(s) => Ok(Value::Data(SExpValue::Str(s.clone()))),
            Expression::Literal(value) => Ok(Value::Data(value.clone())),
            Expression::PrimOp(op) => Ok(Value::Prim(op.clone())),
            Expression::Var(name) => env
                .get(name)
                .or_else(|| self.globals.get(name))
                .cloned()
                .ok_or_else(|| EvalError::Unbound(name.clone())),
            Expression::If { test, then, alt } => {
                match self.eval(test, env)? {
                    Value::Data(SExpValue::Bool(false)) => self.eval(alt, env),
                    _ => self.eval(then, env),
                }
            }
            Expression::Proc { params, body } => Ok(Value::Closure {
                params: params.clone(),
                body: body.clone(),
                env: env.clone(),
            }),
            Expression::App { rator, rands } => {
                let f = self.eval(rator, env)?;
                let args = rands
                    .iter()
                    .map(|r| self.eval(r, env))
                    .collect::<Result<Vec<_>, _>>()?;
                self.apply(f, args)
            }
            Expression::Let { bindings, body } => {
                let mut inner = env.clone();
                for b in bindings {
                    inner.insert(b.name.clone(), self.eval(&b.value, env)?);
                }
                self.eval_body(body, &inner)
            }
            Expression::Dict { .. } => Err(EvalError::Unsupported(expr.to_string())),
        }
    }

    fn eval_body(
        &self,
        body: &[Expression],
        env: &HashMap<String, Value>,
    ) -> Result<Value, EvalError> {
        let mut result = Value::Data(SExpValue::Empty);
        for expr in body {
            result = self.eval(expr, env)?;
        }
        Ok(result)
    }

    fn apply(&self, f: Value, args: Vec<Value>) -> Result<Value, EvalError> {
        match f {
            Value::Closure { params, body, env } => {
                if params.len() != args.len() {
                    return Err(EvalError::Arity {
                        expected: params.len(),
                        got: args.len(),
                    });
                }
                let mut inner = env;
                inner.extend(params.into_iter().zip(args));
                self.eval_body(&body, &inner)
            }
            Value::Prim(op) => apply_prim(&op, args),
            Value::Data(_) => Err(EvalError::NotCallable),
        }
    }
}

fn data(args: &[Value], idx: usize) -> Result<&SExpValue, EvalError> {
    match args.get(idx) {
        Some(Value::Data(value)) => Ok(value),
        Some(_) => Err(EvalError::Unsupported("procedure as data".into())),
        None => Err(EvalError::Arity {
            expected: idx + 1,
            got: args.len(),
        }),
    }
}

fn number(args: &[Value], idx: usize) -> Result<f64, EvalError> {
    match data(args, idx)? {
        SExpValue::Number(n) => Ok(*n),
        other => Err(EvalError::Unsupported(format!("not a number: {}", other))),
    }
}

fn apply_prim(op: &str, args: Vec<Value>) -> Result<Value, EvalError> {
    let result = match op {
        "car" => match data(&args, 0)? {
            SExpValue::Pair(head, _) => head.as_ref().clone(),
            SExpValue::Empty => return Err(EvalError::EmptyAccess("car")),
            _ => return Err(EvalError::NotAPair("car")),
        },
        "cdr" => match data(&args, 0)? {
            SExpValue::Pair(_, tail) => tail.as_ref().clone(),
            SExpValue::Empty => return Err(EvalError::EmptyAccess("cdr")),
            _ => return Err(EvalError::NotAPair("cdr")),
        },
        "cons" => SExpValue::pair(data(&args, 0)?.clone(), data(&args, 1)?.clone()),
        "eq?" => {
            let left = data(&args, 0)?;
            let right = data(&args, 1)?;
            let same = (left.is_atom() || left.is_empty()) && left == right;
            SExpValue::Bool(same)
        }
        "+" => SExpValue::Number(number(&args, 0)? + number(&args, 1)?),
        "-" => SExpValue::Number(number(&args, 0)? - number(&args, 1)?),
        ">" => SExpValue::Bool(number(&args, 0)? > number(&args, 1)?),
        "<" => SExpValue::Bool(number(&args, 0)? < number(&args, 1)?),
        _ => return Err(EvalError::Unsupported(op.to_string())),
    };
    Ok(Value::Data(result))
}
