//! Z3 Term Backend
//!
//! Sort-tracking layer over the `z3` crate:
//! - **Context**: one shared `z3::Context` per engine run
//! - **Term**: `Dynamic` AST + [`TermSort`] + side-conditions
//! - **Builders**: sort-checked constructors for Bool, Int, Real, String and Array terms
//!
//! Builders return `None` instead of handing an ill-sorted term to Z3.
//! Sequence length, `seq.at` and `str.to_int` have no typed builder in the
//! crate and go through `z3-sys`, re-wrapped with `Dynamic::wrap`.
//!
//! ## Example
//!
//! ```rust,ignore
//! let ctx = Z3Context::new();
//! let x = ctx.constant("x", &TermSort::Real).unwrap();
//! let five = ctx.real_from_integer(5).unwrap();
//! let x_eq_5 = ctx.eq(&x, &five).unwrap();
//! println!("{}", x_eq_5); // (= x 5.0)
//! ```

use crate::features::smt::domain::TermSort;
use std::ffi::CStr;
use std::fmt;
use std::os::raw::c_uint;
use std::rc::Rc;
use z3::ast::{Array, Ast, Bool, Dynamic, Int, Real, String as Z3String};
use z3::{Config, Context, Sort};
use z3_sys::*;

/// Significant digits rendered past the denominator's width when a fraction
/// does not fit `i64 / i64`
const RATIONAL_GUARD_DIGITS: usize = 20;

/// Largest integer every `f64` represents exactly
const F64_EXACT_INT: i64 = 1 << 53;

// ═══════════════════════════════════════════════════════════════════════════
// Context
// ═══════════════════════════════════════════════════════════════════════════

/// Shared Z3 context
///
/// Cloning is cheap; the native context is deleted when the last clone and
/// the last term, solver or model built from it are dropped.
#[derive(Clone)]
pub struct Z3Context {
    inner: Rc<Context>,
}

impl Z3Context {
    /// Create a context with the native error handler disabled, so misuse
    /// surfaces as null handles instead of aborting the process.
    pub fn new() -> Self {
        let cfg = Config::new();
        let ctx = Context::new(&cfg);
        unsafe { Z3_set_error_handler(ctx.get_z3_context(), None) };
        Self {
            inner: Rc::new(ctx),
        }
    }

    /// Context reference for building ASTs stored next to a clone of `self`.
    pub(crate) fn z3(&self) -> &'static Context {
        // SAFETY: the context sits behind an `Rc`; every term, solver and model
        // holding a `'static` AST also holds a clone and drops the AST first.
        unsafe { &*Rc::as_ptr(&self.inner) }
    }

    fn term(&self, ast: impl Ast<'static>, sort: TermSort, checks: Checks) -> Term {
        Term {
            ast: Dynamic::from_ast(&ast),
            ctx: self.clone(),
            sort,
            checks,
        }
    }

    /// Adopt a raw AST returned by `z3-sys`, or report null.
    fn adopt(&self, raw: Z3_ast, sort: TermSort, checks: Checks) -> Option<Term> {
        if raw.is_null() {
            tracing::debug!(sort = %sort, "z3 returned a null term");
            return None;
        }
        let ast = unsafe { Dynamic::wrap(self.z3(), raw) };
        Some(self.term(ast, sort, checks))
    }

    fn native_sort(&self, sort: &TermSort) -> Sort<'static> {
        let ctx = self.z3();
        match sort {
            TermSort::Bool => Sort::bool(ctx),
            TermSort::Int => Sort::int(ctx),
            TermSort::Real => Sort::real(ctx),
            TermSort::String => Sort::string(ctx),
            TermSort::Array(elem) => Sort::array(ctx, &Sort::int(ctx), &self.native_sort(elem)),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Constants & Literals
    // ═══════════════════════════════════════════════════════════════════════

    /// Uninterpreted constant `name` of the given sort
    pub fn constant(&self, name: &str, sort: &TermSort) -> Option<Term> {
        if name.contains('\0') {
            return None;
        }
        let ctx = self.z3();
        let ast = match sort {
            TermSort::Bool => Dynamic::from_ast(&Bool::new_const(ctx, name)),
            TermSort::Int => Dynamic::from_ast(&Int::new_const(ctx, name)),
            TermSort::Real => Dynamic::from_ast(&Real::new_const(ctx, name)),
            TermSort::String => Dynamic::from_ast(&Z3String::new_const(ctx, name)),
            TermSort::Array(elem) => {
                let range = self.native_sort(elem);
                Dynamic::from_ast(&Array::new_const(ctx, name, &Sort::int(ctx), &range))
            }
        };
        Some(self.term(ast, sort.clone(), Checks::default()))
    }

    pub fn bool_val(&self, value: bool) -> Option<Term> {
        let ast = Bool::from_bool(self.z3(), value);
        Some(self.term(ast, TermSort::Bool, Checks::default()))
    }

    pub fn int_val(&self, value: i64) -> Option<Term> {
        let ast = Int::from_i64(self.z3(), value);
        Some(self.term(ast, TermSort::Int, Checks::default()))
    }

    /// Exact rational `value/1`
    pub fn real_from_integer(&self, value: i64) -> Option<Term> {
        match i32::try_from(value) {
            Ok(small) => {
                let ast = Real::from_real(self.z3(), small, 1);
                Some(self.term(ast, TermSort::Real, Checks::default()))
            }
            Err(_) => self.real_from_decimal(&value.to_string()),
        }
    }

    /// Exact real numeral from decimal notation (`"0.25"`, `"-3"`)
    pub fn real_from_decimal(&self, literal: &str) -> Option<Term> {
        let (num, den) = decimal_fraction(literal)?;
        let ast = Real::from_real_str(self.z3(), &num, &den)?;
        Some(self.term(ast, TermSort::Real, Checks::default()))
    }

    /// Sequence literal
    pub fn string_val(&self, value: &str) -> Option<Term> {
        let ast = Z3String::from_str(self.z3(), &encode_string_literal(value)).ok()?;
        Some(self.term(ast, TermSort::String, Checks::default()))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Boolean Structure
    // ═══════════════════════════════════════════════════════════════════════

    /// Equality; numeric operands are unified to Real when their sorts differ.
    pub fn eq(&self, lhs: &Term, rhs: &Term) -> Option<Term> {
        let (lhs, rhs) = if lhs.sort.is_numeric() && rhs.sort.is_numeric() {
            self.unify_numeric(lhs, rhs)?
        } else if lhs.sort == rhs.sort {
            (lhs.clone(), rhs.clone())
        } else {
            return None;
        };
        let ast = lhs.ast._eq(&rhs.ast);
        Some(self.term(ast, TermSort::Bool, Checks::merged(&[&lhs, &rhs])))
    }

    /// Negation; swaps the operand's side-conditions
    pub fn not(&self, term: &Term) -> Option<Term> {
        let ast = term.boolean()?.not();
        Some(self.term(ast, TermSort::Bool, term.checks.swapped()))
    }

    pub fn and(&self, terms: &[&Term]) -> Option<Term> {
        let operands = booleans(terms)?;
        let refs: Vec<&Bool<'static>> = operands.iter().collect();
        let ast = Bool::and(self.z3(), refs.as_slice());
        Some(self.term(ast, TermSort::Bool, Checks::merged(terms)))
    }

    pub fn or(&self, terms: &[&Term]) -> Option<Term> {
        let operands = booleans(terms)?;
        let refs: Vec<&Bool<'static>> = operands.iter().collect();
        let ast = Bool::or(self.z3(), refs.as_slice());
        Some(self.term(ast, TermSort::Bool, Checks::merged(terms)))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Arithmetic (LRA/LIA, mixed operands promoted to Real)
    // ═══════════════════════════════════════════════════════════════════════

    pub fn lt(&self, lhs: &Term, rhs: &Term) -> Option<Term> {
        self.compare(lhs, rhs, Int::lt, Real::lt)
    }

    pub fn le(&self, lhs: &Term, rhs: &Term) -> Option<Term> {
        self.compare(lhs, rhs, Int::le, Real::le)
    }

    pub fn gt(&self, lhs: &Term, rhs: &Term) -> Option<Term> {
        self.compare(lhs, rhs, Int::gt, Real::gt)
    }

    pub fn ge(&self, lhs: &Term, rhs: &Term) -> Option<Term> {
        self.compare(lhs, rhs, Int::ge, Real::ge)
    }

    fn compare(
        &self,
        lhs: &Term,
        rhs: &Term,
        on_int: fn(&Int<'static>, &Int<'static>) -> Bool<'static>,
        on_real: fn(&Real<'static>, &Real<'static>) -> Bool<'static>,
    ) -> Option<Term> {
        let (lhs, rhs) = self.unify_numeric(lhs, rhs)?;
        let ast = match lhs.sort {
            TermSort::Int => on_int(&lhs.ast.as_int()?, &rhs.ast.as_int()?),
            _ => on_real(&lhs.ast.as_real()?, &rhs.ast.as_real()?),
        };
        Some(self.term(ast, TermSort::Bool, Checks::merged(&[&lhs, &rhs])))
    }

    pub fn add(&self, lhs: &Term, rhs: &Term) -> Option<Term> {
        self.arith(ArithOp::Add, lhs, rhs)
    }

    pub fn sub(&self, lhs: &Term, rhs: &Term) -> Option<Term> {
        self.arith(ArithOp::Sub, lhs, rhs)
    }

    pub fn mul(&self, lhs: &Term, rhs: &Term) -> Option<Term> {
        self.arith(ArithOp::Mul, lhs, rhs)
    }

    fn arith(&self, op: ArithOp, lhs: &Term, rhs: &Term) -> Option<Term> {
        let (lhs, rhs) = self.unify_numeric(lhs, rhs)?;
        let checks = Checks::merged(&[&lhs, &rhs]);
        let ctx = self.z3();
        if lhs.sort == TermSort::Int {
            let operands = [lhs.ast.as_int()?, rhs.ast.as_int()?];
            let refs = [&operands[0], &operands[1]];
            let ast = match op {
                ArithOp::Add => Int::add(ctx, &refs),
                ArithOp::Sub => Int::sub(ctx, &refs),
                ArithOp::Mul => Int::mul(ctx, &refs),
            };
            return Some(self.term(ast, TermSort::Int, checks));
        }
        let operands = [lhs.ast.as_real()?, rhs.ast.as_real()?];
        let refs = [&operands[0], &operands[1]];
        let ast = match op {
            ArithOp::Add => Real::add(ctx, &refs),
            ArithOp::Sub => Real::sub(ctx, &refs),
            ArithOp::Mul => Real::mul(ctx, &refs),
        };
        Some(self.term(ast, TermSort::Real, checks))
    }

    /// Real division (both operands promoted to Real)
    pub fn div(&self, lhs: &Term, rhs: &Term) -> Option<Term> {
        let lhs = self.int_to_real(lhs)?;
        let rhs = self.int_to_real(rhs)?;
        let ast = lhs.ast.as_real()?.div(&rhs.ast.as_real()?);
        Some(self.term(ast, TermSort::Real, Checks::merged(&[&lhs, &rhs])))
    }

    /// Integer modulus; Real operands are floored to Int first and the
    /// result is promoted back to Real.
    pub fn modulo(&self, lhs: &Term, rhs: &Term) -> Option<Term> {
        let promote = lhs.sort == TermSort::Real || rhs.sort == TermSort::Real;
        let lhs_int = self.real_to_int(lhs)?;
        let rhs_int = self.real_to_int(rhs)?;
        let ast = lhs_int.ast.as_int()?.modulo(&rhs_int.ast.as_int()?);
        let result = self.term(ast, TermSort::Int, Checks::merged(&[&lhs_int, &rhs_int]));
        if promote {
            self.int_to_real(&result)
        } else {
            Some(result)
        }
    }

    pub fn neg(&self, term: &Term) -> Option<Term> {
        let ast = match term.sort {
            TermSort::Int => Dynamic::from_ast(&term.ast.as_int()?.unary_minus()),
            TermSort::Real => Dynamic::from_ast(&term.ast.as_real()?.unary_minus()),
            _ => return None,
        };
        Some(self.term(ast, term.sort.clone(), term.checks.clone()))
    }

    /// Real → Int (floor); Int passes through
    pub fn real_to_int(&self, term: &Term) -> Option<Term> {
        match term.sort {
            TermSort::Int => Some(term.clone()),
            TermSort::Real => {
                let ast = term.ast.as_real()?.to_int();
                Some(self.term(ast, TermSort::Int, term.checks.clone()))
            }
            _ => None,
        }
    }

    /// Int → Real; Real passes through
    pub fn int_to_real(&self, term: &Term) -> Option<Term> {
        match term.sort {
            TermSort::Real => Some(term.clone()),
            TermSort::Int => {
                let ast = term.ast.as_int()?.to_real();
                Some(self.term(ast, TermSort::Real, term.checks.clone()))
            }
            _ => None,
        }
    }

    fn unify_numeric(&self, lhs: &Term, rhs: &Term) -> Option<(Term, Term)> {
        match lhs.sort.unify_numeric(&rhs.sort)? {
            TermSort::Int => Some((lhs.clone(), rhs.clone())),
            _ => Some((self.int_to_real(lhs)?, self.int_to_real(rhs)?)),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Sequences
    // ═══════════════════════════════════════════════════════════════════════

    pub fn concat(&self, lhs: &Term, rhs: &Term) -> Option<Term> {
        let (a, b) = (lhs.ast.as_string()?, rhs.ast.as_string()?);
        let ast = Z3String::concat(self.z3(), &[&a, &b]);
        Some(self.term(ast, TermSort::String, Checks::merged(&[lhs, rhs])))
    }

    /// Sequence length (Int)
    pub fn seq_length(&self, seq: &Term) -> Option<Term> {
        if seq.sort != TermSort::String {
            return None;
        }
        let raw = unsafe { Z3_mk_seq_length(seq.raw_ctx(), seq.raw()) };
        self.adopt(raw, TermSort::Int, seq.checks.clone())
    }

    /// Unit sequence at `index`; empty when out of range
    pub fn seq_at(&self, seq: &Term, index: &Term) -> Option<Term> {
        if seq.sort != TermSort::String {
            return None;
        }
        let index = self.real_to_int(index)?;
        let raw = unsafe { Z3_mk_seq_at(seq.raw_ctx(), seq.raw(), index.raw()) };
        self.adopt(raw, TermSort::String, Checks::merged(&[seq, &index]))
    }

    /// Decimal integer parse of a sequence (Int, -1 when not all digits)
    pub fn str_to_int(&self, seq: &Term) -> Option<Term> {
        if seq.sort != TermSort::String {
            return None;
        }
        let raw = unsafe { Z3_mk_str_to_int(seq.raw_ctx(), seq.raw()) };
        self.adopt(raw, TermSort::Int, seq.checks.clone())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Arrays
    // ═══════════════════════════════════════════════════════════════════════

    pub fn select(&self, array: &Term, index: &Term) -> Option<Term> {
        let elem = array.sort.element()?.clone();
        let index = self.real_to_int(index)?;
        let ast = array.ast.as_array()?.select(&index.ast);
        Some(self.term(ast, elem, Checks::merged(&[array, &index])))
    }

    /// Functional update `array[index := value]`
    pub fn store(&self, array: &Term, index: &Term, value: &Term) -> Option<Term> {
        let elem = array.sort.element()?;
        let value = match (elem, &value.sort) {
            (TermSort::Real, TermSort::Int) => self.int_to_real(value)?,
            (expected, actual) if expected == actual => value.clone(),
            _ => return None,
        };
        let index = self.real_to_int(index)?;
        let ast = array.ast.as_array()?.store(&index.ast, &value.ast);
        let checks = Checks::merged(&[array, &index, &value]);
        Some(self.term(ast, array.sort.clone(), checks))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Utilities
    // ═══════════════════════════════════════════════════════════════════════

    pub fn simplify(&self, term: &Term) -> Option<Term> {
        let ast = term.ast.simplify();
        Some(self.term(ast, term.sort.clone(), term.checks.clone()))
    }
}

impl Default for Z3Context {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Z3Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Z3Context").finish_non_exhaustive()
    }
}

#[derive(Clone, Copy)]
enum ArithOp {
    Add,
    Sub,
    Mul,
}

fn booleans(terms: &[&Term]) -> Option<Vec<Bool<'static>>> {
    terms.iter().map(|term| term.boolean()).collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// Terms
// ═══════════════════════════════════════════════════════════════════════════

/// Side-conditions carried by a term
///
/// `when_true` must hold alongside the term when it is asserted,
/// `when_false` alongside its negation.
#[derive(Clone, Default)]
pub struct Checks {
    pub when_true: Vec<Term>,
    pub when_false: Vec<Term>,
}

impl Checks {
    fn merged(terms: &[&Term]) -> Self {
        let mut checks = Checks::default();
        for term in terms {
            checks.when_true.extend(term.checks.when_true.iter().cloned());
            checks.when_false.extend(term.checks.when_false.iter().cloned());
        }
        checks
    }

    fn swapped(&self) -> Self {
        Self {
            when_true: self.when_false.clone(),
            when_false: self.when_true.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.when_true.is_empty() && self.when_false.is_empty()
    }
}

impl fmt::Debug for Checks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checks")
            .field("when_true", &self.when_true.len())
            .field("when_false", &self.when_false.len())
            .finish()
    }
}

/// Solver-owned formula handle
#[derive(Clone)]
pub struct Term {
    // Declared before `ctx`: the AST is released while the context is alive
    ast: Dynamic<'static>,
    ctx: Z3Context,
    sort: TermSort,
    checks: Checks,
}

impl Term {
    pub fn sort(&self) -> &TermSort {
        &self.sort
    }

    pub fn checks(&self) -> &Checks {
        &self.checks
    }

    /// Same term with extra side-conditions attached
    pub fn with_checks(mut self, when_true: Vec<Term>, when_false: Vec<Term>) -> Self {
        self.checks.when_true.extend(when_true);
        self.checks.when_false.extend(when_false);
        self
    }

    pub(crate) fn ast(&self) -> &Dynamic<'static> {
        &self.ast
    }

    /// Bool view, `None` for other sorts
    pub(crate) fn boolean(&self) -> Option<Bool<'static>> {
        match self.sort {
            TermSort::Bool => self.ast.as_bool(),
            _ => None,
        }
    }

    /// Rebuild a term of the same sort around `ast` (model values)
    pub(crate) fn rewrap(&self, ast: Dynamic<'static>) -> Term {
        self.ctx.term(ast, self.sort.clone(), Checks::default())
    }

    fn raw(&self) -> Z3_ast {
        self.ast.get_z3_ast()
    }

    fn raw_ctx(&self) -> Z3_context {
        self.ctx.z3().get_z3_context()
    }

    /// Value of a Bool literal
    pub fn as_bool(&self) -> Option<bool> {
        self.boolean()?.as_bool()
    }

    /// Value of a numeral as a float, correctly rounded for fractions whose
    /// numerator and denominator fit in 53 bits and for every fraction built
    /// from a finite decimal
    pub fn as_f64(&self) -> Option<f64> {
        if !self.is_numeral() {
            return None;
        }
        if self.sort == TermSort::Real {
            let small = self.ast.as_real().and_then(|real| real.as_real());
            if let Some((num, den)) = small {
                if num.abs() <= F64_EXACT_INT && den <= F64_EXACT_INT {
                    return Some(num as f64 / den as f64);
                }
            }
        }
        let numeral = self.numeral_string()?;
        let Some((_, den)) = numeral.split_once('/') else {
            return numeral.trim().parse().ok();
        };
        // Enough places for every leading zero plus the guard digits; a
        // terminating expansion is rendered exactly
        let places = c_uint::try_from(den.trim().len() + RATIONAL_GUARD_DIGITS).ok()?;
        self.decimal_string(places)?.trim_end_matches('?').parse().ok()
    }

    /// Value of an integral numeral
    pub fn as_i64(&self) -> Option<i64> {
        match self.sort {
            TermSort::Int => self.ast.as_int()?.as_i64(),
            TermSort::Real if self.is_numeral() => match self.ast.as_real()?.as_real()? {
                (num, 1) => Some(num),
                _ => None,
            },
            _ => None,
        }
    }

    /// Value of a sequence literal
    pub fn as_string(&self) -> Option<String> {
        if self.sort != TermSort::String {
            return None;
        }
        unsafe {
            if !Z3_is_string(self.raw_ctx(), self.raw()) {
                return None;
            }
            let raw = Z3_get_string(self.raw_ctx(), self.raw());
            if raw.is_null() {
                return None;
            }
            let encoded = CStr::from_ptr(raw).to_string_lossy().into_owned();
            Some(decode_string_literal(&encoded))
        }
    }

    fn is_numeral(&self) -> bool {
        self.sort.is_numeric() && unsafe { Z3_is_numeral_ast(self.raw_ctx(), self.raw()) }
    }

    /// Exact `"n"` or `"n/d"` rendering
    fn numeral_string(&self) -> Option<String> {
        let raw = unsafe { Z3_get_numeral_string(self.raw_ctx(), self.raw()) };
        if raw.is_null() {
            return None;
        }
        Some(unsafe { CStr::from_ptr(raw) }.to_string_lossy().into_owned())
    }

    /// Decimal rendering with `places` digits after the point, `?`-suffixed
    /// when truncated
    fn decimal_string(&self, places: c_uint) -> Option<String> {
        let raw = unsafe { Z3_get_numeral_decimal_string(self.raw_ctx(), self.raw(), places) };
        if raw.is_null() {
            return None;
        }
        Some(unsafe { CStr::from_ptr(raw) }.to_string_lossy().into_owned())
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ast)
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Term")
            .field("sort", &self.sort)
            .field("ast", &self.to_string())
            .field("checks", &self.checks)
            .finish()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Literal Encoding
// ═══════════════════════════════════════════════════════════════════════════

/// Escape a string into Z3's literal syntax: printable ASCII passes through,
/// everything else (and `\`) becomes `\u{hex}`.
pub fn encode_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if (' '..='~').contains(&ch) && ch != '\\' {
            out.push(ch);
        } else {
            out.push_str(&format!("\\u{{{:x}}}", ch as u32));
        }
    }
    out
}

/// Inverse of [`encode_string_literal`]; unknown escapes are kept verbatim.
pub fn decode_string_literal(encoded: &str) -> String {
    let mut out = String::with_capacity(encoded.len());
    let mut rest = encoded;
    while let Some(pos) = rest.find("\\u{") {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 3..];
        let decoded = after.find('}').and_then(|end| {
            let ch = u32::from_str_radix(&after[..end], 16)
                .ok()
                .and_then(char::from_u32)?;
            Some((ch, end))
        });
        match decoded {
            Some((ch, end)) => {
                out.push(ch);
                rest = &after[end + 1..];
            }
            None => {
                out.push_str("\\u{");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Split a plain decimal literal (`"-12.5"`) into an exact numerator and
/// power-of-ten denominator; exponents, `NaN` and infinities are rejected.
pub fn decimal_fraction(literal: &str) -> Option<(String, String)> {
    let (sign, digits) = match literal.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", literal),
    };
    let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if !whole.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }
    let joined = format!("{}{}", whole, frac);
    let significant = joined.trim_start_matches('0');
    let numerator = if significant.is_empty() {
        "0".to_string()
    } else {
        format!("{}{}", sign, significant)
    };
    Some((numerator, format!("1{}", "0".repeat(frac.len()))))
}
