use std::collections::HashMap;

use crate::interpreter::function::{
    builtin,
    modifier::{self, Requests},
};

/// Signature of a unary function: one operand in, one value out.
pub type UnaryFn = fn(f64) -> f64;

/// Signature of a modifier function, called only for its effect.
pub type ModifierFn = fn(&mut Requests);

/// Declares a static table of builtin functions.
///
/// Each entry maps a name to a function pointer of the table's type.
macro_rules! builtin_table {
    (
        $table:ident: $ty:ty {
            $( $name:literal => $func:expr ),* $(,)?
        }
    ) => {
        static $table: &[(&str, $ty)] = &[
            $( ($name, $func as $ty), )*
        ];
    };
}

builtin_table! {
    UNARY_TABLE: UnaryFn {
        "sin"     => f64::sin,
        "cos"     => f64::cos,
        "tan"     => f64::tan,
        "asin"    => f64::asin,
        "acos"    => f64::acos,
        "atan"    => f64::atan,
        "sinh"    => f64::sinh,
        "cosh"    => f64::cosh,
        "tanh"    => f64::tanh,
        "sqrt"    => f64::sqrt,
        "cbrt"    => f64::cbrt,
        "ln"      => f64::ln,
        "log"     => builtin::log,
        "log2"    => f64::log2,
        "exp"     => f64::exp,
        "abs"     => f64::abs,
        "floor"   => f64::floor,
        "ceil"    => f64::ceil,
        "round"   => f64::round,
        "trunc"   => f64::trunc,
        "sign"    => builtin::sign,
        "radians" => builtin::radians,
        "degrees" => builtin::degrees,
    }
}

builtin_table! {
    MODIFIER_TABLE: ModifierFn {
        "quit"  => modifier::quit,
        "exit"  => modifier::quit,
        "clear" => modifier::clear,
    }
}

/// A registry of named functions.
///
/// Two registries exist per session: one of [`UnaryFn`]s and one of
/// [`ModifierFn`]s. Registering an existing name replaces its function.
///
/// # Example
/// ```
/// use bincalc::interpreter::function::core::UnaryTable;
///
/// let mut table = UnaryTable::with_builtins();
/// assert_eq!(table.get("sqrt").map(|f| f(16.0)), Some(4.0));
///
/// table.register("double", |x| x * 2.0);
/// assert_eq!(table.get("double").map(|f| f(4.0)), Some(8.0));
/// ```
#[derive(Debug, Clone)]
pub struct FunctionTable<F> {
    functions: HashMap<String, F>,
}

/// Registry of value-returning unary functions.
pub type UnaryTable = FunctionTable<UnaryFn>;

/// Registry of zero-argument modifier functions.
pub type ModifierTable = FunctionTable<ModifierFn>;

impl<F: Copy> Default for FunctionTable<F> {
    fn default() -> Self {
        Self { functions: HashMap::new() }
    }
}

impl<F: Copy> FunctionTable<F> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the function registered under `name`.
    pub fn register(&mut self, name: &str, func: F) {
        self.functions.insert(name.to_string(), func);
    }

    /// Looks up the function registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<F> {
        self.functions.get(name).copied()
    }

    fn from_table(table: &[(&str, F)]) -> Self {
        let mut registry = Self::new();
        for (name, func) in table {
            registry.register(name, *func);
        }
        registry
    }
}

impl UnaryTable {
    /// Creates a registry holding every builtin unary function.
    #[must_use]
    pub fn with_builtins() -> Self {
        Self::from_table(UNARY_TABLE)
    }
}

impl ModifierTable {
    /// Creates a registry holding every builtin modifier function.
    #[must_use]
    pub fn with_builtins() -> Self {
        Self::from_table(MODIFIER_TABLE)
    }
}
