//! Machin-like formula registry
//!
//! Each formula is a table of (coefficient, denominator) terms whose
//! weighted arctangent sum is pi:
//!   pi = sum(coefficient * atan(1 / denominator))
//! Coefficients already include the factor of 4 that turns pi/4 into pi.

/// One summand: `coefficient * atan(1 / denominator)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormulaTerm {
    pub coefficient: i64,
    pub denominator: u64,
}

impl FormulaTerm {
    pub const fn new(coefficient: i64, denominator: u64) -> Self {
        Self {
            coefficient,
            denominator,
        }
    }
}

/// A named arctangent formula for pi
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formula {
    key: &'static str,
    name: &'static str,
    file_name: &'static str,
    terms: &'static [FormulaTerm],
}

impl Formula {
    pub const fn new(
        key: &'static str,
        name: &'static str,
        file_name: &'static str,
        terms: &'static [FormulaTerm],
    ) -> Self {
        Self {
            key,
            name,
            file_name,
            terms,
        }
    }

    /// Short lowercase identifier, e.g. "takano"
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Human-readable attribution
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Name of the file the estimate is recorded in
    pub fn file_name(&self) -> &'static str {
        self.file_name
    }

    pub fn terms(&self) -> &'static [FormulaTerm] {
        self.terms
    }

    /// Look up a registered formula by key
    pub fn by_key(key: &str) -> Option<&'static Formula> {
        registry().iter().find(|f| f.key.eq_ignore_ascii_case(key))
    }
}

/// K. Takano (1982): pi/4 = 12 atan(1/49) + 32 atan(1/57) - 5 atan(1/239) + 12 atan(1/110443)
pub const TAKANO: Formula = Formula::new(
    "takano",
    "K. Takano",
    "pi_K_Takano.txt",
    &[
        FormulaTerm::new(12 * 4, 49),
        FormulaTerm::new(32 * 4, 57),
        FormulaTerm::new(-5 * 4, 239),
        FormulaTerm::new(12 * 4, 110_443),
    ],
);

/// F. C. M. Stormer (1896): pi/4 = 44 atan(1/57) + 7 atan(1/239) - 12 atan(1/682) + 24 atan(1/12943)
pub const STORMER: Formula = Formula::new(
    "stormer",
    "F. C. M. Størmer",
    "pi_FCM_Stormer.txt",
    &[
        FormulaTerm::new(44 * 4, 57),
        FormulaTerm::new(7 * 4, 239),
        FormulaTerm::new(-12 * 4, 682),
        FormulaTerm::new(24 * 4, 12_943),
    ],
);

static REGISTRY: [Formula; 2] = [TAKANO, STORMER];

/// All shipped formulas, in evaluation order
pub fn registry() -> &'static [Formula] {
    &REGISTRY
}
