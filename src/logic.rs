//! Four-valued logic.
//!
//! [`LogicValue`] extends classical booleans with two extra states:
//! [`Nothing`](LogicValue::Nothing) (no information yet) and
//! [`Err`](LogicValue::Err) (contradiction). Ordered as a lattice, `Nothing`
//! is the bottom, `Err` the absorbing top, and `True`/`False` are
//! incomparable in between.
//!
//! All three operators are total. Gate formulas are written only in terms of
//! them, see [`crate::components::GateKind::evaluate`].

use std::fmt;

/// A value carried by a wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogicValue {
    /// No information yet
    #[default]
    Nothing,
    /// Classical false
    False,
    /// Classical true
    True,
    /// Contradiction or undefined result
    Err,
}

impl LogicValue {
    /// Convert a classical boolean.
    pub fn from_bool(b: bool) -> Self {
        if b {
            LogicValue::True
        } else {
            LogicValue::False
        }
    }

    /// `true` for `True` and `False`.
    pub fn is_known(self) -> bool {
        matches!(self, LogicValue::True | LogicValue::False)
    }

    /// Supremum: merge two contributions to the same wire.
    ///
    /// `Err` absorbs, `Nothing` is neutral, and `True` meeting `False` is a
    /// contradiction.
    pub fn sup(self, other: LogicValue) -> LogicValue {
        use LogicValue::*;
        match (self, other) {
            (Err, _) | (_, Err) => Err,
            (Nothing, x) | (x, Nothing) => x,
            (True, True) => True,
            (False, False) => False,
            (True, False) | (False, True) => Err,
        }
    }

    /// Left-priority AND. Not commutative: the left operand picks the rule.
    ///
    /// | self    | result                                 |
    /// |---------|----------------------------------------|
    /// | True    | `other`, or `Err` if `other` is Nothing |
    /// | False   | `False`, or `Err` if `other` is Err     |
    /// | Nothing | `Err`                                  |
    /// | Err     | `Err`                                  |
    pub fn andz(self, other: LogicValue) -> LogicValue {
        use LogicValue::*;
        match self {
            True => match other {
                Nothing => Err,
                other => other,
            },
            False => match other {
                Err => Err,
                _ => False,
            },
            Nothing | Err => Err,
        }
    }

    /// Partial negation. Swaps `True` and `False`; everything else is `Err`.
    pub fn neg(self) -> LogicValue {
        use LogicValue::*;
        match self {
            True => False,
            False => True,
            Nothing | Err => Err,
        }
    }
}

impl From<bool> for LogicValue {
    fn from(b: bool) -> Self {
        LogicValue::from_bool(b)
    }
}

impl fmt::Display for LogicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogicValue::Nothing => "Nothing",
            LogicValue::False => "False",
            LogicValue::True => "True",
            LogicValue::Err => "Err",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::LogicValue::{self, *};

    const ALL: [LogicValue; 4] = [Nothing, False, True, Err];

    #[test]
    fn test_sup_nothing_is_neutral() {
        for a in ALL {
            assert_eq!(Nothing.sup(a), a);
            assert_eq!(a.sup(Nothing), a);
        }
    }

    #[test]
    fn test_sup_err_absorbs() {
        for a in ALL {
            assert_eq!(Err.sup(a), Err);
            assert_eq!(a.sup(Err), Err);
        }
    }

    #[test]
    fn test_sup_conflict() {
        assert_eq!(True.sup(False), Err);
        assert_eq!(False.sup(True), Err);
        assert_eq!(True.sup(True), True);
        assert_eq!(False.sup(False), False);
    }

    #[test]
    fn test_andz_table() {
        assert_eq!(True.andz(Nothing), Err);
        assert_eq!(True.andz(False), False);
        assert_eq!(True.andz(True), True);
        assert_eq!(True.andz(Err), Err);

        assert_eq!(False.andz(Nothing), False);
        assert_eq!(False.andz(False), False);
        assert_eq!(False.andz(True), False);
        assert_eq!(False.andz(Err), Err);

        for b in ALL {
            assert_eq!(Nothing.andz(b), Err);
            assert_eq!(Err.andz(b), Err);
        }
    }

    #[test]
    fn test_andz_not_commutative() {
        assert_eq!(False.andz(Nothing), False);
        assert_eq!(Nothing.andz(False), Err);
        assert_eq!(Err.andz(False), Err);
    }

    #[test]
    fn test_neg() {
        assert_eq!(True.neg(), False);
        assert_eq!(False.neg(), True);
        assert_eq!(Nothing.neg(), Err);
        assert_eq!(Err.neg(), Err);
    }

    #[test]
    fn test_double_negation() {
        assert_eq!(True.neg().neg(), True);
        assert_eq!(False.neg().neg(), False);
        assert_eq!(Nothing.neg().neg(), Err);
    }

    #[test]
    fn test_from_bool_and_display() {
        assert_eq!(LogicValue::from(true), True);
        assert_eq!(LogicValue::from_bool(false), False);
        assert!(True.is_known());
        assert!(!Err.is_known());
        assert_eq!(LogicValue::default(), Nothing);
        assert_eq!(Err.to_string(), "Err");
    }
}
