//! Truth tables of the six processing functions.
//!
//! Entries are `f64` so the same tables can describe both a classical
//! wiring (entries in {0, 1}) and a relaxed one (entries in [0, 1]).

use serde::Serialize;

use nlb_core::WiringError;

use crate::layout::{
    pattern_args, pattern_index, unpack, ProcessingFunction, PROCESSING_FUNCTION_COUNT,
};
use crate::wiring::RelaxedWiring;

/// Truth table of one processing function, indexed as in [`crate::layout`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionTable {
    function: ProcessingFunction,
    entries: Vec<f64>,
}

impl FunctionTable {
    /// Wrap explicit entries.
    ///
    /// # Errors
    ///
    /// - [`WiringError::InvalidTableLength`] unless there are exactly
    ///   `2^arity` entries.
    /// - [`WiringError::NonFiniteEntry`] for NaN or infinite entries; the
    ///   index is the entry's position in the wiring vector.
    pub fn new(function: ProcessingFunction, entries: Vec<f64>) -> Result<Self, WiringError> {
        if entries.len() != function.table_len() {
            return Err(WiringError::InvalidTableLength {
                function: function.name().to_string(),
                expected: function.table_len(),
                actual: entries.len(),
            });
        }
        if let Some((i, &value)) = entries.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(WiringError::NonFiniteEntry {
                index: function.offset() + i,
                value,
            });
        }
        Ok(Self { function, entries })
    }

    /// Tabulate a boolean rule. `rule` receives the arguments in the order
    /// of [`ProcessingFunction::arguments`]; its result is taken mod 2.
    pub fn from_rule(function: ProcessingFunction, rule: impl Fn(&[u8]) -> u8) -> Self {
        let entries = (0..function.table_len())
            .map(|index| f64::from(rule(&pattern_args(function.arity(), index)) % 2))
            .collect();
        Self { function, entries }
    }

    /// Which function this table belongs to.
    pub fn function(&self) -> ProcessingFunction {
        self.function
    }

    /// Entries in index order.
    pub fn entries(&self) -> &[f64] {
        &self.entries
    }

    /// Value at an argument tuple. `None` if the tuple has the wrong length
    /// or a non-bit component.
    pub fn value(&self, args: &[u8]) -> Option<f64> {
        if args.len() != self.function.arity() {
            return None;
        }
        pattern_index(args).map(|index| self.entries[index])
    }
}

/// The six tables that make up a wiring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WiringFunctions {
    tables: Vec<FunctionTable>,
}

impl WiringFunctions {
    /// Collect one table per function, in any order.
    ///
    /// # Errors
    ///
    /// [`WiringError::DuplicateTable`] if a function appears twice,
    /// [`WiringError::MissingTable`] if one is absent.
    pub fn new(tables: Vec<FunctionTable>) -> Result<Self, WiringError> {
        let mut slots: [Option<FunctionTable>; PROCESSING_FUNCTION_COUNT] = Default::default();
        for table in tables {
            let slot = &mut slots[table.function.rank()];
            if slot.is_some() {
                return Err(WiringError::DuplicateTable {
                    function: table.function.name().to_string(),
                });
            }
            *slot = Some(table);
        }
        let tables = ProcessingFunction::all()
            .iter()
            .zip(slots)
            .map(|(function, slot)| {
                slot.ok_or_else(|| WiringError::MissingTable {
                    function: function.name().to_string(),
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { tables })
    }

    /// Tables given explicitly; lengths are fixed by the types.
    ///
    /// # Errors
    ///
    /// Returns [`WiringError::NonFiniteEntry`] for NaN or infinite entries.
    pub fn from_tables(
        f1: [f64; 4],
        g1: [f64; 4],
        f2: [f64; 4],
        g2: [f64; 4],
        f3: [f64; 8],
        g3: [f64; 8],
    ) -> Result<Self, WiringError> {
        let blocks: [&[f64]; PROCESSING_FUNCTION_COUNT] = [&f1, &g1, &f2, &g2, &f3, &g3];
        let tables = ProcessingFunction::all()
            .iter()
            .zip(blocks)
            .map(|(&function, entries)| FunctionTable::new(function, entries.to_vec()))
            .collect::<Result<_, _>>()?;
        Ok(Self { tables })
    }

    /// Tabulate six boolean rules.
    ///
    /// Two-argument rules receive `(x, a)`/`(y, b)`, three-argument rules
    /// `(x, a1, a2)`/`(y, b1, b2)`.
    pub fn from_rules(
        f1: impl Fn(u8, u8) -> u8,
        g1: impl Fn(u8, u8) -> u8,
        f2: impl Fn(u8, u8) -> u8,
        g2: impl Fn(u8, u8) -> u8,
        f3: impl Fn(u8, u8, u8) -> u8,
        g3: impl Fn(u8, u8, u8) -> u8,
    ) -> Self {
        use ProcessingFunction::*;
        let tables = vec![
            FunctionTable::from_rule(F1, |v| f1(v[0], v[1])),
            FunctionTable::from_rule(G1, |v| g1(v[0], v[1])),
            FunctionTable::from_rule(F2, |v| f2(v[0], v[1])),
            FunctionTable::from_rule(G2, |v| g2(v[0], v[1])),
            FunctionTable::from_rule(F3, |v| f3(v[0], v[1], v[2])),
            FunctionTable::from_rule(G3, |v| g3(v[0], v[1], v[2])),
        ];
        Self { tables }
    }

    /// Split a wiring vector back into its six tables.
    pub fn from_wiring(wiring: &RelaxedWiring) -> Self {
        let tables = ProcessingFunction::all()
            .iter()
            .map(|&function| FunctionTable {
                function,
                entries: unpack(wiring.entries(), function).to_vec(),
            })
            .collect();
        Self { tables }
    }

    /// Table of one function.
    pub fn table(&self, function: ProcessingFunction) -> &FunctionTable {
        // `tables` is always in `ProcessingFunction::all()` order.
        &self.tables[function.rank()]
    }

    /// Tables in vector order.
    pub fn iter(&self) -> impl Iterator<Item = &FunctionTable> {
        self.tables.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rule_order() {
        // f_2(x, a1) = x·a1 -> only (1, 1) is set.
        let t = FunctionTable::from_rule(ProcessingFunction::F2, |v| v[0] * v[1]);
        assert_eq!(t.entries(), &[0.0, 0.0, 0.0, 1.0]);
        // f_1(x, a2) = x -> (1, 0) and (1, 1).
        let t = FunctionTable::from_rule(ProcessingFunction::F1, |v| v[0]);
        assert_eq!(t.entries(), &[0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_rule_result_reduced_mod_two() {
        let t = FunctionTable::from_rule(ProcessingFunction::G3, |v| v[1] + v[2]);
        assert_eq!(t.entries(), &[0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_value_lookup() {
        let t = FunctionTable::from_rule(ProcessingFunction::F3, |v| v[0] & v[2]);
        assert_eq!(t.value(&[1, 0, 1]), Some(1.0));
        assert_eq!(t.value(&[1, 1, 0]), Some(0.0));
        assert_eq!(t.value(&[1, 1]), None);
        assert_eq!(t.value(&[1, 3, 0]), None);
    }

    #[test]
    fn test_new_checks_length() {
        assert!(FunctionTable::new(ProcessingFunction::F1, vec![0.0; 4]).is_ok());
        assert!(matches!(
            FunctionTable::new(ProcessingFunction::F3, vec![0.0; 4]),
            Err(WiringError::InvalidTableLength { expected: 8, actual: 4, .. })
        ));
    }

    #[test]
    fn test_from_tables_matches_from_rules() {
        let explicit = WiringFunctions::from_tables(
            [0.0, 0.0, 1.0, 1.0],
            [0.0, 0.0, 1.0, 1.0],
            [0.0, 0.0, 0.0, 1.0],
            [0.0, 0.0, 0.0, 1.0],
            [0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0],
            [0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0],
        )
        .unwrap();
        let ruled = WiringFunctions::from_rules(
            |x, _| x,
            |y, _| y,
            |x, a1| x & a1,
            |y, b1| y & b1,
            |_, a1, a2| a1 ^ a2,
            |_, b1, b2| b1 ^ b2,
        );
        assert_eq!(explicit, ruled);
    }

    #[test]
    fn test_non_finite_entries_rejected() {
        let err = WiringFunctions::from_tables(
            [0.0; 4],
            [0.0; 4],
            [0.0; 4],
            [0.0; 4],
            [0.0, 0.0, f64::INFINITY, 0.0, 0.0, 0.0, 0.0, 0.0],
            [0.0; 8],
        )
        .unwrap_err();
        assert_eq!(
            err,
            WiringError::NonFiniteEntry {
                index: 18,
                value: f64::INFINITY
            }
        );
        assert!(matches!(
            FunctionTable::new(ProcessingFunction::G1, vec![f64::NAN, 0.0, 1.0, 1.0]),
            Err(WiringError::NonFiniteEntry { index: 4, .. })
        ));
    }

    #[test]
    fn test_new_orders_tables() {
        let reference = WiringFunctions::from_rules(
            |x, _| x,
            |y, _| y,
            |x, _| x,
            |y, _| y,
            |_, a1, a2| a1 ^ a2,
            |_, b1, b2| b1 ^ b2,
        );
        let mut tables: Vec<FunctionTable> = reference.iter().cloned().collect();
        tables.reverse();
        assert_eq!(WiringFunctions::new(tables).unwrap(), reference);
    }

    #[test]
    fn test_new_rejects_missing_and_duplicate() {
        let reference = WiringFunctions::from_rules(
            |x, _| x,
            |y, _| y,
            |x, _| x,
            |y, _| y,
            |_, a1, a2| a1 ^ a2,
            |_, b1, b2| b1 ^ b2,
        );
        let mut tables: Vec<FunctionTable> = reference.iter().cloned().collect();
        tables.pop();
        assert_eq!(
            WiringFunctions::new(tables.clone()).unwrap_err(),
            WiringError::MissingTable {
                function: "g_3".to_string()
            }
        );
        tables.push(reference.table(ProcessingFunction::F1).clone());
        assert_eq!(
            WiringFunctions::new(tables).unwrap_err(),
            WiringError::DuplicateTable {
                function: "f_1".to_string()
            }
        );
    }

    #[test]
    fn test_table_lookup_by_function() {
        let functions = WiringFunctions::from_rules(
            |x, _| x,
            |_, b| b,
            |_, _| 0,
            |_, _| 1,
            |x, a1, a2| x ^ a1 ^ a2,
            |_, _, _| 0,
        );
        for &function in ProcessingFunction::all() {
            assert_eq!(functions.table(function).function(), function);
        }
        assert_eq!(functions.table(ProcessingFunction::G1).entries(), &[0.0, 1.0, 0.0, 1.0]);
        assert_eq!(functions.table(ProcessingFunction::G2).entries(), &[1.0; 4]);
    }
}
