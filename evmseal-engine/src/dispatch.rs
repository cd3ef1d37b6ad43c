use std::collections::BTreeMap;

use evmseal_types::constants::{EIP_1153, EIP_3198, EIP_3855, EIP_5656, EIP_7516};

/// Function that enables an optional instruction in a dispatch table.
pub type FeatureActivator = fn(&mut DispatchTable);

/// Feature code to activator mapping.
pub type FeatureActivatorTable = BTreeMap<i32, FeatureActivator>;

/// A single entry of the operation-dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub constant_gas: u64,
}

/// Opcode to operation mapping consulted by the interpreter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchTable {
    ops: BTreeMap<u8, Operation>,
}

impl DispatchTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, opcode: u8, name: &'static str, constant_gas: u64) {
        self.ops.insert(opcode, Operation { name, constant_gas });
    }

    pub fn get(&self, opcode: u8) -> Option<&Operation> {
        self.ops.get(&opcode)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

fn enable_3198(table: &mut DispatchTable) {
    table.insert(0x48, "BASEFEE", 2);
}

fn enable_3855(table: &mut DispatchTable) {
    table.insert(0x5f, "PUSH0", 2);
}

fn enable_1153(table: &mut DispatchTable) {
    table.insert(0x5c, "TLOAD", 100);
    table.insert(0x5d, "TSTORE", 100);
}

fn enable_5656(table: &mut DispatchTable) {
    table.insert(0x5e, "MCOPY", 3);
}

fn enable_7516(table: &mut DispatchTable) {
    table.insert(0x4a, "BLOBBASEFEE", 2);
}

/// Activators the engine ships with.
pub fn builtin_activators() -> FeatureActivatorTable {
    let mut table = FeatureActivatorTable::new();
    table.insert(EIP_3198, enable_3198);
    table.insert(EIP_3855, enable_3855);
    table.insert(EIP_1153, enable_1153);
    table.insert(EIP_5656, enable_5656);
    table.insert(EIP_7516, enable_7516);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use evmseal_types::constants::BUILTIN_ACTIVATOR_CODES;

    #[test]
    fn test_builtin_codes_match_constants() {
        let codes: Vec<i32> = builtin_activators().keys().copied().collect();
        let mut expected = BUILTIN_ACTIVATOR_CODES.to_vec();
        expected.sort_unstable();
        assert_eq!(codes, expected);
    }

    #[test]
    fn test_transient_storage_activator() {
        let mut table = DispatchTable::new();
        builtin_activators()[&EIP_1153](&mut table);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(0x5c).map(|op| op.name), Some("TLOAD"));
        assert_eq!(table.get(0x5d).map(|op| op.constant_gas), Some(100));
    }

    #[test]
    fn test_activation_is_idempotent() {
        let mut table = DispatchTable::new();
        let push0 = builtin_activators()[&EIP_3855];
        push0(&mut table);
        push0(&mut table);
        assert_eq!(table.len(), 1);
    }
}
