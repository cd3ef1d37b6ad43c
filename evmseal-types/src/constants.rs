// ─── Chain Identity ──────────────────────────────────────────────────────────

/// EVM chain id used when a caller resolves parameters for chain id 0.
pub const DEFAULT_EVM_CHAIN_ID: u64 = 262_144;

// ─── Denominations ───────────────────────────────────────────────────────────

/// Precision exponent of a display unit (1 display unit = 1 whole coin).
pub const DISPLAY_UNIT_EXPONENT: i32 = 0;

/// Maximum number of fractional digits a base unit may carry.
pub const MAX_DECIMALS: u8 = 18;

/// Minimum length of a denomination symbol.
pub const MIN_DENOM_LEN: usize = 3;

/// Maximum length of a denomination symbol.
pub const MAX_DENOM_LEN: usize = 128;

// ─── Feature Activators ──────────────────────────────────────────────────────

/// BASEFEE opcode.
pub const EIP_3198: i32 = 3198;

/// PUSH0 opcode.
pub const EIP_3855: i32 = 3855;

/// Transient storage (TLOAD/TSTORE).
pub const EIP_1153: i32 = 1153;

/// MCOPY opcode.
pub const EIP_5656: i32 = 5656;

/// BLOBBASEFEE opcode.
pub const EIP_7516: i32 = 7516;

/// Feature codes the engine ships with. Extended tables may not reuse them.
pub const BUILTIN_ACTIVATOR_CODES: [i32; 5] = [EIP_3198, EIP_3855, EIP_1153, EIP_5656, EIP_7516];
