use anchor_lang::prelude::*;

#[constant]
pub const VAULT_SEED: &[u8] = b"vault";

/// First byte of a canonical deposit payload.
pub const DEPOSIT_OPCODE: u8 = 0;

/// First byte of a canonical withdraw payload.
pub const WITHDRAW_OPCODE: u8 = 1;

/// Opcode plus a little-endian `u64` amount.
pub const DEPOSIT_DATA_LEN: usize = 1 + 8;

pub const WITHDRAW_DATA_LEN: usize = 1;
