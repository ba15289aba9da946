//! Canonical instruction layout.
//!
//! ```text
//! Deposit:  [0, amount (u64, little-endian)]   9 bytes
//! Withdraw: [1]                                 1 byte
//! ```
//!
//! Anything else, including trailing bytes, is rejected.

use anchor_lang::prelude::*;

use crate::constants::{DEPOSIT_DATA_LEN, DEPOSIT_OPCODE, WITHDRAW_DATA_LEN, WITHDRAW_OPCODE};
use crate::error::VaultError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VaultInstruction {
    /// Move `amount` lamports from the owner into their vault, opening it on first use.
    ///
    /// Accounts:
    /// 0. `[signer, writable]` owner
    /// 1. `[writable]` vault PDA
    /// 2. `[]` this program
    /// 3. `[]` system program
    Deposit { amount: u64 },

    /// Drain the vault down to its rent-exempt minimum, crediting the owner.
    ///
    /// Accounts:
    /// 0. `[signer, writable]` owner
    /// 1. `[writable]` vault PDA
    /// 2. `[]` this program
    Withdraw,
}

impl VaultInstruction {
    pub fn pack(&self) -> Vec<u8> {
        match self {
            Self::Deposit { amount } => {
                let mut data = Vec::with_capacity(DEPOSIT_DATA_LEN);
                data.push(DEPOSIT_OPCODE);
                data.extend_from_slice(&amount.to_le_bytes());
                data
            }
            Self::Withdraw => vec![WITHDRAW_OPCODE],
        }
    }

    pub fn unpack(data: &[u8]) -> Result<Self> {
        let (opcode, rest) = data
            .split_first()
            .ok_or(VaultError::MalformedInstruction)?;

        match *opcode {
            DEPOSIT_OPCODE if data.len() == DEPOSIT_DATA_LEN => {
                let amount = rest
                    .try_into()
                    .map(u64::from_le_bytes)
                    .map_err(|_| VaultError::MalformedInstruction)?;
                Ok(Self::Deposit { amount })
            }
            WITHDRAW_OPCODE if data.len() == WITHDRAW_DATA_LEN => Ok(Self::Withdraw),
            _ => {
                msg!("Unrecognized instruction: opcode {}, {} bytes", opcode, data.len());
                err!(VaultError::MalformedInstruction)
            }
        }
    }
}
