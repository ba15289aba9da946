use anchor_lang::error::ErrorCode;
use anchor_lang::prelude::*;

use crate::error::VaultError;

#[account(zero_copy)]
#[derive(Default)]
pub struct VaultState {
    pub owner: Pubkey,
    pub bump: u8,
    pub _padding: [u8; 7], // keep the struct free of implicit padding
}

impl VaultState {
    pub const SPACE: usize = 8 + //discriminator
        32 + //owner
        1 + //bump
        7; // padding

    /// Write the discriminator and initial fields into a freshly allocated vault.
    pub fn init(data: &mut [u8], owner: Pubkey, bump: u8) -> Result<()> {
        require!(data.len() >= Self::SPACE, ErrorCode::AccountDidNotSerialize);

        let (discriminator, body) = data[..Self::SPACE].split_at_mut(8);
        discriminator.copy_from_slice(Self::DISCRIMINATOR);
        *bytemuck::from_bytes_mut::<VaultState>(body) = VaultState {
            owner,
            bump,
            ..Default::default()
        };
        Ok(())
    }

    /// Read a vault record back, checking its discriminator.
    pub fn load(data: &[u8]) -> Result<Self> {
        require!(data.len() >= Self::SPACE, ErrorCode::AccountDidNotDeserialize);

        let (discriminator, body) = data[..Self::SPACE].split_at(8);
        require!(
            discriminator == Self::DISCRIMINATOR,
            ErrorCode::AccountDiscriminatorMismatch
        );
        Ok(*bytemuck::from_bytes::<VaultState>(body))
    }

    pub fn check_owner(&self, owner: &Pubkey) -> Result<()> {
        require_keys_eq!(self.owner, *owner, VaultError::AddressMismatch);
        Ok(())
    }
}
