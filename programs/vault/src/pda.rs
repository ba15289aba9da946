use anchor_lang::prelude::*;

use crate::constants::VAULT_SEED;
use crate::error::VaultError;

/// Derive the vault address for `owner` under `program_id`.
///
/// Seeds are `["vault", owner]`; the bump is the canonical one (searched from 255
/// downward), so the result is off-curve and no private key can sign for it.
pub fn derive_vault(program_id: &Pubkey, owner: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(&[VAULT_SEED, owner.as_ref()], program_id)
        .ok_or_else(|| error!(VaultError::AddressDerivationFailed))
}

/// Proof that a supplied vault account is the canonical PDA of `owner`.
///
/// Only [`VaultAuthority::verify`] constructs one, so holding it is what lets the
/// program sign for the vault address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VaultAuthority {
    owner: Pubkey,
    address: Pubkey,
    bump: [u8; 1],
}

impl VaultAuthority {
    pub fn verify(program_id: &Pubkey, owner: &Pubkey, supplied: &Pubkey) -> Result<Self> {
        let (address, bump) = derive_vault(program_id, owner)?;
        require_keys_eq!(*supplied, address, VaultError::AddressMismatch);

        Ok(Self {
            owner: *owner,
            address,
            bump: [bump],
        })
    }

    /// Same check as [`VaultAuthority::verify`], using a bump already on record
    /// instead of searching for it.
    pub fn verify_with_bump(
        program_id: &Pubkey,
        owner: &Pubkey,
        supplied: &Pubkey,
        bump: u8,
    ) -> Result<Self> {
        let address =
            Pubkey::create_program_address(&[VAULT_SEED, owner.as_ref(), &[bump]], program_id)
                .map_err(|_| error!(VaultError::AddressMismatch))?;
        require_keys_eq!(*supplied, address, VaultError::AddressMismatch);

        Ok(Self {
            owner: *owner,
            address,
            bump: [bump],
        })
    }

    pub fn owner(&self) -> &Pubkey {
        &self.owner
    }

    pub fn address(&self) -> &Pubkey {
        &self.address
    }

    pub fn bump(&self) -> u8 {
        self.bump[0]
    }

    pub fn signer_seeds(&self) -> [&[u8]; 3] {
        [VAULT_SEED, self.owner.as_ref(), &self.bump]
    }
}
