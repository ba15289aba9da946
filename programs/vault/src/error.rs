use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    #[msg("Malformed instruction data")]
    MalformedInstruction,
    #[msg("Deposit amount must be greater than zero")]
    InvalidAmount,
    #[msg("Owner must sign")]
    UnauthorizedSigner,
    #[msg("Vault address does not match the owner's derived vault")]
    AddressMismatch,
    #[msg("Vault is not owned by this program")]
    OwnershipMismatch,
    #[msg("Nothing to withdraw above the rent-exempt minimum")]
    InsufficientRentBuffer,
    #[msg("No off-curve vault address for this owner")]
    AddressDerivationFailed,
}
