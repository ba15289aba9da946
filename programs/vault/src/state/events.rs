use anchor_lang::prelude::*;

#[event]
pub struct VaultOpened {
    pub owner: Pubkey,
    pub vault: Pubkey,
    pub bump: u8,
}

#[event]
pub struct DepositEvent {
    pub owner: Pubkey,
    pub vault: Pubkey,
    pub amount: u64,
}

#[event]
pub struct WithdrawEvent {
    pub owner: Pubkey,
    pub vault: Pubkey,
    pub amount: u64,
}
