use anchor_lang::prelude::*;
use crate::error::VaultError;
use crate::events::WithdrawEvent;
use crate::pda::VaultAuthority;
use crate::state::VaultState;

#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// CHECK: signer flag is checked first thing in the handler
    #[account(mut)]
    pub owner: UncheckedAccount<'info>,

    /// CHECK: re-derived from `owner` and owner-checked in the handler
    #[account(mut)]
    pub vault: UncheckedAccount<'info>,

    /// CHECK: only the address matters
    #[account(address = crate::ID)]
    pub program: UncheckedAccount<'info>,
}

/// Sweep everything above the rent-exempt minimum back to the owner.
///
/// The vault stays open; a later deposit reuses it.
pub fn handler(ctx: Context<Withdraw>) -> Result<()> {
    let owner = &ctx.accounts.owner;
    let vault = &ctx.accounts.vault;

    require!(owner.is_signer, VaultError::UnauthorizedSigner);

    // A record this program wrote carries the canonical bump; anything else is searched.
    let recorded = if vault.owner == &crate::ID {
        VaultState::load(&vault.try_borrow_data()?).ok()
    } else {
        None
    };

    // The claimed owner must re-derive the supplied vault, so nobody else can name it.
    let authority = match &recorded {
        Some(state) => {
            VaultAuthority::verify_with_bump(ctx.program_id, owner.key, vault.key, state.bump)?
        }
        None => VaultAuthority::verify(ctx.program_id, owner.key, vault.key)?,
    };
    require_keys_eq!(*vault.owner, crate::ID, VaultError::OwnershipMismatch);

    let state = match recorded {
        Some(state) => state,
        None => VaultState::load(&vault.try_borrow_data()?)?,
    };
    state.check_owner(authority.owner())?;

    let floor = Rent::get()?.minimum_balance(vault.data_len());
    let amount = vault
        .lamports()
        .checked_sub(floor)
        .filter(|available| *available > 0)
        .ok_or(VaultError::InsufficientRentBuffer)?;

    vault.sub_lamports(amount)?;
    owner.add_lamports(amount)?;

    msg!("{} lamports withdrawn from vault", amount);
    emit!(WithdrawEvent {
        owner: owner.key(),
        vault: vault.key(),
        amount,
    });
    Ok(())
}
