use anchor_lang::prelude::*;
use anchor_lang::system_program::{
    allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
};
use crate::error::VaultError;
use crate::events::{DepositEvent, VaultOpened};
use crate::pda::VaultAuthority;
use crate::state::VaultState;

#[derive(Accounts)]
pub struct Deposit<'info> {
    /// CHECK: signer flag is checked first thing in the handler
    #[account(mut)]
    pub owner: UncheckedAccount<'info>,

    /// CHECK: re-derived from `owner` in the handler, created on first deposit
    #[account(mut)]
    pub vault: UncheckedAccount<'info>,

    /// CHECK: only the address matters
    #[account(address = crate::ID)]
    pub program: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let accounts: &Deposit = ctx.accounts;
    let owner = &accounts.owner;
    let vault = &accounts.vault;

    require!(owner.is_signer, VaultError::UnauthorizedSigner);
    require!(amount > 0, VaultError::InvalidAmount);

    let authority = VaultAuthority::verify(ctx.program_id, owner.key, vault.key)?;

    if vault.owner == &System::id() && vault.data_is_empty() {
        open_vault(accounts, &authority)?;
    } else {
        require_keys_eq!(*vault.owner, crate::ID, VaultError::OwnershipMismatch);
        msg!("Vault already exists");
    }

    let cpi_accounts = Transfer {
        from: owner.to_account_info(),
        to: vault.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(accounts.system_program.to_account_info(), cpi_accounts);
    transfer(cpi_ctx, amount)?;

    msg!("{} lamports deposited to vault", amount);
    emit!(DepositEvent {
        owner: owner.key(),
        vault: vault.key(),
        amount,
    });
    Ok(())
}

/// Create the vault account at its PDA, rent-exempt and owned by this program.
fn open_vault(accounts: &Deposit, authority: &VaultAuthority) -> Result<()> {
    let system_program = accounts.system_program.to_account_info();
    let owner = accounts.owner.to_account_info();
    let vault = accounts.vault.to_account_info();

    let seeds = authority.signer_seeds();
    let signer = &[&seeds[..]];

    let space = VaultState::SPACE as u64;
    let required = Rent::get()?.minimum_balance(VaultState::SPACE);
    let current = vault.lamports();

    if current == 0 {
        let cpi_accounts = CreateAccount {
            from: owner,
            to: vault.clone(),
        };
        let cpi_ctx = CpiContext::new_with_signer(system_program, cpi_accounts, signer);
        create_account(cpi_ctx, required, space, &crate::ID)?;
    } else {
        // Someone already sent lamports to the address; create_account would refuse it.
        let top_up = required.saturating_sub(current);
        if top_up > 0 {
            let cpi_accounts = Transfer {
                from: owner,
                to: vault.clone(),
            };
            let cpi_ctx = CpiContext::new(system_program.clone(), cpi_accounts);
            transfer(cpi_ctx, top_up)?;
        }

        let cpi_accounts = Allocate {
            account_to_allocate: vault.clone(),
        };
        let cpi_ctx = CpiContext::new_with_signer(system_program.clone(), cpi_accounts, signer);
        allocate(cpi_ctx, space)?;

        let cpi_accounts = Assign {
            account_to_assign: vault.clone(),
        };
        let cpi_ctx = CpiContext::new_with_signer(system_program, cpi_accounts, signer);
        assign(cpi_ctx, &crate::ID)?;
    }

    VaultState::init(&mut vault.try_borrow_mut_data()?, *authority.owner(), authority.bump())?;

    msg!("Vault created");
    emit!(VaultOpened {
        owner: *authority.owner(),
        vault: *authority.address(),
        bump: authority.bump(),
    });
    Ok(())
}
