#![allow(dead_code)]

use std::collections::HashMap;

use mollusk_svm::{
    program,
    result::{InstructionResult, ProgramResult},
    Mollusk,
};
use solana_sdk::{
    account::Account,
    instruction::{AccountMeta, Instruction},
    native_token::LAMPORTS_PER_SOL,
    program_error::ProgramError,
    pubkey::Pubkey,
};
use vault::{VaultInstruction, VaultState};

// Same id as declare_id! in lib.rs
pub const PROGRAM_ID: Pubkey = Pubkey::new_from_array(five8_const::decode_32_const(
    "9xFC9bzvnuP486oHTiW6bfSm8zuJMachLdG6dXFcvctG",
));

pub fn init_mollusk() -> Mollusk {
    Mollusk::new(&PROGRAM_ID, "../../target/deploy/vault")
}

pub fn vault_address(owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"vault", owner.as_ref()], &PROGRAM_ID)
}

pub fn deposit_ix(owner: &Pubkey, vault: &Pubkey, amount: u64) -> Instruction {
    let (system_program, _) = program::keyed_account_for_system_program();
    Instruction::new_with_bytes(
        PROGRAM_ID,
        &VaultInstruction::Deposit { amount }.pack(),
        vec![
            AccountMeta::new(*owner, true),
            AccountMeta::new(*vault, false),
            AccountMeta::new_readonly(PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
    )
}

pub fn withdraw_ix(owner: &Pubkey, vault: &Pubkey) -> Instruction {
    Instruction::new_with_bytes(
        PROGRAM_ID,
        &VaultInstruction::Withdraw.pack(),
        vec![
            AccountMeta::new(*owner, true),
            AccountMeta::new(*vault, false),
            AccountMeta::new_readonly(PROGRAM_ID, false),
        ],
    )
}

/// Same instruction, but the owner meta no longer claims a signature.
pub fn without_signer(mut instruction: Instruction) -> Instruction {
    instruction.accounts[0].is_signer = false;
    instruction
}

pub fn wallet(lamports: u64) -> Account {
    let (system_program, _) = program::keyed_account_for_system_program();
    Account::new(lamports, 0, &system_program)
}

pub fn assert_failure(result: &InstructionResult, expected: ProgramError) {
    match &result.program_result {
        ProgramResult::Failure(err) => assert_eq!(err, &expected),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}

/// A vault account as the program leaves it after the first deposit.
pub fn open_vault_account(mollusk: &Mollusk, owner: &Pubkey, bump: u8, extra: u64) -> Account {
    let rent = mollusk.sysvars.rent.minimum_balance(VaultState::SPACE);
    let mut account = Account::new(rent + extra, VaultState::SPACE, &PROGRAM_ID);
    VaultState::init(&mut account.data, *owner, bump).unwrap();
    account
}

/// Keyed account store that carries state from one instruction to the next.
///
/// Accounts never touched read as empty system accounts, which is how the runtime
/// presents an address nobody has created yet.
pub struct Ledger {
    pub mollusk: Mollusk,
    accounts: HashMap<Pubkey, Account>,
}

impl Ledger {
    pub fn new() -> Self {
        let mut accounts = HashMap::new();
        let (system_program, system_account) = program::keyed_account_for_system_program();
        accounts.insert(system_program, system_account);

        Self {
            mollusk: init_mollusk(),
            accounts,
        }
    }

    pub fn fund(&mut self, key: Pubkey, lamports: u64) {
        self.accounts.insert(key, wallet(lamports));
    }

    pub fn new_owner(&mut self) -> Pubkey {
        let owner = Pubkey::new_unique();
        self.fund(owner, 10 * LAMPORTS_PER_SOL);
        owner
    }

    pub fn set(&mut self, key: Pubkey, account: Account) {
        self.accounts.insert(key, account);
    }

    pub fn account(&self, key: &Pubkey) -> Account {
        self.accounts.get(key).cloned().unwrap_or_default()
    }

    pub fn lamports(&self, key: &Pubkey) -> u64 {
        self.account(key).lamports
    }

    pub fn rent_minimum(&self) -> u64 {
        self.mollusk.sysvars.rent.minimum_balance(VaultState::SPACE)
    }

    /// Run `instruction`; only a successful run is committed back to the store.
    pub fn process(&mut self, instruction: &Instruction) -> InstructionResult {
        let accounts: Vec<(Pubkey, Account)> = instruction
            .accounts
            .iter()
            .map(|meta| (meta.pubkey, self.account(&meta.pubkey)))
            .collect();

        let result = self.mollusk.process_instruction(instruction, &accounts);
        if !result.program_result.is_err() {
            for (key, account) in &result.resulting_accounts {
                self.accounts.insert(*key, account.clone());
            }
        }
        result
    }
}
