use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::errors::EscrowError;
use crate::state::{Session, SessionStatus};

/// Defines the accounts needed to open a session: the patient pays the full
/// session amount up front into a vault that only the session record controls
#[derive(Accounts)]
#[instruction(seed: u64)]
pub struct StartSession<'info> {
    /// The patient opening the session; signs to authorize the deposit and
    /// pays for the record and vault creation
    #[account(mut)]
    pub patient: Signer<'info>,

    /// CHECK: identity only, never read or written; bound into the record as
    /// the only identity allowed to complete the session
    pub doctor: UncheckedAccount<'info>,

    /// CHECK: identity only, never read or written; bound into the record as
    /// the fee recipient on both settlement paths
    pub platform: UncheckedAccount<'info>,

    /// The session record, created at an address derived from the patient and
    /// their chosen seed
    /// Reusing a (patient, seed) pair fails creation here instead of silently
    /// overwriting an existing session
    #[account(
        init,
        payer = patient,
        space = 8 + Session::INIT_SPACE,
        seeds = [Session::SEED_PREFIX, patient.key().as_ref(), seed.to_le_bytes().as_ref()],
        bump
    )]
    pub session: Account<'info, Session>,

    /// The token the session is paid in
    #[account(
        mint::token_program = token_program
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// The patient's token account the deposit is drawn from; must hold the
    /// same mint the session is declared in
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = patient,
        associated_token::token_program = token_program
    )]
    pub patient_ata: InterfaceAccount<'info, TokenAccount>,

    /// The custody vault: the session record's associated token account
    /// Only the record's PDA can sign transfers out of it
    #[account(
        init,
        payer = patient,
        associated_token::mint = mint,
        associated_token::authority = session,
        associated_token::token_program = token_program
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> StartSession<'info> {
    /// Validates the inputs and writes the session record in its Active state
    pub fn save_session(
        &mut self,
        seed: u64,
        session_amount: u64,
        bumps: &StartSessionBumps,
    ) -> Result<()> {
        require_gt!(session_amount, 0, EscrowError::InvalidSessionAmount);
        require!(
            self.patient_ata.amount >= session_amount,
            EscrowError::InsufficientFunds
        );

        self.session.set_inner(Session {
            seed,
            patient: self.patient.key(),
            doctor: self.doctor.key(),
            platform: self.platform.key(),
            mint: self.mint.key(),
            amount: session_amount,
            status: SessionStatus::Active,
            bump: bumps.session,
        });

        Ok(())
    }

    /// Moves the session amount from the patient's token account into the vault
    pub fn deposit(&mut self, session_amount: u64) -> Result<()> {
        let transfer_accounts = TransferChecked {
            from: self.patient_ata.to_account_info(),
            mint: self.mint.to_account_info(),
            to: self.vault.to_account_info(),
            authority: self.patient.to_account_info(),
        };

        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), transfer_accounts);

        transfer_checked(cpi_ctx, session_amount, self.mint.decimals)
    }
}
