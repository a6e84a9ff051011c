use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::errors::EscrowError;
use crate::fee::split_balance;
use crate::state::{Session, SessionStatus};

/// Defines the accounts needed to settle a completed consultation: the whole
/// vault balance is split between the doctor and the platform and the record
/// moves to its Completed terminal state
#[derive(Accounts)]
pub struct CompleteSession<'info> {
    /// The doctor bound to the session at start time; must sign, and must
    /// match the record's doctor field
    #[account(mut)]
    pub doctor: Signer<'info>,

    /// The patient who opened the session; identity only here, used to
    /// re-derive the record address
    pub patient: SystemAccount<'info>,

    /// The platform fee recipient recorded at start time
    pub platform: SystemAccount<'info>,

    /// The session record; must still be Active, and every supplied party and
    /// mint must match what was bound at start time
    #[account(
        mut,
        seeds = [Session::SEED_PREFIX, patient.key().as_ref(), session.seed.to_le_bytes().as_ref()],
        bump = session.bump,
        has_one = patient @ EscrowError::InvalidPatient,
        has_one = doctor @ EscrowError::InvalidDoctor,
        has_one = platform @ EscrowError::InvalidPlatform,
        has_one = mint @ EscrowError::InvalidMint,
        constraint = session.status == SessionStatus::Active @ EscrowError::SessionNotActive,
    )]
    pub session: Box<Account<'info, Session>>,

    pub mint: Box<InterfaceAccount<'info, Mint>>,

    /// The custody vault holding the deposit, controlled by the record's PDA
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = session,
        associated_token::token_program = token_program
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Destination for the doctor's majority share
    #[account(
        init_if_needed,
        payer = doctor,
        associated_token::mint = mint,
        associated_token::authority = doctor,
        associated_token::token_program = token_program
    )]
    pub doctor_ata: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Destination for the platform's service fee
    #[account(
        init_if_needed,
        payer = doctor,
        associated_token::mint = mint,
        associated_token::authority = platform,
        associated_token::token_program = token_program
    )]
    pub platform_ata: Box<InterfaceAccount<'info, TokenAccount>>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> CompleteSession<'info> {
    /// Drains the vault in one atomic step: majority share to the doctor, fee
    /// to the platform, then marks the session Completed
    pub fn pay_doctor_and_platform(&mut self) -> Result<()> {
        let (doctor_share, platform_share) = split_balance(self.vault.amount)?;

        let signer_seeds: [&[&[u8]]; 1] = [&[
            Session::SEED_PREFIX,
            self.patient.to_account_info().key.as_ref(),
            &self.session.seed.to_le_bytes()[..],
            &[self.session.bump],
        ]];

        let doctor_transfer = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.mint.to_account_info(),
            to: self.doctor_ata.to_account_info(),
            authority: self.session.to_account_info(),
        };
        transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                doctor_transfer,
                &signer_seeds,
            ),
            doctor_share,
            self.mint.decimals,
        )?;

        let platform_transfer = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.mint.to_account_info(),
            to: self.platform_ata.to_account_info(),
            authority: self.session.to_account_info(),
        };
        transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                platform_transfer,
                &signer_seeds,
            ),
            platform_share,
            self.mint.decimals,
        )?;

        // The record stays behind as a tombstone so a raced second settlement
        // fails with SessionNotActive; rent is reclaimed via close_session
        self.session.status = SessionStatus::Completed;

        Ok(())
    }
}
