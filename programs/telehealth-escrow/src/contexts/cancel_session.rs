use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::errors::EscrowError;
use crate::fee::split_balance;
use crate::state::{Session, SessionStatus};

/// Defines the accounts needed to cancel an active session: the same split as
/// completion, with the majority reversed — the patient is refunded and the
/// platform keeps the cancellation fee
#[derive(Accounts)]
pub struct CancelSession<'info> {
    /// The patient who opened the session; the only identity allowed to
    /// cancel, enforced by the signature plus the record's seeds
    #[account(mut)]
    pub patient: Signer<'info>,

    /// The platform fee recipient recorded at start time
    pub platform: SystemAccount<'info>,

    /// The session record; must still be Active and must belong to the
    /// signing patient
    #[account(
        mut,
        seeds = [Session::SEED_PREFIX, patient.key().as_ref(), session.seed.to_le_bytes().as_ref()],
        bump = session.bump,
        has_one = patient @ EscrowError::InvalidPatient,
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

    /// Destination for the patient's refund
    #[account(
        init_if_needed,
        payer = patient,
        associated_token::mint = mint,
        associated_token::authority = patient,
        associated_token::token_program = token_program
    )]
    pub patient_ata: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Destination for the platform's cancellation fee
    #[account(
        init_if_needed,
        payer = patient,
        associated_token::mint = mint,
        associated_token::authority = platform,
        associated_token::token_program = token_program
    )]
    pub platform_ata: Box<InterfaceAccount<'info, TokenAccount>>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> CancelSession<'info> {
    /// Drains the vault in one atomic step: majority refund to the patient,
    /// fee to the platform, then marks the session Cancelled
    pub fn refund_patient(&mut self) -> Result<()> {
        let (patient_share, platform_share) = split_balance(self.vault.amount)?;

        let signer_seeds: [&[&[u8]]; 1] = [&[
            Session::SEED_PREFIX,
            self.patient.to_account_info().key.as_ref(),
            &self.session.seed.to_le_bytes()[..],
            &[self.session.bump],
        ]];

        let refund_transfer = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.mint.to_account_info(),
            to: self.patient_ata.to_account_info(),
            authority: self.session.to_account_info(),
        };
        transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                refund_transfer,
                &signer_seeds,
            ),
            patient_share,
            self.mint.decimals,
        )?;

        let fee_transfer = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.mint.to_account_info(),
            to: self.platform_ata.to_account_info(),
            authority: self.session.to_account_info(),
        };
        transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                fee_transfer,
                &signer_seeds,
            ),
            platform_share,
            self.mint.decimals,
        )?;

        self.session.status = SessionStatus::Cancelled;

        Ok(())
    }
}
