use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    close_account, CloseAccount, Mint, TokenAccount, TokenInterface,
};

use crate::errors::EscrowError;
use crate::state::{Session, SessionStatus};

/// Reclaims the storage of a settled session: the empty vault and the record
/// are closed and their rent returns to the patient who funded them
#[derive(Accounts)]
pub struct CloseSession<'info> {
    #[account(mut)]
    pub patient: Signer<'info>,

    #[account(
        mut,
        close = patient,
        seeds = [Session::SEED_PREFIX, patient.key().as_ref(), session.seed.to_le_bytes().as_ref()],
        bump = session.bump,
        has_one = patient @ EscrowError::InvalidPatient,
        has_one = mint @ EscrowError::InvalidMint,
        constraint = session.status != SessionStatus::Active @ EscrowError::SessionStillActive,
    )]
    pub session: Account<'info, Session>,

    pub mint: InterfaceAccount<'info, Mint>,

    /// The session's vault; drained to zero at settlement, closed here
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = session,
        associated_token::token_program = token_program
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> CloseSession<'info> {
    pub fn close_vault(&mut self) -> Result<()> {
        let signer_seeds: [&[&[u8]]; 1] = [&[
            Session::SEED_PREFIX,
            self.patient.to_account_info().key.as_ref(),
            &self.session.seed.to_le_bytes()[..],
            &[self.session.bump],
        ]];

        let close_accounts = CloseAccount {
            account: self.vault.to_account_info(),
            destination: self.patient.to_account_info(),
            authority: self.session.to_account_info(),
        };

        let ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            close_accounts,
            &signer_seeds,
        );
        close_account(ctx)
    }
}
