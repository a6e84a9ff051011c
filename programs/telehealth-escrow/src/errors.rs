use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("The session amount must be greater than zero.")]
    InvalidSessionAmount,
    #[msg("The patient's token account does not hold the session amount.")]
    InsufficientFunds,
    #[msg("Invalid mint address provided.")]
    InvalidMint,
    #[msg("Invalid patient address provided.")]
    InvalidPatient,
    #[msg("Invalid doctor address provided.")]
    InvalidDoctor,
    #[msg("Invalid platform address provided.")]
    InvalidPlatform,
    #[msg("The session is not active.")]
    SessionNotActive,
    #[msg("The session is still active and cannot be closed.")]
    SessionStillActive,
    #[msg("Arithmetic overflow while splitting the vault balance.")]
    ArithmeticOverflow,
}
