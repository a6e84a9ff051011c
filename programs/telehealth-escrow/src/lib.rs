use anchor_lang::prelude::*;

declare_id!("98Mgs6cgouh5dxmojsxgnkZo2vM983MQYZ4P61r5yDFS");

pub mod errors;
pub mod fee;
pub mod state;
pub use state::*;
pub mod contexts;
pub use contexts::*;

#[program]
pub mod telehealth_escrow {
    use super::*;

    /// Opens a paid session: creates the session record and its vault, and
    /// deposits the full session amount from the patient up front
    /// The doctor and platform identities passed here are bound into the
    /// record and decide who may settle the session later
    pub fn start_session(
        ctx: Context<StartSession>,
        seed: u64,
        session_amount: u64,
    ) -> Result<()> {
        ctx.accounts.save_session(seed, session_amount, &ctx.bumps)?;
        ctx.accounts.deposit(session_amount)
    }

    /// Settles a completed consultation: the doctor bound at start time is
    /// paid the majority share of the vault and the platform takes its
    /// service fee
    /// Only callable while the session is still active, and only by that doctor
    pub fn complete_session(ctx: Context<CompleteSession>) -> Result<()> {
        ctx.accounts.pay_doctor_and_platform()
    }

    /// Cancels an active session: the patient is refunded the majority share
    /// and the platform retains the smaller cancellation fee
    /// Only the original patient may cancel
    pub fn cancel_session(ctx: Context<CancelSession>) -> Result<()> {
        ctx.accounts.refund_patient()
    }

    /// Reclaims the storage of a settled session, returning the rent of the
    /// record and of the empty vault to the patient
    pub fn close_session(ctx: Context<CloseSession>) -> Result<()> {
        ctx.accounts.close_vault()
    }
}
