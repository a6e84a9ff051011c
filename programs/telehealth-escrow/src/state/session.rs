use anchor_lang::prelude::*;

/// Where a session sits in its lifecycle
/// Active sessions hold the deposit in the vault; the two terminal states
/// are reached by exactly one of complete/cancel and are never left again
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum SessionStatus {
    Active,
    Completed,
    Cancelled,
}

/// The escrow record for one paid telehealth session, which includes:
/// - the patient-chosen seed used to derive this record's address,
/// - the three parties (patient, doctor, platform),
/// - the token mint and the amount deposited,
/// - the lifecycle status,
/// - and a bump seed cached for vault-authority signing.
///
/// The record's PDA is the sole authority over the session vault; no
/// private key can move the deposit
#[account]
#[derive(InitSpace)]
pub struct Session {
    pub seed: u64,
    pub patient: Pubkey,
    pub doctor: Pubkey,
    pub platform: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub status: SessionStatus,
    pub bump: u8,
}

impl Session {
    /// Domain tag for the record PDA, shared between account constraints
    /// and vault-authority signer seeds
    pub const SEED_PREFIX: &'static [u8] = b"session";

    /// Derives the record address for a (patient, seed) pair
    /// Any party can recompute this off-chain from public inputs
    pub fn derive_address(patient: &Pubkey, seed: u64, program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[Self::SEED_PREFIX, patient.as_ref(), &seed.to_le_bytes()],
            program_id,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let patient = Pubkey::new_unique();
        let first = Session::derive_address(&patient, 42, &crate::ID);
        let second = Session::derive_address(&patient, 42, &crate::ID);
        assert_eq!(first, second);
    }

    #[test]
    fn derivation_separates_inputs() {
        let patient = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let base = Session::derive_address(&patient, 42, &crate::ID).0;
        assert_ne!(base, Session::derive_address(&other, 42, &crate::ID).0);
        assert_ne!(base, Session::derive_address(&patient, 43, &crate::ID).0);
    }
}
