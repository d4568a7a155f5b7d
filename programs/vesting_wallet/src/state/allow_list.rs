use anchor_lang::prelude::*;

use crate::constants::MAX_ALLOWED_WALLETS;
use crate::error::VestingError;
use crate::state::WalletConfig;

/// PDA holding the destinations eligible for vesting entries.
///
/// Membership only grows; insertion order is kept for enumeration.
#[account]
#[derive(InitSpace)]
pub struct AllowList {
    #[max_len(MAX_ALLOWED_WALLETS)]
    pub wallets: Vec<Pubkey>,
}

impl AllowList {
    pub fn contains(&self, wallet: &Pubkey) -> bool {
        self.wallets.iter().any(|w| w == wallet)
    }

    pub fn wallets(&self) -> &[Pubkey] {
        &self.wallets
    }

    /// Admin-only, unlocked-only add. Authorization is checked before lock
    /// state, and both before membership, so a duplicate after lock still
    /// fails. Returns `false` when `wallet` was already present.
    pub fn add(
        &mut self,
        config: &WalletConfig,
        caller: &Pubkey,
        wallet: Pubkey,
    ) -> core::result::Result<bool, VestingError> {
        config.ensure_editable_by(caller)?;
        self.insert(wallet)
    }

    /// Adds `wallet` if absent. Returns `false` when it was already present.
    fn insert(&mut self, wallet: Pubkey) -> core::result::Result<bool, VestingError> {
        if self.contains(&wallet) {
            return Ok(false);
        }
        if self.wallets.len() >= MAX_ALLOWED_WALLETS {
            return Err(VestingError::AllowListFull);
        }
        self.wallets.push(wallet);
        Ok(true)
    }

    pub fn ensure_allowed(&self, wallet: &Pubkey) -> core::result::Result<(), VestingError> {
        if !self.contains(wallet) {
            return Err(VestingError::AddressNotAllowed);
        }
        Ok(())
    }
}
