use anchor_lang::prelude::*;

use crate::error::VestingError;

/// One-way schedule lock. The timestamp only exists once locked.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum LockState {
    Unlocked,
    Locked { locked_at: i64 },
}

/// Singleton configuration PDA; also the vault authority.
#[account]
#[derive(InitSpace)]
pub struct WalletConfig {
    /// Deployer. Fixed at initialization, no transfer path exists.
    pub admin: Pubkey,
    /// Token mint being disbursed.
    pub mint: Pubkey,
    /// Custody token account (PDA, authority = this account).
    pub vault: Pubkey,
    /// Length of one vesting period in seconds.
    pub month_duration: i64,
    pub lock: LockState,
    /// blake3 digest of the schedule, recorded at lock time.
    pub schedule_digest: [u8; 32],
    /// Sum of every scheduled amount.
    pub total_scheduled: u64,
    /// Sum of every amount disbursed so far.
    pub total_released: u64,
    pub bump: u8,
    pub vault_bump: u8,
}

impl WalletConfig {
    pub fn is_locked(&self) -> bool {
        matches!(self.lock, LockState::Locked { .. })
    }

    /// Lock timestamp, `None` while the schedule is still editable.
    pub fn locked_at(&self) -> Option<i64> {
        match self.lock {
            LockState::Locked { locked_at } => Some(locked_at),
            LockState::Unlocked => None,
        }
    }

    pub fn ensure_admin(&self, caller: &Pubkey) -> core::result::Result<(), VestingError> {
        if *caller != self.admin {
            return Err(VestingError::Unauthorized);
        }
        Ok(())
    }

    pub fn ensure_unlocked(&self) -> core::result::Result<(), VestingError> {
        if self.is_locked() {
            return Err(VestingError::ScheduleLocked);
        }
        Ok(())
    }

    /// Admin-only mutation gate: authorization first, lock state second.
    pub fn ensure_editable_by(&self, caller: &Pubkey) -> core::result::Result<(), VestingError> {
        self.ensure_admin(caller)?;
        self.ensure_unlocked()
    }

    /// Freezes the schedule. Not idempotent: a second call fails.
    pub fn lock(
        &mut self,
        caller: &Pubkey,
        now: i64,
        schedule_digest: [u8; 32],
    ) -> core::result::Result<(), VestingError> {
        self.ensure_editable_by(caller)?;
        self.lock = LockState::Locked { locked_at: now };
        self.schedule_digest = schedule_digest;
        Ok(())
    }

    pub fn record_scheduled(&mut self, amount: u64) -> core::result::Result<(), VestingError> {
        self.total_scheduled = self
            .total_scheduled
            .checked_add(amount)
            .ok_or(VestingError::AmountOverflow)?;
        Ok(())
    }

    pub fn record_released(&mut self, amount: u64) -> core::result::Result<(), VestingError> {
        self.total_released = self
            .total_released
            .checked_add(amount)
            .ok_or(VestingError::AmountOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn test_config(admin: Pubkey) -> WalletConfig {
    WalletConfig {
        admin,
        mint: Pubkey::new_from_array([0xAA; 32]),
        vault: Pubkey::new_from_array([0xBB; 32]),
        month_duration: crate::constants::DEFAULT_MONTH_DURATION,
        lock: LockState::Unlocked,
        schedule_digest: [0u8; 32],
        total_scheduled: 0,
        total_released: 0,
        bump: 255,
        vault_bump: 254,
    }
}
