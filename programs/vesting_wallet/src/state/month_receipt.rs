use anchor_lang::prelude::*;

use crate::error::VestingError;

/// Per-month execution marker, seeded by the month index.
///
/// Created on the first `withdraw` for the month; `executed` flips once and
/// never back.
#[account]
#[derive(InitSpace)]
pub struct MonthReceipt {
    pub month: u32,
    pub executed: bool,
    pub executed_at: i64,
    /// Total amount moved for the month.
    pub total: u64,
    pub transfer_count: u16,
    pub bump: u8,
}

impl MonthReceipt {
    pub fn ensure_pending(&self) -> core::result::Result<(), VestingError> {
        if self.executed {
            return Err(VestingError::AlreadyExecuted);
        }
        Ok(())
    }

    pub fn mark_executed(
        &mut self,
        month: u32,
        now: i64,
        total: u64,
        transfer_count: u16,
    ) -> core::result::Result<(), VestingError> {
        self.ensure_pending()?;
        self.month = month;
        self.executed = true;
        self.executed_at = now;
        self.total = total;
        self.transfer_count = transfer_count;
        Ok(())
    }
}
