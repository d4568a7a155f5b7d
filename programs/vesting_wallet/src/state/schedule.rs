use anchor_lang::prelude::*;

use crate::constants::{MAX_EVENTS_PER_MONTH, MAX_SCHEDULE_EVENTS};
use crate::error::VestingError;
use crate::state::{AllowList, WalletConfig};

/// A single scheduled (month, destination, amount) record.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct ScheduleEvent {
    pub month: u32,
    pub destination: Pubkey,
    pub amount: u64,
}

/// One transfer performed (or staged) by `withdraw`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Disbursement {
    pub destination: Pubkey,
    pub amount: u64,
}

/// PDA holding the append-only vesting schedule, in insertion order.
#[account]
#[derive(InitSpace)]
pub struct Schedule {
    #[max_len(MAX_SCHEDULE_EVENTS)]
    pub events: Vec<ScheduleEvent>,
}

impl Schedule {
    pub fn events(&self) -> &[ScheduleEvent] {
        &self.events
    }

    pub fn entries_for_month(&self, month: u32) -> impl Iterator<Item = &ScheduleEvent> + '_ {
        self.events.iter().filter(move |e| e.month == month)
    }

    /// Every entry when `month` is `None`, otherwise that month's entries.
    /// Yields each entry with its insertion index.
    pub fn filtered(
        &self,
        month: Option<u32>,
    ) -> impl Iterator<Item = (usize, &ScheduleEvent)> + '_ {
        self.events
            .iter()
            .enumerate()
            .filter(move |(_, e)| month.map_or(true, |m| e.month == m))
    }

    pub fn disbursements_for_month(&self, month: u32) -> Vec<Disbursement> {
        self.entries_for_month(month)
            .map(|e| Disbursement {
                destination: e.destination,
                amount: e.amount,
            })
            .collect()
    }

    pub fn month_total(&self, month: u32) -> core::result::Result<u64, VestingError> {
        self.entries_for_month(month).try_fold(0u64, |acc, e| {
            acc.checked_add(e.amount).ok_or(VestingError::AmountOverflow)
        })
    }

    /// Appends an entry. Checks run in a fixed order: authorization, lock
    /// state, allow-list membership, then capacity. Nothing is written
    /// unless every check passes.
    pub fn add_event(
        &mut self,
        config: &mut WalletConfig,
        allow_list: &AllowList,
        caller: &Pubkey,
        month: u32,
        destination: Pubkey,
        amount: u64,
    ) -> core::result::Result<ScheduleEvent, VestingError> {
        config.ensure_editable_by(caller)?;
        allow_list.ensure_allowed(&destination)?;

        if self.events.len() >= MAX_SCHEDULE_EVENTS {
            return Err(VestingError::ScheduleFull);
        }
        if self.entries_for_month(month).count() >= MAX_EVENTS_PER_MONTH {
            return Err(VestingError::MonthCapacityExceeded);
        }
        self.month_total(month)?
            .checked_add(amount)
            .ok_or(VestingError::AmountOverflow)?;
        config.record_scheduled(amount)?;

        let event = ScheduleEvent {
            month,
            destination,
            amount,
        };
        self.events.push(event);
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::wallet_config::test_config;

    fn key(b: u8) -> Pubkey {
        Pubkey::new_from_array([b; 32])
    }

    const ADMIN: u8 = 1;
    const ALICE: u8 = 10;
    const BOB: u8 = 11;
    const MALLORY: u8 = 66;

    fn fixture() -> (WalletConfig, AllowList, Schedule) {
        let cfg = test_config(key(ADMIN));
        let list = AllowList {
            wallets: vec![key(ALICE), key(BOB)],
        };
        (cfg, list, Schedule { events: Vec::new() })
    }

    #[test]
    fn accumulates_entries_per_month_in_order() {
        let (mut cfg, list, mut schedule) = fixture();
        schedule.add_event(&mut cfg, &list, &key(ADMIN), 0, key(ALICE), 100).unwrap();
        schedule.add_event(&mut cfg, &list, &key(ADMIN), 1, key(ALICE), 50).unwrap();
        schedule.add_event(&mut cfg, &list, &key(ADMIN), 0, key(BOB), 100).unwrap();
        schedule.add_event(&mut cfg, &list, &key(ADMIN), 0, key(ALICE), 7).unwrap();

        let month0: Vec<_> = schedule.entries_for_month(0).collect();
        assert_eq!(month0.len(), 3);
        assert_eq!(month0[0].destination, key(ALICE));
        assert_eq!(month0[1].destination, key(BOB));
        assert_eq!(month0[2].amount, 7);

        assert_eq!(schedule.entries_for_month(1).count(), 1);
        assert_eq!(schedule.entries_for_month(9).count(), 0);
        assert_eq!(schedule.month_total(0).unwrap(), 207);
        assert_eq!(schedule.month_total(9).unwrap(), 0);
        assert_eq!(cfg.total_scheduled, 257);
        assert_eq!(schedule.events().len(), 4);
        assert_eq!(schedule.events()[1].month, 1);
    }

    #[test]
    fn filter_by_month_or_all() {
        let (mut cfg, list, mut schedule) = fixture();
        schedule.add_event(&mut cfg, &list, &key(ADMIN), 2, key(ALICE), 1).unwrap();
        schedule.add_event(&mut cfg, &list, &key(ADMIN), 3, key(BOB), 2).unwrap();

        assert_eq!(schedule.filtered(None).count(), 2);
        let only: Vec<_> = schedule.filtered(Some(3)).collect();
        assert_eq!(
            only,
            vec![(1, &ScheduleEvent { month: 3, destination: key(BOB), amount: 2 })]
        );
    }

    #[test]
    fn rejects_destination_not_on_allow_list() {
        let (mut cfg, list, mut schedule) = fixture();
        assert_eq!(
            schedule.add_event(&mut cfg, &list, &key(ADMIN), 0, key(MALLORY), 100),
            Err(VestingError::AddressNotAllowed)
        );
        assert_eq!(schedule.entries_for_month(0).count(), 0);
        assert_eq!(cfg.total_scheduled, 0);
    }

    #[test]
    fn check_priority_is_auth_then_lock_then_allow_list() {
        let (mut cfg, list, mut schedule) = fixture();

        // Stranger + unknown destination: Unauthorized wins.
        assert_eq!(
            schedule.add_event(&mut cfg, &list, &key(MALLORY), 0, key(MALLORY), 1),
            Err(VestingError::Unauthorized)
        );

        cfg.lock(&key(ADMIN), 100, [0u8; 32]).unwrap();

        // Stranger + locked + unknown destination: still Unauthorized.
        assert_eq!(
            schedule.add_event(&mut cfg, &list, &key(MALLORY), 0, key(MALLORY), 1),
            Err(VestingError::Unauthorized)
        );
        // Admin + locked + unknown destination: ScheduleLocked.
        assert_eq!(
            schedule.add_event(&mut cfg, &list, &key(ADMIN), 0, key(MALLORY), 1),
            Err(VestingError::ScheduleLocked)
        );
        assert!(schedule.events().is_empty());
    }

    #[test]
    fn locked_schedule_rejects_previously_valid_destinations() {
        let (mut cfg, list, mut schedule) = fixture();
        schedule.add_event(&mut cfg, &list, &key(ADMIN), 0, key(ALICE), 100).unwrap();
        cfg.lock(&key(ADMIN), 100, [0u8; 32]).unwrap();

        for (month, who) in [(0, ALICE), (1, BOB), (u32::MAX, ALICE)] {
            assert_eq!(
                schedule.add_event(&mut cfg, &list, &key(ADMIN), month, key(who), 1),
                Err(VestingError::ScheduleLocked)
            );
        }
        assert_eq!(schedule.events().len(), 1);
    }

    #[test]
    fn month_capacity_is_enforced() {
        let (mut cfg, list, mut schedule) = fixture();
        for _ in 0..MAX_EVENTS_PER_MONTH {
            schedule.add_event(&mut cfg, &list, &key(ADMIN), 4, key(ALICE), 1).unwrap();
        }
        assert_eq!(
            schedule.add_event(&mut cfg, &list, &key(ADMIN), 4, key(BOB), 1),
            Err(VestingError::MonthCapacityExceeded)
        );
        schedule.add_event(&mut cfg, &list, &key(ADMIN), 5, key(BOB), 1).unwrap();
    }

    #[test]
    fn month_total_overflow_is_rejected_without_writing() {
        let (mut cfg, list, mut schedule) = fixture();
        schedule.add_event(&mut cfg, &list, &key(ADMIN), 0, key(ALICE), u64::MAX).unwrap();
        assert_eq!(
            schedule.add_event(&mut cfg, &list, &key(ADMIN), 0, key(BOB), 1),
            Err(VestingError::AmountOverflow)
        );
        assert_eq!(schedule.events().len(), 1);
        assert_eq!(cfg.total_scheduled, u64::MAX);
    }

    #[test]
    fn disbursements_mirror_month_entries() {
        let (mut cfg, list, mut schedule) = fixture();
        schedule.add_event(&mut cfg, &list, &key(ADMIN), 0, key(BOB), 3).unwrap();
        schedule.add_event(&mut cfg, &list, &key(ADMIN), 0, key(ALICE), 4).unwrap();
        assert_eq!(
            schedule.disbursements_for_month(0),
            vec![
                Disbursement { destination: key(BOB), amount: 3 },
                Disbursement { destination: key(ALICE), amount: 4 },
            ]
        );
        assert!(schedule.disbursements_for_month(1).is_empty());
    }
}
