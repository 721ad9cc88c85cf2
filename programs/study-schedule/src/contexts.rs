use anchor_lang::prelude::*;
use crate::{constants::*, error::ScheduleError, state::*};

/// Create the schedule and all six (empty) weeks
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Becomes the schedule owner
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = 8 + Schedule::INIT_SPACE,
        seeds = [SCHEDULE_SEED],
        bump
    )]
    pub schedule: Account<'info, Schedule>,

    #[account(init, payer = owner, space = 8 + Week::INIT_SPACE, seeds = [WEEK_SEED, &[1u8]], bump)]
    pub week_1: Box<Account<'info, Week>>,

    #[account(init, payer = owner, space = 8 + Week::INIT_SPACE, seeds = [WEEK_SEED, &[2u8]], bump)]
    pub week_2: Box<Account<'info, Week>>,

    #[account(init, payer = owner, space = 8 + Week::INIT_SPACE, seeds = [WEEK_SEED, &[3u8]], bump)]
    pub week_3: Box<Account<'info, Week>>,

    #[account(init, payer = owner, space = 8 + Week::INIT_SPACE, seeds = [WEEK_SEED, &[4u8]], bump)]
    pub week_4: Box<Account<'info, Week>>,

    #[account(init, payer = owner, space = 8 + Week::INIT_SPACE, seeds = [WEEK_SEED, &[5u8]], bump)]
    pub week_5: Box<Account<'info, Week>>,

    #[account(init, payer = owner, space = 8 + Week::INIT_SPACE, seeds = [WEEK_SEED, &[6u8]], bump)]
    pub week_6: Box<Account<'info, Week>>,

    pub system_program: Program<'info, System>,
}

/// Author, grade, unmark or remove a day (owner-only)
#[derive(Accounts)]
pub struct ManageDay<'info> {
    pub owner: Signer<'info>,

    /// Schedule - must match owner
    #[account(
        seeds = [SCHEDULE_SEED],
        bump = schedule.bump,
        constraint = schedule.is_owner(&owner.key()) @ ScheduleError::NotOwner
    )]
    pub schedule: Account<'info, Schedule>,

    /// Week holding the day; its number is checked against the instruction args
    #[account(
        mut,
        seeds = [WEEK_SEED, &[week.number]],
        bump = week.bump
    )]
    pub week: Box<Account<'info, Week>>,
}

/// Start an exam (any signer - the candidate need not be the owner)
#[derive(Accounts)]
pub struct StartExamDay<'info> {
    pub candidate: Signer<'info>,

    #[account(
        mut,
        seeds = [WEEK_SEED, &[week.number]],
        bump = week.bump
    )]
    pub week: Box<Account<'info, Week>>,
}

/// Read a single day
#[derive(Accounts)]
pub struct ReadDay<'info> {
    #[account(seeds = [WEEK_SEED, &[week.number]], bump = week.bump)]
    pub week: Box<Account<'info, Week>>,
}

/// Read owner and candidate
#[derive(Accounts)]
pub struct ReadSchedule<'info> {
    #[account(seeds = [SCHEDULE_SEED], bump = schedule.bump)]
    pub schedule: Account<'info, Schedule>,
}

/// Read the whole grid, weeks in order
///
/// Weeks are taken unchecked and validated by seeds and owner only. The
/// handler decodes each week's header, so no `days` array is loaded.
#[derive(Accounts)]
pub struct ReadGrid<'info> {
    /// CHECK: week 1 PDA owned by this program; header decoded by the handler
    #[account(seeds = [WEEK_SEED, &[1u8]], bump, owner = crate::ID)]
    pub week_1: UncheckedAccount<'info>,

    /// CHECK: week 2 PDA owned by this program; header decoded by the handler
    #[account(seeds = [WEEK_SEED, &[2u8]], bump, owner = crate::ID)]
    pub week_2: UncheckedAccount<'info>,

    /// CHECK: week 3 PDA owned by this program; header decoded by the handler
    #[account(seeds = [WEEK_SEED, &[3u8]], bump, owner = crate::ID)]
    pub week_3: UncheckedAccount<'info>,

    /// CHECK: week 4 PDA owned by this program; header decoded by the handler
    #[account(seeds = [WEEK_SEED, &[4u8]], bump, owner = crate::ID)]
    pub week_4: UncheckedAccount<'info>,

    /// CHECK: week 5 PDA owned by this program; header decoded by the handler
    #[account(seeds = [WEEK_SEED, &[5u8]], bump, owner = crate::ID)]
    pub week_5: UncheckedAccount<'info>,

    /// CHECK: week 6 PDA owned by this program; header decoded by the handler
    #[account(seeds = [WEEK_SEED, &[6u8]], bump, owner = crate::ID)]
    pub week_6: UncheckedAccount<'info>,
}

impl<'info> ReadGrid<'info> {
    /// Decodes the header of every week, in week order.
    pub fn headers(&self) -> Result<[WeekHeader; WEEKS]> {
        let weeks = [
            &self.week_1,
            &self.week_2,
            &self.week_3,
            &self.week_4,
            &self.week_5,
            &self.week_6,
        ];

        let mut headers = [WeekHeader::default(); WEEKS];
        for ((header, week), number) in headers.iter_mut().zip(weeks).zip(WEEK_NUMBERS) {
            *header = WeekHeader::read(&week.try_borrow_data()?[..])?;
            require_eq!(header.number, number, ScheduleError::WeekAccountMismatch);
        }

        Ok(headers)
    }
}
