mod common;

use assert_matches::assert_matches;
use binpoll::instructions::settle_poll::apply_settlement;
use binpoll::instructions::utils::{reward_share, split_pool};
use common::*;

#[test]
fn split_components_sum_to_total_exactly() {
    // Fund conservation across awkward totals, including ones that do not
    // divide evenly by the basis-point shares.
    for total in [0u64, 1, 3, 101, 32_000_000, 999_999_999_999, u64::MAX] {
        let split = split_pool(total, WINNER_SHARE_BPS, PLATFORM_FEE_BPS, CREATOR_FEE_BPS).unwrap();
        assert_eq!(
            split.winner_pool + split.platform_fee + split.creator_fee,
            total
        );
    }
}

#[test]
fn split_rounding_remainder_goes_to_winner_pool() {
    // 101 * 10% floors to 10 and 101 * 5% floors to 5; the two lost
    // fractions land in the winner pool, not nowhere.
    let split = split_pool(101, WINNER_SHARE_BPS, PLATFORM_FEE_BPS, CREATOR_FEE_BPS).unwrap();
    assert_eq!(split.platform_fee, 10);
    assert_eq!(split.creator_fee, 5);
    assert_eq!(split.winner_pool, 86);
}

#[test]
fn split_rejects_partial_percentages() {
    assert_matches!(split_pool(1_000, 8_000, 1_000, 500), Err(_));
    assert_matches!(split_pool(1_000, 9_000, 1_000, 500), Err(_));
}

#[test]
fn reward_share_floors_and_reports_remainder() {
    let (reward, remainder) = reward_share(27_200_000, 2).unwrap();
    assert_eq!(reward, 13_600_000);
    assert_eq!(remainder, 0);

    let (reward, remainder) = reward_share(100, 3).unwrap();
    assert_eq!(reward, 33);
    assert_eq!(remainder, 1);

    assert_matches!(reward_share(100, 0), Err(_));
}

#[test]
fn settles_a_contested_poll() {
    // Creator stakes 0.002, three voters pay 0.03 in total, option 0 takes
    // two of the three votes: pool of 0.032 splits 85/10/5.
    let mut poll = make_poll(2, 10_000_000, 100, 2_000_000, 1_000);
    let mut config = make_config();

    poll.option_tallies = vec![2, 1];
    poll.current_votes = 3;
    poll.voter_pool = 30_000_000;

    apply_settlement(&mut poll, &mut config, 1_000).unwrap();

    assert!(poll.settled);
    assert_eq!(poll.winning_option, Some(0));
    assert_eq!(poll.total_winners, 2);
    assert_eq!(poll.winner_pool, 27_200_000);
    assert_eq!(poll.reward_per_winner, 13_600_000);
    assert_eq!(poll.platform_fee_amount, 3_200_000);
    assert_eq!(poll.creator_fee_amount, 1_600_000);
    assert_eq!(poll.settled_at, 1_000);

    // Nothing created, nothing destroyed.
    assert_eq!(
        poll.reward_per_winner * poll.total_winners as u64
            + poll.platform_fee_amount
            + poll.creator_fee_amount,
        32_000_000
    );

    // Platform stats roll up at settlement.
    assert_eq!(config.total_volume, 32_000_000);
    assert_eq!(config.total_fees_collected, 3_200_000);
}

#[test]
fn tie_breaks_to_lowest_option_index() {
    let mut poll = make_poll(3, 10_000_000, 100, 2_000_000, 1_000);
    let mut config = make_config();

    poll.option_tallies = vec![1, 3, 3];
    poll.current_votes = 7;
    poll.voter_pool = 70_000_000;

    apply_settlement(&mut poll, &mut config, 1_000).unwrap();
    assert_eq!(poll.winning_option, Some(1));
    assert_eq!(poll.total_winners, 3);
}

#[test]
fn settles_a_poll_with_zero_votes() {
    // Nobody voted. Settlement must not divide by zero, and the winner
    // share is earmarked back to the creator.
    let mut poll = make_poll(2, 10_000_000, 100, 2_000_000, 1_000);
    let mut config = make_config();

    apply_settlement(&mut poll, &mut config, 1_000).unwrap();

    assert!(poll.settled);
    assert_eq!(poll.winning_option, Some(0));
    assert_eq!(poll.total_winners, 0);
    assert_eq!(poll.reward_per_winner, 0);
    assert_eq!(poll.winner_pool, 1_700_000);
    assert_eq!(poll.platform_fee_amount, 200_000);
    assert_eq!(poll.creator_fee_amount, 100_000);

    // The creator refund plus fees still account for the whole deposit.
    assert_eq!(
        poll.winner_pool + poll.platform_fee_amount + poll.creator_fee_amount,
        2_000_000
    );
}

#[test]
fn reward_division_remainder_accrues_to_platform() {
    let mut poll = make_poll(2, 10_000_000, 100, 2_000_000, 1_000);
    let mut config = make_config();

    // Total pool 32_000_001 -> winner pool 27_200_001, split across 2
    // winners leaves 1 unit of dust.
    poll.option_tallies = vec![2, 1];
    poll.current_votes = 3;
    poll.voter_pool = 30_000_001;

    apply_settlement(&mut poll, &mut config, 1_000).unwrap();

    assert_eq!(poll.reward_per_winner, 13_600_000);
    assert_eq!(poll.winner_pool, 27_200_000);
    assert_eq!(poll.platform_fee_amount, 3_200_001);
    assert_eq!(
        poll.reward_per_winner * 2 + poll.platform_fee_amount + poll.creator_fee_amount,
        32_000_001
    );
}

#[test]
fn fund_conservation_holds_across_poll_shapes() {
    for (tallies, voter_pool, deposit) in [
        (vec![5u32, 0, 0], 17u64, 3u64),
        (vec![1, 1], 999_999, 1_000_000),
        (vec![0, 0, 0, 0, 0], 0, 5_000_000),
        (vec![7, 11, 2], 123_456_789, 1),
        (vec![3, 3, 3, 3, 3], 1_000_000_007, 999),
    ] {
        let votes: u32 = tallies.iter().sum();
        let mut poll = make_poll(tallies.len(), 10_000_000, 1_000, deposit, 1_000);
        let mut config = make_config();
        poll.option_tallies = tallies;
        poll.current_votes = votes;
        poll.voter_pool = voter_pool;

        apply_settlement(&mut poll, &mut config, 1_000).unwrap();

        let refunded = if poll.total_winners == 0 {
            poll.winner_pool
        } else {
            0
        };
        assert_eq!(
            poll.reward_per_winner * poll.total_winners as u64
                + refunded
                + poll.platform_fee_amount
                + poll.creator_fee_amount,
            deposit + voter_pool
        );
    }
}

#[test]
fn refuses_to_settle_twice() {
    let mut poll = make_poll(2, 10_000_000, 100, 2_000_000, 1_000);
    let mut config = make_config();

    poll.option_tallies = vec![2, 1];
    poll.current_votes = 3;
    poll.voter_pool = 30_000_000;

    apply_settlement(&mut poll, &mut config, 1_000).unwrap();
    let snapshot = (
        poll.winning_option,
        poll.total_winners,
        poll.reward_per_winner,
        poll.settled_at,
    );

    let second = apply_settlement(&mut poll, &mut config, 2_000);
    assert!(format!("{:?}", second).contains("AlreadySettled"));

    // The recorded result is untouched by the refused attempt.
    assert_eq!(
        snapshot,
        (
            poll.winning_option,
            poll.total_winners,
            poll.reward_per_winner,
            poll.settled_at,
        )
    );
    assert_eq!(config.total_volume, 32_000_000);
}

#[test]
fn refuses_to_settle_before_end_time() {
    let mut poll = make_poll(2, 10_000_000, 100, 2_000_000, 1_000);
    let mut config = make_config();

    let result = apply_settlement(&mut poll, &mut config, 999);
    assert!(format!("{:?}", result).contains("PollStillActive"));
    assert!(!poll.settled);
    assert_eq!(poll.winning_option, None);
}

#[test]
fn overlapping_crank_ticks_settle_exactly_once() {
    // Two ticks race over the same ended poll. The second observes the
    // settled flag and must be a no-op, the same skip the crank performs.
    let mut poll = make_poll(2, 10_000_000, 100, 2_000_000, 1_000);
    let mut config = make_config();
    poll.option_tallies = vec![4, 1];
    poll.current_votes = 5;
    poll.voter_pool = 60_000_000;

    let mut settlements = 0u32;
    for tick_now in [1_000i64, 1_060] {
        if poll.settled {
            continue;
        }
        if apply_settlement(&mut poll, &mut config, tick_now).is_ok() {
            settlements += 1;
        }
    }

    assert_eq!(settlements, 1);
    assert_eq!(poll.settled_at, 1_000);
    assert_eq!(config.total_volume, 62_000_000);
}
