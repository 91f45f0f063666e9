mod common;

use binpoll::instructions::utils::vote_price;
use common::*;

#[test]
fn voting_window_boundaries() {
    let poll = make_poll(2, 10_000_000, 100, 2_000_000, 1_000);

    assert!(!poll.is_ended(999));
    assert!(poll.is_ended(1_000)); // closes exactly at end_time
    assert!(poll.is_ended(1_001));

    assert!(poll.assert_votable(999).is_ok());
    let at_end = poll.assert_votable(1_000);
    assert!(format!("{:?}", at_end).contains("PollEnded"));
}

#[test]
fn capacity_is_enforced_and_never_exceeded() {
    let mut poll = make_poll(2, 10_000_000, 3, 2_000_000, 1_000);

    vote_n_times(&mut poll, 0, 3);
    assert_eq!(poll.current_votes, 3);
    assert!(poll.is_full());

    // Every further attempt is rejected with the capacity error and the
    // counter stays exactly at max.
    for _ in 0..5 {
        let gate = poll.assert_votable(500);
        assert!(format!("{:?}", gate).contains("PollFull"));
    }
    assert_eq!(poll.current_votes, 3);
}

#[test]
fn voter_pool_is_the_sum_of_recorded_payments() {
    let mut poll = make_poll(3, 10_000_000, 50, 2_000_000, 1_000);

    let mut expected_pool = 0u64;
    for i in 0..50u32 {
        let price = vote_price(poll.base_price, poll.current_votes, poll.max_votes).unwrap();
        poll.record_vote((i % 3) as u8, price).unwrap();
        expected_pool += price;
    }

    assert_eq!(poll.voter_pool, expected_pool);
    assert_eq!(poll.current_votes, 50);
    assert_eq!(poll.option_tallies.iter().sum::<u32>(), 50);
}

#[test]
fn record_vote_rejects_out_of_range_option() {
    let mut poll = make_poll(2, 10_000_000, 10, 2_000_000, 1_000);

    let result = poll.record_vote(2, 10_000_000);
    assert!(format!("{:?}", result).contains("InvalidOptionIndex"));
    assert_eq!(poll.current_votes, 0);
    assert_eq!(poll.voter_pool, 0);
}

#[test]
fn winner_is_the_strict_maximum() {
    let mut poll = make_poll(4, 10_000_000, 100, 2_000_000, 1_000);
    poll.option_tallies = vec![2, 9, 4, 9];

    let (winner, winners) = poll.decide_winner();
    assert_eq!(winner, 1); // first of the tied maxima
    assert_eq!(winners, 9);
}

#[test]
fn each_vote_is_priced_at_its_own_position() {
    // The nth vote pays the price quoted with n-1 votes on the books, so a
    // full three-vote poll at base 0.01 collects 0.01 + curve steps.
    let mut poll = make_poll(2, 10_000_000, 3, 2_000_000, 1_000);

    let mut paid = Vec::new();
    for _ in 0..3 {
        let price = vote_price(poll.base_price, poll.current_votes, poll.max_votes).unwrap();
        poll.record_vote(0, price).unwrap();
        paid.push(price);
    }

    // base * (3+0)/3, base * (3+4)/3, base * (3+8)/3
    assert_eq!(paid, vec![10_000_000, 23_333_333, 36_666_666]);
    assert_eq!(poll.voter_pool, 70_000_000 - 1);
}
