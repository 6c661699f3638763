//! End-to-end match flow tests.
//!
//! These tests drive the engine the way a UI layer would: name submission,
//! hand selection per round, acknowledgment between rounds, and restart
//! from the end screen.

use rps_engine::{
    Hand, Match, MatchBuilder, MatchError, MatchPhase, MatchSession, NicknameError,
    RoundOutcome, Score, Side,
};

/// Play a full match with the session guard, acknowledging every popup.
#[test]
fn test_full_match_through_session() {
    let mut session = MatchSession::new(Match::new(7));

    // Name screen: blank submission re-prompts, valid one starts play.
    assert_eq!(
        session.start(""),
        Err(MatchError::Nickname(NicknameError::Empty))
    );
    session.start("Ada").unwrap();
    assert_eq!(session.game().phase(), MatchPhase::InProgress);

    let mut rounds = 0;
    loop {
        let report = session.play_round(Hand::Rock).unwrap();
        rounds += 1;

        // Every report carries a displayable banner and the updated score.
        assert!(!report.banner().is_empty());
        assert_eq!(report.score, session.game().score());
        assert_eq!(report.round, rounds);

        if report.is_final() {
            break;
        }
        session.acknowledge();
    }

    // End screen: verdict with message, no more rounds, then restart.
    let verdict = session.game().verdict().expect("match finished");
    assert!(verdict.score.reaches(3));
    match verdict.winner {
        Side::Player => assert!(verdict.message().contains("Ada")),
        Side::Opponent => assert!(verdict.message().contains("CPU")),
    }

    assert_eq!(
        session.play_round(Hand::Paper),
        Err(MatchError::AlreadyFinished)
    );

    session.reset().unwrap();
    assert_eq!(session.game().phase(), MatchPhase::NotStarted);
    assert_eq!(session.game().score(), Score::ZERO);
}

/// A match finishes exactly when one seat reaches the threshold, with the
/// loser strictly below it.
#[test]
fn test_match_terminates_exactly_at_threshold() {
    for seed in 0..20u64 {
        let mut game = Match::new(seed);
        game.start("Ada").unwrap();

        while !game.is_over() {
            game.play_round(Hand::Scissors).unwrap();
        }

        let score = game.score();
        let (winner, loser) = if score.player > score.opponent {
            (score.player, score.opponent)
        } else {
            (score.opponent, score.player)
        };
        assert_eq!(winner, 3, "seed {}: winner must have exactly 3", seed);
        assert!(loser < 3, "seed {}: loser must be below threshold", seed);
    }
}

/// Round history matches the reported outcomes, round for round.
#[test]
fn test_round_history_is_complete() {
    let mut game = Match::new(42);
    game.start("Ada").unwrap();

    let mut reported = Vec::new();
    while !game.is_over() {
        reported.push(game.play_round(Hand::Paper).unwrap());
    }

    let records = game.rounds();
    assert_eq!(records.len(), reported.len());
    for (record, report) in records.iter().zip(&reported) {
        assert_eq!(record.number, report.round);
        assert_eq!(record.player_hand, Hand::Paper);
        assert_eq!(record.opponent_hand, report.opponent_hand);
        assert_eq!(record.outcome, report.outcome);
        assert_eq!(record.score_after, report.score);
    }

    // Score is the running sum of decisive outcomes.
    let player_wins = records
        .iter()
        .filter(|r| r.outcome == RoundOutcome::PlayerWins)
        .count() as u32;
    let opponent_wins = records
        .iter()
        .filter(|r| r.outcome == RoundOutcome::OpponentWins)
        .count() as u32;
    assert_eq!(game.score(), Score::new(player_wins, opponent_wins));
}

/// A custom win threshold moves the finish line.
#[test]
fn test_custom_win_threshold() {
    let mut game = MatchBuilder::new().win_threshold(1).build(42);
    game.start("Ada").unwrap();

    // With threshold 1 the first decisive round ends the match.
    loop {
        let report = game.play_round(Hand::Rock).unwrap();
        if report.outcome != RoundOutcome::Draw {
            assert!(report.is_final());
            break;
        }
    }
    assert!(game.is_over());
    assert_eq!(game.score().player.max(game.score().opponent), 1);
}

/// Two matches with the same seed and same plays are identical.
#[test]
fn test_same_seed_same_match() {
    let plays = [Hand::Rock, Hand::Paper, Hand::Scissors];

    let mut game1 = Match::new(99);
    let mut game2 = Match::new(99);
    game1.start("Ada").unwrap();
    game2.start("Grace").unwrap();

    for &hand in plays.iter().cycle().take(30) {
        if game1.is_over() {
            break;
        }
        let r1 = game1.play_round(hand).unwrap();
        let r2 = game2.play_round(hand).unwrap();
        assert_eq!(r1.opponent_hand, r2.opponent_hand);
        assert_eq!(r1.outcome, r2.outcome);
        assert_eq!(r1.score, r2.score);
    }

    assert_eq!(game1.score(), game2.score());
}

/// Nickname is fixed at start and survives until reset.
#[test]
fn test_nickname_immutable_for_the_match() {
    let mut game = Match::new(42);
    game.start("Ada").unwrap();
    assert_eq!(game.nickname().unwrap().as_str(), "Ada");

    game.play_round(Hand::Rock).unwrap();
    assert_eq!(game.nickname().unwrap().as_str(), "Ada");

    while !game.is_over() {
        game.play_round(Hand::Rock).unwrap();
    }
    game.reset().unwrap();
    assert!(game.nickname().is_none());
}
