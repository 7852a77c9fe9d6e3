use super::*;

#[test]
fn test_regulation_win_either_side() {
    assert_eq!(classify(13, 0, false, None), MatchOutcome::Win);
    assert_eq!(classify(0, 13, false, None), MatchOutcome::Win);
    assert_eq!(classify(7, 6, false, None), MatchOutcome::Win);
}

#[test]
fn test_twelve_rounds_is_a_loss() {
    assert_eq!(classify(6, 6, false, None), MatchOutcome::Loss);
    assert_eq!(classify(0, 0, false, None), MatchOutcome::Loss);
    assert_eq!(classify(12, 0, false, None), MatchOutcome::Loss);
}

#[test]
fn test_high_totals_without_overtime_flag() {
    // 25 total is labelled an overtime win even though the flag is off
    assert_eq!(classify(13, 12, false, None), MatchOutcome::OvertimeWin);
    assert_eq!(classify(12, 13, false, None), MatchOutcome::OvertimeWin);
    assert_eq!(classify(12, 12, false, None), MatchOutcome::OvertimeLoss);
    assert_eq!(classify(24, 0, false, None), MatchOutcome::OvertimeLoss);
}

#[test]
fn test_overtime_winner_decides_label() {
    for (t, ct) in [(0, 0), (6, 6), (13, 12), (15, 15), (100, 3)] {
        assert_eq!(classify(t, ct, true, Some(Side::T)), MatchOutcome::OvertimeWinT);
        assert_eq!(classify(t, ct, true, Some(Side::CT)), MatchOutcome::OvertimeWinCt);
        assert_eq!(classify(t, ct, true, None), MatchOutcome::OvertimeLoss);
    }
}

#[test]
fn test_winner_ignored_without_overtime_flag() {
    assert_eq!(classify(13, 0, false, Some(Side::CT)), MatchOutcome::Win);
    assert_eq!(classify(3, 3, false, Some(Side::T)), MatchOutcome::Loss);
}

#[test]
fn test_extreme_totals_do_not_overflow() {
    assert_eq!(classify(u32::MAX, u32::MAX, false, None), MatchOutcome::OvertimeWin);
}
