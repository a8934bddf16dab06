//! Integration tests for the strategy advisor
//!
//! Covers the fixed bias-priority chain, threshold edges, and the
//! shape of recommendations the UI consumes.

use roulette_engine::{
    classify, detect_bias, recommend, strategy_recommendation, BetType, PatternLabel,
    PlacedBet, Pocket, DISCLAIMER, MIN_HISTORY,
};

fn history(values: &[u8]) -> Vec<Pocket> {
    values.iter().map(|&n| Pocket::new_unchecked(n)).collect()
}

#[test]
fn all_red_all_odd_history_reports_color_first() {
    // 1,3,5,7,9 are simultaneously all red and all odd; the chain
    // checks color before parity, so color wins
    let advice = strategy_recommendation(&history(&[1, 3, 5, 7, 9]));
    assert_eq!(advice.pattern, PatternLabel::RedBias);
    assert!(!advice.suggested_bets.is_empty());
    let types: Vec<BetType> = advice.suggested_bets.iter().map(|s| s.bet_type).collect();
    assert!(types.contains(&BetType::Black), "balance bet missing");
    assert!(types.contains(&BetType::Red), "follow bet missing");
}

#[test]
fn empty_history_yields_generic_fallback() {
    let advice = strategy_recommendation(&[]);
    assert_eq!(advice.pattern, PatternLabel::None);
    assert!(!advice.suggested_bets.is_empty());
    assert!(advice.explanation.contains(DISCLAIMER));
}

#[test]
fn histories_below_minimum_never_report_patterns() {
    for len in 0..MIN_HISTORY {
        let window: Vec<u8> = std::iter::repeat(7).take(len).collect();
        assert_eq!(
            detect_bias(&classify(&history(&window))),
            PatternLabel::None,
            "window of {} spins should stay quiet",
            len
        );
    }
    // one more spin crosses the minimum and the all-red window reports
    let window: Vec<u8> = std::iter::repeat(7).take(MIN_HISTORY).collect();
    assert_eq!(
        detect_bias(&classify(&history(&window))),
        PatternLabel::RedBias
    );
}

#[test]
fn dozen_threshold_sits_below_the_outside_threshold() {
    // 3 of 6 spins in the third dozen: half the window, below the 0.70
    // outside threshold but exactly at the 0.50 dozen threshold
    let advice = strategy_recommendation(&history(&[25, 27, 36, 2, 13, 4]));
    assert_eq!(advice.pattern, PatternLabel::DozenBias(3));
    // balance onto both other dozens plus a follow bet
    assert_eq!(advice.suggested_bets.len(), 3);
}

#[test]
fn zero_in_window_suggests_zero_coverage() {
    let advice = strategy_recommendation(&history(&[0, 1, 2, 19, 24]));
    assert_eq!(advice.pattern, PatternLabel::ZeroPresence);
    for suggestion in &advice.suggested_bets {
        assert_eq!(suggestion.reference, Some(Pocket::ZERO));
    }
}

#[test]
fn every_advisory_output_carries_the_disclaimer() {
    let windows: Vec<Vec<Pocket>> = vec![
        history(&[]),
        history(&[1, 3, 5, 7, 9]),
        history(&[2, 4, 6, 8, 10]),
        history(&[0, 1, 2, 19, 24]),
        history(&[25, 27, 36, 2, 13, 4]),
    ];
    for window in windows {
        let advice = strategy_recommendation(&window);
        assert!(
            advice.explanation.contains(DISCLAIMER),
            "missing disclaimer for pattern {:?}",
            advice.pattern
        );
    }
    for bet_type in BetType::ALL {
        let reference = bet_type
            .requires_reference()
            .then(|| Pocket::new_unchecked(17));
        let bet = PlacedBet::new(1, bet_type, reference, 10).unwrap();
        let rec = recommend(Some(&bet));
        assert!(rec.explanation.contains(DISCLAIMER), "{:?}", bet_type);
    }
    assert!(recommend(None).explanation.contains(DISCLAIMER));
}

#[test]
fn recommendation_is_idempotent() {
    let bet = PlacedBet::new(1, BetType::Corner, Some(Pocket::new_unchecked(8)), 25).unwrap();
    assert_eq!(recommend(Some(&bet)), recommend(Some(&bet)));
    let window = history(&[4, 18, 33, 0, 21]);
    assert_eq!(
        strategy_recommendation(&window),
        strategy_recommendation(&window)
    );
}

#[test]
fn advisory_calls_emit_under_a_subscriber() {
    // Install a real subscriber so the debug!/trace! instrumentation
    // paths run during the suite instead of compiling to no-ops.
    // try_init tolerates another test having installed one first.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();

    let advice = strategy_recommendation(&history(&[1, 3, 5, 7, 9]));
    assert_eq!(advice.pattern, PatternLabel::RedBias);
    let bet = PlacedBet::new(1, BetType::Red, None, 10).unwrap();
    assert!(recommend(Some(&bet)).explanation.contains(DISCLAIMER));
}

#[test]
fn advice_serializes_for_the_ui() {
    let advice = strategy_recommendation(&history(&[1, 3, 5, 7, 9]));
    let json = serde_json::to_string(&advice).unwrap();
    let back: roulette_engine::StrategyAdvice = serde_json::from_str(&json).unwrap();
    assert_eq!(advice, back);
}
