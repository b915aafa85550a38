use lib_game::*;
use macroquad::prelude::*;

const BOUNDS: Rect = Rect {
    x: 0.0,
    y: 0.0,
    w: 900.0,
    h: 600.0,
};
const FRAME: f32 = 1.0 / 60.0;

/// Clicks a shape of `kind` that nothing else overlaps, so the outcome
/// of the click is known in advance. Returns whether a click happened.
fn click_clear_shape(round: &mut Round, kind: ShapeKind) -> bool {
    let covered = |round: &Round, idx: usize, pos: Vec2| {
        round
            .shapes
            .iter()
            .enumerate()
            .any(|(other, shape)| other != idx && shape.hit_test(pos))
            || round.powerups.iter().any(|pu| pu.hit_test(pos))
    };
    let view: &Round = round;
    let target = view
        .shapes
        .iter()
        .enumerate()
        .find(|(idx, shape)| {
            shape.kind == kind && BOUNDS.contains(shape.pos) && !covered(view, *idx, shape.pos)
        })
        .map(|(_, shape)| shape.pos);

    match target {
        Some(pos) => {
            round.update(FRAME, &InputModel::clicked_at(pos));
            true
        }
        None => {
            round.update(FRAME, &InputModel::default());
            false
        }
    }
}

#[test]
fn test_normal_round_ends_by_bad_clicks() {
    let mut round = Round::new(GameMode::Normal, GameCfg::default(), BOUNDS, 1234);
    let mut frames = 0;

    while round.state() == RoundState::Playing {
        click_clear_shape(&mut round, ShapeKind::Bad);
        frames += 1;
        assert!(frames < 60 * 600, "the round never ended");
    }

    assert_eq!(round.state(), RoundState::GameOver);
    assert!(round.player.lives <= 0);
    assert!(round.events().contains(&RoundEvent::Ended(RoundState::GameOver)));
}

#[test]
fn test_timed_round_runs_out() {
    let mut round = Round::new(GameMode::Timed, GameCfg::default(), BOUNDS, 99);
    let mut frames = 0;

    while round.state() == RoundState::Playing {
        click_clear_shape(&mut round, ShapeKind::Bad);
        frames += 1;
        assert!(round.clock.countdown >= 0.0);
    }

    assert_eq!(round.state(), RoundState::TimeUp);
    assert_eq!(round.countdown_secs(), 0);
    // 60 seconds worth of frames, give or take float error
    assert!((3590..=3610).contains(&frames), "{frames}");
}

#[test]
fn test_good_clicks_only_score() {
    let mut round = Round::new(GameMode::Endless, GameCfg::default(), BOUNDS, 7);
    let mut expected = 0;

    for _ in 0..(60 * 30) {
        let before = round.player.score;
        if click_clear_shape(&mut round, ShapeKind::Good) {
            assert_eq!(round.player.score - before, 10);
            expected += 10;
        }
    }

    assert_eq!(round.player.score, expected);
    assert_eq!(round.player.lives, 3);
    assert_eq!(round.state(), RoundState::Playing);
}

#[test]
fn test_powerups_show_up() {
    let mut round = Round::new(GameMode::Normal, GameCfg::default(), BOUNDS, 5);

    for _ in 0..(60 * 13) {
        round.update(FRAME, &InputModel::default());
    }

    assert_eq!(round.powerups.len(), 1);

    let powerup = round.powerups[0];
    let lives = round.player.lives;
    round.update(FRAME, &InputModel::clicked_at(powerup.pos));

    assert!(round.powerups.is_empty());
    assert!(round.events().contains(&RoundEvent::PowerUpCollected {
        pos: powerup.pos,
        kind: powerup.kind,
    }));
    match powerup.kind {
        PowerUpKind::Freeze => assert!(round.player.frozen()),
        PowerUpKind::Double => assert!(round.player.doubled()),
        PowerUpKind::ExtraLife => assert_eq!(round.player.lives, lives + 1),
    }
}

#[test]
fn test_freeze_stops_everything() {
    let mut round = Round::new(GameMode::Hardcore, GameCfg::default(), BOUNDS, 21);
    round.player.freeze_remaining = 2.0;
    let before = round.shapes.iter().map(|s| s.pos).collect::<Vec<_>>();

    for _ in 0..60 {
        round.update(FRAME, &InputModel::default());
    }

    let after = round.shapes.iter().map(|s| s.pos).take(before.len()).collect::<Vec<_>>();
    assert_eq!(before, after);
}

#[test]
fn test_same_seed_same_round() {
    let mut a = Round::new(GameMode::Normal, GameCfg::default(), BOUNDS, 777);
    let mut b = Round::new(GameMode::Normal, GameCfg::default(), BOUNDS, 777);

    for _ in 0..600 {
        a.update(FRAME, &InputModel::default());
        b.update(FRAME, &InputModel::default());
    }

    assert_eq!(a.shapes.len(), b.shapes.len());
    for (sa, sb) in a.shapes.iter().zip(b.shapes.iter()) {
        assert_eq!(sa.pos, sb.pos);
        assert_eq!(sa.kind, sb.kind);
    }
}
