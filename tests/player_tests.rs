use std::io::Cursor;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    parse_coordinate, AiPlayer, Board, BoardError, Coordinate, HumanPlayer, InputError,
    Orientation, Player, Ship, Shot, ShotOutcome,
};

fn board_with_single_ship(row: i32, col: i32) -> Board {
    let mut board = Board::new(6).unwrap();
    board
        .add_ship(Ship::new(Coordinate::new(row, col), 1, Orientation::Horizontal).unwrap())
        .unwrap();
    board.reset_targeting_state();
    board
}

/// Player answering from a fixed list and recording rejections.
struct Scripted {
    targets: Vec<Coordinate>,
    rejected: Vec<BoardError>,
}

impl Player for Scripted {
    fn name(&self) -> &str {
        "scripted"
    }

    fn ask(&mut self, _own: &Board, _enemy: &Board) -> anyhow::Result<Coordinate> {
        anyhow::ensure!(!self.targets.is_empty(), "out of targets");
        Ok(self.targets.remove(0))
    }

    fn handle_rejected_target(&mut self, _target: Coordinate, err: &BoardError) {
        self.rejected.push(*err);
    }
}

#[test]
fn test_parse_coordinate() {
    assert_eq!(parse_coordinate("3 4"), Ok(Coordinate::new(2, 3)));
    assert_eq!(parse_coordinate("  1\t1 \n"), Ok(Coordinate::new(0, 0)));
    assert_eq!(parse_coordinate("0 7"), Ok(Coordinate::new(-1, 6)));
    assert_eq!(parse_coordinate(""), Err(InputError::WrongTokenCount(0)));
    assert_eq!(parse_coordinate("1 2 3"), Err(InputError::WrongTokenCount(3)));
    assert_eq!(
        parse_coordinate("a 2"),
        Err(InputError::NotANumber("a".to_string()))
    );
    assert_eq!(
        parse_coordinate("-1 2"),
        Err(InputError::NotANumber("-1".to_string()))
    );
    assert_eq!(
        parse_coordinate("+1 2"),
        Err(InputError::NotANumber("+1".to_string()))
    );
}

#[test]
fn test_oversized_number_is_left_to_the_board() {
    assert_eq!(
        parse_coordinate("99999999999 1"),
        Ok(Coordinate::new(i32::MAX - 1, 0))
    );

    let own = Board::new(6).unwrap();
    let mut enemy = board_with_single_ship(0, 0);
    let input = Cursor::new("99999999999 1\n1 1\n");
    let mut human = HumanPlayer::new(input, Vec::new());
    assert_eq!(human.make_move(&own, &mut enemy).unwrap().outcome, ShotOutcome::Sunk);

    let output = String::from_utf8(human.into_output()).unwrap();
    assert_eq!(output.matches("outside the battlefield").count(), 1);
    assert!(!output.contains("must be numbers"));
}

#[test]
fn test_move_loop_retries_until_legal() {
    let own = Board::new(6).unwrap();
    let mut enemy = board_with_single_ship(0, 0);
    enemy.shoot(Coordinate::new(3, 3)).unwrap();

    let mut player = Scripted {
        targets: vec![
            Coordinate::new(3, 3),
            Coordinate::new(6, 0),
            Coordinate::new(0, 0),
            Coordinate::new(5, 5),
        ],
        rejected: Vec::new(),
    };
    let shot = player.make_move(&own, &mut enemy).unwrap();
    assert_eq!(shot.target, Coordinate::new(0, 0));
    assert_eq!(shot.outcome, ShotOutcome::Sunk);
    assert_eq!(
        player.rejected,
        vec![
            BoardError::AlreadyTargeted(Coordinate::new(3, 3)),
            BoardError::OutOfBounds(Coordinate::new(6, 0)),
        ]
    );
    assert_eq!(player.targets, vec![Coordinate::new(5, 5)]);
}

#[test]
fn test_move_loop_propagates_ask_errors() {
    let own = Board::new(6).unwrap();
    let mut enemy = board_with_single_ship(0, 0);
    let mut player = Scripted {
        targets: Vec::new(),
        rejected: Vec::new(),
    };
    assert!(player.make_move(&own, &mut enemy).is_err());
}

#[test]
fn test_human_reprompts_on_malformed_input() {
    let own = Board::new(6).unwrap();
    let enemy = board_with_single_ship(0, 0);
    let input = Cursor::new("\nfoo\n1 2 3\na b\n3 3\n");
    let mut human = HumanPlayer::new(input, Vec::new());

    assert_eq!(human.ask(&own, &enemy).unwrap(), Coordinate::new(2, 2));

    let output = String::from_utf8(human.into_output()).unwrap();
    assert_eq!(output.matches("Your move: ").count(), 5);
    assert_eq!(output.matches("enter 2 coordinates").count(), 3);
    assert_eq!(output.matches("must be numbers").count(), 1);
}

#[test]
fn test_human_move_reports_board_errors() {
    let own = Board::new(6).unwrap();
    let mut enemy = board_with_single_ship(0, 0);
    let input = Cursor::new("7 7\n0 1\n1 1\n");
    let mut human = HumanPlayer::new(input, Vec::new());

    let shot = human.make_move(&own, &mut enemy).unwrap();
    assert_eq!(shot.target, Coordinate::new(0, 0));
    assert_eq!(shot.outcome, ShotOutcome::Sunk);

    let output = String::from_utf8(human.into_output()).unwrap();
    assert_eq!(output.matches("outside the battlefield").count(), 2);
    assert!(output.contains("Ship sunk!"));
}

/// Output sink that refuses every write.
struct Broken;

impl std::io::Write for Broken {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("sink closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_human_hooks_survive_broken_output() {
    let mut human = HumanPlayer::new(Cursor::new(""), Broken);
    let shot = Shot {
        target: Coordinate::new(0, 0),
        outcome: ShotOutcome::Miss,
    };
    human.handle_shot_result(shot);
    human.handle_opponent_shot(shot);
    human.handle_rejected_target(shot.target, &BoardError::AlreadyTargeted(shot.target));

    let own = Board::new(6).unwrap();
    assert!(human.ask(&own, &own).is_err());
}

#[test]
fn test_human_fails_on_closed_input() {
    let own = Board::new(6).unwrap();
    let enemy = Board::new(6).unwrap();
    let mut human = HumanPlayer::new(Cursor::new("oops\n"), Vec::new());
    assert!(human.ask(&own, &enemy).is_err());
}

#[test]
fn test_human_sees_hidden_enemy_board() {
    let own = board_with_single_ship(5, 5);
    let mut enemy = board_with_single_ship(0, 0);
    enemy.set_reveal_ships(false);
    let mut human = HumanPlayer::new(Cursor::new("2 2\n"), Vec::new());
    human.ask(&own, &enemy).unwrap();

    let output = String::from_utf8(human.into_output()).unwrap();
    // Only the player's own ship is drawn.
    assert_eq!(output.matches('■').count(), 1);
}

#[test]
fn test_ai_draws_inside_grid() {
    let own = Board::new(6).unwrap();
    let enemy = Board::new(6).unwrap();
    let mut ai = AiPlayer::new(SmallRng::seed_from_u64(9));
    for _ in 0..1000 {
        let target = ai.ask(&own, &enemy).unwrap();
        assert!(!enemy.is_out_of_bounds(target));
    }
}

#[test]
fn test_ai_eventually_clears_board() {
    let own = Board::new(6).unwrap();
    let mut enemy = board_with_single_ship(4, 1);
    let mut ai = AiPlayer::new(SmallRng::seed_from_u64(5));

    // Each move is a new cell, so 36 moves cover the whole board.
    let mut targets = Vec::new();
    while enemy.sunk_count() == 0 {
        let shot = ai.make_move(&own, &mut enemy).unwrap();
        assert!(!targets.contains(&shot.target));
        targets.push(shot.target);
        assert!(targets.len() <= 36);
    }
}
