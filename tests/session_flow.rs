mod common;

use common::{board, play, vs_ai};
use noughts::{
    Error,
    ai::Difficulty,
    app::{App, GameConfig, GameMode},
    session::{EventLog, GameController, MoveOutcome, Phase, TimerEvent},
    tictactoe::{Board, GameOutcome, Move, Player},
};

#[test]
fn two_player_game_to_a_win() {
    let mut controller = GameController::new(GameConfig::default()).unwrap();
    play(&mut controller, &[0, 3, 1, 4]);
    let outcome = controller.apply_move(2).unwrap();

    assert_eq!(
        outcome,
        MoveOutcome::Ended {
            outcome: GameOutcome::Win(Player::X),
            line: Some([0, 1, 2]),
        }
    );
    let state = controller.state();
    assert!(!state.active);
    assert_eq!(state.result_text().as_deref(), Some("Player 1 Wins!"));
    assert_eq!(state.score_text(), "Player 1: 1 | Draw: 0 | Player 2: 0");
}

#[test]
fn two_player_game_to_a_draw() {
    let mut controller = GameController::new(GameConfig::default()).unwrap();
    play(&mut controller, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let state = controller.state();
    assert_eq!(state.outcome, Some(GameOutcome::Draw));
    assert_eq!(state.result_text().as_deref(), Some("Draw!"));
    assert_eq!(state.scoreboard.draws, 1);
}

#[test]
fn invalid_moves_never_mutate() {
    let mut controller = GameController::new(GameConfig::default()).unwrap();
    play(&mut controller, &[4]);
    let before = controller.state();

    for index in [4, 9, 100] {
        let err = controller.apply_move(index).unwrap_err();
        assert!(err.is_invalid_move(), "{err}");
        assert_eq!(controller.state(), before);
    }
}

#[test]
fn moves_after_the_end_are_rejected() {
    let mut controller = GameController::new(GameConfig::default()).unwrap();
    play(&mut controller, &[0, 3, 1, 4, 2]);
    let before = controller.state();
    assert!(matches!(controller.apply_move(8), Err(Error::GameOver)));
    assert!(matches!(controller.undo_last_move(), Err(Error::GameOver)));
    assert_eq!(controller.state(), before);
}

#[test]
fn undo_restores_board_history_and_mover() {
    let mut controller = GameController::new(GameConfig::default()).unwrap();
    play(&mut controller, &[4, 0]);
    let before = controller.state();

    play(&mut controller, &[8]);
    assert_eq!(controller.undo_last_move().unwrap(), Move::new(Player::X, 8));

    let after = controller.state();
    assert_eq!(after.board, before.board);
    assert_eq!(after.history, before.history);
    assert_eq!(after.current_player, before.current_player);
}

#[test]
fn undo_with_empty_history() {
    let mut controller = GameController::new(GameConfig::default()).unwrap();
    assert!(matches!(controller.undo_last_move(), Err(Error::NothingToUndo)));
}

#[test]
fn single_player_undo_is_one_step() {
    let mut controller = GameController::new(vs_ai(Difficulty::Hard)).unwrap();
    play(&mut controller, &[0]);
    assert_eq!(controller.undo_last_move().unwrap(), Move::new(Player::O, 4));
    assert!(controller.ai_to_move());
    assert_eq!(controller.undo_last_move().unwrap(), Move::new(Player::X, 0));
    assert_eq!(controller.state().board, Board::new());
}

#[test]
fn reset_keeps_scores_and_applies_new_config() {
    let mut controller = GameController::new(GameConfig::default()).unwrap();
    play(&mut controller, &[0, 3, 1, 4, 2]);

    controller.reset(vs_ai(Difficulty::Hard)).unwrap();
    let state = controller.state();
    assert_eq!(state.phase, Phase::AwaitingMove);
    assert_eq!(state.board, Board::new());
    assert_eq!(state.mode, GameMode::SinglePlayer);
    assert_eq!(state.player_o_name, "AI");
    assert_eq!(state.scoreboard.x_wins, 1);
    assert_eq!(controller.strategy_name(), "Minimax");
}

#[test]
fn hard_ai_wins_when_human_blunders() {
    let mut controller = GameController::new(vs_ai(Difficulty::Hard)).unwrap();
    // O blocks at 2, forks at 3 after X strays to 8, then completes 2-4-6.
    play(&mut controller, &[0, 1, 8, 5]);
    let state = controller.state();
    assert_eq!(state.board, board("XXOOOXO.X"));
    assert_eq!(state.outcome, Some(GameOutcome::Win(Player::O)));
    assert_eq!(state.winning_line, Some([2, 4, 6]));
    assert_eq!(state.result_text().as_deref(), Some("AI Wins!"));
}

#[test]
fn timer_expiry_switches_player_and_restarts() {
    let mut controller = GameController::new(GameConfig::default().with_timer(3)).unwrap();
    assert_eq!(controller.tick().unwrap(), TimerEvent::Running { remaining: 2 });
    assert_eq!(controller.tick().unwrap(), TimerEvent::Running { remaining: 1 });
    assert_eq!(controller.tick().unwrap(), TimerEvent::Expired);

    assert_eq!(controller.state().current_player, Player::O);
    assert!(controller.state().history.is_empty());
    assert_eq!(controller.timer().unwrap().remaining(), Some(3));
}

#[test]
fn stale_ticks_are_ignored_after_a_move() {
    let mut controller = GameController::new(GameConfig::default().with_timer(1)).unwrap();
    let stale = controller.timer().unwrap().generation();
    play(&mut controller, &[4]);

    assert_eq!(controller.tick_for(stale).unwrap(), TimerEvent::Idle);
    assert_eq!(controller.state().current_player, Player::O);
}

#[test]
fn observers_see_every_event_in_order() {
    let log = EventLog::new();
    let mut controller = GameController::new(GameConfig::default().with_timer(1)).unwrap();
    controller.add_observer(Box::new(log.clone()));

    play(&mut controller, &[4]);
    controller.undo_last_move().unwrap();
    controller.tick().unwrap();
    play(&mut controller, &[0, 3, 1, 6]);
    controller.reset(GameConfig::default()).unwrap();

    assert_eq!(
        log.events(),
        [
            "1. X on 4",
            "turn O",
            "undo X on 4",
            "turn X",
            "timeout X",
            "turn O",
            "1. O on 0",
            "turn X",
            "2. X on 3",
            "turn O",
            "3. O on 1",
            "turn X",
            "4. X on 6",
            "turn O",
            "reset",
            "turn X",
        ]
    );
}

#[test]
fn app_observers_attach_to_new_controllers() {
    let log = EventLog::new();
    let shared = log.clone();
    let app = App::for_testing()
        .with_default_seed(1)
        .with_observer(move || Box::new(shared.clone()))
        .build();

    let mut controller = app.create_controller(GameConfig::default()).unwrap();
    play(&mut controller, &[0, 3, 1, 4, 2]);
    assert_eq!(log.events().last().map(String::as_str), Some("win X"));
}
