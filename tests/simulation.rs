use gridsnake::config::GridSize;
use gridsnake::game::{GameState, StepOutcome};
use gridsnake::input::Direction;
use gridsnake::snake::{Cell, Snake};

#[test]
fn stepwise_growth_then_wall_collision() {
    let mut state = GameState::new_with_seed(
        GridSize {
            width: 6,
            height: 4,
        },
        42,
    );
    state.snake = Snake::new(Cell { x: 1, y: 1 }, 23);
    state.food = Cell { x: 2, y: 1 };

    let outcome = state.step(Direction::Right).expect("growth tick succeeds");
    assert_eq!(outcome, StepOutcome::Grew);
    assert_eq!(state.snake.head(), Cell { x: 2, y: 1 });
    assert_eq!(state.snake.len(), 2);
    assert_eq!(state.snake.tail(), &[Direction::Left]);

    // Pin the food far away so the remaining ticks are pure moves.
    state.food = Cell { x: 5, y: 3 };

    let outcome = state.step(Direction::Up).expect("move tick succeeds");
    assert_eq!(outcome, StepOutcome::Moved);
    assert_eq!(state.snake.head(), Cell { x: 2, y: 0 });
    assert!(state.is_alive());

    let outcome = state.step(Direction::Up).expect("death tick succeeds");
    assert_eq!(outcome, StepOutcome::Died);
    assert!(!state.is_alive());
    // Death leaves the body where it was.
    assert_eq!(state.snake.head(), Cell { x: 2, y: 0 });

    // Dead sessions stay frozen until reset.
    let outcome = state.step(Direction::Down).expect("dead tick succeeds");
    assert_eq!(outcome, StepOutcome::Died);
    assert_eq!(state.snake.head(), Cell { x: 2, y: 0 });

    state.reset();
    assert!(state.is_alive());
    assert_eq!(state.snake.head(), Cell { x: 2, y: 2 });
    assert_eq!(state.food, Cell { x: 3, y: 2 });
    assert_eq!(state.snake.tail(), &[Direction::Left]);
}

#[test]
fn canonical_session_reaches_the_first_food_in_six_ticks() {
    let mut state = GameState::new_with_seed(
        GridSize {
            width: 30,
            height: 30,
        },
        7,
    );
    assert_eq!(state.snake.len(), 10);

    for _ in 0..5 {
        let outcome = state.step(Direction::Right).expect("move tick succeeds");
        assert_eq!(outcome, StepOutcome::Moved);
    }

    let outcome = state.step(Direction::Right).expect("growth tick succeeds");
    assert_eq!(outcome, StepOutcome::Grew);
    assert_eq!(state.snake.head(), Cell { x: 18, y: 15 });
    assert_eq!(state.snake.len(), 11);
    assert!(state.is_alive());
    assert!(state.food.is_within_bounds(state.size()));
}

#[test]
fn unfiltered_reversal_dies_immediately() {
    let mut state = GameState::new_with_seed(
        GridSize {
            width: 30,
            height: 30,
        },
        1,
    );

    // The canonical pose travels Right with the tail trailing Left; a raw
    // reversal request runs straight into the first tail segment.
    let outcome = state.step(Direction::Left).expect("death tick succeeds");

    assert_eq!(outcome, StepOutcome::Died);
    assert!(!state.is_alive());
}
