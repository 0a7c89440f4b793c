//! Board tests - dimensions, space accounting and food placement

use rand::rngs::StdRng;
use rand::SeedableRng;

use term_snake::core::{Board, Snake};
use term_snake::types::{Direction, Position, INITIAL_SEGMENTS};

#[test]
fn test_board_new() {
    let board = Board::new(40, 20);
    assert_eq!(board.width(), 40);
    assert_eq!(board.height(), 20);
    assert_eq!(board.available_space(), 800);
    assert_eq!(board.food(), Position::zero());
}

#[test]
fn test_snake_claims_space() {
    let mut board = Board::new(40, 20);
    let mut snake = Snake::new(&mut board);
    assert_eq!(board.available_space(), 800 - INITIAL_SEGMENTS as u32);

    snake.add_segment(&mut board);
    assert_eq!(board.available_space(), 800 - INITIAL_SEGMENTS as u32 - 1);
}

#[test]
fn test_zero_sized_board() {
    // A failed size query yields a 0x0 board.
    let mut board = Board::new(0, 0);
    let snake = Snake::new(&mut board);
    assert_eq!(snake.head(), Position::zero());
    assert!(!board.contains(snake.head()));

    let mut rng = StdRng::seed_from_u64(9);
    assert!(!board.place_food(&snake, &mut rng));
    assert_eq!(board.food(), Position::zero());
}

#[test]
fn test_food_never_shares_row_or_column() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut board = Board::new(30, 15);
    let mut snake = Snake::new(&mut board);

    // Spread the snake out over an L shape.
    snake.set_direction(Direction::Right);
    for _ in 0..3 {
        snake.advance();
    }
    snake.set_direction(Direction::Down);
    for _ in 0..2 {
        snake.advance();
    }

    for _ in 0..500 {
        assert!(board.place_food(&snake, &mut rng));
        let food = board.food();
        assert!(board.contains(food));
        assert!(
            snake
                .iter()
                .all(|seg| seg.pos().x != food.x && seg.pos().y != food.y),
            "food {food:?} shares a row or column with the snake"
        );
    }
}

#[test]
fn test_food_unchanged_when_space_is_one() {
    // 5 cells, 4 taken by the snake.
    let mut board = Board::new(5, 1);
    let snake = Snake::new(&mut board);
    assert_eq!(board.available_space(), 1);

    board.set_food(Position::new(1, 1));
    let mut rng = StdRng::seed_from_u64(1);
    assert!(!board.place_food(&snake, &mut rng));
    assert_eq!(board.food(), Position::new(1, 1));
}

#[test]
fn test_teardown_zeroes_board() {
    let mut board = Board::new(12, 8);
    let snake = Snake::new(&mut board);
    let mut rng = StdRng::seed_from_u64(5);
    board.place_food(&snake, &mut rng);

    board.teardown();
    assert_eq!(board.width(), 0);
    assert_eq!(board.height(), 0);
    assert_eq!(board.available_space(), 0);
    assert_eq!(board.food(), Position::zero());
}
