use broadside::{
    Board, BoardError, Cell, Coord, Orientation, ShipClass, ShotOutcome, BOARD_SIZE,
    TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_place_marks_cells() {
    let mut board = Board::new();
    board
        .place(ShipClass::Cruiser, Coord::new(2, 3), Orientation::Vertical)
        .unwrap();

    for row in 2..5 {
        assert_eq!(
            board.cell(Coord::new(row, 3)).unwrap(),
            Cell::Ship(ShipClass::Cruiser)
        );
    }
    assert_eq!(board.ship_cells_remaining(), 3);
}

#[test]
fn test_place_rejects_out_of_bounds() {
    let mut board = Board::new();
    // Carrier spans 5 cells; columns 6..=10 run off the grid.
    assert_eq!(
        board
            .place(ShipClass::Carrier, Coord::new(0, 6), Orientation::Horizontal)
            .unwrap_err(),
        BoardError::ShipOutOfBounds {
            class: ShipClass::Carrier
        }
    );
    assert_eq!(
        board
            .place(ShipClass::Carrier, Coord::new(10, 0), Orientation::Vertical)
            .unwrap_err(),
        BoardError::ShipOutOfBounds {
            class: ShipClass::Carrier
        }
    );
    assert_eq!(board, Board::new());
}

#[test]
fn test_place_rejects_overlap() {
    let mut board = Board::new();
    board
        .place(ShipClass::Destroyer, Coord::new(0, 0), Orientation::Horizontal)
        .unwrap();
    assert_eq!(
        board
            .place(ShipClass::Submarine, Coord::new(0, 0), Orientation::Vertical)
            .unwrap_err(),
        BoardError::Overlap {
            class: ShipClass::Submarine
        }
    );
    // The failed placement must not leave partial segments behind.
    assert_eq!(board.ship_cells_remaining(), 2);
}

#[test]
fn test_place_rejects_duplicate_class() {
    let mut board = Board::new();
    board
        .place(ShipClass::Destroyer, Coord::new(0, 0), Orientation::Horizontal)
        .unwrap();
    assert_eq!(
        board
            .place(ShipClass::Destroyer, Coord::new(5, 5), Orientation::Horizontal)
            .unwrap_err(),
        BoardError::DuplicateShip {
            class: ShipClass::Destroyer
        }
    );
}

#[test]
fn test_resolve_hit_miss_and_repeat() {
    let mut board = Board::new();
    board
        .place(ShipClass::Destroyer, Coord::new(0, 0), Orientation::Horizontal)
        .unwrap();

    assert_eq!(
        board.resolve_shot(Coord::new(0, 0)).unwrap(),
        ShotOutcome::Hit(ShipClass::Destroyer)
    );
    assert_eq!(
        board.resolve_shot(Coord::new(5, 5)).unwrap(),
        ShotOutcome::Miss
    );

    assert_eq!(
        board.resolve_shot(Coord::new(0, 0)).unwrap_err(),
        BoardError::AlreadyResolved {
            coord: Coord::new(0, 0)
        }
    );
    assert_eq!(
        board.resolve_shot(Coord::new(5, 5)).unwrap_err(),
        BoardError::AlreadyResolved {
            coord: Coord::new(5, 5)
        }
    );
    assert_eq!(
        board.resolve_shot(Coord::new(10, 0)).unwrap_err(),
        BoardError::OutOfBounds {
            coord: Coord::new(10, 0)
        }
    );
}

#[test]
fn test_destroyer_only_defeat() {
    let mut board = Board::new();
    board
        .place(ShipClass::Destroyer, Coord::new(7, 4), Orientation::Vertical)
        .unwrap();

    board.resolve_shot(Coord::new(7, 4)).unwrap();
    assert!(!board.is_defeated());
    assert!(board.has_ship(ShipClass::Destroyer));

    board.resolve_shot(Coord::new(8, 4)).unwrap();
    assert!(board.is_defeated());
    assert!(!board.has_ship(ShipClass::Destroyer));
}

#[test]
fn test_random_fleet_defeat_roundtrip() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut board = Board::new();
    board.place_fleet_randomly(&mut rng).unwrap();
    assert_eq!(board.ship_cells_remaining(), TOTAL_SHIP_CELLS);

    let mut hits = 0;
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if let ShotOutcome::Hit(_) = board.resolve_shot(Coord::new(row, col)).unwrap() {
                hits += 1;
            }
        }
    }
    assert_eq!(hits, TOTAL_SHIP_CELLS);
    assert!(board.is_defeated());
}

fn fleet_orientations(board: &Board) -> (bool, bool) {
    use broadside::FLEET;
    let mut horizontal = false;
    let mut vertical = false;
    for class in FLEET {
        let mut coords = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let coord = Coord::new(row, col);
                if board.cell(coord).unwrap() == Cell::Ship(class) {
                    coords.push(coord);
                }
            }
        }
        if coords.iter().all(|c| c.row == coords[0].row) {
            horizontal = true;
        } else {
            vertical = true;
        }
    }
    (horizontal, vertical)
}

#[test]
fn test_both_orientations_occur_across_seeds() {
    let mut saw_horizontal = false;
    let mut saw_vertical = false;
    for seed in 0..32 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        board.place_fleet_randomly(&mut rng).unwrap();
        let (h, v) = fleet_orientations(&board);
        saw_horizontal |= h;
        saw_vertical |= v;
    }
    assert!(saw_horizontal, "no horizontal placement in 32 fleets");
    assert!(saw_vertical, "no vertical placement in 32 fleets");
}
