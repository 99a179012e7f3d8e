use broadside::{span, Coordinate, GameError, Orientation, Vessel};

#[test]
fn test_new_vessel_is_afloat() {
    let vessel = Vessel::new(3).unwrap();
    assert_eq!(vessel.length(), 3);
    assert_eq!(vessel.hits(), 0);
    assert!(!vessel.is_sunk());
}

#[test]
fn test_invalid_lengths_rejected() {
    assert_eq!(
        Vessel::new(0).unwrap_err(),
        GameError::InvalidConfiguration { length: 0 }
    );
    assert_eq!(
        Vessel::new(11).unwrap_err(),
        GameError::InvalidConfiguration { length: 11 }
    );
    assert!(Vessel::new(10).is_ok());
}

#[test]
fn test_hit_until_sunk() {
    let mut vessel = Vessel::new(2).unwrap();
    vessel.hit();
    assert!(!vessel.is_sunk());
    vessel.hit();
    assert!(vessel.is_sunk());
}

#[test]
fn test_hit_saturates_at_length() {
    let mut vessel = Vessel::new(3).unwrap();
    for _ in 0..4 {
        vessel.hit();
    }
    assert_eq!(vessel.hits(), 3);
    assert!(vessel.is_sunk());
}

#[test]
fn test_span_cells() {
    let cells: Vec<_> = span(2, 1, 3, Orientation::Horizontal).unwrap().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(2, 1).unwrap(),
            Coordinate::new(2, 2).unwrap(),
            Coordinate::new(2, 3).unwrap(),
        ]
    );

    let cells: Vec<_> = span(0, 0, 4, Orientation::Vertical).unwrap().collect();
    assert_eq!(cells.last(), Some(&Coordinate::new(3, 0).unwrap()));
}

#[test]
fn test_span_out_of_bounds() {
    assert_eq!(
        span(9, 0, 2, Orientation::Vertical).err(),
        Some(GameError::OutOfBounds { row: 10, col: 0 })
    );
}
