use broadside::{CellSet, Coordinate};

#[test]
fn test_cell_set_coordinates() {
    let a = Coordinate::new(0, 1).unwrap();
    let b = Coordinate::new(9, 9).unwrap();
    let mut set = CellSet::new();
    assert!(set.is_empty());
    assert!(set.insert(b));
    assert!(set.insert(a));
    assert!(!set.insert(a));
    assert!(set.contains(a));
    assert!(!set.contains(Coordinate::new(1, 0).unwrap()));
    assert_eq!(set.count_ones(), 2);
    assert_eq!(set.coordinates().collect::<Vec<_>>(), vec![a, b]);
}

#[test]
fn test_cell_set_holds_whole_grid() {
    let set: CellSet = (0..100).map(|i| Coordinate::from_index(i).unwrap()).collect();
    assert_eq!(set.count_ones(), 100);
    assert!(set.contains(Coordinate::new(9, 9).unwrap()));
    assert_eq!(set.coordinates().last(), Coordinate::new(9, 9).ok());
}
