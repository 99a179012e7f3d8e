use std::collections::HashSet;

use broadside::{Attacker, Coordinate, GameError, Strategy};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn at(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col).unwrap()
}

#[test]
fn test_register_hit_interior_enqueues_four_neighbors() {
    let mut attacker = Attacker::new(Strategy::Smart);
    attacker.register_hit(at(5, 5));
    let queue: Vec<_> = attacker.target_queue().collect();
    assert_eq!(queue, vec![at(4, 5), at(6, 5), at(5, 4), at(5, 6)]);
    assert_eq!(attacker.last_hit(), Some(at(5, 5)));
}

#[test]
fn test_register_hit_corner_drops_out_of_bounds() {
    let mut attacker = Attacker::new(Strategy::Smart);
    attacker.register_hit(at(0, 0));
    let queue: Vec<_> = attacker.target_queue().collect();
    assert_eq!(queue, vec![at(1, 0), at(0, 1)]);
}

#[test]
fn test_register_hit_skips_attacked_and_queued() {
    let mut attacker = Attacker::new(Strategy::Smart);
    attacker.attack(at(4, 5)).unwrap();
    attacker.register_hit(at(5, 5));
    attacker.register_hit(at(5, 6));
    let queue: Vec<_> = attacker.target_queue().collect();
    // (5, 5) itself is not attacked here, so it is a valid neighbour of (5, 6).
    assert_eq!(
        queue,
        vec![at(6, 5), at(5, 4), at(5, 6), at(4, 6), at(6, 6), at(5, 5), at(5, 7)]
    );
}

#[test]
fn test_smart_attack_pops_queue_in_order() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut attacker = Attacker::new(Strategy::Smart);
    attacker.register_hit(at(5, 5));
    assert_eq!(attacker.smart_attack(&mut rng).unwrap(), at(4, 5));
    assert_eq!(attacker.smart_attack(&mut rng).unwrap(), at(6, 5));
    assert!(attacker.has_attacked(at(4, 5)));
    assert_eq!(attacker.target_queue().count(), 2);
}

#[test]
fn test_smart_attack_drains_stale_entries() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut attacker = Attacker::new(Strategy::Smart);
    attacker.register_hit(at(5, 5));
    attacker.attack(at(4, 5)).unwrap();
    attacker.attack(at(6, 5)).unwrap();
    attacker.attack(at(5, 4)).unwrap();
    assert_eq!(attacker.smart_attack(&mut rng).unwrap(), at(5, 6));
    assert_eq!(attacker.target_queue().count(), 0);
}

#[test]
fn test_smart_attack_falls_back_to_random() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut attacker = Attacker::new(Strategy::Smart);
    attacker.register_hit(at(0, 0));
    attacker.attack(at(1, 0)).unwrap();
    attacker.attack(at(0, 1)).unwrap();
    let target = attacker.smart_attack(&mut rng).unwrap();
    assert!(target != at(1, 0) && target != at(0, 1));
    assert_eq!(attacker.attack_count(), 3);
}

#[test]
fn test_random_attack_covers_grid_then_exhausts() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut attacker = Attacker::new(Strategy::Random);
    let mut seen = HashSet::new();
    for _ in 0..100 {
        let coord = attacker.random_attack(&mut rng).unwrap();
        assert!(seen.insert(coord), "duplicate target {}", coord);
    }
    assert_eq!(seen.len(), 100);
    assert_eq!(
        attacker.random_attack(&mut rng),
        Err(GameError::ExhaustedSearchSpace)
    );
    assert_eq!(
        attacker.smart_attack(&mut rng),
        Err(GameError::ExhaustedSearchSpace)
    );
}

#[test]
fn test_manual_attack_rejects_repeat() {
    let mut attacker = Attacker::default();
    assert_eq!(attacker.attack(at(2, 3)), Ok(at(2, 3)));
    assert_eq!(
        attacker.attack(at(2, 3)),
        Err(GameError::AlreadyAttacked(at(2, 3)))
    );
    assert_eq!(attacker.attacked().collect::<Vec<_>>(), vec![at(2, 3)]);
}

#[test]
fn test_out_of_bounds_request() {
    assert_eq!(
        Coordinate::new(10, 0),
        Err(GameError::OutOfBounds { row: 10, col: 0 })
    );
}

#[test]
fn test_next_target_uses_strategy() {
    let mut rng = SmallRng::seed_from_u64(8);
    let mut smart = Attacker::new(Strategy::Smart);
    smart.register_hit(at(9, 9));
    assert_eq!(smart.next_target(&mut rng).unwrap(), at(8, 9));

    let mut random = Attacker::new(Strategy::Random);
    random.register_hit(at(9, 9));
    let target = random.next_target(&mut rng).unwrap();
    assert!(random.has_attacked(target));
    assert_eq!(random.strategy(), Strategy::Random);
}
