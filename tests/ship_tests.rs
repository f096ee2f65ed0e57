use std::cell::RefCell;
use std::rc::Rc;

use broadside::{BoardError, Change, Model, Ship, Value};

#[test]
fn take_hit_counts_until_sunk() -> Result<(), BoardError> {
    let ship = Ship::new("Destroyer", 2);
    assert!(!ship.is_sunk());
    assert_eq!(ship.take_hit()?, 1);
    assert!(!ship.is_sunk());
    assert_eq!(ship.take_hit()?, 2);
    assert!(ship.is_sunk());
    Ok(())
}

#[test]
fn over_hit_is_rejected() {
    let ship = Ship::new("Patrol Boat", 1);
    ship.take_hit().unwrap();
    assert_eq!(ship.take_hit(), Err(BoardError::OverHit));
    assert_eq!(ship.hit_parts_count(), 1);
}

#[test]
fn sink_is_idempotent() {
    let ship = Ship::new("Submarine", 3);
    let changes = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&changes);
    ship.on("changed:hit_parts_count", move |_, _: &Change| *sink.borrow_mut() += 1);

    ship.sink();
    ship.sink();

    assert!(ship.is_sunk());
    assert_eq!(ship.hit_parts_count(), 3);
    assert_eq!(*changes.borrow(), 1);
}

#[test]
fn hits_are_observable() {
    let ship = Ship::new("Battleship", 4);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    ship.on("changed", move |_, change: &Change| sink.borrow_mut().push(change.clone()));

    ship.take_hit().unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![Change {
            attribute: "hit_parts_count",
            old_value: Value::Size(0),
            new_value: Value::Size(1),
        }]
    );
}

#[test]
fn clones_share_state_and_identity() {
    let ship = Ship::new("Cruiser", 3);
    let other = ship.clone();
    other.take_hit().unwrap();
    assert_eq!(ship.hit_parts_count(), 1);
    assert_eq!(ship, other);
    assert_eq!(ship.id(), other.id());
    assert_ne!(ship, Ship::new("Cruiser", 3));
}

#[test]
fn rename_emits_change() {
    let ship = Ship::new("Cruiser", 3);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let handle = ship.clone();
    ship.on("changed:name", move |_, change: &Change| {
        sink.borrow_mut().push((change.new_value.clone(), handle.name()));
    });
    assert!(ship.set_name("Frigate"));
    assert!(!ship.set_name("Frigate"));
    assert_eq!(
        *seen.borrow(),
        vec![(Value::from("Frigate"), "Frigate".to_string())]
    );
}

#[test]
fn ids_are_distinct_and_display_with_hash() {
    let a = Ship::new("Skiff", 1);
    let b = Ship::new("Skiff", 1);
    assert_ne!(a.id(), b.id());
    assert!(a.id().to_string().starts_with('#'));
    assert_ne!(a.id().to_string(), b.id().to_string());
}
