//! Lifecycle and assignment behavior of `SlotContainer` through the public API.

use inline_slot::{EmptyAccessError, MoveOut, SlotContainer};
use std::cell::{Cell, RefCell};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

/// Shared event log for `Counted` values.
#[derive(Debug, Default)]
struct Ledger {
    events: Vec<&'static str>,
}

impl Ledger {
    fn count(&self, event: &str) -> usize {
        self.events.iter().filter(|e| **e == event).count()
    }
}

/// A value that records its constructions, copies, assignments and destructions.
#[derive(Debug)]
struct Counted {
    ledger: Rc<RefCell<Ledger>>,
    payload: u32,
}

impl Counted {
    fn new(ledger: &Rc<RefCell<Ledger>>, payload: u32) -> Self {
        ledger.borrow_mut().events.push("construct");
        Self { ledger: Rc::clone(ledger), payload }
    }
}

impl From<(&Rc<RefCell<Ledger>>, u32, u32)> for Counted {
    fn from((ledger, high, low): (&Rc<RefCell<Ledger>>, u32, u32)) -> Self {
        Self::new(ledger, high * 100 + low)
    }
}

impl Clone for Counted {
    fn clone(&self) -> Self {
        self.ledger.borrow_mut().events.push("copy");
        Self { ledger: Rc::clone(&self.ledger), payload: self.payload }
    }

    fn clone_from(&mut self, source: &Self) {
        self.ledger.borrow_mut().events.push("copy-assign");
        self.payload = source.payload;
    }
}

impl Drop for Counted {
    fn drop(&mut self) {
        self.ledger.borrow_mut().events.push("destroy");
    }
}

#[test]
fn test_integer_walkthrough() {
    let mut a: SlotContainer<i32> = SlotContainer::new();
    assert!(!a.is_occupied());

    a.emplace(42);
    assert!(a.is_occupied());
    assert_eq!(a.value(), Ok(&42));

    let b = a.clone();
    assert_eq!(b.value(), Ok(&42));

    a.reset();
    assert!(!a.is_occupied());
    assert_eq!(b.value(), Ok(&42));
    assert_eq!(a.value(), Err(EmptyAccessError));
}

#[test]
fn test_reset_twice_equals_reset_once() {
    let ledger = Rc::new(RefCell::new(Ledger::default()));
    let mut slot = SlotContainer::with_value(Counted::new(&ledger, 1));

    slot.reset();
    slot.reset();
    assert!(!slot.is_occupied());
    assert_eq!(ledger.borrow().count("destroy"), 1);

    let mut empty: SlotContainer<Counted> = SlotContainer::new();
    empty.reset();
    assert!(!empty.is_occupied());
}

#[test]
fn test_constructed_from_value_reports_it() {
    let slot = SlotContainer::from(String::from("v"));
    assert!(slot.is_occupied());
    assert_eq!(slot.value().map(String::as_str), Ok("v"));

    let original = vec![1, 2, 3];
    let copied = SlotContainer::with_clone(&original);
    assert_eq!(copied.value(), Ok(&original));
}

#[test]
fn test_default_is_empty() {
    let slot: SlotContainer<Vec<String>> = SlotContainer::default();
    assert!(!slot.is_occupied());
}

#[test]
fn test_failed_checked_access_leaves_state_alone() {
    let mut slot: SlotContainer<u16> = SlotContainer::new();
    assert_eq!(slot.value_mut(), Err(EmptyAccessError));
    assert_eq!(slot.value(), Err(EmptyAccessError));
    assert!(!slot.is_occupied());

    slot.assign(5);
    assert_eq!(slot.value(), Ok(&5));
}

#[test]
fn test_copies_are_independent() {
    let mut original = SlotContainer::with_value(vec![1, 2]);
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.value_mut().unwrap().push(3);
    assert_eq!(original.value(), Ok(&vec![1, 2]));

    original.value_mut().unwrap().clear();
    assert_eq!(copy.value(), Ok(&vec![1, 2, 3]));
}

#[test]
fn test_container_copy_assignment_table() {
    let ledger = Rc::new(RefCell::new(Ledger::default()));
    let occupied = |payload| SlotContainer::with_value(Counted::new(&ledger, payload));

    // destination empty, source empty
    let mut dst: SlotContainer<Counted> = SlotContainer::new();
    dst.assign_from(&SlotContainer::new());
    assert!(!dst.is_occupied());

    // destination empty, source occupied
    let src = occupied(10);
    dst.assign_from(&src);
    assert_eq!(dst.value().map(|c| c.payload), Ok(10));
    assert_eq!(ledger.borrow().count("copy"), 1);

    // destination occupied, source occupied
    let src = occupied(20);
    dst.assign_from(&src);
    assert_eq!(dst.value().map(|c| c.payload), Ok(20));
    assert_eq!(ledger.borrow().count("copy-assign"), 1);
    assert_eq!(ledger.borrow().count("copy"), 1);

    // destination occupied, source empty
    let destroyed = ledger.borrow().count("destroy");
    dst.assign_from(&SlotContainer::new());
    assert!(!dst.is_occupied());
    assert_eq!(ledger.borrow().count("destroy"), destroyed + 1);
}

#[test]
fn test_value_assignment_by_copy_and_move() {
    let ledger = Rc::new(RefCell::new(Ledger::default()));
    let template = Counted::new(&ledger, 7);

    let mut slot = SlotContainer::new();
    slot.assign_clone(&template);
    assert_eq!(ledger.borrow().count("copy"), 1);

    slot.assign_clone(&template);
    assert_eq!(ledger.borrow().count("copy-assign"), 1);

    slot.assign(Counted::new(&ledger, 8));
    assert_eq!(slot.value().map(|c| c.payload), Ok(8));
    // Move-assignment drops the previous value.
    assert_eq!(ledger.borrow().count("destroy"), 1);
}

#[test]
fn test_emplace_replaces_exactly_once() {
    let ledger = Rc::new(RefCell::new(Ledger::default()));
    let mut slot = SlotContainer::with_value(Counted::new(&ledger, 1));
    ledger.borrow_mut().events.clear();

    slot.emplace((&ledger, 4_u32, 2_u32));
    assert_eq!(ledger.borrow().events, ["destroy", "construct"]);
    assert_eq!(slot.value().map(|c| c.payload), Ok(402));
}

#[test]
fn test_move_construction_leaves_source_occupied() {
    let mut source = SlotContainer::with_value(String::from("transferred"));
    let dest = SlotContainer::moved_from(&mut source);

    assert_eq!(dest.value().map(String::as_str), Ok("transferred"));
    assert!(source.is_occupied());
    assert_eq!(source.value().map(String::as_str), Ok(""));
}

#[test]
fn test_move_construction_copies_scalars() {
    let mut source = SlotContainer::with_value(42_i32);
    let dest = SlotContainer::moved_from(&mut source);

    assert_eq!(dest.value(), Ok(&42));
    assert!(source.is_occupied());
    assert_eq!(source.value(), Ok(&42));
}

/// A `Default` type that picks its own moved-from state.
#[derive(Debug, Default, PartialEq)]
struct Handle(u32);

const RELEASED: u32 = u32::MAX;

impl MoveOut for Handle {
    fn move_out(&mut self) -> Self {
        std::mem::replace(self, Handle(RELEASED))
    }
}

#[test]
fn test_moved_from_state_is_defined_by_value_type() {
    let mut source = SlotContainer::with_value(Handle(3));
    let mut dest = SlotContainer::moved_from(&mut source);
    assert_eq!(dest.value(), Ok(&Handle(3)));
    assert_eq!(source.value(), Ok(&Handle(RELEASED)));

    source.assign(Handle(9));
    dest.assign_moved_from(&mut source);
    assert_eq!(dest.value(), Ok(&Handle(9)));
    assert_eq!(source.value(), Ok(&Handle(RELEASED)));
}

/// Panics when cloned.
#[derive(Debug)]
struct Brittle(u8);

impl Clone for Brittle {
    fn clone(&self) -> Self {
        panic!("clone failed");
    }
}

#[test]
fn test_failed_copy_into_empty_slot_stays_empty() {
    let source = SlotContainer::with_value(Brittle(1));

    let mut dst: SlotContainer<Brittle> = SlotContainer::new();
    assert!(catch_unwind(AssertUnwindSafe(|| dst.assign_from(&source))).is_err());
    assert!(!dst.is_occupied());

    assert!(catch_unwind(AssertUnwindSafe(|| {
        dst.assign_clone(source.value().unwrap());
    }))
    .is_err());
    assert!(!dst.is_occupied());

    assert!(catch_unwind(AssertUnwindSafe(|| source.clone())).is_err());
    assert!(catch_unwind(AssertUnwindSafe(|| SlotContainer::with_clone(&Brittle(2)))).is_err());

    assert_eq!(source.value().map(|b| b.0), Ok(1));
}

/// Panics when dropped, after counting the drop.
struct Bomb {
    drops: Rc<Cell<usize>>,
}

impl Clone for Bomb {
    fn clone(&self) -> Self {
        Self { drops: Rc::clone(&self.drops) }
    }
}

impl Drop for Bomb {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
        panic!("destructor failed");
    }
}

#[test]
fn test_failed_reset_destroys_exactly_once() {
    let drops = Rc::new(Cell::new(0));
    let mut slot = SlotContainer::with_value(Bomb { drops: Rc::clone(&drops) });

    assert!(catch_unwind(AssertUnwindSafe(|| slot.reset())).is_err());
    assert!(!slot.is_occupied());

    slot.reset();
    drop(slot);
    assert_eq!(drops.get(), 1);
}

#[test]
fn test_failed_destroy_on_empty_assignment_destroys_exactly_once() {
    let drops = Rc::new(Cell::new(0));
    let mut copied_into = SlotContainer::with_value(Bomb { drops: Rc::clone(&drops) });
    let mut moved_into = SlotContainer::with_value(Bomb { drops: Rc::clone(&drops) });

    assert!(catch_unwind(AssertUnwindSafe(|| copied_into.assign_from(&SlotContainer::new()))).is_err());
    assert!(!copied_into.is_occupied());
    drop(copied_into);
    assert_eq!(drops.get(), 1);

    let empty = SlotContainer::new();
    assert!(catch_unwind(AssertUnwindSafe(|| moved_into.assign_slot(empty))).is_err());
    assert!(!moved_into.is_occupied());
    drop(moved_into);
    assert_eq!(drops.get(), 2);
}

#[test]
fn test_failed_destroy_on_emplace_leaves_slot_empty() {
    let drops = Rc::new(Cell::new(0));
    let built = Cell::new(false);
    let mut slot = SlotContainer::with_value(Bomb { drops: Rc::clone(&drops) });

    let result = catch_unwind(AssertUnwindSafe(|| {
        slot.emplace_with(|| {
            built.set(true);
            Bomb { drops: Rc::new(Cell::new(0)) }
        });
    }));
    assert!(result.is_err());
    assert!(!built.get());
    assert!(!slot.is_occupied());
    drop(slot);
    assert_eq!(drops.get(), 1);
}

#[test]
fn test_consuming_access() {
    let slot = SlotContainer::with_value(String::from("owned"));
    assert_eq!(slot.into_value().as_deref(), Ok("owned"));

    let empty: SlotContainer<String> = SlotContainer::new();
    assert_eq!(empty.into_value(), Err(EmptyAccessError));
}

#[test]
fn test_drop_destroys_once() {
    let ledger = Rc::new(RefCell::new(Ledger::default()));
    {
        let mut slot = SlotContainer::with_value(Counted::new(&ledger, 1));
        let _copy = slot.clone();
        slot.reset();
    }
    assert_eq!(ledger.borrow().count("construct") + ledger.borrow().count("copy"), 2);
    assert_eq!(ledger.borrow().count("destroy"), 2);
}
