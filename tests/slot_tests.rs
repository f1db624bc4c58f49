// Host-side tests for the self-rescheduling callback holder.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod slot {
    include!("../src/slot.rs");
}

use slot::CallbackSlot;
use std::rc::Rc;

type Tick = Box<dyn Fn() -> usize>;

#[test]
fn stored_callback_can_be_invoked() {
    let slot: CallbackSlot<Tick> = CallbackSlot::new();
    assert!(slot.is_empty());
    assert_eq!(slot.with(|cb| cb()), None);
    slot.set(Box::new(|| 7));
    assert_eq!(slot.with(|cb| cb()), Some(7));
}

#[test]
fn release_breaks_the_self_reference() {
    let payload = Rc::new(());
    let slot: CallbackSlot<Tick> = CallbackSlot::new();
    let inner = slot.clone();
    let held = payload.clone();
    slot.set(Box::new(move || {
        let _keep = (&inner, &held);
        1
    }));
    assert_eq!(Rc::strong_count(&payload), 2);

    drop(slot.release());
    assert!(slot.is_empty());
    assert_eq!(Rc::strong_count(&payload), 1);
}

#[test]
fn release_on_an_empty_slot_is_harmless() {
    let slot: CallbackSlot<Tick> = CallbackSlot::new();
    assert!(slot.release().is_none());
}
