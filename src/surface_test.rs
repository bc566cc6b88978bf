#![allow(clippy::float_cmp)]

use std::panic::{AssertUnwindSafe, catch_unwind};

use super::*;
use crate::testing::{Op, Recorder};

#[test]
fn saved_state_restores_on_drop() {
    let mut rec = Recorder::default();
    {
        let mut saved = SavedState::new(&mut rec);
        saved.set_global_alpha(0.25);
        saved.mark("inside");
    }
    assert_eq!(rec.alpha(), 1.0);
    assert_eq!(rec.depth(), 0);
    assert_eq!(rec.ops, vec![Op::Save, Op::Alpha(0.25), Op::Mark("inside", 0.25), Op::Restore]);
}

#[test]
fn saved_state_restores_while_unwinding() {
    let mut rec = Recorder::default();
    let result = catch_unwind(AssertUnwindSafe(|| {
        let mut saved = SavedState::new(&mut rec);
        saved.set_global_alpha(0.5);
        panic!("draw failed");
    }));
    assert!(result.is_err());
    assert_eq!(rec.depth(), 0);
    assert_eq!(rec.alpha(), 1.0);
    assert_eq!(rec.ops.last(), Some(&Op::Restore));
}

#[test]
fn nested_saved_states_unwind_in_order() {
    let mut rec = Recorder::default();
    {
        let mut outer = SavedState::new(&mut rec);
        outer.set_global_alpha(0.5);
        {
            let mut inner = SavedState::new(&mut *outer);
            inner.set_global_alpha(0.1);
        }
        assert_eq!(outer.alpha(), 0.5);
    }
    assert_eq!(rec.alpha(), 1.0);
}
