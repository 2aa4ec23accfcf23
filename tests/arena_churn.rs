//! Property test: arbitrary create/remove churn against a model.
//!
//! The model tracks which issued handles must still resolve and which must
//! be stale, including the handles invalidated as a side effect of
//! swap-removal relocating the tail element.

use hedge_mesh::data::arena::ElementArena;
use hedge_mesh::topology::element::Point;
use hedge_mesh::topology::handle::PointIndex;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Create,
    RemoveLive(prop::sample::Index),
    RemoveStale(prop::sample::Index),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Create),
        2 => any::<prop::sample::Index>().prop_map(Op::RemoveLive),
        1 => any::<prop::sample::Index>().prop_map(Op::RemoveStale),
    ]
}

proptest! {
    #[test]
    fn churn_never_revalidates_stale_handles(
        ops in prop::collection::vec(op_strategy(), 1..256),
    ) {
        let mut arena = ElementArena::<Point>::new();
        let mut live: Vec<PointIndex> = Vec::new();
        let mut stale: Vec<PointIndex> = Vec::new();

        for op in ops {
            match op {
                Op::Create => {
                    let (handle, _) = arena.create();
                    prop_assert!(handle.is_valid());
                    live.push(handle);
                }
                Op::RemoveLive(which) => {
                    if live.is_empty() {
                        continue;
                    }
                    let handle = live.swap_remove(which.index(live.len()));
                    let tail_offset = arena.count() as u32 - 1;
                    arena.remove(handle);
                    stale.push(handle);
                    if handle.offset() != tail_offset {
                        // Swap-removal relocated the tail element, so the
                        // tail's previously issued handle is stale too.
                        let relocated = live
                            .iter()
                            .position(|h| h.offset() == tail_offset);
                        prop_assert!(relocated.is_some());
                        stale.push(live.swap_remove(relocated.unwrap()));
                    }
                }
                Op::RemoveStale(which) => {
                    if stale.is_empty() {
                        continue;
                    }
                    let handle = stale[which.index(stale.len())];
                    let count = arena.count();
                    arena.remove(handle);
                    prop_assert_eq!(arena.count(), count);
                }
            }

            // The sentinel is never disturbed and never enumerated.
            prop_assert_eq!(arena.count(), live.len() + 1);
            prop_assert!(arena.get(PointIndex::default()).is_none());
        }

        for handle in &live {
            prop_assert!(arena.get(*handle).is_some());
        }
        for handle in &stale {
            prop_assert!(arena.get(*handle).is_none());
        }
        prop_assert_eq!(arena.iter().count(), live.len());
    }
}
