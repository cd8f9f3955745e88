use std::sync::Arc;

use drawkit_core::{EditorEvent, EventBus, EventCategory, EventFilter, ListError, ListEvent};
use drawkit_designer::ordered_list::OrderedList;
use parking_lot::Mutex;
use proptest::prelude::*;

fn list_of(count: usize) -> OrderedList<usize> {
    let mut list = OrderedList::new(Arc::new(EventBus::new()));
    for i in 0..count {
        list.append(i);
    }
    list
}

#[test]
fn test_move_up_sequence() {
    let mut list = list_of(3);
    list.move_up(0).unwrap();
    assert_eq!(list.indices(), &[1, 0, 2]);
    list.move_up(0).unwrap();
    assert_eq!(list.indices(), &[1, 2, 0]);
    list.move_up(0).unwrap();
    assert_eq!(list.indices(), &[1, 2, 0]);
}

#[test]
fn test_move_missing_index() {
    let mut list = list_of(2);
    assert_eq!(list.move_down(5), Err(ListError::IndexNotFound { index: 5 }));
}

#[test]
fn test_reorder_is_announced() {
    let bus = Arc::new(EventBus::new());
    let orders = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&orders);
    bus.subscribe(
        EventFilter::Categories(vec![EventCategory::List]),
        move |event| {
            if let EditorEvent::List(ListEvent::Reordered { indices, .. }) = event {
                log.lock().push(indices);
            }
        },
    );

    let mut list = OrderedList::new(Arc::clone(&bus));
    list.append('a');
    list.append('b');
    list.move_down(1).unwrap();
    list.move_down(1).unwrap();

    assert_eq!(*orders.lock(), vec![vec![1, 0]]);
}

#[test]
fn test_requests_from_other_subscribers_only_reach_their_list() {
    let bus = Arc::new(EventBus::new());
    let mut first = OrderedList::new(Arc::clone(&bus));
    let mut second = OrderedList::new(Arc::clone(&bus));
    for i in 0..3 {
        first.append(i);
        second.append(i);
    }

    first.request_move_up(0);
    assert_eq!(second.process_requests(), 0);
    assert_eq!(first.process_requests(), 1);
    assert_eq!(first.indices(), &[1, 0, 2]);
    assert_eq!(second.indices(), &[0, 1, 2]);
}

#[test]
fn test_resize_rebuilds_connections() {
    let mut list = list_of(5);
    list.truncate(2);
    assert_eq!(list.connection_count(), 2);
    list.append(9);
    list.append(10);
    assert_eq!(list.connection_count(), 4);
    assert_eq!(list.bus().subscriber_count(), 4);

    list.request_move_down(3);
    assert_eq!(list.process_requests(), 1);
    assert_eq!(list.indices(), &[0, 1, 3, 2]);
}

#[derive(Debug, Clone)]
enum Op {
    Up(usize),
    Down(usize),
    Append,
    Remove(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..8).prop_map(Op::Up),
        (0usize..8).prop_map(Op::Down),
        Just(Op::Append),
        (0usize..8).prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn prop_indices_stay_a_permutation(ops in prop::collection::vec(op(), 0..40)) {
        let mut list = list_of(4);
        for op in ops {
            match op {
                Op::Up(i) => { let _ = list.move_up(i); }
                Op::Down(i) => { let _ = list.move_down(i); }
                Op::Append => { list.append(0); }
                Op::Remove(i) => { let _ = list.remove(i); }
            }

            let mut sorted = list.indices().to_vec();
            sorted.sort_unstable();
            prop_assert_eq!(sorted, (0..list.len()).collect::<Vec<_>>());
            prop_assert_eq!(list.connection_count(), list.len());
        }
    }
}
