// tests/unit/sharing_test.rs
use std::{rc::Rc, sync::Arc, thread};

use closed_interval::{ClosedInterval, Comparator, NaturalOrder, Reversed};

#[test]
fn one_comparer_backs_many_intervals() {
    let shared = Rc::new(NaturalOrder.reversed());

    let a = ClosedInterval::new_by(1, 2, Rc::clone(&shared));
    let b = ClosedInterval::new_by(7, 3, Rc::clone(&shared));

    assert_eq!(a.into_limit_points(), (2, 1));
    assert_eq!(b.into_limit_points(), (7, 3));
    assert_eq!(Rc::strong_count(&shared), 1);
}

#[test]
fn boxed_trait_object_comparer() {
    let cmp: Box<dyn Comparator<i32>> = Box::new(Reversed(NaturalOrder));
    let iv = ClosedInterval::new_by(0, 5, cmp);

    assert_eq!(*iv.lower_limit_point(), 5);
    assert!(iv.contains(&2));
}

#[test]
fn intervals_are_queried_concurrently() {
    let shared: Arc<dyn Comparator<i64> + Send + Sync> = Arc::new(NaturalOrder);
    let iv = Arc::new(ClosedInterval::new_by(-100, 100, Arc::clone(&shared)));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let iv = Arc::clone(&iv);
            thread::spawn(move || (-150i64..150).filter(|p| iv.contains(p)).count())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 201);
    }
}
