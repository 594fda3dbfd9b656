use crate::BlockingQueue;
use crate::sync::{Arc, thread};
use super::common::*;

#[test]
fn loom_spsc_test(){
    loom::model(|| {
        mt_push_pop_test_impl(1, 1, 3, 1);
    });
}

#[test]
fn loom_mpsc_test(){
    loom::model(|| {
        mt_push_pop_test_impl(2, 1, 1, 1);
    });
}

#[test]
fn loom_close_releases_consumers_test(){
    loom::model(|| {
        let queue = Arc::new(BlockingQueue::<usize>::new());

        let consumers: Vec<_> = (0..2).map(|_|{
            let queue = queue.clone();
            thread::spawn(move || queue.pop())
        }).collect();

        queue.close();

        for consumer in consumers{
            assert_eq!(consumer.join().unwrap(), None);
        }
    });
}

#[test]
fn loom_close_releases_producer_test(){
    loom::model(|| {
        let queue = Arc::new(BlockingQueue::with_capacity(1));
        queue.push(0).unwrap();

        let producer = {
            let queue = queue.clone();
            thread::spawn(move || queue.push(1))
        };

        queue.close();

        assert_eq!(producer.join().unwrap().unwrap_err().into_inner(), 1);
        assert_eq!(queue.pop(), Some(0));
        assert_eq!(queue.pop(), None);
    });
}

// Two pushes, two parked consumers, no further push: both must wake.
#[test]
fn loom_wakeup_chain_test(){
    loom::model(|| {
        let queue = Arc::new(BlockingQueue::new());

        let consumers: Vec<_> = (0..2).map(|_|{
            let queue = queue.clone();
            thread::spawn(move || queue.pop())
        }).collect();

        queue.push(1).unwrap();
        queue.push(2).unwrap();

        let mut values: Vec<_> = consumers.into_iter()
            .map(|consumer| consumer.join().unwrap())
            .collect();
        values.sort_unstable();
        assert_eq!(values, [Some(1), Some(2)]);
    });
}
