use itertools::assert_equal;
use crate::BlockingQueue;
use crate::sync::{Arc, thread};

/// Producer `p` pushes `p*per_producer .. (p+1)*per_producer`.
/// Every value must be received exactly once, and each consumer must see
/// each producer's values in push order.
pub(crate) fn mt_push_pop_test_impl(
    producers_count: usize,
    consumers_count: usize,
    per_producer: usize,
    capacity: usize,
) {
    let queue = Arc::new(BlockingQueue::with_capacity(capacity));

    let mut producer_threads = Vec::new();
    for producer_id in 0..producers_count{
        let queue = queue.clone();
        producer_threads.push(thread::spawn(move || {
            let from = producer_id * per_producer;
            for i in from..from + per_producer{
                queue.push(i).unwrap();
            }
        }));
    }

    let mut consumer_threads = Vec::new();
    for _ in 0..consumers_count{
        let queue = queue.clone();
        consumer_threads.push(thread::spawn(move || {
            let mut received = Vec::new();
            while let Some(i) = queue.pop(){
                assert!(queue.len() <= capacity);
                received.push(i);
            }
            received
        }));
    }

    for thread in producer_threads{
        thread.join().unwrap();
    }
    queue.close();

    let mut all = Vec::new();
    for thread in consumer_threads{
        let received = thread.join().unwrap();

        let mut last_by_producer = vec![None; producers_count];
        for &i in &received{
            let last = &mut last_by_producer[i / per_producer];
            assert!(last.map_or(true, |last| last < i));
            *last = Some(i);
        }
        all.extend(received);
    }

    all.sort_unstable();
    assert_equal(all, 0..producers_count * per_producer);
}

/// Blocks until exactly `producers` threads are parked in a push and
/// `consumers` threads in a pop.
#[cfg(not(loom))]
pub(crate) fn wait_parked<T>(queue: &BlockingQueue<T>, producers: usize, consumers: usize) {
    use std::time::{Duration, Instant};

    let deadline = Instant::now() + Duration::from_secs(10);
    while queue.parked() != (producers, consumers){
        assert!(Instant::now() < deadline,
            "expected {} parked producers and {} parked consumers, have {:?}",
            producers, consumers, queue.parked());
        std::thread::sleep(Duration::from_millis(1));
    }
}
