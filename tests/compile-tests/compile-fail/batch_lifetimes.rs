extern crate blocking_queue;

use blocking_queue::BlockingQueue;

fn main() {
    let queue = BlockingQueue::<usize>::new();
    queue.push(1).unwrap();

    // Batch borrows the locked queue: nothing may outlive the closure.
    let front = queue.batch(|batch| batch.front()); //~ ERROR lifetime may not live long enough
    assert_eq!(front, Some(&1));
}
