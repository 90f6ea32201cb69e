use sovran_dynmap::{DynMap, DynMapError};
use std::thread;
use std::time::Duration;

// Several workers publishing progress into one shared map while the main
// thread polls it. Cloning a DynMap clones the handle; every clone sees
// the same entries.

fn main() -> Result<(), DynMapError> {
    let status = DynMap::new();
    status.set("worker_count", 4);

    let mut handles = vec![];
    for id in 0..4 {
        let status = status.clone();
        handles.push(thread::spawn(move || {
            for step in 1..=5 {
                status.set(format!("worker-{}.step", id), step);
                thread::sleep(Duration::from_millis(10));
            }
            status.set(format!("worker-{}.done", id), true);
        }));
    }

    // Poll while the workers run
    for _ in 0..3 {
        thread::sleep(Duration::from_millis(15));
        let snapshot = status.get_all();
        println!("{} entries so far", snapshot.len());
    }

    for handle in handles {
        handle.join().expect("worker panicked");
    }

    // All workers finished; read their final state with typed accessors
    let worker_count = status.get_as_int("worker_count")?;
    for id in 0..worker_count {
        let done = status.get_as_bool(&format!("worker-{}.done", id))?;
        let step = status.get_as_int(&format!("worker-{}.step", id))?;
        println!("worker {}: step {} done={}", id, step, done);
    }

    Ok(())
}
