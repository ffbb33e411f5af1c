mod common;

use action_guard_rs::RejectionReason;
use common::asserts::{assert_allow, assert_reject};
use common::builders::{guard, valid_request};
use std::sync::Arc;
use std::thread;

#[test]
fn guard_can_be_shared_across_threads() {
    let guard = Arc::new(guard().build());

    let mut handles = Vec::new();
    for i in 0..8 {
        let guard = Arc::clone(&guard);
        handles.push(thread::spawn(move || {
            let host = format!("tenant{i}.example");
            let allowed = valid_request()
                .host(host.as_str())
                .origin(format!("https://{host}"));
            assert_allow(allowed.check(&guard));

            let foreign = valid_request()
                .host(host.as_str())
                .origin(format!("https://tenant{}.example", i + 100));
            assert_eq!(
                assert_reject(foreign.check(&guard)).reason,
                RejectionReason::Forbidden
            );
        }));
    }

    for handle in handles {
        handle.join().expect("thread panic");
    }
}
