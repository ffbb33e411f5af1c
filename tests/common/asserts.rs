#![allow(dead_code)]

use action_guard_rs::{Rejection, RejectionReason, Verdict};

pub fn assert_allow(verdict: Verdict) {
    match verdict {
        Verdict::Allow => {}
        Verdict::Reject(rejection) => panic!("expected allow, got {:?}", rejection),
    }
}

pub fn assert_reject(verdict: Verdict) -> Rejection {
    match verdict {
        Verdict::Reject(rejection) => rejection,
        Verdict::Allow => panic!("expected rejection, got allow"),
    }
}

pub fn assert_rejected_with(verdict: Verdict, reason: RejectionReason, status: u16, message: &str) {
    let rejection = assert_reject(verdict);
    assert_eq!(rejection.reason, reason);
    assert_eq!(rejection.status(), status);
    assert_eq!(rejection.body().error, message);
}
