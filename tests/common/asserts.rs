use resource_cors::{CorsDecision, Headers};

pub fn assert_simple(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Simple(result) => result.headers,
        other => panic!("expected simple decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Preflight(result) => result.headers,
        other => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_no_headers(decision: CorsDecision) {
    assert!(
        decision.headers().is_none(),
        "expected no CORS headers, got {:?}",
        decision
    );
}
