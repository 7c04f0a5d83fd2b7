//! Exactly-once construction of the process-wide default client.
//!
//! Kept in its own test binary: the default client is process-global, so
//! these assertions must not share a process with tests that would build it
//! earlier under a different schedule.

use req_core::{default_client, init_default, CallOptions, Client, ClientConfig};

#[test]
fn default_client_is_built_once_and_shared() {
    // Concurrent first use: every thread must observe the same instance.
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| default_client() as *const Client as usize))
        .collect();
    let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addrs.windows(2).all(|w| w[0] == w[1]));

    // Configuration after first use is rejected visibly, not half-applied.
    let installed = init_default(ClientConfig::new().base_url("http://example.invalid")).unwrap();
    assert!(!installed);

    // The already-built instance is unchanged: no base URL was configured,
    // so a relative path is not resolvable and fails before any dispatch.
    let err = req_core::get("not-a-url", &[], CallOptions::new()).unwrap_err();
    assert!(matches!(err, req_core::Error::Build(_)));
}
