/// Scan Flow Tests
///
/// Full pipeline against a local DNS server:
/// stdin → Dispatcher → Workers (UDP CNAME lookup → verify → classify) → Collector → stdout

#[path = "../common/mod.rs"]
mod common;
use common::{run_scan, MockAnswer, MockDnsServer, ScanFlowBuilder, TestDomains};
use cnamescan_infrastructure::system::SystemHostResolver;
use std::sync::Arc;
use std::time::Duration;

async fn sample_server() -> MockDnsServer {
    MockDnsServer::start(vec![
        (
            TestDomains::abandoned(),
            MockAnswer::Cname(TestDomains::s3_bucket().to_string()),
        ),
        (TestDomains::direct(), MockAnswer::A([93, 184, 216, 34])),
        (
            TestDomains::stale(),
            MockAnswer::Cname(TestDomains::heroku_app().to_string()),
        ),
        (
            TestDomains::internal(),
            MockAnswer::Cname(TestDomains::internal_lb().to_string()),
        ),
        ("gone.example.com", MockAnswer::Soa),
    ])
    .await
    .expect("Failed to start mock DNS server")
}

// ============================================================================
// Per-domain outcomes
// ============================================================================

#[tokio::test]
async fn test_abandoned_s3_bucket_reported_as_takeover() {
    // Arrange
    let server = sample_server().await;
    let runner = ScanFlowBuilder::new(&server).build();

    // Act
    let (lines, summary) = run_scan(runner, "abandoned.example.com\n").await;

    // Assert
    assert_eq!(
        lines,
        vec![
            "[DANGLING] abandoned.example.com -> bucket.s3.amazonaws.com (does not resolve)",
            "[TAKEOVER] abandoned.example.com -> bucket.s3.amazonaws.com (vulnerable: AWS S3)",
        ]
    );
    assert_eq!(summary.takeover, 1);
}

#[tokio::test]
async fn test_direct_a_record_produces_no_output() {
    let server = sample_server().await;
    let flow = ScanFlowBuilder::new(&server).verbose(true);
    let diagnostics = flow.diagnostics();

    let (lines, summary) = run_scan(flow.build(), "www.example.com\n").await;

    assert!(lines.is_empty());
    assert_eq!(summary.findings(), 0);
    assert_eq!(diagnostics.lines(), vec!["No CNAME for www.example.com"]);
}

#[tokio::test]
async fn test_resolving_cname_shown_only_in_verbose_mode() {
    let server = sample_server().await;

    let quiet = ScanFlowBuilder::new(&server)
        .live_hosts(&[TestDomains::heroku_app()])
        .build();
    let (lines, _) = run_scan(quiet, "stale.example.com\n").await;
    assert!(lines.is_empty());

    let verbose = ScanFlowBuilder::new(&server)
        .live_hosts(&[TestDomains::heroku_app()])
        .verbose(true)
        .build();
    let (lines, _) = run_scan(verbose, "stale.example.com\n").await;
    assert_eq!(lines, vec!["[OK] stale.example.com -> old-app.herokuapp.com"]);
}

#[tokio::test]
async fn test_nxdomain_is_not_a_finding() {
    let server = sample_server().await;
    let runner = ScanFlowBuilder::new(&server).build();

    let (lines, summary) = run_scan(runner, "gone.example.com\n").await;

    assert!(lines.is_empty());
    assert_eq!(summary.processed, 1);
}

#[tokio::test]
async fn test_cname_to_root_is_not_a_finding() {
    let server = MockDnsServer::start(vec![(
        "root.example.com",
        MockAnswer::Cname(".".to_string()),
    )])
    .await
    .unwrap();
    let flow = ScanFlowBuilder::new(&server).verbose(true);
    let diagnostics = flow.diagnostics();

    let (lines, summary) = run_scan(flow.build(), "root.example.com\n").await;

    assert!(lines.is_empty());
    assert_eq!(summary.findings(), 0);
    assert_eq!(diagnostics.lines(), vec!["No CNAME for root.example.com"]);
}

#[tokio::test]
async fn test_input_is_normalized_before_lookup() {
    let server = sample_server().await;
    let runner = ScanFlowBuilder::new(&server).build();

    let (lines, _) = run_scan(runner, "   ABANDONED.Example.COM \r\n").await;

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("[DANGLING] abandoned.example.com ->"));
}

// ============================================================================
// Mixed input
// ============================================================================

#[tokio::test]
async fn test_blank_lines_do_not_change_findings() {
    // Arrange
    let server = sample_server().await;
    let domains = [
        TestDomains::abandoned(),
        TestDomains::direct(),
        TestDomains::internal(),
    ];

    let mut expected = Vec::new();
    for domain in domains {
        let runner = ScanFlowBuilder::new(&server).build();
        let (lines, _) = run_scan(runner, &format!("{}\n", domain)).await;
        expected.extend(lines);
    }

    // Act
    let runner = ScanFlowBuilder::new(&server).build();
    let input = "\n\nabandoned.example.com\n   \nwww.example.com\n\t\n\ninternal.example.com\n\n";
    let (mut lines, summary) = run_scan(runner, input).await;

    // Assert
    lines.sort();
    expected.sort();
    assert_eq!(lines, expected);
    assert_eq!(summary.dispatched, 3);
    assert_eq!(server.query_count(), 6);
}

#[tokio::test]
async fn test_large_batch_keeps_dangling_before_takeover() {
    // Arrange - 30 domains pointing at unclaimed GitHub Pages sites
    let names: Vec<String> = (0..30).map(|i| format!("site{}.example.com", i)).collect();
    let answers = names
        .iter()
        .enumerate()
        .map(|(i, n)| (n.as_str(), MockAnswer::Cname(format!("user{}.github.io", i))))
        .collect();
    let server = MockDnsServer::start(answers).await.unwrap();
    let runner = ScanFlowBuilder::new(&server).concurrency(8).build();

    // Act
    let (lines, summary) = run_scan(runner, &names.join("\n")).await;

    // Assert
    assert_eq!(summary.dangling, 30);
    assert_eq!(summary.takeover, 30);
    for (i, name) in names.iter().enumerate() {
        let dangling = format!("[DANGLING] {} -> user{}.github.io (does not resolve)", name, i);
        let takeover = format!("[TAKEOVER] {} -> user{}.github.io (vulnerable: GitHub Pages)", name, i);
        let d = lines.iter().position(|l| *l == dangling).unwrap();
        let t = lines.iter().position(|l| *l == takeover).unwrap();
        assert!(d < t);
    }
}

// ============================================================================
// System resolver as verifier
// ============================================================================

#[tokio::test]
async fn test_system_resolver_verifies_targets() {
    // Arrange - one target that always resolves, one that never can
    let server = MockDnsServer::start(vec![
        ("alive.example.com", MockAnswer::Cname("localhost".to_string())),
        (
            "dead.example.com",
            MockAnswer::Cname("unclaimed.invalid".to_string()),
        ),
    ])
    .await
    .unwrap();

    let runner = ScanFlowBuilder::new(&server)
        .verbose(true)
        .host_resolver(Arc::new(SystemHostResolver::new(Duration::from_secs(5))))
        .build();

    // Act
    let (mut lines, _) = run_scan(runner, "alive.example.com\ndead.example.com\n").await;

    // Assert
    lines.sort();
    assert_eq!(
        lines,
        vec![
            "[DANGLING] dead.example.com -> unclaimed.invalid (does not resolve)",
            "[OK] alive.example.com -> localhost",
        ]
    );
}
