use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

/// Command to run cloudctl against a mock API server with an isolated contexts store.
fn cloudctl(server: &MockServer, store: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cloudctl").unwrap();
    cmd.env_clear()
        .env("HOME", store.path())
        .env("CLOUDCTL_API_KEY", "test-key")
        .env("CLOUDCTL_API_URL", server.base_url())
        .env("CLOUDCTL_CONTEXTS_FILE", store.path().join("contexts"));
    cmd
}

fn page(data: serde_json::Value) -> serde_json::Value {
    let count = data.as_array().map(Vec::len).unwrap_or_default();
    json!({
        "data": data,
        "meta": {"pagination": {"total": count, "count": count, "per_page": 100, "current_page": 1, "total_pages": 1}}
    })
}

#[test]
fn zone_show_continues_after_failures() {
    let server = MockServer::start();
    let store = tempfile::tempdir().unwrap();
    let found = server.mock(|when, then| {
        when.method(GET)
            .path("/safedns/v1/zones/example.com")
            .header("authorization", "test-key");
        then.status(200).json_body(json!({
            "data": {"name": "example.com", "description": "main zone"},
            "meta": {}
        }));
    });
    let missing = server.mock(|when, then| {
        when.method(GET).path("/safedns/v1/zones/missing.com");
        then.status(404);
    });
    let other = server.mock(|when, then| {
        when.method(GET).path("/safedns/v1/zones/example.org");
        then.status(200).json_body(json!({
            "data": {"name": "example.org", "description": "other zone"},
            "meta": {}
        }));
    });

    cloudctl(&server, &store)
        .args(["safedns", "zone", "show", "example.com", "missing.com", "example.org"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("main zone"))
        .stdout(predicate::str::contains("other zone"))
        .stderr(predicate::str::contains("Error processing [missing.com]"))
        .stderr(predicate::str::contains("error refers to zone 'missing.com'"));
    found.assert();
    missing.assert();
    other.assert();
}

#[test]
fn invalid_ids_are_reported_per_item() {
    let server = MockServer::start();
    let store = tempfile::tempdir().unwrap();
    let invoice = server.mock(|when, then| {
        when.method(GET).path("/billing/v1/invoices/5");
        then.status(200).json_body(json!({
            "data": {"id": 5, "date": "2024-02-29", "paid": true, "net": 10.0, "vat": 2.0, "gross": 12.0},
            "meta": {}
        }));
    });

    cloudctl(&server, &store)
        .args(["billing", "invoice", "show", "abc", "5", "--format", "value"])
        .assert()
        .code(1)
        .stdout("5 2024-02-29 true 10.00 2.00 12.00\n")
        .stderr(predicate::str::contains("Invalid invoice ID [abc]"));
    invoice.assert();
}

#[test]
fn template_show_by_name() {
    let server = MockServer::start();
    let store = tempfile::tempdir().unwrap();
    let lookup = server.mock(|when, then| {
        when.method(GET)
            .path("/safedns/v1/templates")
            .query_param("name:eq", "web");
        then.status(200)
            .json_body(page(json!([{"id": 3, "name": "web", "default": false}])));
    });
    let template = server.mock(|when, then| {
        when.method(GET).path("/safedns/v1/templates/3");
        then.status(200).json_body(json!({
            "data": {"id": 3, "name": "web", "default": false, "created_at": "2024-01-01T00:00:00+00:00"},
            "meta": {}
        }));
    });

    cloudctl(&server, &store)
        .args(["safedns", "template", "show", "web", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"created_at\": \"2024-01-01T00:00:00+00:00\""));
    lookup.assert();
    template.assert();
}

#[test]
fn template_show_by_ambiguous_name() {
    let server = MockServer::start();
    let store = tempfile::tempdir().unwrap();
    server.mock(|when, then| {
        when.method(GET).path("/safedns/v1/templates");
        then.status(200).json_body(page(json!([
            {"id": 3, "name": "web"},
            {"id": 4, "name": "web"}
        ])));
    });
    let template = server.mock(|when, then| {
        when.method(GET).path_includes("/safedns/v1/templates/");
        then.status(200);
    });

    cloudctl(&server, &store)
        .args(["safedns", "template", "show", "web"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "more than one item found matching [web] (name)",
        ));
    template.assert_calls(0);
}

#[test]
fn list_filters_and_selects_properties() {
    let server = MockServer::start();
    let store = tempfile::tempdir().unwrap();
    let zones = server.mock(|when, then| {
        when.method(GET)
            .path("/safedns/v1/zones")
            .query_param("name:lk", "*.com")
            .query_param("sort", "name:asc");
        then.status(200).json_body(page(json!([
            {"name": "a.com", "description": "first"},
            {"name": "b.com", "description": "second"}
        ])));
    });

    cloudctl(&server, &store)
        .args([
            "safedns",
            "zone",
            "list",
            "--filter",
            "name:lk=*.com",
            "--sort",
            "name:asc",
            "--format",
            "yaml",
            "--property",
            "name",
        ])
        .assert()
        .success()
        .stdout("- name: a.com\n- name: b.com\n");
    zones.assert();
}

#[test]
fn missing_context_without_api_key() {
    let server = MockServer::start();
    let store = tempfile::tempdir().unwrap();
    cloudctl(&server, &store)
        .env_remove("CLOUDCTL_API_KEY")
        .args(["safedns", "zone", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("A context named 'default' was not found"));
}

#[test]
fn configure_and_use_context() {
    let server = MockServer::start();
    let store = tempfile::tempdir().unwrap();

    cloudctl(&server, &store)
        .args(["context", "configure", "--timeout", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Context 'default' was configured."));

    cloudctl(&server, &store)
        .env_remove("CLOUDCTL_API_KEY")
        .args(["context", "list", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"api_key\": \"Set\""))
        .stdout(predicate::str::contains("\"active\": true"))
        .stdout(predicate::str::contains("test-key").not());

    let debit = server.mock(|when, then| {
        when.method(GET)
            .path("/billing/v1/direct-debit")
            .header("authorization", "test-key");
        then.status(200)
            .json_body(json!({"data": {"is_activated": true}, "meta": {}}));
    });
    cloudctl(&server, &store)
        .env_remove("CLOUDCTL_API_KEY")
        .env_remove("CLOUDCTL_API_URL")
        .args(["billing", "direct-debit", "show", "--format", "value"])
        .assert()
        .success()
        .stdout("true\n");
    debit.assert();
}

#[test]
fn delete_requires_existing_context() {
    let server = MockServer::start();
    let store = tempfile::tempdir().unwrap();
    cloudctl(&server, &store)
        .args(["--context", "work", "context", "delete", "--yes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("A context named 'work' was not found"));
}

#[test]
fn job_stop_reports_each_job() {
    let server = MockServer::start();
    let store = tempfile::tempdir().unwrap();
    let id = "6c5d0b9f-1f9b-4c55-9d2b-4a7c0c6d2a10";
    let stop = server.mock(|when, then| {
        when.method(PUT)
            .path(format!("/ltaas/v1/jobs/{}/stop", id));
        then.status(204);
    });

    cloudctl(&server, &store)
        .args(["loadtest", "job", "stop", id, "not-a-uuid"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(format!("Job '{}' was stopped.", id)))
        .stderr(predicate::str::contains("Invalid job ID [not-a-uuid]"));
    stop.assert();
}
