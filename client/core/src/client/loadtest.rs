//! Implement the LoadTest API methods.
use anyhow::Result;
use uuid::Uuid;

use cloudclient_utils::ListParameters;
use cloudclient_utils::ResourceIdentifier;

use super::Client;
use crate::models::loadtest::Agent;
use crate::models::loadtest::CreateDomainRequest;
use crate::models::loadtest::CreateJobRequest;
use crate::models::loadtest::CreateTestRequest;
use crate::models::loadtest::Domain;
use crate::models::loadtest::Job;
use crate::models::loadtest::JobResults;
use crate::models::loadtest::JobSettings;
use crate::models::loadtest::Scenario;
use crate::models::loadtest::Test;
use crate::models::loadtest::Thread;

/// Access LoadTest operations.
pub struct LoadTestClient<'a> {
    inner: &'a Client,
}

impl Client {
    /// LoadTest operations.
    pub fn loadtest(&self) -> LoadTestClient<'_> {
        LoadTestClient { inner: self }
    }
}

// --- Domains --- //
impl<'a> LoadTestClient<'a> {
    /// Register a domain to test and return its ID.
    pub async fn create_domain(&self, request: &CreateDomainRequest) -> Result<Uuid> {
        self.inner.create("ltaas/v1/domains", request).await
    }

    pub async fn delete_domain(&self, id: Uuid) -> Result<()> {
        let url = self.inner.url(&format!("ltaas/v1/domains/{}", id));
        let request = self.inner.client.delete(url);
        let reference = ResourceIdentifier::reference("domain", id);
        self.inner.execute(request, reference).await
    }

    /// Fetch a [`Domain`] record from the server.
    pub async fn domain(&self, id: Uuid) -> Result<Domain> {
        let path = format!("ltaas/v1/domains/{}", id);
        let reference = ResourceIdentifier::reference("domain", id);
        self.inner.fetch(&path, reference).await
    }

    /// List domains registered for testing.
    pub async fn domains(&self, params: &ListParameters) -> Result<Vec<Domain>> {
        self.inner.fetch_all("ltaas/v1/domains", params).await
    }

    /// Verify domain ownership with the DNS record method.
    pub async fn verify_domain_by_dns(&self, id: Uuid) -> Result<()> {
        let url = self
            .inner
            .url(&format!("ltaas/v1/domains/{}/verify-by-dns", id));
        let request = self.inner.client.post(url);
        let reference = ResourceIdentifier::reference("domain", id);
        self.inner.execute(request, reference).await
    }

    /// Verify domain ownership with the hosted file method.
    pub async fn verify_domain_by_file(&self, id: Uuid) -> Result<()> {
        let url = self
            .inner
            .url(&format!("ltaas/v1/domains/{}/verify-by-file", id));
        let request = self.inner.client.post(url);
        let reference = ResourceIdentifier::reference("domain", id);
        self.inner.execute(request, reference).await
    }
}

// --- Tests and jobs --- //
impl<'a> LoadTestClient<'a> {
    /// Schedule a job for a test and return its ID.
    pub async fn create_job(&self, request: &CreateJobRequest) -> Result<Uuid> {
        self.inner.create("ltaas/v1/jobs", request).await
    }

    /// Define a new test and return its ID.
    pub async fn create_test(&self, request: &CreateTestRequest) -> Result<Uuid> {
        self.inner.create("ltaas/v1/tests", request).await
    }

    pub async fn delete_job(&self, id: Uuid) -> Result<()> {
        let url = self.inner.url(&format!("ltaas/v1/jobs/{}", id));
        let request = self.inner.client.delete(url);
        let reference = ResourceIdentifier::reference("job", id);
        self.inner.execute(request, reference).await
    }

    pub async fn delete_test(&self, id: Uuid) -> Result<()> {
        let url = self.inner.url(&format!("ltaas/v1/tests/{}", id));
        let request = self.inner.client.delete(url);
        let reference = ResourceIdentifier::reference("test", id);
        self.inner.execute(request, reference).await
    }

    /// Fetch a [`Job`] record from the server.
    pub async fn job(&self, id: Uuid) -> Result<Job> {
        let path = format!("ltaas/v1/jobs/{}", id);
        let reference = ResourceIdentifier::reference("job", id);
        self.inner.fetch(&path, reference).await
    }

    /// Fetch the [`JobResults`] collected for a job.
    pub async fn job_results(&self, id: Uuid) -> Result<JobResults> {
        let path = format!("ltaas/v1/jobs/{}/results", id);
        let reference = ResourceIdentifier::reference("job", id);
        self.inner.fetch(&path, reference).await
    }

    /// Fetch the [`JobSettings`] a job was executed with.
    pub async fn job_settings(&self, id: Uuid) -> Result<JobSettings> {
        let path = format!("ltaas/v1/jobs/{}/settings", id);
        let reference = ResourceIdentifier::reference("job", id);
        self.inner.fetch(&path, reference).await
    }

    /// List test jobs.
    pub async fn jobs(&self, params: &ListParameters) -> Result<Vec<Job>> {
        self.inner.fetch_all("ltaas/v1/jobs", params).await
    }

    /// Stop a running job.
    pub async fn stop_job(&self, id: Uuid) -> Result<()> {
        let url = self.inner.url(&format!("ltaas/v1/jobs/{}/stop", id));
        let request = self.inner.client.put(url);
        let reference = ResourceIdentifier::reference("job", id);
        self.inner.execute(request, reference).await
    }

    /// Fetch a [`Test`] record from the server.
    pub async fn test(&self, id: Uuid) -> Result<Test> {
        let path = format!("ltaas/v1/tests/{}", id);
        let reference = ResourceIdentifier::reference("test", id);
        self.inner.fetch(&path, reference).await
    }

    /// List tests defined by the account.
    pub async fn tests(&self, params: &ListParameters) -> Result<Vec<Test>> {
        self.inner.fetch_all("ltaas/v1/tests", params).await
    }
}

// --- Agents, threads and scenarios --- //
impl<'a> LoadTestClient<'a> {
    /// Fetch an [`Agent`] record from the server.
    pub async fn agent(&self, id: Uuid) -> Result<Agent> {
        let path = format!("ltaas/v1/agents/{}", id);
        let reference = ResourceIdentifier::reference("agent", id);
        self.inner.fetch(&path, reference).await
    }

    pub async fn agents(&self, params: &ListParameters) -> Result<Vec<Agent>> {
        self.inner.fetch_all("ltaas/v1/agents", params).await
    }

    /// Fetch a [`Scenario`] record from the server.
    pub async fn scenario(&self, id: Uuid) -> Result<Scenario> {
        let path = format!("ltaas/v1/scenarios/{}", id);
        let reference = ResourceIdentifier::reference("scenario", id);
        self.inner.fetch(&path, reference).await
    }

    pub async fn scenarios(&self, params: &ListParameters) -> Result<Vec<Scenario>> {
        self.inner.fetch_all("ltaas/v1/scenarios", params).await
    }

    /// Fetch a [`Thread`] record from the server.
    pub async fn thread(&self, id: Uuid) -> Result<Thread> {
        let path = format!("ltaas/v1/threads/{}", id);
        let reference = ResourceIdentifier::reference("thread", id);
        self.inner.fetch(&path, reference).await
    }

    pub async fn threads(&self, params: &ListParameters) -> Result<Vec<Thread>> {
        self.inner.fetch_all("ltaas/v1/threads", params).await
    }
}
