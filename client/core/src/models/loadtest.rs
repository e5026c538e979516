//! LoadTest API models.
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Load test agents generate traffic against tested domains.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
}

/// A domain load tests can be run against, once ownership is verified.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateDomainRequest {
    pub name: String,
    pub verification_method: VerificationMethod,
}

/// How ownership of a domain is proven.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationMethod {
    #[default]
    Dns,
    File,
}

impl fmt::Display for VerificationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dns => f.write_str("dns"),
            Self::File => f.write_str("file"),
        }
    }
}

/// The verification method is not one of the supported methods.
#[derive(Debug, thiserror::Error)]
#[error("invalid verification method '{0}', expected one of: dns, file")]
pub struct InvalidVerificationMethod(String);

impl FromStr for VerificationMethod {
    type Err = InvalidVerificationMethod;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "dns" => Ok(Self::Dns),
            "file" => Ok(Self::File),
            _ => Err(InvalidVerificationMethod(value.to_string())),
        }
    }
}

/// A single execution of a load test.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    #[serde(default)]
    pub test_id: Option<Uuid>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub job_start_timestamp: Option<String>,
    #[serde(default)]
    pub job_end_timestamp: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CreateJobRequest {
    pub test_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_timestamp: Option<String>,
    pub run_now: bool,
}

/// Time series collected while a job was running.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JobResults {
    #[serde(default)]
    pub virtual_users: Vec<JobResultsPoint>,
    #[serde(default)]
    pub successful_requests: Vec<JobResultsPoint>,
    #[serde(default)]
    pub failed_requests: Vec<JobResultsPoint>,
    #[serde(default)]
    pub latency: Vec<JobResultsPoint>,
}

impl JobResults {
    /// Align all series by sample index, one row for each virtual users sample.
    pub fn rows(&self) -> Vec<JobResultsRow> {
        let value = |series: &[JobResultsPoint], index: usize| {
            series.get(index).map(|point| point.value).unwrap_or_default()
        };
        self.virtual_users
            .iter()
            .enumerate()
            .map(|(index, point)| JobResultsRow {
                timestamp: point.timestamp.clone(),
                virtual_users: point.value,
                successful_requests: value(&self.successful_requests, index),
                failed_requests: value(&self.failed_requests, index),
                latency: value(&self.latency, index),
            })
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JobResultsPoint {
    pub timestamp: String,
    pub value: f64,
}

/// All job results series sampled at the same point in time.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct JobResultsRow {
    pub timestamp: String,
    pub virtual_users: f64,
    pub successful_requests: f64,
    pub failed_requests: f64,
    pub latency: f64,
}

/// Test settings the job was executed with.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSettings {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub max_users: i32,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub protocol: String,
    #[serde(default)]
    pub path: String,
}

/// Traffic patterns tests can be configured with.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub available_trial: bool,
}

/// Definition of a load test against a domain.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Test {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub domain_id: Uuid,
    #[serde(default)]
    pub scenario_id: Uuid,
    #[serde(default)]
    pub protocol: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub number_of_users: i32,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub recurring_type: Option<String>,
    #[serde(default)]
    pub recurring_value: Option<i32>,
    #[serde(default)]
    pub next_run: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CreateTestRequest {
    pub name: String,
    pub domain_id: Uuid,
    pub scenario_id: Uuid,
    pub protocol: String,
    pub path: String,
    pub number_of_users: i32,
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_value: Option<i32>,
}

/// Threads available to agents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::JobResults;
    use super::VerificationMethod;

    #[test]
    fn verification_method_parse() {
        assert_eq!(
            "DNS".parse::<VerificationMethod>().unwrap(),
            VerificationMethod::Dns
        );
        assert_eq!(
            "file".parse::<VerificationMethod>().unwrap(),
            VerificationMethod::File
        );
        let error = "email".parse::<VerificationMethod>().unwrap_err();
        assert_eq!(
            error.to_string(),
            "invalid verification method 'email', expected one of: dns, file"
        );
    }

    #[test]
    fn job_results_rows_align_series() {
        let results: JobResults = serde_json::from_str(
            r#"{
                "virtual_users": [{"timestamp": "t1", "value": 1}, {"timestamp": "t2", "value": 5}],
                "successful_requests": [{"timestamp": "t1", "value": 10}, {"timestamp": "t2", "value": 50}],
                "failed_requests": [{"timestamp": "t1", "value": 0}],
                "latency": []
            }"#,
        )
        .unwrap();
        let rows = results.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].timestamp, "t2");
        assert_eq!(rows[1].virtual_users, 5.0);
        assert_eq!(rows[1].successful_requests, 50.0);
        assert_eq!(rows[1].failed_requests, 0.0);
        assert_eq!(rows[0].latency, 0.0);
    }
}
