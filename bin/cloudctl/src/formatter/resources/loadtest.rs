use cloudclient::models::loadtest::Agent;
use cloudclient::models::loadtest::Domain;
use cloudclient::models::loadtest::Job;
use cloudclient::models::loadtest::JobResultsRow;
use cloudclient::models::loadtest::JobSettings;
use cloudclient::models::loadtest::Scenario;
use cloudclient::models::loadtest::Test;
use cloudclient::models::loadtest::Thread;

use crate::formatter::Resource;
use crate::utils::value_or_empty;

impl Resource for Agent {
    const FIELDS: &'static [&'static str] = &["id", "name"];

    fn values(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone()]
    }
}

impl Resource for Domain {
    const FIELDS: &'static [&'static str] = &["id", "name"];

    fn values(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone()]
    }
}

impl Resource for Job {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "test_id",
        "status",
        "job_start_timestamp",
        "job_end_timestamp",
        "created_at",
    ];

    fn values(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            value_or_empty(&self.test_id),
            self.status.clone(),
            value_or_empty(&self.job_start_timestamp),
            value_or_empty(&self.job_end_timestamp),
            self.created_at.clone(),
        ]
    }
}

impl Resource for JobResultsRow {
    const FIELDS: &'static [&'static str] = &[
        "timestamp",
        "virtual_users",
        "successful_requests",
        "failed_requests",
        "latency",
    ];

    fn values(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.virtual_users.to_string(),
            self.successful_requests.to_string(),
            self.failed_requests.to_string(),
            self.latency.to_string(),
        ]
    }
}

impl Resource for JobSettings {
    const FIELDS: &'static [&'static str] = &[
        "name",
        "date",
        "duration",
        "max_users",
        "domain",
        "protocol",
        "path",
    ];

    fn values(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.date.clone(),
            self.duration.clone(),
            self.max_users.to_string(),
            self.domain.clone(),
            self.protocol.clone(),
            self.path.clone(),
        ]
    }
}

impl Resource for Scenario {
    const FIELDS: &'static [&'static str] = &["id", "name", "available_trial"];

    fn values(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.available_trial.to_string(),
        ]
    }
}

impl Resource for Test {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "domain_id",
        "scenario_id",
        "protocol",
        "path",
        "number_of_users",
        "duration",
        "recurring_type",
        "recurring_value",
        "next_run",
        "created_at",
    ];

    fn values(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.domain_id.to_string(),
            self.scenario_id.to_string(),
            self.protocol.clone(),
            self.path.clone(),
            self.number_of_users.to_string(),
            self.duration.clone(),
            value_or_empty(&self.recurring_type),
            value_or_empty(&self.recurring_value),
            value_or_empty(&self.next_run),
            self.created_at.clone(),
        ]
    }
}

impl Resource for Thread {
    const FIELDS: &'static [&'static str] = &["id", "name"];

    fn values(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone()]
    }
}

#[cfg(test)]
mod tests {
    use cloudclient::models::loadtest::Agent;
    use cloudclient::models::loadtest::Domain;
    use cloudclient::models::loadtest::Job;
    use cloudclient::models::loadtest::JobResultsRow;
    use cloudclient::models::loadtest::JobSettings;
    use cloudclient::models::loadtest::Scenario;
    use cloudclient::models::loadtest::Test;
    use cloudclient::models::loadtest::Thread;

    use crate::formatter::Resource;

    fn assert_fields<R: Resource + Default>() {
        assert_eq!(R::FIELDS.len(), R::default().values().len());
    }

    #[test]
    fn fields_match_values() {
        assert_fields::<Agent>();
        assert_fields::<Domain>();
        assert_fields::<Job>();
        assert_fields::<JobResultsRow>();
        assert_fields::<JobSettings>();
        assert_fields::<Scenario>();
        assert_fields::<Test>();
        assert_fields::<Thread>();
    }

    #[test]
    fn job_without_test() {
        let job = Job {
            status: "Pending".into(),
            ..Default::default()
        };
        let values = job.values();
        assert_eq!(values[1], "");
        assert_eq!(values[2], "Pending");
    }
}
