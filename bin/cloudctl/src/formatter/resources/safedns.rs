use cloudclient::models::safedns::Note;
use cloudclient::models::safedns::Record;
use cloudclient::models::safedns::Settings;
use cloudclient::models::safedns::Template;
use cloudclient::models::safedns::Zone;

use crate::formatter::Resource;
use crate::utils::value_or_empty;

impl Resource for Zone {
    const FIELDS: &'static [&'static str] = &["name", "description"];

    fn values(&self) -> Vec<String> {
        vec![self.name.clone(), self.description.clone()]
    }
}

impl Resource for Record {
    const FIELDS: &'static [&'static str] =
        &["id", "name", "type", "content", "ttl", "priority", "updated_at"];

    fn values(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.record_type.clone(),
            self.content.clone(),
            self.ttl.to_string(),
            value_or_empty(&self.priority),
            self.updated_at.clone(),
        ]
    }
}

impl Resource for Note {
    const FIELDS: &'static [&'static str] = &["id", "contact_id", "notes", "ip", "created_at"];

    fn values(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.contact_id.to_string(),
            self.notes.clone(),
            self.ip.clone(),
            self.created_at.clone(),
        ]
    }
}

impl Resource for Template {
    const FIELDS: &'static [&'static str] = &["id", "name", "default", "created_at"];

    fn values(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.default.to_string(),
            self.created_at.clone(),
        ]
    }
}

impl Resource for Settings {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "email",
        "nameservers",
        "custom_soa_allowed",
        "custom_base_ns_allowed",
        "delegation_allowed",
        "product",
    ];

    fn values(&self) -> Vec<String> {
        let nameservers: Vec<_> = self
            .nameservers
            .iter()
            .map(|nameserver| nameserver.host.as_str())
            .collect();
        vec![
            self.id.to_string(),
            self.email.clone(),
            nameservers.join(","),
            self.custom_soa_allowed.to_string(),
            self.custom_base_ns_allowed.to_string(),
            self.delegation_allowed.to_string(),
            self.product.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use cloudclient::models::safedns::Nameserver;
    use cloudclient::models::safedns::Note;
    use cloudclient::models::safedns::Record;
    use cloudclient::models::safedns::Settings;
    use cloudclient::models::safedns::Template;
    use cloudclient::models::safedns::Zone;

    use crate::formatter::Resource;

    fn assert_fields<R: Resource + Default>() {
        assert_eq!(R::FIELDS.len(), R::default().values().len());
    }

    #[test]
    fn fields_match_values() {
        assert_fields::<Zone>();
        assert_fields::<Record>();
        assert_fields::<Note>();
        assert_fields::<Template>();
        assert_fields::<Settings>();
    }

    #[test]
    fn settings_join_nameservers() {
        let settings = Settings {
            nameservers: vec![
                Nameserver {
                    host: "ns0.example.com".into(),
                    ip: "10.0.0.1".into(),
                },
                Nameserver {
                    host: "ns1.example.com".into(),
                    ip: "10.0.0.2".into(),
                },
            ],
            ..Default::default()
        };
        assert_eq!(settings.values()[2], "ns0.example.com,ns1.example.com");
    }
}
