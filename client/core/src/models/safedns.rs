//! SafeDNS API models.
use serde::Deserialize;
use serde::Serialize;

/// A DNS zone managed by SafeDNS.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CreateZoneRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PatchZoneRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A DNS record, part of a zone or of a template.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i32,
    #[serde(default)]
    pub template_id: Option<i32>,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub ttl: i32,
    #[serde(default)]
    pub priority: Option<i32>,
}

/// Attributes of a record to create or update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RecordRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

/// A free text note attached to a zone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i32,
    #[serde(default)]
    pub contact_id: i32,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CreateNoteRequest {
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<i32>,
}

/// A set of records applied to new zones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub default: bool,
    #[serde(default)]
    pub created_at: String,
}

/// Attributes of a template to create or update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TemplateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
}

/// Account wide SafeDNS settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub id: i32,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub nameservers: Vec<Nameserver>,
    #[serde(default)]
    pub custom_soa_allowed: bool,
    #[serde(default)]
    pub custom_base_ns_allowed: bool,
    #[serde(default)]
    pub delegation_allowed: bool,
    #[serde(default)]
    pub product: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nameserver {
    pub host: String,
    #[serde(default)]
    pub ip: String,
}
