//! Implement the SafeDNS API methods.
use anyhow::Result;

use cloudclient_utils::ListParameters;
use cloudclient_utils::ResourceIdentifier;

use super::Client;
use crate::models::safedns::CreateNoteRequest;
use crate::models::safedns::CreateZoneRequest;
use crate::models::safedns::Note;
use crate::models::safedns::PatchZoneRequest;
use crate::models::safedns::Record;
use crate::models::safedns::RecordRequest;
use crate::models::safedns::Settings;
use crate::models::safedns::Template;
use crate::models::safedns::TemplateRequest;
use crate::models::safedns::Zone;

/// Access SafeDNS operations.
pub struct SafeDnsClient<'a> {
    inner: &'a Client,
}

impl Client {
    /// SafeDNS operations.
    pub fn safedns(&self) -> SafeDnsClient<'_> {
        SafeDnsClient { inner: self }
    }
}

// --- Zones --- //
impl<'a> SafeDnsClient<'a> {
    /// Create a new zone.
    ///
    /// Zones are identified by name so no ID is returned.
    pub async fn create_zone(&self, request: &CreateZoneRequest) -> Result<()> {
        let url = self.inner.url("safedns/v1/zones");
        let reference = ResourceIdentifier::reference("zone", &request.name);
        let request = self.inner.client.post(url).json(request);
        self.inner.execute(request, reference).await
    }

    pub async fn delete_zone(&self, name: &str) -> Result<()> {
        let url = self.inner.url(&format!("safedns/v1/zones/{}", name));
        let request = self.inner.client.delete(url);
        let reference = ResourceIdentifier::reference("zone", name);
        self.inner.execute(request, reference).await
    }

    pub async fn patch_zone(&self, name: &str, request: &PatchZoneRequest) -> Result<()> {
        let url = self.inner.url(&format!("safedns/v1/zones/{}", name));
        let request = self.inner.client.patch(url).json(request);
        let reference = ResourceIdentifier::reference("zone", name);
        self.inner.execute(request, reference).await
    }

    /// Fetch a [`Zone`] record from the server.
    pub async fn zone(&self, name: &str) -> Result<Zone> {
        let path = format!("safedns/v1/zones/{}", name);
        let reference = ResourceIdentifier::reference("zone", name);
        self.inner.fetch(&path, reference).await
    }

    /// List zones managed by the account.
    pub async fn zones(&self, params: &ListParameters) -> Result<Vec<Zone>> {
        self.inner.fetch_all("safedns/v1/zones", params).await
    }
}

// --- Zone records and notes --- //
impl<'a> SafeDnsClient<'a> {
    /// Add a note to a zone and return its ID.
    pub async fn create_note(&self, zone: &str, request: &CreateNoteRequest) -> Result<i32> {
        let path = format!("safedns/v1/zones/{}/notes", zone);
        self.inner.create(&path, request).await
    }

    /// Add a record to a zone and return its ID.
    pub async fn create_record(&self, zone: &str, request: &RecordRequest) -> Result<i32> {
        let path = format!("safedns/v1/zones/{}/records", zone);
        self.inner.create(&path, request).await
    }

    pub async fn delete_record(&self, zone: &str, id: i32) -> Result<()> {
        let url = self
            .inner
            .url(&format!("safedns/v1/zones/{}/records/{}", zone, id));
        let request = self.inner.client.delete(url);
        let reference = ResourceIdentifier::reference("record", format!("{}/{}", zone, id));
        self.inner.execute(request, reference).await
    }

    /// Fetch a zone [`Note`] from the server.
    pub async fn note(&self, zone: &str, id: i32) -> Result<Note> {
        let path = format!("safedns/v1/zones/{}/notes/{}", zone, id);
        let reference = ResourceIdentifier::reference("note", format!("{}/{}", zone, id));
        self.inner.fetch(&path, reference).await
    }

    /// List notes attached to a zone.
    pub async fn notes(&self, zone: &str, params: &ListParameters) -> Result<Vec<Note>> {
        let path = format!("safedns/v1/zones/{}/notes", zone);
        self.inner.fetch_all(&path, params).await
    }

    pub async fn patch_record(&self, zone: &str, id: i32, request: &RecordRequest) -> Result<()> {
        let url = self
            .inner
            .url(&format!("safedns/v1/zones/{}/records/{}", zone, id));
        let request = self.inner.client.patch(url).json(request);
        let reference = ResourceIdentifier::reference("record", format!("{}/{}", zone, id));
        self.inner.execute(request, reference).await
    }

    /// Fetch a zone [`Record`] from the server.
    pub async fn record(&self, zone: &str, id: i32) -> Result<Record> {
        let path = format!("safedns/v1/zones/{}/records/{}", zone, id);
        let reference = ResourceIdentifier::reference("record", format!("{}/{}", zone, id));
        self.inner.fetch(&path, reference).await
    }

    /// List records in a zone.
    pub async fn records(&self, zone: &str, params: &ListParameters) -> Result<Vec<Record>> {
        let path = format!("safedns/v1/zones/{}/records", zone);
        self.inner.fetch_all(&path, params).await
    }
}

// --- Templates and template records --- //
impl<'a> SafeDnsClient<'a> {
    /// Create a new template and return its ID.
    pub async fn create_template(&self, request: &TemplateRequest) -> Result<i32> {
        self.inner.create("safedns/v1/templates", request).await
    }

    /// Add a record to a template and return its ID.
    pub async fn create_template_record(
        &self,
        template: i32,
        request: &RecordRequest,
    ) -> Result<i32> {
        let path = format!("safedns/v1/templates/{}/records", template);
        self.inner.create(&path, request).await
    }

    pub async fn delete_template(&self, id: i32) -> Result<()> {
        let url = self.inner.url(&format!("safedns/v1/templates/{}", id));
        let request = self.inner.client.delete(url);
        let reference = ResourceIdentifier::reference("template", id);
        self.inner.execute(request, reference).await
    }

    pub async fn delete_template_record(&self, template: i32, id: i32) -> Result<()> {
        let url = self
            .inner
            .url(&format!("safedns/v1/templates/{}/records/{}", template, id));
        let request = self.inner.client.delete(url);
        let reference =
            ResourceIdentifier::reference("template record", format!("{}/{}", template, id));
        self.inner.execute(request, reference).await
    }

    pub async fn patch_template(&self, id: i32, request: &TemplateRequest) -> Result<()> {
        let url = self.inner.url(&format!("safedns/v1/templates/{}", id));
        let request = self.inner.client.patch(url).json(request);
        let reference = ResourceIdentifier::reference("template", id);
        self.inner.execute(request, reference).await
    }

    pub async fn patch_template_record(
        &self,
        template: i32,
        id: i32,
        request: &RecordRequest,
    ) -> Result<()> {
        let url = self
            .inner
            .url(&format!("safedns/v1/templates/{}/records/{}", template, id));
        let request = self.inner.client.patch(url).json(request);
        let reference =
            ResourceIdentifier::reference("template record", format!("{}/{}", template, id));
        self.inner.execute(request, reference).await
    }

    /// Fetch a [`Template`] record from the server.
    pub async fn template(&self, id: i32) -> Result<Template> {
        let path = format!("safedns/v1/templates/{}", id);
        let reference = ResourceIdentifier::reference("template", id);
        self.inner.fetch(&path, reference).await
    }

    /// Fetch a template [`Record`] from the server.
    pub async fn template_record(&self, template: i32, id: i32) -> Result<Record> {
        let path = format!("safedns/v1/templates/{}/records/{}", template, id);
        let reference =
            ResourceIdentifier::reference("template record", format!("{}/{}", template, id));
        self.inner.fetch(&path, reference).await
    }

    /// List records in a template.
    pub async fn template_records(
        &self,
        template: i32,
        params: &ListParameters,
    ) -> Result<Vec<Record>> {
        let path = format!("safedns/v1/templates/{}/records", template);
        self.inner.fetch_all(&path, params).await
    }

    /// List templates defined by the account.
    pub async fn templates(&self, params: &ListParameters) -> Result<Vec<Template>> {
        self.inner.fetch_all("safedns/v1/templates", params).await
    }
}

// --- Settings --- //
impl<'a> SafeDnsClient<'a> {
    /// Fetch the account SafeDNS [`Settings`].
    pub async fn settings(&self) -> Result<Settings> {
        let reference = ResourceIdentifier::reference("settings", "account");
        self.inner.fetch("safedns/v1/settings", reference).await
    }
}
