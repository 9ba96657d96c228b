//! Wire types for the CCP webservice.
//!
//! Requests are `{"action": ..., "param": ...}` envelopes; responses share a
//! single envelope whose `responsedata` payload shape depends on the action
//! that was sent. Response types tolerate partial envelopes: every field the
//! endpoint omits decodes to its default.

use serde::{Deserialize, Serialize};

// ============ Envelopes ============

/// Request envelope common to every CCP action.
#[derive(Debug, Serialize)]
pub(crate) struct RequestEnvelope<'a, P: Serialize> {
    pub action: &'a str,
    pub param: &'a P,
}

/// Response envelope common to every CCP action.
///
/// The payload type `T` is fixed by the action that was sent, never by
/// inspecting the response.
#[derive(Debug, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct ApiResponse<T> {
    #[serde(rename = "serverrequestid")]
    pub server_request_id: String,
    pub action: String,
    /// "error", "started", "pending", "warning" or "success".
    pub status: String,
    #[serde(rename = "statuscode")]
    pub status_code: i64,
    #[serde(rename = "shortmessage")]
    pub short_message: String,
    #[serde(rename = "longmessage")]
    pub long_message: String,
    #[serde(rename = "responsedata")]
    pub response_data: T,
}

impl<T: Default> Default for ApiResponse<T> {
    fn default() -> Self {
        Self {
            server_request_id: String::new(),
            action: String::new(),
            status: String::new(),
            status_code: 0,
            short_message: String::new(),
            long_message: String::new(),
            response_data: T::default(),
        }
    }
}

// ============ Authentication ============

/// Credential parameters for the `login` action.
#[derive(Debug, Serialize)]
pub(crate) struct LoginParam<'a> {
    #[serde(rename = "customernumber")]
    pub customer_number: &'a str,
    #[serde(rename = "apikey")]
    pub api_key: &'a str,
    #[serde(rename = "apipassword")]
    pub api_password: &'a str,
}

/// `responsedata` payload of a successful `login`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SessionData {
    #[serde(rename = "apisessionid")]
    pub api_session_id: String,
}

/// Session state retained for the client's lifetime.
///
/// Written once after login, read-only afterwards.
#[derive(Clone)]
pub(crate) struct Session {
    pub customer_number: String,
    pub api_key: String,
    pub session_id: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("customer_number", &self.customer_number)
            .field("api_key", &"<redacted>")
            .field("session_id", &"<redacted>")
            .finish()
    }
}

// ============ Zone ============

/// SOA-level data of a DNS zone, as returned by `infoDnsZone`.
///
/// The endpoint returns the numeric values as strings; they are passed
/// through untransformed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsZone {
    #[serde(rename = "domainname")]
    pub name: String,
    pub ttl: String,
    pub serial: String,
    pub refresh: String,
    pub retry: String,
    pub expire: String,
    #[serde(rename = "dnssecstatus")]
    pub dnssec_status: bool,
}

/// Parameters for zone-scoped actions (`infoDnsZone`, `infoDnsRecords`).
#[derive(Debug, Serialize)]
pub(crate) struct ZoneParam<'a> {
    #[serde(rename = "customernumber")]
    pub customer_number: &'a str,
    #[serde(rename = "apikey")]
    pub api_key: &'a str,
    #[serde(rename = "apisessionid")]
    pub api_session_id: &'a str,
    #[serde(rename = "domainname")]
    pub domain_name: &'a str,
}

// ============ Records ============

fn is_false(b: &bool) -> bool {
    !*b
}

/// A DNS record as the CCP webservice sees it.
///
/// `id` is assigned server-side on creation and addresses the record in
/// update/delete calls. `delete_record` is a request marker: submitting a
/// record with it set removes the record from the zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub hostname: String,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    pub destination: String,
    #[serde(rename = "deleterecord", skip_serializing_if = "is_false")]
    pub delete_record: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<String>,
}

/// A record submitted for creation: no identifier, no state, no delete
/// marker.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewDnsRecord {
    pub hostname: String,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    pub destination: String,
}

impl NewDnsRecord {
    /// Whether `candidate` is the record this request created.
    ///
    /// The endpoint does not echo back which record of the returned set is
    /// the new one, so creation is reconciled by exact match on hostname,
    /// type and destination. Priority participates only when this request
    /// specified a non-empty priority.
    pub(crate) fn matches(&self, candidate: &DnsRecord) -> bool {
        let base = self.hostname == candidate.hostname
            && self.record_type == candidate.record_type
            && self.destination == candidate.destination;

        match self.priority.as_deref() {
            Some(priority) if !priority.is_empty() => {
                base && candidate.priority.as_deref() == Some(priority)
            }
            _ => base,
        }
    }
}

/// `responsedata` payload of `infoDnsRecords` and `updateDnsRecords`: the
/// zone's full record set.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct DnsRecordSet {
    #[serde(rename = "dnsrecords")]
    pub dns_records: Vec<DnsRecord>,
}

/// Borrowed one-element record set for `updateDnsRecords` payloads.
#[derive(Debug, Serialize)]
pub(crate) struct RecordSetParam<'a, R: Serialize> {
    #[serde(rename = "dnsrecords")]
    pub dns_records: &'a [R],
}

/// Parameters for `updateDnsRecords` (create, update and delete all go
/// through this action).
#[derive(Debug, Serialize)]
pub(crate) struct UpdateRecordsParam<'a, R: Serialize> {
    #[serde(rename = "customernumber")]
    pub customer_number: &'a str,
    #[serde(rename = "apikey")]
    pub api_key: &'a str,
    #[serde(rename = "apisessionid")]
    pub api_session_id: &'a str,
    #[serde(rename = "domainname")]
    pub domain_name: &'a str,
    #[serde(rename = "dnsrecordset")]
    pub record_set: RecordSetParam<'a, R>,
}
