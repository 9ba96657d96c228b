//! The CCP DNS client: login exchange plus the zone and record operations.

use std::time::Duration;

use reqwest::Client;

use crate::error::{CcpError, Result};
use crate::http::create_http_client;
use crate::types::{
    ApiResponse, DnsRecord, DnsRecordSet, DnsZone, LoginParam, NewDnsRecord, RecordSetParam,
    Session, SessionData, UpdateRecordsParam, ZoneParam,
};

/// Production endpoint of the CCP webservice.
pub const DEFAULT_ENDPOINT: &str =
    "https://ccp.netcup.net/run/webservice/servers/endpoint.php?JSON";

/// Default request timeout (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Client configuration.
///
/// The defaults talk to the production endpoint; hosts override the endpoint
/// for staging setups and the user agent to identify themselves.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// URL the action envelopes are POSTed to.
    pub endpoint: String,
    /// User-agent header sent with every request.
    pub user_agent: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: concat!("netcup-ccp-dns/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Client for the CCP DNS webservice.
///
/// Constructed through [`CcpClient::login`], which performs the login
/// exchange and retains the session token for the client's lifetime. The
/// token is never refreshed; once it expires, construct a new client.
///
/// All operations take `&self` and issue exactly one request, so a client
/// can be shared across tasks without locking.
#[derive(Debug)]
pub struct CcpClient {
    pub(crate) http: Client,
    pub(crate) endpoint: String,
    session: Session,
}

impl CcpClient {
    /// Log in against the production endpoint and return a ready client.
    pub async fn login(
        customer_number: impl Into<String>,
        api_key: impl Into<String>,
        api_password: impl Into<String>,
    ) -> Result<Self> {
        Self::login_with(ClientConfig::default(), customer_number, api_key, api_password).await
    }

    /// Log in with an explicit [`ClientConfig`].
    ///
    /// The session token is taken from `responsedata.apisessionid` of the
    /// login response. The in-band `status`/`statuscode` fields are not
    /// inspected: an API-level login failure delivered with HTTP 200 yields
    /// a client whose token is empty rather than an error. This mirrors the
    /// behavior hosts already depend on; check [`CcpClient::session_id`] if
    /// you need to detect it.
    pub async fn login_with(
        config: ClientConfig,
        customer_number: impl Into<String>,
        api_key: impl Into<String>,
        api_password: impl Into<String>,
    ) -> Result<Self> {
        let customer_number = customer_number.into();
        let api_key = api_key.into();
        let api_password = api_password.into();

        let mut client = Self {
            http: create_http_client(config.timeout, &config.user_agent)?,
            endpoint: config.endpoint,
            session: Session {
                customer_number: customer_number.clone(),
                api_key: api_key.clone(),
                session_id: String::new(),
            },
        };

        let response: ApiResponse<SessionData> = client
            .post_action(
                "login",
                &LoginParam {
                    customer_number: &customer_number,
                    api_key: &api_key,
                    api_password: &api_password,
                },
            )
            .await?;

        client.session.session_id = response.response_data.api_session_id;
        Ok(client)
    }

    /// The session token obtained at login.
    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session.session_id
    }

    fn zone_param<'a>(&'a self, domain_name: &'a str) -> ZoneParam<'a> {
        ZoneParam {
            customer_number: &self.session.customer_number,
            api_key: &self.session.api_key,
            api_session_id: &self.session.session_id,
            domain_name,
        }
    }

    fn update_records_param<'a, R: serde::Serialize>(
        &'a self,
        domain_name: &'a str,
        records: &'a [R],
    ) -> UpdateRecordsParam<'a, R> {
        UpdateRecordsParam {
            customer_number: &self.session.customer_number,
            api_key: &self.session.api_key,
            api_session_id: &self.session.session_id,
            domain_name,
            record_set: RecordSetParam {
                dns_records: records,
            },
        }
    }

    /// Fetch the SOA-level data of a zone.
    ///
    /// The zone is fetched fresh on every call, never cached.
    pub async fn get_dns_zone(&self, domain_name: &str) -> Result<DnsZone> {
        let response: ApiResponse<DnsZone> = self
            .post_action("infoDnsZone", &self.zone_param(domain_name))
            .await?;
        Ok(response.response_data)
    }

    /// Fetch the zone's full record set, in the order the endpoint returns
    /// it.
    pub async fn get_dns_records(&self, domain_name: &str) -> Result<Vec<DnsRecord>> {
        let response: ApiResponse<DnsRecordSet> = self
            .post_action("infoDnsRecords", &self.zone_param(domain_name))
            .await?;
        Ok(response.response_data.dns_records)
    }

    /// Fetch a single record by its identifier.
    ///
    /// The endpoint has no per-record lookup; this lists the zone and scans
    /// for an exact identifier match.
    pub async fn get_dns_record_by_id(&self, domain_name: &str, id: &str) -> Result<DnsRecord> {
        let records = self.get_dns_records(domain_name).await?;
        find_record_by_id(&records, id)
            .cloned()
            .ok_or_else(|| CcpError::RecordNotFound {
                domain: domain_name.to_string(),
                record_id: id.to_string(),
            })
    }

    /// Create a record and return it with its server-assigned identifier.
    ///
    /// The endpoint responds with the zone's full updated record set and
    /// does not say which entry is the new one, so the created record is
    /// located by exact match on hostname, type and destination (plus
    /// priority when the request specified a non-empty one). If the zone
    /// already holds a record with identical fields, that record may be
    /// returned instead of the newly created one; the API offers no way to
    /// tell them apart.
    pub async fn create_dns_record(
        &self,
        domain_name: &str,
        record: &NewDnsRecord,
    ) -> Result<DnsRecord> {
        let records = [record.clone()];
        let response: ApiResponse<DnsRecordSet> = self
            .post_action(
                "updateDnsRecords",
                &self.update_records_param(domain_name, &records),
            )
            .await?;

        response
            .response_data
            .dns_records
            .iter()
            .find(|candidate| record.matches(candidate))
            .cloned()
            .ok_or_else(|| CcpError::ReconciliationFailed {
                domain: domain_name.to_string(),
                hostname: record.hostname.clone(),
                record_type: record.record_type.clone(),
                destination: record.destination.clone(),
            })
    }

    /// Update an existing record, addressed by its identifier.
    ///
    /// Returns the record as the endpoint reports it after the update.
    pub async fn update_dns_record(
        &self,
        domain_name: &str,
        record: &DnsRecord,
    ) -> Result<DnsRecord> {
        let mut update = record.clone();
        update.delete_record = false;
        let id = update.id.clone().unwrap_or_default();

        let records = [update];
        let response: ApiResponse<DnsRecordSet> = self
            .post_action(
                "updateDnsRecords",
                &self.update_records_param(domain_name, &records),
            )
            .await?;

        find_record_by_id(&response.response_data.dns_records, &id)
            .cloned()
            .ok_or_else(|| CcpError::RecordNotFound {
                domain: domain_name.to_string(),
                record_id: id,
            })
    }

    /// Delete a record, addressed by its identifier.
    ///
    /// The endpoint reports success by omission: the deleted record must be
    /// absent from the returned record set. Its continued presence is
    /// reported as [`CcpError::DeleteFailed`].
    pub async fn delete_dns_record(&self, domain_name: &str, record: &DnsRecord) -> Result<()> {
        let mut delete = record.clone();
        delete.delete_record = true;
        let id = delete.id.clone().unwrap_or_default();

        let records = [delete];
        let response: ApiResponse<DnsRecordSet> = self
            .post_action(
                "updateDnsRecords",
                &self.update_records_param(domain_name, &records),
            )
            .await?;

        if find_record_by_id(&response.response_data.dns_records, &id).is_some() {
            return Err(CcpError::DeleteFailed {
                domain: domain_name.to_string(),
                record_id: id,
            });
        }
        Ok(())
    }
}

fn find_record_by_id<'a>(records: &'a [DnsRecord], id: &str) -> Option<&'a DnsRecord> {
    records
        .iter()
        .find(|record| record.id.as_deref() == Some(id))
}
