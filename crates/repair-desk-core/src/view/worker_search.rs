//! Worker Search View Model
//!
//! Repair request form state, search lifecycle and the connectivity probe.

use tracing::{debug, error, info};

use crate::domain::Worker;
use crate::error::GatewayResult;
use crate::gateway::SharedGateway;
use crate::repository::WorkerRepository;

pub const SEARCH_FAILED_MESSAGE: &str = "엔지니어 검색 중 오류가 발생했습니다.";

/// Informational message for a search with no matches
pub fn no_engineers_message(city: &str, district: &str) -> String {
    format!("{} {} 지역에 등록된 엔지니어가 없습니다.", city, district)
}

/// Advisory result of the on-mount probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Checking,
    Connected { has_data: bool },
    Failed,
}

impl ConnectionStatus {
    pub fn label(self) -> &'static str {
        match self {
            ConnectionStatus::Checking => "확인 중...",
            ConnectionStatus::Connected { has_data: true } => "데이터베이스 연결됨 (데이터 있음)",
            ConnectionStatus::Connected { has_data: false } => "데이터베이스 연결됨 (데이터 없음)",
            ConnectionStatus::Failed => "데이터베이스 연결 실패",
        }
    }

    pub fn is_failure(self) -> bool {
        matches!(self, ConnectionStatus::Failed)
    }
}

/// Unsubmitted repair request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepairRequest {
    pub description: String,
    pub city: String,
    pub district: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestField {
    Description,
    City,
    District,
}

impl RequestField {
    /// Form control name
    pub fn name(self) -> &'static str {
        match self {
            RequestField::Description => "description",
            RequestField::City => "city",
            RequestField::District => "district",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "description" => Some(RequestField::Description),
            "city" => Some(RequestField::City),
            "district" => Some(RequestField::District),
            _ => None,
        }
    }
}

/// Trimmed city/district pair sent to storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionQuery {
    pub city: String,
    pub district: String,
}

impl RegionQuery {
    pub fn new(city: &str, district: &str) -> Self {
        Self {
            city: city.trim().to_string(),
            district: district.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkerSearchState {
    pub request: RepairRequest,
    pub workers: Vec<Worker>,
    /// At most one message: a failure or the no-match notice
    pub error: Option<String>,
    pub loading: bool,
    pub connection: ConnectionStatus,
}

impl WorkerSearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Any edit invalidates previous results; a new city also resets the district
    pub fn set_field(&mut self, field: RequestField, value: impl Into<String>) {
        let value = value.into();
        match field {
            RequestField::Description => self.request.description = value,
            RequestField::City => {
                self.request.city = value;
                self.request.district.clear();
            }
            RequestField::District => self.request.district = value,
        }
        self.workers.clear();
        self.error = None;
    }

    /// Every field filled and nothing in flight
    pub fn can_search(&self) -> bool {
        !self.loading
            && !self.request.description.is_empty()
            && !self.request.city.is_empty()
            && !self.request.district.is_empty()
    }

    /// Enter the in-flight state; None when the search control is disabled
    pub fn begin_search(&mut self) -> Option<RegionQuery> {
        if !self.can_search() {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(RegionQuery::new(&self.request.city, &self.request.district))
    }

    /// Settle a search: exactly one of results or message is populated
    pub fn finish_search(&mut self, query: &RegionQuery, result: GatewayResult<Vec<Worker>>) {
        self.loading = false;
        match result {
            Ok(workers) if workers.is_empty() => {
                self.workers.clear();
                self.error = Some(no_engineers_message(&query.city, &query.district));
            }
            Ok(workers) => {
                self.workers = workers;
                self.error = None;
            }
            Err(_) => {
                self.workers.clear();
                self.error = Some(SEARCH_FAILED_MESSAGE.to_string());
            }
        }
    }

    pub fn set_connection(&mut self, status: ConnectionStatus) {
        self.connection = status;
    }
}

#[derive(Clone)]
pub struct WorkerService {
    repo: WorkerRepository,
}

impl WorkerService {
    pub fn new(gateway: SharedGateway) -> Self {
        Self {
            repo: WorkerRepository::new(gateway),
        }
    }

    /// Look for a single worker row; never gates other operations
    pub async fn probe(&self) -> ConnectionStatus {
        match self.repo.probe().await {
            Ok(sampled) => ConnectionStatus::Connected {
                has_data: sampled > 0,
            },
            Err(err) => {
                error!(error = %err, "[WorkerSearch] connection check failed");
                ConnectionStatus::Failed
            }
        }
    }

    /// Workers of one region, sorted by `sort_order`, text fields trimmed
    pub async fn search(&self, description: &str, query: &RegionQuery) -> GatewayResult<Vec<Worker>> {
        info!(
            description,
            region = %format!("{} {}", query.city, query.district),
            "[WorkerSearch] search started"
        );

        let found = self
            .repo
            .find_by_region(&query.city, &query.district)
            .await
            .inspect_err(|err| error!(error = %err, "[WorkerSearch] search failed"))?;

        let cleaned: Vec<Worker> = found.iter().map(Worker::trimmed).collect();
        debug!(count = cleaned.len(), "[WorkerSearch] engineers found");
        Ok(cleaned)
    }
}
