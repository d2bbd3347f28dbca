//! Milestone Requests
//!
//! `GET /milestones`, `POST /milestones`, `PUT /milestones/{id}`.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use milestone_core::{
    plan_upsert, ApiConfig, Milestone, MilestoneError, MilestoneRecord, MilestoneRepository,
    MilestoneResult, SaveOp,
};

/// Repository backed by the milestones service
#[derive(Debug, Clone)]
pub struct HttpMilestoneRepository {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpMilestoneRepository {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }
}

/// Which request a response belongs to; decides the error variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Call {
    List,
    Save(SaveOp),
}

impl Call {
    fn fail(self, reason: impl Into<String>) -> MilestoneError {
        match self {
            Call::List => MilestoneError::fetch(reason),
            Call::Save(op) => MilestoneError::save(op, reason),
        }
    }
}

/// Non-2xx responses fail with the numeric status as reason
fn check_status(call: Call, status: StatusCode) -> MilestoneResult<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(call.fail(status.as_u16().to_string()))
    }
}

/// Body that is not the expected JSON fails with the decode message
fn decode<T: DeserializeOwned>(call: Call, body: &[u8]) -> MilestoneResult<T> {
    serde_json::from_slice(body).map_err(|e| call.fail(e.to_string()))
}

impl HttpMilestoneRepository {
    async fn send(&self, call: Call, request: reqwest::RequestBuilder) -> MilestoneResult<Vec<u8>> {
        let response = request.send().await.map_err(|e| call.fail(e.to_string()))?;
        check_status(call, response.status())?;
        let body = response.bytes().await.map_err(|e| call.fail(e.to_string()))?;
        Ok(body.to_vec())
    }
}

#[async_trait(?Send)]
impl MilestoneRepository for HttpMilestoneRepository {
    async fn list(&self) -> MilestoneResult<Vec<Milestone>> {
        let url = self.config.collection_url();
        log::debug!("GET {}", url);

        let body = self.send(Call::List, self.client.get(&url)).await?;
        let items: Vec<Milestone> = decode(Call::List, &body)?;
        log::info!("fetched {} milestones", items.len());
        Ok(items)
    }

    async fn upsert(&self, record: &MilestoneRecord) -> MilestoneResult<Milestone> {
        let collection = self.config.collection_url();
        let plan = plan_upsert(record, &collection);
        let call = Call::Save(plan.op);
        log::debug!("{} {}", plan.method(), plan.path);

        let request = match plan.op {
            SaveOp::Create => self.client.post(&plan.path),
            SaveOp::Update => self.client.put(&plan.path),
        };
        let body = self.send(call, request.json(plan.body)).await?;
        decode(call, &body)
    }
}
