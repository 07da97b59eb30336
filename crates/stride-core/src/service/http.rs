//! HTTP implementation of [`CoachService`].

use std::time::Duration;

use async_trait::async_trait;
use jiff::civil::Date;
use log::{debug, warn};
use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::CoachService;
use crate::{
    error::{PersistenceResultExt, Result, StrideError},
    models::{
        ChatMessage, DaySlot, Goal, GoalDraft, PlanResponse, Profile, ProfileUpdate,
        RevisionReply, RevisionRequest, ScheduleDocument, WorkoutBlock,
    },
};

/// Plan generation waits on a language model, so it gets a long timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Coach service client speaking JSON over HTTP.
#[derive(Clone)]
pub struct HttpCoachClient {
    client: Client,
    base_url: String,
}

/// Error body produced by the service framework.
#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

impl HttpCoachClient {
    /// Create a client for the service rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::Configuration` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| StrideError::Configuration {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Turn a non-success response into a readable message, preferring the
    /// service's `detail` field.
    async fn check(response: Response) -> std::result::Result<Response, String> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let detail = match response.json::<ErrorBody>().await {
            Ok(ErrorBody {
                detail: serde_json::Value::String(detail),
            }) => detail,
            Ok(ErrorBody { detail }) => detail.to_string(),
            Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
        };
        Err(format!("{} ({detail})", status.as_u16()))
    }

    async fn send_write(operation: &str, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.persist_context(operation)?;
        Self::check(response).await.persist_context(operation)
    }

    async fn write<T, B>(operation: &str, request: RequestBuilder, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = match body {
            Some(body) => request.json(body),
            None => request,
        };
        let response = Self::send_write(operation, request).await?;
        response.json::<T>().await.persist_context(operation)
    }

    async fn read<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!("GET {path}");
        let response = self.client.get(self.url(path)).send().await?;
        Ok(response.error_for_status()?.json::<T>().await?)
    }
}

#[async_trait]
impl CoachService for HttpCoachClient {
    async fn generate_plan(&self) -> Result<PlanResponse> {
        debug!("POST /coach/plan-3-day");
        let attempt = async {
            let response = self.client.post(self.url("/coach/plan-3-day")).send().await?;
            response.error_for_status()?.json::<PlanResponse>().await
        };

        attempt.await.map_err(|e| {
            warn!("Plan generation request failed: {e}");
            StrideError::generation(StrideError::GENERIC_GENERATION_FAILURE)
        })
    }

    async fn revise_day(&self, day: DaySlot, conversation: &[ChatMessage]) -> Result<RevisionReply> {
        debug!("POST /coach/edit-plan ({})", day.as_str());
        let body = RevisionRequest {
            day,
            messages: conversation,
        };
        Self::write(
            "revise plan",
            self.client.post(self.url("/coach/edit-plan")),
            Some(&body),
        )
        .await
    }

    async fn list_goals(&self) -> Result<Vec<Goal>> {
        self.read("/data/goals").await
    }

    async fn create_goal(&self, draft: &GoalDraft) -> Result<Goal> {
        debug!("POST /data/goals");
        Self::write(
            "create goal",
            self.client.post(self.url("/data/goals")),
            Some(&draft.payload()),
        )
        .await
    }

    async fn update_goal(&self, id: u64, draft: &GoalDraft) -> Result<Goal> {
        debug!("PUT /data/goals/{id}");
        Self::write(
            "update goal",
            self.client.put(self.url(&format!("/data/goals/{id}"))),
            Some(&draft.payload()),
        )
        .await
    }

    async fn delete_goal(&self, id: u64) -> Result<()> {
        debug!("DELETE /data/goals/{id}");
        Self::send_write(
            "delete goal",
            self.client.delete(self.url(&format!("/data/goals/{id}"))),
        )
        .await?;
        Ok(())
    }

    async fn get_schedule(&self) -> Result<ScheduleDocument> {
        self.read("/data/schedule").await
    }

    async fn put_schedule(&self, document: &ScheduleDocument) -> Result<ScheduleDocument> {
        debug!("PUT /data/schedule");
        Self::write(
            "save schedule",
            self.client.put(self.url("/data/schedule")),
            Some(document),
        )
        .await
    }

    async fn list_blocks(&self, start: Date) -> Result<Vec<WorkoutBlock>> {
        self.read(&format!("/schedule/?start_date={start}")).await
    }

    async fn update_block(&self, block: &WorkoutBlock) -> Result<WorkoutBlock> {
        debug!("PUT /schedule/{}", block.id);
        Self::write(
            "update workout block",
            self.client.put(self.url(&format!("/schedule/{}", block.id))),
            Some(block),
        )
        .await
    }

    async fn reset_blocks(&self) -> Result<Vec<WorkoutBlock>> {
        debug!("POST /schedule/init");
        Self::write::<_, ()>("reset week", self.client.post(self.url("/schedule/init")), None)
            .await
    }

    async fn get_profile(&self) -> Result<Profile> {
        self.read("/auth/user").await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile> {
        debug!("PUT /auth/user/settings");
        Self::write(
            "save profile",
            self.client.put(self.url("/auth/user/settings")),
            Some(update),
        )
        .await
    }
}
