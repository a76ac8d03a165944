// libs/shared/database/src/supabase.rs
use anyhow::anyhow;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, Method, StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, error};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::{Appointment, AppointmentDraft, Doctor, DoctorDraft, UserAccount};

use crate::store::{
    AppointmentFilter, AppointmentStore, DoctorFilter, DoctorStore, StoreError, UserStore,
};

/// Remote store adapter speaking the Supabase PostgREST dialect. The hosted
/// schema carries a unique index on appointments (specialty, date, time);
/// a violated insert surfaces here as HTTP 409 and becomes
/// `StoreError::UniqueViolation`.
pub struct SupabaseStore {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseStore {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.supabase_url.clone(),
            anon_key: config.supabase_anon_key.clone(),
        }
    }

    fn get_headers(&self, returning: bool) -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert("apikey", HeaderValue::from_str(&self.anon_key).unwrap());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.anon_key)).unwrap(),
        );
        if returning {
            headers.insert("Prefer", HeaderValue::from_static("return=representation"));
        }

        headers
    }

    async fn request<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        returning: bool,
    ) -> Result<T, StoreError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making request to {}", url);

        let mut req = self
            .client
            .request(method, &url)
            .headers(self.get_headers(returning));

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req
            .send()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Store API error ({}): {}", status, error_text);

            return Err(match status {
                StatusCode::CONFLICT => StoreError::UniqueViolation(error_text),
                StatusCode::NOT_FOUND => StoreError::NotFound,
                _ => StoreError::Backend(
                    anyhow!("API error ({}): {}", status, error_text).to_string(),
                ),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }
}

fn eq(field: &str, value: &str) -> String {
    format!("{}=eq.{}", field, value)
}

#[async_trait]
impl AppointmentStore for SupabaseStore {
    async fn insert_appointment(&self, draft: AppointmentDraft) -> Result<Appointment, StoreError> {
        let record = json!({
            "id": Uuid::new_v4(),
            "user_email": draft.user_email,
            "specialty": draft.specialty,
            "doctor": draft.doctor,
            "date": draft.date,
            "time": draft.time,
            "client_name": draft.client_name,
            "reason": draft.reason,
            "created_at": Utc::now().to_rfc3339(),
        });

        let result: Vec<Appointment> = self
            .request(Method::POST, "/rest/v1/appointments", Some(record), true)
            .await?;

        result
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::Backend("insert returned no representation".to_string()))
    }

    async fn delete_appointment(&self, id: Uuid) -> Result<u64, StoreError> {
        let path = format!("/rest/v1/appointments?id=eq.{}", id);
        let removed: Vec<Value> = self.request(Method::DELETE, &path, None, true).await?;
        Ok(removed.len() as u64)
    }

    async fn query_appointments(
        &self,
        filter: AppointmentFilter,
    ) -> Result<Vec<Appointment>, StoreError> {
        let mut query_parts = Vec::new();
        if let Some(id) = filter.id {
            query_parts.push(eq("id", &id.to_string()));
        }
        if let Some(email) = &filter.user_email {
            query_parts.push(eq("user_email", email));
        }
        if let Some(specialty) = &filter.specialty {
            query_parts.push(eq("specialty", specialty));
        }
        if let Some(date) = &filter.date {
            query_parts.push(eq("date", date));
        }
        if let Some(time) = &filter.time {
            query_parts.push(eq("time", time));
        }
        // created_at breaks (date, time) ties in insertion order.
        query_parts.push("order=date.asc,time.asc,created_at.asc".to_string());

        let path = format!("/rest/v1/appointments?{}", query_parts.join("&"));
        self.request(Method::GET, &path, None, false).await
    }
}

#[async_trait]
impl DoctorStore for SupabaseStore {
    async fn insert_doctor(&self, draft: DoctorDraft) -> Result<Doctor, StoreError> {
        let record = json!({
            "id": Uuid::new_v4(),
            "name": draft.name,
            "specialty": draft.specialty,
            "shift": draft.shift,
            "slots": draft.slots,
        });

        let result: Vec<Doctor> = self
            .request(Method::POST, "/rest/v1/doctors", Some(record), true)
            .await?;

        result
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::Backend("insert returned no representation".to_string()))
    }

    async fn delete_doctor(&self, id: Uuid) -> Result<u64, StoreError> {
        let path = format!("/rest/v1/doctors?id=eq.{}", id);
        let removed: Vec<Value> = self.request(Method::DELETE, &path, None, true).await?;
        Ok(removed.len() as u64)
    }

    async fn query_doctors(&self, filter: DoctorFilter) -> Result<Vec<Doctor>, StoreError> {
        let mut query_parts = Vec::new();
        if let Some(specialty) = &filter.specialty {
            query_parts.push(eq("specialty", specialty));
        }
        if let Some(name) = &filter.name {
            query_parts.push(eq("name", name));
        }
        query_parts.push("order=specialty.asc,name.asc".to_string());

        let path = format!("/rest/v1/doctors?{}", query_parts.join("&"));
        self.request(Method::GET, &path, None, false).await
    }
}

#[async_trait]
impl UserStore for SupabaseStore {
    async fn insert_user(&self, user: UserAccount) -> Result<UserAccount, StoreError> {
        let result: Vec<UserAccount> = self
            .request(
                Method::POST,
                "/rest/v1/users",
                Some(serde_json::to_value(&user).map_err(|e| StoreError::Backend(e.to_string()))?),
                true,
            )
            .await?;

        result
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::Backend("insert returned no representation".to_string()))
    }

    async fn find_user(&self, email: &str) -> Result<Option<UserAccount>, StoreError> {
        let path = format!("/rest/v1/users?email=eq.{}", email);
        let result: Vec<UserAccount> = self.request(Method::GET, &path, None, false).await?;
        Ok(result.into_iter().next())
    }

    async fn update_user(&self, user: UserAccount) -> Result<UserAccount, StoreError> {
        let path = format!("/rest/v1/users?email=eq.{}", user.email);
        let result: Vec<UserAccount> = self
            .request(
                Method::PATCH,
                &path,
                Some(serde_json::to_value(&user).map_err(|e| StoreError::Backend(e.to_string()))?),
                true,
            )
            .await?;

        result.into_iter().next().ok_or(StoreError::NotFound)
    }
}
