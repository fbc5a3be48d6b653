//! Admin API client.

use booking_core::{
    Bus, BusId, NewBus, NewResource, NewRoute, NewSchedule, ResourceRef, Route, RouteId,
    Schedule, ScheduleId, ScheduleUpdate, UpdateResponse,
};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Environment variable that may seed the token on native builds.
const TOKEN_VAR: &str = "ADMIN_TOKEN";

/// Bearer token issued to a signed-in administrator.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Read a token from `ADMIN_TOKEN`, if set and non-blank.
    pub fn from_env() -> Option<Self> {
        std::env::var(TOKEN_VAR)
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .map(Self)
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

/// Operations of the admin API used by the dashboard.
///
/// Every call is authenticated with the caller's token.
#[allow(async_fn_in_trait)]
pub trait AdminApi {
    async fn list_buses(&self, token: &AuthToken) -> Result<Vec<Bus>, ApiError>;

    async fn list_schedules(&self, token: &AuthToken) -> Result<Vec<Schedule>, ApiError>;

    async fn list_routes(&self, token: &AuthToken) -> Result<Vec<Route>, ApiError>;

    async fn add_bus(&self, token: &AuthToken, bus: &NewBus) -> Result<(), ApiError>;

    async fn add_route(&self, token: &AuthToken, route: &NewRoute) -> Result<(), ApiError>;

    async fn add_schedule(&self, token: &AuthToken, schedule: &NewSchedule)
    -> Result<(), ApiError>;

    async fn delete_bus(&self, token: &AuthToken, id: BusId) -> Result<(), ApiError>;

    async fn delete_route(&self, token: &AuthToken, id: RouteId) -> Result<(), ApiError>;

    async fn delete_schedule(&self, token: &AuthToken, id: ScheduleId) -> Result<(), ApiError>;

    async fn update_schedule(
        &self,
        token: &AuthToken,
        id: ScheduleId,
        update: &ScheduleUpdate,
    ) -> Result<UpdateResponse, ApiError>;

    /// Create a resource of any kind.
    async fn add(&self, token: &AuthToken, resource: &NewResource) -> Result<(), ApiError> {
        match resource {
            NewResource::Bus(bus) => self.add_bus(token, bus).await,
            NewResource::Route(route) => self.add_route(token, route).await,
            NewResource::Schedule(schedule) => self.add_schedule(token, schedule).await,
        }
    }

    /// Delete a resource of any kind.
    async fn delete(&self, token: &AuthToken, target: ResourceRef) -> Result<(), ApiError> {
        match target {
            ResourceRef::Bus(id) => self.delete_bus(token, id).await,
            ResourceRef::Route(id) => self.delete_route(token, id).await,
            ResourceRef::Schedule(id) => self.delete_schedule(token, id).await,
        }
    }
}

/// `reqwest` implementation of [`AdminApi`].
#[derive(Debug, Clone)]
pub struct AdminClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl Default for AdminClient {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

impl PartialEq for AdminClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl AdminClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str, token: &AuthToken) -> RequestBuilder {
        let url = self.config.url(path);
        debug!(%method, url = %url, "Admin API request");
        self.client
            .request(method, url)
            .bearer_auth(token.as_str())
            .header(CONTENT_TYPE, "application/json")
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_body(status, &body));
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &AuthToken,
    ) -> Result<T, ApiError> {
        let response = self.send(self.request(Method::GET, path, token)).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn post_json<B: Serialize>(
        &self,
        path: &str,
        token: &AuthToken,
        body: &B,
    ) -> Result<(), ApiError> {
        self.send(self.request(Method::POST, path, token).json(body))
            .await?;
        Ok(())
    }

    async fn delete_path(&self, path: &str, token: &AuthToken) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, path, token)).await?;
        Ok(())
    }
}

impl AdminApi for AdminClient {
    async fn list_buses(&self, token: &AuthToken) -> Result<Vec<Bus>, ApiError> {
        let buses: Vec<Bus> = self.get_json("bus", token).await?;
        debug!(count = buses.len(), "Fetched buses");
        Ok(buses)
    }

    async fn list_schedules(&self, token: &AuthToken) -> Result<Vec<Schedule>, ApiError> {
        let schedules: Vec<Schedule> = self.get_json("schedule", token).await?;
        debug!(count = schedules.len(), "Fetched schedules");
        Ok(schedules)
    }

    async fn list_routes(&self, token: &AuthToken) -> Result<Vec<Route>, ApiError> {
        let routes: Vec<Route> = self.get_json("route", token).await?;
        debug!(count = routes.len(), "Fetched routes");
        Ok(routes)
    }

    async fn add_bus(&self, token: &AuthToken, bus: &NewBus) -> Result<(), ApiError> {
        info!(reg_number = %bus.reg_number, "Adding bus");
        self.post_json("bus", token, bus).await
    }

    async fn add_route(&self, token: &AuthToken, route: &NewRoute) -> Result<(), ApiError> {
        info!(source = %route.source, destination = %route.destination, "Adding route");
        self.post_json("route", token, route).await
    }

    async fn add_schedule(
        &self,
        token: &AuthToken,
        schedule: &NewSchedule,
    ) -> Result<(), ApiError> {
        info!(bus_id = %schedule.bus_id, route_id = %schedule.route_id, "Adding schedule");
        self.post_json("schedule", token, schedule).await
    }

    async fn delete_bus(&self, token: &AuthToken, id: BusId) -> Result<(), ApiError> {
        info!(%id, "Deleting bus");
        self.delete_path(&format!("bus/{id}"), token).await
    }

    async fn delete_route(&self, token: &AuthToken, id: RouteId) -> Result<(), ApiError> {
        info!(%id, "Deleting route");
        self.delete_path(&format!("route/{id}"), token).await
    }

    async fn delete_schedule(&self, token: &AuthToken, id: ScheduleId) -> Result<(), ApiError> {
        info!(%id, "Deleting schedule");
        self.delete_path(&format!("schedule/{id}"), token).await
    }

    async fn update_schedule(
        &self,
        token: &AuthToken,
        id: ScheduleId,
        update: &ScheduleUpdate,
    ) -> Result<UpdateResponse, ApiError> {
        info!(%id, "Updating schedule");
        let request = self
            .request(Method::PUT, &format!("schedule/{id}"), token)
            .json(update);
        let response = self.send(request).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
