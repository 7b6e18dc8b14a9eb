use std::{sync::Arc, time::Duration};

use druid::im::Vector;
use once_cell::sync::OnceCell;
use ureq::Agent;
use url::Url;

use crate::{
    data::{Schedule, ScheduleResponse},
    error::Error,
};

/// Client of the PlanEvent service.  Session credentials live in the
/// agent's cookie store and ride along on every call.
pub struct WebApi {
    agent: Agent,
    base_url: Url,
}

impl WebApi {
    pub fn new(api_url: &str, proxy_url: Option<&str>) -> Self {
        let mut config = Agent::config_builder().timeout_global(Some(Duration::from_secs(5)));
        if let Some(proxy_url) = proxy_url {
            let proxy = ureq::Proxy::new(proxy_url).ok();
            config = config.proxy(proxy);
        }
        Self {
            agent: config.build().into(),
            base_url: Url::parse(api_url).expect("Invalid API URL"),
        }
    }

    fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> String {
        let mut url = self.base_url.clone();
        url.set_path(path);
        for (name, value) in query {
            url.query_pairs_mut().append_pair(name, value);
        }
        url.into()
    }

    /// Fetch the full schedule document and keep only its schedule field.
    pub fn get_schedule(&self) -> Result<Vector<Schedule>, Error> {
        let mut response = self.agent.get(self.endpoint("/api/schedule", &[])).call()?;
        let response: ScheduleResponse = response.body_mut().read_json()?;
        Ok(response.schedule)
    }

    /// Fetch the opaque identity token.  The raw response body is the token.
    pub fn get_secret(&self) -> Result<Arc<str>, Error> {
        let mut response = self.agent.get(self.endpoint("/api/secret", &[])).call()?;
        let body = response.body_mut().read_to_string()?;
        Ok(body.into())
    }

    /// Associate this session with the schedule the token belongs to.
    pub fn login(&self, secret_id: &str) -> Result<(), Error> {
        self.agent
            .post(self.endpoint("/api/login", &[("secretId", secret_id)]))
            .send_empty()?;
        Ok(())
    }

    /// Set attendance of a single slot.
    pub fn set_attendance(&self, event_id: &str, attending: bool) -> Result<(), Error> {
        self.agent
            .post(self.endpoint(
                "/api/attend",
                &[("eventId", event_id), ("attending", if attending { "true" } else { "false" })],
            ))
            .send_empty()?;
        Ok(())
    }
}

static GLOBAL_WEBAPI: OnceCell<Arc<WebApi>> = OnceCell::new();

/// Global instance.
impl WebApi {
    pub fn install_as_global(self) {
        GLOBAL_WEBAPI
            .set(Arc::new(self))
            .map_err(|_| "Web API is already installed")
            .unwrap()
    }

    pub fn global() -> Arc<Self> {
        GLOBAL_WEBAPI.get().unwrap().clone()
    }
}
