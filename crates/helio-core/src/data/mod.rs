//! Best-effort dataset loading with a bundled fallback.
//!
//! # Design
//! - One GET per load, no retries, no timeout.
//! - Every failure degrades to the fallback dataset; callers never see an error.
//! - Completion is applied only while the caller's [`CancelFlag`] is still live.

use std::cell::Cell;
use std::rc::Rc;

use async_trait::async_trait;

use crate::config::ApiConfig;
use crate::error::{DataSourceError, DataSourceResult, TransportError};

mod datasets;

pub use datasets::{
    BatterySpec, ChargingStation, ChartSeries, Dataset, DatasetKind, SeriesData,
    SolarDistribution, demo_batteries, demo_charging_stations, demo_co2_series, demo_energy_mix,
    demo_solar_yield,
};

/// Raw HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status code.
    pub status: u16,
    /// Response body text.
    pub body: String,
}

impl HttpResponse {
    /// 2xx status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Minimal HTTP client seam.
#[async_trait(?Send)]
pub trait Transport {
    /// Issue a GET request for `url`.
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// Shared flag a caller flips when it no longer wants a pending result.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Rc<Cell<bool>>);

impl CancelFlag {
    /// Fresh, uncancelled flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark every clone of this flag as cancelled.
    pub fn cancel(&self) {
        self.0.set(true);
    }

    /// Whether [`CancelFlag::cancel`] was called on any clone.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Dataset loader over a [`Transport`].
#[derive(Clone, Debug)]
pub struct DataSource<T> {
    transport: T,
}

impl<T: Transport> DataSource<T> {
    /// Loader backed by `transport`.
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetch and validate one dataset.
    ///
    /// # Errors
    /// Returns [`DataSourceError`] on transport failure, non-2xx status, or a body
    /// that does not match `kind`.
    pub async fn fetch(&self, url: &str, kind: DatasetKind) -> DataSourceResult<Dataset> {
        let response = self.transport.get(url).await?;
        if !response.is_success() {
            return Err(DataSourceError::Status {
                url: url.to_string(),
                status: response.status,
            });
        }
        Ok(Dataset::parse(kind, &response.body)?)
    }

    /// Remote dataset when configured and valid, otherwise `fallback`.
    ///
    /// No request is made when `api` is absent, disabled, or has a blank endpoint.
    pub async fn load(&self, api: Option<&ApiConfig>, fallback: Dataset) -> Dataset {
        let kind = fallback.kind();
        let Some(url) = api.and_then(ApiConfig::active_url) else {
            tracing::debug!(kind = kind.as_str(), "live data not configured; using bundled dataset");
            return fallback;
        };
        match self.fetch(url, kind).await {
            Ok(dataset) => {
                tracing::debug!(url, kind = kind.as_str(), "live dataset loaded");
                dataset
            }
            Err(err) => {
                tracing::warn!(url, kind = kind.as_str(), error = %err, "live dataset unavailable; using bundled dataset");
                fallback
            }
        }
    }

    /// [`DataSource::load`], then hand the result to `apply` unless `flag` was
    /// cancelled meanwhile. Returns whether `apply` ran.
    pub async fn load_into<F>(
        &self,
        flag: &CancelFlag,
        api: Option<&ApiConfig>,
        fallback: Dataset,
        apply: F,
    ) -> bool
    where
        F: FnOnce(Dataset),
    {
        let dataset = self.load(api, fallback).await;
        if flag.is_cancelled() {
            tracing::debug!(kind = dataset.kind().as_str(), "discarding stale dataset");
            return false;
        }
        apply(dataset);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShapeError;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct MockTransport {
        responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
        calls: Cell<usize>,
        cancel_on_get: Option<CancelFlag>,
    }

    impl MockTransport {
        fn replying(status: u16, body: &str) -> Self {
            let mock = Self::default();
            mock.responses.borrow_mut().push_back(Ok(HttpResponse {
                status,
                body: body.to_string(),
            }));
            mock
        }

        fn failing() -> Self {
            let mock = Self::default();
            mock.responses
                .borrow_mut()
                .push_back(Err(TransportError::Network {
                    url: "bad".to_string(),
                    source: anyhow::anyhow!("connection refused"),
                }));
            mock
        }
    }

    #[async_trait(?Send)]
    impl Transport for MockTransport {
        async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
            self.calls.set(self.calls.get() + 1);
            if let Some(flag) = &self.cancel_on_get {
                flag.cancel();
            }
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| {
                    Err(TransportError::Network {
                        url: url.to_string(),
                        source: anyhow::anyhow!("no scripted response"),
                    })
                })
        }
    }

    fn fallback() -> Dataset {
        Dataset::Batteries(demo_batteries())
    }

    const ONE_BATTERY: &str = r#"[{"name":"X1","manufacturer":"Acme","capacityKwh":7.5,"powerKw":3,"efficiencyPct":92,"cycles":4000}]"#;

    #[tokio::test]
    async fn disabled_or_missing_config_skips_network() {
        let source = DataSource::new(MockTransport::replying(200, ONE_BATTERY));
        let disabled = ApiConfig {
            enabled: false,
            endpoint: "/api/batteries".to_string(),
        };
        assert_eq!(source.load(Some(&disabled), fallback()).await, fallback());
        assert_eq!(source.load(None, fallback()).await, fallback());
        assert_eq!(source.load(Some(&ApiConfig::enabled("")), fallback()).await, fallback());
        assert_eq!(source.transport.calls.get(), 0);
    }

    #[tokio::test]
    async fn transport_failure_falls_back() {
        let source = DataSource::new(MockTransport::failing());
        let loaded = source.load(Some(&ApiConfig::enabled("bad")), fallback()).await;
        assert_eq!(loaded, fallback());
        assert_eq!(source.transport.calls.get(), 1);
    }

    #[tokio::test]
    async fn error_status_falls_back() {
        let source = DataSource::new(MockTransport::replying(500, ONE_BATTERY));
        let err = source.fetch("/api/batteries", DatasetKind::Batteries).await;
        assert!(matches!(err, Err(DataSourceError::Status { status: 500, .. })));
    }

    #[tokio::test]
    async fn wrong_shape_falls_back() {
        let source = DataSource::new(MockTransport::replying(200, r#"{"unexpected":"shape"}"#));
        let loaded = source
            .load(Some(&ApiConfig::enabled("/api/batteries")), fallback())
            .await;
        assert_eq!(loaded, fallback());

        let source = DataSource::new(MockTransport::replying(200, "not json"));
        let err = source.fetch("/api/batteries", DatasetKind::Batteries).await;
        assert!(matches!(err, Err(DataSourceError::Shape(ShapeError::Malformed { .. }))));
    }

    #[tokio::test]
    async fn valid_response_replaces_fallback() {
        let source = DataSource::new(MockTransport::replying(200, ONE_BATTERY));
        let loaded = source
            .load(Some(&ApiConfig::enabled("/api/batteries")), fallback())
            .await;
        let batteries = loaded.as_batteries().unwrap_or_default();
        assert_eq!(batteries.len(), 1);
        assert_eq!(batteries[0].name, "X1");
        assert_eq!(batteries[0].price_eur, None);
    }

    #[tokio::test]
    async fn cancelled_load_is_never_applied() {
        let flag = CancelFlag::new();
        let mut transport = MockTransport::replying(200, ONE_BATTERY);
        transport.cancel_on_get = Some(flag.clone());
        let source = DataSource::new(transport);

        let applied = RefCell::new(None);
        let ran = source
            .load_into(&flag, Some(&ApiConfig::enabled("/api/batteries")), fallback(), |data| {
                *applied.borrow_mut() = Some(data);
            })
            .await;

        assert!(!ran);
        assert!(applied.borrow().is_none());
    }

    #[tokio::test]
    async fn only_the_latest_request_applies() {
        let stale = CancelFlag::new();
        let current = CancelFlag::new();
        let applied = RefCell::new(Vec::new());

        let mut slow = MockTransport::replying(200, ONE_BATTERY);
        slow.cancel_on_get = Some(stale.clone());
        let fast = MockTransport::replying(200, ONE_BATTERY);
        let api = ApiConfig::enabled("/api/batteries");

        let first = DataSource::new(fast)
            .load_into(&current, Some(&api), fallback(), |data| {
                applied.borrow_mut().push(("current", data));
            })
            .await;
        let second = DataSource::new(slow)
            .load_into(&stale, Some(&api), fallback(), |data| {
                applied.borrow_mut().push(("stale", data));
            })
            .await;

        assert!(first);
        assert!(!second);
        let applied = applied.borrow();
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].0, "current");
    }
}
