use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use helio_core::{
    CancelFlag, DataSource, Dataset, EnvironmentProvider, HttpResponse, Language, PageKind,
    PageModel, PageOptions, StaticEnvironment, Transport, TransportError, ViewportSize,
    viewport::watch_fit,
};

struct CannedTransport {
    body: &'static str,
    calls: Rc<Cell<usize>>,
    last_url: Rc<RefCell<Option<String>>>,
}

impl CannedTransport {
    fn new(body: &'static str) -> Self {
        Self {
            body,
            calls: Rc::new(Cell::new(0)),
            last_url: Rc::new(RefCell::new(None)),
        }
    }
}

#[async_trait(?Send)]
impl Transport for CannedTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_url.borrow_mut() = Some(url.to_string());
        Ok(HttpResponse {
            status: 200,
            body: self.body.to_string(),
        })
    }
}

const STATIONS: &str = r#"[
    {"id":"a","name":"Markt","city":"Kassel","powerKw":22,"connectors":2,"available":true},
    {"id":"b","name":"Bahnhof","city":"Kassel","powerKw":150,"connectors":4,"available":false}
]"#;

#[tokio::test]
async fn embedded_page_loads_live_data_from_default_endpoint() -> anyhow::Result<()> {
    let options = PageOptions::from_json(r#"{ "apiConfig": { "enabled": true } }"#)?;
    let env = StaticEnvironment::new(Some("en-GB"), Some(ViewportSize::new(1920.0, 1080.0)));
    let model = PageModel::resolve(PageKind::ChargingStations, &options, env.locale().as_deref());
    assert_eq!(model.language, Language::En);

    let transport = CannedTransport::new(STATIONS);
    let last_url = Rc::clone(&transport.last_url);
    let source = DataSource::new(transport);
    let applied = RefCell::new(None);
    let ran = source
        .load_into(
            &CancelFlag::new(),
            model.api_config.as_ref(),
            model.kind.fallback_dataset(),
            |dataset| *applied.borrow_mut() = Some(dataset),
        )
        .await;

    assert!(ran);
    assert_eq!(last_url.borrow().as_deref(), Some("/api/charging-stations"));
    let applied = applied.into_inner();
    let stations = applied
        .as_ref()
        .and_then(Dataset::as_charging_stations)
        .unwrap_or_default();
    assert_eq!(stations.len(), 2);
    assert_eq!(
        model.render("summary", &[("count", 1.0)]),
        "1 charge point available"
    );
    Ok(())
}

#[tokio::test]
async fn pages_without_endpoint_never_touch_the_network() -> anyhow::Result<()> {
    let options = PageOptions::from_json(r#"{ "lang": "de", "apiConfig": { "enabled": true } }"#)?;
    let transport = CannedTransport::new(STATIONS);
    let calls = Rc::clone(&transport.calls);
    let source = DataSource::new(transport);
    for kind in [PageKind::Co2Savings, PageKind::EnergyMix] {
        let model = PageModel::resolve(kind, &options, None);
        let loaded = source
            .load(model.api_config.as_ref(), kind.fallback_dataset())
            .await;
        assert_eq!(loaded, kind.fallback_dataset());
    }
    assert_eq!(calls.get(), 0);
    Ok(())
}

#[test]
fn fitted_page_follows_the_viewport_until_unsubscribed() {
    let env = StaticEnvironment::new(None, Some(ViewportSize::new(1280.0, 720.0)));
    let model = PageModel::resolve(PageKind::BatteryStorage, &PageOptions::default(), None);
    let scales = Rc::new(RefCell::new(Vec::new()));

    let subscription = {
        let scales = Rc::clone(&scales);
        watch_fit(&env, model.layout, (None, None), move |fit| {
            scales.borrow_mut().push(fit.scale);
        })
    };
    env.resize_to(Some(ViewportSize::new(2560.0, 1440.0)));
    drop(subscription);
    env.resize_to(Some(ViewportSize::new(640.0, 360.0)));

    assert_eq!(env.listener_count(), 0);
    let scales = scales.borrow();
    assert_eq!(scales.len(), 2);
    assert!((scales[0] - 1.0).abs() < 1e-9);
    assert!((scales[1] - 2.0).abs() < 1e-9);
}
