//! `shelves` subcommand.

use log::info;
use std::{cell::RefCell, time::Duration};
use wms_shelves::{
    api::ReqwestShelfSource, endpoint::ShelvesEndpoint, FailureDisplay, RefreshOutcome,
    SelectEntry, ShelfControl, ShelfRefresher, ShelfSource, WarehouseControl,
    WarehouseSelection,
};

use crate::OutputFormat;

pub struct ShelvesRequest {
    pub base_url: String,
    pub warehouse: String,
    pub session_cookie: Option<String>,
    pub placeholder: bool,
    pub timeout: Duration,
}

/// Warehouse control with a value fixed on the command line.
pub struct FixedWarehouse(pub WarehouseSelection);

impl WarehouseControl for FixedWarehouse {
    fn selection(&self) -> Option<WarehouseSelection> {
        Some(self.0.clone())
    }
}

/// Shelf control that keeps the last rendered option list.
#[derive(Default)]
pub struct CollectedShelves {
    entries: RefCell<Vec<SelectEntry>>,
}

impl CollectedShelves {
    pub fn entries(&self) -> Vec<SelectEntry> {
        self.entries.borrow().clone()
    }
}

impl ShelfControl for CollectedShelves {
    fn is_present(&self) -> bool {
        true
    }

    fn render(&self, entries: &[SelectEntry]) {
        *self.entries.borrow_mut() = entries.to_vec();
    }
}

pub fn format_entries(entries: &[SelectEntry], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(entries
            .iter()
            .map(|entry| {
                let suffix = if entry.disabled { "\t(disabled)" } else { "" };
                format!("{}\t{}{}\n", entry.value, entry.label, suffix)
            })
            .collect()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)? + "\n"),
    }
}

/// Refresh once and return the rendered entries alongside the outcome.
pub async fn collect_shelves<S: ShelfSource>(
    source: S,
    endpoint: ShelvesEndpoint,
    warehouse: WarehouseSelection,
    failure_display: FailureDisplay,
) -> (Vec<SelectEntry>, RefreshOutcome) {
    let refresher = ShelfRefresher::new(
        FixedWarehouse(warehouse),
        CollectedShelves::default(),
        source,
        endpoint,
    )
    .with_failure_display(failure_display);
    let outcome = refresher.refresh().await;
    (refresher.shelves().entries(), outcome)
}

pub async fn run_shelves(request: &ShelvesRequest, format: OutputFormat) -> anyhow::Result<()> {
    let mut source = ReqwestShelfSource::new(request.timeout)?;
    if let Some(cookie) = &request.session_cookie {
        source = source.with_session_cookie(cookie.clone());
    }
    let endpoint = ShelvesEndpoint::under_origin(&request.base_url);
    let failure_display = if request.placeholder {
        FailureDisplay::Placeholder
    } else {
        FailureDisplay::SentinelOnly
    };

    info!("Querying {}", endpoint.url_for(&request.warehouse.as_str().into()));
    let (entries, outcome) = collect_shelves(
        source,
        endpoint,
        WarehouseSelection::new(request.warehouse.clone()),
        failure_display,
    )
    .await;

    print!("{}", format_entries(&entries, format)?);

    match outcome {
        RefreshOutcome::Failed(err) => {
            Err(anyhow::Error::new(err).context(format!("warehouse {}", request.warehouse)))
        }
        _ => Ok(()),
    }
}
