//! # Dashboard
//!
//! Interactive web view of an explanation report. A small axum server with
//! two routes: the embedded single-page UI and the report as JSON. The rest
//! of the crate stays synchronous; the tokio runtime lives only inside
//! `show`.

pub mod assets;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::response::{Html, Json};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::storage::Report;
use crate::ui;

pub struct Dashboard {
	report: Arc<Report>,
}

impl Dashboard {
	pub fn new(report: Report) -> Self {
		Self {
			report: Arc::new(report),
		}
	}

	/// Serve the dashboard until interrupted (Ctrl+C)
	pub fn show(&self, addr: &str, open_browser: bool) -> Result<()> {
		let addr: SocketAddr = addr.parse().context("Invalid dashboard address")?;
		let router = router(self.report.clone());

		let runtime =
			tokio::runtime::Runtime::new().context("Failed to start dashboard runtime")?;

		runtime.block_on(async move {
			let listener = tokio::net::TcpListener::bind(addr)
				.await
				.with_context(|| format!("Failed to bind {}", addr))?;

			let url = format!("http://{}", addr);
			ui::success(&format!("Dashboard running at {}", url));
			ui::info("Press Ctrl+C to stop");

			if open_browser {
				if let Err(e) = open::that(&url) {
					ui::warn(&format!("Failed to open browser: {}", e));
				}
			}

			axum::serve(listener, router)
				.with_graceful_shutdown(shutdown_signal())
				.await
				.context("Dashboard server failed")
		})
	}
}

pub fn router(report: Arc<Report>) -> Router {
	Router::new()
		.route("/", get(index))
		.route("/api/report", get(report_json))
		.with_state(report)
}

async fn index() -> Html<&'static str> {
	Html(assets::INDEX_HTML)
}

async fn report_json(State(report): State<Arc<Report>>) -> Json<Report> {
	Json(report.as_ref().clone())
}

async fn shutdown_signal() {
	let _ = tokio::signal::ctrl_c().await;
}
