// src/api/handlers/experiment.rs
use actix_web::{HttpResponse, Result, web};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::api::AppState;
use crate::api::handlers::ws::{ProgressBroker, ProgressUpdate};
use crate::errors::PortalError;
use crate::models::Dataset;
use crate::runner;

#[derive(Deserialize)]
pub struct RunExperimentRequest {
    pub dataset: Dataset,
}

/// `POST /api/experiment/run`. Holds the single-flight guard for the whole
/// run, forwards each phase to the progress feed, and parks the verdict in
/// the result slot for `GET /result` to consume.
pub async fn run_experiment(
    state: web::Data<AppState>,
    broker: web::Data<ProgressBroker>,
    req: web::Json<RunExperimentRequest>,
) -> Result<HttpResponse> {
    let Some(_guard) = state.try_begin_run() else {
        return Ok(HttpResponse::Conflict().json(json!({
            "status": "busy",
            "error": "An experiment is already running. Please wait for it to finish.",
        })));
    };

    let run_id = Uuid::new_v4().to_string();
    let dataset = req.into_inner().dataset;

    // A new run invalidates whatever the previous run left behind.
    state.clear_result().await;

    let on_phase = {
        let broker = broker.get_ref().clone();
        let run_id = run_id.clone();
        move |phase: runner::Phase| {
            let broker = broker.clone();
            let update = ProgressUpdate {
                run_id: run_id.clone(),
                step: phase.index(),
                label: phase.label().to_string(),
            };
            actix_web::rt::spawn(async move {
                broker.broadcast(update).await;
            });
        }
    };

    match runner::run_experiment(&state.client, dataset, state.pacing, on_phase).await {
        Ok(result) => {
            state.store_result(result).await;
            Ok(HttpResponse::Ok().json(json!({
                "status": "complete",
                "redirect": "/result",
            })))
        }
        Err(e) => {
            log::error!("Experiment run {} failed: {:?}", run_id, e);

            let response = json!({
                "status": "error",
                "error": e.to_string(),
            });

            Ok(match e {
                PortalError::Timeout => HttpResponse::GatewayTimeout().json(response),
                PortalError::Connection | PortalError::Backend { .. } => {
                    HttpResponse::BadGateway().json(response)
                }
                _ => HttpResponse::InternalServerError().json(response),
            })
        }
    }
}
