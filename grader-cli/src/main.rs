use clap::Parser;
use grader_common::{ModalConfig, ModalFormState, SubmitContext, SubmitResult};
use grader_core::logging::configure_logging;
use grader_core::{Config, FormClient};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};

/// grader-cli: submit a configured modal form from the command line.
#[derive(Parser, Debug)]
#[command(name = "grader-cli")]
struct Args {
    /// Modal id from the config, e.g. `create_tag`.
    modal: String,

    /// Config file. Without it, GRADER_DEV_MODE / .env or GRADER_CONFIG decide.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Origin of the grading server, overriding the config's base_url.
    #[arg(long, env = "GRADER_BASE_URL")]
    base_url: Option<String>,

    /// Host identifier used by the endpoint, e.g. `--param course_id=12`.
    #[arg(long = "param", value_parser = parse_pair)]
    params: Vec<(String, String)>,

    /// Field value, e.g. `--field name=Late`.
    #[arg(long = "field", value_parser = parse_pair)]
    fields: Vec<(String, String)>,
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))?;
    if key.is_empty() {
        return Err(format!("missing key in `{s}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Fill `modal` with `fields` and submit it, going through the same form
/// state the web client uses.
async fn submit_modal(
    client: &FormClient,
    modal: &ModalConfig,
    context: &SubmitContext,
    fields: &[(String, String)],
) -> SubmitResult {
    let mut form = ModalFormState::from_config(modal);
    form.set_ready(true);
    form.open();

    for (id, value) in fields {
        if let Err(e) = form.change_field(id, value) {
            return SubmitResult::failure(e.to_string());
        }
        let stored = form.value(id).unwrap_or_default();
        if stored.len() < value.len() {
            warn!(
                "Field `{id}` truncated to {} characters",
                stored.chars().count()
            );
        }
    }

    info!("Submitting `{}` via {}", modal.id, modal.endpoint.as_str());
    let Some(request) = form.begin_submit(&modal.endpoint, context) else {
        return SubmitResult::failure(form.error().unwrap_or("Submit refused"));
    };

    let result = client.submit(&request).await;
    form.finish_submit(result.clone());
    result
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::from_file(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };
    configure_logging(&config);

    let Some(modal) = config.modal(&args.modal) else {
        error!("No `{}` modal configured", args.modal);
        return ExitCode::FAILURE;
    };

    let mut context = SubmitContext::new();
    for (key, value) in &args.params {
        context.insert(key.as_str(), value);
    }

    let client = FormClient::new(args.base_url.clone().or_else(|| config.base_url.clone()));
    let result = submit_modal(&client, modal, &context, &args.fields).await;

    if result.is_success() {
        println!(
            "{}",
            modal.success_text.as_deref().unwrap_or("Submitted")
        );
        ExitCode::SUCCESS
    } else {
        if let SubmitResult::Failure { message } = &result {
            error!("{message}");
        }
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use grader_core::logging::init_test_logging;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    type Received = Arc<Mutex<Vec<Value>>>;

    async fn description_server() -> (String, Received) {
        let received: Received = Arc::default();
        let router = Router::new()
            .route(
                "/api/courses/:course_id/assignments/:assignment_id/update_description",
                post(
                    |State(received): State<Received>, Json(body): Json<Value>| async move {
                        received.lock().unwrap().push(body);
                        StatusCode::OK
                    },
                ),
            )
            .with_state(received.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        (format!("http://{addr}"), received)
    }

    fn assignment_context() -> SubmitContext {
        SubmitContext::new()
            .with("course_id", 1)
            .with("assignment_id", 42)
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!(
            parse_pair("name=Late=ish").unwrap(),
            ("name".to_string(), "Late=ish".to_string())
        );
        assert_eq!(
            parse_pair("description=").unwrap(),
            ("description".to_string(), String::new())
        );
        assert!(parse_pair("novalue").is_err());
        assert!(parse_pair("=x").is_err());
    }

    #[test]
    fn test_args_collect_params_and_fields() {
        let args = Args::try_parse_from([
            "grader-cli",
            "update_text",
            "--base-url",
            "http://localhost:3000",
            "--param",
            "course_id=1",
            "--param",
            "assignment_id=42",
            "--field",
            "description=Due Friday",
        ])
        .unwrap();
        assert_eq!(args.modal, "update_text");
        assert_eq!(args.base_url.as_deref(), Some("http://localhost:3000"));
        assert_eq!(args.params.len(), 2);
        assert_eq!(
            args.fields,
            vec![("description".to_string(), "Due Friday".to_string())]
        );
    }

    #[tokio::test]
    async fn test_submit_modal_posts_clamped_fields() {
        init_test_logging();
        let (base_url, received) = description_server().await;
        let client = FormClient::new(Some(base_url));
        let long = "x".repeat(200);

        let result = submit_modal(
            &client,
            &ModalConfig::update_text(),
            &assignment_context(),
            &[("description".to_string(), long)],
        )
        .await;

        assert!(result.is_success());
        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0]["description"].as_str().unwrap().len(), 120);
    }

    #[tokio::test]
    async fn test_submit_modal_rejects_unknown_field() {
        init_test_logging();
        let (base_url, received) = description_server().await;
        let client = FormClient::new(Some(base_url));

        let result = submit_modal(
            &client,
            &ModalConfig::update_text(),
            &assignment_context(),
            &[("title".to_string(), "Nope".to_string())],
        )
        .await;

        assert!(!result.is_success());
        assert!(received.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_modal_reports_missing_endpoint_param() {
        init_test_logging();
        let client = FormClient::new(Some("http://127.0.0.1:9".to_string()));

        let result = submit_modal(
            &client,
            &ModalConfig::update_text(),
            &SubmitContext::new().with("course_id", 1),
            &[("description".to_string(), "Due Friday".to_string())],
        )
        .await;

        match result {
            SubmitResult::Failure { message } => assert!(message.contains("assignment_id")),
            SubmitResult::Success => panic!("submit without assignment_id succeeded"),
        }
    }
}
