mod support;

use support::fake_service::RecordingService;
use support::pulsepoint_env::PulsepointEnvGuard;
use support::stub_server::serve_json_once;

use pulsepoint::egui_app::controller::EguiController;
use pulsepoint::egui_app::state::Route;
use pulsepoint::egui_app::view_model;
use pulsepoint::orchestrator::SubmissionOrchestrator;
use pulsepoint::prediction_api::{HttpPredictionService, PredictionService};
use pulsepoint::settings::{self, ApiConfig, ApiSettings, AppSettings, BuildMode};
use pulsepoint::validation::Field;
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

const VALID_VALUES: [(Field, &str); 11] = [
    (Field::Age, "61"),
    (Field::Sex, "0"),
    (Field::ChestPainType, "4"),
    (Field::RestingBloodPressure, "130"),
    (Field::Cholesterol, "330"),
    (Field::FastingBloodSugar, "1"),
    (Field::RestingEcg, "2"),
    (Field::MaxHeartRate, "169"),
    (Field::ExerciseAngina, "1"),
    (Field::Oldpeak, "2.3"),
    (Field::StSlope, "2"),
];

fn controller_for(service: Arc<dyn PredictionService>) -> EguiController {
    EguiController::new(SubmissionOrchestrator::new(service))
}

fn wait_for_jobs(controller: &mut EguiController) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while controller.has_jobs_in_flight() {
        assert!(Instant::now() < deadline, "background job did not finish");
        std::thread::sleep(Duration::from_millis(10));
        controller.tick();
    }
}

fn fill_form(controller: &mut EguiController) {
    for (field, value) in VALID_VALUES {
        controller.on_field_change(field, value);
    }
}

#[test]
fn prediction_flow_renders_service_result() {
    let service = Arc::new(RecordingService::default());
    let mut controller = controller_for(service.clone());
    controller.navigate(Route::Prediction);

    controller.submit_prediction();
    assert_eq!(service.prediction_count(), 0);
    assert_eq!(controller.ui.prediction.errors.len(), Field::ALL.len());

    fill_form(&mut controller);
    assert!(controller.ui.prediction.errors.is_empty());
    controller.submit_prediction();
    wait_for_jobs(&mut controller);

    assert_eq!(service.prediction_count(), 1);
    let sent = service.predictions.lock().unwrap()[0].clone();
    assert_eq!(sent.chest_pain_type, 4);
    assert_eq!(sent.oldpeak, 2.3);
    let result = controller.ui.prediction.last_result.expect("result stored");
    let summary = view_model::risk_summary(&result);
    assert_eq!(summary.label, "Low Risk");
    assert_eq!(summary.probability_text, "12.00%");
}

#[test]
fn batch_flow_truncates_mismatched_rows() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("cohort.csv");
    std::fs::write(&path, "name,age\nA,54\nB,61\nC,47\n").expect("write csv");
    let service = Arc::new(RecordingService::default());
    let mut controller = controller_for(service.clone());

    controller.select_batch_file(path);
    controller.submit_batch();
    wait_for_jobs(&mut controller);

    assert_eq!(service.upload_names(), vec!["cohort.csv".to_string()]);
    let result = controller.ui.batch.result.as_ref().expect("batch result");
    let rows = view_model::batch_rows(result);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].label, "High Risk");
    assert_eq!(rows[1].probability_text, "90.00%");
}

#[test]
fn http_service_surfaces_server_detail_through_controller() {
    let (base, requests) = serve_json_once("422 Unprocessable Entity", r#"{"detail": "bad input"}"#);
    let config = ApiConfig::direct(Url::parse(&base).expect("base url"));
    let mut controller = controller_for(Arc::new(HttpPredictionService::new(config)));
    fill_form(&mut controller);

    controller.submit_prediction();
    wait_for_jobs(&mut controller);

    assert_eq!(controller.ui.prediction.last_error.as_deref(), Some("bad input"));
    assert!(controller.ui.prediction.last_result.is_none());
    let raw = requests.recv_timeout(Duration::from_secs(5)).expect("request");
    let text = String::from_utf8_lossy(&raw);
    assert!(text.starts_with("POST /predict HTTP/1.1"));
    for field in Field::ALL {
        assert!(text.contains(&format!("\"{}\"", field.wire_name())), "{}", field.wire_name());
    }
}

#[test]
fn retraining_flow_over_http_shows_metrics() {
    let body = r#"{"message": "Model retrained successfully", "metrics": {"accuracy": 0.86, "precision": 0.84, "recall": 0.9, "f1_score": 0.87, "roc_auc": 0.93, "training_samples": 952, "test_samples": 238}}"#;
    let (base, requests) = serve_json_once("200 OK", body);
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("train.csv");
    std::fs::write(&path, "age,sex,target\n54,1,1\n").expect("write csv");
    let config = ApiConfig::direct(Url::parse(&base).expect("base url"));
    let mut controller = controller_for(Arc::new(HttpPredictionService::new(config)));

    controller.select_retraining_file(path);
    controller.submit_retraining();
    wait_for_jobs(&mut controller);

    let state = &controller.ui.retraining;
    assert_eq!(state.last_error, None);
    assert_eq!(
        state.last_success.as_deref(),
        Some("Model retrained successfully")
    );
    let metrics = &state.result.as_ref().expect("metrics").metrics;
    let rows = view_model::metric_rows(metrics);
    assert_eq!(rows[0].value, "86.00%");
    let raw = requests.recv_timeout(Duration::from_secs(5)).expect("request");
    let text = String::from_utf8_lossy(&raw);
    assert!(text.starts_with("POST /retrain HTTP/1.1"));
    assert!(text.contains("filename=\"train.csv\""));
    assert!(text.contains("age,sex,target\n54,1,1\n"));
}

#[test]
fn settings_round_trip_through_config_home() {
    let temp = tempfile::tempdir().expect("tempdir");
    let _env = PulsepointEnvGuard::set_config_home(temp.path().to_path_buf());

    assert_eq!(settings::load_or_default().expect("defaults"), AppSettings::default());

    let custom = AppSettings {
        api: ApiSettings {
            base_url: "http://127.0.0.1:8000".into(),
            ..ApiSettings::default()
        },
    };
    settings::save(&custom).expect("save settings");
    let path = settings::config_path().expect("config path");
    assert!(path.starts_with(temp.path()));
    let loaded = settings::load_or_default().expect("load settings");
    assert_eq!(loaded, custom);

    let config = ApiConfig::resolve(BuildMode::Development, &loaded.api).expect("resolve");
    assert_eq!(
        config
            .endpoint_url(pulsepoint::settings::Endpoint::Predict)
            .as_str(),
        "http://127.0.0.1:8000/predict"
    );
}
