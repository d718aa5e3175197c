// src/views/result.rs
use super::{escape_html, format_pct, layout};
use crate::models::{ExperimentResult, Metrics};

/// Banner text for the backend's `winner` value. Anything outside the two
/// known model tags is reported as a tie.
pub fn winner_label(winner: &str) -> &'static str {
    match winner {
        "SVM" => "Classical SVM",
        "VQC" => "Quantum VQC",
        _ => "It's a Tie!",
    }
}

fn metric_pairs(metrics: &Metrics) -> [(&'static str, f64); 4] {
    [
        ("Accuracy", metrics.accuracy),
        ("Precision", metrics.precision),
        ("Recall", metrics.recall),
        ("F1 Score", metrics.f1_score),
    ]
}

fn metric_rows(metrics: &Metrics) -> String {
    metric_pairs(metrics)
        .iter()
        .map(|(label, value)| {
            let pct = format_pct(*value);
            format!(
                r##"      <div class="metric-row">
        <span class="metric-label">{label}</span>
        <div class="metric-bar"><div class="metric-fill" style="width:{pct}"></div></div>
        <span class="metric-value">{pct}</span>
      </div>
"##
            )
        })
        .collect()
}

fn comparison_bars(svm: &Metrics, vqc: &Metrics) -> String {
    metric_pairs(svm)
        .iter()
        .zip(metric_pairs(vqc).iter())
        .map(|((label, svm_value), (_, vqc_value))| {
            let svm_pct = format_pct(*svm_value);
            let vqc_pct = format_pct(*vqc_value);
            format!(
                r##"    <div class="comparison-group">
      <p class="comparison-label">{label}</p>
      <div class="comparison-row"><span>SVM</span><div class="bar bar-svm" style="width:{svm_pct}">{svm_pct}</div></div>
      <div class="comparison-row"><span>VQC</span><div class="bar bar-vqc" style="width:{vqc_pct}">{vqc_pct}</div></div>
    </div>
"##
            )
        })
        .collect()
}

/// Results page: winner banner, per-model cards, comparison chart. Pure
/// rendering of the backend verdict; derived display values only.
pub fn render(result: &ExperimentResult) -> String {
    let dataset = escape_html(&result.dataset_name);
    let winner = winner_label(&result.winner);
    let svm_class = if result.winner == "SVM" { " winner" } else { "" };
    let vqc_class = if result.winner == "VQC" { " winner" } else { "" };
    let svm_rows = metric_rows(&result.svm_metrics);
    let vqc_rows = metric_rows(&result.vqc_metrics);
    let comparison = comparison_bars(&result.svm_metrics, &result.vqc_metrics);
    let execution_time = result.execution_time_seconds;

    let body = format!(
        r##"<main class="results">
  <a href="/" class="home-link">Home</a>
  <header class="results-header">
    <h1>Experiment Results</h1>
    <p>Dataset: <span class="dataset-name">{dataset}</span></p>
    <p class="execution-time">⏱️ Execution Time: {execution_time}s</p>
  </header>

  <div class="winner-banner">
    <p class="winner-tag">🏆 Winner</p>
    <p class="winner-name">{winner}</p>
  </div>

  <div class="model-cards">
    <section class="model-card{svm_class}">
      <header>
        <h2>Classical SVM</h2>
        <p>Support Vector Machine</p>
      </header>
{svm_rows}    </section>
    <section class="model-card{vqc_class}">
      <header>
        <h2>Quantum VQC</h2>
        <p>Variational Quantum Classifier</p>
      </header>
{vqc_rows}    </section>
  </div>

  <section class="comparison">
    <h3>Performance Comparison</h3>
{comparison}  </section>

  <div class="actions">
    <a href="/experiment" class="btn btn-primary">Run Another Experiment</a>
    <a href="/" class="btn btn-outline">Back to Home</a>
  </div>
</main>
"##
    );

    layout::page("Experiment Results | QCaaS", &body)
}

/// Shown when no experiment result is pending. Touches no result fields,
/// so it can never fail.
pub fn render_fallback() -> String {
    let body = r##"<main class="results fallback">
  <h1>No Results Found</h1>
  <p>Please run an experiment first.</p>
  <a href="/experiment" class="btn btn-primary">Run Experiment</a>
</main>
"##;

    layout::page("No Results | QCaaS", body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result(winner: &str) -> ExperimentResult {
        ExperimentResult {
            svm_metrics: Metrics {
                accuracy: 0.9667,
                precision: 0.9697,
                recall: 0.9667,
                f1_score: 0.9666,
            },
            vqc_metrics: Metrics {
                accuracy: 0.9333,
                precision: 0.9444,
                recall: 0.9333,
                f1_score: 0.9327,
            },
            winner: winner.to_string(),
            execution_time_seconds: 42.7,
            dataset_name: "iris".to_string(),
        }
    }

    #[test]
    fn winner_label_covers_both_models_and_ties() {
        assert_eq!(winner_label("SVM"), "Classical SVM");
        assert_eq!(winner_label("VQC"), "Quantum VQC");
        assert_eq!(winner_label("Tie"), "It's a Tie!");
        assert_eq!(winner_label("anything else"), "It's a Tie!");
    }

    #[test]
    fn result_page_shows_metrics_as_percentages() {
        let html = render(&sample_result("SVM"));
        assert!(html.contains("96.7%"));
        assert!(html.contains("93.3%"));
        assert!(html.contains("Execution Time: 42.7s"));
        assert!(html.contains("Dataset: <span class=\"dataset-name\">iris</span>"));
        assert!(html.contains("Performance Comparison"));
    }

    #[test]
    fn winning_model_card_is_emphasized() {
        let html = render(&sample_result("SVM"));
        assert_eq!(html.matches("model-card winner").count(), 1);
        assert!(html.contains("<p class=\"winner-name\">Classical SVM</p>"));

        let html = render(&sample_result("VQC"));
        assert_eq!(html.matches("model-card winner").count(), 1);
        assert!(html.contains("<p class=\"winner-name\">Quantum VQC</p>"));

        let html = render(&sample_result("Tie"));
        assert_eq!(html.matches("model-card winner").count(), 0);
        assert!(html.contains("<p class=\"winner-name\">It's a Tie!</p>"));
    }

    #[test]
    fn dataset_name_is_escaped() {
        let mut result = sample_result("VQC");
        result.dataset_name = "<script>alert(1)</script>".to_string();
        let html = render(&result);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn fallback_points_back_to_the_experiment_page() {
        let html = render_fallback();
        assert!(html.contains("No Results Found"));
        assert!(html.contains("Please run an experiment first."));
        assert!(html.contains(r#"href="/experiment""#));
    }
}
