// src/views/experiment.rs
use super::layout;
use crate::models::Dataset;
use crate::runner::Phase;

/// Experiment page: the dataset form plus the hidden loading panel the page
/// script drives while a run is in flight.
pub fn render() -> String {
    let options: String = Dataset::ALL
        .iter()
        .map(|d| {
            format!(
                "      <option value=\"{}\">{}</option>\n",
                d.slug(),
                d.label()
            )
        })
        .collect();

    // The panel lists the four working stages; `Complete` just flips them
    // all to done.
    let steps: String = Phase::SEQUENCE[..4]
        .iter()
        .map(|phase| {
            let hint = if *phase == Phase::TrainingVqc {
                " <span class=\"step-hint\">(This is the heavy lifting, please wait...)</span>"
            } else {
                ""
            };
            format!(
                "      <li class=\"step\" data-step=\"{}\"><span class=\"step-label\">{}</span>{}</li>\n",
                phase.index(),
                phase.label(),
                hint
            )
        })
        .collect();

    let body = format!(
        r##"<main class="card experiment">
  <a href="/" class="home-link">Home</a>
  <header>
    <h1>Run a New Experiment</h1>
    <p>Select a dataset to begin the comparison</p>
  </header>

  <form id="experiment-form">
    <label for="dataset">Select a Dataset</label>
    <select id="dataset" name="dataset">
{options}    </select>
    <p class="field-note">Pre-loaded datasets optimized for quantum vs classical comparison</p>

    <button type="submit" id="run-button" class="btn btn-primary">Train &amp; Compare Models</button>
    <p class="field-note">Trains both VQC and SVM models • Results appear automatically</p>

    <div id="error-box" class="error-box" hidden>
      <p class="error-title">Error</p>
      <p id="error-message"></p>
    </div>
  </form>

  <section id="loading-panel" hidden>
    <h2>Analyzing...</h2>
    <p>Here's what's happening:</p>
    <ol class="steps">
{steps}    </ol>
    <p class="field-note">This process typically takes 60-90 seconds</p>
    <p class="field-note">Please don't close this page</p>
  </section>

  <footer class="card-footer">
    <p>⏱️ Analysis typically takes 60-90 seconds</p>
  </footer>
</main>
<script src="/experiment.js"></script>
"##
    );

    layout::page("Run a New Experiment | QCaaS", &body)
}
