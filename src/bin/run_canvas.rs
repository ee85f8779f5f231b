//! CLI: run one processor node of a canvas scene.
//!
//! Loads a scene (JSON), resolves the processor's inputs from geometry, calls the selected
//! inference backend and writes the result node back into the scene.
//!
//! Usage: `run_canvas [OPTIONS] --processor <ID> <scene.json>`
//! Example: run_canvas --backend echo --processor proc-1 --out /tmp/after.json scene.json
//!
//! Set RUST_LOG=canvas_flow=trace for TRACE-level span enter/exit and events.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use canvas_flow::canvas_io::{load_snapshot, write_snapshot};
use canvas_flow::{
  Canvas, InMemoryCanvas, InferenceConfig, InferenceSettings, NodeId, RunOutcome, TaskExecutor,
};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Run a processor node from a canvas scene file.
#[derive(Parser, Debug)]
#[command(name = "run_canvas")]
#[command(
  after_help = r#"Environment variables (override the matching flags when set):
  CANVAS_FLOW_GEMINI_API_KEY    API key for --backend gemini.
  CANVAS_FLOW_GEMINI_ENDPOINT   generateContent URL for --backend gemini.
  CANVAS_FLOW_AGENT_CMD         Command for --backend agent; the prompt is written to its stdin.

Examples:
  run_canvas --processor proc-1 --dry-run scene.json
  run_canvas --backend echo --processor proc-1 --out after.json scene.json"#
)]
struct Args {
  /// Inference backend: gemini, agent or echo.
  #[arg(long, value_name = "BACKEND", default_value = "gemini")]
  backend: String,

  /// Command for the agent backend. Overridden by CANVAS_FLOW_AGENT_CMD if set.
  #[arg(long, value_name = "CMD")]
  agent_cmd: Option<String>,

  /// Gemini API key. Overridden by CANVAS_FLOW_GEMINI_API_KEY if set.
  #[arg(long, value_name = "KEY")]
  api_key: Option<String>,

  /// Gemini endpoint URL. Overridden by CANVAS_FLOW_GEMINI_ENDPOINT if set.
  #[arg(long, value_name = "URL")]
  endpoint: Option<String>,

  /// Print the resolved inputs as JSON and exit without running.
  #[arg(long)]
  dry_run: bool,

  /// Write the updated scene here after the run.
  #[arg(long, value_name = "PATH")]
  out: Option<PathBuf>,

  /// Id of the processor node to run.
  #[arg(long, value_name = "ID")]
  processor: String,

  /// Path to the scene JSON file
  #[arg(value_name = "scene.json")]
  scene_path: PathBuf,
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();
  let processor_id = NodeId::new(args.processor.as_str());

  let snapshot = match load_snapshot(&args.scene_path) {
    Ok(s) => s,
    Err(e) => {
      eprintln!("Error reading {}: {}", args.scene_path.display(), e);
      process::exit(1);
    }
  };
  info!(
    nodes = snapshot.nodes.len(),
    connectors = snapshot.connectors.len(),
    "scene loaded"
  );

  if snapshot.node(&processor_id).is_none() {
    eprintln!("Error: node {} not found in scene", processor_id);
    process::exit(1);
  }

  if args.dry_run {
    let resolution = canvas_flow::resolve(&snapshot, &processor_id);
    print_json(&resolution);
    return;
  }

  let settings = InferenceSettings {
    backend: args.backend.clone(),
    api_key: args.api_key.clone(),
    endpoint: args.endpoint.clone(),
    agent_cmd: args.agent_cmd.clone(),
  };
  let config = match InferenceConfig::from_env(&settings) {
    Ok(c) => c,
    Err(e) => {
      eprintln!("Configuration error: {}", e);
      process::exit(1);
    }
  };

  let canvas = Arc::new(InMemoryCanvas::new(snapshot));
  let executor = TaskExecutor::new(canvas.clone(), config.build_client());
  let report = executor.run(&processor_id).await;
  info!(outcome = ?report.outcome, result = ?report.result_node_id, "run finished");
  print_json(&report);

  if let Some(out) = &args.out {
    if let Err(e) = write_snapshot(out, &canvas.snapshot()) {
      eprintln!("Error writing {}: {}", out.display(), e);
      process::exit(1);
    }
  }

  if matches!(report.outcome, RunOutcome::Skipped | RunOutcome::Failed) {
    process::exit(1);
  }
}

fn print_json<T: serde::Serialize>(value: &T) {
  match serde_json::to_string_pretty(value) {
    Ok(s) => println!("{}", s),
    Err(e) => {
      eprintln!("Error serializing output: {}", e);
      process::exit(1);
    }
  }
}
