//! Console rendering of benchmark progress.

use pulsebench_core::{BenchmarkEvent, BenchmarkEventEmitter, BenchmarkStage, SkipReason};

const SEPARATOR_WIDTH: usize = 50;

/// Print a horizontal separator line.
pub fn print_separator() {
    println!("{}", "=".repeat(SEPARATOR_WIDTH));
}

fn stage_icon(stage: BenchmarkStage) -> &'static str {
    match stage {
        BenchmarkStage::Cpu | BenchmarkStage::Memory => "🧠",
        BenchmarkStage::Disk => "💾",
        BenchmarkStage::Gpu => "🎮",
    }
}

/// Render one event as the lines printed for it.
pub fn render_event(event: &BenchmarkEvent) -> Vec<String> {
    match event {
        BenchmarkEvent::RunStarted {
            iteration,
            total,
            distro,
            threads,
            at,
        } => vec![
            String::new(),
            format!("🚀 Starting benchmark run {iteration}/{total}"),
            "=".repeat(SEPARATOR_WIDTH),
            format!("🖥️  Distro: {distro}"),
            format!("🧵 CPU Threads: {threads}"),
            format!("⏱️  Timestamp: {} UTC", at.format("%Y-%m-%dT%H:%M:%S%.6f")),
        ],
        BenchmarkEvent::StageStarted { stage } => vec![
            String::new(),
            format!("{} Running {stage} benchmark...", stage_icon(*stage)),
        ],
        BenchmarkEvent::StageFinished { .. } => Vec::new(),
        BenchmarkEvent::StageSkipped { stage, reason } => {
            let line = match reason {
                SkipReason::ToolMissing { tool } => {
                    format!("⚠️  {tool} not found. Skipping {stage} benchmark.")
                }
                SkipReason::NoDisplay => {
                    format!("⚠️  No graphical environment detected. Skipping {stage} benchmark.")
                }
            };
            vec![line]
        }
        BenchmarkEvent::StageFailureAbsorbed { stage, error } => {
            vec![format!("⚠️  {stage} benchmark failed ({error}). Continuing.")]
        }
        BenchmarkEvent::RunCompleted { .. } => vec![
            String::new(),
            "✅ Benchmark run completed.".to_string(),
            "=".repeat(SEPARATOR_WIDTH),
        ],
    }
}

/// Prints benchmark progress to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleEmitter;

impl BenchmarkEventEmitter for ConsoleEmitter {
    fn emit(&self, event: BenchmarkEvent) {
        for line in render_event(&event) {
            println!("{line}");
        }
    }
}
