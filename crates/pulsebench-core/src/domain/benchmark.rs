//! Benchmark stage and invocation types.

use std::fmt;

/// One stage of the benchmark suite, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BenchmarkStage {
    Cpu,
    Memory,
    Disk,
    Gpu,
}

impl BenchmarkStage {
    /// All stages in the order a run executes them.
    pub const ORDER: [Self; 4] = [Self::Cpu, Self::Memory, Self::Disk, Self::Gpu];

    /// Human-readable stage label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            Self::Memory => "Memory",
            Self::Disk => "Disk",
            Self::Gpu => "GPU",
        }
    }
}

impl fmt::Display for BenchmarkStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the runner treats a missing or failing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolRequirement {
    /// Absence or failure aborts the whole run.
    Required,
    /// Absence or failure skips the stage with a warning.
    Optional,
}

/// A single external benchmark command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkInvocation {
    /// Stage this invocation belongs to.
    pub stage: BenchmarkStage,
    /// Executable name, resolved on `PATH`.
    pub program: String,
    /// Arguments passed verbatim.
    pub args: Vec<String>,
    /// Missing/failing tool policy.
    pub requirement: ToolRequirement,
}

impl BenchmarkInvocation {
    fn new(
        stage: BenchmarkStage,
        program: &str,
        args: &[&str],
        requirement: ToolRequirement,
    ) -> Self {
        Self {
            stage,
            program: program.to_string(),
            args: args.iter().map(|a| (*a).to_string()).collect(),
            requirement,
        }
    }

    /// `sysbench cpu --threads=<n> run`
    pub fn cpu(threads: u32) -> Self {
        let threads_arg = format!("--threads={threads}");
        Self::new(
            BenchmarkStage::Cpu,
            "sysbench",
            &["cpu", &threads_arg, "run"],
            ToolRequirement::Required,
        )
    }

    /// `sysbench memory run`
    pub fn memory() -> Self {
        Self::new(
            BenchmarkStage::Memory,
            "sysbench",
            &["memory", "run"],
            ToolRequirement::Required,
        )
    }

    /// 4k random-write `fio` job, 30 seconds, time based.
    pub fn disk() -> Self {
        Self::new(
            BenchmarkStage::Disk,
            "fio",
            &[
                "--name=randwrite",
                "--ioengine=libaio",
                "--rw=randwrite",
                "--bs=4k",
                "--size=100M",
                "--numjobs=1",
                "--runtime=30",
                "--time_based",
                "--group_reporting",
            ],
            ToolRequirement::Required,
        )
    }

    /// `glmark2`, best effort.
    pub fn gpu() -> Self {
        Self::new(BenchmarkStage::Gpu, "glmark2", &[], ToolRequirement::Optional)
    }

    /// Invocation for `stage`, using `threads` for the CPU stage.
    pub fn for_stage(stage: BenchmarkStage, threads: u32) -> Self {
        match stage {
            BenchmarkStage::Cpu => Self::cpu(threads),
            BenchmarkStage::Memory => Self::memory(),
            BenchmarkStage::Disk => Self::disk(),
            BenchmarkStage::Gpu => Self::gpu(),
        }
    }

    /// Command line as a single display string.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Build the full suite for one run, in stage order.
pub fn benchmark_suite(threads: u32) -> Vec<BenchmarkInvocation> {
    BenchmarkStage::ORDER
        .iter()
        .map(|stage| BenchmarkInvocation::for_stage(*stage, threads))
        .collect()
}
