//! Setup command handler.

use std::sync::Arc;

use anyhow::Result;
use pulsebench_core::ToolResolver;
use tracing::info;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{print_profile, print_separator};

/// Detect the host, install missing benchmark tools and save the profile.
///
/// The profile is only written once every required tool resolves, so a
/// failed install leaves any previous profile in place.
pub fn execute(ctx: &CliContext) -> Result<()> {
    println!("🔧 PulseBench: Auto-Setup Mode");
    print_separator();

    let profile = ctx.probe.collect_profile();
    print_profile(&profile);

    let resolver = ToolResolver::new(Arc::clone(&ctx.locator), Arc::clone(&ctx.runner));
    let missing = resolver.missing_tools();

    if missing.is_empty() {
        println!("\n✅ All required tools are already installed.");
    } else {
        println!("\n🚨 Missing tools: {}", missing.join(", "));
        let plan = resolver
            .plan(&profile.distro, &missing)
            .map_err(CliError::from)?;
        println!("📦 Installing with: {}", plan.command_line());
        resolver.install(&plan).map_err(CliError::from)?;
        resolver.verify().map_err(CliError::from)?;
        println!("✅ Installation successful.");
    }

    ctx.store.save(&profile).map_err(CliError::from)?;
    info!(path = %ctx.store.path().display(), "Profile saved");

    println!(
        "\n📝 System profile saved to '{}'",
        ctx.store.path().display()
    );
    println!("✅ Setup complete. Run 'pulsebench run' to start benchmarking.");
    Ok(())
}
