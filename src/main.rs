//! defconfig-report: print which Kconfig options a defconfig actually set,
//! in their menu context, with optional help text and source locations.

use anyhow::Result;

fn main() -> Result<()> {
    defconfig_report::cli::run()
}
