// Small CLI entry: run a balancing computation from the command line.
//
// Usage:
//   cargo run -- <percent> <u0> <a0> [u1 a1]
//
// Examples:
//   cargo run -- 99 2.0 45        # Run 1 only
//   cargo run -- 99 4.2 80 3.5 148  # Run 1 + Run 2

use wheel_balancing_dss::domain::measurement::{AngularMeasurement, RunOneInput, RunTwoInput};
use wheel_balancing_dss::domain::types::PercentMode;
use wheel_balancing_dss::{logging, BalancingApi};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", wheel_balancing_dss::APP_NAME, wheel_balancing_dss::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let percent: u32 = args
        .next()
        .ok_or("用法: wheel-balancing-dss <percent> <u0> <a0> [u1 a1]")?
        .parse()?;
    let u0: f64 = args.next().ok_or("缺少 u0")?.parse()?;
    let a0: f64 = args.next().ok_or("缺少 a0")?.parse()?;

    let mode = PercentMode::from_percent(percent);
    let api = BalancingApi::new();

    let run1 = api.calculate_run_one(&RunOneInput {
        mode,
        measurement: AngularMeasurement::new(u0, a0),
    })?;

    println!("=== Run 1 ===");
    println!("{}", serde_json::to_string_pretty(&run1)?);

    // 可选的 Run 2 (传入 u1 a1 时执行)
    if let Some(u1_arg) = args.next() {
        let u1: f64 = u1_arg.parse()?;
        let a1: f64 = args.next().ok_or("缺少 a1")?.parse()?;

        let run2 = api.calculate_run_two(
            &run1.snapshot,
            &RunTwoInput {
                measurement: AngularMeasurement::new(u1, a1),
            },
        )?;

        println!("=== Run 2 ===");
        println!("{}", serde_json::to_string_pretty(&run2)?);
    }

    Ok(())
}
