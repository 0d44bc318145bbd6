//! # Kickline CLI
//!
//! Terminal front-end for the conduit bending and fill engine. Prompts for
//! parameters (Enter accepts the default in brackets), prints the numbers
//! needed at the bender, and dumps the JSON form of each result.
//!
//! ```text
//! bend_cli [--settings <path.toml|path.json>]
//! ```
//!
//! Set `RUST_LOG=bend_core=debug` to see engine events.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use bend_core::advisory::{bend_warnings_with, springback_target, AngleMode, AngleSelection, Severity};
use bend_core::calculations::bend::{compute_bend, BendKind, BendResult, BendSpec};
use bend_core::calculations::box_fill::{box_fill, BoxFillInput};
use bend_core::calculations::conduit_fill::{conduit_fill_with_rule, ConductorGroup, ConduitFillInput};
use bend_core::geometry::synthesize;
use bend_core::level::{read_level, FixedTilt, LevelStatus, DEFAULT_TOLERANCE_DEG};
use bend_core::settings::EngineSettings;
use bend_core::tables::{BoxType, ConduitType, TradeSize, WireGauge};

fn init_logging() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .init();
}

fn settings_path_from_args() -> Result<Option<PathBuf>> {
    let mut args = std::env::args().skip(1);
    let mut path = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--settings" | "-s" => {
                let value = args.next().context("--settings needs a file path")?;
                path = Some(PathBuf::from(value));
            }
            other => bail!("Unknown argument: {}", other),
        }
    }
    Ok(path)
}

fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    read_line(prompt).and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    read_line(prompt).and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn prompt_string(prompt: &str, default: &str) -> String {
    read_line(prompt).unwrap_or_else(|| default.to_string())
}

fn main() -> Result<()> {
    init_logging();

    let settings = match settings_path_from_args()? {
        Some(path) => EngineSettings::load_from_file(&path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => EngineSettings::default(),
    };
    tracing::info!(fill_rule = ?settings.fill_rule, clamp = settings.angles.clamp, "settings loaded");

    println!("Kickline - Conduit Bending & Fill Calculator");
    println!("============================================");
    println!();
    for (i, kind) in BendKind::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, kind);
    }
    println!("  7. Conduit Fill");
    println!("  8. Box Fill");
    println!();

    match prompt_u32("Choose a calculation [1]: ", 1) {
        n @ 1..=6 => run_bend(BendKind::ALL[n as usize - 1], &settings),
        7 => run_conduit_fill(&settings),
        8 => run_box_fill(),
        n => bail!("No calculation numbered {}", n),
    }
}

/// Angle for shapes that have an auto-suggested default.
///
/// Enter keeps the suggestion; typing an angle switches to manual.
fn choose_angle(height_in: f64, trade_size: TradeSize) -> AngleSelection {
    let selection = AngleSelection::new(height_in, trade_size.nominal_in());
    match read_line(&format!("Bend angle (deg) [{} suggested]: ", selection.angle_deg))
        .and_then(|s| s.parse().ok())
    {
        Some(angle) => selection.with_user_angle(angle),
        None => selection,
    }
}

fn read_bend_spec(kind: BendKind, trade_size: TradeSize) -> (BendSpec, Option<AngleSelection>) {
    match kind {
        BendKind::Offset => {
            let height_in = prompt_f64("Offset height (in) [10.0]: ", 10.0);
            let selection = choose_angle(height_in, trade_size);
            let spec = BendSpec::Offset { height_in, angle_deg: selection.angle_deg };
            (spec, Some(selection))
        }
        BendKind::Saddle3 => {
            let height_in = prompt_f64("Obstacle height (in) [4.0]: ", 4.0);
            let angle_deg = prompt_f64("Center bend angle (deg) [45.0]: ", 45.0);
            (BendSpec::Saddle3 { height_in, angle_deg }, None)
        }
        BendKind::Saddle4 => {
            let height_in = prompt_f64("Obstacle height (in) [6.0]: ", 6.0);
            let width_in = prompt_f64("Obstacle width (in) [12.0]: ", 12.0);
            let selection = choose_angle(height_in, trade_size);
            let spec = BendSpec::Saddle4 { height_in, width_in, angle_deg: selection.angle_deg };
            (spec, Some(selection))
        }
        BendKind::RollingOffset => (BendSpec::RollingOffset {
            rise_in: prompt_f64("Rise (in) [4.0]: ", 4.0),
            roll_in: prompt_f64("Roll (in) [3.0]: ", 3.0),
            angle_deg: prompt_f64("Bend angle (deg) [30.0]: ", 30.0),
        }, None),
        BendKind::Concentric => (BendSpec::Concentric {
            spacing_in: prompt_f64("Center-to-center spacing (in) [2.0]: ", 2.0),
            angle_deg: prompt_f64("Bend angle (deg) [90.0]: ", 90.0),
            pipe_count: prompt_u32("Number of pipes [3]: ", 3),
        }, None),
        BendKind::Segmented => (BendSpec::Segmented {
            radius_in: prompt_f64("Centerline radius (in) [24.0]: ", 24.0),
            angle_deg: prompt_f64("Total angle (deg) [90.0]: ", 90.0),
            shot_count: prompt_u32("Number of shots [5]: ", 5),
        }, None),
    }
}

fn run_bend(kind: BendKind, settings: &EngineSettings) -> Result<()> {
    let conduit_type = ConduitType::from_key(&prompt_string("Conduit type [EMT]: ", "EMT"))?;
    let trade_size = TradeSize::from_key(&prompt_string("Trade size [3/4]: ", "3/4"))?;
    let (spec, selection) = read_bend_spec(kind, trade_size);

    let (spec, clamp) = spec.clamp_angle(&settings.angles);
    if let Some(clamp) = clamp {
        println!(
            "Note: angle {:.1}° clamped to {:.1}°",
            clamp.requested_deg, clamp.applied_deg
        );
    }

    let result = match compute_bend(&spec) {
        Ok(result) => result,
        Err(e) => return report_error(e),
    };

    println!();
    println!("═══════════════════════════════════════");
    println!("  {} - {} {}", kind.display_name().to_uppercase(), trade_size, conduit_type);
    println!("═══════════════════════════════════════");
    if let Some(selection) = &selection {
        println!("  Angle:     {}", describe_angle(selection));
    }
    print_bend_result(&result);

    let warnings = bend_warnings_with(&spec, &settings.advisory);
    if !warnings.is_empty() {
        println!();
        println!("Warnings:");
        for w in &warnings {
            let tag = match w.severity {
                Severity::Error => "[ERROR]",
                Severity::Warning => "[WARN]",
            };
            println!("  {} {}", tag, w.message);
        }
    }

    println!();
    let target = springback_target(spec.angle_deg(), conduit_type, kind, spec.shot_count());
    match target {
        Ok(target) => {
            println!("Springback: bend to {:.1}° ({})", target, conduit_type.code());
            let tilt = read_line("Level reading (deg, Enter to skip): ").and_then(|s| s.parse().ok());
            if let Some(status) = read_level(&FixedTilt(tilt), target, DEFAULT_TOLERANCE_DEG) {
                println!("  Level: {}", describe_level(status));
            }
        }
        Err(e) => println!("Springback: n/a ({})", e),
    }

    let drawing = synthesize(&spec, &settings.geometry)?;
    println!();
    println!("Drawing:");
    println!(
        "  {} stroke(s), {} obstacle(s), {} shot mark(s)",
        drawing.strokes.len(),
        drawing.obstacles.len(),
        drawing.shot_marks.len()
    );
    for dim in &drawing.dimensions {
        println!("  {}", dim.label);
    }
    println!(
        "  Viewport: {:.1} × {:.1} in at ({:.1}, {:.1})",
        drawing.viewport.width, drawing.viewport.height, drawing.viewport.min_x, drawing.viewport.min_y
    );

    print_json(&result);
    Ok(())
}

fn print_bend_result(result: &BendResult) {
    match result {
        BendResult::Offset(r) => {
            println!("  Travel:    {:.2}\" (multiplier {:.3})", r.travel_in, r.multiplier);
            println!("  Run:       {:.2}\"", r.run_in);
            println!("  Shrinkage: {:.2}\" ({:.3}\" per inch)", r.shrinkage_in, r.shrink_per_inch);
        }
        BendResult::Saddle3(r) => {
            println!("  Center:    {:.1}°, sides {:.1}°", r.center_angle_deg, r.side_angle_deg);
            println!("  Center to side: {:.2}\"", r.center_to_side_in);
            println!("  Shrinkage: {:.2}\"", r.shrinkage_in);
        }
        BendResult::Saddle4(r) => {
            println!("  Travel:    {:.2}\"", r.travel_in);
            println!("  Run:       {:.2}\"", r.run_in);
            println!("  Shrinkage: {:.2}\"", r.shrinkage_in);
        }
        BendResult::RollingOffset(r) => {
            println!("  True offset: {:.2}\"", r.true_offset_in);
            println!("  Travel:      {:.2}\"", r.travel_in);
            println!("  Shrinkage:   {:.2}\"", r.shrinkage_in);
        }
        BendResult::Concentric(r) => {
            println!("  Stagger:   {:.2}\"", r.stagger_in);
            for (i, mark) in r.mark_offsets_in.iter().enumerate() {
                println!("  Pipe {}: mark +{:.2}\"", i + 1, mark);
            }
        }
        BendResult::Segmented(r) => {
            println!("  Arc:       {:.2}\"", r.arc_length_in);
            println!("  Chord:     {:.2}\"", r.chord_length_in);
            println!("  Shrinkage: {:.2}\"", r.shrinkage_in);
            println!(
                "  {} shots of {:.1}° every {:.2}\"",
                r.shot_count, r.per_shot_angle_deg, r.shot_spacing_in
            );
        }
    }
}

/// Angle line for the banner, naming where the angle came from.
fn describe_angle(selection: &AngleSelection) -> String {
    match selection.mode {
        AngleMode::Auto => format!("{:.1}° (suggested)", selection.angle_deg),
        AngleMode::Manual => format!(
            "{:.1}° (manual, {:.1}° suggested)",
            selection.angle_deg,
            AngleSelection::new(selection.height_in, selection.trade_size_in).angle_deg
        ),
    }
}

fn describe_level(status: LevelStatus) -> String {
    match status {
        LevelStatus::UnderBent { remaining_deg } => format!("{:.1}° to go", remaining_deg),
        LevelStatus::OnTarget => "on target".to_string(),
        LevelStatus::OverBent { excess_deg } => format!("over by {:.1}°", excess_deg),
    }
}

fn run_conduit_fill(settings: &EngineSettings) -> Result<()> {
    let conduit_type = ConduitType::from_key(&prompt_string("Conduit type [EMT]: ", "EMT"))?;
    let conduit_size = prompt_string("Trade size [3/4]: ", "3/4");

    println!("Conductor counts by THHN gauge (Enter for none):");
    let mut conductors = Vec::new();
    for gauge in WireGauge::ALL {
        let default = if gauge == WireGauge::Awg12 { 3 } else { 0 };
        let count = prompt_u32(&format!("  {} [{}]: ", gauge, default), default);
        if count > 0 {
            conductors.push(ConductorGroup { gauge, count });
        }
    }

    let input = ConduitFillInput {
        conduit_type,
        conduit_size,
        conductors,
    };
    let result = match conduit_fill_with_rule(&input, settings.fill_rule) {
        Ok(result) => result,
        Err(e) => return report_error(e),
    };

    println!();
    println!("═══════════════════════════════════════");
    println!("  CONDUIT FILL - {} {}", input.conduit_size, conduit_type);
    println!("═══════════════════════════════════════");
    println!("  Conductors: {} ({:.4} in²)", result.conductor_count, result.total_conductor_area_in2);
    println!("  Conduit:    {:.4} in²", result.conduit_internal_area_in2);
    println!(
        "  Fill:       {:.2}% of {:.0}% {}",
        result.fill_percent,
        result.max_allowed_percent,
        status_icon(result.passes())
    );
    println!("  Headroom:   {:.4} in²", result.remaining_area_in2);

    print_json(&result);
    Ok(())
}

fn run_box_fill() -> Result<()> {
    println!("Box types:");
    for box_type in BoxType::ALL {
        println!("  {} ({:.1} in³)", box_type, box_type.capacity().value());
    }
    let input = BoxFillInput {
        box_type: prompt_string("Box type [4x1-1/2 Sq]: ", "4x1-1/2 Sq"),
        count_14: prompt_u32("#14 conductors [2]: ", 2),
        count_12: prompt_u32("#12 conductors [4]: ", 4),
        device_count: prompt_u32("Devices [1]: ", 1),
    };

    let result = match box_fill(&input) {
        Ok(result) => result,
        Err(e) => return report_error(e),
    };

    println!();
    println!("═══════════════════════════════════════");
    println!("  BOX FILL - {}", result.box_type);
    println!("═══════════════════════════════════════");
    println!("  #14:      {:.2} in³", result.breakdown.conductors_14_in3);
    println!("  #12:      {:.2} in³", result.breakdown.conductors_12_in3);
    println!("  Devices:  {:.2} in³", result.breakdown.devices_in3);
    println!(
        "  Used:     {:.2} / {:.2} in³ {}",
        result.volume_used_in3,
        result.capacity_in3,
        status_icon(result.passes())
    );

    print_json(&result);
    Ok(())
}

fn report_error(e: bend_core::CalcError) -> Result<()> {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(&e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
    Err(e.into())
}

fn print_json<T: Serialize>(value: &T) {
    println!();
    println!("JSON Output:");
    if let Ok(json) = serde_json::to_string_pretty(value) {
        println!("{}", json);
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass {
        "[OK]"
    } else {
        "[FAIL]"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_angle_names_the_source() {
        let suggested = AngleSelection::new(10.0, 0.75);
        let line = describe_angle(&suggested);
        assert!(line.ends_with("(suggested)"), "got {}", line);

        let manual = suggested.with_user_angle(45.0);
        assert_eq!(manual.mode, AngleMode::Manual);
        assert_eq!(
            describe_angle(&manual),
            format!("45.0° (manual, {:.1}° suggested)", suggested.angle_deg)
        );
    }
}
