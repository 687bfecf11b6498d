use crate::core;
use crate::error::AnvilResult;
use colored::Colorize;
use std::path::PathBuf;

/// Format a number for display, removing unnecessary decimal places
fn format_number(n: f64) -> String {
    // Round to 6 decimal places for display; enough for test-lab readings
    let rounded = (n * 1e6).round() / 1e6;
    format!("{:.6}", rounded)
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Execute the analyze command: derive the curve, then run every property
/// stage against the derived copy.
pub fn analyze(file: PathBuf, threshold: f64, no_chart: bool, verbose: bool) -> AnvilResult<()> {
    println!("{}", "🔩 Anvil - Compression test analysis".bold().green());
    println!("   File: {}", file.display());
    println!();

    if verbose {
        println!("{}", "📖 Deriving stress and strain...".cyan());
    }
    let (curve, updated) = core::derive_curve(&file)?;
    println!(
        "   Derived {} stress / {} strain samples",
        curve.stress.len(),
        curve.strain.len()
    );
    println!("   Saved to: {}", updated.display());

    if verbose {
        println!("{}", "📈 Reducing maximum stress...".cyan());
    }
    let max_stress = core::record_max_stress(&updated)?;
    println!(
        "   Maximum stress: {} MPa",
        format_number(max_stress).bold().green()
    );

    if verbose {
        println!("{}", "📐 Fitting compression modulus...".cyan());
    }
    let modulus = core::record_modulus(&updated, &curve)?;
    println!(
        "   Compression modulus: {} MPa",
        format_number(modulus).bold().green()
    );

    if verbose {
        println!(
            "{}",
            format!("🔋 Integrating energy up to {}% strain...", format_number(threshold)).cyan()
        );
    }
    let energy = core::record_energy(&updated, &curve, threshold)?;
    println!(
        "   Energy up to {}% strain: {} MPa·%",
        format_number(threshold),
        format_number(energy).bold().green()
    );

    if no_chart {
        println!("{}", "   Chart skipped".yellow());
    } else {
        if verbose {
            println!("{}", "📊 Embedding stress-strain chart...".cyan());
        }
        core::embed_chart(&updated, &curve)?;
        println!("   Stress-strain chart embedded");
    }

    println!();
    println!("{}", "✅ Analysis complete".bold().green());
    Ok(())
}

/// Execute the derive command: stress/strain columns only, no property
/// calculations.
pub fn derive(file: PathBuf, verbose: bool) -> AnvilResult<()> {
    println!("{}", "🔩 Anvil - Deriving stress and strain".bold().green());
    println!("   File: {}", file.display());
    println!();

    if verbose {
        println!("{}", "📖 Reading geometry and measurement columns...".cyan());
    }
    let (curve, updated) = core::derive_curve(&file)?;

    println!(
        "   Derived {} stress / {} strain samples",
        curve.stress.len(),
        curve.strain.len()
    );
    println!();
    println!("{}", "✅ Curve written".bold().green());
    println!("   Saved to: {}", updated.display());
    Ok(())
}
