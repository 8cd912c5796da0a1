//! Registry check cases.

use colored::Colorize;

use mesh_board_variants::variant::validate::router_advisories;
use mesh_board_variants::variant::VariantRegistry;
use mesh_board_variants::BoardVariant;

/// Check result.
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub message: Option<String>,
}

impl CheckResult {
    fn pass(name: &str) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            message: None,
        }
    }

    fn fail(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            message: Some(message.to_string()),
        }
    }

    /// Passing result carrying an advisory note
    fn note(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            message: Some(message.to_string()),
        }
    }
}

/// Run a check and print its result as it happens.
fn run_check<F>(name: &str, check_fn: F) -> CheckResult
where
    F: FnOnce() -> CheckResult,
{
    print!("  {} ... ", name);
    std::io::Write::flush(&mut std::io::stdout()).ok();

    let mut result = check_fn();
    result.name = name.to_string();

    if result.passed {
        println!("{}", "PASS".green().bold());
    } else {
        println!("{}", "FAIL".red().bold());
    }
    if let Some(msg) = &result.message {
        if result.passed {
            println!("    {}", msg.yellow());
        } else {
            println!("    {}", msg.red());
        }
    }

    result
}

/// Run every check against `registry` and return results.
pub fn run_all_checks(registry: &VariantRegistry) -> Vec<CheckResult> {
    let mut results = Vec::new();

    results.push(run_check("Registry self-check", || check_registry(registry)));
    results.push(run_check("Fingerprints are distinct", || {
        check_fingerprints(registry.variants())
    }));

    for variant in registry.variants() {
        results.push(run_check(&format!("{} is consistent", variant.name), || {
            check_variant(variant)
        }));
        if let Some(note) = check_router_intervals(variant) {
            results.push(run_check(&format!("{} router intervals", variant.name), || note));
        }
    }

    results
}

/// Print check results summary.
pub fn print_results(results: &[CheckResult]) {
    println!("\n{}", "=".repeat(60));
    println!("{}", "Check Results".bold());
    println!("{}", "=".repeat(60));

    let mut passed = 0;
    let mut failed = 0;

    for result in results {
        if result.passed {
            println!("  {} {}", "[PASS]".green().bold(), result.name);
            passed += 1;
        } else {
            println!("  {} {}", "[FAIL]".red().bold(), result.name);
            if let Some(msg) = &result.message {
                println!("         {}", msg.red());
            }
            failed += 1;
        }
    }

    println!("{}", "-".repeat(60));
    println!(
        "  Total: {} passed, {} failed",
        passed.to_string().green(),
        if failed > 0 {
            failed.to_string().red()
        } else {
            failed.to_string().normal()
        }
    );
    println!("{}", "=".repeat(60));
}

// --- Individual Checks ---

fn check_registry(registry: &VariantRegistry) -> CheckResult {
    match registry.validate_all() {
        Ok(()) => CheckResult::pass("check"),
        Err(e) => CheckResult::fail("check", &e.to_string()),
    }
}

fn check_variant(variant: &BoardVariant) -> CheckResult {
    match variant.validate() {
        Ok(()) => CheckResult::pass("check"),
        Err(e) => CheckResult::fail("check", &e.to_string()),
    }
}

fn check_fingerprints(variants: &[&BoardVariant]) -> CheckResult {
    for (i, variant) in variants.iter().enumerate() {
        let fingerprint = variant.fingerprint();
        if let Some(twin) = variants[..i]
            .iter()
            .find(|earlier| earlier.fingerprint() == fingerprint)
        {
            return CheckResult::fail(
                "check",
                &format!(
                    "{} and {} share fingerprint {:04x}",
                    twin.name, variant.name, fingerprint
                ),
            );
        }
    }
    CheckResult::pass("check")
}

/// Advisory for routers that broadcast more often than clients
fn check_router_intervals(variant: &BoardVariant) -> Option<CheckResult> {
    let advisories = router_advisories(variant);
    if advisories.is_empty() {
        return None;
    }

    let names: Vec<_> = advisories
        .iter()
        .map(|default| format!("{}={}s", default.name(), variant.protocol.get(*default)))
        .collect();
    Some(CheckResult::note(
        "check",
        &format!("shorter than the client default: {}", names.join(", ")),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_board_variants::boards;
    use mesh_board_variants::variant::{DeviceRole, PinAssignment, PinTable, Signal};

    static DUPLICATED: [&BoardVariant; 2] = [
        &boards::heltec_v3::VARIANT,
        &boards::heltec_v3::VARIANT,
    ];

    #[test]
    fn test_stock_registry_passes() {
        let registry = VariantRegistry::new(boards::ALL);
        let results = run_all_checks(&registry);
        assert!(results.iter().all(|r| r.passed));
        assert!(results.len() >= 2 + boards::ALL.len());
    }

    #[test]
    fn test_duplicate_hardware_fails_registry_check() {
        let registry = VariantRegistry::new(&DUPLICATED);
        let result = check_registry(&registry);
        assert!(!result.passed);
        assert!(result.message.unwrap().contains("HELTEC_V3"));
    }

    #[test]
    fn test_duplicate_fingerprint_detected() {
        let result = check_fingerprints(&DUPLICATED);
        assert!(!result.passed);
    }

    #[test]
    fn test_alias_conflict_reported() {
        static ALIASED: [PinAssignment; 2] = [
            PinAssignment::new(Signal::LoraCs, 18),
            PinAssignment::new(Signal::ScreenCs, 18),
        ];
        let mut variant = boards::ttgo_t22_v1_1::VARIANT;
        variant.pins = PinTable::new(&ALIASED);

        let result = check_variant(&variant);
        assert!(!result.passed);
    }

    #[test]
    fn test_router_advisory_is_a_note() {
        let mut chatty = boards::ttgo_t22_v1_1::VARIANT;
        assert!(check_router_intervals(&chatty).is_none());

        chatty.protocol.position_broadcast_secs = 60;
        let note = check_router_intervals(&chatty).unwrap();
        assert!(note.passed);
        assert!(note
            .message
            .unwrap()
            .contains("DEFAULT_POSITION_BROADCAST_SECS=60s"));

        chatty.role = DeviceRole::Client;
        assert!(check_router_intervals(&chatty).is_none());
    }
}
