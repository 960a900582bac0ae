use std::path::PathBuf;

use rpclint_enforce::engine::ValidationEngine;
use rpclint_output::OutputFormatter;

/// Run `rpclint rules`: list every rule and whether the config enables it.
pub fn run(formatter: &dyn OutputFormatter, config: Option<PathBuf>) -> i32 {
    let config = match super::load_config("rules", config.as_deref()) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let engine = match ValidationEngine::with_config(&config) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("rpclint rules: {}", e);
            return 2;
        }
    };

    let output = formatter.format_rules(&engine.rule_infos());
    if !output.is_empty() {
        println!("{}", output.trim_end());
    }
    0
}
