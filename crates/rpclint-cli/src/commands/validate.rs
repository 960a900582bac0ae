use std::path::PathBuf;

use rpclint_core::loader::ModelLoader;
use rpclint_enforce::engine::ValidationEngine;
use rpclint_output::OutputFormatter;

pub struct ValidateArgs {
    pub models: Vec<PathBuf>,
    pub config: Option<PathBuf>,
    pub suppress: Vec<String>,
    pub disable: Vec<String>,
    pub sequential: bool,
}

/// Run `rpclint validate <model.json>...`.
///
/// Exit codes: 0 when no unsuppressed diagnostics remain, 1 when some do,
/// 2 when the model, config or arguments cannot be used.
pub fn run(formatter: &dyn OutputFormatter, args: ValidateArgs) -> i32 {
    let config = match super::load_config("validate", args.config.as_deref()) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let mut engine = match ValidationEngine::with_config(&config) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("rpclint validate: {}", e);
            return 2;
        }
    };
    for code in &args.suppress {
        if let Err(e) = engine.suppress(code) {
            eprintln!("rpclint validate: --suppress: {}", e);
            return 2;
        }
    }
    for code in &args.disable {
        if let Err(e) = engine.disable(code) {
            eprintln!("rpclint validate: --disable: {}", e);
            return 2;
        }
    }
    if args.sequential {
        engine.set_parallel(false);
    }

    let mut loader = ModelLoader::new();
    for path in &args.models {
        if let Err(e) = loader.load_path(path) {
            eprintln!("rpclint validate: {}", e);
            return 2;
        }
    }
    tracing::debug!(documents = loader.documents(), "model files loaded");
    let graph = match loader.assemble() {
        Ok(g) => g,
        Err(e) => {
            eprintln!("rpclint validate: {}", e);
            return 2;
        }
    };

    let report = match engine.validate(&graph) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("rpclint validate: model error: {}", e);
            return 2;
        }
    };

    let output = formatter.format_report(&report);
    if !output.is_empty() {
        println!("{}", output.trim_end());
    }

    if report.has_errors() {
        1
    } else {
        0
    }
}
