//! CLI smoke entry point.
//!
//! # Responsibility
//! - Run one activation pass over the built-in demo extensions.
//! - Accept `name=value` overrides for each extension's `enabled` flag.
//!
//! Example: `extkit_cli http=false mixer=yes`

mod demo;

use extkit_core::{default_log_level, init_logging, load_enabled_extensions, ElementRegistry};
use log::Log;
use std::process::ExitCode;

fn main() -> ExitCode {
    let log_dir = std::env::temp_dir().join("extkit-logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir) {
        eprintln!("warning: file logging unavailable: {err}");
    }

    let registry = demo::registry();
    let mut config = demo::default_config();
    for arg in std::env::args().skip(1) {
        let Some((name, value)) = arg.split_once('=') else {
            eprintln!("error: expected `name=value`, got `{arg}`");
            return ExitCode::from(2);
        };
        config = config.with_value(name.trim(), "enabled", value.trim());
    }

    let split = match load_enabled_extensions(&registry, &config, log::logger()) {
        Ok(split) => split,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    log::logger().flush();

    println!("extkit_core version={}", extkit_core::core_version());
    println!("enabled={}", split.enabled_names().join(","));
    println!("disabled={}", split.disabled_names().join(","));

    let mut elements = ElementRegistry::new();
    for ext in &split.enabled {
        let extension = ext.extension();
        extension.register_media_elements(&mut elements);
        for class in extension
            .frontend_classes()
            .into_iter()
            .chain(extension.backend_classes())
        {
            let service = class.create();
            println!(
                "service={} role={:?} extension={}",
                service.service_name(),
                class.role(),
                ext.name()
            );
        }
    }
    println!("media_elements={}", elements.len());

    ExitCode::SUCCESS
}
