//! Built-in demo extensions used by the smoke CLI.

use extkit_core::{
    ConfigView, ElementRegistry, EnvironmentError, Extension, ExtensionConfigSchema, FieldKind,
    Service, ServiceClass, ServiceRole, StaticRegistry,
};

const DEMO_NAMES: &[&str] = &["local", "http", "mixer", "scrobbler"];

/// Dependencies the demo treats as installed.
const INSTALLED: &[&str] = &["libsoundio"];

struct NamedService(&'static str);

impl Service for NamedService {
    fn service_name(&self) -> &str {
        self.0
    }
}

struct LocalFiles;

impl Extension for LocalFiles {
    fn dist_name(&self) -> &str {
        "Extkit-Local"
    }

    fn ext_name(&self) -> &str {
        "local"
    }

    fn version(&self) -> &str {
        "0.4.0"
    }

    fn default_config(&self) -> String {
        "[local]\nenabled = true\nmedia_dir = $XDG_MUSIC_DIR\n".to_string()
    }

    fn config_schema(&self) -> ExtensionConfigSchema {
        ExtensionConfigSchema::new(self.ext_name()).with_field("media_dir", FieldKind::String)
    }

    fn backend_classes(&self) -> Vec<ServiceClass> {
        vec![ServiceClass::new("local-library", ServiceRole::Backend, || {
            Box::new(NamedService("local-library"))
        })]
    }
}

struct HttpFrontend;

impl Extension for HttpFrontend {
    fn dist_name(&self) -> &str {
        "Extkit-HTTP"
    }

    fn ext_name(&self) -> &str {
        "http"
    }

    fn version(&self) -> &str {
        "0.4.0"
    }

    fn default_config(&self) -> String {
        "[http]\nenabled = true\nport = 6680\n".to_string()
    }

    fn config_schema(&self) -> ExtensionConfigSchema {
        ExtensionConfigSchema::new(self.ext_name()).with_field("port", FieldKind::Integer)
    }

    fn frontend_classes(&self) -> Vec<ServiceClass> {
        vec![ServiceClass::new("http-server", ServiceRole::Frontend, || {
            Box::new(NamedService("http-server"))
        })]
    }
}

struct SoftwareMixer;

impl Extension for SoftwareMixer {
    fn dist_name(&self) -> &str {
        "Extkit-Mixer"
    }

    fn ext_name(&self) -> &str {
        "mixer"
    }

    fn version(&self) -> &str {
        "0.2.1"
    }

    fn default_config(&self) -> String {
        "[mixer]\nenabled = true\n".to_string()
    }

    fn register_media_elements(&self, registry: &mut ElementRegistry) {
        if let Err(err) = registry.register("softwaremixer", 128) {
            log::warn!("event=element_register module=demo status=error error={err}");
        }
    }
}

struct Scrobbler;

impl Extension for Scrobbler {
    fn dist_name(&self) -> &str {
        "Extkit-Scrobbler"
    }

    fn ext_name(&self) -> &str {
        "scrobbler"
    }

    fn version(&self) -> &str {
        "0.1.0"
    }

    fn default_config(&self) -> String {
        "[scrobbler]\nenabled = true\nusername =\n".to_string()
    }

    fn validate_environment(&self) -> Result<(), EnvironmentError> {
        match std::env::var("EXTKIT_SCROBBLER_TOKEN") {
            Ok(token) if !token.trim().is_empty() => Ok(()),
            _ => Err(EnvironmentError::unsupported(
                "EXTKIT_SCROBBLER_TOKEN is not set",
            )),
        }
    }
}

/// Registry holding every demo extension; `http` needs a missing dependency.
pub fn registry() -> StaticRegistry {
    let mut registry = StaticRegistry::with_installed(INSTALLED.iter().copied());
    let entries: [(&str, &[&str], fn() -> Box<dyn Extension>); 4] = [
        ("local", &[], || Box::new(LocalFiles)),
        ("http", &["libwebsocket"], || Box::new(HttpFrontend)),
        ("mixer", &["libsoundio"], || Box::new(SoftwareMixer)),
        ("scrobbler", &[], || Box::new(Scrobbler)),
    ];
    for (name, requires, build) in entries {
        if let Err(err) = registry.register(name, requires, move || Ok(build())) {
            log::error!("event=demo_register module=demo status=error error={err}");
        }
    }
    registry
}

/// Every demo extension enabled, mirroring each default config.
pub fn default_config() -> ConfigView {
    DEMO_NAMES
        .iter()
        .fold(ConfigView::new(), |view, name| {
            view.with_value(*name, "enabled", "true")
        })
}
