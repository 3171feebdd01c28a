use tracing_subscriber::EnvFilter;

/// Log targets that should receive output.
///
/// The `fbdh` binary and the `fbdh` façade both log under `fbdh::*`.
const CRATE_TARGETS: &[&str] = &["fbdh", "fbdh_core", "fbdh_time"];

/// Level for a `-v` count: warn, info (-v), debug (-vv), trace (-vvv and up).
fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `EnvFilter` directives used when `RUST_LOG` is unset.
fn default_directives(verbosity: u8) -> String {
    let level = level(verbosity);
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install a stderr subscriber; `RUST_LOG` overrides the verbosity flag.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
