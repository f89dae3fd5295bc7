use std::env;

// Backends this crate can compile, in priority order.
#[derive(PartialEq, Eq, Debug)]
struct Backend {
    name: &'static str,
    cfg_flag: &'static str,
    detected: bool,
}

impl Backend {
    fn backends() -> Vec<Backend> {
        vec![
            Backend {
                name: "neon",
                cfg_flag: "neon",
                detected: false,
            },
            Backend {
                name: "portable",
                cfg_flag: "fallback",
                detected: true,
            },
        ]
    }
}

// Reads what the *target* supports, so cross builds pick the right backend.
struct TargetDetector {
    arch: String,
    features: Vec<String>,
}

impl TargetDetector {
    fn from_env() -> Self {
        let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
        let features = env::var("CARGO_CFG_TARGET_FEATURE")
            .unwrap_or_default()
            .split(',')
            .map(str::to_string)
            .collect();

        Self { arch, features }
    }

    fn detect(&self, backends: &mut [Backend]) {
        let forced_portable = env::var_os("CARGO_FEATURE_PORTABLE").is_some();

        for backend in backends.iter_mut() {
            if backend.name == "neon" {
                backend.detected = !forced_portable
                    && self.arch == "aarch64"
                    && self.features.iter().any(|f| f == "neon");
            }
        }
    }
}

fn apply(backends: &[Backend]) {
    let cfg_flag = backends
        .iter()
        .find(|backend| backend.detected)
        .map(|backend| backend.cfg_flag)
        .unwrap_or("fallback");

    println!("applying: {cfg_flag}");

    println!("cargo:rustc-cfg={cfg_flag}");

    println!("cargo::rustc-check-cfg=cfg(neon)");
    println!("cargo::rustc-check-cfg=cfg(fallback)");
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let mut backends = Backend::backends();

    TargetDetector::from_env().detect(&mut backends);

    apply(&backends);
}
