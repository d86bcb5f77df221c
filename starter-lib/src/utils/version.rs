/// Version of this build. Set `RELEASE_VERSION` at compile time to stamp a release name
/// (e.g. `RELEASE_VERSION=v0.0.2 cargo build --release`), otherwise the crate version is used.
/// Only read at build time, setting it when running the binary has no effect.
pub const VERSION: &str = match option_env!("RELEASE_VERSION") {
    Some(version) => version,
    None => concat!("v", env!("CARGO_PKG_VERSION")),
};
