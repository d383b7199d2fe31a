const ENGINE_LIB_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn engine_lib_version() -> &'static str {
    ENGINE_LIB_VERSION
}
