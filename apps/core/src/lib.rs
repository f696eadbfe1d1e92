pub mod assets;
pub mod client_state;
pub mod config;
pub mod contract;
pub mod core_service;
pub mod logging;
pub mod model;
pub mod runtime;
pub mod search;
pub mod selection;
pub mod settings;
pub mod snippet_store;
pub mod transport;

#[cfg(test)]
mod tests {
    mod filter_latency_test {
        include!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../../tests/perf/filter_latency_test.rs"
        ));
    }
}
