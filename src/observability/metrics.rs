use metrics_exporter_prometheus::PrometheusBuilder;

pub fn init_metrics() {
    let port = std::env::var("METRICS_PORT")
        .unwrap_or("9898".to_string())
        .parse::<u16>()
        .expect("invalid METRICS_PORT");

    PrometheusBuilder::new()
        .with_http_listener(([0, 0, 0, 0], port))
        .install()
        .expect("failed to install Prometheus recorder");
}
