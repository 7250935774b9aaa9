use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static STORE_FAILURES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "storefront_store_failures_total",
        "Total data-access failures, by repository operation",
        &["operation"]
    )
    .expect("register store_failures_total")
});

pub static NOT_FOUND_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "storefront_not_found_total",
        "Total lookups answered with not found, by entity",
        &["entity"]
    )
    .expect("register not_found_total")
});

pub static AUTH_REJECTIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "storefront_auth_rejections_total",
        "Total requests rejected by the admin gate, by reason",
        &["reason"]
    )
    .expect("register auth_rejections_total")
});

pub fn record_store_failure(operation: &str) {
    STORE_FAILURES_TOTAL.with_label_values(&[operation]).inc();
}

pub fn record_not_found(entity: &str) {
    NOT_FOUND_TOTAL.with_label_values(&[entity]).inc();
}

pub fn record_auth_rejection(reason: &str) {
    AUTH_REJECTIONS_TOTAL.with_label_values(&[reason]).inc();
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_counters_show_up_in_encoded_output() {
        record_store_failure("product.search");
        record_not_found("product");
        let (status, body) = encode_metrics();
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("storefront_store_failures_total"));
        assert!(body.contains("operation=\"product.search\""));
        assert!(body.contains("storefront_not_found_total"));
    }
}
