//! Validation for the `[api]` and `[model]` sections.

use crate::schema::GembotConfig;

use super::helpers::{validate_model_id, validate_not_blank, validate_range, validate_range_f64};

/// Validate API connection constraints.
pub(crate) fn validate_api(errors: &mut Vec<String>, config: &GembotConfig) {
    let api = &config.api;

    validate_not_blank(errors, "api.key_env", &api.key_env);

    if !(api.base_url.starts_with("https://") || api.base_url.starts_with("http://")) {
        errors.push(format!(
            "api.base_url = {:?} must start with http:// or https://",
            api.base_url
        ));
    }

    validate_range(
        errors,
        "api.connect_timeout_secs",
        api.connect_timeout_secs,
        1,
        300,
    );
    if let Some(secs) = api.request_timeout_secs {
        validate_range(errors, "api.request_timeout_secs", secs, 1, 3600);
    }
}

/// Validate model constraints.
pub(crate) fn validate_model(errors: &mut Vec<String>, config: &GembotConfig) {
    let model = &config.model;

    validate_model_id(errors, "model.name", &model.name);

    validate_range(
        errors,
        "model.max_output_tokens",
        u64::from(model.max_output_tokens),
        1,
        65536,
    );
    validate_range_f64(errors, "model.temperature", model.temperature, 0.0, 2.0);
}
