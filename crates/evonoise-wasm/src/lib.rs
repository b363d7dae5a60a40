use std::sync::OnceLock;

use anyhow::{Context, Result};
use evonoise_core::{sampling, NoiseParams, PerlinNoise1D};
use wasm_bindgen::prelude::*;

/// Evaluator shared by every call into this instance; the table is built on first use.
fn noise() -> &'static PerlinNoise1D {
    static NOISE: OnceLock<PerlinNoise1D> = OnceLock::new();
    NOISE.get_or_init(PerlinNoise1D::default)
}

fn parse_params(params_json: &str) -> Result<NoiseParams> {
    NoiseParams::from_json(params_json).context("Invalid params")
}

fn evaluate_json_inner(params_json: &str) -> Result<f64> {
    Ok(noise().evaluate_params(&parse_params(params_json)?))
}

fn sample_range_inner(params_json: &str, start: f64, step: f64, count: usize) -> Result<Vec<f64>> {
    let params = parse_params(params_json)?;
    Ok(sampling::sample_range(noise(), &params, start, step, count))
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}

/// Noise value at `position`.
#[wasm_bindgen]
pub fn evaluate(position: f64, persistence: f64, octaves: i32) -> f64 {
    noise().evaluate(position, persistence, octaves)
}

/// Noise value for a JSON parameter set (`position`, `persistence`, `octaves`,
/// `additional_seed`; all optional).
#[wasm_bindgen(js_name = evaluateJson)]
pub fn evaluate_json(params_json: &str) -> Result<f64, JsValue> {
    evaluate_json_inner(params_json).map_err(to_js)
}

/// `count` samples starting at `start`, spaced by `step`, returned as a Float64Array.
#[wasm_bindgen(js_name = sampleRange)]
pub fn sample_range(params_json: &str, start: f64, step: f64, count: usize) -> Result<Vec<f64>, JsValue> {
    sample_range_inner(params_json, start, step, count).map_err(to_js)
}
