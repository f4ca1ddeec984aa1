use serde::Serialize;

/// Path segment every KoboldCPP generation endpoint ends with.
pub const KOBOLD_GENERATE_PATH: &str = "api/v1/generate";

pub const QUESTIONS_PER_REQUEST: usize = 3;

pub const GENERATED_ID_PREFIX: &str = "generated";

/// Sampling parameters sent with every generation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SamplingParams {
    pub max_context_length: u32,
    pub max_length: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub stop_sequence: &'static [&'static str],
    pub rep_pen: f64,
    pub top_k: u32,
}

pub static SAMPLING_PARAMS: SamplingParams = SamplingParams {
    max_context_length: 2048,
    max_length: 500,
    temperature: 0.7,
    top_p: 0.9,
    stop_sequence: &["}"],
    rep_pen: 1.1,
    top_k: 40,
};
