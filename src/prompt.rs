/// Maximum number of tokens Titan may emit for one blog.
pub const MAX_TOKEN_COUNT: u32 = 512;

/// Sampling temperature for blog generation.
pub const TEMPERATURE: f64 = 0.7;

/// Nucleus-sampling threshold for blog generation.
pub const TOP_P: f64 = 0.9;

/// Builds the natural-language instruction sent to the model.
#[must_use]
pub fn build_prompt(topic: &str) -> String {
    format!("Write a 200-word blog on the topic: {topic}.")
}
