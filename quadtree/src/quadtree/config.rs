#[derive(Debug, Clone)]
pub struct Config {
    /// A leaf splits once it holds more than this many elements.
    pub element_limit: usize,
    pub max_depth: usize,
    /// Smallest edge a child quad may have; leaves at this size keep growing
    /// instead of splitting.
    pub min_size: f32,
    /// Node slots reserved up front.
    pub pool_size: usize,
}

impl Config {
    pub fn with_element_limit(element_limit: usize) -> Self {
        Config {
            element_limit,
            ..Config::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            element_limit: 4,
            // Bounds the split chain for coincident points.
            max_depth: 16,
            min_size: 1.0,
            pool_size: 64,
        }
    }
}
