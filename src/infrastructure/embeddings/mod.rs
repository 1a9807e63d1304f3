pub mod mock;
pub mod openai;

/// Scale a vector to unit length so dot products read as cosine
/// similarity. Zero-norm input comes back as zeros rather than NaNs.
pub fn l2_normalize(vector: Vec<f32>) -> Vec<f32> {
    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm == 0.0 || !norm.is_finite() {
        return vec![0.0; vector.len()];
    }
    vector.into_iter().map(|v| v / norm).collect()
}
