//! Sentence pooling over token embeddings.

use ndarray::{ArrayView2, Axis};

/// Average token vectors where the attention mask is set.
///
/// `hidden_states` has shape `[seq_len, hidden_size]`. Returns zeros when
/// the mask selects no token.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean_pool(hidden_states: ArrayView2<'_, f32>, attention_mask: &[i64]) -> Vec<f32> {
    let hidden_size = hidden_states.len_of(Axis(1));
    let mut sum = vec![0.0f32; hidden_size];
    let mut count = 0usize;

    for (row, &mask) in hidden_states.axis_iter(Axis(0)).zip(attention_mask) {
        if mask == 1 {
            for (s, v) in sum.iter_mut().zip(row.iter()) {
                *s += v;
            }
            count += 1;
        }
    }

    if count > 0 {
        let count = count as f32;
        for s in &mut sum {
            *s /= count;
        }
    }

    sum
}

/// Scale a vector to unit L2 norm in place. Zero vectors are left alone.
pub fn l2_normalize(vector: &mut [f32]) {
    let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for v in vector {
            *v /= norm;
        }
    }
}
