use log::debug;
use ndarray::{s, Array2, Array3};
use strum::IntoEnumIterator;

use crate::matrix::FeatMatrix;
use crate::registry::{Group, Registry};
use crate::{FeatError, FeatResult};

/// Hyperparameters for [`FeatEmbedding`]. `feat_groups` is a string of group
/// letters (`p c v d s t`) selecting which categories take part in the
/// forward pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddingParams {
    pub embed_dim: usize,
    pub feat_groups: String,
}

/// One trainable table over the global feature index space. The forward pass
/// gathers a row per chosen category per symbol and concatenates them, so it
/// expects matrices built with global indices.
#[derive(Debug, Clone)]
pub struct FeatEmbedding {
    table: Array2<f32>,
    chosen: Vec<usize>,
    embed_dim: usize,
}

impl FeatEmbedding {
    /// Builds a zero-initialized table; install trained weights with
    /// [`FeatEmbedding::with_weights`].
    pub fn new(registry: &Registry, params: &EmbeddingParams) -> FeatResult<Self> {
        let chosen = chosen_categories(registry, &params.feat_groups)?;
        debug!(
            "feature embedding: {} categories chosen, table {}x{}",
            chosen.len(),
            registry.num_features(),
            params.embed_dim
        );
        Ok(Self {
            table: Array2::zeros((registry.num_features(), params.embed_dim)),
            chosen,
            embed_dim: params.embed_dim,
        })
    }

    pub fn with_weights(
        registry: &Registry,
        params: &EmbeddingParams,
        table: Array2<f32>,
    ) -> FeatResult<Self> {
        let expected = (registry.num_features(), params.embed_dim);
        if table.dim() != expected {
            return Err(FeatError::WeightShapeMismatch {
                expected,
                actual: table.dim(),
            });
        }
        let chosen = chosen_categories(registry, &params.feat_groups)?;
        Ok(Self {
            table,
            chosen,
            embed_dim: params.embed_dim,
        })
    }

    /// Width of one output position: chosen categories times `embed_dim`.
    pub fn output_dim(&self) -> usize {
        self.chosen.len() * self.embed_dim
    }

    /// Looks up one row per chosen category per symbol and flattens the
    /// category axis, yielding (batch, length, chosen x embed_dim). Padded
    /// positions come out all-zero via the mask.
    pub fn forward(&self, matrix: &FeatMatrix) -> Array3<f32> {
        let (batch, len, _) = matrix.indices.dim();
        let mut out = Array3::<f32>::zeros((batch, len, self.output_dim()));
        for b in 0..batch {
            for l in 0..len {
                if !matrix.padding[[b, l]] {
                    continue;
                }
                for (k, &cat) in self.chosen.iter().enumerate() {
                    let row = matrix.indices[[b, l, cat]] as usize;
                    let span = k * self.embed_dim..(k + 1) * self.embed_dim;
                    out.slice_mut(s![b, l, span]).assign(&self.table.row(row));
                }
            }
        }
        out
    }
}

fn chosen_categories(registry: &Registry, feat_groups: &str) -> FeatResult<Vec<usize>> {
    let mut letters = Vec::with_capacity(feat_groups.len());
    for ch in feat_groups.chars() {
        if letters.contains(&ch) {
            return Err(FeatError::DuplicateFeatureGroup(ch));
        }
        if Group::iter().all(|g| g.code() != ch) {
            return Err(FeatError::InvalidGroup(ch.to_string()));
        }
        letters.push(ch);
    }
    Ok(registry
        .categories()
        .iter()
        .filter(|c| letters.contains(&c.group().code()))
        .map(|c| c.index())
        .collect())
}
