use ndarray::{Array2, Array3};

use crate::registry::Registry;
use crate::symbols::Decompose;
use crate::{FeatError, FeatResult};

/// Batched feature indices plus the padding mask. `indices` has shape
/// (batch, max symbol count, categories); `padding` is true at real symbol
/// positions and false at padded ones. Padded index slots hold 0, a valid
/// but harmless index; downstream code must consult the mask.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatMatrix {
    pub indices: Array3<i64>,
    pub padding: Array2<bool>,
}

impl FeatMatrix {
    pub fn batch_size(&self) -> usize {
        self.indices.dim().0
    }

    pub fn max_len(&self) -> usize {
        self.indices.dim().1
    }

    pub fn num_categories(&self) -> usize {
        self.indices.dim().2
    }
}

/// Builds feature matrices from transcriptions, resolving every symbol's
/// value for every category against the registry.
pub struct FeatMatrixBuilder<'a, D> {
    registry: &'a Registry,
    decomposer: &'a D,
}

impl<'a, D: Decompose> FeatMatrixBuilder<'a, D> {
    pub fn new(registry: &'a Registry, decomposer: &'a D) -> Self {
        Self {
            registry,
            decomposer,
        }
    }

    /// Decomposes each input, resolves one feature index per category per
    /// symbol, and right-pads the batch to its longest sequence. With
    /// `return_global_index` the indices address the master collection
    /// (`"{category}/{value}"`); otherwise each index is local to its own
    /// category's collection. All-or-nothing: any unresolved value fails the
    /// whole call. An empty batch yields empty arrays, not an error.
    pub fn build<S: AsRef<str>>(
        &self,
        inputs: &[S],
        return_global_index: bool,
    ) -> FeatResult<FeatMatrix> {
        let num_cats = self.registry.num_categories();
        let mut batched: Vec<Vec<Vec<i64>>> = Vec::with_capacity(inputs.len());
        for input in inputs {
            let symbols = self.decomposer.decompose(input.as_ref())?;
            let mut rows = Vec::with_capacity(symbols.len());
            for symbol in &symbols {
                let mut row = Vec::with_capacity(num_cats);
                for cat in self.registry.categories().iter() {
                    // "none" marks a category that does not apply; feature
                    // names use underscores where descriptors use hyphens.
                    let raw = symbol.value_for(cat.name()).unwrap_or("none");
                    let value = raw.replace('-', "_");
                    let index = self
                        .resolve(cat.name(), &value, return_global_index)
                        .map_err(|_| FeatError::UnknownSymbolFeature {
                            symbol: symbol.representation().to_string(),
                            category: cat.name().to_string(),
                            value: value.clone(),
                        })?;
                    row.push(index as i64);
                }
                rows.push(row);
            }
            batched.push(rows);
        }

        let batch = batched.len();
        let max_len = batched.iter().map(|rows| rows.len()).max().unwrap_or(0);
        let mut indices = Array3::<i64>::zeros((batch, max_len, num_cats));
        let mut padding = Array2::<bool>::from_elem((batch, max_len), false);
        for (b, rows) in batched.iter().enumerate() {
            for (l, row) in rows.iter().enumerate() {
                padding[[b, l]] = true;
                for (c, &index) in row.iter().enumerate() {
                    indices[[b, l, c]] = index;
                }
            }
        }
        Ok(FeatMatrix { indices, padding })
    }

    fn resolve(&self, category: &str, value: &str, global: bool) -> FeatResult<usize> {
        let feature = if global {
            self.registry
                .phono()
                .by_name(&format!("{}/{}", category, value))?
        } else {
            self.registry.collection(category)?.by_name(value)?
        };
        Ok(feature.index())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::symbols::{Symbol, SymbolInventory};

    fn setup() -> (Registry, SymbolInventory) {
        let _ = env_logger::builder().is_test(true).try_init();
        (Registry::standard().unwrap(), SymbolInventory::builtin())
    }

    #[test]
    fn t_empty_batch() {
        let (registry, inv) = setup();
        let builder = FeatMatrixBuilder::new(&registry, &inv);
        let m = builder.build::<&str>(&[], true).unwrap();
        assert_eq!(m.indices.dim(), (0, 0, 14));
        assert_eq!(m.padding.dim(), (0, 0));
    }

    #[test]
    fn t_single_symbol() {
        let (registry, inv) = setup();
        let builder = FeatMatrixBuilder::new(&registry, &inv);
        let m = builder.build(&["a"], true).unwrap();
        assert_eq!(m.indices.dim(), (1, 1, 14));
        assert!(m.padding[[0, 0]]);
    }

    #[test]
    fn t_padding() {
        let (registry, inv) = setup();
        let builder = FeatMatrixBuilder::new(&registry, &inv);
        let m = builder.build(&["pa", "m"], true).unwrap();
        assert_eq!(m.indices.dim(), (2, 2, 14));
        assert!(m.padding[[0, 0]]);
        assert!(m.padding[[0, 1]]);
        assert!(m.padding[[1, 0]]);
        assert!(!m.padding[[1, 1]]);
        for c in 0..14 {
            assert_eq!(m.indices[[1, 1, c]], 0);
        }
    }

    #[test]
    fn t_global_vs_local() {
        let (registry, inv) = setup();
        let builder = FeatMatrixBuilder::new(&registry, &inv);
        let global = builder.build(&["p"], true).unwrap();
        let local = builder.build(&["p"], false).unwrap();

        let voicing = registry.categories().by_name("c_voicing").unwrap().index();
        let expected_local = registry
            .collection("c_voicing")
            .unwrap()
            .by_name("voiceless")
            .unwrap()
            .index();
        let expected_global = registry
            .phono()
            .by_name("c_voicing/voiceless")
            .unwrap()
            .index();
        assert_eq!(local.indices[[0, 0, voicing]], expected_local as i64);
        assert_eq!(global.indices[[0, 0, voicing]], expected_global as i64);
        assert_ne!(expected_local, expected_global);
    }

    #[test]
    fn t_hyphen_normalization() {
        let (registry, inv) = setup();
        let builder = FeatMatrixBuilder::new(&registry, &inv);
        // "f" carries the hyphenated descriptor "non-sibilant-fricative".
        let m = builder.build(&["f"], true).unwrap();
        let manner = registry.categories().by_name("c_manner").unwrap().index();
        let expected = registry
            .phono()
            .by_name("c_manner/non_sibilant_fricative")
            .unwrap()
            .index();
        assert_eq!(m.indices[[0, 0, manner]], expected as i64);
    }

    #[test]
    fn t_none_sentinel_for_inapplicable() {
        let (registry, inv) = setup();
        let builder = FeatMatrixBuilder::new(&registry, &inv);
        // A vowel has no consonant place; the slot resolves to the sentinel.
        let m = builder.build(&["a"], true).unwrap();
        let place = registry.categories().by_name("c_place").unwrap().index();
        let expected = registry.phono().by_name("c_place/none").unwrap().index();
        assert_eq!(m.indices[[0, 0, place]], expected as i64);

        let m = builder.build(&["a"], false).unwrap();
        assert_eq!(m.indices[[0, 0, place]], 0);
    }

    struct BogusDecomposer;

    impl Decompose for BogusDecomposer {
        fn decompose(&self, input: &str) -> FeatResult<Vec<Symbol>> {
            Ok(vec![Symbol::new(
                input,
                [
                    ("ptype".to_string(), "consonant".to_string()),
                    ("c_manner".to_string(), "warbled".to_string()),
                ],
            )])
        }
    }

    #[test]
    fn t_unknown_symbol_feature() {
        let (registry, _) = setup();
        let bogus = BogusDecomposer;
        let builder = FeatMatrixBuilder::new(&registry, &bogus);
        let err = builder.build(&["x"], true).unwrap_err();
        assert_eq!(
            err,
            FeatError::UnknownSymbolFeature {
                symbol: "x".to_string(),
                category: "c_manner".to_string(),
                value: "warbled".to_string(),
            }
        );
        // Local lookup fails the same way.
        assert!(matches!(
            builder.build(&["x"], false),
            Err(FeatError::UnknownSymbolFeature { .. })
        ));
    }

    #[test]
    fn t_stress_resolves() {
        let (registry, inv) = setup();
        let builder = FeatMatrixBuilder::new(&registry, &inv);
        let m = builder.build(&["ˈpa"], true).unwrap();
        let stress = registry.categories().by_name("s_stress").unwrap().index();
        let expected = registry
            .phono()
            .by_name("s_stress/primary_stress")
            .unwrap()
            .index();
        assert_eq!(m.indices[[0, 0, stress]], expected as i64);
    }
}
