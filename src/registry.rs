use std::collections::{HashMap, HashSet};
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::raw_data::FEATURES;
use crate::{FeatError, FeatResult};

/// Name of the collection holding the categories themselves.
pub const CATEGORY_COLLECTION: &str = "category";
/// Name of the chained collection holding every feature of every category.
pub const PHONO_COLLECTION: &str = "phono";

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Group {
    Ptype,
    Consonant,
    Vowel,
    Diacritic,
    Suprasegmental,
    Tone,
}

impl Group {
    pub fn code(&self) -> char {
        match self {
            Group::Ptype => 'p',
            Group::Consonant => 'c',
            Group::Vowel => 'v',
            Group::Diacritic => 'd',
            Group::Suprasegmental => 's',
            Group::Tone => 't',
        }
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Derives the feature group from a category name. The literal `ptype` maps
/// to its own group; any other name must start with one of `c v d s t`.
pub fn derive_group(name: &str) -> FeatResult<Group> {
    if name == "ptype" {
        return Ok(Group::Ptype);
    }
    match name.chars().next() {
        Some('c') => Ok(Group::Consonant),
        Some('v') => Ok(Group::Vowel),
        Some('d') => Ok(Group::Diacritic),
        Some('s') => Ok(Group::Suprasegmental),
        Some('t') => Ok(Group::Tone),
        _ => Err(FeatError::InvalidGroup(name.to_string())),
    }
}

/// A category descriptor, not yet placed in any collection.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CategorySpec {
    name: String,
    group: Group,
}

impl CategorySpec {
    pub fn new(name: impl Into<String>) -> FeatResult<Self> {
        let name = name.into();
        let group = derive_group(&name)?;
        Ok(Self { name, group })
    }
}

/// A feature descriptor, not yet placed in any collection.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct FeatureSpec {
    category: String,
    name: String,
}

impl FeatureSpec {
    pub fn new(category: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
        }
    }
}

/// A category with its index assigned. Immutable once constructed; only an
/// [`OrderedCollection`] creates these, so the index is set exactly once.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Category {
    name: String,
    group: Group,
    index: usize,
}

impl Category {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> Group {
        self.group
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

/// A feature with its index assigned. `category` is the name of the owning
/// category, kept as a plain string back-reference.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    category: String,
    name: String,
    index: usize,
}

impl Feature {
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

/// Items an [`OrderedCollection`] can hold. `from_spec` turns a descriptor
/// into an indexed record; `reindexed` is the rename-and-reindex constructor
/// used when chaining collections.
pub trait CollectionItem: Clone {
    type Spec;

    fn from_spec(spec: Self::Spec, index: usize) -> Self;
    fn name(&self) -> &str;
    fn index(&self) -> usize;
    fn reindexed(&self, name: String, index: usize) -> Self;
}

impl CollectionItem for Category {
    type Spec = CategorySpec;

    fn from_spec(spec: CategorySpec, index: usize) -> Self {
        Self {
            name: spec.name,
            group: spec.group,
            index,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn index(&self) -> usize {
        self.index
    }

    fn reindexed(&self, name: String, index: usize) -> Self {
        Self {
            name,
            group: self.group,
            index,
        }
    }
}

impl CollectionItem for Feature {
    type Spec = FeatureSpec;

    fn from_spec(spec: FeatureSpec, index: usize) -> Self {
        Self {
            category: spec.category,
            name: spec.name,
            index,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn index(&self) -> usize {
        self.index
    }

    fn reindexed(&self, name: String, index: usize) -> Self {
        Self {
            category: self.category.clone(),
            name,
            index,
        }
    }
}

/// An immutable, order-preserving, named sequence of categories or features
/// with O(1) lookup by position or by name. Indices are assigned 0..len-1 in
/// input order when the collection is built; descriptors are consumed by
/// value, so an indexed item can never end up in a second collection.
#[derive(Debug, Clone)]
pub struct OrderedCollection<T: CollectionItem> {
    name: String,
    items: Vec<T>,
    by_name: HashMap<String, usize>,
}

impl<T: CollectionItem> OrderedCollection<T> {
    pub fn new(name: impl Into<String>, specs: Vec<T::Spec>) -> FeatResult<Self> {
        let name = name.into();
        let mut items = Vec::with_capacity(specs.len());
        let mut by_name = HashMap::with_capacity(specs.len());
        for (index, spec) in specs.into_iter().enumerate() {
            let item = T::from_spec(spec, index);
            if by_name.insert(item.name().to_string(), index).is_some() {
                return Err(FeatError::DuplicateItemName {
                    collection: name,
                    item: item.name().to_string(),
                });
            }
            items.push(item);
        }
        Ok(Self {
            name,
            items,
            by_name,
        })
    }

    /// Concatenates `parts` into a new collection. Every item is copied with
    /// a composed name `"{source_collection}/{item}"` and a fresh index; the
    /// source collections are left untouched.
    pub fn chain<'a, I>(name: impl Into<String>, parts: I) -> FeatResult<Self>
    where
        T: 'a,
        I: IntoIterator<Item = &'a OrderedCollection<T>>,
    {
        let name = name.into();
        let mut items = Vec::new();
        let mut by_name = HashMap::new();
        for part in parts {
            for item in &part.items {
                let composed = format!("{}/{}", part.name, item.name());
                let index = items.len();
                if by_name.insert(composed.clone(), index).is_some() {
                    return Err(FeatError::DuplicateItemName {
                        collection: name,
                        item: composed,
                    });
                }
                items.push(item.reindexed(composed, index));
            }
        }
        Ok(Self {
            name,
            items,
            by_name,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> FeatResult<&T> {
        self.items.get(index).ok_or_else(|| FeatError::IndexOutOfRange {
            collection: self.name.clone(),
            index,
            len: self.items.len(),
        })
    }

    pub fn by_name(&self, name: &str) -> FeatResult<&T> {
        self.by_name
            .get(name)
            .map(|&i| &self.items[i])
            .ok_or_else(|| FeatError::UnknownName {
                collection: self.name.clone(),
                name: name.to_string(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

/// The directory of collections. Owns the category collection, one feature
/// collection per category, and the chained master collection. Built once,
/// read-only afterwards; thread through (or wrap in an `Arc`) instead of
/// reaching for globals.
#[derive(Debug, Clone)]
pub struct Registry {
    categories: OrderedCollection<Category>,
    feature_sets: HashMap<String, OrderedCollection<Feature>>,
    phono: OrderedCollection<Feature>,
}

impl Registry {
    /// Assembles a registry from a category collection and one feature
    /// collection per category, given in category order with matching names.
    /// The master collection is chained from the feature sets in that order.
    pub fn new(
        categories: OrderedCollection<Category>,
        feature_sets: Vec<OrderedCollection<Feature>>,
    ) -> FeatResult<Self> {
        for (i, cat) in categories.iter().enumerate() {
            match feature_sets.get(i) {
                Some(set) if set.name() == cat.name() => {}
                _ => return Err(FeatError::UnknownCollection(cat.name().to_string())),
            }
        }
        if let Some(extra) = feature_sets.get(categories.len()) {
            return Err(FeatError::UnknownCollection(extra.name().to_string()));
        }

        let phono = OrderedCollection::chain(PHONO_COLLECTION, feature_sets.iter())?;

        let mut reserved: HashSet<&str> =
            [categories.name(), PHONO_COLLECTION].into_iter().collect();
        for set in &feature_sets {
            if !reserved.insert(set.name()) {
                return Err(FeatError::DuplicateCollectionName(set.name().to_string()));
            }
        }

        let feature_sets = feature_sets
            .into_iter()
            .map(|set| (set.name().to_string(), set))
            .collect();
        Ok(Self {
            categories,
            feature_sets,
            phono,
        })
    }

    /// The fixed catalogue: 14 categories with their feature lists, chained
    /// into the master collection in category order.
    pub fn standard() -> FeatResult<Self> {
        let category_specs = FEATURES
            .iter()
            .map(|(name, _)| CategorySpec::new(*name))
            .collect::<FeatResult<Vec<_>>>()?;
        let categories = OrderedCollection::new(CATEGORY_COLLECTION, category_specs)?;

        let mut feature_sets = Vec::with_capacity(FEATURES.len());
        for (cat_name, feat_names) in FEATURES {
            let specs = feat_names
                .iter()
                .map(|f| FeatureSpec::new(*cat_name, *f))
                .collect();
            feature_sets.push(OrderedCollection::new(*cat_name, specs)?);
        }

        let registry = Self::new(categories, feature_sets)?;
        debug!(
            "registry built: {} categories, {} features ({})",
            registry.num_categories(),
            registry.num_features(),
            registry.categories.iter().map(|c| c.name()).join(", ")
        );
        Ok(registry)
    }

    pub fn categories(&self) -> &OrderedCollection<Category> {
        &self.categories
    }

    /// Looks up a per-category feature collection by name. The category and
    /// master collections have their own accessors.
    pub fn collection(&self, name: &str) -> FeatResult<&OrderedCollection<Feature>> {
        self.feature_sets
            .get(name)
            .ok_or_else(|| FeatError::UnknownCollection(name.to_string()))
    }

    pub fn phono(&self) -> &OrderedCollection<Feature> {
        &self.phono
    }

    pub fn num_categories(&self) -> usize {
        self.categories.len()
    }

    /// Total feature count across all categories, i.e. the size of the
    /// global index space.
    pub fn num_features(&self) -> usize {
        self.phono.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn feats(collection: &str, names: &[&str]) -> OrderedCollection<Feature> {
        OrderedCollection::new(
            collection,
            names
                .iter()
                .map(|n| FeatureSpec::new(collection, *n))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn t_indices_in_order() {
        let coll = feats("c_voicing", &["none", "voiced", "voiceless"]);
        assert_eq!(coll.len(), 3);
        for (i, name) in ["none", "voiced", "voiceless"].iter().enumerate() {
            let item = coll.get(i).unwrap();
            assert_eq!(item.index(), i);
            assert_eq!(item.name(), *name);
        }
        assert!(matches!(
            coll.get(3),
            Err(FeatError::IndexOutOfRange { index: 3, len: 3, .. })
        ));
    }

    #[test]
    fn t_name_lookup() {
        let coll = feats("c_voicing", &["none", "voiced", "voiceless"]);
        let voiced = coll.by_name("voiced").unwrap();
        assert_eq!(voiced.index(), 1);
        assert_eq!(voiced.category(), "c_voicing");
        assert!(std::ptr::eq(voiced, coll.get(1).unwrap()));
        assert!(matches!(
            coll.by_name("nasalized"),
            Err(FeatError::UnknownName { .. })
        ));
    }

    #[test]
    fn t_duplicate_item() {
        let result = OrderedCollection::<Feature>::new(
            "v_roundness",
            vec![
                FeatureSpec::new("v_roundness", "rounded"),
                FeatureSpec::new("v_roundness", "rounded"),
            ],
        );
        assert!(matches!(result, Err(FeatError::DuplicateItemName { .. })));
    }

    #[test]
    fn t_chain() {
        let a = feats("ptype", &["consonant", "vowel"]);
        let b = feats("c_voicing", &["none", "voiced", "voiceless"]);
        let chained = OrderedCollection::chain("all", [&a, &b]).unwrap();
        assert_eq!(chained.len(), 5);
        assert_eq!(chained.get(0).unwrap().name(), "ptype/consonant");
        // The first item of the second segment sits at len(a).
        let first_b = chained.by_name("c_voicing/none").unwrap();
        assert_eq!(first_b.index(), a.len());
        assert_eq!(first_b.category(), "c_voicing");
        // Sources keep their own local indices.
        assert_eq!(b.by_name("none").unwrap().index(), 0);
    }

    #[test]
    fn t_duplicate_collection() {
        // A category named like the category collection itself collides in
        // the directory.
        let categories = OrderedCollection::new(
            CATEGORY_COLLECTION,
            vec![CategorySpec::new(CATEGORY_COLLECTION).unwrap()],
        )
        .unwrap();
        let sets = vec![feats(CATEGORY_COLLECTION, &["none"])];
        assert!(matches!(
            Registry::new(categories, sets),
            Err(FeatError::DuplicateCollectionName(n)) if n == CATEGORY_COLLECTION
        ));
    }

    #[test]
    fn t_missing_feature_set() {
        let categories = OrderedCollection::new(
            CATEGORY_COLLECTION,
            vec![
                CategorySpec::new("ptype").unwrap(),
                CategorySpec::new("c_voicing").unwrap(),
            ],
        )
        .unwrap();
        let sets = vec![feats("ptype", &["consonant", "vowel"])];
        assert!(matches!(
            Registry::new(categories, sets),
            Err(FeatError::UnknownCollection(n)) if n == "c_voicing"
        ));
    }

    #[test]
    fn t_derive_group() {
        assert_eq!(derive_group("ptype").unwrap(), Group::Ptype);
        assert_eq!(derive_group("c_voicing").unwrap(), Group::Consonant);
        assert_eq!(derive_group("v_height").unwrap(), Group::Vowel);
        assert_eq!(derive_group("diacritics").unwrap(), Group::Diacritic);
        assert_eq!(derive_group("s_break").unwrap(), Group::Suprasegmental);
        assert_eq!(derive_group("t_level").unwrap(), Group::Tone);
        assert!(matches!(
            derive_group("x_bogus"),
            Err(FeatError::InvalidGroup(_))
        ));
    }

    #[test]
    fn t_standard_counts() {
        let registry = Registry::standard().unwrap();
        assert_eq!(registry.num_categories(), 14);
        assert_eq!(registry.num_features(), 113);
        assert_eq!(registry.categories().get(0).unwrap().name(), "ptype");
        assert_eq!(registry.categories().get(13).unwrap().name(), "t_global");
    }

    #[test]
    fn t_none_sentinel() {
        let registry = Registry::standard().unwrap();
        for cat in registry.categories().iter() {
            let coll = registry.collection(cat.name()).unwrap();
            if cat.name() == "ptype" {
                assert!(coll.by_name("none").is_err());
            } else {
                assert_eq!(coll.by_name("none").unwrap().index(), 0);
            }
        }
    }

    #[test]
    fn t_global_vs_local() {
        let registry = Registry::standard().unwrap();
        // ptype has 2 features, so c_voicing starts at global index 2.
        let global = registry.phono().by_name("c_voicing/voiced").unwrap();
        assert_eq!(global.index(), 3);
        let local = registry
            .collection("c_voicing")
            .unwrap()
            .by_name("voiced")
            .unwrap();
        assert_eq!(local.index(), 1);
    }

    #[test]
    fn t_serde() {
        let registry = Registry::standard().unwrap();
        let feat = registry.phono().by_name("v_height/close_mid").unwrap();
        let json = serde_json::to_string(feat).unwrap();
        let back: Feature = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, feat);
    }
}
