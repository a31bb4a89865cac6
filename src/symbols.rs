use std::collections::HashMap;
use std::io;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::raw_data::{CONSONANTS, MODIFIERS, VOWELS};
use crate::{FeatError, FeatResult};

pub fn parse_csv_to_map<R: io::Read>(reader: R) -> Vec<HashMap<String, String>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = vec![];
    let headers = rdr.headers().unwrap().clone();
    for result in rdr.records() {
        let record = result.unwrap();
        let mut map = HashMap::new();
        for (header, value) in headers.iter().zip(record.iter()) {
            map.insert(header.to_string(), value.to_string());
        }
        records.push(map);
    }
    records
}

/// One decomposed phonetic segment: the matched text plus its feature value
/// per category. A category absent from `values` does not apply to this
/// symbol.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    representation: String,
    values: HashMap<String, String>,
    modifiers: SmallVec<[String; 4]>,
}

impl Symbol {
    pub fn new(
        representation: impl Into<String>,
        values: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            representation: representation.into(),
            values: values.into_iter().collect(),
            modifiers: SmallVec::new(),
        }
    }

    pub fn representation(&self) -> &str {
        &self.representation
    }

    pub fn value_for(&self, category: &str) -> Option<&str> {
        self.values.get(category).map(|v| v.as_str())
    }

    /// The modifier marks folded into this symbol, in input order.
    pub fn modifiers(&self) -> &[String] {
        &self.modifiers
    }

    fn attach(&mut self, representation: String, modifier: &Modifier) {
        self.representation.push_str(&representation);
        // First mark of a category wins.
        self.values
            .entry(modifier.category.clone())
            .or_insert_with(|| modifier.value.clone());
        self.modifiers.push(representation);
    }
}

/// The segmentation seam: turns a transcription into an ordered sequence of
/// symbols. Swap this out in tests or when plugging in another engine.
pub trait Decompose {
    fn decompose(&self, input: &str) -> FeatResult<Vec<Symbol>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    Previous,
    Next,
}

#[derive(Debug, Clone)]
struct Modifier {
    category: String,
    value: String,
    anchor: Anchor,
}

/// Built-in decomposer backed by the embedded symbol tables. Matching is
/// greedy: at each position the longest known base symbol or modifier wins,
/// so multi-codepoint entries like affricates and contour tones take
/// precedence over their prefixes.
#[derive(Debug, Clone)]
pub struct SymbolInventory {
    base: HashMap<String, HashMap<String, String>>,
    modifiers: HashMap<String, Modifier>,
    max_len: usize,
}

impl SymbolInventory {
    pub fn builtin() -> Self {
        let mut base = HashMap::new();
        Self::load_base(&mut base, VOWELS, "vowel", &["v_height", "v_backness", "v_roundness"]);
        Self::load_base(
            &mut base,
            CONSONANTS,
            "consonant",
            &["c_voicing", "c_place", "c_manner"],
        );

        let mut modifiers = HashMap::new();
        for record in parse_csv_to_map(MODIFIERS.as_bytes()) {
            let (Some(symbol), Some(category), Some(value)) = (
                record.get("symbol"),
                record.get("category"),
                record.get("value"),
            ) else {
                warn!("skipping malformed modifier row: {:?}", record);
                continue;
            };
            let anchor = if category == "s_stress" {
                Anchor::Next
            } else {
                Anchor::Previous
            };
            let modifier = Modifier {
                category: category.clone(),
                value: value.clone(),
                anchor,
            };
            if modifiers.insert(symbol.clone(), modifier).is_some() {
                warn!("modifier \"{}\" defined twice, keeping the later row", symbol);
            }
        }

        let max_len = base
            .keys()
            .chain(modifiers.keys())
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(0);
        debug!(
            "symbol inventory: {} base symbols, {} modifiers",
            base.len(),
            modifiers.len()
        );
        Self {
            base,
            modifiers,
            max_len,
        }
    }

    fn load_base(
        base: &mut HashMap<String, HashMap<String, String>>,
        table: &str,
        ptype: &str,
        categories: &[&str],
    ) {
        for record in parse_csv_to_map(table.as_bytes()) {
            let Some(symbol) = record.get("symbol") else {
                warn!("skipping row without a symbol: {:?}", record);
                continue;
            };
            let mut values = HashMap::with_capacity(categories.len() + 1);
            values.insert("ptype".to_string(), ptype.to_string());
            for cat in categories {
                if let Some(v) = record.get(*cat) {
                    values.insert(cat.to_string(), v.clone());
                }
            }
            if base.insert(symbol.clone(), values).is_some() {
                warn!("symbol \"{}\" defined twice, keeping the later row", symbol);
            }
        }
    }
}

enum Token<'a> {
    Base(&'a HashMap<String, String>),
    Modifier(&'a Modifier),
}

impl Decompose for SymbolInventory {
    fn decompose(&self, input: &str) -> FeatResult<Vec<Symbol>> {
        let chars: Vec<char> = input.chars().collect();
        let mut out: Vec<Symbol> = Vec::new();
        let mut pending: Option<(String, &Modifier)> = None;
        let mut pos = 0;
        while pos < chars.len() {
            if chars[pos].is_whitespace() {
                pos += 1;
                continue;
            }
            let limit = self.max_len.min(chars.len() - pos);
            let mut matched = None;
            for len in (1..=limit).rev() {
                let cand: String = chars[pos..pos + len].iter().collect();
                if let Some(m) = self.modifiers.get(&cand) {
                    matched = Some((len, cand, Token::Modifier(m)));
                    break;
                }
                if let Some(b) = self.base.get(&cand) {
                    matched = Some((len, cand, Token::Base(b)));
                    break;
                }
            }
            let Some((len, cand, token)) = matched else {
                return Err(FeatError::UnknownSymbol(chars[pos..].iter().collect()));
            };
            match token {
                Token::Base(values) => {
                    let mut symbol = Symbol {
                        representation: cand,
                        values: values.clone(),
                        modifiers: SmallVec::new(),
                    };
                    if let Some((mark, modifier)) = pending.take() {
                        symbol.attach(mark, modifier);
                    }
                    out.push(symbol);
                }
                Token::Modifier(modifier) => match modifier.anchor {
                    Anchor::Next => {
                        if pending.is_some() {
                            return Err(FeatError::OrphanModifier(cand));
                        }
                        pending = Some((cand, modifier));
                    }
                    Anchor::Previous => {
                        let Some(prev) = out.last_mut() else {
                            return Err(FeatError::OrphanModifier(cand));
                        };
                        prev.attach(cand, modifier);
                    }
                },
            }
            pos += len;
        }
        if let Some((mark, _)) = pending {
            return Err(FeatError::OrphanModifier(mark));
        }
        Ok(out)
    }
}
