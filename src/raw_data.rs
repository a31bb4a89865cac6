pub use features::*;
pub use inventory::*;

mod features {
    /// Feature names per category, in registry order. Every list starts with
    /// the "none" sentinel except `ptype`, which is always applicable.
    pub const FEATURES: &[(&str, &[&str])] = &[
        ("ptype", &["consonant", "vowel"]),
        // Available for consonants.
        ("c_voicing", &["none", "voiced", "voiceless"]),
        (
            "c_place",
            &[
                "none",
                "alveolar",
                "alveolo_palatal",
                "bilabial",
                "dental",
                "glottal",
                "labio_alveolar",
                "labio_dental",
                "labio_palatal",
                "labio_velar",
                "palatal",
                "palato_alveolar",
                "palato_alveolo_velar",
                "pharyngeal",
                "retroflex",
                "uvular",
                "velar",
            ],
        ),
        (
            "c_manner",
            &[
                "none",
                "approximant",
                "click",
                "ejective",
                "ejective_affricate",
                "ejective_fricative",
                "flap",
                "implosive",
                "lateral_affricate",
                "lateral_approximant",
                "lateral_click",
                "lateral_ejective_affricate",
                "lateral_flap",
                "lateral_fricative",
                "nasal",
                "non_sibilant_affricate",
                "non_sibilant_fricative",
                "plosive",
                "sibilant_affricate",
                "sibilant_fricative",
                "trill",
            ],
        ),
        // Available for vowels.
        (
            "v_height",
            &[
                "none",
                "close",
                "close_mid",
                "mid",
                "near_close",
                "near_open",
                "open",
                "open_mid",
            ],
        ),
        (
            "v_backness",
            &["none", "back", "central", "front", "near_back", "near_front"],
        ),
        ("v_roundness", &["none", "rounded", "unrounded"]),
        (
            "diacritics",
            &[
                "none",
                "advanced",
                "advanced_tongue_root",
                "apical",
                "aspirated",
                "breathy_voiced",
                "centralized",
                "creaky_voiced",
                "labialized",
                "laminal",
                "lateral_release",
                "less_rounded",
                "lowered",
                "more_rounded",
                "nasalized",
                "no_audible_release",
                "non_syllabic",
                "palatalized",
                "pharyngealized",
                "raised",
                "retracted",
                "retracted_tongue_root",
                "rhotacized",
                "syllabic",
                "tie_bar_above",
                "tie_bar_below",
                "velarized",
            ],
        ),
        // Available for suprasegmentals.
        ("s_stress", &["none", "primary_stress"]),
        ("s_length", &["none", "extra_short", "half_long", "long"]),
        ("s_break", &["none", "linking", "syllable_break", "word_break"]),
        // Available for tones.
        (
            "t_level",
            &[
                "none",
                "extra_high_level",
                "extra_low_level",
                "high_level",
                "low_level",
                "mid_level",
            ],
        ),
        (
            "t_contour",
            &[
                "none",
                "falling_contour",
                "high_mid_falling_contour",
                "high_rising_contour",
                "low_rising_contour",
                "mid_low_falling_contour",
                "rising_contour",
                "rising_falling_contour",
            ],
        ),
        ("t_global", &["none", "downstep"]),
    ];
}

mod inventory {
    // Feature values below are hyphenated the way IPA descriptor strings
    // usually come; the matrix builder normalizes hyphens to underscores
    // before registry lookup.

    pub const VOWELS: &str = "\
symbol,v_height,v_backness,v_roundness
i,close,front,unrounded
y,close,front,rounded
ɨ,close,central,unrounded
ʉ,close,central,rounded
ɯ,close,back,unrounded
u,close,back,rounded
ɪ,near-close,near-front,unrounded
ʏ,near-close,near-front,rounded
ʊ,near-close,near-back,rounded
e,close-mid,front,unrounded
ø,close-mid,front,rounded
ɘ,close-mid,central,unrounded
ɵ,close-mid,central,rounded
ɤ,close-mid,back,unrounded
o,close-mid,back,rounded
ə,mid,central,unrounded
ɛ,open-mid,front,unrounded
œ,open-mid,front,rounded
ɜ,open-mid,central,unrounded
ɞ,open-mid,central,rounded
ʌ,open-mid,back,unrounded
ɔ,open-mid,back,rounded
æ,near-open,front,unrounded
ɐ,near-open,central,unrounded
a,open,front,unrounded
ɶ,open,front,rounded
ɑ,open,back,unrounded
ɒ,open,back,rounded";

    pub const CONSONANTS: &str = "\
symbol,c_voicing,c_place,c_manner
m,voiced,bilabial,nasal
n,voiced,alveolar,nasal
ɳ,voiced,retroflex,nasal
ɲ,voiced,palatal,nasal
ŋ,voiced,velar,nasal
ɴ,voiced,uvular,nasal
p,voiceless,bilabial,plosive
b,voiced,bilabial,plosive
t,voiceless,alveolar,plosive
d,voiced,alveolar,plosive
ʈ,voiceless,retroflex,plosive
ɖ,voiced,retroflex,plosive
c,voiceless,palatal,plosive
ɟ,voiced,palatal,plosive
k,voiceless,velar,plosive
g,voiced,velar,plosive
q,voiceless,uvular,plosive
ɢ,voiced,uvular,plosive
ʔ,voiceless,glottal,plosive
ts,voiceless,alveolar,sibilant-affricate
dz,voiced,alveolar,sibilant-affricate
tʃ,voiceless,palato-alveolar,sibilant-affricate
dʒ,voiced,palato-alveolar,sibilant-affricate
tɕ,voiceless,alveolo-palatal,sibilant-affricate
dʑ,voiced,alveolo-palatal,sibilant-affricate
ɸ,voiceless,bilabial,non-sibilant-fricative
β,voiced,bilabial,non-sibilant-fricative
f,voiceless,labio-dental,non-sibilant-fricative
v,voiced,labio-dental,non-sibilant-fricative
θ,voiceless,dental,non-sibilant-fricative
ð,voiced,dental,non-sibilant-fricative
s,voiceless,alveolar,sibilant-fricative
z,voiced,alveolar,sibilant-fricative
ʃ,voiceless,palato-alveolar,sibilant-fricative
ʒ,voiced,palato-alveolar,sibilant-fricative
ɕ,voiceless,alveolo-palatal,sibilant-fricative
ʑ,voiced,alveolo-palatal,sibilant-fricative
ʂ,voiceless,retroflex,sibilant-fricative
ʐ,voiced,retroflex,sibilant-fricative
ç,voiceless,palatal,non-sibilant-fricative
ʝ,voiced,palatal,non-sibilant-fricative
x,voiceless,velar,non-sibilant-fricative
ɣ,voiced,velar,non-sibilant-fricative
χ,voiceless,uvular,non-sibilant-fricative
ʁ,voiced,uvular,non-sibilant-fricative
ħ,voiceless,pharyngeal,non-sibilant-fricative
ʕ,voiced,pharyngeal,non-sibilant-fricative
h,voiceless,glottal,non-sibilant-fricative
ɦ,voiced,glottal,non-sibilant-fricative
ʋ,voiced,labio-dental,approximant
ɹ,voiced,alveolar,approximant
ɻ,voiced,retroflex,approximant
j,voiced,palatal,approximant
ɰ,voiced,velar,approximant
w,voiced,labio-velar,approximant
ɾ,voiced,alveolar,flap
ɽ,voiced,retroflex,flap
ʙ,voiced,bilabial,trill
r,voiced,alveolar,trill
ʀ,voiced,uvular,trill
ɬ,voiceless,alveolar,lateral-fricative
ɮ,voiced,alveolar,lateral-fricative
l,voiced,alveolar,lateral-approximant
ɭ,voiced,retroflex,lateral-approximant
ʎ,voiced,palatal,lateral-approximant
ʟ,voiced,velar,lateral-approximant
ɺ,voiced,alveolar,lateral-flap
ɓ,voiced,bilabial,implosive
ɗ,voiced,alveolar,implosive
ʄ,voiced,palatal,implosive
ɠ,voiced,velar,implosive
ʘ,voiceless,bilabial,click
ǀ,voiceless,dental,click
ǃ,voiceless,alveolar,click";

    /// Marks that attach to a base symbol instead of standing on their own.
    /// The primary-stress mark anchors to the symbol after it; everything
    /// else anchors to the symbol before it.
    pub const MODIFIERS: &str = "\
symbol,category,value
ʰ,diacritics,aspirated
ʷ,diacritics,labialized
ʲ,diacritics,palatalized
ˠ,diacritics,velarized
ˤ,diacritics,pharyngealized
̃,diacritics,nasalized
̩,diacritics,syllabic
̯,diacritics,non-syllabic
̤,diacritics,breathy-voiced
̰,diacritics,creaky-voiced
˞,diacritics,rhotacized
ː,s_length,long
ˑ,s_length,half-long
̆,s_length,extra-short
.,s_break,syllable-break
|,s_break,word-break
‿,s_break,linking
ˈ,s_stress,primary-stress
˥,t_level,extra-high-level
˦,t_level,high-level
˧,t_level,mid-level
˨,t_level,low-level
˩,t_level,extra-low-level
˥˩,t_contour,falling-contour
˩˥,t_contour,rising-contour
˧˥,t_contour,high-rising-contour
˩˧,t_contour,low-rising-contour
˥˧,t_contour,high-mid-falling-contour
˧˩,t_contour,mid-low-falling-contour
˩˥˩,t_contour,rising-falling-contour
ꜜ,t_global,downstep";
}
